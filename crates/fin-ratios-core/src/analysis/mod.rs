//! The ratio engine: a declarative catalog of ratios, threshold-based
//! bilingual interpretation, and the single pass that turns one period's
//! statement into the full result table.

pub mod catalog;
pub mod engine;
pub mod interpret;

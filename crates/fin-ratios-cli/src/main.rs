mod commands;
mod input;
mod output;
mod text;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::guide::GuideArgs;
use commands::ratios::RatiosArgs;

/// Bilingual financial-statement ratio analysis
#[derive(Parser)]
#[command(
    name = "finr",
    version,
    about = "Financial statement ratio analysis",
    long_about = "Computes standard liquidity, leverage, profitability, efficiency, \
                  and market ratios from financial statement figures at decimal \
                  precision, with bilingual equations, interpretations, and \
                  improvement suggestions."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Language for table and guide rendering
    #[arg(long, default_value = "en", global = true)]
    lang: Lang,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the full ratio catalog for one or more periods
    Ratios(RatiosArgs),
    /// Show the plain-language explanation and improvement suggestion for a ratio
    Guide(GuideArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Lang {
    En,
    Ar,
    Both,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ratios(args) => commands::ratios::run(args, cli.output, cli.lang),
        Commands::Guide(args) => commands::guide::run(args, cli.output, cli.lang),
        Commands::Version => {
            println!("finr {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}

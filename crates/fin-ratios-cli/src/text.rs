//! Static bilingual companion text joined to results by canonical ratio
//! id: a plain-language simplified view and a suggested improvement per
//! ratio. External content by design; the engine never reads these.

use fin_ratios_core::{RatioId, Text};

/// Plain-language explanation of what the ratio tells a non-specialist.
pub fn simplified_view(id: RatioId) -> Text {
    match id {
        RatioId::CurrentRatio => Text::new(
            "هذه النسبة توضح إذا كانت الشركة تملك ما يكفي من الأصول المتداولة (النقدية + المدينون + المخزون) لسداد التزاماتها القصيرة (الدائنون + القروض قصيرة الأجل). كلما ارتفعت كان الوضع أفضل.",
            "Measures whether current assets (cash + receivables + inventory) are enough to cover short-term liabilities (payables + short-term loans). The higher, the safer.",
        ),
        RatioId::QuickRatio => Text::new(
            "مثل نسبة التداول لكن تستبعد المخزون (لأنه قد يستغرق وقتًا للتحويل لنقد). تقيس قدرة الشركة على الوفاء بالتزاماتها باستخدام النقدية والذمم المدينة فقط.",
            "Like the current ratio but excludes inventory (as it may take time to convert). Focuses on cash and receivables to cover short-term obligations.",
        ),
        RatioId::CashRatio => Text::new(
            "أدق مقياس للسيولة، يقارن النقد والنقد المعادل فقط مع الخصوم المتداولة. إذا كان منخفضًا جدًا فهذا يشير إلى مخاطر في السداد الفوري.",
            "Strict liquidity test that compares only cash and cash equivalents with current liabilities. A very low ratio may indicate immediate liquidity risk.",
        ),
        RatioId::DebtRatio => Text::new(
            "يقيس نسبة الأصول الممولة بالديون (القروض قصيرة وطويلة الأجل) مقارنة بإجمالي الأصول. إذا زادت عن 60% فهذا قد يشكل عبئًا ماليًا على الشركة.",
            "Shows how much of assets are financed by debt (short and long-term loans). Above 60% can be financially risky.",
        ),
        RatioId::GrossMargin => Text::new(
            "يقيس الربح الإجمالي (الإيرادات - تكلفة المبيعات) مقارنة بالمبيعات. ارتفاعه يعني كفاءة في التسعير أو الإنتاج.",
            "Gross profit (revenue - cost of goods sold) compared to sales. A higher margin means better pricing or efficiency.",
        ),
        RatioId::OperatingMargin => Text::new(
            "يقيس نسبة الربح بعد خصم المصاريف التشغيلية (الإيجارات + الرواتب + المصاريف الإدارية). يعطي فكرة عن كفاءة الإدارة.",
            "Profit after operating expenses (rent + salaries + admin expenses). Reflects management efficiency.",
        ),
        RatioId::NetProfitMargin => Text::new(
            "النسبة النهائية للربح بعد جميع المصاريف (التشغيلية + التمويلية + الضريبة). توضح كم يبقى من كل وحدة مبيعات كربح صافٍ.",
            "Final profit after all expenses (operating + financing + taxes). Shows how much remains from each unit of sales.",
        ),
        RatioId::ReturnOnEquity => Text::new(
            "يقيس العائد الذي يحصل عليه الملاك على استثماراتهم. ارتفاعه مؤشر إيجابي للمستثمرين.",
            "Measures the return shareholders get on their equity investment. Higher is better for investors.",
        ),
        RatioId::ReturnOnAssets => Text::new(
            "هل الأصول (المباني + المعدات + النقدية) تحقق عائدًا جيدًا؟ كلما ارتفعت النسبة زادت كفاءة استغلال الأصول.",
            "Are assets (buildings + equipment + cash) generating a good return? Higher means more efficient use of assets.",
        ),
        RatioId::BasicEarningsPower => Text::new(
            "يقيس قدرة الأصول على توليد أرباح تشغيلية قبل الفوائد والضرائب. يعطي صورة عن قوة النشاط الأساسي.",
            "Measures assets' ability to generate operating profit before interest and tax. Reflects the strength of the core business.",
        ),
        RatioId::CashConversion => Text::new(
            "يقارن بين الأرباح المحاسبية والتدفق النقدي من التشغيل. إذا كان منخفضًا فقد يعني أن الأرباح ليست نقدية فعلًا.",
            "Compares net income against operating cash flow. A low ratio may mean profits are not turning into actual cash.",
        ),
        RatioId::DebtToEquity => Text::new(
            "يقيس اعتماد الشركة على الديون مقارنة بحقوق الملاك. ارتفاعه يعني مخاطر أكبر على الاستقرار المالي.",
            "Measures reliance on debt versus equity. A higher ratio means higher financial risk.",
        ),
        RatioId::InterestCoverage => Text::new(
            "يوضح إذا كانت أرباح التشغيل تكفي لتغطية مصروفات الفوائد. إذا كان أقل من 1 فالشركة في خطر كبير.",
            "Tells whether operating profits are enough to cover interest expenses. Below 1 means financial distress.",
        ),
        RatioId::InventoryTurnover => Text::new(
            "يوضح كم مرة يتم بيع وتجديد المخزون خلال السنة. كلما ارتفع يعني أن البضاعة تتحرك بسرعة.",
            "Shows how many times inventory is sold and replaced in a year. Higher means a faster sales cycle.",
        ),
        RatioId::ReceivableTurnover => Text::new(
            "يقيس سرعة تحصيل المدينين (العملاء). ارتفاعه يعني أن الشركة تجمع أموالها بسرعة.",
            "Measures how fast receivables (customers) are collected. Higher means faster collection.",
        ),
        RatioId::FixedAssetTurnover => Text::new(
            "يقيس كفاءة الأصول الثابتة (المصانع + المعدات) في توليد المبيعات.",
            "Efficiency of fixed assets (plants + equipment) in generating sales.",
        ),
        RatioId::EarningsPerShare => Text::new(
            "نصيب كل سهم من صافي الربح. يساعد المستثمرين في تقييم العائد من امتلاك سهم واحد.",
            "Portion of net income allocated to each share. Useful for investors to assess the return per share.",
        ),
        RatioId::PayoutRatio => Text::new(
            "يوضح نسبة الأرباح الموزعة نقدًا على المساهمين من صافي الربح. كلما ارتفعت زاد رضا المساهمين، لكن يقل التمويل المتاح للنمو.",
            "Shows the portion of net income paid out as dividends. Higher means happier shareholders but less reinvestment.",
        ),
    }
}

/// Suggested levers for improving the ratio.
pub fn improvement(id: RatioId) -> Text {
    match id {
        RatioId::CurrentRatio => Text::new(
            "زيادة الأصول المتداولة (النقدية + المدينون + المخزون) أو خفض الخصوم قصيرة الأجل (الدائنون + القروض قصيرة الأجل).",
            "Increase current assets (cash + receivables + inventory) or reduce short-term liabilities (payables + short-term loans).",
        ),
        RatioId::QuickRatio => Text::new(
            "زيادة النقدية أو الذمم المدينة لتغطية الخصوم الفورية، مع تقليل الاعتماد على المخزون.",
            "Improve cash or receivables to cover immediate liabilities and reduce reliance on inventory.",
        ),
        RatioId::CashRatio => Text::new(
            "الحفاظ على احتياطي نقدي كافٍ لتغطية الالتزامات السريعة.",
            "Maintain sufficient cash reserves to meet urgent obligations.",
        ),
        RatioId::DebtRatio => Text::new(
            "تقليل الاعتماد على الديون وزيادة التمويل الذاتي.",
            "Reduce reliance on debt and increase equity financing.",
        ),
        RatioId::GrossMargin => Text::new(
            "تحسين المبيعات أو خفض تكلفة المبيعات.",
            "Enhance sales revenue or reduce the cost of goods sold.",
        ),
        RatioId::OperatingMargin => Text::new(
            "تقليل المصاريف التشغيلية (الإيجارات + الرواتب + الإدارية) أو زيادة كفاءة التشغيل.",
            "Reduce operating expenses (rent + salaries + admin) or improve operational efficiency.",
        ),
        RatioId::NetProfitMargin => Text::new(
            "زيادة الإيرادات أو التحكم في جميع المصروفات (التشغيلية + التمويلية + الضرائب).",
            "Increase revenues or control all expenses (operating + financing + taxes).",
        ),
        RatioId::ReturnOnEquity => Text::new(
            "زيادة العائد للملاك عن طريق تحسين الربحية ورفع كفاءة إدارة الموارد.",
            "Increase shareholder return by improving profitability and resource efficiency.",
        ),
        RatioId::ReturnOnAssets => Text::new(
            "زيادة الأرباح أو تحسين استغلال الأصول (المباني + المعدات + النقدية).",
            "Increase profits or utilize assets (buildings + equipment + cash) more effectively.",
        ),
        RatioId::BasicEarningsPower => Text::new(
            "زيادة كفاءة استخدام الأصول الثابتة (المصانع + المعدات) لرفع الأرباح التشغيلية.",
            "Improve utilization of fixed assets (plants + equipment) to increase operating profit.",
        ),
        RatioId::CashConversion => Text::new(
            "تحسين التدفقات النقدية عبر تحصيل أسرع وإدارة نفقات أفضل.",
            "Improve cash flow through faster receivables collection and better expense management.",
        ),
        RatioId::DebtToEquity => Text::new(
            "خفض الديون أو زيادة حقوق الملكية لتحقيق توازن أفضل بين الالتزامات والملاك.",
            "Lower debt or raise equity for a healthier balance.",
        ),
        RatioId::InterestCoverage => Text::new(
            "زيادة الأرباح التشغيلية أو خفض مصروف الفوائد.",
            "Boost operating profits or reduce interest expenses.",
        ),
        RatioId::InventoryTurnover => Text::new(
            "تحسين إدارة المخزون وتقليل البضاعة الراكدة لزيادة سرعة الدوران.",
            "Enhance inventory management and reduce obsolete stock to increase turnover speed.",
        ),
        RatioId::ReceivableTurnover => Text::new(
            "تسريع تحصيل العملاء وتقليل فترات الائتمان لتحسين التدفقات النقدية.",
            "Speed up customer collections and shorten credit terms to improve cash flow.",
        ),
        RatioId::FixedAssetTurnover => Text::new(
            "زيادة المبيعات أو تحسين استغلال الأصول الثابتة لرفع كفاءة الدوران.",
            "Increase sales or use fixed assets more efficiently to boost turnover.",
        ),
        RatioId::EarningsPerShare => Text::new(
            "زيادة صافي الربح أو إعادة شراء الأسهم لرفع نصيب السهم من الأرباح.",
            "Increase net income or repurchase shares to raise earnings per share.",
        ),
        RatioId::PayoutRatio => Text::new(
            "تحقيق توازن بين توزيع أرباح مناسبة للمساهمين والاحتفاظ بأرباح كافية للنمو.",
            "Balance distributing dividends to shareholders against retaining enough earnings for growth.",
        ),
    }
}

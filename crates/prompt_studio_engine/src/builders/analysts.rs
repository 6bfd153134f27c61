//! Data analysis checklists.

use super::{PromptBuilder, field_line};
use crate::join;
use prompt_studio_core::{PromptContext, Settings};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumString)]
enum Analysis {
    #[strum(serialize = "Data Summary")]
    Summary,
    #[strum(serialize = "Insight Extraction")]
    Insights,
    #[strum(serialize = "Trend Detection")]
    Trends,
    #[strum(serialize = "Predictive Analysis")]
    Predictive,
    #[strum(serialize = "Report")]
    Report,
    #[default]
    #[strum(serialize = "Comprehensive Analysis")]
    Comprehensive,
}

impl Analysis {
    fn checklist(self) -> &'static str {
        match self {
            Analysis::Summary => {
                "
Provide a comprehensive data summary including:
1. Key statistics (mean, median, mode, std dev)
2. Data distribution overview
3. Missing value analysis
4. Outlier detection
5. Data quality assessment
6. Key observations and takeaways"
            }
            Analysis::Insights => {
                "
Extract actionable insights:
1. Top 5 key findings from the data
2. Correlation analysis between variables
3. Anomaly identification
4. Segment analysis
5. Recommendations based on findings"
            }
            Analysis::Trends => {
                "
Perform trend analysis:
1. Time-series pattern identification
2. Seasonal/cyclical patterns
3. Growth rate calculations
4. Trend direction and strength
5. Inflection points
6. Forecast for next period"
            }
            Analysis::Predictive => {
                "
Build a predictive analysis framework:
1. Variable selection and feature importance
2. Model recommendation (regression, classification, time-series)
3. Expected accuracy metrics
4. Key predictive factors
5. Risk assessment
6. Confidence intervals"
            }
            Analysis::Report => {
                "
Generate a professional business report:
1. Executive Summary
2. Key Metrics Dashboard description
3. Detailed Analysis Sections
4. Visualizations recommendations (chart types)
5. Conclusions
6. Actionable Recommendations
7. Appendix with methodology"
            }
            Analysis::Comprehensive => {
                "
Perform a comprehensive analysis covering:
1. Data summary with key statistics
2. Distribution and quality assessment
3. Pattern and trend identification
4. Actionable insights and recommendations
5. Suggested visualizations
6. Next steps for deeper analysis"
            }
        }
    }
}

/// Analyst persona plus one of six checklists.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalystsBuilder;

impl PromptBuilder for AnalystsBuilder {
    fn build(&self, _model: &str, settings: &Settings, context: &PromptContext) -> String {
        let data = context
            .text()
            .map(|text| format!("\nData Description:\n{}", text))
            .unwrap_or_default();
        let mut prompt = join(&[
            "You are a senior data analyst and business intelligence expert.",
            "",
            &field_line("Analysis Type", settings, "analysisType"),
            &data,
        ]);

        let analysis = settings
            .text("analysisType")
            .and_then(|value| Analysis::from_str(value).ok())
            .unwrap_or_default();
        prompt.push_str(analysis.checklist());
        prompt
    }
}

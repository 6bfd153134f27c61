//! Academic research deliverables.

use super::{PromptBuilder, field_line};
use crate::{join, line};
use prompt_studio_core::{PromptContext, Settings};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumString)]
enum Research {
    #[default]
    #[strum(serialize = "Research Outline")]
    Outline,
    #[strum(serialize = "Literature Review")]
    LiteratureReview,
    Hypothesis,
    Abstract,
}

impl Research {
    fn checklist(self) -> &'static str {
        match self {
            Research::Outline => {
                "
Generate a comprehensive research outline:
1. Title and Abstract
2. Research Questions (3-5)
3. Literature Review Framework
   - Key theories and frameworks
   - Seminal works to reference
   - Research gaps identified
4. Methodology
   - Research design
   - Data collection methods
   - Analysis approach
5. Expected Contributions
6. Timeline and milestones
7. Potential limitations"
            }
            Research::LiteratureReview => {
                "
Generate a structured literature review prompt:
1. Define the scope and boundaries
2. Identify key themes and categories
3. Chronological development of the field
4. Current state of knowledge
5. Methodological approaches used
6. Conflicting findings and debates
7. Research gaps and future directions
8. Synthesis and critical evaluation framework"
            }
            Research::Hypothesis => {
                "
Develop research hypotheses:
1. Primary hypothesis (H1)
2. Alternative hypotheses (H2-H4)
3. Null hypothesis
4. Variables identification
   - Independent variables
   - Dependent variables
   - Control variables
5. Theoretical basis for each hypothesis
6. Testability assessment
7. Expected outcomes
8. Statistical tests recommended"
            }
            Research::Abstract => {
                "
Generate a publication-ready abstract:
1. Background context (2-3 sentences)
2. Research gap/problem statement
3. Methodology summary
4. Key findings
5. Implications and significance
6. Keywords (5-8)

Follow APA/IEEE formatting guidelines.
Word limit: 250-300 words."
            }
        }
    }
}

/// Scholar persona plus one of four academic checklists.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResearchersBuilder;

impl PromptBuilder for ResearchersBuilder {
    fn build(&self, _model: &str, settings: &Settings, context: &PromptContext) -> String {
        let mut prompt = join(&[
            "You are an expert academic researcher and scholar.",
            "",
            &field_line("Field", settings, "field"),
            &field_line("Tone", settings, "academicTone"),
            &line("Topic", context.text(), None),
        ]);

        let research = settings
            .text("researchType")
            .and_then(|value| Research::from_str(value).ok())
            .unwrap_or_default();
        prompt.push_str(research.checklist());
        prompt
    }
}

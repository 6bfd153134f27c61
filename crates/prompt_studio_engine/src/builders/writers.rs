//! Copywriting and content rewriting.

use super::{PromptBuilder, field};
use crate::join;
use prompt_studio_core::{PromptContext, Settings};
use std::str::FromStr;

/// Rhetorical skeleton selected by exact match on `framework`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString)]
enum Framework {
    #[strum(serialize = "Hero's Journey")]
    HerosJourney,
    #[strum(serialize = "AIDA")]
    Aida,
    #[strum(serialize = "PAS")]
    Pas,
}

impl Framework {
    fn skeleton(self) -> &'static str {
        match self {
            Framework::HerosJourney => {
                "
Use the Hero's Journey framework:
1. Ordinary World → Present the reader's current situation
2. Call to Adventure → Introduce the challenge/opportunity
3. Crossing the Threshold → Show commitment to change
4. Tests & Allies → Share experiences and social proof
5. The Ordeal → Address the biggest challenge
6. The Reward → Reveal the transformation
7. Return → Call to action with newfound wisdom"
            }
            Framework::Aida => {
                "
Use the AIDA framework:
1. Attention → Hook with a compelling opener
2. Interest → Build curiosity with relevant details
3. Desire → Create emotional connection
4. Action → Clear, compelling call-to-action"
            }
            Framework::Pas => {
                "
Use the PAS framework:
1. Problem → Identify and agitate the pain point
2. Agitate → Amplify the emotional impact
3. Solution → Present the resolution with clear benefits"
            }
        }
    }
}

const SEO_REQUIREMENTS: &str = "

SEO Requirements:
- Include primary keyword naturally 3-5 times
- Add semantic keywords and LSI terms
- Optimize meta title (60 chars) and description (160 chars)
- Use header hierarchy (H1, H2, H3)
- Add internal/external link suggestions
- Recommend schema markup";

/// Action / tone framing with optional framework and SEO sections.
#[derive(Debug, Clone, Copy, Default)]
pub struct WritersBuilder;

impl PromptBuilder for WritersBuilder {
    fn build(&self, _model: &str, settings: &Settings, context: &PromptContext) -> String {
        let action = field(settings, "action");
        let content_type = field(settings, "contentType");

        let mut prompt = join(&[
            "You are an expert content strategist and copywriter.",
            "",
            &format!("Task: {} the following {} content.", action, content_type),
            &format!("Tone: {}", field(settings, "tone")),
        ]);

        // "None" and unknown names contribute nothing
        if let Some(framework) = settings
            .non_empty_text("framework")
            .and_then(|name| Framework::from_str(name).ok())
        {
            prompt.push_str(framework.skeleton());
        }

        if action.to_lowercase().contains("seo") {
            prompt.push_str(SEO_REQUIREMENTS);
        }

        if let Some(text) = context.text() {
            prompt.push_str(&format!(
                "\n\nContent to {}:\n\"\"\"{}\"\"\"",
                action.to_lowercase(),
                text
            ));
        }

        prompt.push_str(&format!(
            "\n\nOutput both:\n1. The optimized prompt (for reuse)\n2. The final {} content",
            content_type
        ));
        prompt
    }
}

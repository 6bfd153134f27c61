//! Marketing campaign deliverables.

use super::{PromptBuilder, field, field_line};
use crate::{join, line};
use prompt_studio_core::{PromptContext, Settings};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumString)]
enum Deliverable {
    #[strum(serialize = "Ad Copy")]
    AdCopy,
    Hooks,
    Funnel,
    #[default]
    Campaign,
}

const FUNNEL: &str = "
Design a complete marketing funnel:
1. Awareness Stage: Content and ad strategy
2. Interest Stage: Lead magnets and nurture sequence
3. Consideration Stage: Social proof and case studies
4. Decision Stage: Offer optimization and urgency
5. Retention Stage: Post-purchase engagement

Include specific content pieces, email sequences, and ad creatives for each stage.";

const CAMPAIGN: &str = "
Generate a complete campaign strategy:
1. Campaign objective and KPIs
2. Audience targeting parameters
3. Creative direction and messaging
4. Content calendar (2 weeks)
5. Budget allocation recommendations
6. A/B testing plan";

impl Deliverable {
    fn checklist(self, platform: &str) -> String {
        match self {
            Deliverable::AdCopy => format!(
                "
Generate 5 high-converting ad copy variations:
- Each with a hook, body, and CTA
- A/B test variations for headlines
- Character limits optimized for {}
- Include emoji usage recommendations
- Power words and urgency triggers",
                platform
            ),
            Deliverable::Hooks => format!(
                "
Generate 10 scroll-stopping hooks:
- Pattern interrupt hooks
- Question hooks
- Story hooks
- Stat/data hooks
- Controversial hooks
Each should be under 10 words and optimized for {}",
                platform
            ),
            Deliverable::Funnel => FUNNEL.to_string(),
            Deliverable::Campaign => CAMPAIGN.to_string(),
        }
    }
}

/// Campaign brief plus one of four deliverable checklists.
///
/// The audience line prefers the `persona` setting and falls back to the
/// context text; the text is echoed as extra context only when no persona
/// was given, so the audience is never described twice.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarketersBuilder;

impl PromptBuilder for MarketersBuilder {
    fn build(&self, _model: &str, settings: &Settings, context: &PromptContext) -> String {
        let persona = settings.non_empty_text("persona");
        let mut prompt = join(&[
            "You are a senior digital marketing strategist.",
            "",
            "Campaign Brief:",
            &field_line("Campaign Type", settings, "campaignType"),
            &field_line("Funnel Stage", settings, "funnelStage"),
            &field_line("Platform", settings, "platform"),
            &line("Target Audience", persona, context.text()),
            &field_line("Product/Service", settings, "product"),
        ]);

        let deliverable = settings
            .text("outputType")
            .and_then(|value| Deliverable::from_str(value).ok())
            .unwrap_or_default();
        prompt.push_str(&deliverable.checklist(&field(settings, "platform")));

        if let (Some(text), None) = (context.text(), persona) {
            prompt.push_str(&format!("\n\nAdditional context: {}", text));
        }
        prompt
    }
}

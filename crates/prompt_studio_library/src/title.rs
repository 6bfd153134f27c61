//! Default titles for saved prompts.

use prompt_studio_core::{AUTO, GenerationRequest, ModuleId, Settings};
use prompt_studio_engine::resolve_model;
use std::str::FromStr;

const SEPARATOR: &str = " — ";

/// Optimizer titles quote this many characters of the raw prompt.
const OPTIMIZER_EXCERPT: usize = 30;

fn value_or(settings: &Settings, key: &str, fallback: &str) -> String {
    settings
        .display(key)
        .map(|value| value.into_owned())
        .unwrap_or_else(|| fallback.to_string())
}

/// Title for a request, built from the settings the user actually picked.
///
/// Unset fields show as `Auto` or a module-specific placeholder, so the
/// title reflects the raw request rather than the normalized defaults.
///
/// # Examples
///
/// ```
/// use prompt_studio_core::GenerationRequest;
/// use prompt_studio_library::suggest_title;
///
/// let request = GenerationRequest::new("carousel").with_setting("platform", "LinkedIn");
/// assert_eq!(suggest_title(&request), "Carousel — LinkedIn — Auto");
/// ```
pub fn suggest_title(request: &GenerationRequest) -> String {
    let s = request.settings();
    let Ok(module) = ModuleId::from_str(request.module()) else {
        return "Generated Prompt".to_string();
    };

    let parts = match module {
        ModuleId::Optimizer => {
            let excerpt: String = request
                .context()
                .text()
                .unwrap_or_default()
                .chars()
                .take(OPTIMIZER_EXCERPT)
                .collect();
            vec!["Optimized".to_string(), format!("{}...", excerpt)]
        }
        ModuleId::Carousel => vec![
            "Carousel".to_string(),
            value_or(s, "platform", AUTO),
            value_or(s, "contentType", AUTO),
        ],
        ModuleId::Designers => vec![
            value_or(s, "imageType", AUTO),
            value_or(s, "mood", AUTO),
            resolve_model(module, request.model().as_ref()).to_string(),
        ],
        ModuleId::Developers => vec![
            value_or(s, "productType", AUTO),
            value_or(s, "techStack", AUTO),
            value_or(s, "outputType", "Code"),
        ],
        ModuleId::Writers => vec![
            value_or(s, "action", AUTO),
            value_or(s, "contentType", AUTO),
            value_or(s, "tone", AUTO),
        ],
        ModuleId::WritersPresentation => vec![
            "Presentation".to_string(),
            value_or(s, "presentationType", AUTO),
            value_or(s, "slideCount", "Auto slides"),
        ],
        ModuleId::Video => vec![
            value_or(s, "videoType", AUTO),
            value_or(s, "scriptStyle", AUTO),
            value_or(s, "mood", AUTO),
        ],
        ModuleId::Analysts => vec![
            value_or(s, "analysisType", "Comprehensive"),
            "Data Analysis".to_string(),
        ],
        ModuleId::Marketers => vec![
            value_or(s, "campaignType", AUTO),
            value_or(s, "platform", AUTO),
            value_or(s, "outputType", "Campaign"),
        ],
        ModuleId::Researchers => vec![value_or(s, "researchType", AUTO), value_or(s, "field", AUTO)],
    };
    parts.join(SEPARATOR)
}

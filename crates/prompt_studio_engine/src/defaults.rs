//! Per-module "Auto" defaults and the settings normalizer.

use prompt_studio_core::{ModuleId, SettingValue, Settings};
use std::str::FromStr;
use tracing::{debug, instrument};

/// One row of a module's default table. `None` means the field is known but
/// has no default; normalization leaves it as an explicit null.
type DefaultEntry = (&'static str, Option<&'static str>);

const OPTIMIZER: &[DefaultEntry] = &[];

const CAROUSEL: &[DefaultEntry] = &[
    ("platform", Some("Instagram")),
    ("contentType", Some("Educational")),
    ("slideCount", Some("Auto (5-8)")),
];

const DESIGNERS: &[DefaultEntry] = &[
    ("imageType", Some("versatile composition")),
    ("mood", Some("balanced and visually compelling")),
    ("time", Some("natural lighting")),
    ("style", Some("high-quality, adaptable")),
    ("outputMode", Some("prompt")),
];

const DEVELOPERS: &[DefaultEntry] = &[
    ("productType", Some("web application")),
    ("techStack", Some("modern full-stack")),
    ("codeLevel", Some("production-ready")),
    ("outputType", Some("Code")),
];

const WRITERS: &[DefaultEntry] = &[
    ("action", Some("Improve and enhance")),
    ("contentType", Some("general content")),
    ("tone", Some("professional yet approachable")),
    ("framework", None),
];

const WRITERS_PRESENTATION: &[DefaultEntry] = &[
    ("presentationType", Some("versatile business presentation")),
    ("slideCount", Some("Auto (AI decides optimal count)")),
    ("tone", Some("professional")),
];

const VIDEO: &[DefaultEntry] = &[
    ("videoType", Some("versatile video format")),
    ("scriptStyle", Some("engaging and clear")),
    ("visualStyle", Some("polished, modern")),
    ("mood", Some("dynamic")),
];

const ANALYSTS: &[DefaultEntry] = &[("analysisType", Some("Comprehensive Analysis"))];

const MARKETERS: &[DefaultEntry] = &[
    ("campaignType", Some("multi-objective campaign")),
    ("funnelStage", Some("full-funnel")),
    ("platform", Some("cross-platform")),
    ("outputType", Some("Campaign")),
];

const RESEARCHERS: &[DefaultEntry] = &[
    ("researchType", Some("Research Outline")),
    ("academicTone", Some("formal")),
    ("field", Some("interdisciplinary")),
];

/// The default table for a module, in declaration order.
pub fn default_table(module: ModuleId) -> &'static [(&'static str, Option<&'static str>)] {
    match module {
        ModuleId::Optimizer => OPTIMIZER,
        ModuleId::Carousel => CAROUSEL,
        ModuleId::Designers => DESIGNERS,
        ModuleId::Developers => DEVELOPERS,
        ModuleId::Writers => WRITERS,
        ModuleId::WritersPresentation => WRITERS_PRESENTATION,
        ModuleId::Video => VIDEO,
        ModuleId::Analysts => ANALYSTS,
        ModuleId::Marketers => MARKETERS,
        ModuleId::Researchers => RESEARCHERS,
    }
}

/// Model used when a request names none.
pub fn auto_model(module: ModuleId) -> &'static str {
    match module {
        ModuleId::Optimizer
        | ModuleId::Carousel
        | ModuleId::Designers
        | ModuleId::Developers
        | ModuleId::Writers
        | ModuleId::WritersPresentation
        | ModuleId::Video
        | ModuleId::Analysts
        | ModuleId::Marketers
        | ModuleId::Researchers => "GPT",
    }
}

/// Fill blank fields of a module's default table.
///
/// A field is blank when absent, null, or the empty string. Any other value,
/// including the literal `"Auto"`, is kept verbatim. Keys outside the table
/// pass through untouched. Unknown module names yield an unmodified copy.
///
/// # Examples
///
/// ```
/// use prompt_studio_core::Settings;
/// use prompt_studio_engine::normalize;
///
/// let raw = Settings::new().with_null("action").with("tone", "");
/// let normalized = normalize("writers", &raw);
///
/// assert_eq!(normalized.text("action"), Some("Improve and enhance"));
/// assert_eq!(normalized.text("tone"), Some("professional yet approachable"));
/// ```
pub fn normalize(module: &str, raw: &Settings) -> Settings {
    match ModuleId::from_str(module) {
        Ok(module) => normalize_module(module, raw),
        Err(_) => raw.clone(),
    }
}

/// [`normalize`] for an already-parsed module.
#[instrument(skip(raw), fields(module = %module, raw_keys = raw.len()))]
pub fn normalize_module(module: ModuleId, raw: &Settings) -> Settings {
    let mut settings = raw.clone();
    let mut filled = 0usize;
    for (key, default) in default_table(module) {
        if settings.is_blank(key) {
            settings.insert_raw(*key, default.map(SettingValue::from));
            filled += 1;
        }
    }
    debug!(filled, total = settings.len(), "Normalized settings");
    settings
}

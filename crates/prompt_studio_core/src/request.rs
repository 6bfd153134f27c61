//! Generation requests.

use crate::{ModelId, PromptContext, SettingValue, Settings};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything the engine needs to render one prompt.
///
/// The module is kept as the caller's raw string so that typos reach the
/// router, which answers them with a fallback message instead of failing.
///
/// # Examples
///
/// ```
/// use prompt_studio_core::GenerationRequest;
///
/// let request = GenerationRequest::new("designers")
///     .with_model("Midjourney")
///     .with_setting("imageType", "Landscape")
///     .with_text("a lighthouse at dusk");
///
/// assert_eq!(request.module(), "designers");
/// assert_eq!(request.settings().text("imageType"), Some("Landscape"));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct GenerationRequest {
    /// Module name, e.g. `designers`
    #[setters(skip)]
    module: String,
    /// Target model; absent or empty means the module default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[setters(strip_option, into)]
    model: Option<ModelId>,
    /// Sparse settings picked by the user
    #[serde(default)]
    settings: Settings,
    /// Free text and reference images
    #[serde(default)]
    context: PromptContext,
}

impl GenerationRequest {
    /// Start a request for the named module.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            model: None,
            settings: Settings::default(),
            context: PromptContext::default(),
        }
    }

    /// Add one setting.
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.settings.insert(key, value);
        self
    }

    /// Set the context text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.context = self.context.with_text(text);
        self
    }
}

//! Free-form context attached to a request.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A reference image uploaded alongside a request.
///
/// The payload is opaque; builders only count and describe images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct ImageRef {
    /// File name as supplied by the uploader
    #[new(into)]
    name: String,
    /// Encoded image payload
    #[serde(default)]
    data: Vec<u8>,
}

/// Free text and reference images accompanying the settings.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct PromptContext {
    /// User-supplied text (topic, raw prompt, data description, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[getter(skip)]
    #[setters(strip_option, into)]
    text: Option<String>,
    /// Reference images, in upload order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    images: Vec<ImageRef>,
}

impl PromptContext {
    /// Context carrying only text.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self::default().with_text(text)
    }

    /// The context text, or `None` when absent or empty.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    /// The context text trimmed, or `None` when it is whitespace only.
    pub fn trimmed_text(&self) -> Option<&str> {
        self.text.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// Whether any reference images were attached.
    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }
}

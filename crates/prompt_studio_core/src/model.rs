//! Downstream model identifiers.

use serde::{Deserialize, Serialize};

/// Free-form name of the model that will consume a generated prompt
/// (`"GPT"`, `"Claude"`, `"Midjourney"`, `"Stable Diffusion"`, ...).
///
/// Any string is legal. An empty identifier means "let the engine pick".
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
    derive_more::Deref,
)]
#[serde(transparent)]
pub struct ModelId(String);

impl ModelId {
    /// Create a model identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The identifier as written by the caller.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the identifier is empty and should be replaced by a default.
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ModelId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

//! Saved prompt records.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use prompt_studio_core::{AUTO, GenerationRequest, ModelId, Settings};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated prompt stored in the library.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPrompt {
    /// Unique identifier
    id: Uuid,
    /// When the prompt was saved
    created_at: DateTime<Utc>,
    /// Module that produced the prompt
    module: String,
    /// Model the prompt was generated for, `Auto` when none was chosen
    model: String,
    /// Display title
    #[serde(default)]
    title: String,
    /// Free-form tags
    #[serde(default)]
    tags: Vec<String>,
    /// Settings as the user picked them, before normalization
    #[serde(default)]
    settings: Settings,
    /// The generated prompt text
    content: String,
}

/// A prompt about to be saved. The library assigns id and timestamp.
///
/// # Examples
///
/// ```
/// use prompt_studio_library::PromptDraftBuilder;
///
/// let draft = PromptDraftBuilder::default()
///     .module("writers")
///     .content("You are an expert content strategist...")
///     .title("Rewrite — Blog — Witty")
///     .build()
///     .unwrap();
/// assert_eq!(draft.module(), "writers");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct PromptDraft {
    /// Module that produced the prompt
    module: String,
    /// Model chosen by the user, if any
    #[builder(default)]
    model: Option<ModelId>,
    /// Display title
    #[builder(default)]
    title: String,
    /// Free-form tags
    #[builder(default)]
    tags: Vec<String>,
    /// Raw settings
    #[builder(default)]
    settings: Settings,
    /// The generated prompt text
    content: String,
}

impl PromptDraft {
    /// Draft for the output of a request, titled later by the caller.
    pub fn from_request(request: &GenerationRequest, content: impl Into<String>) -> Self {
        Self {
            module: request.module().clone(),
            model: request.model().clone(),
            title: String::new(),
            tags: Vec::new(),
            settings: request.settings().clone(),
            content: content.into(),
        }
    }

    /// Replace the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replace the tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Turn the draft into a record with a fresh id.
    pub fn into_saved(self, created_at: DateTime<Utc>) -> SavedPrompt {
        let model = match self.model {
            Some(model) if !model.is_blank() => model.as_str().to_string(),
            _ => AUTO.to_string(),
        };
        SavedPrompt {
            id: Uuid::new_v4(),
            created_at,
            module: self.module,
            model,
            title: self.title,
            tags: self.tags,
            settings: self.settings,
            content: self.content,
        }
    }
}

/// Partial edit of a saved prompt. Unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_setters::Setters)]
#[setters(prefix = "with_", strip_option, into)]
pub struct PromptUpdate {
    /// New title
    pub title: Option<String>,
    /// New tag list
    pub tags: Option<Vec<String>>,
    /// New content
    pub content: Option<String>,
}

impl SavedPrompt {
    pub(crate) fn apply(&mut self, update: PromptUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
    }

    /// Case-insensitive match against title, content, and tags.
    ///
    /// `query` must already be lowercase.
    pub(crate) fn matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query)
            || self.content.to_lowercase().contains(query)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(query))
    }
}

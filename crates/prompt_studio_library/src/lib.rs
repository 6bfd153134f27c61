//! Saved prompt library for Prompt Studio.
//!
//! Generated prompts are kept newest-first in a [`PromptLibrary`], searched
//! by title, content, or tag, persisted as a JSON file, and exported as JSON,
//! Markdown, or plain text.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod export;
mod library;
mod saved;
mod title;

pub use export::ExportFormat;
pub use library::{ModuleFilter, PromptLibrary};
pub use saved::{PromptDraft, PromptDraftBuilder, PromptUpdate, SavedPrompt};
pub use title::suggest_title;

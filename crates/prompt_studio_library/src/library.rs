//! Newest-first prompt collection with JSON persistence.

use crate::{PromptDraft, PromptUpdate, SavedPrompt};
use chrono::Utc;
use prompt_studio_error::{StorageError, StorageErrorKind};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Module restriction for [`PromptLibrary::filter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModuleFilter {
    /// Every module
    #[default]
    All,
    /// Only prompts from the named module
    Module(String),
}

impl FromStr for ModuleFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "" | "all" => ModuleFilter::All,
            module => ModuleFilter::Module(module.to_string()),
        })
    }
}

impl ModuleFilter {
    fn admits(&self, prompt: &SavedPrompt) -> bool {
        match self {
            ModuleFilter::All => true,
            ModuleFilter::Module(module) => prompt.module() == module,
        }
    }
}

/// Saved prompts, newest first.
///
/// # Examples
///
/// ```
/// use prompt_studio_library::{PromptDraftBuilder, PromptLibrary};
///
/// let mut library = PromptLibrary::default();
/// let draft = PromptDraftBuilder::default()
///     .module("carousel")
///     .content("You are an expert Social Media Strategist...")
///     .tags(vec!["launch".to_string()])
///     .build()
///     .unwrap();
/// let id = *library.save(draft).id();
///
/// assert_eq!(library.search("LAUNCH").len(), 1);
/// assert!(library.get(&id).is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptLibrary {
    prompts: Vec<SavedPrompt>,
}

impl PromptLibrary {
    /// All prompts, newest first.
    pub fn prompts(&self) -> &[SavedPrompt] {
        &self.prompts
    }

    /// Number of saved prompts.
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// True when nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Store a draft at the front of the library.
    pub fn save(&mut self, draft: PromptDraft) -> &SavedPrompt {
        let prompt = draft.into_saved(Utc::now());
        debug!(id = %prompt.id(), module = %prompt.module(), "Saving prompt");
        self.prompts.insert(0, prompt);
        &self.prompts[0]
    }

    /// Remove a prompt, returning it.
    pub fn delete(&mut self, id: &Uuid) -> Result<SavedPrompt, StorageError> {
        let index = self.position(id)?;
        Ok(self.prompts.remove(index))
    }

    /// Apply a partial edit to a prompt.
    pub fn update(&mut self, id: &Uuid, update: PromptUpdate) -> Result<&SavedPrompt, StorageError> {
        let index = self.position(id)?;
        let prompt = &mut self.prompts[index];
        prompt.apply(update);
        Ok(prompt)
    }

    /// Look up a prompt by id.
    pub fn get(&self, id: &Uuid) -> Option<&SavedPrompt> {
        self.prompts.iter().find(|p| p.id() == id)
    }

    /// Look up a prompt by its full id or a unique prefix of it.
    pub fn find(&self, key: &str) -> Result<&SavedPrompt, StorageError> {
        let key = key.trim().to_lowercase();
        let candidates: Vec<&SavedPrompt> = self
            .prompts
            .iter()
            .filter(|p| !key.is_empty() && p.id().to_string().starts_with(&key))
            .collect();
        match candidates.as_slice() {
            [prompt] => Ok(*prompt),
            [] => Err(StorageError::new(StorageErrorKind::NotFound(key))),
            _ => Err(StorageError::new(StorageErrorKind::NotFound(format!(
                "{} (ambiguous prefix)",
                key
            )))),
        }
    }

    /// Prompts produced by one module.
    pub fn by_module(&self, module: &str) -> Vec<&SavedPrompt> {
        self.filter(&ModuleFilter::Module(module.to_string()), "")
    }

    /// Prompts whose title, content, or any tag contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&SavedPrompt> {
        self.filter(&ModuleFilter::All, query)
    }

    /// Module restriction combined with a text search. An empty query matches all.
    pub fn filter(&self, module: &ModuleFilter, query: &str) -> Vec<&SavedPrompt> {
        let query = query.to_lowercase();
        self.prompts
            .iter()
            .filter(|p| module.admits(p))
            .filter(|p| query.is_empty() || p.matches(&query))
            .collect()
    }

    /// Read a library file. A missing file is an empty library.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No library file yet");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::Io(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                ))));
            }
        };

        let library: Self = serde_json::from_str(&contents).map_err(|e| {
            StorageError::new(StorageErrorKind::Corrupt(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;
        debug!(count = library.len(), "Loaded library");
        Ok(library)
    }

    /// Write the library as pretty JSON, creating parent directories.
    #[instrument(skip_all, fields(path = %path.as_ref().display(), count = self.len()))]
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), StorageError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::new(StorageErrorKind::Io(format!(
                    "Failed to create {}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| StorageError::new(StorageErrorKind::Serialize(e.to_string())))?;
        std::fs::write(path, json).map_err(|e| {
            StorageError::new(StorageErrorKind::Io(format!(
                "Failed to write {}: {}",
                path.display(),
                e
            )))
        })?;
        info!("Library saved");
        Ok(())
    }

    fn position(&self, id: &Uuid) -> Result<usize, StorageError> {
        self.prompts
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| StorageError::new(StorageErrorKind::NotFound(id.to_string())))
    }
}

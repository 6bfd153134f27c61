//! Prompt Studio: structured prompt generation for AI models.
//!
//! This crate bundles the workspace behind one dependency:
//!
//! - the engine ([`generate`], [`normalize`]) from `prompt_studio_engine`
//! - the data model from `prompt_studio_core`
//! - the saved prompt library from `prompt_studio_library`
//! - credit metering from `prompt_studio_credits`
//! - configuration and request-file loading, plus the `prompt-studio` CLI
//!
//! # Examples
//!
//! ```
//! use prompt_studio::{GenerationRequest, generate};
//!
//! let request = GenerationRequest::new("developers").with_setting("outputType", "API");
//! assert!(generate(&request).contains("RESTful endpoint definitions"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod studio_config;
mod request_file;

pub use studio_config::{CONFIG_FILE_NAME, ENV_PREFIX, StudioConfig};
pub use request_file::load_request;

pub use prompt_studio_core::{
    AUTO, GenerationRequest, ImageRef, ModelId, ModuleId, OutputMode, PromptContext,
    SettingValue, Settings,
};
pub use prompt_studio_credits::{CreditLedger, CreditPolicy, Plan};
pub use prompt_studio_engine::{
    ImageDialect, PromptBuilder, UNKNOWN_MODULE_MESSAGE, auto_model, builder_for, default_table,
    generate, generate_legacy, normalize, normalize_module, resolve_model,
};
pub use prompt_studio_error::{
    ConfigError, ConfigErrorKind, CreditError, CreditErrorKind, ExportError, StorageError,
    StorageErrorKind, StudioError, StudioErrorKind, StudioResult,
};
pub use prompt_studio_library::{
    ExportFormat, ModuleFilter, PromptDraft, PromptDraftBuilder, PromptLibrary, PromptUpdate,
    SavedPrompt, suggest_title,
};

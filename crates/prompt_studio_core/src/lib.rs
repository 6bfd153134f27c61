//! Core data types for Prompt Studio.
//!
//! This crate provides the request model consumed by the prompt engine:
//! which module to render, which downstream model to target, the sparse
//! settings a user picked, and the free-form context around them.

mod context;
mod model;
mod module;
mod request;
mod settings;

pub use context::{ImageRef, PromptContext};
pub use model::ModelId;
pub use module::ModuleId;
pub use request::GenerationRequest;
pub use settings::{AUTO, OutputMode, SettingValue, Settings};

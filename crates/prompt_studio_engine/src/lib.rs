//! Prompt generation engine for Prompt Studio.
//!
//! Two pieces cooperate:
//!
//! 1. **Normalizer** ([`normalize`]) fills every unspecified field of a
//!    module's default table with that module's "Auto" value.
//! 2. **Router** ([`generate`]) resolves the target model, normalizes the
//!    settings, and hands them to the module's [`PromptBuilder`], which may
//!    dispatch again on the model to pick an output dialect.
//!
//! Both are pure: the same request always renders the same string, and
//! nothing here performs I/O or holds state between calls.
//!
//! # Examples
//!
//! ```
//! use prompt_studio_core::GenerationRequest;
//! use prompt_studio_engine::generate;
//!
//! let request = GenerationRequest::new("designers")
//!     .with_model("Midjourney")
//!     .with_setting("imageType", "Landscape");
//!
//! assert!(generate(&request).contains("--ar 16:9"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod builders;
mod compose;
mod defaults;
mod router;

pub use builders::{
    AnalystsBuilder, CarouselBuilder, DesignersBuilder, DevelopersBuilder, ImageDialect,
    MarketersBuilder, OptimizerBuilder, PresentationBuilder, PromptBuilder, ResearchersBuilder,
    VideoBuilder, WritersBuilder, builder_for,
};
pub use compose::{join, line};
pub use defaults::{auto_model, default_table, normalize, normalize_module};
pub use router::{UNKNOWN_MODULE_MESSAGE, generate, generate_legacy, resolve_model};

//! Module builders.
//!
//! Each module renders through a [`PromptBuilder`]. Builders receive settings
//! that have already been normalized, so every field of the module's default
//! table is present; anything else may be missing and must degrade to an
//! omitted line.

mod analysts;
mod carousel;
mod designers;
mod developers;
mod marketers;
mod optimizer;
mod presentation;
mod researchers;
mod video;
mod writers;

pub use analysts::AnalystsBuilder;
pub use carousel::CarouselBuilder;
pub use designers::{DesignersBuilder, ImageDialect};
pub use developers::DevelopersBuilder;
pub use marketers::MarketersBuilder;
pub use optimizer::OptimizerBuilder;
pub use presentation::PresentationBuilder;
pub use researchers::ResearchersBuilder;
pub use video::VideoBuilder;
pub use writers::WritersBuilder;

use prompt_studio_core::{ModuleId, PromptContext, Settings};
use std::borrow::Cow;

/// Renders one module's prompt.
pub trait PromptBuilder: Send + Sync {
    /// Render the prompt for a resolved model, normalized settings, and context.
    fn build(&self, model: &str, settings: &Settings, context: &PromptContext) -> String;
}

/// The builder registered for a module.
pub fn builder_for(module: ModuleId) -> &'static dyn PromptBuilder {
    match module {
        ModuleId::Optimizer => &OptimizerBuilder,
        ModuleId::Carousel => &CarouselBuilder,
        ModuleId::Designers => &DesignersBuilder,
        ModuleId::Developers => &DevelopersBuilder,
        ModuleId::Writers => &WritersBuilder,
        ModuleId::WritersPresentation => &PresentationBuilder,
        ModuleId::Video => &VideoBuilder,
        ModuleId::Analysts => &AnalystsBuilder,
        ModuleId::Marketers => &MarketersBuilder,
        ModuleId::Researchers => &ResearchersBuilder,
    }
}

/// Interpolation value for a field, empty when it has no content.
fn field<'a>(settings: &'a Settings, key: &str) -> Cow<'a, str> {
    settings.display(key).unwrap_or(Cow::Borrowed(""))
}

/// Bullet line for a settings field.
fn field_line(label: &str, settings: &Settings, key: &str) -> String {
    crate::line(label, settings.display(key).as_deref(), None)
}

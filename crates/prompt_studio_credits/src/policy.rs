//! What each request costs.

use derive_getters::Getters;
use prompt_studio_core::{GenerationRequest, ModuleId, OutputMode};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Credit prices for metered operations. Everything else is free.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_setters::Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct CreditPolicy {
    /// Carousel generation
    carousel: u32,
    /// Designers request in image mode
    image_generation: u32,
    /// Video production package
    video: u32,
    /// Analysts full report
    report: u32,
    /// Exporting a researchers prompt
    research_export: u32,
}

impl Default for CreditPolicy {
    fn default() -> Self {
        Self {
            carousel: 5,
            image_generation: 10,
            video: 15,
            report: 20,
            research_export: 5,
        }
    }
}

impl CreditPolicy {
    /// Credits charged before rendering a request. Unknown modules are free;
    /// the engine answers them with a fallback message.
    ///
    /// # Examples
    ///
    /// ```
    /// use prompt_studio_core::GenerationRequest;
    /// use prompt_studio_credits::CreditPolicy;
    ///
    /// let policy = CreditPolicy::default();
    /// let report = GenerationRequest::new("analysts").with_setting("analysisType", "Report");
    /// assert_eq!(policy.cost(&report), 20);
    /// assert_eq!(policy.cost(&GenerationRequest::new("writers")), 0);
    /// ```
    pub fn cost(&self, request: &GenerationRequest) -> u32 {
        let Ok(module) = ModuleId::from_str(request.module()) else {
            return 0;
        };
        let settings = request.settings();
        match module {
            ModuleId::Carousel => self.carousel,
            ModuleId::Video => self.video,
            ModuleId::Designers
                if OutputMode::from_setting(settings.text("outputMode")) == OutputMode::Image =>
            {
                self.image_generation
            }
            ModuleId::Analysts if settings.text("analysisType") == Some("Report") => self.report,
            _ => 0,
        }
    }

    /// Credits charged for exporting a prompt from the named module.
    pub fn export_cost(&self, module: &str) -> u32 {
        match ModuleId::from_str(module) {
            Ok(ModuleId::Researchers) => self.research_export,
            _ => 0,
        }
    }
}

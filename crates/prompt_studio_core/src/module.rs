//! Module identifiers.

use serde::{Deserialize, Serialize};

/// The fixed set of prompt modules.
///
/// String forms are snake_case (`writers_presentation`), which is also how
/// requests name them on the wire.
///
/// # Examples
///
/// ```
/// use prompt_studio_core::ModuleId;
/// use std::str::FromStr;
///
/// let module = ModuleId::from_str("writers_presentation").unwrap();
/// assert_eq!(module, ModuleId::WritersPresentation);
/// assert_eq!(module.to_string(), "writers_presentation");
/// assert!(ModuleId::from_str("nonexistent").is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ModuleId {
    /// Rewrites a raw prompt into a structured one
    Optimizer,
    /// Social media carousel brief
    Carousel,
    /// Image generation prompts, one dialect per image model
    Designers,
    /// Software engineering deliverables
    Developers,
    /// Copywriting and content rewriting
    Writers,
    /// Presentation package (outline, slides, notes, script)
    WritersPresentation,
    /// Video production package
    Video,
    /// Data analysis checklists
    Analysts,
    /// Marketing campaign deliverables
    Marketers,
    /// Academic research deliverables
    Researchers,
}

impl ModuleId {
    /// Snake-case name of the module.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

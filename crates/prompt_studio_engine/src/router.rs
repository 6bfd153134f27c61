//! Request routing: module lookup, model resolution, and dispatch.

use crate::{auto_model, builder_for, normalize_module};
use prompt_studio_core::{GenerationRequest, ModelId, ModuleId, PromptContext, Settings};
use std::str::FromStr;
use tracing::{debug, instrument, warn};

/// Returned in place of a prompt when the module name is not recognized.
pub const UNKNOWN_MODULE_MESSAGE: &str = "Unknown module. Please select a valid module.";

/// Settings consulted, in order, for the context text of a legacy call.
const LEGACY_TEXT_KEYS: [&str; 4] = ["inputText", "requirements", "topic", "dataDescription"];

/// The model a request renders for: the caller's choice unless it is
/// missing or empty, otherwise the module default.
pub fn resolve_model(module: ModuleId, model: Option<&ModelId>) -> &str {
    match model {
        Some(model) if !model.is_blank() => model.as_str(),
        _ => auto_model(module),
    }
}

/// Render the prompt for a request.
///
/// Never fails. An unrecognized module renders [`UNKNOWN_MODULE_MESSAGE`].
///
/// # Examples
///
/// ```
/// use prompt_studio_core::GenerationRequest;
/// use prompt_studio_engine::{UNKNOWN_MODULE_MESSAGE, generate};
///
/// assert_eq!(generate(&GenerationRequest::new("poetry")), UNKNOWN_MODULE_MESSAGE);
/// ```
#[instrument(skip(request), fields(module = %request.module()))]
pub fn generate(request: &GenerationRequest) -> String {
    let module = match ModuleId::from_str(request.module()) {
        Ok(module) => module,
        Err(_) => {
            warn!("Unknown module requested");
            return UNKNOWN_MODULE_MESSAGE.to_string();
        }
    };

    let settings = normalize_module(module, request.settings());
    let model = resolve_model(module, request.model().as_ref());
    debug!(model, "Routing to module builder");

    builder_for(module).build(model, &settings, request.context())
}

/// Render from the older `(module, model, settings)` calling convention.
///
/// The context text is taken from the first non-empty of `inputText`,
/// `requirements`, `topic` and `dataDescription`.
pub fn generate_legacy(module: &str, model: Option<&str>, settings: &Settings) -> String {
    let text = LEGACY_TEXT_KEYS
        .iter()
        .find_map(|key| settings.non_empty_text(key))
        .unwrap_or_default();

    let mut request = GenerationRequest::new(module)
        .with_settings(settings.clone())
        .with_context(PromptContext::text_only(text));
    if let Some(model) = model {
        request = request.with_model(model);
    }
    generate(&request)
}

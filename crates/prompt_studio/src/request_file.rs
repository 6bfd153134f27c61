//! Generation requests stored as TOML.

use prompt_studio_core::GenerationRequest;
use prompt_studio_error::{ConfigError, ConfigErrorKind, StudioResult};
use std::path::Path;

/// Load a request from a TOML file.
///
/// ```toml
/// module = "designers"
/// model = "Midjourney"
///
/// [settings]
/// imageType = "Landscape"
/// mood = "Moody"
///
/// [context]
/// text = "a lighthouse at dusk"
/// ```
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_request(path: impl AsRef<Path>) -> StudioResult<GenerationRequest> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::new(ConfigErrorKind::ReadRequest {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    })?;

    let request = toml::from_str(&content)
        .map_err(|e| ConfigError::new(ConfigErrorKind::ParseRequest(e.to_string())))?;
    Ok(request)
}

//! Layered application configuration.

use derive_getters::Getters;
use prompt_studio_credits::CreditPolicy;
use prompt_studio_error::{ConfigError, ConfigErrorKind, StudioResult};
use prompt_studio_library::ExportFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// File looked up in the user config directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "prompt_studio.toml";

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "PROMPT_STUDIO";

const APP_DIR: &str = "prompt_studio";

/// Settings for the CLI and the collaborators it drives.
///
/// Sources, lowest priority first: built-in defaults, the TOML file, then
/// `PROMPT_STUDIO_*` environment variables (e.g. `PROMPT_STUDIO_METERING=false`).
///
/// ```toml
/// library_path = "/home/me/prompts/library.json"
/// credits_path = "/home/me/prompts/credits.json"
/// default_format = "markdown"
/// metering = true
///
/// [policy]
/// video = 15
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_", into)]
pub struct StudioConfig {
    /// Saved prompt library file
    library_path: PathBuf,
    /// Credit ledger file
    credits_path: PathBuf,
    /// Output format when `--format` is not given
    default_format: ExportFormat,
    /// Charge credits for metered operations
    metering: bool,
    /// Credit prices
    #[serde(default)]
    policy: CreditPolicy,
}

impl StudioConfig {
    /// `<config dir>/prompt_studio/prompt_studio.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE_NAME))
    }

    fn data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default file is used
    /// when present.
    #[instrument(skip_all, fields(path = ?path))]
    pub fn load(path: Option<&Path>) -> StudioResult<Self> {
        let data_dir = Self::data_dir();
        let mut builder = config::Config::builder()
            .set_default("library_path", path_string(&data_dir.join("library.json")))
            .and_then(|b| b.set_default("credits_path", path_string(&data_dir.join("credits.json"))))
            .and_then(|b| b.set_default("default_format", ExportFormat::default().to_string()))
            .and_then(|b| b.set_default("metering", true))
            .map_err(config_error)?;

        match path {
            Some(path) => {
                builder = builder.add_source(
                    config::File::from(path)
                        .format(config::FileFormat::Toml)
                        .required(true),
                );
            }
            None => {
                if let Some(default) = Self::default_path() {
                    builder = builder.add_source(
                        config::File::from(default)
                            .format(config::FileFormat::Toml)
                            .required(false),
                    );
                }
            }
        }

        let config: Self = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(config_error)?
            .try_deserialize()
            .map_err(config_error)?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[track_caller]
fn config_error(e: config::ConfigError) -> prompt_studio_error::StudioError {
    ConfigError::new(ConfigErrorKind::Load(e.to_string())).into()
}

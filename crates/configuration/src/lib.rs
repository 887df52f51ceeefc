use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{LogLevel, LoggingSettings, ServerSettings, Settings, StorageSettings};

/// The prefix for environment overrides, e.g. `PROFITLENS__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "PROFITLENS";

/// Loads the application settings.
///
/// Values come from built-in defaults, then the TOML file at `path` if it exists,
/// then `PROFITLENS__*` environment variables. The result is validated before it is returned.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        // The file is optional so the binary runs out of the box.
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;

    tracing::debug!(path = %path.display(), ?settings, "Loaded configuration.");
    Ok(settings)
}

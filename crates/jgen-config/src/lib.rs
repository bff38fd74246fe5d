//! Settings for the code-generation engine, loaded from TOML.
//!
//! Every table is optional; a missing key takes the default documented on the field. Unknown
//! keys are rejected so a typo never silently falls back to a default.

use std::path::Path;
use std::sync::Once;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Packages a Java compilation unit can use without an import.
pub const DEFAULT_IMPLICIT_PACKAGE: &str = "java.lang";

/// Narrowest reflow width a documentation comment can be laid out in.
pub const MIN_COMMENT_LINE_LENGTH: usize = 20;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    #[serde(default)]
    pub imports: ImportsConfig,

    #[serde(default)]
    pub comments: CommentsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImportsConfig {
    /// Packages whose types never need an import statement.
    #[serde(default = "ImportsConfig::default_implicit_packages")]
    pub implicit_packages: Vec<String>,
}

impl ImportsConfig {
    fn default_implicit_packages() -> Vec<String> {
        vec![DEFAULT_IMPLICIT_PACKAGE.to_owned()]
    }
}

impl Default for ImportsConfig {
    fn default() -> Self {
        Self {
            implicit_packages: Self::default_implicit_packages(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommentsConfig {
    /// Reflow width for documentation comments, including indent and comment markers.
    #[serde(default = "CommentsConfig::default_max_line_length")]
    pub max_line_length: usize,

    /// Prefix applied to every line of a documentation comment.
    #[serde(default)]
    pub indent: String,
}

impl CommentsConfig {
    fn default_max_line_length() -> usize {
        100
    }
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            max_line_length: Self::default_max_line_length(),
            indent: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// A simple level (`info`, `debug`, ...) or a full `EnvFilter` directive string.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,

    /// Emit logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_owned()
    }

    pub(crate) fn normalize_level_directives(input: &str) -> String {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Self::default_level();
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "trace" => "trace".to_owned(),
            "debug" => "debug".to_owned(),
            "info" => "info".to_owned(),
            "warn" | "warning" => "warn".to_owned(),
            "error" => "error".to_owned(),
            // Anything else is an `EnvFilter` directive string.
            _ => trimmed.to_owned(),
        }
    }

    fn config_env_filter(&self) -> tracing_subscriber::EnvFilter {
        let directives = Self::normalize_level_directives(&self.level);
        tracing_subscriber::EnvFilter::try_new(directives).unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::default()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
        })
    }

    /// The effective `EnvFilter`: the configured level, with `RUST_LOG` merged in when set.
    ///
    /// Unparseable directives fall back to `RUST_LOG` alone, then to the configured level,
    /// then to `info`.
    pub fn env_filter(&self) -> tracing_subscriber::EnvFilter {
        let env_directives = std::env::var("RUST_LOG")
            .ok()
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());

        let config_directives = Self::normalize_level_directives(&self.level);

        match env_directives {
            Some(env_directives) => {
                let combined = format!("{config_directives},{env_directives}");
                tracing_subscriber::EnvFilter::try_new(combined)
                    .or_else(|_| tracing_subscriber::EnvFilter::try_new(env_directives))
                    .unwrap_or_else(|_| self.config_env_filter())
            }
            None => self.config_env_filter(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            json: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse toml config: {0}")]
    Toml(String),
    #[error("invalid `{field}`: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        // The default `Display` embeds a source snippet; keep only the message.
        ConfigError::Toml(err.message().to_owned())
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load, parse and validate a TOML config file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            target: "jgen.config",
            path = %path.display(),
            implicit_packages = config.imports.implicit_packages.len(),
            "loaded engine config"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(index) = self
            .imports
            .implicit_packages
            .iter()
            .position(|package| package.trim().is_empty())
        {
            return Err(ConfigError::Invalid {
                field: "imports.implicit_packages",
                message: format!("entry {index} is empty"),
            });
        }
        if self.comments.max_line_length < MIN_COMMENT_LINE_LENGTH {
            return Err(ConfigError::Invalid {
                field: "comments.max_line_length",
                message: format!(
                    "{} is below the minimum of {MIN_COMMENT_LINE_LENGTH}",
                    self.comments.max_line_length
                ),
            });
        }
        Ok(())
    }
}

static TRACING_INIT: Once = Once::new();

/// Install the global `tracing` subscriber described by `config`.
///
/// Only the first call has an effect. If the host already installed a global subscriber, that
/// one is kept.
pub fn init_tracing(config: &LoggingConfig) {
    TRACING_INIT.call_once(|| {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(config.env_filter())
            .with_writer(std::io::stderr)
            .with_ansi(false);
        let installed = if config.json {
            builder.json().try_init().is_ok()
        } else {
            builder.try_init().is_ok()
        };
        if installed {
            tracing::debug!(
                target: "jgen.config",
                level = %config.level,
                json = config.json,
                "tracing initialized"
            );
        }
    });
}

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::charset;

/// Where a conversion result is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Print the grid to stdout.
    #[default]
    Console,
    /// Write the grid to an HTML file.
    Html,
}

/// Session configuration, loadable from TOML.
///
/// Every field has a sane default; a missing config file means pure defaults.
///
/// # Example
/// ```
/// use la_core::config::SessionConfig;
/// let config = SessionConfig::default();
/// assert_eq!(config.resolution, 128);
/// assert_eq!(config.charset, "0123456789");
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Grid resolution (characters per row and column). Power of two.
    pub resolution: u32,
    /// Initial palette characters.
    pub charset: String,
    /// Output mode for conversion results.
    pub output: OutputMode,
    /// Target file for HTML output.
    pub html_path: String,
    /// Font family used in HTML output.
    pub html_font: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            resolution: 128,
            charset: charset::CHARSET_DIGITS.to_string(),
            output: OutputMode::Console,
            html_path: "out.html".to_string(),
            html_font: "Courier New".to_string(),
        }
    }
}

impl SessionConfig {
    /// Clamp fields to valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.resolution = self.resolution.clamp(1, 4096).next_power_of_two();
    }
}

/// Resolve a charset argument: preset name, or the literal characters.
#[must_use]
pub fn resolve_charset(arg: &str) -> String {
    charset::preset(arg).unwrap_or(arg).to_string()
}

/// TOML file layout, all fields optional for partial override.
#[derive(Deserialize)]
struct ConfigFile {
    conversion: Option<ConversionSection>,
    output: Option<OutputSection>,
}

#[derive(Deserialize)]
struct ConversionSection {
    resolution: Option<u32>,
    charset: Option<String>,
}

#[derive(Deserialize)]
struct OutputSection {
    mode: Option<OutputMode>,
    html_path: Option<String>,
    html_font: Option<String>,
}

/// Load a TOML file and merge it over the defaults.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use la_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<SessionConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("TOML parse error in {}", path.display()))?;

    let mut config = SessionConfig::default();

    if let Some(c) = file.conversion {
        if let Some(v) = c.resolution {
            config.resolution = v;
        }
        if let Some(v) = c.charset {
            config.charset = resolve_charset(&v);
        }
    }
    if let Some(o) = file.output {
        if let Some(v) = o.mode {
            config.output = v;
        }
        if let Some(v) = o.html_path {
            config.html_path = v;
        }
        if let Some(v) = o.html_font {
            config.html_font = v;
        }
    }

    config.clamp_all();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let file: ConfigFile = toml::from_str("[conversion]\nresolution = 64\n").unwrap();
        let mut config = SessionConfig::default();
        if let Some(c) = file.conversion {
            if let Some(v) = c.resolution {
                config.resolution = v;
            }
            if let Some(v) = c.charset {
                config.charset = v;
            }
        }
        assert_eq!(config.resolution, 64);
        assert_eq!(config.charset, charset::CHARSET_DIGITS);
    }

    #[test]
    fn clamp_rounds_resolution_to_power_of_two() {
        let mut config = SessionConfig {
            resolution: 100,
            ..SessionConfig::default()
        };
        config.clamp_all();
        assert_eq!(config.resolution, 128);

        config.resolution = 0;
        config.clamp_all();
        assert_eq!(config.resolution, 1);
    }

    #[test]
    fn charset_argument_accepts_presets_and_literals() {
        assert_eq!(resolve_charset("compact"), charset::CHARSET_COMPACT);
        assert_eq!(resolve_charset(" .:#@"), " .:#@");
    }

    #[test]
    fn output_mode_deserializes_lowercase() {
        let file: ConfigFile = toml::from_str("[output]\nmode = \"html\"\n").unwrap();
        assert_eq!(file.output.and_then(|o| o.mode), Some(OutputMode::Html));
    }
}

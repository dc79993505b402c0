//! User configuration loaded from `config.toml`.
//!
//! Lives in `~/.config/vpnforge/` (or `$VPNFORGE_CONFIG_DIR`). Every field
//! is optional; a missing or unreadable file falls back to defaults.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::constants;
use crate::state::Protocol;

/// Raw on-disk representation. All fields optional.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    default_protocol: Option<String>,
    output_dir: Option<PathBuf>,
    tick_rate_ms: Option<u64>,
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Protocol selected when the app starts.
    pub default_protocol: Protocol,
    /// Directory saved configs are written to.
    pub output_dir: PathBuf,
    /// UI refresh rate in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_protocol: Protocol::default(),
            output_dir: PathBuf::from("."),
            tick_rate_ms: constants::DEFAULT_TICK_RATE,
        }
    }
}

impl Config {
    /// Load the config from the default location, falling back to defaults
    /// when the file is missing or unreadable.
    #[must_use]
    pub fn load() -> Self {
        let Some(dir) = config_dir() else {
            return Self::default();
        };
        let path = dir.join(constants::CONFIG_FILE_NAME);
        match std::fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content),
            Err(_) => Self::default(),
        }
    }

    /// Parse a config from TOML text. Unknown protocol keys and malformed
    /// documents fall back to defaults field by field.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let raw: RawConfig = toml::from_str(content).unwrap_or_default();
        let defaults = Self::default();

        Self {
            default_protocol: raw
                .default_protocol
                .as_deref()
                .and_then(|s| Protocol::from_str(s).ok())
                .unwrap_or(defaults.default_protocol),
            output_dir: raw.output_dir.unwrap_or(defaults.output_dir),
            tick_rate_ms: raw.tick_rate_ms.unwrap_or(defaults.tick_rate_ms),
        }
    }

    /// Expand `~/` in the output directory against the user's home.
    #[must_use]
    pub fn resolved_output_dir(&self) -> PathBuf {
        expand_home(&self.output_dir)
    }
}

/// The config directory: `$VPNFORGE_CONFIG_DIR` if set, otherwise
/// `~/.config/vpnforge`.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(constants::ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR_NAME))
}

/// Expand a leading `~/` to the user's home directory.
fn expand_home(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_protocol, Protocol::WireGuard);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.tick_rate_ms, constants::DEFAULT_TICK_RATE);
    }

    #[test]
    fn test_parse_full() {
        let config = Config::parse(
            r#"
default_protocol = "openvpn"
output_dir = "/tmp/configs"
tick_rate_ms = 500
"#,
        );
        assert_eq!(config.default_protocol, Protocol::OpenVpn);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/configs"));
        assert_eq!(config.tick_rate_ms, 500);
    }

    #[test]
    fn test_parse_partial_keeps_defaults() {
        let config = Config::parse(r#"default_protocol = "ikev2""#);
        assert_eq!(config.default_protocol, Protocol::Ikev2);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.tick_rate_ms, constants::DEFAULT_TICK_RATE);
    }

    #[test]
    fn test_parse_unknown_protocol_falls_back() {
        let config = Config::parse(r#"default_protocol = "pptp""#);
        assert_eq!(config.default_protocol, Protocol::WireGuard);
    }

    #[test]
    fn test_parse_malformed_document() {
        let config = Config::parse("not even close to toml = = =");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_expand_home_passthrough() {
        assert_eq!(
            expand_home(Path::new("/absolute/path")),
            PathBuf::from("/absolute/path")
        );
    }
}

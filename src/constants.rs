//! Application-wide constants and configuration values.
//!
//! This module defines all static configuration values used throughout
//! vpnforge, including timing intervals, template endpoints, file naming,
//! and UI messages.

#![allow(dead_code)]

// === Application Metadata ===

/// Application name and title (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Short technical summary of the application (from Cargo.toml).
pub const APP_SUMMARY: &str = env!("CARGO_PKG_DESCRIPTION");

// === Timing Configuration ===

/// UI refresh rate in milliseconds.
pub const DEFAULT_TICK_RATE: u64 = 250;
/// How long a toast notification stays on screen in milliseconds.
pub const TOAST_DURATION_MS: u64 = 2500;

// === Path & Environment Configuration ===

/// Name of the configuration directory under ~/.config/
pub const CONFIG_DIR_NAME: &str = "vpnforge";
/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "VPNFORGE_CONFIG_DIR";

// === Template Endpoints ===
//
// Example values baked into the templates. They do not point at a real
// server; the generated configs are placeholder text.

/// Hostname used in every generated template.
pub const TEMPLATE_HOST: &str = "vpn.example.com";
/// OpenVPN remote port.
pub const OPENVPN_PORT: u16 = 1194;
/// WireGuard endpoint port.
pub const WIREGUARD_PORT: u16 = 51820;

// === Generator Configuration ===

/// Length of the pseudo-random filler token.
pub const TOKEN_LEN: usize = 13;
/// Characters the filler token is drawn from.
pub const TOKEN_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
/// Prefix for suggested download filenames.
pub const FILENAME_PREFIX: &str = "vpn-config";
/// File extension for OpenVPN configs.
pub const EXT_OVPN: &str = "ovpn";
/// File extension for WireGuard/IKEv2/IPSec configs.
pub const EXT_CONF: &str = "conf";

// === Messages: Toast ===

pub const MSG_COPIED: &str = "Config copied to clipboard";
pub const MSG_COPY_FAILED: &str = "Clipboard unavailable (is xclip or xsel installed?)";
pub const MSG_SAVED: &str = "Saved ";
pub const MSG_SAVE_FAILED: &str = "Save failed: ";
pub const MSG_GENERATED: &str = "Generated ";
pub const MSG_GENERATED_SUFFIX: &str = " config";
pub const MSG_NOTHING_TO_EXPORT: &str = "Generate a config first";

// === Messages: CLI Output ===

pub const CLI_MSG_GENERATED: &str = "Generated config: ";
pub const CLI_MSG_WRITE_FAILED: &str = "Failed to write config: ";
pub const CLI_MSG_LIST_HEADER: &str = "Supported protocols:";

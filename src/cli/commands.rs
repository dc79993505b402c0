//! Headless CLI command handlers.

use std::path::PathBuf;

use crate::config::Config;
use crate::constants;
use crate::generator::{self, export};
use crate::state::{Protocol, ALL_PROTOCOLS};

/// Handle `vpnforge generate`.
///
/// Writes `vpn-config-<key>.<ext>` into the output directory (flag, then
/// config, in that order) or prints the text to stdout.
pub fn generate(protocol: Protocol, output: Option<PathBuf>, stdout: bool) -> Result<(), String> {
    let text = generator::generate(protocol);

    if stdout {
        println!("{text}");
        return Ok(());
    }

    let dir = output.unwrap_or_else(|| Config::load().resolved_output_dir());
    let filename = export::filename_for(protocol);
    let path = export::save_to_file(&text, &dir, &filename)
        .map_err(|e| format!("{}{e}", constants::CLI_MSG_WRITE_FAILED))?;

    println!("{}{}", constants::CLI_MSG_GENERATED, path.display());
    Ok(())
}

/// Handle `vpnforge list`: print the protocol reference table.
pub fn list() {
    println!("{}", constants::CLI_MSG_LIST_HEADER);
    for protocol in ALL_PROTOCOLS {
        let info = protocol.info();
        println!(
            "  {:<10} {:<12} speed: {:<8} security: {}",
            protocol.key(),
            info.name,
            info.speed,
            info.security
        );
    }
}

//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::state::Protocol;

/// vpnforge - Terminal UI VPN config generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Subcommand to execute; without one the TUI starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a config without starting the TUI
    Generate {
        /// Protocol: openvpn, wireguard, ikev2 or ipsec
        protocol: Protocol,
        /// Directory to write the config file into
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Print the config to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// List the supported protocols
    List,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_no_subcommand() {
        let args = Args::parse_from(["vpnforge"]);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_parse_generate() {
        let args = Args::parse_from(["vpnforge", "generate", "wireguard", "--stdout"]);
        match args.command {
            Some(Commands::Generate {
                protocol, stdout, ..
            }) => {
                assert_eq!(protocol, Protocol::WireGuard);
                assert!(stdout);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_generate_with_output() {
        let args = Args::parse_from(["vpnforge", "generate", "ikev2", "-o", "/tmp"]);
        match args.command {
            Some(Commands::Generate { output, .. }) => {
                assert_eq!(output, Some(PathBuf::from("/tmp")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_protocol() {
        assert!(Args::try_parse_from(["vpnforge", "generate", "pptp"]).is_err());
    }
}

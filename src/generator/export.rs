//! Exporting generated configs: suggested filenames, file save, clipboard.

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants;
use crate::state::Protocol;

/// Suggested download filename: `vpn-config-<key>.<ext>`.
///
/// OpenVPN gets `.ovpn`; WireGuard, IKEv2 and IPSec get `.conf`.
#[must_use]
pub fn filename_for(protocol: Protocol) -> String {
    format!(
        "{}-{}.{}",
        constants::FILENAME_PREFIX,
        protocol.key(),
        extension_for(protocol)
    )
}

/// File extension for a protocol's config format.
#[must_use]
pub const fn extension_for(protocol: Protocol) -> &'static str {
    match protocol {
        Protocol::OpenVpn => constants::EXT_OVPN,
        Protocol::WireGuard | Protocol::Ikev2 | Protocol::Ipsec => constants::EXT_CONF,
    }
}

/// Write `text` to `dir/filename`, suffixing the name rather than
/// overwriting an existing file.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or the file
/// cannot be written.
pub fn save_to_file(text: &str, dir: &Path, filename: &str) -> Result<PathBuf, String> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| format!("Failed to create directory: {e}"))?;
    }

    let path = unique_path(dir, filename);
    fs::write(&path, text).map_err(|e| format!("Failed to write file: {e}"))?;
    Ok(path)
}

/// Find a path in `dir` that does not collide with an existing file by
/// appending `(1)`, `(2)`, ... to the stem.
fn unique_path(dir: &Path, filename: &str) -> PathBuf {
    let candidate = dir.join(filename);
    if !candidate.exists() {
        return candidate;
    }

    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    let ext = Path::new(filename).extension().and_then(|e| e.to_str());

    for n in 1.. {
        let name = match ext {
            Some(ext) => format!("{stem}({n}).{ext}"),
            None => format!("{stem}({n})"),
        };
        let candidate = dir.join(name);
        if !candidate.exists() {
            return candidate;
        }
    }
    unreachable!()
}

/// Place `text` on the system clipboard. Returns false when no clipboard
/// tool is available or the copy fails; there is no recovery beyond that.
#[must_use]
pub fn copy_to_clipboard(text: &str) -> bool {
    #[cfg(target_os = "macos")]
    let result = pipe_to_command("pbcopy", text);

    #[cfg(target_os = "linux")]
    let result = pipe_to_command("xclip", text).or_else(|| pipe_to_command("xsel", text));

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    let result: Option<()> = None;

    result.is_some()
}

/// Pipe `text` to a command's stdin.
#[cfg(any(target_os = "macos", target_os = "linux"))]
fn pipe_to_command(cmd: &str, text: &str) -> Option<()> {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let mut child = Command::new(cmd)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .ok()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).ok()?;
    }

    let status = child.wait().ok()?;
    status.success().then_some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_mapping() {
        assert_eq!(extension_for(Protocol::OpenVpn), "ovpn");
        assert_eq!(extension_for(Protocol::WireGuard), "conf");
        assert_eq!(extension_for(Protocol::Ikev2), "conf");
        assert_eq!(extension_for(Protocol::Ipsec), "conf");
    }

    #[test]
    fn test_filename_for() {
        assert_eq!(filename_for(Protocol::OpenVpn), "vpn-config-openvpn.ovpn");
        assert_eq!(
            filename_for(Protocol::WireGuard),
            "vpn-config-wireguard.conf"
        );
        assert_eq!(filename_for(Protocol::Ikev2), "vpn-config-ikev2.conf");
        assert_eq!(filename_for(Protocol::Ipsec), "vpn-config-ipsec.conf");
    }

    #[test]
    fn test_save_to_file_writes_content() {
        let dir = std::env::temp_dir().join("vpnforge-test-save");
        let _ = fs::remove_dir_all(&dir);

        let path = save_to_file("client\ndev tun", &dir, "vpn-config-openvpn.ovpn").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "client\ndev tun");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_to_file_does_not_overwrite() {
        let dir = std::env::temp_dir().join("vpnforge-test-unique");
        let _ = fs::remove_dir_all(&dir);

        let first = save_to_file("first", &dir, "vpn-config-ikev2.conf").unwrap();
        let second = save_to_file("second", &dir, "vpn-config-ikev2.conf").unwrap();

        assert_ne!(first, second);
        assert!(second.to_string_lossy().contains("vpn-config-ikev2(1)"));
        assert_eq!(fs::read_to_string(&first).unwrap(), "first");
        assert_eq!(fs::read_to_string(&second).unwrap(), "second");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unique_path_without_collision() {
        let dir = std::env::temp_dir();
        let path = unique_path(&dir, "vpnforge-nonexistent-xyz.conf");
        assert_eq!(path, dir.join("vpnforge-nonexistent-xyz.conf"));
    }
}

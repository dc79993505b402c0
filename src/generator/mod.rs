//! Config template rendering.
//!
//! Maps a protocol selection to a rendered configuration text by
//! substituting a timestamp and a pseudo-random filler token into one of
//! four fixed templates. The output is placeholder text: the "keys" are
//! cosmetic and do not correspond to a working server or real key material.

pub mod export;

use chrono::{SecondsFormat, Utc};
use rand::Rng;

use crate::constants;
use crate::state::Protocol;

/// Render the config template for `protocol`.
///
/// Two successive calls for the same protocol differ only in the timestamp
/// and the random token; every other line is byte-identical.
#[must_use]
pub fn generate(protocol: Protocol) -> String {
    render(protocol, &timestamp(), &random_token())
}

/// Current UTC time in ISO-8601 with millisecond precision (e.g.
/// `2026-08-29T12:34:56.789Z`).
fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Pseudo-random lowercase alphanumeric filler token.
///
/// Not cryptographically secure; it only has to look like a key fragment.
fn random_token() -> String {
    let mut rng = rand::thread_rng();
    (0..constants::TOKEN_LEN)
        .map(|_| constants::TOKEN_CHARSET[rng.gen_range(0..constants::TOKEN_CHARSET.len())] as char)
        .collect()
}

/// Substitute `ts` and `token` into the protocol's template.
fn render(protocol: Protocol, ts: &str, token: &str) -> String {
    match protocol {
        Protocol::OpenVpn => format!(
            "# OpenVPN Configuration\n\
             # Generated: {ts}\n\
             client\n\
             dev tun\n\
             proto udp\n\
             remote vpn.example.com 1194\n\
             resolv-retry infinite\n\
             nobind\n\
             persist-key\n\
             persist-tun\n\
             cipher AES-256-CBC\n\
             auth SHA256\n\
             key-direction 1\n\
             verb 3\n\
             <ca>\n\
             # Certificate Authority\n\
             </ca>\n\
             <cert>\n\
             # Client Certificate\n\
             </cert>\n\
             <key>\n\
             # Private Key: {token}\n\
             </key>\n\
             <tls-auth>\n\
             # TLS Auth Key\n\
             </tls-auth>"
        ),
        Protocol::WireGuard => format!(
            "[Interface]\n\
             # Generated: {ts}\n\
             PrivateKey = {token}base64key==\n\
             Address = 10.0.0.2/32\n\
             DNS = 1.1.1.1, 8.8.8.8\n\
             \n\
             [Peer]\n\
             PublicKey = ServerPublicKeyBase64==\n\
             PresharedKey = PresharedKeyBase64==\n\
             Endpoint = vpn.example.com:51820\n\
             AllowedIPs = 0.0.0.0/0, ::/0\n\
             PersistentKeepalive = 25"
        ),
        Protocol::Ikev2 => format!(
            "# IKEv2/IPSec Configuration\n\
             # Generated: {ts}\n\
             conn vpn-ikev2\n\
             \x20 keyexchange=ikev2\n\
             \x20 ike=aes256-sha256-modp2048!\n\
             \x20 esp=aes256-sha256!\n\
             \x20 dpdaction=clear\n\
             \x20 dpddelay=300s\n\
             \x20 rekey=no\n\
             \x20 left=%any\n\
             \x20 leftid=@client-{token}\n\
             \x20 leftauth=eap-mschapv2\n\
             \x20 right=vpn.example.com\n\
             \x20 rightid=@vpn.example.com\n\
             \x20 rightauth=pubkey\n\
             \x20 rightsendcert=always\n\
             \x20 eap_identity=%identity\n\
             \x20 auto=add"
        ),
        Protocol::Ipsec => format!(
            "# IPSec Configuration\n\
             # Generated: {ts}\n\
             config setup\n\
             \x20 charondebug=\"ike 2, knl 2, cfg 2\"\n\
             \x20 uniqueids=no\n\
             \n\
             conn vpn-ipsec\n\
             \x20 type=tunnel\n\
             \x20 auto=start\n\
             \x20 keyexchange=ikev1\n\
             \x20 authby=secret\n\
             \x20 left=%any\n\
             \x20 leftid=@client-{token}\n\
             \x20 right=vpn.example.com\n\
             \x20 rightid=@vpn.example.com\n\
             \x20 ike=aes256-sha1-modp2048!\n\
             \x20 esp=aes256-sha1!\n\
             \x20 aggressive=yes\n\
             \x20 keyingtries=%forever\n\
             \x20 ikelifetime=24h\n\
             \x20 lifetime=24h\n\
             \x20 dpddelay=30s\n\
             \x20 dpdtimeout=120s\n\
             \x20 dpdaction=restart"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ALL_PROTOCOLS;

    #[test]
    fn test_generate_contains_structural_markers() {
        assert!(generate(Protocol::OpenVpn).contains("client"));
        assert!(generate(Protocol::WireGuard).contains("[Interface]"));
        assert!(generate(Protocol::Ikev2).contains("keyexchange=ikev2"));
        assert!(generate(Protocol::Ipsec).contains("keyexchange=ikev1"));
    }

    #[test]
    fn test_generate_non_empty_for_all_protocols() {
        for protocol in ALL_PROTOCOLS {
            assert!(!generate(protocol).is_empty());
        }
    }

    #[test]
    fn test_token_charset_and_length() {
        let token = random_token();
        assert_eq!(token.len(), crate::constants::TOKEN_LEN);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_successive_calls_differ_only_in_dynamic_lines() {
        for protocol in ALL_PROTOCOLS {
            let a = render(protocol, "2026-01-01T00:00:00.000Z", "aaaaaaaaaaaaa");
            let b = render(protocol, "2026-01-02T00:00:00.000Z", "bbbbbbbbbbbbb");

            let differing: Vec<(&str, &str)> = a
                .lines()
                .zip(b.lines())
                .filter(|(la, lb)| la != lb)
                .collect();

            // Exactly one timestamp line and one token-bearing line.
            assert_eq!(differing.len(), 2, "{protocol}: {differing:?}");
            assert!(differing[0].0.contains("# Generated:"));
            assert!(differing[1].0.contains("aaaaaaaaaaaaa"));
            assert_eq!(a.lines().count(), b.lines().count());
        }
    }

    #[test]
    fn test_wireguard_private_key_line() {
        let config = render(Protocol::WireGuard, "2026-01-01T00:00:00.000Z", "abc123def4567");
        let lines: Vec<&str> = config.lines().collect();
        assert_eq!(lines[0], "[Interface]");
        assert_eq!(lines[2], "PrivateKey = abc123def4567base64key==");
        assert!(config.contains("Endpoint = vpn.example.com:51820"));
    }

    #[test]
    fn test_openvpn_structure() {
        let config = render(Protocol::OpenVpn, "2026-01-01T00:00:00.000Z", "tok1234567890");
        assert!(config.contains("remote vpn.example.com 1194"));
        assert!(config.contains("cipher AES-256-CBC"));
        assert!(config.contains("# Private Key: tok1234567890"));
        assert!(config.contains("<tls-auth>"));
    }

    #[test]
    fn test_identity_embeds_token() {
        let ikev2 = render(Protocol::Ikev2, "2026-01-01T00:00:00.000Z", "tok1234567890");
        assert!(ikev2.contains("leftid=@client-tok1234567890"));

        let ipsec = render(Protocol::Ipsec, "2026-01-01T00:00:00.000Z", "tok1234567890");
        assert!(ipsec.contains("leftid=@client-tok1234567890"));
        assert!(ipsec.contains("config setup"));
    }

    #[test]
    fn test_timestamp_is_iso8601_utc() {
        let ts = timestamp();
        assert!(ts.ends_with('Z'));
        assert!(ts.contains('T'));
        // 2026-08-29T12:34:56.789Z
        assert_eq!(ts.len(), 24);
    }
}

//! VPN protocol types and descriptive reference data.

/// Supported VPN protocol types.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Protocol {
    /// `OpenVPN` protocol.
    OpenVpn,
    /// `WireGuard` VPN protocol.
    #[default]
    WireGuard,
    /// IKEv2 with IPSec transport.
    Ikev2,
    /// Legacy IKEv1-style IPSec.
    Ipsec,
}

/// All protocols in display order.
pub const ALL_PROTOCOLS: [Protocol; 4] = [
    Protocol::OpenVpn,
    Protocol::WireGuard,
    Protocol::Ikev2,
    Protocol::Ipsec,
];

impl Protocol {
    /// Stable lowercase key used in filenames and CLI arguments.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Protocol::OpenVpn => "openvpn",
            Protocol::WireGuard => "wireguard",
            Protocol::Ikev2 => "ikev2",
            Protocol::Ipsec => "ipsec",
        }
    }

    /// Descriptive record for this protocol.
    #[must_use]
    pub fn info(self) -> &'static ProtocolInfo {
        &PROTOCOLS[self as usize]
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.info().name)
    }
}

impl std::str::FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openvpn" => Ok(Protocol::OpenVpn),
            "wireguard" => Ok(Protocol::WireGuard),
            "ikev2" => Ok(Protocol::Ikev2),
            "ipsec" => Ok(Protocol::Ipsec),
            other => Err(format!(
                "Unknown protocol '{other}' (expected openvpn, wireguard, ikev2 or ipsec)"
            )),
        }
    }
}

/// Static descriptive record for a protocol.
///
/// Read-only reference data shown on the overview and generator views.
#[derive(Debug)]
pub struct ProtocolInfo {
    /// Human-readable display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Headline features.
    pub features: [&'static str; 3],
    /// Qualitative speed rating.
    pub speed: &'static str,
    /// Qualitative security rating.
    pub security: &'static str,
}

/// Descriptive records, indexed by `Protocol as usize`.
pub const PROTOCOLS: [ProtocolInfo; 4] = [
    ProtocolInfo {
        name: "OpenVPN",
        description: "Versatile and reliable open-source protocol",
        features: [
            "Works on every platform",
            "Bypasses restrictive firewalls",
            "Flexible configuration",
        ],
        speed: "Medium",
        security: "Very high",
    },
    ProtocolInfo {
        name: "WireGuard",
        description: "Modern protocol with maximum speed and security",
        features: [
            "Fastest of the four",
            "Minimal codebase",
            "Low power consumption",
        ],
        speed: "Maximum",
        security: "Very high",
    },
    ProtocolInfo {
        name: "IKEv2/IPSec",
        description: "Excellent choice for mobile devices",
        features: [
            "Fast reconnection",
            "Stable on mobile networks",
            "Native OS support",
        ],
        speed: "High",
        security: "High",
    },
    ProtocolInfo {
        name: "IPSec",
        description: "Time-tested protocol for corporate networks",
        features: [
            "Built into every OS",
            "Corporate standard",
            "Proven reliability",
        ],
        speed: "Medium",
        security: "High",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_key_round_trip() {
        for protocol in ALL_PROTOCOLS {
            assert_eq!(Protocol::from_str(protocol.key()), Ok(protocol));
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(Protocol::from_str("WireGuard"), Ok(Protocol::WireGuard));
        assert_eq!(Protocol::from_str("OPENVPN"), Ok(Protocol::OpenVpn));
    }

    #[test]
    fn test_from_str_unknown() {
        let err = Protocol::from_str("pptp").unwrap_err();
        assert!(err.contains("Unknown protocol 'pptp'"));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Protocol::OpenVpn.to_string(), "OpenVPN");
        assert_eq!(Protocol::WireGuard.to_string(), "WireGuard");
        assert_eq!(Protocol::Ikev2.to_string(), "IKEv2/IPSec");
        assert_eq!(Protocol::Ipsec.to_string(), "IPSec");
    }

    #[test]
    fn test_default_is_wireguard() {
        assert_eq!(Protocol::default(), Protocol::WireGuard);
    }

    #[test]
    fn test_info_table_alignment() {
        for protocol in ALL_PROTOCOLS {
            let info = protocol.info();
            assert!(!info.description.is_empty());
            assert!(info.features.iter().all(|f| !f.is_empty()));
        }
    }
}

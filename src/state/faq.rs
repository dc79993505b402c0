//! Frequently asked questions reference data.

/// Static question/answer pair shown on the FAQ view.
#[derive(Debug)]
pub struct FaqEntry {
    /// Question text.
    pub question: &'static str,
    /// Answer text.
    pub answer: &'static str,
}

/// FAQ entries in display order.
pub const FAQ_ITEMS: [FaqEntry; 6] = [
    FaqEntry {
        question: "What is a VPN config and why do I need one?",
        answer: "A VPN config is a settings file that lets your device connect to a \
                 VPN server. With it you can secure your traffic, route around \
                 network restrictions and stay anonymous online.",
    },
    FaqEntry {
        question: "Which protocol should I pick?",
        answer: "WireGuard for maximum speed on modern devices. OpenVPN for \
                 universal compatibility and restrictive networks. IKEv2 for mobile \
                 devices. IPSec for corporate environments.",
    },
    FaqEntry {
        question: "How do I use a generated config?",
        answer: "Save the generated file and import it into your VPN application \
                 (for example OpenVPN Connect, the WireGuard app, or your OS's \
                 built-in VPN settings). After importing, simply activate the \
                 connection.",
    },
    FaqEntry {
        question: "Are the configs really unlimited?",
        answer: "Yes! Generated configs carry no limits on usage time, traffic or \
                 number of connections. Use them as much as you like on any device.",
    },
    FaqEntry {
        question: "Which devices do the configs work on?",
        answer: "Configs work on every popular platform: Windows, macOS, Linux, \
                 iOS, Android, routers and any other device that supports the \
                 chosen protocol.",
    },
    FaqEntry {
        question: "Is it safe to use these configs?",
        answer: "Yes, all four protocols use modern encryption. OpenVPN and \
                 WireGuard use AES-256, IKEv2/IPSec also uses AES with Perfect \
                 Forward Secrecy. Your data is well protected.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_entries_non_empty() {
        for entry in &FAQ_ITEMS {
            assert!(!entry.question.is_empty());
            assert!(!entry.answer.is_empty());
        }
    }
}

//! In-session UI state types.
//!
//! Everything here lives only for the current run: navigation, the last
//! generated config and transient toast notifications. Nothing is persisted.

use std::time::Instant;

use crate::state::Protocol;

/// Top-level view sections, navigated with tabs.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Section {
    /// Landing/overview view with protocol cards.
    #[default]
    Home,
    /// Config generator view.
    Generator,
    /// Frequently asked questions view.
    Faq,
}

impl Section {
    /// Cycle to the next section: Home → Generator → FAQ → Home.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Home => Self::Generator,
            Self::Generator => Self::Faq,
            Self::Faq => Self::Home,
        }
    }

    /// Tab title shown in the header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Generator => "Generator",
            Self::Faq => "FAQ",
        }
    }
}

/// A rendered config snapshot.
///
/// Records the protocol the text was generated for; it does not track later
/// selection changes — the snapshot stays as-is until the user regenerates.
#[derive(Clone, Debug)]
pub struct GeneratedConfig {
    /// Protocol the text was generated for.
    pub protocol: Protocol,
    /// Fully substituted template text.
    pub text: String,
}

/// Severity of a toast notification.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastType {
    Info,
    Success,
    Warning,
    Error,
}

/// Transient notification shown as an overlay.
#[derive(Clone, Debug)]
pub struct Toast {
    /// Message text.
    pub message: String,
    /// Severity, which controls the overlay colors.
    pub toast_type: ToastType,
    /// When the toast was created, for auto-dismissal.
    pub created: Instant,
}

impl Toast {
    /// Create a new toast with the current timestamp.
    #[must_use]
    pub fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            message: message.into(),
            toast_type,
            created: Instant::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_cycle() {
        assert_eq!(Section::Home.next(), Section::Generator);
        assert_eq!(Section::Generator.next(), Section::Faq);
        assert_eq!(Section::Faq.next(), Section::Home);
    }

    #[test]
    fn test_section_titles() {
        assert_eq!(Section::Home.title(), "Home");
        assert_eq!(Section::Generator.title(), "Generator");
        assert_eq!(Section::Faq.title(), "FAQ");
    }
}

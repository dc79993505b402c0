//! Application state types and static reference data.

pub mod faq;
pub mod protocol;
pub mod session;

pub use faq::{FaqEntry, FAQ_ITEMS};
pub use protocol::{Protocol, ProtocolInfo, ALL_PROTOCOLS, PROTOCOLS};
pub use session::{GeneratedConfig, Section, Toast, ToastType};

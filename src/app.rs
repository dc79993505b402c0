//! Application state and input handling.
//!
//! `App` owns all session state: the active section, the selected protocol,
//! the last generated config snapshot and transient UI state. It is a plain
//! mutable struct; render functions borrow it, key handling mutates it.

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::Config;
use crate::constants;
use crate::generator::{self, export};
use crate::state::{GeneratedConfig, Protocol, Section, Toast, ToastType, ALL_PROTOCOLS, FAQ_ITEMS};

/// Top-level application state.
pub struct App {
    /// Currently active view section.
    pub section: Section,
    /// Index into [`ALL_PROTOCOLS`] of the selected protocol.
    pub protocol_index: usize,
    /// Last generated config, if any. Tied to the protocol it was
    /// generated for, not to the current selection.
    pub generated: Option<GeneratedConfig>,
    /// Vertical scroll offset of the config preview.
    pub preview_scroll: u16,
    /// Index of the highlighted FAQ question.
    pub faq_index: usize,
    /// Index of the expanded FAQ entry, if any (accordion, at most one).
    pub faq_expanded: Option<usize>,
    /// Active toast notification.
    pub toast: Option<Toast>,
    /// Directory saved configs are written to.
    pub output_dir: PathBuf,
    /// Set when the user asks to quit.
    pub should_quit: bool,
}

impl App {
    /// Create the application state from the loaded configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let protocol_index = ALL_PROTOCOLS
            .iter()
            .position(|p| *p == config.default_protocol)
            .unwrap_or_default();

        Self {
            section: Section::default(),
            protocol_index,
            generated: None,
            preview_scroll: 0,
            faq_index: 0,
            faq_expanded: None,
            toast: None,
            output_dir: config.resolved_output_dir(),
            should_quit: false,
        }
    }

    /// The currently selected protocol.
    #[must_use]
    pub fn selected_protocol(&self) -> Protocol {
        ALL_PROTOCOLS[self.protocol_index]
    }

    /// Handle a key press.
    pub fn on_key(&mut self, key: KeyEvent) {
        // Global bindings first
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.section = self.section.next();
                return;
            }
            KeyCode::Char('1') => {
                self.section = Section::Home;
                return;
            }
            KeyCode::Char('2') => {
                self.section = Section::Generator;
                return;
            }
            KeyCode::Char('3') => {
                self.section = Section::Faq;
                return;
            }
            _ => {}
        }

        match self.section {
            Section::Home => self.on_key_home(key),
            Section::Generator => self.on_key_generator(key),
            Section::Faq => self.on_key_faq(key),
        }
    }

    fn on_key_home(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('g') | KeyCode::Enter => self.section = Section::Generator,
            KeyCode::Char('f') => self.section = Section::Faq,
            _ => {}
        }
    }

    fn on_key_generator(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.protocol_index = self
                    .protocol_index
                    .checked_sub(1)
                    .unwrap_or(ALL_PROTOCOLS.len() - 1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.protocol_index = (self.protocol_index + 1) % ALL_PROTOCOLS.len();
            }
            KeyCode::Enter | KeyCode::Char('g') => self.generate(),
            KeyCode::Char('s') => self.save_generated(),
            KeyCode::Char('c') => self.copy_generated(),
            KeyCode::PageUp => {
                self.preview_scroll = self.preview_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                self.preview_scroll = self.preview_scroll.saturating_add(5);
            }
            _ => {}
        }
    }

    fn on_key_faq(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.faq_index = self.faq_index.checked_sub(1).unwrap_or(FAQ_ITEMS.len() - 1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.faq_index = (self.faq_index + 1) % FAQ_ITEMS.len();
            }
            KeyCode::Enter => {
                // Accordion: re-selecting the open entry closes it
                if self.faq_expanded == Some(self.faq_index) {
                    self.faq_expanded = None;
                } else {
                    self.faq_expanded = Some(self.faq_index);
                }
            }
            _ => {}
        }
    }

    /// Handle a periodic tick: expire the toast when its time is up.
    pub fn on_tick(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.created.elapsed() >= Duration::from_millis(constants::TOAST_DURATION_MS) {
                self.toast = None;
            }
        }
    }

    /// Render a fresh config for the selected protocol, replacing any
    /// previous snapshot.
    pub fn generate(&mut self) {
        let protocol = self.selected_protocol();
        self.generated = Some(GeneratedConfig {
            protocol,
            text: generator::generate(protocol),
        });
        self.preview_scroll = 0;
        self.show_toast(
            format!(
                "{}{protocol}{}",
                constants::MSG_GENERATED,
                constants::MSG_GENERATED_SUFFIX
            ),
            ToastType::Success,
        );
    }

    /// Save the current snapshot to the output directory.
    fn save_generated(&mut self) {
        let Some(generated) = self.generated.clone() else {
            self.show_toast(constants::MSG_NOTHING_TO_EXPORT, ToastType::Warning);
            return;
        };

        let filename = export::filename_for(generated.protocol);
        match export::save_to_file(&generated.text, &self.output_dir, &filename) {
            Ok(path) => self.show_toast(
                format!("{}{}", constants::MSG_SAVED, path.display()),
                ToastType::Success,
            ),
            Err(e) => self.show_toast(
                format!("{}{e}", constants::MSG_SAVE_FAILED),
                ToastType::Error,
            ),
        }
    }

    /// Copy the current snapshot to the system clipboard.
    fn copy_generated(&mut self) {
        let Some(ref generated) = self.generated else {
            self.show_toast(constants::MSG_NOTHING_TO_EXPORT, ToastType::Warning);
            return;
        };

        if export::copy_to_clipboard(&generated.text) {
            self.show_toast(constants::MSG_COPIED, ToastType::Success);
        } else {
            self.show_toast(constants::MSG_COPY_FAILED, ToastType::Error);
        }
    }

    fn show_toast(&mut self, message: impl Into<String>, toast_type: ToastType) {
        self.toast = Some(Toast::new(message, toast_type));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(&Config::default())
    }

    #[test]
    fn test_default_selection_is_wireguard() {
        assert_eq!(app().selected_protocol(), Protocol::WireGuard);
    }

    #[test]
    fn test_config_default_protocol_respected() {
        let config = Config {
            default_protocol: Protocol::Ipsec,
            ..Config::default()
        };
        assert_eq!(App::new(&config).selected_protocol(), Protocol::Ipsec);
    }

    #[test]
    fn test_tab_cycles_sections() {
        let mut app = app();
        app.on_key(key(KeyCode::Tab));
        assert_eq!(app.section, Section::Generator);
        app.on_key(key(KeyCode::Tab));
        assert_eq!(app.section, Section::Faq);
        app.on_key(key(KeyCode::Tab));
        assert_eq!(app.section, Section::Home);
    }

    #[test]
    fn test_number_keys_jump_to_section() {
        let mut app = app();
        app.on_key(key(KeyCode::Char('3')));
        assert_eq!(app.section, Section::Faq);
        app.on_key(key(KeyCode::Char('2')));
        assert_eq!(app.section, Section::Generator);
        app.on_key(key(KeyCode::Char('1')));
        assert_eq!(app.section, Section::Home);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        app.on_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app2 = App::new(&Config::default());
        app2.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app2.should_quit);
    }

    #[test]
    fn test_protocol_selection_wraps() {
        let mut app = app();
        app.section = Section::Generator;
        // WireGuard (index 1) -> up -> OpenVPN (index 0) -> up -> IPSec (index 3)
        app.on_key(key(KeyCode::Up));
        assert_eq!(app.selected_protocol(), Protocol::OpenVpn);
        app.on_key(key(KeyCode::Up));
        assert_eq!(app.selected_protocol(), Protocol::Ipsec);
        app.on_key(key(KeyCode::Down));
        assert_eq!(app.selected_protocol(), Protocol::OpenVpn);
    }

    #[test]
    fn test_generate_records_protocol() {
        let mut app = app();
        app.section = Section::Generator;
        app.on_key(key(KeyCode::Enter));

        let generated = app.generated.as_ref().unwrap();
        assert_eq!(generated.protocol, Protocol::WireGuard);
        assert!(generated.text.contains("[Interface]"));
    }

    #[test]
    fn test_selection_change_leaves_snapshot_untouched() {
        let mut app = app();
        app.section = Section::Generator;
        app.generate();
        let before = app.generated.as_ref().unwrap().text.clone();

        // Switching the selection without regenerating must not change the text
        app.on_key(key(KeyCode::Down));
        app.on_key(key(KeyCode::Down));
        let after = app.generated.as_ref().unwrap();
        assert_eq!(after.text, before);
        assert_eq!(after.protocol, Protocol::WireGuard);
        assert_ne!(app.selected_protocol(), Protocol::WireGuard);
    }

    #[test]
    fn test_generate_resets_preview_scroll() {
        let mut app = app();
        app.section = Section::Generator;
        app.generate();
        app.on_key(key(KeyCode::PageDown));
        assert_eq!(app.preview_scroll, 5);
        app.generate();
        assert_eq!(app.preview_scroll, 0);
    }

    #[test]
    fn test_copy_without_snapshot_warns() {
        let mut app = app();
        app.section = Section::Generator;
        app.on_key(key(KeyCode::Char('c')));
        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.toast_type, ToastType::Warning);
        assert_eq!(toast.message, constants::MSG_NOTHING_TO_EXPORT);
    }

    #[test]
    fn test_faq_accordion_toggle() {
        let mut app = app();
        app.section = Section::Faq;
        app.on_key(key(KeyCode::Down));
        app.on_key(key(KeyCode::Enter));
        assert_eq!(app.faq_expanded, Some(1));
        // Opening another entry closes the first
        app.on_key(key(KeyCode::Down));
        app.on_key(key(KeyCode::Enter));
        assert_eq!(app.faq_expanded, Some(2));
        // Re-selecting the open entry closes it
        app.on_key(key(KeyCode::Enter));
        assert_eq!(app.faq_expanded, None);
    }

    #[test]
    fn test_toast_expires_on_tick() {
        let mut app = app();
        app.toast = Some(Toast {
            message: "done".to_string(),
            toast_type: ToastType::Info,
            created: Instant::now() - Duration::from_millis(constants::TOAST_DURATION_MS + 100),
        });
        app.on_tick();
        assert!(app.toast.is_none());

        app.toast = Some(Toast::new("fresh", ToastType::Info));
        app.on_tick();
        assert!(app.toast.is_some());
    }
}

// TUI application state
//
// Holds the form panel, presentation state (theme, modal, toast) and the
// log buffer the status bar reads from. Key routing lives in tui/mod.rs;
// everything here is plain state transitions so it can be driven in tests.

use super::clipboard;
use super::components::{FormPanel, Toast};
use super::modal::Modal;
use super::theme::{Theme, ThemeKind};
use super::traits::{Copyable, Handled, Interactive};
use crate::config::Config;
use crate::form::SubmitOutcome;
use crate::logging::LogBuffer;
use crossterm::event::KeyEvent;
use std::time::Instant;

/// Which export format a copy request wants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyFormat {
    Text,
    Json,
}

/// Main application state for the TUI
pub struct App {
    /// The form and its editing state
    pub form_panel: FormPanel,

    /// Resolved colors for rendering
    pub theme: Theme,

    /// Which theme `theme` was built from
    pub theme_kind: ThemeKind,

    /// Open overlay, if any
    pub modal: Option<Modal>,

    /// Transient notification
    pub toast: Option<Toast>,

    /// Log buffer for the status bar
    pub log_buffer: LogBuffer,

    /// Whether the app should quit
    pub should_quit: bool,

    /// When the app started (for uptime display)
    pub start_time: Instant,
}

impl App {
    pub fn new(log_buffer: LogBuffer) -> Self {
        Self::with_config(log_buffer, &Config::default())
    }

    /// Build the app with theme settings from config
    pub fn with_config(log_buffer: LogBuffer, config: &Config) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %config.theme, "Unknown theme, falling back to dark");
            ThemeKind::default()
        });
        let theme = if config.use_theme_background {
            theme_kind.theme()
        } else {
            theme_kind.theme().without_background()
        };

        Self {
            form_panel: FormPanel::new(),
            theme,
            theme_kind,
            modal: None,
            toast: None,
            log_buffer,
            should_quit: false,
            start_time: Instant::now(),
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Toggle the help overlay
    pub fn toggle_help(&mut self) {
        self.modal = match self.modal {
            Some(Modal::Help) => None,
            None => Some(Modal::help()),
        };
    }

    /// Submit from anywhere (Ctrl+S)
    pub fn submit(&mut self) {
        let outcome = self.form_panel.submit();
        // Consume it here so dispatch_to_form does not toast twice
        self.form_panel.take_outcome();
        self.announce(outcome);
    }

    /// Route a key to the form panel, announcing any submit it triggered
    pub fn dispatch_to_form(&mut self, key: KeyEvent) -> Handled {
        let handled = self.form_panel.handle_key(key);
        if let Some(outcome) = self.form_panel.take_outcome() {
            self.announce(outcome);
        }
        handled
    }

    fn announce(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Accepted => self.show_toast("✓ Submitted"),
            SubmitOutcome::Rejected { errors: 1 } => self.show_toast("✗ Fix 1 field and resubmit"),
            SubmitOutcome::Rejected { errors } => {
                self.show_toast(format!("✗ Fix {} fields and resubmit", errors))
            }
        }
    }

    /// Copy the confirmation display to the clipboard
    pub fn copy_confirmation(&mut self, format: CopyFormat) {
        let content = match format {
            CopyFormat::Text => self.form_panel.copy_text(),
            CopyFormat::Json => self.form_panel.copy_data(),
        };
        let Some(content) = content else {
            self.show_toast("Nothing submitted yet");
            return;
        };

        match clipboard::copy_to_clipboard(&content) {
            Ok(()) => {
                let what = match format {
                    CopyFormat::Text => "text",
                    CopyFormat::Json => "JSON",
                };
                tracing::debug!(format = what, "Copied confirmation");
                self.show_toast(format!("✓ Copied {} to clipboard", what));
            }
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {:#}", e);
                self.show_toast("✗ Failed to copy");
            }
        }
    }

    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        format!(
            "{:02}:{:02}:{:02}",
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60
        )
    }
}

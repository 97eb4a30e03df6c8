// Status bar component
//
// Renders form phase, outstanding findings, key hints and the latest log line.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::tui::traits::Interactive;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Adapts to terminal width:
/// - Compact: phase and findings only
/// - Normal: adds key hints for the focused stop
/// - Wide: adds uptime and the most recent log entry
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let state = app.form_panel.state();
    let bp = Breakpoint::from_width(area.width);

    let findings = match state.errors().len() {
        0 => "✓ valid".to_string(),
        1 => "✗ 1 field invalid".to_string(),
        n => format!("✗ {} fields invalid", n),
    };

    let mut status_text = format!(" {} │ {}", state.phase().name(), findings);

    if bp.at_least(Breakpoint::Normal) {
        if let Some(hint) = app.form_panel.focus_hint() {
            status_text.push_str(&format!(" │ {}", hint));
        }
    }

    if bp.at_least(Breakpoint::Wide) {
        status_text.push_str(&format!(" │ {}", app.uptime()));
        if let Some(entry) = app.log_buffer.latest() {
            status_text.push_str(&format!(
                " │ {} {} {}",
                entry.timestamp.format("%H:%M:%S"),
                entry.level.as_str(),
                entry.message
            ));
        }
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}

// Title bar component
//
// Renders the form heading, marked once a submission has been accepted,
// with the active theme name on the right.

use crate::form::{Document, Role, Section};
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App, doc: &Document) {
    let heading = doc
        .section(Section::Header)
        .find(|n| n.role == Role::Heading)
        .map_or("", |n| n.text.as_str());

    let icon = if app.form_panel.state().is_submitted() {
        "✓"
    } else {
        "✉"
    };

    let title = Paragraph::new(format!(" {} {}", icon, heading))
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(format!(" {} │ F1 ", app.theme.name)).right_aligned()),
        );

    f.render_widget(title, area);
}

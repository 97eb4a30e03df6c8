// Views module - screen-level rendering
//
// One screen: title bar, form panel, the confirmation panel once something
// has been submitted, and the status bar. Overlays (help, toast) go last.

mod modal;

use super::app::App;
use crate::form::Document;
use crate::tui::components::{status_bar, title_bar, ConfirmationPanel};
use crate::tui::components::form_panel::PANEL_HEIGHT;
use crate::tui::layout::Breakpoint;
use crate::tui::traits::{Component, ComponentId, RenderContext};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

const TITLE_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 2;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    // Apply theme background to entire frame (respects use_theme_background toggle)
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let doc = Document::render(app.form_panel.state());
    let confirmation = app
        .form_panel
        .state()
        .display()
        .and_then(|d| ConfirmationPanel::from_document(&doc, d.submitted_at));

    let mut constraints = vec![
        Constraint::Length(TITLE_HEIGHT),
        Constraint::Length(PANEL_HEIGHT),
    ];
    if let Some(panel) = &confirmation {
        let columns = form_column(f.area()).width;
        constraints.push(Constraint::Length(panel.height(columns)));
    }
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(STATUS_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    let ctx = RenderContext::new(&app.theme, ComponentId::Form);

    title_bar::render(f, chunks[0], app, &doc);
    app.form_panel.render(f, form_column(chunks[1]), &ctx);
    if let Some(panel) = &confirmation {
        panel.render(f, form_column(chunks[2]), &ctx);
    }
    status_bar::render(f, chunks[chunks.len() - 1], app);

    if let Some(modal_state) = app.modal {
        modal::render(f, &modal_state, app);
    }

    // Toast goes on top of the modal too
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    app.clear_expired_toast();
}

/// Left-aligned column of responsive width for form content
fn form_column(area: Rect) -> Rect {
    let width = Breakpoint::from_width(area.width).form_width(area.width);
    Rect { width, ..area }
}

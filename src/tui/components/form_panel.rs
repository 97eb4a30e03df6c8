//! Form panel component
//!
//! Owns the form state plus the editing state around it:
//! - Focus stop (one of the four inputs, or the submit button)
//! - Cursor position inside the focused input, in chars
//! - Outcome of the last submit, picked up by the App for a toast
//!
//! Rendering draws the form section of `Document::render(&state)`: one
//! bordered input per field with the label as its title, the field's
//! finding underneath, then the submit button.

use crate::form::{
    view::SUBMIT_LABEL, Document, Field, FormState, Role, Section, SubmitOutcome,
};
use crate::tui::traits::{Component, ComponentId, Copyable, Handled, Interactive, RenderContext};
use crate::util::{display_width, scroll_window};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input (3) + finding line (1)
const FIELD_HEIGHT: u16 = 4;

/// Rows taken by the submit button line
const BUTTON_HEIGHT: u16 = 1;

/// Total rows the panel wants, borders included
pub const PANEL_HEIGHT: u16 = FIELD_HEIGHT * Field::ALL.len() as u16 + BUTTON_HEIGHT + 2;

/// Where keyboard input currently goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input(Field),
    Submit,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Input(Field::FirstName),
        Focus::Input(Field::LastName),
        Focus::Input(Field::Email),
        Focus::Input(Field::Message),
        Focus::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next focus stop (wraps at end)
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous focus stop (wraps at start)
    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Input(Field::FirstName)
    }
}

/// Form panel component
pub struct FormPanel {
    state: FormState,
    pub focus: Focus,
    /// Cursor inside the focused input, counted in chars
    pub cursor: usize,
    last_outcome: Option<SubmitOutcome>,
}

impl FormPanel {
    pub fn new() -> Self {
        Self {
            state: FormState::new(),
            focus: Focus::default(),
            cursor: 0,
            last_outcome: None,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Submit the form, remembering the outcome for `take_outcome`
    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.state.on_submit();
        self.last_outcome = Some(outcome);
        outcome
    }

    /// Outcome of a submit triggered from inside the panel, consumed once
    pub fn take_outcome(&mut self) -> Option<SubmitOutcome> {
        self.last_outcome.take()
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    /// Move focus; the cursor lands at the end of the newly focused input
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.cursor = match focus {
            Focus::Input(field) => self.state.value(field).chars().count(),
            Focus::Submit => 0,
        };
    }

    fn focused_field(&self) -> Option<Field> {
        match self.focus {
            Focus::Input(field) => Some(field),
            Focus::Submit => None,
        }
    }

    fn insert_char(&mut self, field: Field, ch: char) {
        let mut chars: Vec<char> = self.state.value(field).chars().collect();
        let at = self.cursor.min(chars.len());
        chars.insert(at, ch);
        self.state
            .on_field_change(field, chars.into_iter().collect::<String>());
        self.cursor = at + 1;
    }

    /// Remove the char at `index`; returns false when there is none
    fn remove_char(&mut self, field: Field, index: usize) -> bool {
        let mut chars: Vec<char> = self.state.value(field).chars().collect();
        if index >= chars.len() {
            return false;
        }
        chars.remove(index);
        self.state
            .on_field_change(field, chars.into_iter().collect::<String>());
        true
    }

    fn handle_input_key(&mut self, field: Field, key: KeyEvent) -> Handled {
        let len = self.state.value(field).chars().count();
        match key.code {
            KeyCode::Char(ch)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                self.insert_char(field, ch);
                Handled::Yes
            }
            KeyCode::Backspace => {
                if self.cursor > 0 && self.remove_char(field, self.cursor - 1) {
                    self.cursor -= 1;
                }
                Handled::Yes
            }
            KeyCode::Delete => {
                self.remove_char(field, self.cursor);
                Handled::Yes
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                Handled::Yes
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(len);
                Handled::Yes
            }
            KeyCode::Home => {
                self.cursor = 0;
                Handled::Yes
            }
            KeyCode::End => {
                self.cursor = len;
                Handled::Yes
            }
            KeyCode::Enter => {
                self.focus_next();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn render_input(&self, f: &mut Frame, area: Rect, doc: &Document, field: Field, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id()) && self.focus == Focus::Input(field);

        let label = field.label();
        let value = doc.get_by_label(label).map_or("", |n| n.text.as_str());
        let alert = doc.alert_for(field);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let border_color = if focused {
            theme.highlight
        } else if alert.is_some() {
            theme.error
        } else if self.state.is_touched(field) && !value.is_empty() {
            theme.success
        } else {
            theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(format!(" {} ", label), Style::default().fg(theme.label)));
        let inner = block.inner(chunks[0]);

        let cursor = if focused { self.cursor } else { 0 };
        let (visible, cursor_col) = scroll_window(value, cursor, inner.width as usize);
        let input = Paragraph::new(visible.to_string())
            .style(Style::default().fg(theme.foreground))
            .block(block);
        f.render_widget(input, chunks[0]);

        if focused {
            f.set_cursor_position(Position::new(inner.x + cursor_col as u16, inner.y));
        }

        if let Some(alert) = alert {
            let line = Paragraph::new(Line::from(Span::styled(
                format!(" {}", alert.text),
                Style::default().fg(theme.error),
            )));
            f.render_widget(line, chunks[1]);
        }
    }

    fn render_button(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let focused = ctx.is_focused(self.id()) && self.focus == Focus::Submit;
        let style = if focused {
            Style::default()
                .fg(ctx.theme.background)
                .bg(ctx.theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ctx.theme.highlight)
        };
        let text = format!("[ {} ]", SUBMIT_LABEL);
        let pad = (area.width as usize).saturating_sub(display_width(&text)) / 2;
        let line = Line::from(vec![Span::raw(" ".repeat(pad)), Span::styled(text, style)]);
        f.render_widget(Paragraph::new(line), area);
    }
}

impl Default for FormPanel {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Component for FormPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Form
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let doc = Document::render(&self.state);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(ctx.theme.border_type)
            .border_style(Style::default().fg(ctx.theme.border));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut constraints: Vec<Constraint> = Field::ALL
            .iter()
            .map(|_| Constraint::Length(FIELD_HEIGHT))
            .collect();
        constraints.push(Constraint::Length(BUTTON_HEIGHT));
        constraints.push(Constraint::Min(0));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        for (i, field) in Field::ALL.into_iter().enumerate() {
            self.render_input(f, rows[i], &doc, field, ctx);
        }
        if doc.section(Section::Form).any(|n| n.role == Role::Button) {
            self.render_button(f, rows[Field::ALL.len()], ctx);
        }
    }
}

impl Interactive for FormPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                return Handled::Yes;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                return Handled::Yes;
            }
            _ => {}
        }

        match self.focused_field() {
            Some(field) => self.handle_input_key(field, key),
            None => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.submit();
                    Handled::Yes
                }
                _ => Handled::No,
            },
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        match self.focus {
            Focus::Input(_) => Some("Tab/↓:next  Shift+Tab/↑:prev  Ctrl+S:submit"),
            Focus::Submit => Some("Enter:submit  Tab:first field"),
        }
    }
}

impl Copyable for FormPanel {
    fn copy_text(&self) -> Option<String> {
        self.state.display().map(|d| d.to_text())
    }

    fn copy_data(&self) -> Option<String> {
        let display = self.state.display()?;
        serde_json::to_string(display).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(panel: &mut FormPanel, code: KeyCode) -> Handled {
        panel.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(panel: &mut FormPanel, text: &str) {
        for ch in text.chars() {
            press(panel, KeyCode::Char(ch));
        }
    }

    #[test]
    fn focus_cycles_through_inputs_and_button() {
        let mut panel = FormPanel::new();
        let mut seen = vec![panel.focus];
        for _ in 0..5 {
            press(&mut panel, KeyCode::Tab);
            seen.push(panel.focus);
        }
        assert_eq!(seen.first(), seen.last());
        assert!(seen.contains(&Focus::Submit));

        press(&mut panel, KeyCode::BackTab);
        assert_eq!(panel.focus, Focus::Submit);
    }

    #[test]
    fn typing_edits_the_focused_field_and_validates_live() {
        let mut panel = FormPanel::new();
        type_text(&mut panel, "John");
        assert_eq!(panel.state().value(Field::FirstName), "John");
        assert_eq!(
            panel.state().error(Field::FirstName).unwrap().message,
            "firstName must have at least 5 characters."
        );
        assert_eq!(panel.state().errors().len(), 1);
    }

    #[test]
    fn cursor_editing_inserts_and_deletes_in_place() {
        let mut panel = FormPanel::new();
        type_text(&mut panel, "Jhn");
        press(&mut panel, KeyCode::Left);
        press(&mut panel, KeyCode::Left);
        type_text(&mut panel, "o");
        assert_eq!(panel.state().value(Field::FirstName), "John");

        press(&mut panel, KeyCode::Home);
        press(&mut panel, KeyCode::Delete);
        assert_eq!(panel.state().value(Field::FirstName), "ohn");

        press(&mut panel, KeyCode::End);
        press(&mut panel, KeyCode::Backspace);
        assert_eq!(panel.state().value(Field::FirstName), "oh");
        assert_eq!(panel.cursor, 2);
    }

    #[test]
    fn backspace_at_start_is_a_no_op() {
        let mut panel = FormPanel::new();
        press(&mut panel, KeyCode::Backspace);
        assert_eq!(panel.cursor, 0);
        assert!(!panel.state().is_touched(Field::FirstName));
    }

    #[test]
    fn shifted_chars_are_typed_but_control_chords_are_not() {
        let mut panel = FormPanel::new();
        panel.handle_key(KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT));
        let handled = panel.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(handled, Handled::No);
        assert_eq!(panel.state().value(Field::FirstName), "J");
    }

    #[test]
    fn enter_on_button_submits_and_reports_outcome_once() {
        let mut panel = FormPanel::new();
        panel.set_focus(Focus::Submit);
        press(&mut panel, KeyCode::Enter);

        assert_eq!(
            panel.take_outcome(),
            Some(SubmitOutcome::Rejected { errors: 3 })
        );
        assert_eq!(panel.take_outcome(), None);
    }

    #[test]
    fn full_keyboard_submission_populates_copy_content() {
        let mut panel = FormPanel::new();
        type_text(&mut panel, "Johnathan");
        press(&mut panel, KeyCode::Enter);
        type_text(&mut panel, "Figueroa");
        press(&mut panel, KeyCode::Enter);
        type_text(&mut panel, "test@test.com");
        press(&mut panel, KeyCode::Enter);
        press(&mut panel, KeyCode::Enter); // skip message
        assert_eq!(panel.focus, Focus::Submit);
        assert!(panel.copy_text().is_none());

        press(&mut panel, KeyCode::Enter);
        assert_eq!(panel.take_outcome(), Some(SubmitOutcome::Accepted));
        assert_eq!(
            panel.copy_text().unwrap(),
            "First Name: Johnathan\nLast Name: Figueroa\nEmail: test@test.com"
        );
        let json: serde_json::Value = serde_json::from_str(&panel.copy_data().unwrap()).unwrap();
        assert_eq!(json["email"], "test@test.com");
    }

    #[test]
    fn refocusing_puts_cursor_at_end_of_value() {
        let mut panel = FormPanel::new();
        type_text(&mut panel, "Johnathan");
        press(&mut panel, KeyCode::Tab);
        press(&mut panel, KeyCode::BackTab);
        assert_eq!(panel.cursor, 9);
    }
}

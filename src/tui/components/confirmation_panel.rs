//! Confirmation panel component
//!
//! Read-only display of the last accepted submission, drawn from the
//! confirmation section of the document. Built fresh every frame.

use crate::form::view::CONFIRMATION_HEADING;
use crate::form::{Document, Field, Node, Section};
use crate::tui::traits::{Component, ComponentId, RenderContext};
use crate::util::wrap_ranges;
use chrono::{DateTime, Local, Utc};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct ConfirmationPanel<'a> {
    rows: Vec<&'a Node>,
    submitted_at: DateTime<Utc>,
}

impl<'a> ConfirmationPanel<'a> {
    /// `None` while nothing has been submitted
    pub fn from_document(doc: &'a Document, submitted_at: DateTime<Utc>) -> Option<Self> {
        doc.section(Section::Confirmation).next()?;
        Some(Self {
            rows: Field::ALL
                .iter()
                .filter_map(|field| doc.query_by_test_id(field.display_test_id()))
                .collect(),
            submitted_at,
        })
    }

    /// Rows the panel wants when drawn `columns` wide, borders included.
    ///
    /// Long values wrap, so every wrapped line gets its own row.
    pub fn height(&self, columns: u16) -> u16 {
        let inner = columns.saturating_sub(2) as usize;
        let lines: usize = self
            .captioned_rows()
            .map(|(row, _)| wrap_ranges(&row, inner).len())
            .sum();
        lines as u16 + 2
    }

    /// Each row as drawn (" Caption: value") with the byte length of its caption part
    fn captioned_rows(&self) -> impl Iterator<Item = (String, usize)> + '_ {
        self.rows.iter().filter_map(|node| {
            let caption = format!(" {}: ", node.field?.caption());
            let split = caption.len();
            Some((caption + &node.text, split))
        })
    }
}

impl Component for ConfirmationPanel<'_> {
    fn id(&self) -> ComponentId {
        ComponentId::Confirmation
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let caption_style = Style::default()
            .fg(theme.label)
            .add_modifier(Modifier::BOLD);
        let value_style = Style::default().fg(theme.foreground);

        let inner = area.width.saturating_sub(2) as usize;
        let mut lines: Vec<Line> = Vec::new();
        for (row, split) in self.captioned_rows() {
            for range in wrap_ranges(&row, inner) {
                let mid = split.clamp(range.start, range.end);
                let mut spans = Vec::new();
                if range.start < mid {
                    spans.push(Span::styled(row[range.start..mid].to_string(), caption_style));
                }
                if mid < range.end {
                    spans.push(Span::styled(row[mid..range.end].to_string(), value_style));
                }
                lines.push(Line::from(spans));
            }
        }

        let stamp = self
            .submitted_at
            .with_timezone(&Local)
            .format(" %H:%M:%S ")
            .to_string();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.success))
            .title(Span::styled(
                format!(" {} ", CONFIRMATION_HEADING),
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Line::from(Span::styled(stamp, Style::default().fg(theme.muted))).right_aligned());

        // Pre-wrapped so the drawn lines match `height`
        let paragraph = Paragraph::new(lines).block(block);
        f.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::test_support::filled_form;
    use crate::form::FormState;

    #[test]
    fn absent_until_something_is_submitted() {
        let doc = Document::render(&FormState::new());
        assert!(ConfirmationPanel::from_document(&doc, Utc::now()).is_none());
    }

    #[test]
    fn message_row_only_when_message_given() {
        for (message, rows) in [("", 3), ("A little message.", 4)] {
            let mut form = filled_form(message);
            form.on_submit();
            let doc = Document::render(&form);
            let panel = ConfirmationPanel::from_document(&doc, Utc::now()).unwrap();
            assert_eq!(panel.height(80), rows as u16 + 2);
        }
    }

    #[test]
    fn long_message_gets_a_row_per_wrapped_line() {
        let message = format!("{}ENDMARK", "word ".repeat(30));
        let mut form = filled_form(&message);
        form.on_submit();
        let doc = Document::render(&form);
        let panel = ConfirmationPanel::from_document(&doc, Utc::now()).unwrap();

        // " Message: " + 157 chars = 167 columns over a 70-column interior
        assert_eq!(panel.height(72), 3 + 3 + 2);
        assert_eq!(panel.height(200), 4 + 2);
    }
}

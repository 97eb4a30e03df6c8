//! Render model for the contact form
//!
//! `Document::render` is a pure function of `FormState`. It produces a flat
//! list of nodes that the terminal renderer draws and that tests query by
//! text, label, role or test id.
//!
//! Input values are not text content: text queries skip `TextInput` nodes,
//! so a submitted value is only found once it appears on the confirmation.

use super::{Field, FormState};

/// Semantic role of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Heading,
    Label,
    TextInput,
    Button,
    /// An active validation finding
    Alert,
    Text,
}

/// Region of the screen a node belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Form,
    Confirmation,
}

/// One element of the rendered form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub role: Role,
    pub section: Section,
    pub text: String,
    /// Field this node labels, edits, reports on or displays
    pub field: Option<Field>,
    pub test_id: Option<&'static str>,
}

impl Node {
    fn new(role: Role, section: Section, text: impl Into<String>) -> Self {
        Self {
            role,
            section,
            text: text.into(),
            field: None,
            test_id: None,
        }
    }

    fn for_field(mut self, field: Field) -> Self {
        self.field = Some(field);
        self
    }

    fn with_test_id(mut self, test_id: &'static str) -> Self {
        self.test_id = Some(test_id);
        self
    }

    #[cfg(test)]
    fn has_text_content(&self) -> bool {
        self.role != Role::TextInput
    }
}

pub const HEADING: &str = "Contact Form";
pub const CONFIRMATION_HEADING: &str = "You Submitted:";
pub const SUBMIT_LABEL: &str = "Submit";

/// The rendered contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Build the document for the current state
    pub fn render(state: &FormState) -> Self {
        let mut nodes = vec![Node::new(Role::Heading, Section::Header, HEADING)];

        for field in Field::ALL {
            nodes.push(Node::new(Role::Label, Section::Form, field.label()).for_field(field));
            nodes.push(
                Node::new(Role::TextInput, Section::Form, state.value(field)).for_field(field),
            );
            if let Some(finding) = state.error(field) {
                nodes.push(
                    Node::new(Role::Alert, Section::Form, finding.to_string()).for_field(field),
                );
            }
        }
        nodes.push(Node::new(Role::Button, Section::Form, SUBMIT_LABEL));

        if let Some(display) = state.display() {
            nodes.push(Node::new(
                Role::Heading,
                Section::Confirmation,
                CONFIRMATION_HEADING,
            ));
            for field in display.shown_fields() {
                nodes.push(
                    Node::new(Role::Text, Section::Confirmation, display.values.get(field))
                        .for_field(field)
                        .with_test_id(field.display_test_id()),
                );
            }
        }

        Self { nodes }
    }

    /// Nodes of one section, in order
    pub fn section(&self, section: Section) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.section == section)
    }

    /// The input labelled by a label starting with `label` (case-insensitive)
    pub fn get_by_label(&self, label: &str) -> Option<&Node> {
        let label = label.to_lowercase();
        let field = self
            .nodes
            .iter()
            .find(|n| n.role == Role::Label && n.text.to_lowercase().starts_with(&label))?
            .field?;
        self.nodes
            .iter()
            .find(|n| n.role == Role::TextInput && n.field == Some(field))
    }

    pub fn query_by_test_id(&self, test_id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.test_id == Some(test_id))
    }

    /// Active finding rendered for `field`
    pub fn alert_for(&self, field: Field) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|n| n.role == Role::Alert && n.field == Some(field))
    }
}

/// Queries only assertions need
#[cfg(test)]
impl Document {
    /// First node whose text content equals `text` exactly
    pub fn get_by_text(&self, text: &str) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|n| n.has_text_content() && n.text == text)
    }

    /// Every node whose text content contains `needle`, ignoring case
    pub fn query_all_by_text(&self, needle: &str) -> Vec<&Node> {
        let needle = needle.to_lowercase();
        self.nodes
            .iter()
            .filter(|n| n.has_text_content() && n.text.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn query_all_by_role(&self, role: Role) -> Vec<&Node> {
        self.nodes.iter().filter(|n| n.role == role).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::test_support::{filled_form, type_into};

    fn errors(doc: &Document) -> usize {
        doc.query_all_by_text("Error").len()
    }

    #[test]
    fn initial_render_has_header_and_nothing_else_to_report() {
        let doc = Document::render(&FormState::new());
        assert!(doc.get_by_text("Contact Form").is_some());
        assert_eq!(errors(&doc), 0);
        assert!(doc.query_by_test_id("messageDisplay").is_none());
        assert!(doc.get_by_text(CONFIRMATION_HEADING).is_none());
    }

    #[test]
    fn inputs_are_discoverable_by_label() {
        let doc = Document::render(&FormState::new());
        for (label, field) in [
            ("First Name", Field::FirstName),
            ("last name", Field::LastName),
            ("Email", Field::Email),
            ("Message", Field::Message),
        ] {
            let input = doc.get_by_label(label).unwrap();
            assert_eq!(input.role, Role::TextInput);
            assert_eq!(input.field, Some(field));
        }
        assert_eq!(doc.query_all_by_role(Role::Button).len(), 1);
    }

    #[test]
    fn short_first_name_renders_one_finding() {
        let mut form = FormState::new();
        type_into(&mut form, Field::FirstName, "John");
        let doc = Document::render(&form);

        let found = doc.query_all_by_text("firstName must have at least 5 characters.");
        assert_eq!(found.len(), 1);
        assert_eq!(errors(&doc), 1);
        assert_eq!(
            doc.alert_for(Field::FirstName).unwrap().text,
            "Error: firstName must have at least 5 characters."
        );
    }

    #[test]
    fn empty_submit_renders_three_findings() {
        let mut form = FormState::new();
        form.on_submit();
        let doc = Document::render(&form);
        assert_eq!(errors(&doc), 3);
        assert!(doc.alert_for(Field::Message).is_none());
    }

    #[test]
    fn findings_render_in_field_order() {
        let mut form = FormState::new();
        form.on_submit();
        let doc = Document::render(&form);
        let order: Vec<_> = doc
            .query_all_by_role(Role::Alert)
            .iter()
            .filter_map(|n| n.field)
            .collect();
        assert_eq!(order, vec![Field::FirstName, Field::LastName, Field::Email]);
    }

    #[test]
    fn partial_fill_submit_renders_one_finding() {
        let mut form = FormState::new();
        type_into(&mut form, Field::FirstName, "Johnathan");
        type_into(&mut form, Field::LastName, "Figueroa");
        form.on_submit();
        let doc = Document::render(&form);
        assert_eq!(errors(&doc), 1);
        assert!(doc.get_by_text("Error: email is a required field.").is_some());
    }

    #[test]
    fn malformed_email_renders_shape_finding() {
        let mut form = FormState::new();
        type_into(&mut form, Field::Email, "test");
        let doc = Document::render(&form);
        assert_eq!(
            doc.query_all_by_text("email must be a valid email address").len(),
            1
        );
    }

    #[test]
    fn missing_last_name_is_reported_after_submit() {
        let mut form = FormState::new();
        type_into(&mut form, Field::FirstName, "Johnathan");
        type_into(&mut form, Field::Email, "test");
        assert!(Document::render(&form)
            .query_all_by_text("lastName is a required field.")
            .is_empty());

        form.on_submit();
        let doc = Document::render(&form);
        assert_eq!(
            doc.query_all_by_text("lastName is a required field.").len(),
            1
        );
    }

    #[test]
    fn submitted_values_without_message() {
        let mut form = filled_form("");
        form.on_submit();
        let doc = Document::render(&form);

        for value in ["Johnathan", "Figueroa", "test@test.com"] {
            let node = doc.get_by_text(value).unwrap();
            assert_eq!(node.section, Section::Confirmation);
        }
        assert!(doc.query_all_by_text("Message:").is_empty());
        assert!(doc.query_by_test_id("messageDisplay").is_none());
        assert_eq!(errors(&doc), 0);
    }

    #[test]
    fn submitted_values_with_message() {
        let mut form = filled_form("A little message.");
        form.on_submit();
        let doc = Document::render(&form);

        for value in ["Johnathan", "Figueroa", "test@test.com"] {
            assert!(doc.get_by_text(value).is_some());
        }
        let message = doc.query_by_test_id("messageDisplay").unwrap();
        assert_eq!(message.text, "A little message.");
        assert_eq!(message.field, Some(Field::Message));
    }

    #[test]
    fn typed_values_are_not_text_content_before_submit() {
        let mut form = FormState::new();
        type_into(&mut form, Field::FirstName, "Johnathan");
        let doc = Document::render(&form);
        assert!(doc.get_by_text("Johnathan").is_none());
        assert_eq!(doc.get_by_label("First Name").unwrap().text, "Johnathan");
    }

    #[test]
    fn confirmation_rows_follow_field_order() {
        let mut form = filled_form("note");
        form.on_submit();
        let doc = Document::render(&form);
        let ids: Vec<_> = doc
            .section(Section::Confirmation)
            .filter_map(|n| n.test_id)
            .collect();
        assert_eq!(
            ids,
            vec![
                "firstNameDisplay",
                "lastNameDisplay",
                "emailDisplay",
                "messageDisplay"
            ]
        );
    }
}

// Form module - contact form state and validation
//
// FormState is an explicit state container:
// - Field values, edited one keystroke at a time
// - ErrorMap, recomputed by pure rule evaluation
// - Editing/Submitted phase and the snapshot captured on submission
//
// Touched fields validate live; untouched required fields are only swept
// when the user submits.

pub mod rules;
pub mod view;

pub use rules::{validate_field, FieldError};
pub use view::{Document, Node, Role, Section};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// One named input of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Message,
    ];

    /// Identifier used in validation messages
    pub fn name(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Label shown next to the input (`*` marks required fields)
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name*",
            Field::LastName => "Last Name*",
            Field::Email => "Email*",
            Field::Message => "Message",
        }
    }

    /// Caption used on the confirmation display
    pub fn caption(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    /// Stable identifier of the field's row on the confirmation display
    pub fn display_test_id(&self) -> &'static str {
        match self {
            Field::FirstName => "firstNameDisplay",
            Field::LastName => "lastNameDisplay",
            Field::Email => "emailDisplay",
            Field::Message => "messageDisplay",
        }
    }
}

/// Raw text of every field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }
}

/// Field name → at most one active finding
pub type ErrorMap = BTreeMap<Field, FieldError>;

/// Which display the form is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitted,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Editing => "Editing",
            Phase::Submitted => "Submitted",
        }
    }
}

/// Snapshot of the values captured by the last qualifying submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayValues {
    #[serde(flatten)]
    pub values: FormValues,
    pub submitted_at: DateTime<Utc>,
}

impl DisplayValues {
    /// The message line is only shown for a non-empty message
    pub fn has_message(&self) -> bool {
        !self.values.message.is_empty()
    }

    /// Fields shown on the confirmation display, in order
    pub fn shown_fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL
            .into_iter()
            .filter(move |field| *field != Field::Message || self.has_message())
    }

    /// Human-readable confirmation, one `Caption: value` line per shown field
    pub fn to_text(&self) -> String {
        self.shown_fields()
            .map(|field| format!("{}: {}", field.caption(), self.values.get(field)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Result of a submit action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every constraint held; values captured for display
    Accepted,
    /// Submission blocked; `errors` constraints are violated
    Rejected { errors: usize },
}

/// State of one mounted contact form
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: FormValues,
    touched: BTreeSet<Field>,
    errors: ErrorMap,
    phase: Phase,
    display: Option<DisplayValues>,
}

impl FormState {
    /// A freshly mounted form: every field empty, no findings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }

    /// Values captured by the last qualifying submission
    pub fn display(&self) -> Option<&DisplayValues> {
        self.display.as_ref()
    }

    /// Store a new value for `field` and re-evaluate that field's rules.
    ///
    /// Only the changed field is validated; findings on other fields are
    /// left as they are.
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        *self.values.slot_mut(field) = value.into();
        self.touched.insert(field);
        if rules::is_constrained(field) {
            self.revalidate(field);
        }
    }

    /// Validate every field; on success capture the values for display.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        for field in Field::ALL {
            self.revalidate(field);
        }

        if !self.errors.is_empty() {
            let errors = self.errors.len();
            tracing::info!(errors, "Submission blocked by validation");
            return SubmitOutcome::Rejected { errors };
        }

        self.phase = Phase::Submitted;
        self.display = Some(DisplayValues {
            values: self.values.clone(),
            submitted_at: Utc::now(),
        });
        tracing::info!(
            with_message = !self.values.message.is_empty(),
            "Contact form submitted"
        );
        SubmitOutcome::Accepted
    }

    fn revalidate(&mut self, field: Field) {
        match validate_field(field, self.values.get(field)) {
            Some(finding) => {
                let changed = self.errors.get(&field) != Some(&finding);
                if changed {
                    tracing::debug!(field = field.name(), "{}", finding.message);
                }
                self.errors.insert(field, finding);
            }
            None => {
                if self.errors.remove(&field).is_some() {
                    tracing::debug!(field = field.name(), "Field is now valid");
                }
            }
        }
    }
}

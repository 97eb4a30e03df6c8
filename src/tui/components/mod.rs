// Components module - reusable UI building blocks
//
// - Title bar: form heading and theme name
// - Form panel: the four inputs, their findings and the submit button
// - Confirmation panel: the last accepted submission
// - Status bar: phase, findings, hints, latest log line
// - Toast: transient notifications

pub mod confirmation_panel;
pub mod form_panel;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use confirmation_panel::ConfirmationPanel;
pub use form_panel::FormPanel;
pub use toast::Toast;

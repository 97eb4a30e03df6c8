//! Copyable trait for components that provide clipboard content

use super::Component;

/// Trait for components that can provide content for the clipboard
///
/// # Two Copy Modes
///
/// - **Text** (`F2`): Human-readable format for pasting into docs, chat, etc.
/// - **Data** (`F3`): Machine-readable JSON for scripting
pub trait Copyable: Component {
    /// Human-readable text, or `None` when there is nothing to copy
    fn copy_text(&self) -> Option<String>;

    /// Machine-readable data; default is nothing
    fn copy_data(&self) -> Option<String> {
        None
    }
}

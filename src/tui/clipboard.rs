//! System clipboard access for exporting the confirmation display
//!
//! Backed by `arboard`. A handle is opened per copy so nothing is held
//! between key presses.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Put `text` on the system clipboard
///
/// Fails when no clipboard is reachable, e.g. a headless Linux session
/// without a display server.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .with_context(|| format!("Failed to set clipboard text ({} bytes)", text.len()))?;
    Ok(())
}

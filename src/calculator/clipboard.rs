//! Copying the calculator display to the system clipboard.

use arboard::Clipboard;

use super::snapshot::EngineSnapshot;

/// Put the current display on the clipboard.
///
/// Returns the copied text, or an error message when the display is empty or
/// the clipboard is unavailable (e.g. no display server).
pub fn copy_to_clipboard(snapshot: &EngineSnapshot) -> Result<String, String> {
    let text = snapshot
        .text_for_clipboard()
        .ok_or_else(|| "Nothing to copy".to_string())?;

    let mut clipboard =
        Clipboard::new().map_err(|e| format!("Clipboard unavailable: {e}"))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| format!("Copy failed: {e}"))?;

    Ok(text.to_string())
}

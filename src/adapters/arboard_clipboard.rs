use anyhow::{Context, Result};

use crate::core::interfaces::ports::ClipboardPort;

pub struct ArboardClipboard;

impl ArboardClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardPort for ArboardClipboard {
    fn copy_text(&self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("Failed to initialize clipboard")?;

        clipboard
            .set_text(text.to_string())
            .context("Failed to copy text to clipboard")?;

        log::info!("[CLIPBOARD] Copied {} characters", text.chars().count());
        Ok(())
    }
}

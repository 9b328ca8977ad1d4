use anyhow::{Context, Result};

use crate::core::interfaces::ports::ProcessLauncher;

/// Opens URLs with the desktop's default handler.
pub struct OpenProcessLauncher;

impl OpenProcessLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OpenProcessLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessLauncher for OpenProcessLauncher {
    fn open_url(&self, url: &str) -> Result<()> {
        log::info!("[LAUNCHER] Opening {}", url);
        open::that(url).with_context(|| format!("Failed to open {}", url))
    }
}

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::global_constants;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WikiSettings {
    pub max_results: u32,
    pub load_images: bool,
    pub image_size: u32,
    pub namespace: i32,
}

impl Default for WikiSettings {
    fn default() -> Self {
        Self {
            max_results: global_constants::DEFAULT_MAX_RESULTS,
            load_images: global_constants::DEFAULT_LOAD_IMAGES,
            image_size: global_constants::DEFAULT_IMAGE_SIZE,
            namespace: global_constants::DEFAULT_WIKI_NAMESPACE,
        }
    }
}

impl WikiSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from(&settings_path)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let settings_path = Self::get_settings_file_path()?;
        self.save_to(&settings_path)
    }

    pub fn load_from(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save_to(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)
            .with_context(|| format!("Failed to read settings from {:?}", settings_path))?;
        let settings: WikiSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings in {:?}", settings_path))?;
        let settings = settings.sanitized();

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!(
            "[SETTINGS] max_results={}, load_images={}, image_size={}, namespace={}",
            settings.max_results,
            settings.load_images,
            settings.image_size,
            settings.namespace
        );

        Ok(settings)
    }

    pub fn save_to(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    /// Clamps values a hand-edited file may have pushed out of range.
    pub fn sanitized(mut self) -> Self {
        let max_results = self.max_results.clamp(
            global_constants::MIN_MAX_RESULTS,
            global_constants::MAX_MAX_RESULTS,
        );
        if max_results != self.max_results {
            log::warn!(
                "[SETTINGS] max_results {} out of range, using {}",
                self.max_results,
                max_results
            );
            self.max_results = max_results;
        }

        let image_size = self.image_size.clamp(
            global_constants::MIN_IMAGE_SIZE,
            global_constants::MAX_IMAGE_SIZE,
        );
        if image_size != self.image_size {
            log::warn!(
                "[SETTINGS] image_size {} out of range, using {}",
                self.image_size,
                image_size
            );
            self.image_size = image_size;
        }

        self
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::CONFIG_DIR_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

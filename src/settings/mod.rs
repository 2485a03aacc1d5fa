//! Persisted form defaults.

mod file;

use std::path::Path;

use crate::pass::{MAX_LENGTH, MIN_LENGTH, Selection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub selection: Selection,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        Self::load_from(&file::get_path())
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        self.save_to(&file::get_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(path, &mut settings)?;
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&settings.length) {
            log::warn!(
                "stored length {} outside {}..={}, using default",
                settings.length,
                MIN_LENGTH,
                MAX_LENGTH
            );
            settings.length = Settings::default().length;
        }
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        file::save(path, self)?;
        log::info!("saved settings to {}", path.display());
        Ok(())
    }

    /// Load saved defaults, falling back to built-ins on any I/O failure.
    pub fn load_or_default() -> Self {
        Self::load_from_file().unwrap_or_else(|e| {
            log::warn!("failed to load settings: {}", e);
            Settings::default()
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 8,
            selection: Selection::lowercase_only(),
        }
    }
}

//! Settings file persistence.
//!
//! One comma-separated line: `length,lower,upper,digits,symbols`.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::Settings;

const FIELDS: usize = 5;

pub fn save(path: &Path, settings: &Settings) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let s = &settings.selection;
    let data = format!(
        "{},{},{},{},{}\n",
        settings.length, s.lowercase, s.uppercase, s.digits, s.symbols
    );

    file.write_all(data.as_bytes())?;
    Ok(())
}

pub fn load(path: &Path, settings: &mut Settings) -> std::io::Result<()> {
    if !path.exists() {
        save(path, settings)?;
        return Ok(());
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts: Vec<&str> = line.trim().split(',').collect();
    if parts.len() != FIELDS {
        // Unreadable or empty: rewrite with whatever we currently hold
        return save(path, settings);
    }

    let sel = &mut settings.selection;
    settings.length = parts[0].parse().unwrap_or(settings.length);
    sel.lowercase = parts[1].parse().unwrap_or(sel.lowercase);
    sel.uppercase = parts[2].parse().unwrap_or(sel.uppercase);
    sel.digits = parts[3].parse().unwrap_or(sel.digits);
    sel.symbols = parts[4].parse().unwrap_or(sel.symbols);

    Ok(())
}

#[inline]
pub fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/passgen/settings")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::Selection;

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/settings");
        let settings = Settings {
            length: 12,
            selection: Selection::ALL,
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, Settings::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "8,true,false,false,false\n");
    }

    #[test]
    fn malformed_line_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        std::fs::write(&path, "garbage").unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "8,true,false,false,false\n");
    }

    #[test]
    fn bad_fields_keep_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        std::fs::write(&path, "x,false,yes,true,true\n").unwrap();
        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.length, 8);
        assert!(!loaded.selection.lowercase);
        assert!(!loaded.selection.uppercase);
        assert!(loaded.selection.digits);
        assert!(loaded.selection.symbols);
    }

    #[test]
    fn out_of_range_length_is_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        std::fs::write(&path, "40,true,true,true,true\n").unwrap();
        assert_eq!(Settings::load_from(&path).unwrap().length, 8);
    }
}

//! Settings file persistence.
//!
//! One line: `length,lower,upper,digits,symbols,clipboard`.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use log::{debug, warn};
use strongpass::pass::{self, CharClass};

use super::Settings;

const FIELDS: usize = 6;

pub fn save(settings: &Settings) -> std::io::Result<()> {
    let path = get_path();
    if let Some(parent) = Path::new(&path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;

    file.write_all(to_line(settings).as_bytes())?;
    debug!("settings saved to {path}");
    Ok(())
}

pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    let path = get_path();
    if !Path::new(&path).exists() {
        return Ok(());
    }

    let file = OpenOptions::new().read(true).open(&path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if !apply_line(settings, &line) {
        warn!("malformed settings file {path}, rewriting defaults");
        *settings = Settings::default();
        save(settings)?;
    }

    Ok(())
}

fn to_line(settings: &Settings) -> String {
    let has = |c| settings.classes.contains(c);
    format!(
        "{},{},{},{},{},{}\n",
        settings.length,
        has(CharClass::Lowercase),
        has(CharClass::Uppercase),
        has(CharClass::Digit),
        has(CharClass::Symbol),
        settings.to_clipboard,
    )
}

/// Returns false when the field count is wrong. Bad individual fields keep
/// their current value.
fn apply_line(settings: &mut Settings, line: &str) -> bool {
    let parts: Vec<&str> = line.trim().split(',').collect();
    if parts.len() != FIELDS {
        return false;
    }

    settings.length = pass::clamp_length(parts[0].parse().unwrap_or(settings.length));
    for (class, part) in CharClass::ALL.into_iter().zip(&parts[1..5]) {
        let enabled = part.parse().unwrap_or(settings.classes.contains(class));
        settings.classes.set(class, enabled);
    }
    settings.to_clipboard = parts[5].parse().unwrap_or(settings.to_clipboard);
    true
}

#[inline]
fn get_path() -> String {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    format!("{}/.config/strongpass/settings", home)
}

#[cfg(test)]
mod tests {
    use strongpass::pass::ClassSet;

    use super::*;

    #[test]
    fn line_round_trips() {
        let settings = Settings {
            length: 20,
            classes: [CharClass::Digit, CharClass::Symbol].into_iter().collect(),
            to_clipboard: true,
        };
        let line = to_line(&settings);
        assert_eq!(line, "20,false,false,true,true,true\n");

        let mut loaded = Settings::default();
        assert!(apply_line(&mut loaded, &line));
        assert_eq!(loaded, settings);
    }

    #[test]
    fn bad_fields_keep_defaults() {
        let mut settings = Settings::default();
        assert!(apply_line(&mut settings, "abc,true,maybe,false,yes,false"));
        assert_eq!(settings.length, pass::DEFAULT_LENGTH);
        assert!(settings.classes.contains(CharClass::Lowercase));
        assert!(settings.classes.contains(CharClass::Uppercase));
        assert!(!settings.classes.contains(CharClass::Digit));
        assert!(!settings.classes.contains(CharClass::Symbol));
    }

    #[test]
    fn length_is_clamped_on_load() {
        let mut settings = Settings::default();
        assert!(apply_line(&mut settings, "500,true,true,true,true,false"));
        assert_eq!(settings.length, pass::MAX_LENGTH);
        assert_eq!(settings.classes, ClassSet::all());
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        let mut settings = Settings::default();
        assert!(!apply_line(&mut settings, "74,19,false,false"));
        assert!(!apply_line(&mut settings, ""));
    }
}

//! User-facing notices for CLI output.

use std::sync::atomic::{AtomicBool, Ordering};

use strongpass::pass::{MAX_LENGTH, MIN_LENGTH, Strength};

use crate::terminal::{RED, RESET, YELLOW, strength_line};

/// Suppresses notices and strength lines; passwords and errors still print.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Yellow warning on stderr, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red error on stderr, always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn no_class_selected() {
    error("Select at least one option");
}

pub fn length_clamped(requested: usize, used: usize) {
    warn(&format!(
        "Length {requested} outside {MIN_LENGTH}..={MAX_LENGTH}, using {used}"
    ));
}

pub fn strength(strength: Strength) {
    if !quiet() {
        println!("{}", strength_line(strength));
    }
}

pub fn clipboard_copied() {
    if !quiet() {
        eprintln!("Password copied \u{2714}");
    }
}

pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}

pub fn clipboard_unavailable() {
    warn("Clipboard unavailable, printing to terminal instead");
}

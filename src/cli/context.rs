//! CLI context - bundles settings, flags, and clipboard state.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use copypasta::{ClipboardContext, ClipboardProvider};
use log::{debug, info};
use strongpass::pass::{self, CharClass, GenerateError, Password};
use zeroize::Zeroize;

use super::{CliFlags, ParseError, prompts};
use crate::settings::Settings;
use crate::terminal::strength_line;
use crate::tui::print_help;

/// Early exit.
#[derive(Debug, PartialEq, Eq)]
pub enum Done {
    /// Nothing left to do (help, version).
    Ok,
    /// A user-facing error was already reported.
    Failed,
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Parse arguments and pick the starting settings. Saved settings are used
    /// with `--saved` or when no generation flags were given.
    pub fn new(args: Vec<String>) -> Result<Self, ParseError> {
        let flags = super::parse(&args)?;
        prompts::set_quiet(flags.quiet);

        let settings = if wants_saved(&flags) {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self {
            settings,
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;

        if self.flags.score {
            let stdin = io::stdin();
            let stdout = io::stdout();
            if let Err(e) = score_lines(stdin.lock(), &mut stdout.lock(), prompts::quiet()) {
                prompts::error(&format!("Failed to read stdin: {e}"));
                return Err(Done::Failed);
            }
            return Ok(());
        }

        if let Some(requested) = apply_flags(&mut self.settings, &self.flags) {
            prompts::length_clamped(requested, self.settings.length);
        }
        self.handle_save();
        self.handle_clipboard();
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done::Ok);
        }
        if self.flags.version {
            println!("strongpass {}", env!("CARGO_PKG_VERSION"));
            return Err(Done::Ok);
        }
        Ok(())
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        match self.settings.save_to_file() {
            Ok(()) => info!("settings saved"),
            Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
        }
    }

    fn handle_clipboard(&mut self) {
        if self.settings.to_clipboard {
            self.clipboard = connect_clipboard(&mut self.settings, ClipboardContext::new());
        }
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&mut self) -> Result<(), Done> {
        let count = self.flags.number.unwrap_or(1).max(1);
        let stdout = io::stdout();
        let copy = self.clipboard.is_some();

        let last = match write_passwords(
            &mut stdout.lock(),
            &self.settings,
            count,
            copy,
            prompts::quiet(),
        ) {
            Ok(last) => last,
            Err(e) => {
                debug!("generation refused: {e}");
                prompts::no_class_selected();
                return Err(Done::Failed);
            }
        };

        if let (Some(ctx), Some(password)) = (self.clipboard.as_mut(), last) {
            match ctx.set_contents(password.as_str().to_owned()) {
                Ok(()) => {
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied();
                }
                Err(e) => {
                    prompts::clipboard_error(&e.to_string());
                    return Err(Done::Failed);
                }
            }
        }

        Ok(())
    }
}

/// Saved settings are the starting point with `--saved`, or when nothing
/// about generation was asked for (bare `strongpass` off a terminal).
fn wants_saved(flags: &CliFlags) -> bool {
    flags.saved || !flags.has_explicit_args()
}

/// Keep the clipboard handle, or fall back to printing with a warning.
fn connect_clipboard<C, E: Display>(settings: &mut Settings, ctx: Result<C, E>) -> Option<C> {
    match ctx {
        Ok(c) => Some(c),
        Err(e) => {
            debug!("clipboard init failed: {e}");
            prompts::clipboard_unavailable();
            settings.to_clipboard = false;
            None
        }
    }
}

/// Apply generation flags on top of `settings`. Returns the requested length
/// when it had to be clamped.
fn apply_flags(settings: &mut Settings, flags: &CliFlags) -> Option<usize> {
    let mut clamped = None;
    if let Some(len) = flags.length {
        settings.set_length(len);
        if settings.length != len {
            clamped = Some(len);
        }
    }

    if let Some(only) = flags.only {
        settings.classes = only;
    }
    if flags.no_lower {
        settings.classes.remove(CharClass::Lowercase);
    }
    if flags.no_upper {
        settings.classes.remove(CharClass::Uppercase);
    }
    if flags.no_digits {
        settings.classes.remove(CharClass::Digit);
    }
    if flags.symbols {
        settings.classes.insert(CharClass::Symbol);
    }

    if flags.clipboard {
        settings.to_clipboard = true;
    }
    clamped
}

/// Generate `count` passwords, each followed by its strength line unless
/// `quiet`. With `copy` the last password is held back from `out` and
/// returned for the clipboard; earlier ones are still written.
fn write_passwords<W: Write>(
    out: &mut W,
    settings: &Settings,
    count: usize,
    copy: bool,
    quiet: bool,
) -> Result<Option<Password>, GenerateError> {
    let mut last = None;

    for n in 0..count {
        let password = pass::generate(settings.length, settings.classes)?;
        let strength = pass::score(&password);

        if copy && n + 1 == count {
            last = Some(password);
        } else {
            let _ = writeln!(out, "{}", *password);
        }
        if !quiet {
            let _ = writeln!(out, "{}", strength_line(strength));
        }
    }

    let _ = out.flush();
    Ok(last)
}

/// Rate each input line. Works on any string, not just generated ones.
fn score_lines<R: BufRead, W: Write>(input: R, out: &mut W, quiet: bool) -> io::Result<()> {
    for line in input.lines() {
        let mut line = line?;
        let strength = pass::score(line.trim_end_matches('\r'));
        if quiet {
            writeln!(out, "{} {}", strength.score, strength.tier)?;
        } else {
            writeln!(out, "{}", strength_line(strength))?;
        }
        line.zeroize();
    }
    out.flush()
}

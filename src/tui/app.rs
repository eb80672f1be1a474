//! Interactive screen state. No terminal I/O happens here.

use std::fmt::Display;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use strongpass::pass::{self, CharClass, Password, Strength};

use crate::settings::Settings;

/// How long a notification stays on screen.
pub const NOTICE_TTL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    pub expires: Instant,
}

/// Side effects the event loop performs on behalf of the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Copy,
    Save,
    Help,
    Quit,
}

pub struct App {
    pub settings: Settings,
    pub password: Option<Password>,
    /// Rating of the shown password.
    pub strength: Option<Strength>,
    /// Strength bar fill, 0..=100.
    pub bar: u8,
    pub notice: Option<Notice>,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            password: None,
            strength: None,
            bar: 0,
            notice: None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Action::Quit,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('-') => self.adjust_length(-1),
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_length(1),
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                self.settings.toggle(CharClass::ALL[idx]);
            }
            KeyCode::Enter | KeyCode::Char('g') => return self.generate(now),
            KeyCode::Char('c') => return Action::Copy,
            KeyCode::Char('s') => return Action::Save,
            KeyCode::Char('h') | KeyCode::Char('?') => return Action::Help,
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            _ => {}
        }
        Action::None
    }

    fn adjust_length(&mut self, delta: isize) {
        let length = self.settings.length.saturating_add_signed(delta);
        self.settings.set_length(length);
    }

    /// Generate, rate and ask for a clipboard copy. An empty class set shows
    /// an error and empties the bar, keeping the previous password.
    pub fn generate(&mut self, now: Instant) -> Action {
        match pass::generate(self.settings.length, self.settings.classes) {
            Ok(password) => {
                let strength = pass::score(&password);
                debug!("tui generated, score {}", strength.score);
                self.bar = strength.score;
                self.strength = Some(strength);
                self.password = Some(password);
                Action::Copy
            }
            Err(e) => {
                debug!("generation refused: {e}");
                self.bar = 0;
                self.notify("Select at least one option", NoticeKind::Error, now);
                Action::None
            }
        }
    }

    pub fn notify(&mut self, text: &str, kind: NoticeKind, now: Instant) {
        self.notice = Some(Notice {
            text: text.to_string(),
            kind,
            expires: now + NOTICE_TTL,
        });
    }

    /// Report a settings save. Details go to the debug log only; the screen
    /// is in raw mode.
    pub fn saved<E: Display>(&mut self, result: Result<(), E>, now: Instant) {
        match result {
            Ok(()) => self.notify("Settings saved", NoticeKind::Success, now),
            Err(e) => {
                debug!("saving settings failed: {e}");
                self.notify("Could not save settings", NoticeKind::Error, now);
            }
        }
    }

    /// Drop an expired notice. Returns true when the screen needs a redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.notice {
            Some(n) if now >= n.expires => {
                self.notice = None;
                true
            }
            _ => false,
        }
    }

    /// How long the event loop may block before the next [`App::tick`].
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        const IDLE: Duration = Duration::from_millis(500);
        match &self.notice {
            Some(n) => n.expires.saturating_duration_since(now).min(IDLE),
            None => IDLE,
        }
    }
}

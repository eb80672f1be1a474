//! Interactive terminal front-end.

mod app;
mod text;

use std::io;
use std::time::Instant;

use copypasta::{ClipboardContext, ClipboardProvider};
use crossterm::event::{self, Event};
use log::debug;

use app::{Action, App, NoticeKind};
pub use text::print_help;

use crate::settings::Settings;
use crate::terminal::ScreenGuard;

/// Run TUI interactive mode until the user quits.
pub fn run(settings: Settings) -> io::Result<()> {
    let mut guard = ScreenGuard::new()?;
    let mut app = App::new(settings);
    let mut clipboard: Option<ClipboardContext> = None;

    text::render(&app);

    loop {
        let now = Instant::now();
        if !event::poll(app.poll_timeout(now))? {
            if app.tick(Instant::now()) {
                text::render(&app);
            }
            continue;
        }

        let key = match event::read()? {
            Event::Key(key) => key,
            Event::Resize(..) => {
                text::render(&app);
                continue;
            }
            _ => continue,
        };

        let now = Instant::now();
        match app.handle_key(key, now) {
            Action::Quit => break,
            Action::Copy => copy(&mut clipboard, &mut app, now),
            Action::Save => {
                let result = app.settings.save_to_file();
                app.saved(result, now);
            }
            Action::Help => {
                crate::terminal::clear();
                print_help();
                // any key returns
                loop {
                    if let Event::Key(_) = event::read()? {
                        break;
                    }
                }
            }
            Action::None => {}
        }
        app.tick(now);
        text::render(&app);
    }

    guard.restore();
    Ok(())
}

fn copy(clipboard: &mut Option<ClipboardContext>, app: &mut App, now: Instant) {
    let Some(password) = app.password.as_ref() else {
        app.notify("Nothing to copy yet", NoticeKind::Error, now);
        return;
    };

    if clipboard.is_none() {
        match ClipboardContext::new() {
            Ok(ctx) => *clipboard = Some(ctx),
            Err(e) => debug!("clipboard init failed: {e}"),
        }
    }

    let result = match clipboard.as_mut() {
        Some(ctx) => ctx
            .set_contents(password.as_str().to_owned())
            .map_err(|e| e.to_string()),
        None => Err("no clipboard".to_string()),
    };

    match result {
        Ok(()) => app.notify("Password copied \u{2714}", NoticeKind::Success, now),
        Err(e) => {
            debug!("clipboard copy failed: {e}");
            app.notify("Clipboard unavailable", NoticeKind::Error, now);
        }
    }
}

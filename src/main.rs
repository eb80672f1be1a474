use std::env;

mod cli;
mod exits;
mod settings;
mod terminal;
mod tui;

use cli::prompts;
use settings::Settings;
use strongpass::entropy;

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("STRONGPASS_LOG", "warn"),
    )
    .init();

    exits::install_handlers();
    exits::harden_process();

    if let Err(e) = entropy::probe() {
        prompts::error(&format!("Fatal: secure random source unavailable: {e}"));
        std::process::exit(2);
    }

    let args: Vec<String> = env::args().collect();

    let code = match args.len() {
        1 if interactive() => run_tui(),
        _ => cli::run(args),
    };
    std::process::exit(code);
}

fn interactive() -> bool {
    unsafe { libc::isatty(0) == 1 && libc::isatty(1) == 1 }
}

fn run_tui() -> i32 {
    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        log::warn!("failed to load settings: {e}");
        Settings::default()
    });

    match tui::run(settings) {
        Ok(()) => 0,
        Err(e) => {
            terminal::reset_terminal();
            prompts::error(&format!("Terminal error: {e}"));
            1
        }
    }
}

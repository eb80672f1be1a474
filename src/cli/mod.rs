//! Command-line front-end.

mod context;
mod flags;
mod parse;
pub mod prompts;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

/// Run CLI mode and return the process exit code.
pub fn run(args: Vec<String>) -> i32 {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Try --help");
            return 1;
        }
    };

    match ctx.run() {
        Ok(()) | Err(Done::Ok) => 0,
        Err(Done::Failed) => 1,
    }
}

use strongpass::entropy::entropy_source;
use strongpass::pass::{CharClass, MAX_LENGTH, MIN_LENGTH};

use super::app::{App, NoticeKind};
use crate::terminal::{
    BOLD, DIM, GREEN, RED, RESET, box_bottom, box_line, box_line_center, box_opt, box_top, clear,
    flush, print_rule, strength_bar, tier_color,
};

const SLIDER_WIDTH: usize = 36;
const BAR_WIDTH: usize = 52;

/// Slider track with a knob at `length`'s position in the allowed range.
fn slider(length: usize) -> String {
    let span = MAX_LENGTH - MIN_LENGTH;
    let pos = (length.clamp(MIN_LENGTH, MAX_LENGTH) - MIN_LENGTH) * (SLIDER_WIDTH - 1) / span;
    format!(
        "{MIN_LENGTH:>2} {}●{DIM}{}{RESET} {MAX_LENGTH}",
        "━".repeat(pos),
        "─".repeat(SLIDER_WIDTH - 1 - pos)
    )
}

pub fn render(app: &App) {
    clear();
    box_top("Password Generator");
    box_line("");
    box_line(&format!("{BOLD}Password Length{RESET}: {}", app.settings.length));
    box_line(&format!("  ← {} →", slider(app.settings.length)));
    box_line("");

    for (i, class) in CharClass::ALL.into_iter().enumerate() {
        let mark = if app.settings.classes.contains(class) {
            format!("{GREEN}[x]{RESET}")
        } else {
            "[ ]".to_string()
        };
        box_line(&format!("  {}) {} {}", i + 1, mark, class.label()));
    }

    box_line("");
    print_rule();
    match &app.password {
        Some(p) => box_line_center(&format!("{BOLD}{}{RESET}", **p)),
        None => box_line_center(&format!("{DIM}press Enter to generate{RESET}")),
    }
    match app.strength {
        Some(s) => box_line_center(&format!(
            "Strength: {}{}{RESET}",
            tier_color(s.tier),
            s.tier.label()
        )),
        None => box_line(""),
    }
    box_line(&strength_bar(app.bar, BAR_WIDTH));
    print_rule();

    match &app.notice {
        Some(n) => {
            let color = match n.kind {
                NoticeKind::Success => GREEN,
                NoticeKind::Error => RED,
            };
            box_line_center(&format!("{color}{BOLD}{}{RESET}", n.text));
        }
        None => box_line(""),
    }
    box_bottom();
    print!(
        "{DIM} ←/→ length | 1-4 toggle | Enter generate | c copy | s save | h help | q quit{RESET}\r\n"
    );
    flush();
}

pub fn print_help() {
    box_top("Strongpass");
    box_line_center("Password generator with strength meter");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: run without arguments on a terminal.");
    box_line("  2) Client: pass flags to print passwords directly.");
    box_line("");
    box_line("USAGE:");
    box_line("  strongpass [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt(
        "  -l, --length <N>",
        &format!("Characters per password, {MIN_LENGTH}-{MAX_LENGTH} (default: 12)"),
    );
    box_opt("  -n, --number <N>", "How many to generate (default: 1)");
    box_opt("  -S, --symbols", "Include symbols");
    box_opt("      --no-lower", "Exclude lowercase letters");
    box_opt("      --no-upper", "Exclude uppercase letters");
    box_opt("      --no-digits", "Exclude numbers");
    box_opt(
        "      --only <luds>",
        "Use exactly these classes: l)ower u)pper d)igits s)ymbols",
    );
    box_line("");
    box_line(" Output:");
    box_opt(
        "  -b, --board",
        "Copy the (last) password to the clipboard instead of printing it",
    );
    box_opt("  -q, --quiet", "Print passwords only, no strength line");
    box_opt("      --score", "Rate each line read from stdin");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Start from saved settings");
    box_opt("      --save", "Save the resulting settings as defaults");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("INTERACTIVE KEYS:");
    box_line("  ←/→ or -/+  length      1-4  toggle class");
    box_line("  Enter/g     generate    c    copy to clipboard");
    box_line("  s           save        q    quit");
    box_line("");
    box_line("STRENGTH:");
    box_line("  length*3 + classes*20, minus 20 under 8 chars, max 100.");
    box_line(&format!("  {RED}Weak{RESET} < 40 <= Medium < 70 <= {GREEN}Strong{RESET}"));
    box_line("");
    box_line(&format!("Entropy: {}", entropy_source()));
    box_line("");
    box_line("EXAMPLES:");
    box_line("  strongpass -l 16           One password, 16 characters");
    box_line("  strongpass -l 20 -n 3 -S   Three passwords with symbols");
    box_line("  strongpass --only d -l 6   Six-digit PIN");
    box_line("  strongpass -n 3 -b         Print two, copy the third");
    box_line("  echo hunter2 | strongpass --score");
    box_bottom();
    print!("\r\n");
    flush();
}

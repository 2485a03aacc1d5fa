use crate::pass::{MAX_LENGTH, MIN_LENGTH};
use crate::terminal::{box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn help_lines() -> Vec<String> {
    let mut lines = vec![
        box_top("Passgen"),
        box_line_center("Random password generator"),
        box_line(""),
        box_line("MODES:"),
        box_line("  1) Interactive: run without arguments to open the"),
        box_line("     generator form."),
        box_line("  2) Client: pass flags (e.g. -l 12 -a) to print passwords."),
        box_line(""),
        box_line("USAGE:"),
        box_line("  passgen [OPTIONS]"),
        box_line(""),
        box_line("OPTIONS:"),
    ];

    let opts: [(&str, String); 13] = [
        (
            "  -l, --length <N>",
            format!("Characters per password, {MIN_LENGTH} to {MAX_LENGTH}"),
        ),
        ("  -n, --number <N>", "How many to generate (default: 1)".into()),
        ("  -L, --lower", "Include lowercase letters".into()),
        ("  -U, --upper", "Include uppercase letters".into()),
        ("  -d, --digits", "Include numbers".into()),
        ("  -S, --symbols", "Include symbols".into()),
        ("  -a, --all", "Include every character class".into()),
        ("  -b, --board", "Copy to clipboard instead of printing".into()),
        (
            "      --save",
            "Store length and classes as defaults for later runs".into(),
        ),
        ("  -q, --quiet", "Suppress warnings and confirmations".into()),
        ("  -h, --help", "Show this help".into()),
        ("  -v, --version", "Show version".into()),
        (
            "",
            "Without class flags the saved defaults apply (lowercase only at first).".into(),
        ),
    ];
    for (flag, desc) in &opts {
        lines.extend(box_opt(flag, desc));
    }

    lines.push(box_line(""));
    lines.push(box_line("SCREEN KEYS:"));
    lines.extend(box_opt("  0-9, Backspace", "Edit the length"));
    lines.extend(box_opt("  l / u / n / s", "Toggle lower, upper, numbers, symbols"));
    lines.extend(box_opt("  Enter", "Generate"));
    lines.extend(box_opt("  r / c / w", "Reset, copy, save defaults"));
    lines.extend(box_opt("  Esc, q", "Quit"));
    lines.push(box_bottom());
    lines
}

pub fn print_help() {
    for line in help_lines() {
        println!("{line}");
    }
}

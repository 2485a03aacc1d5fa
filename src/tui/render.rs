//! Screen layout.

use super::input::toggle_key;
use crate::form::Form;
use crate::pass::{CharClass, MAX_LENGTH, MIN_LENGTH, strength};
use crate::terminal::{
    BOLD, DIM, GREEN, RED, RESET, YELLOW, box_bottom, box_line, box_line_center, box_rule,
    box_top,
};

/// Checkbox order on screen.
const CHECKBOXES: [CharClass; 4] = [
    CharClass::Lowercase,
    CharClass::Uppercase,
    CharClass::Digit,
    CharClass::Symbol,
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    None,
    Info(String),
    Error(String),
}

pub fn render(form: &Form, status: &Status) -> Vec<String> {
    let mut lines = vec![
        box_top("Password Generator"),
        box_line(&format!("{BOLD}Password Length{RESET} ({MIN_LENGTH}-{MAX_LENGTH})")),
        box_line(&format!("  > {}_", form.length_input())),
    ];

    if let Some(err) = form.length_error() {
        lines.push(box_line(&format!("  {RED}{err}{RESET}")));
    }
    lines.push(box_line(""));

    let selection = form.selection();
    for class in CHECKBOXES {
        let mark = if selection.contains(class) { "x" } else { " " };
        lines.push(box_line(&format!(
            "  [{mark}] ({}) Include {}",
            toggle_key(class),
            class.label()
        )));
    }

    lines.push(box_rule());
    let generate = if form.can_submit() {
        "[Enter] Generate".to_string()
    } else {
        format!("{DIM}[Enter] Generate{RESET}")
    };
    lines.push(box_line_center(&format!("{generate}   [r] Reset   [c] Copy")));
    lines.push(box_line_center("[w] Save defaults   [Esc] Quit"));

    match status {
        Status::None => {}
        Status::Info(msg) => lines.push(box_line_center(&format!("{GREEN}{msg}{RESET}"))),
        Status::Error(msg) => lines.push(box_line_center(&format!("{RED}{msg}{RESET}"))),
    }
    lines.push(box_bottom());

    if let Some(password) = form.password() {
        lines.push(String::new());
        lines.push(box_top("Result"));
        lines.push(box_line(&format!("{DIM}Press [c] to copy{RESET}")));
        lines.push(box_line(&format!("{BOLD}{password}{RESET}")));
        if let Some(bits) = form.entropy_bits() {
            lines.push(box_line(&format!(
                "{YELLOW}{:.1} bits ({}){RESET}",
                bits,
                strength(bits)
            )));
        }
        lines.push(box_bottom());
    }

    lines
}

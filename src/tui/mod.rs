//! Interactive generator screen.

mod input;
mod render;

pub use input::{Action, map_key};
pub use render::{Status, render};

use crossterm::event::{Event, read};

use crate::clipboard::Clipboard;
use crate::error::{Error, Result};
use crate::form::Form;
use crate::settings::Settings;
use crate::terminal::{ScreenGuard, clear, print_lines};

/// Run the screen until the user quits.
pub fn run() -> Result<()> {
    let settings = Settings::load_or_default();
    let mut form = Form::new(&settings);
    let mut status = Status::None;
    let mut clipboard: Option<Clipboard> = None;

    let _guard = ScreenGuard::new()?;

    loop {
        clear();
        print_lines(&render(&form, &status));

        let key = match read()? {
            Event::Key(key) => key,
            _ => continue,
        };

        let action = map_key(key);
        if action == Action::Quit {
            break;
        }
        if action != Action::Ignore {
            status = apply(action, &mut form, &mut clipboard);
        }
    }

    Ok(())
}

/// Apply one action to the form, returning the status line to show.
pub fn apply(action: Action, form: &mut Form, clipboard: &mut Option<Clipboard>) -> Status {
    match action {
        Action::Digit(c) => form.push_length_char(c),
        Action::Backspace => form.pop_length_char(),
        Action::ClearLength => form.clear_length(),
        Action::Toggle(class) => form.toggle(class),
        Action::Generate => match form.submit() {
            // The length error is already drawn under the field
            Ok(_) | Err(Error::Validation(_)) => {}
            Err(e) => return Status::Error(e.to_string()),
        },
        Action::Reset => form.reset(),
        Action::Copy => return copy(form, clipboard),
        Action::Save => return save(form),
        Action::Quit | Action::Ignore => {}
    }
    Status::None
}

fn copy(form: &Form, clipboard: &mut Option<Clipboard>) -> Status {
    let Some(password) = form.password() else {
        return Status::Error("Nothing to copy yet".into());
    };

    if clipboard.is_none() {
        match Clipboard::new() {
            Ok(c) => *clipboard = Some(c),
            Err(e) => return Status::Error(e.to_string()),
        }
    }

    match clipboard.as_mut().map(|c| c.copy(password)) {
        Some(Ok(())) => Status::Info("*** COPIED TO CLIPBOARD ***".into()),
        Some(Err(e)) => Status::Error(e.to_string()),
        None => Status::Error("Clipboard unavailable".into()),
    }
}

fn save(form: &Form) -> Status {
    let Some(settings) = form.to_settings() else {
        return Status::Error("Fix the length before saving".into());
    };
    match settings.save_to_file() {
        Ok(()) => Status::Info("Defaults saved".into()),
        Err(e) => Status::Error(format!("Error saving settings: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::CharClass;

    #[test]
    fn generate_failure_becomes_error_status() {
        let mut form = Form::new(&Settings::default());
        let mut clipboard = None;
        apply(Action::Toggle(CharClass::Lowercase), &mut form, &mut clipboard);
        let status = apply(Action::Generate, &mut form, &mut clipboard);
        assert_eq!(
            status,
            Status::Error("Select at least one character class".into())
        );
    }

    #[test]
    fn invalid_length_is_not_repeated_in_status() {
        let mut form = Form::new(&Settings::default());
        let mut clipboard = None;
        apply(Action::ClearLength, &mut form, &mut clipboard);
        let status = apply(Action::Generate, &mut form, &mut clipboard);
        assert_eq!(status, Status::None);

        let screen = render(&form, &status).join("\n");
        assert_eq!(screen.matches("Password length is required").count(), 1);
    }

    #[test]
    fn edits_clear_previous_status() {
        let mut form = Form::new(&Settings::default());
        let mut clipboard = None;
        assert_eq!(
            apply(Action::Generate, &mut form, &mut clipboard),
            Status::None
        );
        assert!(form.password().is_some());
        assert_eq!(
            apply(Action::Digit('1'), &mut form, &mut clipboard),
            Status::None
        );
    }

    #[test]
    fn copy_without_result_is_rejected() {
        let form = Form::new(&Settings::default());
        let mut clipboard = None;
        assert_eq!(
            copy(&form, &mut clipboard),
            Status::Error("Nothing to copy yet".into())
        );
        assert!(clipboard.is_none());
    }

    #[test]
    fn save_requires_valid_length() {
        let mut form = Form::new(&Settings::default());
        form.clear_length();
        assert_eq!(
            save(&form),
            Status::Error("Fix the length before saving".into())
        );
    }
}

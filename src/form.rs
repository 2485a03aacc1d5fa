//! Generator screen state.
//!
//! Holds everything the interactive screen shows: the raw length text, whether
//! it has been touched, the class selection and the last generated password.

use zeroize::Zeroizing;

use crate::error::{Result, ValidationError};
use crate::pass::{self, CharClass, Selection};
use crate::settings::Settings;

/// Two digits cover every valid length.
const MAX_INPUT_LEN: usize = 2;

#[derive(Debug)]
pub struct Form {
    length_input: String,
    touched: bool,
    selection: Selection,
    password: Option<Zeroizing<String>>,
    pool_size: usize,
}

impl Form {
    pub fn new(settings: &Settings) -> Self {
        Self {
            length_input: settings.length.to_string(),
            touched: false,
            selection: settings.selection,
            password: None,
            pool_size: 0,
        }
    }

    pub fn length_input(&self) -> &str {
        &self.length_input
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().map(String::as_str)
    }

    /// Entropy of the current result, measured against the pool it came from.
    pub fn entropy_bits(&self) -> Option<f64> {
        self.password()
            .map(|p| pass::entropy_bits(p.chars().count(), self.pool_size))
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Append a digit to the length field. Other characters are ignored.
    pub fn push_length_char(&mut self, c: char) {
        self.touched = true;
        if c.is_ascii_digit() && self.length_input.len() < MAX_INPUT_LEN {
            self.length_input.push(c);
        }
    }

    pub fn pop_length_char(&mut self) {
        self.touched = true;
        self.length_input.pop();
    }

    pub fn clear_length(&mut self) {
        self.touched = true;
        self.length_input.clear();
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.selection = self.selection.toggled(class);
    }

    /// Validation error to display; hidden until the field is touched.
    pub fn length_error(&self) -> Option<ValidationError> {
        if !self.touched {
            return None;
        }
        pass::validate_length(&self.length_input).err()
    }

    pub fn can_submit(&self) -> bool {
        pass::validate_length(&self.length_input).is_ok()
    }

    /// Validate, build the pool and generate. A failure keeps the previous result.
    pub fn submit(&mut self) -> Result<&str> {
        self.touched = true;
        let length = pass::validate_length(&self.length_input)?;
        let password = pass::generate_password(&self.selection, length)?;
        self.pool_size = pass::pool_size(&self.selection);
        let stored = self.password.insert(Zeroizing::new(password));
        Ok(stored.as_str())
    }

    /// Clear the result and restore the default selection. The length text stays.
    pub fn reset(&mut self) {
        self.password = None;
        self.selection = Selection::lowercase_only();
    }

    /// Current length and selection as savable defaults, if the length is valid.
    pub fn to_settings(&self) -> Option<Settings> {
        pass::validate_length(&self.length_input)
            .ok()
            .map(|length| Settings {
                length,
                selection: self.selection,
            })
    }
}

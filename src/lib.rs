//! Random password generation from selectable character classes.
//!
//! The core lives in [`pass`]: [`validate_length`] checks a raw length against
//! `[MIN_LENGTH, MAX_LENGTH]`, [`build_pool`] concatenates the enabled classes
//! and [`generate`] samples from the pool. [`form::Form`] holds the state of
//! the interactive screen in [`tui`]; [`cli`] is the flag-driven front end.

pub mod cli;
pub mod clipboard;
pub mod error;
pub mod exits;
pub mod form;
pub mod pass;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use error::{Error, GenerationError, Result, ValidationError};
pub use pass::{
    CharClass, MAX_LENGTH, MIN_LENGTH, Selection, build_pool, generate, generate_password,
    generate_with, validate_length,
};

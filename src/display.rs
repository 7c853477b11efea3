/// Keystroke rules for the display text.
///
/// Pure functions that compute the next display text from the current one
/// and a single keystroke.
pub mod format;

/// The display editing session.
///
/// Owns the display text and ties the keystroke rules to the evaluator.
pub mod session;

pub use format::{ERROR_SENTINEL, erase, format_input};
pub use session::DisplayBuffer;

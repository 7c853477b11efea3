use tracing::debug;

use crate::{
    display::format::{ERROR_SENTINEL, erase, format_input},
    error::CalcResult,
    interpreter::value::core::Number,
};

/// The text of a calculator display and the actions that edit it.
///
/// Every action leaves the text in a state the parser accepts or rejects as
/// a whole; there is no hidden state besides the text itself. After a failed
/// [`DisplayBuffer::compute`] the text reads `"ERROR"` and the next keystroke
/// starts a fresh expression.
///
/// # Example
/// ```
/// use redcalc::display::DisplayBuffer;
///
/// let mut display = DisplayBuffer::new();
/// display.type_keys("2√25");
/// assert_eq!(display.text(), "2 √ 25");
///
/// display.compute().unwrap();
/// assert_eq!(display.text(), "5");
///
/// display.type_keys("/0");
/// assert!(display.compute().is_err());
/// assert_eq!(display.text(), "ERROR");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayBuffer {
    text: String,
}

impl DisplayBuffer {
    /// Creates an empty display.
    #[must_use]
    pub const fn new() -> Self {
        Self { text: String::new() }
    }

    /// The current display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Applies one keystroke.
    pub fn push(&mut self, key: char) {
        self.text = format_input(&self.text, key);
    }

    /// Applies each character of `keys` in turn.
    pub fn type_keys(&mut self, keys: &str) {
        for key in keys.chars() {
            self.push(key);
        }
    }

    /// Removes the last character typed, see [`erase`].
    pub fn erase(&mut self) {
        self.text = erase(&self.text);
    }

    /// Empties the display.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Evaluates the display text and replaces it with the outcome.
    ///
    /// On success the text becomes the result; on any failure it becomes
    /// `"ERROR"`.
    ///
    /// # Errors
    /// Returns the parse or evaluation error, after updating the text.
    pub fn compute(&mut self) -> CalcResult<Number> {
        let result = crate::evaluate(&self.text);

        self.text = match &result {
            Ok(number) => number.to_string(),
            Err(err) => {
                debug!(input = %self.text, %err, "display shows error");
                ERROR_SENTINEL.to_string()
            },
        };

        result
    }
}

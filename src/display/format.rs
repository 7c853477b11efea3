use crate::ast::Operator;

/// The text shown in place of a result when evaluation fails.
pub const ERROR_SENTINEL: &str = "ERROR";

/// A read-only view of the display text, indexed from the end.
struct Tail<'a> {
    text:  &'a str,
    chars: Vec<char>,
}

impl<'a> Tail<'a> {
    fn new(text: &'a str) -> Self {
        Self { text,
               chars: text.chars().collect() }
    }

    fn len(&self) -> usize {
        self.chars.len()
    }

    /// The `n`-th character from the end, `back(1)` being the last one.
    fn back(&self, n: usize) -> Option<char> {
        self.chars
            .len()
            .checked_sub(n)
            .map(|index| self.chars[index])
    }

    /// The text without its last `n` characters.
    fn without_last(&self, n: usize) -> String {
        self.chars[..self.len().saturating_sub(n)].iter().collect()
    }

    fn count(&self, c: char) -> usize {
        self.chars.iter().filter(|&&ch| ch == c).count()
    }
}

fn is_operator(c: Option<char>) -> bool {
    c.and_then(Operator::from_symbol).is_some()
}

/// Computes the display text after typing `incoming`.
///
/// Tokens on the display are separated by single spaces so that the text can
/// be handed to the parser unchanged. The rules, applied to `current`:
///
/// - `"ERROR"` is treated as an empty display.
/// - An operator is appended surrounded by spaces. Typed right after another
///   operator it replaces that operator, except after `!` or `)` where it is
///   appended. `-` is also accepted at the very start and right after `(`,
///   where it is attached to the number that follows, and may repeat.
/// - `(` is accepted only on an empty display or right after an operator
///   other than `!`.
/// - `)` is accepted only while more parentheses are open than closed, and
///   not right after `(`, a sign, or an operator still awaiting its operand.
/// - Digits and `.` are appended directly, except right after `!`.
///
/// A keystroke that breaks a rule leaves the text unchanged. Characters other
/// than digits, `.`, parentheses and operator symbols are ignored.
///
/// # Example
/// ```
/// use redcalc::display::format_input;
///
/// let text = "5*(3+6)/15".chars().fold(String::new(), |text, c| format_input(&text, c));
/// assert_eq!(text, "5 * ( 3 + 6 ) / 15");
/// assert_eq!(format_input("5 + ", '*'), "5 * ");
/// assert_eq!(format_input("ERROR", '7'), "7");
/// ```
#[must_use]
pub fn format_input(current: &str, incoming: char) -> String {
    let text = if current == ERROR_SENTINEL { "" } else { current };
    let tail = Tail::new(text);

    let next = match incoming {
        c if Operator::from_symbol(c).is_some() => append_operator(&tail, c),
        ')' => close_group(&tail),
        '(' => open_group(&tail),
        c if c.is_ascii_digit() || c == '.' => append_digit(&tail, c),
        _ => None,
    };

    next.unwrap_or_else(|| text.to_string())
}

fn append_operator(tail: &Tail<'_>, op: char) -> Option<String> {
    let text = tail.text;

    if tail.back(1) == Some(' ') {
        if tail.len() <= 3 && op != '-' {
            return None;
        }

        return match tail.back(2) {
            None => None,
            Some(')' | '!') => Some(format!("{text}{op} ")),
            Some('(') => (op == '-').then(|| format!("{text}-")),
            _ if tail.len() < 4 || tail.back(4) != Some('(') => {
                Some(format!("{}{op} ", tail.without_last(2)))
            },
            _ => None,
        };
    }

    if tail.len() > 0 && tail.back(1) != Some('-') {
        Some(format!("{text} {op} "))
    } else if op == '-' {
        Some(format!("{text}-"))
    } else {
        None
    }
}

fn close_group(tail: &Tail<'_>) -> Option<String> {
    let last = tail.back(1);
    let before = tail.back(2);

    let balanced = tail.count('(') <= tail.count(')');
    let awaits_operand = is_operator(before) && last == Some(' ') && before != Some('!');

    if balanced || tail.len() < 2 || before == Some('(') || last == Some('-') || awaits_operand {
        return None;
    }

    let gap = if last == Some(' ') { "" } else { " " };
    Some(format!("{}{gap}) ", tail.text))
}

fn open_group(tail: &Tail<'_>) -> Option<String> {
    let before = tail.back(2);
    let after_operator = tail.len() >= 2 && is_operator(before) && before != Some('!');

    if tail.len() > 0 && !after_operator {
        return None;
    }

    let gap = if tail.back(1) == Some(' ') { "" } else { " " };
    Some(format!("{}{gap}( ", tail.text))
}

fn append_digit(tail: &Tail<'_>, digit: char) -> Option<String> {
    if tail.len() >= 2 && tail.back(2) == Some('!') {
        return None;
    }

    Some(format!("{}{digit}", tail.text))
}

/// Removes the last character typed.
///
/// A trailing space belongs to the token before it: erasing `"5 + "` removes
/// the operator together with both of its spaces. Erasing `"ERROR"` clears
/// the display.
///
/// # Example
/// ```
/// use redcalc::display::erase;
///
/// assert_eq!(erase("5 + "), "5");
/// assert_eq!(erase("12"), "1");
/// assert_eq!(erase("( "), "");
/// assert_eq!(erase(""), "");
/// ```
#[must_use]
pub fn erase(current: &str) -> String {
    if current == ERROR_SENTINEL {
        return String::new();
    }

    let mut chars: Vec<char> = current.chars().collect();
    let trailing_space = chars.last() == Some(&' ');

    if trailing_space {
        chars.pop();
    }
    chars.pop();
    if trailing_space && chars.last() == Some(&' ') {
        chars.pop();
    }

    chars.into_iter().collect()
}

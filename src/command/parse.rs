//! Tokenizing and parsing of configuration lines.

use crate::command::error::CommandError;
use crate::core::Condition;
use std::fmt;

/// Key prefix reserved for condition declarations.
pub const CONDITION_PREFIX: &str = "condition_";

const SET_VERB: &str = "set";

/// Split `text` at the first `delimiter`.
///
/// Returns the word before the delimiter and the remainder after it. Without
/// a delimiter the whole text is the word and the remainder is empty.
///
/// ```rust
/// use safegate::command::cut_first_word;
///
/// assert_eq!(cut_first_word("set a=b", ' '), ("set", "a=b"));
/// assert_eq!(cut_first_word("arm", ','), ("arm", ""));
/// ```
pub fn cut_first_word(text: &str, delimiter: char) -> (&str, &str) {
    text.split_once(delimiter).unwrap_or((text, ""))
}

/// Parse a state code the way C's `atoi` does.
///
/// Leading whitespace and a sign are accepted, then as many decimal digits
/// as follow. Anything unparseable yields `0`; out-of-range values saturate.
///
/// ```rust
/// use safegate::command::parse_state;
///
/// assert_eq!(parse_state("2"), 2);
/// assert_eq!(parse_state(" -7"), -7);
/// assert_eq!(parse_state("12abc"), 12);
/// assert_eq!(parse_state("oops"), 0);
/// assert_eq!(parse_state(""), 0);
/// ```
pub fn parse_state(token: &str) -> i32 {
    let token = token.trim_start();
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i32, |value, byte| {
            let digit = i32::from(byte - b'0');
            if negative {
                value.saturating_mul(10).saturating_sub(digit)
            } else {
                value.saturating_mul(10).saturating_add(digit)
            }
        })
}

/// A parsed configuration command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Declare or replace the condition named `id`.
    SetCondition { id: String, condition: Condition },
}

impl Command {
    /// Parse a single command line.
    ///
    /// Surrounding whitespace (such as a transport line ending) is ignored.
    ///
    /// ```rust
    /// use safegate::command::Command;
    /// use safegate::core::Condition;
    ///
    /// let command = Command::parse("set condition_a=arm,sensor,2").unwrap();
    /// assert_eq!(
    ///     command,
    ///     Command::SetCondition {
    ///         id: "a".to_string(),
    ///         condition: Condition::new("arm", "sensor", 2),
    ///     }
    /// );
    ///
    /// let rejected = Command::parse("get foo").unwrap_err();
    /// assert_eq!(rejected.to_string(), "Unknown command: get");
    /// ```
    pub fn parse(raw: &str) -> Result<Self, CommandError> {
        let (verb, rest) = cut_first_word(raw.trim(), ' ');
        if verb != SET_VERB {
            return Err(CommandError::UnknownCommand {
                command: verb.to_string(),
            });
        }

        let (key, value) = cut_first_word(rest.trim_start(), '=');
        let id = key
            .strip_prefix(CONDITION_PREFIX)
            .ok_or_else(|| CommandError::UnknownSetting {
                key: key.to_string(),
            })?;

        Ok(Self::SetCondition {
            id: id.to_string(),
            condition: Condition::from_triple(value),
        })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetCondition { id, condition } => {
                write!(f, "{SET_VERB} {CONDITION_PREFIX}{id}={condition}")
            }
        }
    }
}

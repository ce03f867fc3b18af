use chrono::NaiveDate;

use crate::error::{BookError, BookResult};

/// Textual birthday format, e.g. `15.03.2000`.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

pub const PHONE_LENGTH: usize = 10;

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> BookResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(BookError::validation(field, value, "cannot be blank"))
    } else {
        Ok(trimmed)
    }
}

/// Validates a phone number: exactly ten ASCII digits, nothing else.
pub fn phone_digits(value: &str) -> BookResult<String> {
    if value.len() == PHONE_LENGTH && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(value.to_string())
    } else {
        Err(BookError::validation("phone", value, "must be exactly 10 digits"))
    }
}

/// Parses a `DD.MM.YYYY` date. Both day and month need two digits.
pub fn birthday_date(value: &str) -> BookResult<NaiveDate> {
    let shape_ok = value.len() == 10
        && value.char_indices().all(|(i, c)| match i {
            2 | 5 => c == '.',
            _ => c.is_ascii_digit(),
        });
    if !shape_ok {
        return Err(BookError::validation("birthday", value, "expected DD.MM.YYYY"));
    }
    NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
        .map_err(|_| BookError::validation("birthday", value, "not a calendar date"))
}

/// Checks that a command received at least `expected` positional arguments.
pub fn require_args(command: &str, args: &[&str], expected: usize) -> BookResult<()> {
    if args.len() < expected {
        Err(BookError::ArgumentCount {
            command: command.to_string(),
            expected,
            got: args.len(),
        })
    } else {
        Ok(())
    }
}

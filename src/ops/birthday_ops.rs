use chrono::NaiveDate;

use super::Reply;
use crate::error::{BookError, BookResult};
use crate::model::{AddressBook, Record};
use crate::validation::require_args;

pub const BIRTHDAY_ADDED: &str = "Birthday added.";

/// Fallback line for `birthdays` when nobody qualifies.
pub fn no_upcoming_message(window_days: u32) -> String {
    match window_days {
        0 => "No contacts to congratulate today.".to_string(),
        1 => "No contacts to congratulate in the next day.".to_string(),
        n => format!("No contacts to congratulate in the next {} days.", n),
    }
}

/// `add-birthday <name> <DD.MM.YYYY>`: sets the birthday, creating the contact if needed.
pub fn add_birthday(book: &mut AddressBook, args: &[&str]) -> BookResult<Reply> {
    require_args("add-birthday", args, 2)?;
    let (name, date) = (args[0], args[1]);

    match book.find_mut(name) {
        Some(record) => record.add_birthday(date)?,
        None => {
            let mut record = Record::create(name)?;
            record.add_birthday(date)?;
            book.add_record(record);
        }
    }
    Ok(Reply::message(BIRTHDAY_ADDED))
}

/// `show-birthday <name>`
pub fn show_birthday(book: &AddressBook, args: &[&str]) -> BookResult<Reply> {
    require_args("show-birthday", args, 1)?;
    let name = args[0];
    book.find(name)
        .and_then(Record::birthday)
        .map(|bd| Reply::Message(bd.to_string()))
        .ok_or_else(|| BookError::not_found("Birthday", name))
}

/// `birthdays`
pub fn birthdays(book: &AddressBook, window_days: u32, today: NaiveDate) -> Reply {
    let upcoming = book.upcoming_birthdays(window_days, today);
    if upcoming.is_empty() {
        return Reply::Message(no_upcoming_message(window_days));
    }
    Reply::Lines(upcoming.iter().map(ToString::to_string).collect())
}

use super::Reply;
use crate::error::{BookError, BookResult};
use crate::model::{AddressBook, PhoneNumber, Record};
use crate::validation::require_args;

pub const CONTACT_ADDED: &str = "Contact added.";
pub const CONTACT_UPDATED: &str = "Contact updated.";
pub const CONTACT_DELETED: &str = "Contact deleted.";
pub const PHONE_REMOVED: &str = "Phone removed.";
pub const NO_PHONES: &str = "No phones.";
pub const EMPTY_BOOK: &str = "Contact list is empty.";

/// `add <name> <phone>`: creates the contact if needed, then appends the phone.
pub fn add_contact(book: &mut AddressBook, args: &[&str]) -> BookResult<Reply> {
    require_args("add", args, 2)?;
    let (name, phone) = (args[0], args[1]);

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok(Reply::message(CONTACT_UPDATED));
    }

    let mut record = Record::create(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    Ok(Reply::message(CONTACT_ADDED))
}

/// `change <name> <old_phone> <new_phone>`
pub fn change_contact(book: &mut AddressBook, args: &[&str]) -> BookResult<Reply> {
    require_args("change", args, 3)?;
    let record = find_record_mut(book, args[0])?;
    record.edit_phone(args[1], args[2])?;
    Ok(Reply::message(CONTACT_UPDATED))
}

/// `phone <name>`
pub fn show_phone(book: &AddressBook, args: &[&str]) -> BookResult<Reply> {
    require_args("phone", args, 1)?;
    let record = book
        .find(args[0])
        .ok_or_else(|| BookError::not_found("Record", args[0]))?;

    if record.phones().is_empty() {
        return Ok(Reply::message(NO_PHONES));
    }
    let phones: Vec<&str> = record.phones().iter().map(PhoneNumber::as_str).collect();
    Ok(Reply::Message(phones.join("; ")))
}

/// `all`
pub fn show_all(book: &AddressBook) -> Reply {
    if book.is_empty() {
        return Reply::message(EMPTY_BOOK);
    }
    Reply::Lines(book.iter().map(Record::summary_line).collect())
}

/// `delete <name>`
pub fn delete_contact(book: &mut AddressBook, args: &[&str]) -> BookResult<Reply> {
    require_args("delete", args, 1)?;
    book.delete(args[0])?;
    Ok(Reply::message(CONTACT_DELETED))
}

/// `remove-phone <name> <phone>`. Removing a phone the contact doesn't have is not an error.
pub fn remove_phone(book: &mut AddressBook, args: &[&str]) -> BookResult<Reply> {
    require_args("remove-phone", args, 2)?;
    let record = find_record_mut(book, args[0])?;
    record.remove_phone(args[1]);
    Ok(Reply::message(PHONE_REMOVED))
}

fn find_record_mut<'a>(book: &'a mut AddressBook, name: &str) -> BookResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| BookError::not_found("Record", name))
}

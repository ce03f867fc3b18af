use chrono::NaiveDate;

use super::record::Record;
use crate::error::{BookError, BookResult};
use crate::queries::birthday_queries::{self, UpcomingBirthday};

/// All contacts, keyed by unique name, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from records in order. Later duplicates replace earlier ones.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut book = Self::new();
        for record in records {
            book.add_record(record);
        }
        book
    }

    /// Upsert: stores `record` under its name. An existing record with the same
    /// name is replaced in place and returned.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.position(record.name()) {
            Some(i) => Some(std::mem::replace(&mut self.records[i], record)),
            None => {
                self.records.push(record);
                None
            }
        }
    }

    /// Insert-only: fails if the name is already taken.
    pub fn insert(&mut self, record: Record) -> BookResult<()> {
        if self.position(record.name()).is_some() {
            return Err(BookError::AlreadyExists {
                entity_type: "Record".into(),
                identifier: record.name().to_string(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    /// Lookups trim `name` the same way [`Name`](super::Name) does on creation.
    pub fn find(&self, name: &str) -> Option<&Record> {
        let key = name.trim();
        self.records.iter().find(|r| r.name() == key)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let key = name.trim();
        self.records.iter_mut().find(|r| r.name() == key)
    }

    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let i = self
            .position(name)
            .ok_or_else(|| BookError::not_found("Record", name))?;
        Ok(self.records.remove(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose next birthday falls within `window_days` of `today`.
    /// See [`birthday_queries::upcoming_birthdays`].
    pub fn upcoming_birthdays(&self, window_days: u32, today: NaiveDate) -> Vec<UpcomingBirthday> {
        birthday_queries::upcoming_birthdays(self, window_days, today)
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = name.trim();
        self.records.iter().position(|r| r.name() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phone: &str) -> Record {
        let mut r = Record::create(name).unwrap();
        r.add_phone(phone).unwrap();
        r
    }

    #[test]
    fn upsert_keeps_position() {
        let mut book = AddressBook::new();
        book.add_record(record("Alice", "1111111111"));
        book.add_record(record("Bob", "2222222222"));
        let old = book.add_record(record("Alice", "3333333333"));

        assert_eq!(old.unwrap().phones()[0].as_str(), "1111111111");
        let names: Vec<&str> = book.iter().map(Record::name).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
        assert_eq!(book.find("Alice").unwrap().phones()[0].as_str(), "3333333333");
    }

    #[test]
    fn lookups_ignore_surrounding_whitespace() {
        let mut book = AddressBook::new();
        book.add_record(Record::create("  Alice ").unwrap());

        assert!(book.find("Alice").is_some());
        assert!(book.find(" Alice\t").is_some());
        assert!(book.find_mut("Alice ").is_some());
        assert!(book.insert(Record::create("Alice").unwrap()).is_err());
        assert_eq!(book.delete(" Alice").unwrap().name(), "Alice");
        assert!(book.is_empty());
    }

    #[test]
    fn from_records_last_write_wins() {
        let book = AddressBook::from_records(vec![
            record("Alice", "1111111111"),
            record("Alice", "2222222222"),
        ]);
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("Alice").unwrap().phones()[0].as_str(), "2222222222");
    }
}

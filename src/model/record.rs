use serde::{Deserialize, Serialize};

use super::fields::{Birthday, Name, PhoneNumber};
use crate::error::{BookError, BookResult};

/// One contact: a name, phone numbers in insertion order, and at most one birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn create(name: &str) -> BookResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Appends a phone. Duplicates are allowed.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Removes every phone whose text equals `raw`. Returns how many were removed.
    pub fn remove_phone(&mut self, raw: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != raw);
        before - self.phones.len()
    }

    /// Replaces the first phone matching `old` in place. A missing `old` is
    /// reported before `new` goes through the same validation as `add_phone`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let i = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| BookError::not_found("Phone", old))?;
        self.phones[i] = PhoneNumber::new(new)?;
        Ok(())
    }

    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Sets the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, raw: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// `name: phones; Birthday: value`, the line shown by `all`.
    pub fn summary_line(&self) -> String {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        let birthday = self
            .birthday
            .as_ref()
            .map(Birthday::as_str)
            .unwrap_or("No birthday");
        format!("{}: {}; Birthday: {}", self.name, phones.join("; "), birthday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_phone_rejects_invalid_and_keeps_list_unchanged() {
        let mut record = Record::create("Alice").unwrap();
        assert!(record.add_phone("12").is_err());
        assert!(record.phones().is_empty());
    }

    #[test]
    fn summary_line_without_birthday() {
        let mut record = Record::create("Alice").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();
        assert_eq!(
            record.summary_line(),
            "Alice: 1234567890; 0987654321; Birthday: No birthday"
        );
    }

    #[test]
    fn edit_phone_with_invalid_new_value_leaves_old() {
        let mut record = Record::create("Alice").unwrap();
        record.add_phone("1234567890").unwrap();
        assert!(record.edit_phone("1234567890", "abc").is_err());
        assert_eq!(record.phones()[0].as_str(), "1234567890");
    }

    #[test]
    fn edit_phone_missing_old_wins_over_invalid_new() {
        let mut record = Record::create("Alice").unwrap();
        record.add_phone("1234567890").unwrap();
        let err = record.edit_phone("0000000000", "abc").unwrap_err();
        assert!(matches!(err, BookError::NotFound { .. }));
    }
}

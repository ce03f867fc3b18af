pub mod fields;
pub mod record;
pub mod book;

// Re-exports for convenience
pub use fields::{Birthday, Name, PhoneNumber};
pub use record::Record;
pub use book::AddressBook;

pub mod error;
pub mod validation;
pub mod model;
pub mod queries;
pub mod ops;
pub mod store;
pub mod config;
pub mod cli;

pub use config::Config;
pub use error::{BookError, BookResult};
pub use model::{AddressBook, Record};

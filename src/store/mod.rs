pub mod snapshot;
pub mod session;

pub use session::Session;

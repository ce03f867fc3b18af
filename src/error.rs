use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("invalid {field} '{value}': {reason}")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("{command} expects {expected} argument(s), got {got}")]
    ArgumentCount {
        command: String,
        expected: usize,
        got: usize,
    },

    #[error("{entity_type} already exists: {identifier}")]
    AlreadyExists {
        entity_type: String,
        identifier: String,
    },

    #[error("Invalid configuration for {var}: {reason}")]
    Config { var: String, reason: String },

    #[error("Unsupported snapshot version: {version}")]
    UnsupportedSnapshot { version: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type BookResult<T> = Result<T, BookError>;

/// The buckets errors collapse into at the command boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    ArgumentCount,
    Internal,
}

impl ErrorKind {
    /// Fixed text shown to the user for each bucket.
    pub fn user_message(self) -> &'static str {
        match self {
            ErrorKind::Validation => "Check the validity of the entered data.",
            ErrorKind::NotFound => "Contact not found.",
            ErrorKind::ArgumentCount => "Give me name and phone please.",
            ErrorKind::Internal => "Something went wrong, see the log for details.",
        }
    }
}

impl BookError {
    pub fn validation(field: &str, value: &str, reason: &str) -> Self {
        BookError::Validation {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn not_found(entity_type: &str, id: &str) -> Self {
        BookError::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BookError::Validation { .. } | BookError::AlreadyExists { .. } => ErrorKind::Validation,
            BookError::NotFound { .. } => ErrorKind::NotFound,
            BookError::ArgumentCount { .. } => ErrorKind::ArgumentCount,
            BookError::Config { .. }
            | BookError::UnsupportedSnapshot { .. }
            | BookError::Io(_)
            | BookError::Json(_) => ErrorKind::Internal,
        }
    }

    pub fn user_message(&self) -> &'static str {
        self.kind().user_message()
    }
}

pub mod contact_ops;
pub mod birthday_ops;

/// What a command hands back for printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Message(String),
    Lines(Vec<String>),
}

impl Reply {
    pub fn message(text: &str) -> Self {
        Reply::Message(text.to_string())
    }

    pub fn into_lines(self) -> Vec<String> {
        match self {
            Reply::Message(text) => vec![text],
            Reply::Lines(lines) => lines,
        }
    }
}

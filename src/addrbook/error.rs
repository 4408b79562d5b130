use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Invalid phone `{0}`: must be exactly 10 digits")]
    InvalidPhone(String),

    #[error("Invalid date `{0}`: use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid value: {0}")]
    InvalidFieldValue(String),

    #[error("Phone not found: {0}")]
    PhoneNotFound(String),

    #[error("Contact not found: {0}")]
    NameNotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Note text cannot be empty")]
    EmptyNoteText,

    #[error("Missing argument: {0}")]
    EmptyArgument(&'static str),

    #[error("Contact {0} does not support notes")]
    NotNoteCapable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt address book: {0}")]
    CorruptFormat(String),
}

pub type Result<T> = std::result::Result<T, BookError>;

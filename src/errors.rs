use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A required form field is missing or malformed.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Contact with this name already exists: {0}")]
    DuplicateName(String),

    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Update or delete was requested without a selected list entry.
    #[error("Please select a contact to {0}.")]
    NoSelection(String),

    #[error("No contact found for '{0}'.")]
    NoMatch(String),

    /// The persisted file exists but is not a valid contact book.
    #[error("Contact file {path:?} could not be parsed: {source}")]
    CorruptData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not serialize contacts: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),

    #[error("Invalid number format: {0}")]
    ParseInt(#[from] std::num::ParseIntError),
}

impl AppError {
    /// Recoverable errors are reported to the user and the session goes on.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            AppError::CorruptData { .. } | AppError::Serialize(_) | AppError::Io(_)
        )
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppError::Validation(_) | AppError::ParseCommand(_) | AppError::ParseInt(_) => {
                "Input Error"
            }
            AppError::DuplicateName(_) => "Contact Exists",
            AppError::NoSelection(_) => "Selection Error",
            AppError::NotFound(_) => "Error",
            AppError::NoMatch(_) => "Search Result",
            AppError::CorruptData { .. } | AppError::Serialize(_) | AppError::Io(_) => {
                "Storage Error"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_validation_error_message() {
        let err = AppError::Validation("Name and Phone are required.".to_string());

        assert_eq!(
            format!("{}", err),
            "Validation failed: Name and Phone are required."
        );
        assert_eq!(err.title(), "Input Error");
    }

    #[test]
    fn confirm_parse_int_error_message() {
        let wrong_string = "abc".parse::<usize>().unwrap_err();
        let err = AppError::from(wrong_string);

        assert!(format!("{}", err).contains("Invalid number format: "));
        assert!(err.is_recoverable());
    }

    #[test]
    fn storage_errors_are_fatal() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AppError::CorruptData {
            path: PathBuf::from("contacts.json"),
            source,
        };
        assert!(!err.is_recoverable());

        let io = AppError::from(std::io::Error::other("disk gone"));
        assert!(!io.is_recoverable());

        assert!(AppError::NoMatch("bob".to_string()).is_recoverable());
        assert!(AppError::NoSelection("delete".to_string()).is_recoverable());
    }
}

//! Error types for ticket-label.

use thiserror::Error;

/// Convenient result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TicketLabelError>;

/// All failures the service can produce.
///
/// Storage loads never surface here: a missing or corrupt data file degrades
/// to an empty/default collection and is only logged. Everything that must
/// reach the caller (validation, lookups, writes) goes through this enum.
#[derive(Error, Debug)]
pub enum TicketLabelError {
    /// A required free-text field was empty after trimming.
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// No ticket with the given id exists.
    #[error("ticket {id} not found")]
    TicketNotFound { id: u64 },

    /// A bulk import produced zero usable rows.
    #[error("no tickets were imported")]
    NothingImported,

    /// I/O failure while reading or rewriting a data file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding failure while rewriting the ticket file.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding failure while rewriting a label file.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file or environment could not be read.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Catch-all for errors from external layers.
    #[error("{0}")]
    Custom(String),
}

impl TicketLabelError {
    /// Creates a custom error with the given message.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Human-readable message suitable for CLI output and API responses.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyField { field } => format!("{field} must not be empty"),
            Self::TicketNotFound { id } => format!("Ticket {id} was not found"),
            Self::NothingImported => "No tickets were imported".to_string(),
            Self::Io(err) => format!("File operation failed: {err}"),
            Self::Csv(err) => format!("Could not write ticket data: {err}"),
            Self::Json(err) => format!("Could not write label data: {err}"),
            Self::Config(err) => format!("Configuration problem: {err}"),
            Self::Custom(message) => message.clone(),
        }
    }

    /// Actionable hints shown below the error message in the CLI.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyField { field } => {
                vec![format!("Provide a non-empty value for '{field}'")]
            },
            Self::TicketNotFound { .. } => {
                vec!["List existing tickets to see the known ids".to_string()]
            },
            Self::NothingImported => vec![
                "Check that the CSV has a header row with 'title' and 'content' columns"
                    .to_string(),
                "Rows with an empty title or content are skipped".to_string(),
            ],
            Self::Io(_) => {
                vec!["Check that the data directory exists and is writable".to_string()]
            },
            Self::Config(_) => {
                vec!["Check ticket-label.toml and TICKET_LABEL__* environment variables"
                    .to_string()]
            },
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let err = TicketLabelError::EmptyField { field: "title" };
        assert_eq!(err.user_message(), "title must not be empty");

        let err = TicketLabelError::TicketNotFound { id: 9999 };
        assert_eq!(err.user_message(), "Ticket 9999 was not found");
    }

    #[test]
    fn test_suggestions_present_for_import_failure() {
        assert!(!TicketLabelError::NothingImported.suggestions().is_empty());
    }

    #[test]
    fn test_custom_constructor() {
        let err = TicketLabelError::custom("server exited");
        assert_eq!(err.to_string(), "server exited");
    }
}

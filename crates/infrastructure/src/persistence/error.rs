//! Shared error mapping for file-based persistence

use application::error::ApplicationError;

/// Map a filesystem error to an application-layer error
pub fn map_io_error(context: &str, e: &std::io::Error) -> ApplicationError {
    ApplicationError::Storage(format!("{context}: {e}"))
}

/// Map a JSON error to an application-layer error
pub fn map_json_error(context: &str, e: &serde_json::Error) -> ApplicationError {
    ApplicationError::Storage(format!("{context}: invalid JSON: {e}"))
}

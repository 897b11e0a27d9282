use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A value stored in the database does not match any known variant.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Stored {field} value '{value}' is not recognised")]
    UnknownStoredValue {
        /// Column the value was read from
        field: &'static str,
        /// The unrecognised value
        value: String,
    },

    /// Failure to decode a JSON encoded column.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to decode stored {field}: {source}")]
    DecodeColumn {
        /// Column the value was read from
        field: &'static str,
        /// The underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// Password hashing or hash parsing failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

use std::error;
use std::fmt;

/// Error type for JSON Schema to C++ generation operations.
#[derive(Debug)]
pub enum CppGenError {
    /// The schema's shape cannot be generated from: the root is not an
    /// object, a type tag is missing or unsupported, or an array schema
    /// has no `items`. Aborts the whole resolution; never partial.
    Structural(String),

    /// I/O error (e.g., reading the schema file, writing the output file).
    Io(std::io::Error),

    /// The schema file is not well-formed JSON, or a sub-schema could not
    /// be deserialized.
    Json(serde_json::Error),
}

impl error::Error for CppGenError {}

impl fmt::Display for CppGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structural(message) => write!(f, "{message}"),
            Self::Io(io_error) => fmt::Display::fmt(io_error, f),
            Self::Json(json_error) => fmt::Display::fmt(json_error, f),
        }
    }
}

impl From<&str> for CppGenError {
    fn from(message: &str) -> Self {
        Self::Structural(message.to_string())
    }
}

impl From<String> for CppGenError {
    fn from(message: String) -> Self {
        Self::Structural(message)
    }
}

impl From<std::io::Error> for CppGenError {
    fn from(io_error: std::io::Error) -> Self {
        Self::Io(io_error)
    }
}

impl From<serde_json::Error> for CppGenError {
    fn from(json_error: serde_json::Error) -> Self {
        Self::Json(json_error)
    }
}

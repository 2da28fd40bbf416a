//! Domain-level error type.
//!
//! Transport agnostic: the HTTP adapter maps [`ErrorCode`] onto status codes
//! and renders the message into the wire payload.

/// Stable machine-readable error category.
///
/// The service surfaces exactly two kinds of failure: a missing resource and
/// everything else. Malformed input and persistence failures all land on
/// [`ErrorCode::InvalidRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The requested employee does not exist.
    NotFound,
    /// Any other failure during request handling.
    InvalidRequest,
}

/// Domain error carrying a category and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn not_found_constructor_sets_code_and_message() {
        let err = Error::not_found("There is no employee with id=9 in database");

        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "There is no employee with id=9 in database");
    }

    #[rstest]
    fn display_renders_the_message() {
        let err = Error::invalid_request("bad payload");
        assert_eq!(err.to_string(), "bad payload");
    }
}

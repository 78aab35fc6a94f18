//! Error types for validation failures
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes and messages.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
///
/// Produced by [`Validate::validate`](crate::foundation::Validate::validate)
/// from the failing validator's code and message. Forms attach the field
/// (item key or title) before handing the error to a host.
///
/// # Examples
///
/// ```rust
/// use rowbind_validator::ValidationError;
///
/// let error = ValidationError::new("greater_than", "must greater than 0")
///     .with_field("age")
///     .with_param("bound", "0");
///
/// assert_eq!(error.param("bound"), Some("0"));
/// assert_eq!(error.to_string(), "age must greater than 0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "required", "greater_than", "pattern"
    pub code: Cow<'static, str>,

    /// Human-readable error message.
    pub message: Cow<'static, str>,

    /// Optional field the error belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value parameters (typically 0-2).
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
        }
    }

    /// Sets the field this error belongs to.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{field} {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONSTRUCTION ERRORS
// ============================================================================

/// Error returned when a validator cannot be built from its configuration.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// The regular expression does not compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl PatternError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::InvalidPattern { .. } => "VALIDATOR_INVALID_PATTERN",
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
        assert_eq!(error.to_string(), "Test error");
    }

    #[test]
    fn error_with_field_prefixes_display() {
        let error = ValidationError::new("required", "is required").with_field("Name");
        assert_eq!(error.field.as_deref(), Some("Name"));
        assert_eq!(error.to_string(), "Name is required");
    }

    #[test]
    fn error_with_params() {
        let error = ValidationError::new("less_than", "must less than 10")
            .with_param("bound", "10")
            .with_param("actual", "12");

        assert_eq!(error.param("bound"), Some("10"));
        assert_eq!(error.param("actual"), Some("12"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn zero_alloc_static_strings() {
        let error = ValidationError::new("required", "is required");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn serializes_without_empty_fields() {
        let error = ValidationError::new("required", "is required");
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "required", "message": "is required" })
        );
    }

    #[test]
    fn pattern_error_reports_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let error = PatternError::InvalidPattern {
            pattern: "(".into(),
            source,
        };
        assert!(error.to_string().starts_with("invalid pattern `(`"));
        assert_eq!(error.code(), "VALIDATOR_INVALID_PATTERN");
        assert!(std::error::Error::source(&error).is_some());
    }
}

//! Core validation types and traits
//!
//! - **Traits**: `Validate`, `ValidateExt`
//! - **Errors**: `ValidationError`, `PatternError`
//!
//! A validator is a named predicate. It answers [`Validate::is_valid`] for an
//! input and describes itself through [`Validate::code`] and
//! [`Validate::message`], so a chain can hand the failing validator itself
//! back to the caller for reporting.
//!
//! ```rust
//! use rowbind_validator::foundation::Validate;
//! use rowbind_validator::validators::less_or_equal;
//!
//! let validator = less_or_equal(100);
//! assert!(validator.is_valid(&100));
//! assert_eq!(validator.message(), "must less than or equal to 100");
//! ```

pub mod error;
pub mod traits;

pub use error::{PatternError, ValidationError};
pub use traits::{BoxedValidator, Validate, ValidateExt};

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

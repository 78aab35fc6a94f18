//! Prelude module for convenient imports.
//!
//! Provides a single `use rowbind_validator::prelude::*;` import that brings
//! in the traits, the chain, every built-in validator, and the combinators.
//!
//! # Examples
//!
//! ```rust
//! use rowbind_validator::prelude::*;
//!
//! let mut chain = ValidatorChain::<Option<String>>::new();
//! chain.push(required());
//! chain.push(email());
//!
//! let code = chain.first_failure(&None).map(|v| v.code().to_owned());
//! assert_eq!(code.as_deref(), Some("required"));
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    BoxedValidator, PatternError, Validate, ValidateExt, ValidationError, ValidationResult,
};

pub use crate::chain::ValidatorChain;

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{Optional, When, WithMessage, optional, when, with_message};

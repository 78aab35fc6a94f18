//! # rowbind-validator
//!
//! Named, composable validators that gate writes to a bound value.
//!
//! ## Quick Start
//!
//! ```rust
//! use rowbind_validator::prelude::*;
//!
//! let mut chain = ValidatorChain::<i64>::new();
//! chain.push(greater_than(0));
//! chain.push(less_or_equal(150));
//!
//! assert!(chain.first_failure(&42).is_none());
//! let failed = chain.first_failure(&-5).unwrap();
//! assert_eq!(failed.message(), "must greater than 0");
//! ```
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.
//!
//! ## Built-in Validators
//!
//! - **Presence**: [`Required`](validators::Required)
//! - **Comparison**: [`GreaterThan`](validators::GreaterThan),
//!   [`GreaterOrEqual`](validators::GreaterOrEqual), [`LessThan`](validators::LessThan),
//!   [`LessOrEqual`](validators::LessOrEqual), [`Compare`](validators::Compare)
//! - **Text**: [`Pattern`](validators::Pattern)
//! - **Custom**: [`Predicate`](validators::Predicate)

// ValidationError is returned by value from every validator.
#![allow(clippy::result_large_err)]

pub mod chain;
pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;

pub use chain::ValidatorChain;
pub use foundation::{PatternError, Validate, ValidateExt, ValidationError};

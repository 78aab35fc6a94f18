//! Built-in validators
//!
//! # Categories
//!
//! - **Presence**: [`Required`] over anything implementing [`Presence`]
//! - **Comparison**: bounds on any `PartialOrd` value, plus [`Compare`]
//! - **Text**: whole-string regex [`Pattern`] with e-mail and phone presets
//! - **Custom**: [`Predicate`] wraps a closure
//!
//! # Examples
//!
//! ```rust
//! use rowbind_validator::prelude::*;
//!
//! let age = greater_than(0);
//! let email = email::<Option<String>>();
//!
//! assert!(age.is_valid(&17));
//! assert!(email.is_valid(&Some("10001@qq.com".into())));
//! ```

pub mod comparison;
pub mod pattern;
pub mod predicate;
pub mod presence;

pub use comparison::{
    Compare, GreaterOrEqual, GreaterThan, LessOrEqual, LessThan, compare, greater_or_equal,
    greater_than, less_or_equal, less_than,
};
pub use pattern::{EMAIL_PATTERN, PHONE_PATTERN, Pattern, TextInput, email, pattern, phone};
pub use predicate::{Predicate, predicate};
pub use presence::{Presence, Required, required};

//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators must implement.

use std::borrow::Cow;

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// A named predicate over a value, carrying a human-readable failure message.
///
/// The predicate ([`is_valid`](Self::is_valid)) is separate from the
/// description ([`code`](Self::code) and [`message`](Self::message)) so a
/// failed validator can be reported without re-running it. The message does
/// not depend on the rejected input.
///
/// # Examples
///
/// ```rust
/// use std::borrow::Cow;
/// use rowbind_validator::foundation::Validate;
///
/// struct Even;
///
/// impl Validate for Even {
///     type Input = i64;
///
///     fn is_valid(&self, input: &i64) -> bool {
///         input % 2 == 0
///     }
///
///     fn code(&self) -> &str {
///         "even"
///     }
///
///     fn message(&self) -> Cow<'_, str> {
///         Cow::Borrowed("must be even")
///     }
/// }
///
/// assert!(Even.validate(&4).is_ok());
/// assert_eq!(Even.validate(&3).unwrap_err().message, "must be even");
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str` and `[T]`.
    type Input: ?Sized;

    /// Returns `true` if the input passes.
    fn is_valid(&self, input: &Self::Input) -> bool;

    /// Stable identifier of this validator, used for lookup and removal.
    fn code(&self) -> &str;

    /// Message reported when the input fails.
    fn message(&self) -> Cow<'_, str>;

    /// Validates the input, producing a structured error on failure.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.is_valid(input) {
            Ok(())
        } else {
            Err(ValidationError::new(
                self.code().to_owned(),
                self.message().into_owned(),
            ))
        }
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn is_valid(&self, input: &Self::Input) -> bool {
        (**self).is_valid(input)
    }

    fn code(&self) -> &str {
        (**self).code()
    }

    fn message(&self) -> Cow<'_, str> {
        (**self).message()
    }

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

/// A type-erased validator, as stored by [`ValidatorChain`](crate::ValidatorChain).
pub type BoxedValidator<T> = Box<dyn Validate<Input = T>>;

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// This trait is automatically implemented for all types that implement
/// `Validate`.
///
/// # Examples
///
/// ```rust
/// use rowbind_validator::prelude::*;
///
/// let adult = greater_or_equal(18).with_message("must be an adult");
/// assert_eq!(adult.validate(&12).unwrap_err().message, "must be an adult");
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Replaces the failure message.
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Only runs the validator if the condition returns `true`.
    ///
    /// If the condition returns `false`, validation passes.
    fn when<C>(self, condition: C) -> When<Self, C>
    where
        C: Fn(&Self::Input) -> bool,
    {
        When::new(self, condition)
    }

    /// Makes a validator optional.
    ///
    /// The validator succeeds if the input is `None` or if validation passes.
    fn optional(self) -> Optional<Self>
    where
        Self::Input: Sized,
    {
        Optional::new(self)
    }

    /// Erases the validator type.
    fn boxed(self) -> BoxedValidator<Self::Input>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<T: Validate> ValidateExt for T {}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================

pub use crate::combinators::message::WithMessage;
pub use crate::combinators::optional::Optional;
pub use crate::combinators::when::When;

// ============================================================================
// TESTS
// ============================================================================

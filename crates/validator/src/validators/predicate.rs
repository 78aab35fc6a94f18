//! Closure-backed validators.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::Validate;

/// Validates with an arbitrary closure and a fixed message.
///
/// ```rust
/// use rowbind_validator::validators::predicate;
/// use rowbind_validator::foundation::Validate;
///
/// let even = predicate(|n: &u32| n % 2 == 0, "must be even");
/// assert!(even.is_valid(&4));
/// assert_eq!(even.validate(&3).unwrap_err().message, "must be even");
/// ```
pub struct Predicate<T: ?Sized, F> {
    check: F,
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    _marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> Predicate<T, F>
where
    F: Fn(&T) -> bool,
{
    pub fn new(check: F, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            check,
            code: Cow::Borrowed("predicate"),
            message: message.into(),
            _marker: PhantomData,
        }
    }

    /// Replaces the default `predicate` code, so the validator can be
    /// removed from a chain by name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = code.into();
        self
    }
}

impl<T: ?Sized, F> fmt::Debug for Predicate<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("code", &self.code)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized, F> Validate for Predicate<T, F>
where
    F: Fn(&T) -> bool,
{
    type Input = T;

    fn is_valid(&self, input: &T) -> bool {
        (self.check)(input)
    }

    fn code(&self) -> &str {
        &self.code
    }

    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.message)
    }
}

/// Creates a [`Predicate`] validator.
pub fn predicate<T: ?Sized, F>(check: F, message: impl Into<Cow<'static, str>>) -> Predicate<T, F>
where
    F: Fn(&T) -> bool,
{
    Predicate::new(check, message)
}

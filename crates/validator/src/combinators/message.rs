//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::Validate;

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the failure message of a validator.
///
/// Useful for providing user-friendly messages on top of stock validators.
///
/// # Examples
///
/// ```rust
/// use rowbind_validator::combinators::WithMessage;
/// use rowbind_validator::foundation::Validate;
/// use rowbind_validator::validators::greater_than;
///
/// let validator = WithMessage::new(greater_than(0), "must be positive");
///
/// let result = validator.validate(&-1);
/// assert_eq!(result.unwrap_err().message, "must be positive");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Cow<'static, str>,
    code: Option<Cow<'static, str>>,
}

impl<V> WithMessage<V> {
    /// Creates a new WithMessage combinator with a custom message.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: message.into(),
            code: None,
        }
    }

    /// Also replaces the code, so the validator can be removed by its new name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn is_valid(&self, input: &Self::Input) -> bool {
        self.inner.is_valid(input)
    }

    fn code(&self) -> &str {
        self.code.as_deref().unwrap_or_else(|| self.inner.code())
    }

    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.message)
    }
}

/// Creates a WithMessage combinator.
pub fn with_message<V>(validator: V, message: impl Into<Cow<'static, str>>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}

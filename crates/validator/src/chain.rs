//! Ordered validator lists
//!
//! A [`ValidatorChain`] evaluates its validators in insertion order and stops
//! at the first one that rejects the input.

use std::fmt;

use crate::foundation::{BoxedValidator, Validate, ValidationResult};

/// An ordered, type-erased list of validators over `T`.
///
/// # Examples
///
/// ```rust
/// use rowbind_validator::prelude::*;
///
/// let chain = ValidatorChain::<i64>::new()
///     .with(greater_than(0))
///     .with(less_than(0));
///
/// // Both reject 0; only the first one is reported.
/// assert_eq!(chain.first_failure(&0).unwrap().code(), "greater_than");
/// ```
pub struct ValidatorChain<T: ?Sized> {
    validators: Vec<BoxedValidator<T>>,
}

impl<T: ?Sized> ValidatorChain<T> {
    /// Creates an empty chain. An empty chain accepts every input.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Appends a validator to the end of the chain.
    pub fn push<V>(&mut self, validator: V)
    where
        V: Validate<Input = T> + 'static,
    {
        self.validators.push(Box::new(validator));
    }

    /// Appends an already boxed validator.
    pub fn push_boxed(&mut self, validator: BoxedValidator<T>) {
        self.validators.push(validator);
    }

    /// Builder form of [`push`](Self::push).
    #[must_use = "builder methods must be chained or built"]
    pub fn with<V>(mut self, validator: V) -> Self
    where
        V: Validate<Input = T> + 'static,
    {
        self.push(validator);
        self
    }

    /// Removes every validator whose code equals `code`.
    ///
    /// Returns `true` if anything was removed.
    pub fn remove(&mut self, code: &str) -> bool {
        let before = self.validators.len();
        self.validators.retain(|v| v.code() != code);
        self.validators.len() != before
    }

    /// Whether a validator with this code is present.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.validators.iter().any(|v| v.code() == code)
    }

    pub fn clear(&mut self) {
        self.validators.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Iterates the validators in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Validate<Input = T>> {
        self.validators.iter().map(|v| &**v)
    }

    /// Returns the first validator that rejects `input`, if any.
    #[must_use]
    pub fn first_failure(&self, input: &T) -> Option<&dyn Validate<Input = T>> {
        self.iter().find(|v| !v.is_valid(input))
    }

    /// Runs the chain, converting the first failure into a [`ValidationError`].
    ///
    /// # Errors
    ///
    /// Returns the failing validator's error.
    ///
    /// [`ValidationError`]: crate::ValidationError
    pub fn validate(&self, input: &T) -> ValidationResult<()> {
        self.validators.iter().try_for_each(|v| v.validate(input))
    }

    #[must_use]
    pub fn is_valid(&self, input: &T) -> bool {
        self.first_failure(input).is_none()
    }
}

impl<T: ?Sized> Default for ValidatorChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for ValidatorChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.validators.iter().map(|v| v.code().to_owned()))
            .finish()
    }
}

impl<T: ?Sized, V> Extend<V> for ValidatorChain<T>
where
    V: Validate<Input = T> + 'static,
{
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for validator in iter {
            self.push(validator);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidateExt;
    use crate::validators::{greater_than, less_or_equal, predicate, required};

    #[test]
    fn empty_chain_accepts() {
        let chain = ValidatorChain::<i64>::new();
        assert!(chain.first_failure(&-1).is_none());
        assert!(chain.validate(&-1).is_ok());
        assert!(chain.is_empty());
    }

    #[test]
    fn stops_at_first_failure() {
        let chain = ValidatorChain::<i64>::new()
            .with(greater_than(0))
            .with(predicate(|_: &i64| false, "never"));

        let failed = chain.first_failure(&-3).unwrap();
        assert_eq!(failed.message(), "must greater than 0");

        let failed = chain.first_failure(&3).unwrap();
        assert_eq!(failed.message(), "never");
    }

    #[test]
    fn validate_reports_first_error() {
        let chain = ValidatorChain::<i64>::new()
            .with(greater_than(0))
            .with(less_or_equal(10));
        let error = chain.validate(&11).unwrap_err();
        assert_eq!(error.code, "less_or_equal");
        assert_eq!(error.message, "must less than or equal to 10");
    }

    #[test]
    fn remove_by_code() {
        let mut chain = ValidatorChain::<i64>::new();
        chain.push(greater_than(0));
        chain.push(greater_than(5));
        chain.push(less_or_equal(10));

        assert!(chain.remove("greater_than"));
        assert_eq!(chain.len(), 1);
        assert!(!chain.remove("greater_than"));
        assert!(chain.contains("less_or_equal"));
    }

    #[test]
    fn custom_message_code_is_removable() {
        let mut chain = ValidatorChain::<String>::new();
        chain.push(
            required::<String>()
                .with_message("Name is missing")
                .with_code("name_required"),
        );
        assert_eq!(format!("{chain:?}"), r#"["name_required"]"#);
        assert!(chain.remove("name_required"));
    }

    #[test]
    fn unsized_inputs() {
        let mut chain = ValidatorChain::<str>::new();
        chain.push(required::<str>());
        assert!(chain.is_valid("x"));
        assert!(!chain.is_valid(""));
    }
}

//! WHEN combinator - conditional validation
//!
//! The validator only runs if the condition returns `true`; otherwise the
//! input passes.

use std::borrow::Cow;

use crate::foundation::Validate;

/// Conditionally applies a validator based on a predicate.
///
/// # Examples
///
/// ```rust
/// use rowbind_validator::combinators::When;
/// use rowbind_validator::foundation::Validate;
/// use rowbind_validator::validators::greater_than;
///
/// // Only non-zero quantities must exceed the minimum order.
/// let validator = When::new(greater_than(5), |n: &i32| *n != 0);
/// assert!(validator.is_valid(&0)); // skipped
/// assert!(!validator.is_valid(&3)); // checked, fails
/// assert!(validator.is_valid(&8)); // checked, passes
/// ```
#[derive(Debug, Clone, Copy)]
pub struct When<V, C> {
    pub(crate) validator: V,
    pub(crate) condition: C,
}

impl<V, C> When<V, C> {
    /// Creates a new `When` combinator.
    pub fn new(validator: V, condition: C) -> Self {
        Self {
            validator,
            condition,
        }
    }

    /// Returns a reference to the inner validator.
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.validator
    }
}

impl<V, C> Validate for When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    type Input = V::Input;

    fn is_valid(&self, input: &Self::Input) -> bool {
        !(self.condition)(input) || self.validator.is_valid(input)
    }

    fn code(&self) -> &str {
        self.validator.code()
    }

    fn message(&self) -> Cow<'_, str> {
        self.validator.message()
    }
}

/// Creates a `When` combinator.
pub fn when<V, C>(validator: V, condition: C) -> When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    When::new(validator, condition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::required;

    #[test]
    fn skipped_when_condition_false() {
        let validator = when(required::<String>(), |s: &String| s.starts_with('#'));
        assert!(validator.is_valid(&String::new()));
        assert!(validator.is_valid(&"plain".to_string()));
    }

    #[test]
    fn reports_inner_message() {
        let validator = when(required::<String>(), |_: &String| true);
        assert!(!validator.is_valid(&String::new()));
        assert_eq!(validator.message(), "is required");
        assert_eq!(validator.code(), "required");
    }
}

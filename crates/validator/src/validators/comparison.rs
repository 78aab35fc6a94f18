//! Comparison validators
//!
//! Comparisons use the natural `PartialOrd` ordering of the input type.

use std::borrow::Cow;
use std::fmt::{self, Display};

use crate::foundation::{Validate, ValidationError};

crate::validator! {
    /// Validates that a value is strictly greater than a bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use rowbind_validator::validators::greater_than;
    /// use rowbind_validator::foundation::Validate;
    ///
    /// let validator = greater_than(5);
    /// assert!(validator.is_valid(&6));
    /// assert!(!validator.is_valid(&5)); // Not strictly greater
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub GreaterThan<T: PartialOrd + Display> { bound: T } for T;
    code = "greater_than";
    rule(self, input) { *input > self.bound }
    message(self) { format!("must greater than {}", self.bound) }
    fn greater_than(bound: T);
}

crate::validator! {
    /// Validates that a value is at least a bound.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub GreaterOrEqual<T: PartialOrd + Display> { bound: T } for T;
    code = "greater_or_equal";
    rule(self, input) { *input >= self.bound }
    message(self) { format!("must greater than or equal to {}", self.bound) }
    fn greater_or_equal(bound: T);
}

crate::validator! {
    /// Validates that a value is strictly less than a bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use rowbind_validator::validators::less_than;
    /// use rowbind_validator::foundation::Validate;
    ///
    /// let validator = less_than(10);
    /// assert!(validator.is_valid(&9));
    /// assert!(!validator.is_valid(&10)); // Not strictly less
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub LessThan<T: PartialOrd + Display> { bound: T } for T;
    code = "less_than";
    rule(self, input) { *input < self.bound }
    message(self) { format!("must less than {}", self.bound) }
    fn less_than(bound: T);
}

crate::validator! {
    /// Validates that a value does not exceed a bound.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub LessOrEqual<T: PartialOrd + Display> { bound: T } for T;
    code = "less_or_equal";
    rule(self, input) { *input <= self.bound }
    message(self) { format!("must less than or equal to {}", self.bound) }
    fn less_or_equal(bound: T);
}

// ============================================================================
// COMPARE
// ============================================================================

/// Compares the input against a reference value with an arbitrary comparer.
///
/// The comparer receives `(input, reference)` and returns `true` when the
/// input passes.
///
/// ```
/// use rowbind_validator::validators::compare;
/// use rowbind_validator::foundation::Validate;
///
/// let not_after = compare(2030, |year: &i32, limit: &i32| year <= limit, "too far ahead");
/// assert!(not_after.is_valid(&2029));
/// assert!(!not_after.is_valid(&2031));
/// assert_eq!(not_after.validate(&2031).unwrap_err().param("value"), Some("2030"));
/// ```
pub struct Compare<T, F> {
    value: T,
    comparer: F,
    message: Cow<'static, str>,
}

impl<T, F> Compare<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub fn new(value: T, comparer: F, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            value,
            comparer,
            message: message.into(),
        }
    }

    /// The reference value the input is compared against.
    pub const fn value(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Compare<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compare")
            .field("value", &self.value)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl<T, F> Validate for Compare<T, F>
where
    T: Display,
    F: Fn(&T, &T) -> bool,
{
    type Input = T;

    fn is_valid(&self, input: &T) -> bool {
        (self.comparer)(input, &self.value)
    }

    fn code(&self) -> &str {
        "compare"
    }

    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.message)
    }

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        if self.is_valid(input) {
            Ok(())
        } else {
            Err(ValidationError::new("compare", self.message.clone())
                .with_param("value", self.value.to_string()))
        }
    }
}

/// Creates a [`Compare`] validator.
pub fn compare<T, F>(value: T, comparer: F, message: impl Into<Cow<'static, str>>) -> Compare<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    Compare::new(value, comparer, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, true)]
    #[case(0, false)]
    #[case(-5, false)]
    fn greater_than_zero(#[case] input: i64, #[case] expected: bool) {
        assert_eq!(greater_than(0).is_valid(&input), expected);
    }

    #[rstest]
    #[case(0, true)]
    #[case(-1, false)]
    fn greater_or_equal_zero(#[case] input: i64, #[case] expected: bool) {
        assert_eq!(greater_or_equal(0).is_valid(&input), expected);
    }

    #[rstest]
    #[case(9, true)]
    #[case(10, false)]
    fn less_than_ten(#[case] input: i64, #[case] expected: bool) {
        assert_eq!(less_than(10).is_valid(&input), expected);
    }

    #[rstest]
    #[case(10, true)]
    #[case(11, false)]
    fn less_or_equal_ten(#[case] input: i64, #[case] expected: bool) {
        assert_eq!(less_or_equal(10).is_valid(&input), expected);
    }

    #[test]
    fn messages_name_the_bound() {
        assert_eq!(greater_than(0).message(), "must greater than 0");
        assert_eq!(greater_or_equal(1).message(), "must greater than or equal to 1");
        assert_eq!(less_than(2).message(), "must less than 2");
        assert_eq!(less_or_equal(3).message(), "must less than or equal to 3");
    }

    #[test]
    fn floats_use_partial_order() {
        let validator = greater_than(0.0_f64);
        assert!(validator.is_valid(&0.001));
        assert!(!validator.is_valid(&0.0));
        assert!(!validator.is_valid(&f64::NAN));
    }

    #[test]
    fn strings_compare_lexically() {
        let validator = less_than("m".to_string());
        assert!(validator.is_valid(&"apple".to_string()));
        assert!(!validator.is_valid(&"zebra".to_string()));
    }

    #[test]
    fn compare_uses_comparer() {
        let validator = compare(3, |input: &i32, other: &i32| input % other == 0, "not divisible");
        assert!(validator.is_valid(&9));
        assert!(!validator.is_valid(&10));
        assert_eq!(validator.value(), &3);
        assert_eq!(validator.code(), "compare");
    }
}

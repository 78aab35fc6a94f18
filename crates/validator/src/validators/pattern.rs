//! Regular-expression validation
//!
//! [`Pattern`] matches the *whole* input against a regex. Missing text
//! (`None`) never matches.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{PatternError, Validate, ValidationError};

/// Loose e-mail address shape.
pub const EMAIL_PATTERN: &str = r"[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,4}";

/// Mainland China mobile number.
pub const PHONE_PATTERN: &str =
    r"^((13[0-9])|(14[5,7,9])|(15[^4,\D])|(18[0,0-9])|(17[0,1,3,5,6,7,8]))\d{8}$";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| anchored(EMAIL_PATTERN).unwrap());
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| anchored(PHONE_PATTERN).unwrap());

fn anchored(source: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{source})$"))
}

// ============================================================================
// TEXT INPUT
// ============================================================================

/// Input that may carry text for pattern matching.
pub trait TextInput {
    /// The text to match, or `None` when absent.
    fn text(&self) -> Option<&str>;
}

impl TextInput for str {
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl TextInput for String {
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T: TextInput> TextInput for Option<T> {
    fn text(&self) -> Option<&str> {
        self.as_ref().and_then(TextInput::text)
    }
}

// ============================================================================
// PATTERN
// ============================================================================

/// Validates that text matches a regular expression in full.
///
/// # Examples
///
/// ```rust
/// use rowbind_validator::validators::Pattern;
/// use rowbind_validator::foundation::Validate;
///
/// let zip = Pattern::<Option<String>>::new(r"\d{5}").unwrap();
/// assert!(zip.is_valid(&Some("12345".into())));
/// assert!(!zip.is_valid(&Some("123456".into())));
/// assert!(!zip.is_valid(&None));
/// ```
pub struct Pattern<T: ?Sized> {
    source: String,
    regex: Regex,
    _marker: PhantomData<fn(&T)>,
}

impl<T: TextInput + ?Sized> Pattern<T> {
    /// Compiles `pattern`, anchored at both ends.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidPattern`] if the expression does not
    /// compile.
    pub fn new(pattern: impl Into<String>) -> Result<Self, PatternError> {
        let source = pattern.into();
        let regex = anchored(&source).map_err(|e| PatternError::InvalidPattern {
            pattern: source.clone(),
            source: e,
        })?;
        Ok(Self {
            source,
            regex,
            _marker: PhantomData,
        })
    }

    /// The expression as written by the caller, without anchors.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl<T: ?Sized> Clone for Pattern<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            regex: self.regex.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized> fmt::Debug for Pattern<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl<T: TextInput + ?Sized> Validate for Pattern<T> {
    type Input = T;

    fn is_valid(&self, input: &T) -> bool {
        input.text().is_some_and(|text| self.regex.is_match(text))
    }

    fn code(&self) -> &str {
        "pattern"
    }

    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed("incorrect format")
    }

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        if self.is_valid(input) {
            Ok(())
        } else {
            Err(ValidationError::new("pattern", "incorrect format")
                .with_param("pattern", self.source.clone()))
        }
    }
}

/// Compiles a [`Pattern`] validator.
///
/// # Errors
///
/// Returns [`PatternError`] if the expression does not compile.
pub fn pattern<T: TextInput + ?Sized>(
    pattern: impl Into<String>,
) -> Result<Pattern<T>, PatternError> {
    Pattern::new(pattern)
}

/// Validates an e-mail address with [`EMAIL_PATTERN`].
#[must_use]
pub fn email<T: TextInput + ?Sized>() -> Pattern<T> {
    preset(EMAIL_PATTERN, &EMAIL_REGEX)
}

/// Validates a mobile phone number with [`PHONE_PATTERN`].
#[must_use]
pub fn phone<T: TextInput + ?Sized>() -> Pattern<T> {
    preset(PHONE_PATTERN, &PHONE_REGEX)
}

fn preset<T: TextInput + ?Sized>(source: &str, regex: &Regex) -> Pattern<T> {
    Pattern {
        source: source.to_owned(),
        regex: regex.clone(),
        _marker: PhantomData,
    }
}

//! Bidirectional mappings between raw and display values.
//!
//! `convert` is total: every raw value has a display form. `convert_back` is
//! partial and is the only place a conversion can fail.

use std::borrow::Cow;
use std::fmt;

use crate::describe::{self, Describe};
use crate::selection::Selection;

/// Maps a raw value `U` to a display value `V` and back.
pub trait Converter<U, V> {
    fn convert(&self, value: &U) -> V;

    /// Returns `None` when `value` has no raw counterpart.
    fn convert_back(&self, value: &V) -> Option<U>;
}

impl<U, V, C: Converter<U, V> + ?Sized> Converter<U, V> for Box<C> {
    fn convert(&self, value: &U) -> V {
        (**self).convert(value)
    }

    fn convert_back(&self, value: &V) -> Option<U> {
        (**self).convert_back(value)
    }
}

// ============================================================================
// IDENTITY
// ============================================================================

/// The converter of a binding whose display type is its raw type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Identity;

impl<U: Clone> Converter<U, U> for Identity {
    fn convert(&self, value: &U) -> U {
        value.clone()
    }

    fn convert_back(&self, value: &U) -> Option<U> {
        Some(value.clone())
    }
}

// ============================================================================
// INTEGER <-> TEXT
// ============================================================================

/// Converts integers to decimal text and parses them back.
///
/// Implemented for every primitive integer against both `String` and
/// `Option<String>`. Text that is not a number of the target type fails.
///
/// ```rust
/// use rowbind_binding::{Converter, IntStringConverter};
///
/// let c = IntStringConverter;
/// assert_eq!(Converter::<u8, String>::convert(&c, &42), "42");
/// assert_eq!(Converter::<u8, String>::convert_back(&c, &"300".into()), None);
/// assert_eq!(Converter::<i32, Option<String>>::convert_back(&c, &None), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IntStringConverter;

macro_rules! int_string_converter {
    ($($int:ty),* $(,)?) => {
        $(
            impl Converter<$int, String> for IntStringConverter {
                fn convert(&self, value: &$int) -> String {
                    value.to_string()
                }

                fn convert_back(&self, value: &String) -> Option<$int> {
                    value.parse().ok()
                }
            }

            impl Converter<$int, Option<String>> for IntStringConverter {
                fn convert(&self, value: &$int) -> Option<String> {
                    Some(value.to_string())
                }

                fn convert_back(&self, value: &Option<String>) -> Option<$int> {
                    value.as_deref()?.parse().ok()
                }
            }
        )*
    };
}

int_string_converter!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// ============================================================================
// JOIN
// ============================================================================

/// Renders a selection as one line of text.
///
/// The joined text cannot be parsed back, so `convert_back` always fails;
/// multi-value rows are edited through their selection operations instead.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct JoinConverter {
    separator: Cow<'static, str>,
}

impl JoinConverter {
    pub fn new(separator: impl Into<Cow<'static, str>>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl Default for JoinConverter {
    fn default() -> Self {
        Self::new(", ")
    }
}

impl fmt::Debug for JoinConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("JoinConverter").field(&self.separator).finish()
    }
}

impl<S> Converter<S, String> for JoinConverter
where
    S: Selection,
    S::Element: Describe,
{
    fn convert(&self, value: &S) -> String {
        describe::join(value.iter(), &self.separator)
    }

    fn convert_back(&self, _value: &String) -> Option<S> {
        None
    }
}

// ============================================================================
// CLOSURES
// ============================================================================

/// A converter built from a pair of closures.
///
/// ```rust
/// use rowbind_binding::{Converter, FnConverter};
///
/// let percent = FnConverter::new(
///     |ratio: &f64| ratio * 100.0,
///     |percent: &f64| (0.0..=100.0).contains(percent).then(|| percent / 100.0),
/// );
/// assert_eq!(percent.convert(&0.25), 25.0);
/// assert_eq!(percent.convert_back(&150.0), None);
/// ```
#[derive(Clone, Copy)]
pub struct FnConverter<F, B> {
    forward: F,
    back: B,
}

impl<F, B> FnConverter<F, B> {
    pub const fn new(forward: F, back: B) -> Self {
        Self { forward, back }
    }
}

impl<F, B> fmt::Debug for FnConverter<F, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnConverter").finish_non_exhaustive()
    }
}

impl<U, V, F, B> Converter<U, V> for FnConverter<F, B>
where
    F: Fn(&U) -> V,
    B: Fn(&V) -> Option<U>,
{
    fn convert(&self, value: &U) -> V {
        (self.forward)(value)
    }

    fn convert_back(&self, value: &V) -> Option<U> {
        (self.back)(value)
    }
}

//! Human-readable string forms of display values.
//!
//! [`Describe`] is what a row shows when no formatter is set. Missing values
//! describe as the empty string and collections join their elements with
//! `", "`.

use std::collections::{BTreeSet, HashSet};

use indexmap::IndexSet;

/// Renders a value as row text.
pub trait Describe {
    fn describe(&self) -> String;
}

/// Implements [`Describe`] through `Display` for the listed types.
///
/// ```rust
/// use std::fmt;
/// use rowbind_binding::{Describe, describe_via_display};
///
/// struct Celsius(f32);
///
/// impl fmt::Display for Celsius {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}°C", self.0)
///     }
/// }
///
/// describe_via_display!(Celsius);
///
/// assert_eq!(Celsius(21.5).describe(), "21.5°C");
/// ```
#[macro_export]
macro_rules! describe_via_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Describe for $ty {
                fn describe(&self) -> ::std::string::String {
                    ::std::string::ToString::to_string(self)
                }
            }
        )+
    };
}

describe_via_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String,
);

impl<T: Describe + ?Sized> Describe for &T {
    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: Describe> Describe for Option<T> {
    fn describe(&self) -> String {
        self.as_ref().map(Describe::describe).unwrap_or_default()
    }
}

/// Joins the descriptions of `items` with `separator`.
pub fn join<'a, T, I>(items: I, separator: &str) -> String
where
    T: Describe + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(Describe::describe)
        .collect::<Vec<_>>()
        .join(separator)
}

impl<T: Describe> Describe for [T] {
    fn describe(&self) -> String {
        join(self, ", ")
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn describe(&self) -> String {
        join(self, ", ")
    }
}

impl<T: Describe> Describe for BTreeSet<T> {
    fn describe(&self) -> String {
        join(self, ", ")
    }
}

impl<T: Describe, S> Describe for HashSet<T, S> {
    fn describe(&self) -> String {
        join(self, ", ")
    }
}

impl<T: Describe, S> Describe for IndexSet<T, S> {
    fn describe(&self) -> String {
        join(self, ", ")
    }
}

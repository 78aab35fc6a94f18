//! Presence validation
//!
//! [`Required`] fails when the input is "not present": `None`, an empty
//! string, or an empty collection. What counts as present is decided by the
//! [`Presence`] trait.
//!
//! ```rust
//! use rowbind_validator::validators::required;
//! use rowbind_validator::foundation::Validate;
//!
//! let name = required::<Option<String>>();
//! assert!(name.is_valid(&Some("Ada".to_string())));
//! assert!(!name.is_valid(&Some(String::new())));
//! assert!(!name.is_valid(&None));
//! ```

use std::borrow::Cow;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexSet;

use crate::foundation::Validate;

// ============================================================================
// PRESENCE
// ============================================================================

/// Whether a value counts as supplied.
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl Presence for str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Presence::is_present)
    }
}

impl<T> Presence for [T] {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Presence for BTreeSet<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T, S> Presence for HashSet<T, S> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T, S> Presence for IndexSet<T, S> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

macro_rules! always_present {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Presence for $ty {
                fn is_present(&self) -> bool {
                    true
                }
            }
        )*
    };
}

always_present!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

// ============================================================================
// REQUIRED
// ============================================================================

/// Validates that a value is present.
pub struct Required<T: ?Sized> {
    _marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized> Required<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized> Default for Required<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for Required<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Required<T> {}

impl<T: ?Sized> PartialEq for Required<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T: ?Sized> Eq for Required<T> {}

impl<T: ?Sized> fmt::Debug for Required<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Required")
    }
}

impl<T: Presence + ?Sized> Validate for Required<T> {
    type Input = T;

    fn is_valid(&self, input: &T) -> bool {
        input.is_present()
    }

    fn code(&self) -> &str {
        "required"
    }

    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed("is required")
    }
}

/// Creates a [`Required`] validator for `T`.
#[must_use]
pub const fn required<T: Presence + ?Sized>() -> Required<T> {
    Required::new()
}

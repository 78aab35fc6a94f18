//! Collections usable as the raw value of a multi-value row, and the bounds
//! on how many elements may be selected.

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::BindingError;

// ============================================================================
// SELECTION
// ============================================================================

/// A set-like collection of selected options.
///
/// `insert` of an element that is already present is a no-op, so a `Vec`
/// selection never holds duplicates when edited through a binding.
pub trait Selection: Clone + PartialEq {
    type Element: Clone + PartialEq;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, element: &Self::Element) -> bool;

    fn insert(&mut self, element: Self::Element);

    fn remove(&mut self, element: &Self::Element);

    fn iter(&self) -> impl Iterator<Item = &Self::Element>;

    fn from_elements<I: IntoIterator<Item = Self::Element>>(elements: I) -> Self;
}

impl<E: Clone + PartialEq> Selection for Vec<E> {
    type Element = E;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn contains(&self, element: &E) -> bool {
        self.as_slice().contains(element)
    }

    fn insert(&mut self, element: E) {
        if !self.as_slice().contains(&element) {
            self.push(element);
        }
    }

    fn remove(&mut self, element: &E) {
        self.retain(|e| e != element);
    }

    fn iter(&self) -> impl Iterator<Item = &E> {
        self.as_slice().iter()
    }

    fn from_elements<I: IntoIterator<Item = E>>(elements: I) -> Self {
        let mut selection = Self::new();
        for element in elements {
            Selection::insert(&mut selection, element);
        }
        selection
    }
}

impl<E: Clone + Ord> Selection for BTreeSet<E> {
    type Element = E;

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn contains(&self, element: &E) -> bool {
        BTreeSet::contains(self, element)
    }

    fn insert(&mut self, element: E) {
        BTreeSet::insert(self, element);
    }

    fn remove(&mut self, element: &E) {
        BTreeSet::remove(self, element);
    }

    fn iter(&self) -> impl Iterator<Item = &E> {
        BTreeSet::iter(self)
    }

    fn from_elements<I: IntoIterator<Item = E>>(elements: I) -> Self {
        elements.into_iter().collect()
    }
}

impl<E, S> Selection for HashSet<E, S>
where
    E: Clone + Eq + Hash,
    S: BuildHasher + Clone + Default,
{
    type Element = E;

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn contains(&self, element: &E) -> bool {
        HashSet::contains(self, element)
    }

    fn insert(&mut self, element: E) {
        HashSet::insert(self, element);
    }

    fn remove(&mut self, element: &E) {
        HashSet::remove(self, element);
    }

    fn iter(&self) -> impl Iterator<Item = &E> {
        HashSet::iter(self)
    }

    fn from_elements<I: IntoIterator<Item = E>>(elements: I) -> Self {
        elements.into_iter().collect()
    }
}

impl<E, S> Selection for IndexSet<E, S>
where
    E: Clone + Eq + Hash,
    S: BuildHasher + Clone + Default,
{
    type Element = E;

    fn len(&self) -> usize {
        IndexSet::len(self)
    }

    fn contains(&self, element: &E) -> bool {
        IndexSet::contains(self, element)
    }

    fn insert(&mut self, element: E) {
        IndexSet::insert(self, element);
    }

    // Keeps the remaining elements in selection order.
    fn remove(&mut self, element: &E) {
        IndexSet::shift_remove(self, element);
    }

    fn iter(&self) -> impl Iterator<Item = &E> {
        IndexSet::iter(self)
    }

    fn from_elements<I: IntoIterator<Item = E>>(elements: I) -> Self {
        elements.into_iter().collect()
    }
}

// ============================================================================
// LIMITS
// ============================================================================

/// How many elements a multi-value row may hold.
///
/// Deserializes from `{"min": 1, "max": 3}`; both fields are optional and a
/// `min` above `max` is rejected.
///
/// ```rust
/// use rowbind_binding::SelectionLimits;
///
/// let limits: SelectionLimits = serde_json::from_str(r#"{"min": 1, "max": 3}"#).unwrap();
/// assert!(limits.allows(3));
/// assert!(!limits.allows(0));
/// assert!(serde_json::from_str::<SelectionLimits>(r#"{"min": 4, "max": 3}"#).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLimits")]
pub struct SelectionLimits {
    min: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<usize>,
}

#[derive(Deserialize)]
struct RawLimits {
    #[serde(default)]
    min: usize,
    #[serde(default)]
    max: Option<usize>,
}

impl TryFrom<RawLimits> for SelectionLimits {
    type Error = BindingError;

    fn try_from(raw: RawLimits) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl SelectionLimits {
    /// No lower bound and no upper bound.
    pub const UNBOUNDED: Self = Self { min: 0, max: None };

    /// Creates limits, rejecting `min > max`.
    pub fn new(min: usize, max: Option<usize>) -> Result<Self, BindingError> {
        match max {
            Some(max) if min > max => Err(BindingError::InvalidLimits { min, max }),
            _ => Ok(Self { min, max }),
        }
    }

    pub const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    pub const fn at_most(max: usize) -> Self {
        Self { min: 0, max: Some(max) }
    }

    pub const fn min(&self) -> usize {
        self.min
    }

    pub const fn max(&self) -> Option<usize> {
        self.max
    }

    /// Whether a selection of `count` elements is within bounds.
    pub const fn allows(&self, count: usize) -> bool {
        count >= self.min
            && match self.max {
                Some(max) => count <= max,
                None => true,
            }
    }

    /// Whether one more element may be added to `count`.
    pub const fn can_grow(&self, count: usize) -> bool {
        match self.max {
            Some(max) => count < max,
            None => true,
        }
    }

    /// Whether one element may be removed from `count`.
    pub const fn can_shrink(&self, count: usize) -> bool {
        count > self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn vec_insert_is_idempotent() {
        let mut pets = vec!["Cat"];
        Selection::insert(&mut pets, "Cat");
        Selection::insert(&mut pets, "Dog");
        assert_eq!(pets, ["Cat", "Dog"]);
        Selection::remove(&mut pets, &"Cat");
        assert_eq!(pets, ["Dog"]);
    }

    #[test]
    fn index_set_remove_keeps_order() {
        let mut hobbies = IndexSet::<i32>::from_elements([3, 1, 2]);
        Selection::remove(&mut hobbies, &3);
        assert_eq!(hobbies.iter().copied().collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn limits_reject_inverted_bounds() {
        assert_eq!(
            SelectionLimits::new(4, Some(3)),
            Err(BindingError::InvalidLimits { min: 4, max: 3 })
        );
        let limits = SelectionLimits::new(1, Some(3)).unwrap();
        assert!(limits.can_grow(2));
        assert!(!limits.can_grow(3));
        assert!(limits.can_shrink(2));
        assert!(!limits.can_shrink(1));
    }

    #[test]
    fn unbounded_allows_anything() {
        let limits = SelectionLimits::UNBOUNDED;
        assert!(limits.allows(0));
        assert!(limits.can_grow(usize::MAX - 1));
        assert_eq!(limits, SelectionLimits::default());
    }

    #[test]
    fn limits_serde() {
        let limits = SelectionLimits::at_most(2);
        assert_eq!(serde_json::to_string(&limits).unwrap(), r#"{"min":0,"max":2}"#);
        let parsed: SelectionLimits = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, SelectionLimits::UNBOUNDED);
    }
}

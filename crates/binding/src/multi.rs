//! Bindings whose raw value is a selection drawn from a fixed pool.

use std::any::Any;
use std::fmt;
use std::ops::Deref;
use std::rc::Weak;

use rowbind_validator::{Validate, ValidationError};

use crate::binding::Binding;
use crate::describe::Describe;
use crate::error::BindingError;
use crate::host::BindingHost;
use crate::item::{BoundItem, ItemId};
use crate::selection::{Selection, SelectionLimits};
use crate::status::Failable;

/// A [`Binding`] over a [`Selection`] with set operations bounded by
/// [`SelectionLimits`].
///
/// Every mutating operation builds the next selection and hands it to
/// [`Binding::set_value`], so the equality short-circuit, the validator
/// chain and host notifications apply unchanged. Each returns `true` only
/// when that write committed.
///
/// Bounds are enforced before the write: an operation that would leave the
/// selection outside the limits is rejected without consulting validators or
/// touching the status. A caller-supplied initial selection that already
/// violates the limits is left as it is.
///
/// ```rust
/// use std::cell::RefCell;
/// use std::collections::BTreeSet;
/// use std::rc::Rc;
///
/// use rowbind_binding::prelude::*;
///
/// let model = Rc::new(RefCell::new(BTreeSet::from([1, 2])));
/// let binding = Binding::new(Rc::clone(&model), |s: &BTreeSet<i32>| s.clone())
///     .with_setter(|s: &mut BTreeSet<i32>, next| *s = next);
/// let mut hobbies = MultiValueBinding::new(binding, 1..=5)
///     .with_limits(SelectionLimits::new(1, Some(3)).unwrap());
///
/// assert!(hobbies.toggle(&3));
/// assert!(!hobbies.toggle(&4));
/// assert_eq!(*model.borrow(), BTreeSet::from([1, 2, 3]));
/// ```
///
/// The wrapper dereferences to the inner binding for reads only. Writes go
/// through the bounded operations, so the raw setter is out of reach:
///
/// ```compile_fail
/// # use std::cell::RefCell;
/// # use std::collections::BTreeSet;
/// # use std::rc::Rc;
/// # use rowbind_binding::prelude::*;
/// let model = Rc::new(RefCell::new(BTreeSet::from([1])));
/// let binding = Binding::new(Rc::clone(&model), |s: &BTreeSet<i32>| s.clone())
///     .with_setter(|s: &mut BTreeSet<i32>, next| *s = next);
/// let mut hobbies = MultiValueBinding::new(binding, 1..=5);
/// let _ = hobbies.set_value(BTreeSet::new());
/// ```
pub struct MultiValueBinding<T, S: Selection, V = S> {
    binding: Binding<T, S, V>,
    universe: Vec<S::Element>,
    limits: SelectionLimits,
}

impl<T, S: Selection, V> MultiValueBinding<T, S, V> {
    /// Wraps `binding` with the candidate pool `universe` and no limits.
    /// Repeated universe elements are kept once, at their first position.
    pub fn new(
        binding: Binding<T, S, V>,
        universe: impl IntoIterator<Item = S::Element>,
    ) -> Self {
        Self {
            binding,
            universe: distinct(universe),
            limits: SelectionLimits::UNBOUNDED,
        }
    }

    #[must_use]
    pub fn with_limits(mut self, limits: SelectionLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn set_limits(&mut self, limits: SelectionLimits) {
        self.limits = limits;
    }

    pub fn set_universe(&mut self, universe: impl IntoIterator<Item = S::Element>) {
        self.universe = distinct(universe);
    }

    pub fn universe(&self) -> &[S::Element] {
        &self.universe
    }

    pub const fn limits(&self) -> SelectionLimits {
        self.limits
    }

    pub const fn binding(&self) -> &Binding<T, S, V> {
        &self.binding
    }

    pub fn into_inner(self) -> Binding<T, S, V> {
        self.binding
    }

    pub fn is_selected(&self, element: &S::Element) -> bool {
        self.binding.value().contains(element)
    }

    pub fn selected_count(&self) -> usize {
        self.binding.value().len()
    }

    /// Whether the limits leave room for one more element.
    pub fn can_add(&self) -> bool {
        self.limits.can_grow(self.selected_count())
    }

    /// Whether the limits allow dropping one element.
    pub fn can_remove(&self) -> bool {
        self.limits.can_shrink(self.selected_count())
    }

    pub fn add_validator<X>(&mut self, validator: X)
    where
        X: Validate<Input = S> + 'static,
    {
        self.binding.add_validator(validator);
    }

    pub fn remove_validator(&mut self, code: &str) -> bool {
        self.binding.remove_validator(code)
    }

    pub fn set_host(&mut self, host: Weak<dyn BindingHost>) {
        self.binding.set_host(host);
    }

    pub fn clear_host(&mut self) {
        self.binding.clear_host();
    }

    pub fn reset_status(&mut self) {
        self.binding.reset_status();
    }

    fn in_universe(&self, element: &S::Element) -> bool {
        self.universe.contains(element)
    }
}

fn distinct<E: PartialEq>(elements: impl IntoIterator<Item = E>) -> Vec<E> {
    let mut out = Vec::new();
    for element in elements {
        if !out.as_slice().contains(&element) {
            out.push(element);
        }
    }
    out
}

impl<T, S, V> MultiValueBinding<T, S, V>
where
    T: 'static,
    S: Selection + 'static,
    V: Describe + 'static,
{
    /// Removes `element` if selected, adds it otherwise.
    pub fn toggle(&mut self, element: &S::Element) -> bool {
        if self.is_selected(element) {
            self.remove(element)
        } else {
            self.add(element)
        }
    }

    /// Selects `element`. Fails when it is already selected, is not part of
    /// the universe, or the selection is full.
    pub fn add(&mut self, element: &S::Element) -> bool {
        let mut next = self.binding.value();
        if next.contains(element) {
            return self.reject("already selected");
        }
        if !self.in_universe(element) {
            return self.reject("not in universe");
        }
        if !self.limits.can_grow(next.len()) {
            return self.reject("maximum reached");
        }
        next.insert(element.clone());
        self.commit(next)
    }

    /// Deselects `element`. Fails when it is not selected or the selection
    /// is at its minimum.
    pub fn remove(&mut self, element: &S::Element) -> bool {
        let mut next = self.binding.value();
        if !next.contains(element) {
            return self.reject("not selected");
        }
        if !self.limits.can_shrink(next.len()) {
            return self.reject("minimum reached");
        }
        next.remove(element);
        self.commit(next)
    }

    /// Selects the universe in order, truncated to the maximum.
    pub fn select_all(&mut self) -> bool {
        let take = self.limits.max().unwrap_or(usize::MAX);
        let next = S::from_elements(self.universe.iter().take(take).cloned());
        if !self.limits.allows(next.len()) {
            return self.reject("universe smaller than minimum");
        }
        self.commit(next)
    }

    /// Deselects everything. Fails unless the minimum is zero.
    pub fn clear_all(&mut self) -> bool {
        if self.limits.min() > 0 {
            return self.reject("minimum reached");
        }
        self.commit(S::from_elements(std::iter::empty()))
    }

    /// Replaces the whole selection. Fails when `next` is outside the
    /// limits or holds an element that is not part of the universe.
    pub fn set_selection(&mut self, next: S) -> bool {
        if !self.limits.allows(next.len()) {
            return self.reject("outside limits");
        }
        if !next.iter().all(|element| self.in_universe(element)) {
            return self.reject("not in universe");
        }
        self.commit(next)
    }

    fn commit(&mut self, next: S) -> bool {
        self.binding.set_value(next).is_committed()
    }

    fn reject(&self, reason: &'static str) -> bool {
        tracing::trace!(
            item = %self.binding.id(),
            key = self.binding.key(),
            reason,
            "rejected selection change"
        );
        false
    }
}

impl<T, S: Selection, V> Deref for MultiValueBinding<T, S, V> {
    type Target = Binding<T, S, V>;

    fn deref(&self) -> &Self::Target {
        &self.binding
    }
}

impl<T, S: Selection, V: Describe> Failable for MultiValueBinding<T, S, V> {
    fn is_failed(&self) -> bool {
        self.binding.is_failed()
    }

    fn failure_message(&self) -> Option<String> {
        self.binding.failure_message()
    }
}

impl<T, S, V> BoundItem for MultiValueBinding<T, S, V>
where
    T: 'static,
    S: Selection + 'static,
    V: Describe + 'static,
{
    fn id(&self) -> ItemId {
        self.binding.id()
    }

    fn key(&self) -> Option<&str> {
        self.binding.key()
    }

    fn title(&self) -> Option<&str> {
        self.binding.title()
    }

    fn is_required(&self) -> bool {
        self.binding.is_required()
    }

    fn auto_reload(&self) -> bool {
        self.binding.auto_reload()
    }

    fn set_auto_reload(&mut self, auto_reload: bool) {
        self.binding.set_auto_reload(auto_reload);
    }

    fn description(&self) -> Option<String> {
        self.binding.description()
    }

    fn check_current(&self) -> Result<(), ValidationError> {
        BoundItem::check_current(&self.binding)
    }

    fn reset_status(&mut self) {
        Self::reset_status(self);
    }

    fn error(&self) -> Option<BindingError> {
        BoundItem::error(&self.binding)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl<T, S, V> fmt::Debug for MultiValueBinding<T, S, V>
where
    S: Selection + fmt::Debug,
    S::Element: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiValueBinding")
            .field("binding", &self.binding)
            .field("universe", &self.universe)
            .field("limits", &self.limits)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::JoinConverter;
    use pretty_assertions::assert_eq;
    use rowbind_validator::validators::predicate;
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    type Set = BTreeSet<i32>;

    fn hobbies(
        initial: &[i32],
        min: usize,
        max: Option<usize>,
    ) -> (Rc<RefCell<Set>>, MultiValueBinding<Set, Set>) {
        let model = Rc::new(RefCell::new(initial.iter().copied().collect::<Set>()));
        let binding = Binding::new(Rc::clone(&model), Set::clone)
            .with_setter(|s: &mut Set, next| *s = next);
        let multi = MultiValueBinding::new(binding, 1..=5)
            .with_limits(SelectionLimits::new(min, max).unwrap());
        (model, multi)
    }

    #[test]
    fn toggle_respects_max() {
        let (model, mut multi) = hobbies(&[1, 2], 1, Some(3));
        assert!(multi.toggle(&3));
        assert_eq!(*model.borrow(), Set::from([1, 2, 3]));
        assert!(!multi.toggle(&4));
        assert_eq!(*model.borrow(), Set::from([1, 2, 3]));
        assert!(!multi.can_add());
    }

    #[test]
    fn toggle_respects_min() {
        let (model, mut multi) = hobbies(&[2], 1, Some(3));
        assert!(!multi.toggle(&2));
        assert!(!multi.remove(&2));
        assert_eq!(*model.borrow(), Set::from([2]));
        assert!(!multi.can_remove());
    }

    #[test]
    fn add_rejects_duplicates_and_strangers() {
        let (_, mut multi) = hobbies(&[1], 0, None);
        assert!(!multi.add(&1));
        assert!(!multi.add(&9));
        assert!(!multi.toggle(&9));
        assert!(multi.add(&4));
        assert_eq!(multi.selected_count(), 2);
        assert!(multi.is_selected(&4));
    }

    #[test]
    fn remove_rejects_absent() {
        let (_, mut multi) = hobbies(&[1, 2], 0, None);
        assert!(!multi.remove(&5));
        assert!(multi.remove(&1));
        assert!(!multi.is_selected(&1));
    }

    #[test]
    fn select_all_truncates_to_max() {
        let (model, mut multi) = hobbies(&[], 1, Some(3));
        assert!(multi.select_all());
        assert_eq!(*model.borrow(), Set::from([1, 2, 3]));
        assert!(!multi.select_all());
    }

    #[test]
    fn select_all_rejects_universe_below_min() {
        let (model, mut multi) = hobbies(&[1], 2, None);
        multi.set_universe([4]);
        assert!(!multi.select_all());
        assert_eq!(*model.borrow(), Set::from([1]));
        assert!(multi.status().is_normal());
    }

    #[test]
    fn repeated_universe_elements_count_once() {
        let (model, mut multi) = hobbies(&[], 0, Some(3));
        multi.set_universe([1, 1, 2, 3, 4]);
        assert_eq!(multi.universe(), [1, 2, 3, 4]);
        assert!(multi.select_all());
        assert_eq!(*model.borrow(), Set::from([1, 2, 3]));
    }

    #[test]
    fn set_selection_stays_within_limits() {
        let (model, mut multi) = hobbies(&[1, 2], 1, Some(3));
        assert!(!multi.set_selection(Set::new()));
        assert!(!multi.set_selection(Set::from([1, 2, 3, 4])));
        assert!(!multi.set_selection(Set::from([1, 9])));
        assert_eq!(*model.borrow(), Set::from([1, 2]));

        assert!(multi.set_selection(Set::from([3, 5])));
        assert_eq!(*model.borrow(), Set::from([3, 5]));
    }

    #[test]
    fn clear_all_needs_zero_min() {
        let (model, mut multi) = hobbies(&[1, 2], 1, None);
        assert!(!multi.clear_all());
        multi.set_limits(SelectionLimits::UNBOUNDED);
        assert!(multi.clear_all());
        assert!(model.borrow().is_empty());
        assert!(!multi.clear_all());
    }

    #[test]
    fn validators_gate_selection_changes() {
        let (model, mut multi) = hobbies(&[1], 0, None);
        multi.add_validator(predicate(|s: &Set| !s.contains(&3), "cannot include 3"));
        assert!(!multi.add(&3));
        assert_eq!(multi.status().validation_message(), Some("cannot include 3"));
        assert_eq!(*model.borrow(), Set::from([1]));
        assert!(multi.add(&2));
        assert!(multi.status().is_normal());
    }

    #[test]
    fn bound_rejection_leaves_status() {
        let (_, mut multi) = hobbies(&[1], 1, Some(1));
        multi.add_validator(predicate(|s: &Set| s.len() < 5, "too many"));
        assert!(!multi.add(&2));
        assert!(multi.status().is_normal());
    }

    #[test]
    fn initial_violation_is_kept() {
        let (model, multi) = hobbies(&[1, 2, 3, 4], 0, Some(2));
        assert_eq!(multi.selected_count(), 4);
        assert_eq!(model.borrow().len(), 4);
    }

    #[test]
    fn joined_description() {
        let model = Rc::new(RefCell::new(vec!["Cat".to_string()]));
        let binding = Binding::new(Rc::clone(&model), |pets: &Vec<String>| pets.clone())
            .with_setter(|pets: &mut Vec<String>, next| *pets = next)
            .with_converter(JoinConverter::default());
        let pets = ["Cat", "Dog", "Fish"].map(String::from);
        let mut pets = MultiValueBinding::new(binding, pets);
        assert!(pets.add(&"Dog".to_string()));
        assert_eq!(pets.display_value(), "Cat, Dog");
        assert_eq!(pets.description().as_deref(), Some("Cat, Dog"));
    }
}

//! Two-way link between a model property and its presented form.
//!
//! A [`Binding`] reads a raw value `U` out of a shared model `T` with a
//! getter, presents it as a display value `V` through a [`Converter`], and
//! writes edits back with a setter after they pass conversion and
//! validation.
//!
//! # Write protocol
//!
//! Every call to [`set_value`](Binding::set_value) or
//! [`set_display_value`](Binding::set_display_value) ends in exactly one
//! [`Outcome`]:
//!
//! 1. no setter: [`Outcome::ReadOnly`], nothing else happens;
//! 2. display value does not convert back: status `ConvertFailed`, the
//!    convert-failed hook fires, validators never run;
//! 3. raw value equals the current one: status `Normal`, no notifications;
//! 4. a validator rejects the raw value: status `ValidateFailed`, the
//!    validate-failed hook fires;
//! 5. otherwise the write commits: status `Normal`, host will-change, item
//!    will-change, setter, host reload (auto-reloading items only), item
//!    did-change, host did-change.
//!
//! The model is untouched on every path but the last.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use rowbind_binding::prelude::*;
//!
//! struct Person {
//!     age: i64,
//! }
//!
//! let person = Rc::new(RefCell::new(Person { age: 17 }));
//! let mut age = Binding::new(Rc::clone(&person), |p: &Person| p.age)
//!     .with_setter(|p: &mut Person, age| p.age = age)
//!     .with_title("Age")
//!     .with_validator(greater_than(0))
//!     .with_converter(IntStringConverter);
//!
//! assert_eq!(age.display_value(), "17");
//! assert_eq!(age.set_display_value("25".to_string()), Outcome::Committed);
//! assert_eq!(person.borrow().age, 25);
//!
//! assert_eq!(age.set_display_value("-5".to_string()), Outcome::ValidateFailed);
//! assert_eq!(age.failure_message().as_deref(), Some("Age must greater than 0"));
//! ```

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use rowbind_validator::{Validate, ValidationError, ValidatorChain};

use crate::converter::{Converter, Identity};
use crate::describe::Describe;
use crate::error::BindingError;
use crate::host::{BindingHost, HostHandle};
use crate::item::{BoundItem, ItemId};
use crate::status::{self, Failable, Status};

/// Result of a single write attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "a write may be rejected; check the outcome or the binding's status"]
pub enum Outcome {
    /// The binding has no setter. The write was discarded.
    ReadOnly,
    /// The value equals the current one. Nothing was written.
    Unchanged,
    /// The display value did not convert back to the raw type.
    ConvertFailed,
    /// A validator rejected the raw value.
    ValidateFailed,
    /// The setter ran and the host was notified.
    Committed,
}

impl Outcome {
    pub const fn is_committed(self) -> bool {
        matches!(self, Self::Committed)
    }

    /// Whether the write left the binding in a failed status.
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::ConvertFailed | Self::ValidateFailed)
    }
}

type Hook = Box<dyn Fn(&dyn BoundItem)>;

/// A two-way binding from model `T` through raw value `U` to display value `V`.
///
/// # Panics
///
/// Reads borrow the model immutably and a committed write borrows it
/// mutably for the duration of the setter. As with any `RefCell`, doing so
/// while the caller holds a conflicting borrow of the model panics.
pub struct Binding<T, U, V = U> {
    id: ItemId,
    model: Rc<RefCell<T>>,
    getter: Box<dyn Fn(&T) -> U>,
    setter: Option<Box<dyn Fn(&mut T, U)>>,
    converter: Box<dyn Converter<U, V>>,
    formatter: Option<Box<dyn Fn(&V) -> Option<String>>>,
    validators: ValidatorChain<U>,
    status: Status<V>,
    title: Option<String>,
    key: Option<String>,
    is_required: bool,
    auto_reload: bool,
    host: HostHandle,
    will_change: Option<Hook>,
    did_change: Option<Hook>,
    convert_failed: Option<Box<dyn Fn(&V)>>,
    validate_failed: Option<Box<dyn Fn(&dyn Validate<Input = U>)>>,
}

impl<T, U> Binding<T, U, U>
where
    U: Clone + 'static,
{
    /// Creates a read-only binding whose display value is its raw value.
    pub fn new(model: Rc<RefCell<T>>, getter: impl Fn(&T) -> U + 'static) -> Self {
        Self {
            id: ItemId::next(),
            model,
            getter: Box::new(getter),
            setter: None,
            converter: Box::new(Identity),
            formatter: None,
            validators: ValidatorChain::new(),
            status: Status::Normal,
            title: None,
            key: None,
            is_required: false,
            auto_reload: false,
            host: HostHandle::default(),
            will_change: None,
            did_change: None,
            convert_failed: None,
            validate_failed: None,
        }
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

impl<T, U, V> Binding<T, U, V> {
    /// Replaces the converter, changing the display type.
    ///
    /// The formatter and the convert-failed hook are typed on the old display
    /// type and are dropped. Status resets to `Normal`.
    pub fn with_converter<W>(self, converter: impl Converter<U, W> + 'static) -> Binding<T, U, W> {
        Binding {
            id: self.id,
            model: self.model,
            getter: self.getter,
            setter: self.setter,
            converter: Box::new(converter),
            formatter: None,
            validators: self.validators,
            status: Status::Normal,
            title: self.title,
            key: self.key,
            is_required: self.is_required,
            auto_reload: self.auto_reload,
            host: self.host,
            will_change: self.will_change,
            did_change: self.did_change,
            convert_failed: None,
            validate_failed: self.validate_failed,
        }
    }

    /// Makes the binding writable.
    pub fn with_setter(mut self, setter: impl Fn(&mut T, U) + 'static) -> Self {
        self.setter = Some(Box::new(setter));
        self
    }

    /// Overrides how display values are described.
    pub fn with_formatter(mut self, formatter: impl Fn(&V) -> Option<String> + 'static) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_required(mut self, is_required: bool) -> Self {
        self.is_required = is_required;
        self
    }

    pub fn with_auto_reload(mut self, auto_reload: bool) -> Self {
        self.auto_reload = auto_reload;
        self
    }

    /// Attaches a host. The binding keeps only a weak reference.
    pub fn with_host<H: BindingHost + 'static>(mut self, host: &Rc<H>) -> Self {
        let host: Weak<H> = Rc::downgrade(host);
        self.set_host(host);
        self
    }

    pub fn set_host(&mut self, host: Weak<dyn BindingHost>) {
        self.host.set(host);
    }

    pub fn clear_host(&mut self) {
        self.host.clear();
    }

    pub fn with_validator<X>(mut self, validator: X) -> Self
    where
        X: Validate<Input = U> + 'static,
    {
        self.validators.push(validator);
        self
    }

    pub fn add_validator<X>(&mut self, validator: X)
    where
        X: Validate<Input = U> + 'static,
    {
        self.validators.push(validator);
    }

    /// Removes every validator with this code. Returns `true` if any was removed.
    pub fn remove_validator(&mut self, code: &str) -> bool {
        self.validators.remove(code)
    }

    pub fn validators(&self) -> &ValidatorChain<U> {
        &self.validators
    }

    pub fn validators_mut(&mut self) -> &mut ValidatorChain<U> {
        &mut self.validators
    }

    /// Called before a committed write, after the host.
    pub fn on_will_change(mut self, hook: impl Fn(&dyn BoundItem) + 'static) -> Self {
        self.will_change = Some(Box::new(hook));
        self
    }

    /// Called after a committed write, before the host.
    pub fn on_did_change(mut self, hook: impl Fn(&dyn BoundItem) + 'static) -> Self {
        self.did_change = Some(Box::new(hook));
        self
    }

    /// Called with the rejected display value when conversion fails.
    pub fn on_convert_failed(mut self, hook: impl Fn(&V) + 'static) -> Self {
        self.convert_failed = Some(Box::new(hook));
        self
    }

    /// Called with the rejecting validator when validation fails.
    pub fn on_validate_failed(mut self, hook: impl Fn(&dyn Validate<Input = U>) + 'static) -> Self {
        self.validate_failed = Some(Box::new(hook));
        self
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub const fn id(&self) -> ItemId {
        self.id
    }

    pub const fn model(&self) -> &Rc<RefCell<T>> {
        &self.model
    }

    pub const fn status(&self) -> &Status<V> {
        &self.status
    }

    pub fn reset_status(&mut self) {
        self.status = Status::Normal;
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub const fn is_required(&self) -> bool {
        self.is_required
    }

    pub const fn auto_reload(&self) -> bool {
        self.auto_reload
    }

    pub fn set_auto_reload(&mut self, auto_reload: bool) {
        self.auto_reload = auto_reload;
    }

    pub const fn is_read_only(&self) -> bool {
        self.setter.is_none()
    }

    pub fn has_host(&self) -> bool {
        self.host.is_attached()
    }

    // ------------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------------

    /// The current raw value.
    pub fn value(&self) -> U {
        (self.getter)(&*self.model.borrow())
    }

    /// The current value in display form.
    pub fn display_value(&self) -> V {
        self.display_of(&self.value())
    }

    /// Converts a candidate raw value to display form.
    pub fn display_of(&self, value: &U) -> V {
        self.converter.convert(value)
    }

    /// Builds `"{title} {message}"` for a validator of this binding.
    pub fn validation_message(&self, validator: &dyn Validate<Input = U>) -> String {
        status::titled(self.title(), &validator.message())
    }
}

impl<T, U, V: Describe> Binding<T, U, V> {
    /// Row text for the current value.
    pub fn description(&self) -> Option<String> {
        self.description_of_display(&self.display_value())
    }

    /// Row text for a candidate raw value, as used by option lists.
    pub fn description_of(&self, value: &U) -> Option<String> {
        self.description_of_display(&self.display_of(value))
    }

    /// Row text for a display value: the formatter if set, else
    /// [`Describe`].
    pub fn description_of_display(&self, value: &V) -> Option<String> {
        match &self.formatter {
            Some(formatter) => formatter(value),
            None => Some(value.describe()),
        }
    }
}

// ============================================================================
// WRITES
// ============================================================================

impl<T, U, V> Binding<T, U, V>
where
    T: 'static,
    U: PartialEq + 'static,
    V: Describe + 'static,
{
    /// Validates and commits a raw value.
    pub fn set_value(&mut self, value: U) -> Outcome {
        if self.setter.is_none() {
            tracing::trace!(
                item = %self.id,
                key = self.key.as_deref(),
                "discarded write to read-only binding"
            );
            return Outcome::ReadOnly;
        }

        if value == self.value() {
            self.status = Status::Normal;
            tracing::trace!(item = %self.id, key = self.key.as_deref(), "value unchanged");
            return Outcome::Unchanged;
        }

        if let Some(validator) = self.validators.first_failure(&value) {
            self.status = Status::ValidateFailed(validator.message().into_owned());
            tracing::debug!(
                item = %self.id,
                key = self.key.as_deref(),
                code = validator.code(),
                "validation rejected value"
            );
            if let Some(hook) = &self.validate_failed {
                hook(validator);
            }
            return Outcome::ValidateFailed;
        }

        self.will_set_value();
        if let Some(setter) = &self.setter {
            let mut model = self.model.borrow_mut();
            setter(&mut *model, value);
        }
        self.did_set_value();

        tracing::debug!(item = %self.id, key = self.key.as_deref(), "committed value");
        Outcome::Committed
    }

    /// Converts a display value back and commits it through
    /// [`set_value`](Self::set_value).
    pub fn set_display_value(&mut self, display: V) -> Outcome {
        if self.setter.is_none() {
            tracing::trace!(
                item = %self.id,
                key = self.key.as_deref(),
                "discarded write to read-only binding"
            );
            return Outcome::ReadOnly;
        }

        match self.converter.convert_back(&display) {
            Some(value) => self.set_value(value),
            None => {
                tracing::debug!(
                    item = %self.id,
                    key = self.key.as_deref(),
                    code = "convert",
                    "display value did not convert back"
                );
                self.status = Status::ConvertFailed(display);
                if let (Some(hook), Status::ConvertFailed(display)) =
                    (&self.convert_failed, &self.status)
                {
                    hook(display);
                }
                Outcome::ConvertFailed
            }
        }
    }

    /// Runs the validators against the current value. Status is unchanged.
    pub fn check(&self) -> Result<(), ValidationError> {
        self.validators.validate(&self.value()).map_err(|error| match &self.title {
            Some(title) => error.with_field(title.clone()),
            None => error,
        })
    }

    fn will_set_value(&mut self) {
        self.status = Status::Normal;
        let this: &Self = self;
        if let Some(host) = this.host.get() {
            host.notify_will_change(this);
        }
        if let Some(hook) = &this.will_change {
            hook(this);
        }
    }

    fn did_set_value(&self) {
        let host = self.host.get();
        if self.auto_reload {
            if let Some(host) = &host {
                host.request_reload(self);
            }
        }
        if let Some(hook) = &self.did_change {
            hook(self);
        }
        if let Some(host) = &host {
            host.notify_did_change(self);
        }
    }
}

impl<T, U, V: Describe> Failable for Binding<T, U, V> {
    fn is_failed(&self) -> bool {
        self.status.is_failed()
    }

    fn failure_message(&self) -> Option<String> {
        status::failure_message(self.title(), &self.status)
    }
}

impl<T, U, V> BoundItem for Binding<T, U, V>
where
    T: 'static,
    U: PartialEq + 'static,
    V: Describe + 'static,
{
    fn id(&self) -> ItemId {
        self.id
    }

    fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn is_required(&self) -> bool {
        self.is_required
    }

    fn auto_reload(&self) -> bool {
        self.auto_reload
    }

    fn set_auto_reload(&mut self, auto_reload: bool) {
        self.auto_reload = auto_reload;
    }

    fn description(&self) -> Option<String> {
        Self::description(self)
    }

    fn check_current(&self) -> Result<(), ValidationError> {
        self.validators.validate(&self.value())
    }

    fn reset_status(&mut self) {
        self.status = Status::Normal;
    }

    fn error(&self) -> Option<BindingError> {
        match &self.status {
            Status::Normal => None,
            Status::ConvertFailed(value) => Some(BindingError::ConvertFailed {
                item: BoundItem::label(self),
                value: value.describe(),
            }),
            Status::ValidateFailed(message) => Some(BindingError::ValidateFailed {
                item: BoundItem::label(self),
                message: message.clone(),
            }),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl<T, U: fmt::Debug, V: fmt::Debug> fmt::Debug for Binding<T, U, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("id", &self.id)
            .field("key", &self.key)
            .field("title", &self.title)
            .field("status", &self.status)
            .field("validators", &self.validators)
            .field("read_only", &self.setter.is_none())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::IntStringConverter;
    use pretty_assertions::assert_eq;
    use rowbind_validator::validators::{greater_than, less_than, predicate};
    use std::cell::Cell;

    #[derive(Debug)]
    struct Person {
        age: i64,
        name: Option<String>,
    }

    fn person() -> Rc<RefCell<Person>> {
        Rc::new(RefCell::new(Person {
            age: 17,
            name: Some("Ada".into()),
        }))
    }

    fn age(model: &Rc<RefCell<Person>>) -> Binding<Person, i64> {
        Binding::new(Rc::clone(model), |p: &Person| p.age)
            .with_setter(|p: &mut Person, age| p.age = age)
            .with_title("Age")
    }

    #[test]
    fn reads_through_getter() {
        let model = person();
        let binding = age(&model);
        assert_eq!(binding.value(), 17);
        assert_eq!(binding.display_value(), 17);
        assert_eq!(binding.description().as_deref(), Some("17"));
        model.borrow_mut().age = 30;
        assert_eq!(binding.value(), 30);
    }

    #[test]
    fn read_only_discards_writes() {
        let model = person();
        let mut binding = Binding::new(Rc::clone(&model), |p: &Person| p.age)
            .with_validator(greater_than(100));
        assert!(binding.is_read_only());
        assert_eq!(binding.set_value(5), Outcome::ReadOnly);
        assert_eq!(binding.set_display_value(5), Outcome::ReadOnly);
        assert!(binding.status().is_normal());
        assert_eq!(model.borrow().age, 17);
    }

    #[test]
    fn unchanged_value_skips_setter_and_clears_status() {
        let model = person();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut binding = Binding::new(Rc::clone(&model), |p: &Person| p.age)
            .with_setter(move |p: &mut Person, age| {
                counter.set(counter.get() + 1);
                p.age = age;
            })
            .with_validator(greater_than(0));

        assert_eq!(binding.set_value(-1), Outcome::ValidateFailed);
        assert!(binding.status().is_failed());

        assert_eq!(binding.set_value(17), Outcome::Unchanged);
        assert!(binding.status().is_normal());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn first_failing_validator_is_reported() {
        let model = person();
        let reported = Rc::new(RefCell::new(String::new()));
        let sink = Rc::clone(&reported);
        let mut binding = age(&model)
            .with_validator(greater_than(0))
            .with_validator(less_than(-10))
            .on_validate_failed(move |v| *sink.borrow_mut() = v.code().to_owned());

        assert_eq!(binding.set_value(-5), Outcome::ValidateFailed);
        assert_eq!(
            binding.status(),
            &Status::ValidateFailed("must greater than 0".into())
        );
        assert_eq!(*reported.borrow(), "greater_than");
        assert_eq!(model.borrow().age, 17);
    }

    #[test]
    fn convert_failure_keeps_input_and_skips_validators() {
        let model = person();
        let validated = Rc::new(Cell::new(false));
        let flag = Rc::clone(&validated);
        let rejected = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&rejected);

        let mut binding = age(&model)
            .with_validator(predicate(
                move |_: &i64| {
                    flag.set(true);
                    true
                },
                "unused",
            ))
            .with_converter(IntStringConverter)
            .on_convert_failed(move |v: &String| *sink.borrow_mut() = Some(v.clone()));

        assert_eq!(binding.set_display_value("abc".into()), Outcome::ConvertFailed);
        assert_eq!(binding.status(), &Status::ConvertFailed("abc".to_string()));
        assert_eq!(rejected.borrow().as_deref(), Some("abc"));
        assert!(!validated.get());
        assert_eq!(
            binding.failure_message().as_deref(),
            Some("Age can't be abc")
        );
    }

    #[test]
    fn commit_clears_failure() {
        let model = person();
        let mut binding: Binding<Person, i64, String> = age(&model)
            .with_validator(greater_than(0))
            .with_converter(IntStringConverter);

        assert_eq!(binding.set_display_value("-5".into()), Outcome::ValidateFailed);
        assert_eq!(binding.set_display_value("25".into()), Outcome::Committed);
        assert!(binding.status().is_normal());
        assert_eq!(binding.failure_message(), None);
        assert_eq!(model.borrow().age, 25);
    }

    #[test]
    fn hooks_fire_around_setter() {
        let model = person();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let (before, after) = (Rc::clone(&seen), Rc::clone(&seen));
        let seen_before = Rc::clone(&model);
        let seen_after = Rc::clone(&model);

        let mut binding = age(&model)
            .on_will_change(move |_| before.borrow_mut().push(("will", seen_before.borrow().age)))
            .on_did_change(move |_| after.borrow_mut().push(("did", seen_after.borrow().age)));

        assert!(binding.set_value(40).is_committed());
        assert_eq!(*seen.borrow(), [("will", 17), ("did", 40)]);
    }

    #[test]
    fn with_converter_resets_status_and_drops_formatter() {
        let model = person();
        let mut binding = age(&model)
            .with_validator(greater_than(0))
            .with_formatter(|age: &i64| Some(format!("{age} years")));
        assert_eq!(binding.description().as_deref(), Some("17 years"));
        assert_eq!(binding.set_value(-1), Outcome::ValidateFailed);

        let binding: Binding<Person, i64, String> = binding.with_converter(IntStringConverter);
        assert!(binding.status().is_normal());
        assert_eq!(binding.description().as_deref(), Some("17"));
        assert_eq!(binding.validators().len(), 1);
    }

    #[test]
    fn formatter_may_hide_value() {
        let model = person();
        let binding = Binding::new(Rc::clone(&model), |p: &Person| p.name.clone())
            .with_formatter(|name: &Option<String>| name.as_ref().map(|n| n.to_uppercase()));
        assert_eq!(binding.description().as_deref(), Some("ADA"));
        assert_eq!(binding.description_of(&None), None);
    }

    #[test]
    fn optional_value_describes_empty() {
        let model = person();
        model.borrow_mut().name = None;
        let binding = Binding::new(Rc::clone(&model), |p: &Person| p.name.clone());
        assert_eq!(binding.description().as_deref(), Some(""));
    }

    #[test]
    fn check_uses_current_value_without_touching_status() {
        let model = person();
        let binding = age(&model).with_validator(greater_than(18));
        let error = binding.check().unwrap_err();
        assert_eq!(error.to_string(), "Age must greater than 18");
        assert!(binding.status().is_normal());
    }

    #[test]
    fn remove_validator_by_code() {
        let model = person();
        let mut binding = age(&model).with_validator(greater_than(100));
        assert_eq!(binding.set_value(20), Outcome::ValidateFailed);
        assert!(binding.remove_validator("greater_than"));
        assert_eq!(binding.set_value(20), Outcome::Committed);
        assert!(!binding.remove_validator("greater_than"));
    }

    #[test]
    fn error_uses_label() {
        let model = person();
        let mut binding = Binding::new(Rc::clone(&model), |p: &Person| p.age)
            .with_setter(|p: &mut Person, age| p.age = age)
            .with_key("age")
            .with_validator(greater_than(0));
        assert_eq!(binding.error(), None);
        let _ = binding.set_value(-1);
        assert_eq!(
            binding.error(),
            Some(BindingError::ValidateFailed {
                item: "age".into(),
                message: "must greater than 0".into(),
            })
        );
        assert_eq!(binding.failure_message().as_deref(), Some("must greater than 0"));
    }

    #[test]
    fn validation_message_prefixes_title() {
        let model = person();
        let binding = age(&model);
        assert_eq!(
            binding.validation_message(&greater_than(0_i64)),
            "Age must greater than 0"
        );
    }
}

//! OPTIONAL combinator - validates Option types

use std::borrow::Cow;

use crate::foundation::Validate;

/// Makes a validator work with Option types: `None` passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    pub(crate) inner: V,
}

impl<V> Optional<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Optional<V>
where
    V: Validate,
    V::Input: Sized,
{
    type Input = Option<V::Input>;

    fn is_valid(&self, input: &Self::Input) -> bool {
        input.as_ref().is_none_or(|value| self.inner.is_valid(value))
    }

    fn code(&self) -> &str {
        self.inner.code()
    }

    fn message(&self) -> Cow<'_, str> {
        self.inner.message()
    }
}

pub fn optional<V>(validator: V) -> Optional<V>
where
    V: Validate,
    V::Input: Sized,
{
    Optional::new(validator)
}

//! Object-safe view of a binding, used by hosts and forms.

use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use rowbind_validator::ValidationError;
use serde::Serialize;

use crate::error::BindingError;
use crate::status::Failable;

/// Process-unique identifier of a binding or row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

/// A binding with its value types erased.
///
/// Implemented by [`Binding`](crate::Binding) and
/// [`MultiValueBinding`](crate::MultiValueBinding). Use
/// [`as_any`](Self::as_any) to recover the concrete binding.
pub trait BoundItem: Failable {
    fn id(&self) -> ItemId;

    fn key(&self) -> Option<&str>;

    fn title(&self) -> Option<&str>;

    fn is_required(&self) -> bool;

    fn auto_reload(&self) -> bool;

    fn set_auto_reload(&mut self, auto_reload: bool);

    /// Row text for the current value.
    fn description(&self) -> Option<String>;

    /// Runs the validators against the current model value.
    fn check_current(&self) -> Result<(), ValidationError>;

    fn reset_status(&mut self);

    /// The failed status as an error, or `None` when normal.
    fn error(&self) -> Option<BindingError>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Title, else key, else id.
    fn label(&self) -> String {
        self.title()
            .or_else(|| self.key())
            .map_or_else(|| self.id().to_string(), str::to_owned)
    }
}

impl fmt::Debug for dyn BoundItem + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundItem")
            .field("id", &self.id())
            .field("key", &self.key())
            .field("title", &self.title())
            .field("failed", &self.is_failed())
            .finish_non_exhaustive()
    }
}

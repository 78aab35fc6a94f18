//! The controller that owns bindings and reacts to their notifications.

use std::rc::{Rc, Weak};

use crate::item::BoundItem;

/// Receives a binding's lifecycle notifications.
///
/// Every method defaults to a no-op, so a host implements only what it
/// reacts to. Notifications fire only for committed writes.
pub trait BindingHost {
    /// Called before the setter runs.
    fn notify_will_change(&self, _item: &dyn BoundItem) {}

    /// Called after the setter and the item's own did-change hook.
    fn notify_did_change(&self, _item: &dyn BoundItem) {}

    /// Called after a committed write on an auto-reloading item, before
    /// [`notify_did_change`](Self::notify_did_change).
    fn request_reload(&self, _item: &dyn BoundItem) {}
}

/// Weak handle to an optional host. Dropped or unset hosts are ignored.
#[derive(Clone, Default)]
pub(crate) struct HostHandle(Option<Weak<dyn BindingHost>>);

impl HostHandle {
    pub(crate) fn set(&mut self, host: Weak<dyn BindingHost>) {
        self.0 = Some(host);
    }

    pub(crate) fn clear(&mut self) {
        self.0 = None;
    }

    pub(crate) fn get(&self) -> Option<Rc<dyn BindingHost>> {
        self.0.as_ref().and_then(Weak::upgrade)
    }

    pub(crate) fn is_attached(&self) -> bool {
        self.0.as_ref().is_some_and(|host| host.strong_count() > 0)
    }
}

impl std::fmt::Debug for HostHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HostHandle")
            .field(&self.is_attached())
            .finish()
    }
}

//! Outcome of the most recent write attempt.

use serde::Serialize;

use crate::describe::Describe;

/// Failure state of a binding.
///
/// Recomputed on every attempted write. Reads never change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Status<V> {
    /// The last write succeeded, was a no-op, or none was attempted.
    Normal,
    /// The display value had no raw counterpart. Holds the rejected input.
    ConvertFailed(V),
    /// A validator rejected the raw value. Holds its message.
    ValidateFailed(String),
}

impl<V> Default for Status<V> {
    fn default() -> Self {
        Self::Normal
    }
}

impl<V> Status<V> {
    pub const fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }

    pub const fn is_failed(&self) -> bool {
        !self.is_normal()
    }

    /// The rejected display value, if conversion failed.
    pub const fn rejected_value(&self) -> Option<&V> {
        match self {
            Self::ConvertFailed(value) => Some(value),
            _ => None,
        }
    }

    /// The validator message, if validation failed.
    pub fn validation_message(&self) -> Option<&str> {
        match self {
            Self::ValidateFailed(message) => Some(message),
            _ => None,
        }
    }
}

/// Anything that can report a failed write.
pub trait Failable {
    fn is_failed(&self) -> bool;

    /// Human-readable failure, prefixed with the item title when there is one.
    fn failure_message(&self) -> Option<String>;
}

/// Prefixes `message` with `title`, or returns `message` alone.
pub(crate) fn titled(title: Option<&str>, message: &str) -> String {
    match title {
        Some(title) => format!("{title} {message}"),
        None => message.to_owned(),
    }
}

pub(crate) fn failure_message<V: Describe>(
    title: Option<&str>,
    status: &Status<V>,
) -> Option<String> {
    match status {
        Status::Normal => None,
        Status::ConvertFailed(value) => {
            Some(titled(title, &format!("can't be {}", value.describe())))
        }
        Status::ValidateFailed(message) => Some(titled(title, message)),
    }
}

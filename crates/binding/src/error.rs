use rowbind_validator::ValidationError;

/// Error type for binding and form operations.
///
/// Writes never return this directly: a failed write is recorded in the
/// binding's [`Status`](crate::Status). Hosts that prefer `Result`-based
/// flow collect it through [`BoundItem::error`](crate::BoundItem::error) or
/// [`Form::validate`](crate::Form::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    /// The last edit could not be converted back to the raw type.
    #[error("{item} can't be {value}")]
    ConvertFailed { item: String, value: String },

    /// The last edit was rejected by a validator.
    #[error("{item} {message}")]
    ValidateFailed { item: String, message: String },

    /// The current model value fails the item's validators.
    #[error("{item} {source}")]
    Invalid {
        item: String,
        #[source]
        source: ValidationError,
    },

    /// Selection limits where the minimum exceeds the maximum.
    #[error("invalid selection limits: min {min} exceeds max {max}")]
    InvalidLimits { min: usize, max: usize },
}

impl BindingError {
    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::ConvertFailed { .. } => "conversion",
            Self::ValidateFailed { .. } | Self::Invalid { .. } => "validation",
            Self::InvalidLimits { .. } => "config",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::ConvertFailed { .. } => "BINDING_CONVERT_FAILED",
            Self::ValidateFailed { .. } => "BINDING_VALIDATE_FAILED",
            Self::Invalid { .. } => "BINDING_INVALID",
            Self::InvalidLimits { .. } => "BINDING_INVALID_LIMITS",
        }
    }

    /// Label of the item the error belongs to, if any.
    #[must_use]
    pub fn item(&self) -> Option<&str> {
        match self {
            Self::ConvertFailed { item, .. }
            | Self::ValidateFailed { item, .. }
            | Self::Invalid { item, .. } => Some(item),
            Self::InvalidLimits { .. } => None,
        }
    }
}

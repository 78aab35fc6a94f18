//! Combinators that wrap a validator and change when or how it reports.

pub mod message;
pub mod optional;
pub mod when;

pub use message::{WithMessage, with_message};
pub use optional::{Optional, optional};
pub use when::{When, when};

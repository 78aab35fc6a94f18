//! # rowbind-binding
//!
//! Two-way bindings between properties of a shared model and the rows of a
//! form.
//!
//! A [`Binding`] reads a raw value out of the model, presents it through a
//! [`Converter`], validates edits with a
//! [`ValidatorChain`](rowbind_validator::ValidatorChain), and writes them
//! back while notifying a [`BindingHost`]. [`MultiValueBinding`] adds
//! bounded selection operations for option lists. [`Row`], [`Section`] and
//! [`Form`] arrange bindings the way a presentation adapter lays them out.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use rowbind_binding::prelude::*;
//!
//! #[derive(Default)]
//! struct Account {
//!     email: Option<String>,
//! }
//!
//! let account = Rc::new(RefCell::new(Account::default()));
//! let mut field = Binding::new(Rc::clone(&account), |a: &Account| a.email.clone())
//!     .with_setter(|a: &mut Account, email| a.email = email)
//!     .with_title("Email")
//!     .with_validator(email());
//!
//! assert_eq!(field.set_value(Some("nope".into())), Outcome::ValidateFailed);
//! assert_eq!(field.failure_message().as_deref(), Some("Email incorrect format"));
//!
//! assert!(field.set_value(Some("ada@example.com".into())).is_committed());
//! assert_eq!(account.borrow().email.as_deref(), Some("ada@example.com"));
//! ```

pub mod binding;
pub mod converter;
pub mod describe;
pub mod error;
pub mod host;
pub mod item;
pub mod kind;
pub mod multi;
pub mod section;
pub mod selection;
pub mod status;

pub use binding::{Binding, Outcome};
pub use converter::{Converter, FnConverter, Identity, IntStringConverter, JoinConverter};
pub use describe::Describe;
pub use error::BindingError;
pub use host::BindingHost;
pub use item::{BoundItem, ItemId};
pub use kind::{
    DateMode, DateOptions, ItemCapability, ItemKind, KeyboardKind, SelectorOptions, SelectorStyle,
    SliderOptions, StepperOptions, TextAlignment, TextFieldOptions, TextViewOptions,
};
pub use multi::MultiValueBinding;
pub use section::{Form, Row, RowPath, Section};
pub use selection::{Selection, SelectionLimits};
pub use status::{Failable, Status};

pub mod prelude {
    pub use crate::binding::{Binding, Outcome};
    pub use crate::converter::{Converter, FnConverter, Identity, IntStringConverter, JoinConverter};
    pub use crate::describe::Describe;
    pub use crate::error::BindingError;
    pub use crate::host::BindingHost;
    pub use crate::item::{BoundItem, ItemId};
    pub use crate::kind::*;
    pub use crate::multi::MultiValueBinding;
    pub use crate::section::{Form, Row, RowPath, Section};
    pub use crate::selection::{Selection, SelectionLimits};
    pub use crate::status::{Failable, Status};

    pub use rowbind_validator::prelude::*;
}

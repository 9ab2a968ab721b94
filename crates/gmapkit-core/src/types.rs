//! Handle aliases for single-threaded shared state.
//!
//! The drawing surface and everything attached to it live on one thread, so
//! shared ownership is `Rc<RefCell<T>>` and back-references are the matching
//! `Weak` form.
//!
//! ```rust,ignore
//! use gmapkit_core::types::*;
//!
//! let control: Shared<MyControl> = shared(MyControl::default());
//! let back_ref: WeakShared<MyControl> = std::rc::Rc::downgrade(&control);
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
pub type Shared<T> = Rc<RefCell<T>>;

/// A non-owning handle to a [`Shared`] value.
///
/// Upgrading fails once every strong handle is gone; holders must never keep
/// the target alive.
pub type WeakShared<T> = Weak<RefCell<T>>;

/// Create a new `Shared<T>` from a value.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

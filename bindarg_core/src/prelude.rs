//! Traits which, typically, may be imported without concern: `use bindarg::prelude::*`.

pub use crate::api::BindOptions;
#[cfg(feature = "async")]
pub use crate::command::AsyncCommand;
pub use crate::command::Command;

/// Behaviour for multiple (0 to many) items T to be collected together.
// Needs to be imported in order to implement a custom `Collectable`.
pub trait Collectable<T> {
    /// Add a value to this `Collectable`.
    fn add(&mut self, item: T);
}

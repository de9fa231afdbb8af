//! Runtime for `bindarg`.
//! See [documentation root](https://docs.rs/bindarg/latest/bindarg/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod binder;
mod command;
mod constant;
mod dispatch;
mod model;
mod parameters;
pub mod prelude;
pub mod text;
mod token;
mod tokens;

pub use api::*;
pub use binder::*;
pub use command::*;
pub use dispatch::{Dispatcher, Usage};
pub use model::*;
pub use parameters::*;
pub use token::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

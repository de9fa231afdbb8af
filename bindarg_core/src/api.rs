mod binding;
mod capture;
mod field;

pub use binding::*;
pub use capture::*;
pub use field::*;

//! Derive Api for `bindarg` options.
//!
//! ### Getting Started
//! Instrument an options struct `S` with `#[derive(Default, BindOptions)]`, and mark each field to bind with `#[bindarg(flag = "..")]`.
//! This implements [`BindOptions`](../trait.BindOptions.html) for `S`, generating a static binding table in field declaration order.
//! Fields without a `flag` keep their `Default` value.
//!
//! ```
//! use bindarg::derive::*;
//! use bindarg::prelude::*;
//! use bindarg::Parameters;
//!
//! #[derive(Debug, Default, BindOptions)]
//! struct Options {
//!     #[bindarg(flag = "one", required)]
//!     apple: usize,
//!     #[bindarg(flag = "verbose")]
//!     banana: bool,
//!     carrot: String,
//! }
//!
//! let options = Options::bind(&Parameters::parse("-ONE 2 -verbose")).unwrap();
//! assert_eq!(options.apple, 2);
//! assert!(options.banana);
//! assert_eq!(options.carrot, "");
//! ```
//!
//! ### Field Configuration
//! The field type decides how its values are bound (`T` must implement `FromStr`, with a `Display` error):
//! ```console
//! Type        | Binding
//! -----------------------------------------------------
//! Option<T>   | Optional::new(..)
//! Vec<T>      | Collection::new(.., Nargs::Any)
//! HashSet<T>  | Collection::new(.., Nargs::Any)
//! bool        | Switch::new(.., !default)
//! T           | Scalar::new(..)
//! ```
//!
//! The following field attributes may be combined as necessary (subject to the rules below).
//! * `#[bindarg(flag = "name")]` binds the field to the flag `-name` (matched case-insensitively).
//! The flag must be a non-empty string literal, without whitespace or a leading `-`.
//! No two fields may bind the same flag.
//! * `#[bindarg(required)]` fails binding when the flag is not specified.
//! Not applicable to `Option<T>` fields.
//! * `#[bindarg(help = "..")]` describes the flag in the [usage message](../struct.Usage.html).
//! * `#[bindarg(single_word)]` rejects values which are not a single word (see [TypeaheadToken](../struct.TypeaheadToken.html)).
//! Not applicable to `bool` fields.
//! * `#[bindarg(collection = N)]` uses `Collection::new(.., N)`, where `N` is the [Nargs](../enum.Nargs.html) variant.
//! This is useful both for non-`Vec`/`HashSet` [Collectable](../prelude/trait.Collectable.html) types, as well as to control the `Nargs` variant.
//!
//! A partial example of these rules is provided as follows:
//! ```ignore
//! #[derive(Default, BindOptions)]
//! struct Options {
//!     #[bindarg(flag = "quick", required, help = "How quick.")]
//!     quick: usize,
//!     // the above generates:
//!     //  Binding::new("quick", true, Nargs::Precisely(1), Some("How quick."), ..)
//!     //  capturing via Scalar::new(&mut target.quick)
//!
//!     #[bindarg(flag = "brown", single_word)]
//!     brown: Option<String>,
//!     // the above generates:
//!     //  Binding::new("brown", false, Nargs::Precisely(1), None, ..)
//!     //  capturing via SingleWord::new(Optional::new(&mut target.brown))
//!
//!     #[bindarg(flag = "jumps", collection = Nargs::Precisely(2))]
//!     jumps: Pair<usize>,
//!     // the above generates:
//!     //  Binding::new("jumps", false, Nargs::Precisely(2), None, ..)
//!     //  capturing via Collection::new(&mut target.jumps, Nargs::Precisely(2))
//!     // assumes: `impl<T> Collectable<T> for Pair<T>`
//! }
//! ```
//!
//! Attributes may be split across several `#[bindarg(..)]` on the same field, but each `name = ..` may only be given once.
//! Misconfigurations are reported as compile errors on the offending field.

pub use bindarg_derive::BindOptions;

//! `bindarg` binds a command line onto typed option structs, and runs commands against them.
//!
//! A command line is broken into *flags*, each followed by its values: `-name value1 value2 -switch`.
//! Flag names are case-insensitive, and when a flag is given more than once its last occurrence wins.
//! An options struct declares which flags it binds via `#[derive(BindOptions)]`, and a [`Command`] supplies the business logic to run against the bound options.
//!
//! `bindarg` attempts to prioritize the following design concerns:
//! * *Type safe binding*:
//! The user should not call any `&str -> T` conversion functions directly.
//! Every field is converted via [`std::str::FromStr`], and conversion errors are reported with the type's own [`Display`](std::fmt::Display) reason.
//! * *Explicit flags*:
//! Flag names are never inferred from field names; fields without a flag are simply left alone.
//! * *Fail fast*:
//! Binding stops at the first missing required flag or invalid value, and never hands out a partially bound struct.
//! * *Small surface*:
//! There are no positional arguments, sub-commands, or short flags.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/greeter.rs")]
//! ```
//!
//! This generates the following program:
//! ```console
//! $ greeter -name world -also moon -loud
//! HELLO, WORLD & MOON!
//!
//! $ greeter -NAME world -country gb
//! Hello from gb, world!
//!
//! $ greeter -country "great britain"
//! Required parameter '-name' is missing.
//! usage: greeter -name NAME [-country COUNTRY] [-times TIMES] [-loud] [-also [ALSO ...]]
//!
//! options:
//!  -name NAME         Who to greet. (required)
//!  -country COUNTRY   A single word country code.
//!  -times TIMES       How many times to greet.
//!  -loud
//!  -also [ALSO ...]   Others to greet.
//! ```
//!
//! # Command Line Semantics
//! * Tokens are separated by whitespace, except inside double quotes: `-name "two words"`.
//! * A token starting with `-` opens a flag; all of its leading `-` markers are stripped (`-name` and `--name` are the same flag).
//! A token made only of markers (ex: `-`) is a value, as is any quoted token (ex: `"-5 degrees"`).
//! * The tokens following a flag, up to the next flag, are its values.
//! A flag followed directly by another flag (or the end of the line) has no values.
//! * Tokens before the first flag are discarded.
//! [`Parameters::from_command_line`] also removes the program path, which may be quoted.
//!
//! ### Field Binding
//! ```console
//! Field type     | Field              | Values        | Usage
//! ------------------------------------------------------------------------------
//! T              | Scalar<T>          | precisely 1   | -NAME VALUE
//! Option<T>      | Optional<T>        | precisely 1   | [-NAME VALUE]
//! bool           | Switch<bool>       | precisely 0   | [-NAME]
//! Vec<T>         | Collection<C, T>   | Nargs::Any    | [-NAME [VALUE ...]]
//! HashSet<T>     | Collection<C, T>   | Nargs::Any    | [-NAME [VALUE ...]]
//! ```
//!
//! A flag bound to a `bool` flips the field away from its default when specified.
//! Single word values are enforced either with the [`TypeaheadToken`] field type, or with `#[bindarg(single_word)]` on any field.
//!
//! # Commands
//! [`BoundCommand`] holds a [`Command`] together with its options, which start out unbound.
//! Executing an unbound command returns [`ExitCode::NoCommand`] without running the business logic.
//! The asynchronous variants ([`AsyncCommand`], [`BoundAsyncCommand`]) hand the business logic a cancellation token.
//!
//! ```console
//! Exit code  | Meaning
//! ---------------------------------------
//! 0          | ExitCode::Success
//! -1         | ExitCode::GeneralError
//! -2         | ExitCode::NoCommand
//! ```
//!
//! # Features
//! * `async` (default): The asynchronous command variants.
//! * `tracing_debug`: Debug logging via `tracing`.
pub mod derive;
pub use bindarg_core::*;

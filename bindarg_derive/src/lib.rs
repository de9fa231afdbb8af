extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveOptions;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use syn::parse_macro_input;

/// Derive `BindOptions` for a struct, generating its static binding table.
///
/// Only fields marked with `#[bindarg(flag = "..")]` are bound.
#[proc_macro_derive(BindOptions, attributes(bindarg))]
pub fn bind_options(input: TokenStream) -> TokenStream {
    let derive_input = parse_macro_input!(input as syn::DeriveInput);

    match DeriveOptions::try_from(derive_input) {
        Ok(derive_options) => TokenStream2::from(derive_options).into(),
        Err(error) => error.to_compile_error().into(),
    }
}

use crate::model::{DeriveBinding, FieldKind};
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};

/// The generated pieces of one binding: its assign function, and its entry in the binding table.
pub(super) struct BindingTokens {
    pub(super) assign: TokenStream2,
    pub(super) entry: TokenStream2,
}

impl DeriveBinding {
    pub(super) fn generate(self, struct_name: &syn::Ident) -> BindingTokens {
        let DeriveBinding {
            field_name,
            flag,
            kind,
            required,
            single_word,
            help,
        } = self;
        let assign_name = format_ident!("assign_{field_name}");
        let mut prepare = TokenStream2::default();

        let (capture, nargs) = match kind {
            FieldKind::Scalar => (
                quote! { ::bindarg::Scalar::new(&mut target.#field_name) },
                quote! { ::bindarg::Nargs::Precisely(1) },
            ),
            FieldKind::Optional => (
                quote! { ::bindarg::Optional::new(&mut target.#field_name) },
                quote! { ::bindarg::Nargs::Precisely(1) },
            ),
            FieldKind::Switch => {
                // Specifying the flag flips the field away from its default.
                prepare = quote! { let switched = !target.#field_name; };
                (
                    quote! { ::bindarg::Switch::new(&mut target.#field_name, switched) },
                    quote! { ::bindarg::Nargs::Precisely(0) },
                )
            }
            FieldKind::Collection { nargs } => {
                let nargs = nargs.tokens;
                (
                    quote! { ::bindarg::Collection::new(&mut target.#field_name, #nargs) },
                    nargs,
                )
            }
        };

        let capture = if single_word {
            quote! { ::bindarg::SingleWord::new(#capture) }
        } else {
            capture
        };

        let help = match help {
            Some(help) => {
                let help = help.tokens;
                quote! { ::std::option::Option::Some(#help) }
            }
            None => quote! { ::std::option::Option::None },
        };

        BindingTokens {
            assign: quote! {
                fn #assign_name(
                    target: &mut #struct_name,
                    values: &[::std::string::String],
                ) -> ::std::result::Result<(), ::bindarg::InvalidCapture> {
                    #prepare
                    ::bindarg::capture_values(#capture, values)
                }
            },
            entry: quote! {
                ::bindarg::Binding::new(#flag, #required, #nargs, #help, #assign_name)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeriveValue;
    use proc_macro2::{Literal, Span};
    use quote::ToTokens;

    #[test]
    fn generate_scalar() {
        // Setup
        let binding = DeriveBinding {
            field_name: ident("apple"),
            flag: "one".to_string(),
            kind: FieldKind::Scalar,
            required: true,
            single_word: false,
            help: Some(DeriveValue {
                tokens: Literal::string("The input.").into_token_stream(),
            }),
        };

        // Execute
        let BindingTokens { assign, entry } = binding.generate(&ident("Options"));

        // Verify
        assert_eq!(
            assign.to_string(),
            quote! {
                fn assign_apple(
                    target: &mut Options,
                    values: &[::std::string::String],
                ) -> ::std::result::Result<(), ::bindarg::InvalidCapture> {
                    ::bindarg::capture_values(::bindarg::Scalar::new(&mut target.apple), values)
                }
            }
            .to_string()
        );
        assert_eq!(
            entry.to_string(),
            quote! {
                ::bindarg::Binding::new(
                    "one",
                    true,
                    ::bindarg::Nargs::Precisely(1),
                    ::std::option::Option::Some("The input."),
                    assign_apple
                )
            }
            .to_string()
        );
    }

    #[test]
    fn generate_optional_single_word() {
        // Setup
        let binding = DeriveBinding {
            field_name: ident("apple"),
            flag: "one".to_string(),
            kind: FieldKind::Optional,
            required: false,
            single_word: true,
            help: None,
        };

        // Execute
        let BindingTokens { assign, entry } = binding.generate(&ident("Options"));

        // Verify
        assert_eq!(
            assign.to_string(),
            quote! {
                fn assign_apple(
                    target: &mut Options,
                    values: &[::std::string::String],
                ) -> ::std::result::Result<(), ::bindarg::InvalidCapture> {
                    ::bindarg::capture_values(
                        ::bindarg::SingleWord::new(::bindarg::Optional::new(&mut target.apple)),
                        values
                    )
                }
            }
            .to_string()
        );
        assert_eq!(
            entry.to_string(),
            quote! {
                ::bindarg::Binding::new(
                    "one",
                    false,
                    ::bindarg::Nargs::Precisely(1),
                    ::std::option::Option::None,
                    assign_apple
                )
            }
            .to_string()
        );
    }

    #[test]
    fn generate_switch() {
        // Setup
        let binding = DeriveBinding {
            field_name: ident("verbose"),
            flag: "verbose".to_string(),
            kind: FieldKind::Switch,
            required: false,
            single_word: false,
            help: None,
        };

        // Execute
        let BindingTokens { assign, entry } = binding.generate(&ident("Options"));

        // Verify
        assert_eq!(
            assign.to_string(),
            quote! {
                fn assign_verbose(
                    target: &mut Options,
                    values: &[::std::string::String],
                ) -> ::std::result::Result<(), ::bindarg::InvalidCapture> {
                    let switched = !target.verbose;
                    ::bindarg::capture_values(::bindarg::Switch::new(&mut target.verbose, switched), values)
                }
            }
            .to_string()
        );
        assert_eq!(
            entry.to_string(),
            quote! {
                ::bindarg::Binding::new(
                    "verbose",
                    false,
                    ::bindarg::Nargs::Precisely(0),
                    ::std::option::Option::None,
                    assign_verbose
                )
            }
            .to_string()
        );
    }

    #[test]
    fn generate_collection() {
        // Setup
        let binding = DeriveBinding {
            field_name: ident("items"),
            flag: "items".to_string(),
            kind: FieldKind::Collection {
                nargs: DeriveValue {
                    tokens: quote! { Nargs::AtLeastOne },
                },
            },
            required: false,
            single_word: false,
            help: None,
        };

        // Execute
        let BindingTokens { assign, entry } = binding.generate(&ident("Options"));

        // Verify
        assert_eq!(
            assign.to_string(),
            quote! {
                fn assign_items(
                    target: &mut Options,
                    values: &[::std::string::String],
                ) -> ::std::result::Result<(), ::bindarg::InvalidCapture> {
                    ::bindarg::capture_values(::bindarg::Collection::new(&mut target.items, Nargs::AtLeastOne), values)
                }
            }
            .to_string()
        );
        assert_eq!(
            entry.to_string(),
            quote! {
                ::bindarg::Binding::new(
                    "items",
                    false,
                    Nargs::AtLeastOne,
                    ::std::option::Option::None,
                    assign_items
                )
            }
            .to_string()
        );
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }
}

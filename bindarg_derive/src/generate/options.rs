use crate::generate::binding::BindingTokens;
use crate::model::DeriveOptions;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl From<DeriveOptions> for TokenStream2 {
    fn from(value: DeriveOptions) -> Self {
        let DeriveOptions {
            struct_name,
            bindings,
        } = value;
        let (assigns, entries): (Vec<_>, Vec<_>) = bindings
            .into_iter()
            .map(|binding| {
                let BindingTokens { assign, entry } = binding.generate(&struct_name);
                (assign, entry)
            })
            .unzip();

        quote! {
            impl ::bindarg::BindOptions for #struct_name {
                fn bindings() -> &'static [::bindarg::Binding<Self>] {
                    #( #assigns )*

                    static BINDINGS: &[::bindarg::Binding<#struct_name>] = &[
                        #( #entries ),*
                    ];
                    BINDINGS
                }
            }
        }
    }
}

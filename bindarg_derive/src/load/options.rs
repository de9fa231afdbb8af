use crate::load::binding::is_bound;
use crate::model::{DeriveBinding, DeriveOptions};
use std::collections::HashMap;

impl TryFrom<syn::DeriveInput> for DeriveOptions {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let struct_name = value.ident.clone();

        if !value.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &value.generics,
                "Invalid - BindOptions cannot be derived for a generic type.",
            ));
        }

        let bindings = match &value.data {
            syn::Data::Struct(ds) => match &ds.fields {
                syn::Fields::Named(fields) => fields
                    .named
                    .iter()
                    .filter(|field| is_bound(field))
                    .map(DeriveBinding::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
                syn::Fields::Unit => Vec::default(),
                syn::Fields::Unnamed(fields) => {
                    return Err(syn::Error::new_spanned(
                        fields,
                        "Invalid - BindOptions requires a struct with named fields.",
                    ))
                }
            },
            _ => {
                return Err(syn::Error::new(
                    struct_name.span(),
                    "Invalid - BindOptions can only be derived for a struct.",
                ))
            }
        };

        let mut flags: HashMap<String, &syn::Ident> = HashMap::default();

        for binding in &bindings {
            if let Some(previous) = flags.insert(binding.flag.to_lowercase(), &binding.field_name)
            {
                return Err(syn::Error::new(
                    binding.field_name.span(),
                    format!(
                        "Invalid - flag \"{f}\" is bound by both `{previous}` and `{current}`.",
                        f = binding.flag,
                        current = binding.field_name,
                    ),
                ));
            }
        }

        Ok(DeriveOptions {
            struct_name,
            bindings,
        })
    }
}

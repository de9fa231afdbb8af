use crate::model::{DeriveValue, IntermediateAttributes};
use quote::ToTokens;
use std::collections::{HashMap, HashSet};

impl TryFrom<&syn::Attribute> for IntermediateAttributes {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
        let expressions = value.parse_args_with(attributes_parser)?;
        let mut singletons = HashSet::default();
        let mut pairs: HashMap<String, Vec<DeriveValue>> = HashMap::default();

        for expression in expressions {
            match &expression {
                syn::Expr::Assign(assignment) => {
                    let left = assignment.left.to_token_stream();
                    let values = pairs.entry(left.to_string()).or_default();
                    values.push(DeriveValue {
                        tokens: assignment.right.to_token_stream(),
                    });
                }
                syn::Expr::Path(path) if path.path.get_ident().is_some() => {
                    if let Some(ident) = path.path.get_ident() {
                        singletons.insert(ident.to_string());
                    }
                }
                _ => {
                    return Err(syn::Error::new_spanned(
                        &expression,
                        format!(
                            "Invalid - unparseable attribute `{}`.",
                            expression.to_token_stream()
                        ),
                    ));
                }
            };
        }

        Ok(Self { singletons, pairs })
    }
}

impl IntermediateAttributes {
    /// Fold the contents of another `#[bindarg(..)]` attribute on the same field into this one.
    pub(crate) fn merge(&mut self, other: IntermediateAttributes) {
        self.singletons.extend(other.singletons);

        for (name, values) in other.pairs {
            self.pairs.entry(name).or_default().extend(values);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Literal;
    use quote::ToTokens;
    use std::collections::{HashMap, HashSet};
    use syn::parse_quote;

    #[test]
    fn construct_intermediate_attributes_empty() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[bindarg()]
        };

        // Execute
        let attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Verify
        assert_eq!(
            attributes,
            IntermediateAttributes {
                singletons: HashSet::default(),
                pairs: HashMap::default()
            }
        );
    }

    #[test]
    fn construct_intermediate_attributes() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[bindarg(required, flag = "one")]
        };

        // Execute
        let attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Verify
        assert_eq!(
            attributes,
            IntermediateAttributes {
                singletons: HashSet::from(["required".to_string()]),
                pairs: HashMap::from([(
                    "flag".to_string(),
                    vec![DeriveValue {
                        tokens: Literal::string("one").into_token_stream(),
                    }]
                )])
            }
        );
    }

    #[test]
    fn construct_intermediate_attributes_multiple() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[bindarg(flag = "one", flag = "two")]
        };

        // Execute
        let attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Verify
        assert_eq!(
            attributes.pairs.get("flag"),
            Some(&vec![
                DeriveValue {
                    tokens: Literal::string("one").into_token_stream(),
                },
                DeriveValue {
                    tokens: Literal::string("two").into_token_stream(),
                }
            ])
        );
    }

    #[test]
    fn construct_intermediate_attributes_path_value() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[bindarg(collection = Nargs::AtLeastOne)]
        };

        // Execute
        let attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Verify
        assert_eq!(
            attributes.pairs.get("collection"),
            Some(&vec![DeriveValue {
                tokens: quote::quote! { Nargs::AtLeastOne },
            }])
        );
    }

    #[test]
    fn construct_intermediate_attributes_no_arguments() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[bindarg]
        };

        // Execute & verify
        assert!(IntermediateAttributes::try_from(&attribute).is_err());
    }

    #[test]
    fn construct_intermediate_attributes_invalid_expression() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[bindarg(1 + 2)]
        };

        // Execute
        let error = IntermediateAttributes::try_from(&attribute).unwrap_err();

        // Verify
        assert_eq!(error.to_string(), "Invalid - unparseable attribute `1 + 2`.");
    }

    #[test]
    fn construct_intermediate_attributes_invalid_path() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[bindarg(a::b)]
        };

        // Execute
        let error = IntermediateAttributes::try_from(&attribute).unwrap_err();

        // Verify
        assert_eq!(error.to_string(), "Invalid - unparseable attribute `a :: b`.");
    }

    #[test]
    fn merge_intermediate_attributes() {
        // Setup
        let first: syn::Attribute = parse_quote! {
            #[bindarg(flag = "one", required)]
        };
        let second: syn::Attribute = parse_quote! {
            #[bindarg(flag = "two", single_word)]
        };
        let mut attributes = IntermediateAttributes::try_from(&first).unwrap();

        // Execute
        attributes.merge(IntermediateAttributes::try_from(&second).unwrap());

        // Verify
        assert_eq!(
            attributes.singletons,
            HashSet::from(["required".to_string(), "single_word".to_string()])
        );
        assert_eq!(attributes.pairs.get("flag").map(|values| values.len()), Some(2));
    }
}

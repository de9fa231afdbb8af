use crate::load::{incompatible_error, ATTRIBUTE};
use crate::model::{DeriveBinding, DeriveValue, FieldKind, IntermediateAttributes};
use quote::{quote, ToTokens};

const SINGLETONS: [&str; 2] = ["required", "single_word"];
const PAIRS: [&str; 3] = ["flag", "help", "collection"];

impl TryFrom<&syn::Field> for DeriveBinding {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let field_name = match &value.ident {
            Some(ident) => ident.clone(),
            None => {
                return Err(syn::Error::new_spanned(
                    value,
                    "Invalid - only named fields may be bound.",
                ))
            }
        };
        let mut attributes = IntermediateAttributes::default();

        for attribute in &value.attrs {
            if attribute.path().is_ident(ATTRIBUTE) {
                attributes.merge(IntermediateAttributes::try_from(attribute)?);
            }
        }

        validate_names(&field_name, &attributes)?;

        let flag = match single_pair(&field_name, &attributes, "flag")? {
            Some(derive_value) => parse_flag(&field_name, derive_value)?,
            None => {
                return Err(syn::Error::new(
                    field_name.span(),
                    "Invalid - field must specify `#[bindarg(flag = \"..\")]`.",
                ))
            }
        };
        let help = single_pair(&field_name, &attributes, "help")?.cloned();
        let collection = single_pair(&field_name, &attributes, "collection")?.cloned();
        let explicit_collection = collection.is_some();
        let required = attributes.singletons.contains("required");
        let single_word = attributes.singletons.contains("single_word");
        let nargs = collection.unwrap_or(DeriveValue {
            tokens: quote! { ::bindarg::Nargs::Any },
        });

        let kind = match &value.ty {
            syn::Type::Path(path) => match path.path.segments.last() {
                Some(segment) => {
                    let ident = segment.ident.to_string();

                    match ident.as_str() {
                        "Option" => {
                            disallow(
                                &field_name,
                                "Option<..>",
                                &[
                                    (&required, "required"),
                                    (&explicit_collection, "collection = .."),
                                ],
                            )?;

                            FieldKind::Optional
                        }
                        "Vec" | "HashSet" => FieldKind::Collection { nargs },
                        "bool" => {
                            disallow(
                                &field_name,
                                "bool",
                                &[
                                    (&single_word, "single_word"),
                                    (&explicit_collection, "collection = .."),
                                ],
                            )?;

                            FieldKind::Switch
                        }
                        _ => {
                            if explicit_collection {
                                FieldKind::Collection { nargs }
                            } else {
                                FieldKind::Scalar
                            }
                        }
                    }
                }
                None => {
                    return Err(syn::Error::new_spanned(
                        &value.ty,
                        "Invalid - empty field type.",
                    ))
                }
            },
            _ => {
                return Err(syn::Error::new_spanned(
                    &value.ty,
                    format!(
                        "Invalid - unsupported field type `{}`.",
                        value.ty.to_token_stream()
                    ),
                ))
            }
        };

        Ok(DeriveBinding {
            field_name,
            flag,
            kind,
            required,
            single_word,
            help,
        })
    }
}

/// Whether `field` carries a `#[bindarg(..)]` attribute.
pub(crate) fn is_bound(field: &syn::Field) -> bool {
    field
        .attrs
        .iter()
        .any(|attribute| attribute.path().is_ident(ATTRIBUTE))
}

fn validate_names(
    field_name: &syn::Ident,
    attributes: &IntermediateAttributes,
) -> Result<(), syn::Error> {
    let mut names: Vec<&String> = attributes
        .singletons
        .iter()
        .filter(|name| !SINGLETONS.contains(&name.as_str()))
        .chain(
            attributes
                .pairs
                .keys()
                .filter(|name| !PAIRS.contains(&name.as_str())),
        )
        .collect();
    names.sort();

    match names.first() {
        Some(name) => Err(syn::Error::new(
            field_name.span(),
            format!("Invalid - unknown attribute `{ATTRIBUTE}({name})`."),
        )),
        None => Ok(()),
    }
}

fn single_pair<'a>(
    field_name: &syn::Ident,
    attributes: &'a IntermediateAttributes,
    name: &str,
) -> Result<Option<&'a DeriveValue>, syn::Error> {
    match attributes.pairs.get(name) {
        Some(values) if values.len() > 1 => Err(syn::Error::new(
            field_name.span(),
            format!("Invalid - attribute `{name} = ..` may only be specified once."),
        )),
        Some(values) => Ok(values.first()),
        None => Ok(None),
    }
}

fn parse_flag(field_name: &syn::Ident, derive_value: &DeriveValue) -> Result<String, syn::Error> {
    let literal: syn::LitStr = syn::parse2(derive_value.tokens.clone()).map_err(|_| {
        syn::Error::new(
            field_name.span(),
            format!(
                "Invalid - flag must be a string literal, found `{}`.",
                derive_value.tokens
            ),
        )
    })?;
    let flag = literal.value();

    if flag.is_empty() || flag.starts_with('-') || flag.contains(char::is_whitespace) {
        return Err(syn::Error::new(
            literal.span(),
            format!(
                "Invalid - flag \"{flag}\" must be non-empty, without whitespace or a leading `-`."
            ),
        ));
    }

    Ok(flag)
}

fn disallow(
    field_name: &syn::Ident,
    antecedent: impl Into<String>,
    condition_names: &[(&bool, &str)],
) -> Result<(), syn::Error> {
    for (condition, name) in condition_names {
        if **condition {
            return Err(incompatible_error(
                field_name,
                antecedent,
                format!("#[{ATTRIBUTE}({name})]").as_str(),
            ));
        }
    }

    Ok(())
}

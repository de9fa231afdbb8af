use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        let st = &self.tokens.to_string();
        let ot = &other.tokens.to_string();
        st == ot
    }
}

impl Eq for DeriveValue {}

/// The contents of a `#[bindarg(..)]` attribute.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IntermediateAttributes {
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, Vec<DeriveValue>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Scalar,
    Optional,
    Switch,
    Collection { nargs: DeriveValue },
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveBinding {
    pub field_name: syn::Ident,
    pub flag: String,
    pub kind: FieldKind,
    pub required: bool,
    pub single_word: bool,
    pub help: Option<DeriveValue>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveOptions {
    pub struct_name: syn::Ident,
    pub bindings: Vec<DeriveBinding>,
}

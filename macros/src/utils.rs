//!
//! Utilities for the utility macros.
//!

use std::ops::Deref;

use proc_macro2::Span;
use syn::parse::{Parse, ParseStream};

use crate::type_traversal::index;

///
/// A lit str, but an error is raised
/// if it is empty.
///
pub struct NonEmptyStr(syn::LitStr);

impl Parse for NonEmptyStr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: syn::LitStr = input.parse()?;

        if lit.value().is_empty() {
            return Err(syn::Error::new(lit.span(), "This should not be empty."));
        }

        Ok(Self(lit))
    }
}

impl Deref for NonEmptyStr {
    type Target = syn::LitStr;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

///
/// Parameters of `#[ECMARef(name, url)]`.
///
pub struct ECMARef {
    name: NonEmptyStr,
    url: NonEmptyStr,
}

impl Parse for ECMARef {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name = input.parse()?;
        let _: syn::Token![,] = input.parse()?;
        let url = input.parse()?;

        Ok(Self { name, url })
    }
}

///
/// Things that can be turned into `#[doc = "..."]` attributes.
///
pub trait ToRustdoc {
    fn to_rustdoc(&self) -> Vec<syn::Attribute>;
}

impl ToRustdoc for ECMARef {
    fn to_rustdoc(&self) -> Vec<syn::Attribute> {
        let name = self.name.value();
        let url = self.url.value();

        [
            format!(" ## {name}"),
            String::new(),
            format!(" See the ECMAScript grammar for [{name}]({url})."),
            String::new(),
            " ***".to_string(),
            String::new(),
        ]
        .into_iter()
        .map(|line| {
            let line = syn::LitStr::new(&line, Span::call_site());
            syn::parse_quote!(#[doc = #line])
        })
        .collect()
    }
}

///
/// Returns the attribute list of any item that can carry documentation.
///
pub fn get_item_attrs(item: &mut syn::Item) -> Option<&mut Vec<syn::Attribute>> {
    Some(match item {
        syn::Item::Const(syn::ItemConst { attrs, .. })
        | syn::Item::Enum(syn::ItemEnum { attrs, .. })
        | syn::Item::Fn(syn::ItemFn { attrs, .. })
        | syn::Item::Mod(syn::ItemMod { attrs, .. })
        | syn::Item::Static(syn::ItemStatic { attrs, .. })
        | syn::Item::Struct(syn::ItemStruct { attrs, .. })
        | syn::Item::Trait(syn::ItemTrait { attrs, .. })
        | syn::Item::Type(syn::ItemType { attrs, .. })
        | syn::Item::Union(syn::ItemUnion { attrs, .. }) => attrs,
        _ => return None,
    })
}

///
/// Finds the first field of a struct whose type satisfies `pred`.
///
pub fn get_struct_member_where_type(
    st: &syn::ItemStruct,
    pred: impl Fn(&syn::Type) -> bool,
) -> Option<syn::Member> {
    match &st.fields {
        syn::Fields::Named(syn::FieldsNamed { named, .. }) => named.iter().find_map(|f| {
            if !pred(&f.ty) {
                return None;
            }
            f.ident.clone().map(syn::Member::Named)
        }),
        syn::Fields::Unnamed(syn::FieldsUnnamed { unnamed, .. }) => unnamed
            .iter()
            .enumerate()
            .find_map(|(i, f)| pred(&f.ty).then(|| syn::Member::Unnamed(index(i as u32)))),
        syn::Fields::Unit => None,
    }
}

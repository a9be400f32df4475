//!
//! Macros for the main crate.
//!

mod type_traversal;
mod utils;

use proc_macro::TokenStream as Tokens;
use quote::{quote, ToTokens};
use syn::parse_macro_input;
use type_traversal::{field_access, is_named_type, variant_path};
use utils::{get_item_attrs, get_struct_member_where_type, ECMARef, ToRustdoc};

///
/// ## ECMARef
///
/// Allows easy reference of the **ECMAScript** specification.
///
/// This macro will add an additional section at the top of the Rustdoc
/// for the item attached, linking to the relevant section in the specification.
///
/// ### Example
///
/// ```ignore
/// use toker_macros::ECMARef;
///
/// // You must always include an acompanying URL.
/// #[ECMARef("WhiteSpace", "https://262.ecma-international.org/5.1/#sec-7.2")]
/// struct WhiteSpace;
/// ```
///
#[allow(non_snake_case)]
#[proc_macro_attribute]
pub fn ECMARef(params: Tokens, target: Tokens) -> Tokens {
    let mut target: syn::Item = parse_macro_input!(target);
    let params: ECMARef = parse_macro_input!(params);
    let attrs = params.to_rustdoc();

    let Some(original_attrs) = get_item_attrs(&mut target) else {
        return syn::Error::new_spanned(target, "Cannot add an ECMAScript reference to this item.")
            .into_compile_error()
            .into();
    };

    // Prepend our new documentation to the start of
    // the attribute macros.
    *original_attrs = attrs
        .into_iter()
        .chain(original_attrs.iter().cloned())
        .collect();

    target.into_token_stream().into()
}

///
/// ## Spanned
///
/// Implements `crate::common::Spanned` for:
/// * structs with a field of type `Span`, and
/// * enums whose variants each wrap a single [Spanned] value.
///
#[proc_macro_derive(Spanned)]
pub fn spanned(target: Tokens) -> Tokens {
    let target: syn::Item = parse_macro_input!(target);

    let output = match target {
        syn::Item::Struct(st) => spanned_struct(st),
        syn::Item::Enum(en) => spanned_enum(en),
        other => syn::Error::new_spanned(other, "Spanned can only be derived for structs and enums.")
            .into_compile_error(),
    };

    output.into()
}

fn spanned_struct(st: syn::ItemStruct) -> proc_macro2::TokenStream {
    let Some(member) = get_struct_member_where_type(&st, |ty| is_named_type(ty, "Span").is_some())
    else {
        return syn::Error::new_spanned(&st.ident, "Expected a field of type `Span`.")
            .into_compile_error();
    };

    let ident = &st.ident;
    let access = field_access(member);
    let (impl_generics, ty_generics, where_clause) = st.generics.split_for_impl();

    quote! {
        impl #impl_generics crate::common::Spanned for #ident #ty_generics #where_clause {
            fn span(&self) -> crate::common::Span {
                #access
            }
        }
    }
}

fn spanned_enum(en: syn::ItemEnum) -> proc_macro2::TokenStream {
    let mut arms = vec![];

    for variant in &en.variants {
        match &variant.fields {
            syn::Fields::Unnamed(syn::FieldsUnnamed { unnamed, .. }) if unnamed.len() == 1 => {
                let path = variant_path(&variant.ident);
                arms.push(quote! {
                    #path(inner) => crate::common::Spanned::span(inner),
                });
            }
            _ => {
                return syn::Error::new_spanned(
                    variant,
                    "Each variant must wrap exactly one `Spanned` value.",
                )
                .into_compile_error();
            }
        }
    }

    let ident = &en.ident;
    let (impl_generics, ty_generics, where_clause) = en.generics.split_for_impl();

    quote! {
        impl #impl_generics crate::common::Spanned for #ident #ty_generics #where_clause {
            fn span(&self) -> crate::common::Span {
                match self {
                    #(#arms)*
                }
            }
        }
    }
}


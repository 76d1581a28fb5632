//! Mock struct generation.
//!
//! Renders the struct half of a mock: one public behavior-slot field per
//! method, each holding a boxed closure with the method's exact shape. Tests
//! overwrite these fields to script behavior.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::codegen::{fn_type_tokens, generic_decl_tokens};
use crate::model::{TraitInfo, TypeParamInfo};

/// Generates the mock struct for one trait.
///
/// The struct name is the trait name plus `suffix`. Fields appear in method
/// declaration order. Generic traits propagate their parameter list onto the
/// struct; a private marker field ties parameters no field mentions to the
/// struct so the declaration stays well-formed.
///
/// ## Examples
///
/// For a trait `Greeter` with method `fn greet(&self, name: String) -> String`:
///
/// ```ignore
/// pub struct GreeterMock {
///     /// Behavior slot for [`Greeter::greet`].
///     pub greet_fn: Box<dyn Fn(String) -> String>,
/// }
/// ```
pub fn generate_mock_struct(trait_info: &TraitInfo, suffix: &str) -> TokenStream {
    let mock_name = format_ident!("{}", trait_info.mock_name(suffix));
    let generics = generic_decl_tokens(&trait_info.generics, false);
    let fields = behavior_fields(trait_info);
    let marker = marker_field(&trait_info.generics);
    let doc_lines = struct_doc_lines(trait_info, suffix);

    quote! {
        #(#[doc = #doc_lines])*
        pub struct #mock_name #generics {
            #fields
            #marker
        }
    }
}

/// Generates one behavior-slot field per method, in declaration order.
fn behavior_fields(trait_info: &TraitInfo) -> TokenStream {
    let fields = trait_info.methods.iter().map(|method| {
        let field_name = format_ident!("{}", method.field_name());
        let fn_type = fn_type_tokens(method);
        let doc = format!(" Behavior slot for [`{}::{}`].", trait_info.name, method.name);
        quote! {
            #[doc = #doc]
            pub #field_name: #fn_type,
        }
    });
    quote! { #(#fields)* }
}

/// Generates the marker field tying unused type parameters to the struct.
fn marker_field(generics: &[TypeParamInfo]) -> TokenStream {
    if generics.is_empty() {
        return TokenStream::new();
    }
    let names = generics.iter().map(|param| format_ident!("{}", param.name));
    // fn-pointer phantom: no effect on auto traits or drop checking
    quote! {
        _marker: std::marker::PhantomData<fn() -> (#(#names),*)>,
    }
}

/// Builds the struct's doc comment lines (leading space for `///` rendering).
fn struct_doc_lines(trait_info: &TraitInfo, suffix: &str) -> Vec<String> {
    let mock_name = trait_info.mock_name(suffix);
    vec![
        format!(" Mock implementation of [`{}`].", trait_info.name),
        String::new(),
        " Each `*_fn` field holds the behavior for one trait method. Replace a".to_string(),
        format!(" field to script what the mock does; [`{}::new`] fills every", mock_name),
        " slot with a safe default.".to_string(),
    ]
}

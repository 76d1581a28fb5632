//! Trait implementation generation for mock structs.
//!
//! Renders the `impl Trait for TraitMock` block whose methods delegate
//! straight to the mock's behavior slots. The impl carries exactly the
//! declared generic bounds, so the mock satisfies the trait wherever the
//! trait itself is usable.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::codegen::{generic_args_tokens, generic_decl_tokens, return_type_tokens, type_tokens};
use crate::model::{MethodInfo, Receiver, TraitInfo};

/// Generates the delegating trait impl for one mock.
///
/// Each method re-states the extracted signature and forwards its arguments
/// to the matching `*_fn` field, so swapping the closure swaps the behavior
/// observed through the trait.
pub fn generate_trait_impl(trait_info: &TraitInfo, suffix: &str) -> TokenStream {
    let trait_name = format_ident!("{}", trait_info.name);
    let mock_name = format_ident!("{}", trait_info.mock_name(suffix));
    let decl = generic_decl_tokens(&trait_info.generics, false);
    let args = generic_args_tokens(&trait_info.generics);
    let methods = trait_info.methods.iter().map(delegating_method);

    quote! {
        impl #decl #trait_name #args for #mock_name #args {
            #(#methods)*
        }
    }
}

/// Generates one delegating method body.
fn delegating_method(method: &MethodInfo) -> TokenStream {
    let method_name = format_ident!("{}", method.name);
    let field_name = format_ident!("{}", method.field_name());
    let receiver = receiver_tokens(method.receiver);
    let params = method.params.iter().map(|param| {
        let name = format_ident!("{}", param.name);
        let ty = type_tokens(&param.ty);
        quote! { #name: #ty }
    });
    let args = method.params.iter().map(|param| {
        let name = format_ident!("{}", param.name);
        quote! { #name }
    });
    let return_clause = return_type_tokens(&method.returns);
    let doc = format!(" Forwards to the mock's `{}` slot.", method.field_name());

    quote! {
        #[doc = #doc]
        fn #method_name(#receiver, #(#params),*) #return_clause {
            (self.#field_name)(#(#args),*)
        }
    }
}

fn receiver_tokens(receiver: Receiver) -> TokenStream {
    match receiver {
        Receiver::Ref => quote! { &self },
        Receiver::RefMut => quote! { &mut self },
        Receiver::Owned => quote! { self },
    }
}

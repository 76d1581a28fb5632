//! Code generation for trait mocks.
//!
//! Each submodule renders one piece of a mock:
//!
//! - [`mock_struct`]: the struct with one behavior-slot field per method
//! - [`constructor`]: `new()` assigning safe default closures, plus `Default`
//! - [`trait_impl`]: the delegating `impl Trait for TraitMock`
//!
//! [`generate_mock`] combines the three for one trait. The shared helpers in
//! this module turn model strings back into tokens so every piece renders
//! types, signatures, and generics identically.

mod constructor;
mod mock_struct;
mod trait_impl;

pub use constructor::generate_constructor;
pub use mock_struct::generate_mock_struct;
pub use trait_impl::generate_trait_impl;

use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};

use crate::defaults::default_value_expr;
use crate::model::{MethodInfo, TraitInfo, TypeParamInfo};

/// Default suffix for generated mock type names.
pub const DEFAULT_MOCK_SUFFIX: &str = "Mock";

/// Immutable rendering configuration injected into the renderer.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Name of the module the source file defines, used in the generated
    /// module header. Usually the source file's stem.
    pub module_name: String,
    /// Suffix appended to trait names to form mock type names.
    pub suffix: String,
}

impl RenderOptions {
    /// Creates options for the given module name with the default suffix.
    pub fn new(module_name: &str) -> Self {
        Self {
            module_name: module_name.to_string(),
            suffix: DEFAULT_MOCK_SUFFIX.to_string(),
        }
    }

    /// Returns the options with a different mock suffix.
    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.suffix = suffix.to_string();
        self
    }
}

/// Generates the complete mock for one trait.
///
/// Emits, in order: the mock struct, its constructor and `Default` impl,
/// and the delegating trait impl.
pub fn generate_mock(trait_info: &TraitInfo, suffix: &str) -> TokenStream {
    let mock_struct = generate_mock_struct(trait_info, suffix);
    let constructor = generate_constructor(trait_info, suffix);
    let trait_impl = generate_trait_impl(trait_info, suffix);

    quote! {
        #mock_struct

        #constructor

        #trait_impl
    }
}

/// Renders a type name from the model as tokens.
///
/// An empty or `_` slot renders as the inferred type `_`: it parses
/// anywhere a type goes, and the hole stays visible to whoever hand-fixes
/// the degraded signature. Unparseable names fall back to `_` the same way.
pub fn type_tokens(name: &str) -> TokenStream {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return quote! { _ };
    }
    syn::parse_str::<syn::Type>(trimmed)
        .map(|ty| ty.into_token_stream())
        .unwrap_or_else(|_| quote! { _ })
}

/// Renders a type name for behavior-slot position.
///
/// Identical to [`type_tokens`] except that references gain a `'static`
/// lifetime: a boxed `Fn` cannot borrow from the mock's receiver, so slots
/// hold `&'static T` and the delegating method's elided lifetime accepts it
/// by coercion. The leak-based default satisfies the same bound.
pub fn slot_type_tokens(name: &str) -> TokenStream {
    let trimmed = name.trim();
    if let Some(inner) = trimmed.strip_prefix("&mut ") {
        let ty = type_tokens(inner);
        return quote! { &'static mut #ty };
    }
    if let Some(inner) = trimmed.strip_prefix('&') {
        let ty = type_tokens(inner);
        return quote! { &'static #ty };
    }
    type_tokens(trimmed)
}

/// Renders the `-> T` / `-> (T1, T2)` clause of a method signature.
///
/// No slots means no arrow; one slot is a bare type; several slots become a
/// tuple, mirroring how multi-value returns were declared.
pub fn return_type_tokens(returns: &[String]) -> TokenStream {
    render_return_clause(returns, type_tokens)
}

/// Renders the return clause for behavior-slot position ([`slot_type_tokens`]
/// applied per slot).
pub fn slot_return_type_tokens(returns: &[String]) -> TokenStream {
    render_return_clause(returns, slot_type_tokens)
}

fn render_return_clause(returns: &[String], render: fn(&str) -> TokenStream) -> TokenStream {
    match returns {
        [] => TokenStream::new(),
        [single] => {
            let ty = render(single);
            quote! { -> #ty }
        }
        multiple => {
            let types = multiple.iter().map(|name| render(name));
            quote! { -> (#(#types),*) }
        }
    }
}

/// Renders the boxed function type for one behavior slot.
///
/// The shape mirrors the method exactly: parameter types in order, return
/// clause per [`slot_return_type_tokens`].
pub fn fn_type_tokens(method: &MethodInfo) -> TokenStream {
    let param_types = method.params.iter().map(|param| type_tokens(&param.ty));
    let return_clause = slot_return_type_tokens(&method.returns);
    quote! { Box<dyn Fn(#(#param_types),*) #return_clause> }
}

/// Renders a generic parameter declaration list like `<T: Clone, R>`.
///
/// With `add_default` set, every parameter additionally gets a `Default`
/// bound; the constructor needs it to materialize placeholder values via
/// `T::default()`. Returns empty tokens for a non-generic trait.
pub fn generic_decl_tokens(generics: &[TypeParamInfo], add_default: bool) -> TokenStream {
    if generics.is_empty() {
        return TokenStream::new();
    }
    let params = generics.iter().map(|param| {
        let name = format_ident!("{}", param.name);
        match (bounds_tokens(&param.bounds), add_default) {
            (Some(bounds), true) => quote! { #name: #bounds + Default },
            (Some(bounds), false) => quote! { #name: #bounds },
            (None, true) => quote! { #name: Default },
            (None, false) => quote! { #name },
        }
    });
    quote! { <#(#params),*> }
}

/// Renders a generic argument list like `<T, R>` for type positions.
///
/// Returns empty tokens for a non-generic trait.
pub fn generic_args_tokens(generics: &[TypeParamInfo]) -> TokenStream {
    if generics.is_empty() {
        return TokenStream::new();
    }
    let names = generics.iter().map(|param| format_ident!("{}", param.name));
    quote! { <#(#names),*> }
}

/// Renders the synthesized default expression for one return slot.
pub fn default_expr_tokens(name: &str) -> TokenStream {
    default_value_expr(name)
        .parse()
        .unwrap_or_else(|_| quote! { Default::default() })
}

/// Renders the value a default closure returns.
///
/// One slot is the bare default expression; several slots join into a tuple
/// in positional order. No slots renders nothing (the closure body stays
/// empty).
pub fn default_return_tokens(returns: &[String]) -> TokenStream {
    match returns {
        [] => TokenStream::new(),
        [single] => default_expr_tokens(single),
        multiple => {
            let values = multiple.iter().map(|name| default_expr_tokens(name));
            quote! { (#(#values),*) }
        }
    }
}

fn bounds_tokens(bounds: &str) -> Option<TokenStream> {
    let trimmed = bounds.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

//! Constructor generation for mock structs.
//!
//! Renders `new()` and a delegating `Default` impl. Every behavior slot is
//! assigned a closure returning synthesized defaults, so a freshly built
//! mock answers every method without configuration.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::codegen::{default_return_tokens, generic_args_tokens, generic_decl_tokens, type_tokens};
use crate::model::{MethodInfo, TraitInfo, TypeParamInfo};

/// Generates `new()` and `Default` for one mock.
///
/// Generic traits get a `Default` bound added per type parameter on both
/// impls: the default closures materialize placeholder values for generic
/// return slots via `T::default()`. The trait impl elsewhere keeps only the
/// declared bounds, so constructing a mock is the only place the extra
/// bound applies.
///
/// ## Examples
///
/// For a trait `Greeter` with method `fn greet(&self, name: String) -> String`:
///
/// ```ignore
/// impl GreeterMock {
///     pub fn new() -> Self {
///         Self {
///             greet_fn: Box::new(|_name: String| String::new()),
///         }
///     }
/// }
///
/// impl Default for GreeterMock {
///     fn default() -> Self {
///         Self::new()
///     }
/// }
/// ```
pub fn generate_constructor(trait_info: &TraitInfo, suffix: &str) -> TokenStream {
    let mock_name = format_ident!("{}", trait_info.mock_name(suffix));
    let decl = generic_decl_tokens(&trait_info.generics, true);
    let args = generic_args_tokens(&trait_info.generics);
    let field_inits = default_field_inits(trait_info);
    let marker_init = marker_init(&trait_info.generics);
    let doc_lines = new_doc_lines(trait_info, suffix);

    quote! {
        impl #decl #mock_name #args {
            #(#[doc = #doc_lines])*
            pub fn new() -> Self {
                Self {
                    #field_inits
                    #marker_init
                }
            }
        }

        impl #decl Default for #mock_name #args {
            fn default() -> Self {
                Self::new()
            }
        }
    }
}

/// Generates the field initializers assigning default closures.
fn default_field_inits(trait_info: &TraitInfo) -> TokenStream {
    let inits = trait_info.methods.iter().map(|method| {
        let field_name = format_ident!("{}", method.field_name());
        let closure = default_closure_tokens(method);
        quote! { #field_name: Box::new(#closure), }
    });
    quote! { #(#inits)* }
}

/// Generates the default closure for one method.
///
/// Parameters keep their declared names (underscore-prefixed, they are
/// intentionally unused) and types, so the closure reads like the signature
/// it stands in for. The body returns one synthesized default per return
/// slot; zero slots produce an empty body.
fn default_closure_tokens(method: &MethodInfo) -> TokenStream {
    let params = method.params.iter().map(|param| {
        let name = format_ident!("_{}", param.name.trim_start_matches("r#"));
        let ty = type_tokens(&param.ty);
        quote! { #name: #ty }
    });
    let body = if method.returns.is_empty() {
        quote! { {} }
    } else {
        default_return_tokens(&method.returns)
    };
    quote! { |#(#params),*| #body }
}

/// Generates the marker initializer for generic mocks.
fn marker_init(generics: &[TypeParamInfo]) -> TokenStream {
    if generics.is_empty() {
        TokenStream::new()
    } else {
        quote! { _marker: std::marker::PhantomData, }
    }
}

/// Builds the constructor's doc comment lines.
fn new_doc_lines(trait_info: &TraitInfo, suffix: &str) -> Vec<String> {
    let mock_name = trait_info.mock_name(suffix);
    vec![
        format!(
            " Creates a [`{}`] with every behavior slot set to a safe default.",
            mock_name
        ),
        String::new(),
        " Unconfigured methods return placeholder values (zeroes, empty".to_string(),
        " strings, `Default::default()`), so a fresh mock never panics.".to_string(),
        " Override individual fields to script real behavior.".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ParamInfo, Receiver};

    fn pretty(tokens: TokenStream) -> String {
        prettyplease::unparse(&syn::parse2(tokens).unwrap())
    }

    fn make_method(name: &str, params: &[(&str, &str)], returns: &[&str]) -> MethodInfo {
        MethodInfo {
            name: name.to_string(),
            receiver: Receiver::Ref,
            params: params
                .iter()
                .map(|(param_name, ty)| ParamInfo {
                    name: param_name.to_string(),
                    ty: ty.to_string(),
                })
                .collect(),
            returns: returns.iter().map(|r| r.to_string()).collect(),
        }
    }

    fn make_trait(name: &str, methods: Vec<MethodInfo>) -> TraitInfo {
        TraitInfo {
            name: name.to_string(),
            generics: vec![],
            methods,
        }
    }

    fn make_generic_trait(name: &str, params: &[&str], methods: Vec<MethodInfo>) -> TraitInfo {
        TraitInfo {
            name: name.to_string(),
            generics: params
                .iter()
                .map(|p| TypeParamInfo {
                    name: p.to_string(),
                    bounds: String::new(),
                })
                .collect(),
            methods,
        }
    }

    #[test]
    fn new_assigns_a_boxed_closure_per_field() {
        let info = make_trait(
            "Foo",
            vec![
                make_method("bar", &[], &["Error"]),
                make_method("count", &[], &["i64"]),
            ],
        );
        let code = pretty(generate_constructor(&info, "Mock"));
        assert!(code.contains("pub fn new() -> Self"), "got:\n{}", code);
        assert!(code.contains("bar_fn: Box::new("), "got:\n{}", code);
        assert!(code.contains("count_fn: Box::new("), "got:\n{}", code);
        assert!(
            code.contains("Error::msg(\"not implemented\")"),
            "got:\n{}",
            code
        );
    }

    #[test]
    fn zero_return_method_gets_a_noop_closure() {
        let info = make_trait("Foo", vec![make_method("fire", &[], &[])]);
        let code = pretty(generate_constructor(&info, "Mock"));
        assert!(code.contains("fire_fn: Box::new(|| {})"), "got:\n{}", code);
    }

    #[test]
    fn closure_params_mirror_the_signature() {
        let info = make_trait(
            "Foo",
            vec![make_method("baz", &[("s", "String"), ("z", "i64")], &["bool"])],
        );
        let code = pretty(generate_constructor(&info, "Mock"));
        assert!(code.contains("|_s: String, _z: i64|"), "got:\n{}", code);
    }

    #[test]
    fn multi_slot_defaults_join_into_a_tuple() {
        let info = make_trait("Foo", vec![make_method("pair", &[], &["bool", "String"])]);
        let code = pretty(generate_constructor(&info, "Mock"));
        assert!(
            code.contains("(false, String::new())"),
            "got:\n{}",
            code
        );
    }

    #[test]
    fn default_impl_delegates_to_new() {
        let info = make_trait("Foo", vec![]);
        let code = pretty(generate_constructor(&info, "Mock"));
        assert!(code.contains("impl Default for FooMock"), "got:\n{}", code);
        assert!(code.contains("Self::new()"), "got:\n{}", code);
    }

    #[test]
    fn generic_constructor_adds_default_bounds() {
        let info = make_generic_trait("Store", &["T", "R"], vec![make_method("get", &[("key", "T")], &["R"])]);
        let code = pretty(generate_constructor(&info, "Mock"));
        assert!(
            code.contains("impl<T: Default, R: Default> StoreMock<T, R>"),
            "got:\n{}",
            code
        );
        assert!(
            code.contains("impl<T: Default, R: Default> Default for StoreMock<T, R>"),
            "got:\n{}",
            code
        );
        assert!(code.contains("R::default()"), "got:\n{}", code);
        assert!(
            code.contains("_marker: std::marker::PhantomData"),
            "got:\n{}",
            code
        );
    }

    #[test]
    fn declared_bounds_are_kept_alongside_default() {
        let info = TraitInfo {
            name: "Store".to_string(),
            generics: vec![TypeParamInfo {
                name: "T".to_string(),
                bounds: "Clone + Send".to_string(),
            }],
            methods: vec![],
        };
        let code = pretty(generate_constructor(&info, "Mock"));
        assert!(
            code.contains("impl<T: Clone + Send + Default> StoreMock<T>"),
            "got:\n{}",
            code
        );
    }

    #[test]
    fn constructor_docs_name_the_mock() {
        let info = make_trait("Foo", vec![]);
        let code = pretty(generate_constructor(&info, "Mock"));
        assert!(
            code.contains("/// Creates a [`FooMock`] with every behavior slot"),
            "got:\n{}",
            code
        );
    }

    #[test]
    fn unresolved_slot_defaults_generically() {
        let info = make_trait("Foo", vec![make_method("load", &[], &[""])]);
        let code = pretty(generate_constructor(&info, "Mock"));
        assert!(
            code.contains("load_fn: Box::new(|| Default::default())"),
            "got:\n{}",
            code
        );
    }
}

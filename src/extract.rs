//! Trait extraction from parsed Rust source.
//!
//! Walks the top-level items of a [`syn::File`] and builds a [`TraitInfo`]
//! for every trait whose shape can be mocked mechanically. Everything else
//! is skipped silently: mixing traits with structs, impls, and functions in
//! one file is the normal case, not an error.
//!
//! ## What counts as mockable
//!
//! A trait qualifies when its signature-level shape is plain:
//!
//! - no supertraits, no `where` clause, not `unsafe`, not `auto`
//! - generics are type parameters only (no lifetimes, no const generics)
//! - every item in the body is a method (provided bodies are fine; the
//!   generated impl overrides them)
//!
//! Within a qualifying trait, individual methods are skipped when they
//! cannot be expressed as a boxed behavior slot: no receiver, an exotic
//! receiver like `self: Box<Self>`, method-level generics or `where`
//! clauses, `async`/`unsafe`/`extern` qualifiers, or variadics.
//!
//! Parameter and return types reduce to plain names (`i64`, `Widget`) or
//! single-level references (`&Widget`, `&mut Widget`). A parameter whose
//! type is anything else is dropped from the model; a return slot in the
//! same situation is kept as an empty entry so later slots keep their
//! positions. `Self` is deliberately unresolvable: inside the generated
//! mock it would re-bind to the mock type and change meaning.

use std::collections::BTreeSet;

use quote::ToTokens;
use syn::{FnArg, Item, ItemTrait, Pat, ReturnType, TraitItem, TraitItemFn, Type};

use crate::errors::StubError;
use crate::model::{MethodInfo, ParamInfo, Receiver, TraitInfo, TypeParamInfo};

/// Parses one source unit into a syntax tree.
///
/// ## Errors
///
/// Returns [`StubError::Parse`] when the text is not valid Rust. This is the
/// pipeline's only fatal precondition; everything after it degrades instead
/// of failing.
pub fn parse_source(source: &str) -> Result<syn::File, StubError> {
    Ok(syn::parse_file(source)?)
}

/// Extracts every mockable trait from a parsed file, in declaration order.
///
/// When `filter` is non-empty, only traits whose names are in the set are
/// returned; an empty filter means no restriction. Names match exactly, no
/// case folding.
///
/// ## Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use traitstub::extract::{extract_traits, parse_source};
///
/// let file = parse_source("pub trait Greeter { fn greet(&self) -> String; }").unwrap();
/// let traits = extract_traits(&file, &BTreeSet::new());
/// assert_eq!(traits.len(), 1);
/// assert_eq!(traits[0].name, "Greeter");
/// ```
pub fn extract_traits(file: &syn::File, filter: &BTreeSet<String>) -> Vec<TraitInfo> {
    let mut traits = Vec::new();
    for item in &file.items {
        let Item::Trait(item_trait) = item else {
            continue;
        };
        let Some(info) = trait_info(item_trait) else {
            continue;
        };
        if !filter.is_empty() && !filter.contains(&info.name) {
            continue;
        }
        traits.push(info);
    }
    traits
}

/// Interprets one trait declaration as an interface shape.
///
/// Returns `None` when the trait as a whole does not qualify; individual
/// unmockable methods inside a qualifying trait are dropped instead.
fn trait_info(item: &ItemTrait) -> Option<TraitInfo> {
    if item.unsafety.is_some() || item.auto_token.is_some() {
        return None;
    }
    if !item.supertraits.is_empty() {
        return None;
    }
    if item.generics.where_clause.is_some() {
        return None;
    }
    let generics = type_params(&item.generics)?;

    let mut methods = Vec::new();
    for trait_item in &item.items {
        let TraitItem::Fn(method) = trait_item else {
            // Associated consts, types, or macros make the shape non-mockable
            return None;
        };
        if let Some(info) = method_info(method) {
            methods.push(info);
        }
    }

    Some(TraitInfo {
        name: item.ident.to_string(),
        generics,
        methods,
    })
}

/// Extracts generic type parameters, rejecting lifetime and const params.
fn type_params(generics: &syn::Generics) -> Option<Vec<TypeParamInfo>> {
    let mut params = Vec::new();
    for param in &generics.params {
        let syn::GenericParam::Type(type_param) = param else {
            return None;
        };
        let bounds = if type_param.bounds.is_empty() {
            String::new()
        } else {
            type_param.bounds.to_token_stream().to_string()
        };
        params.push(TypeParamInfo {
            name: type_param.ident.to_string(),
            bounds,
        });
    }
    Some(params)
}

/// Reduces one trait method to its model, or `None` when it cannot be
/// backed by a boxed behavior slot.
fn method_info(method: &TraitItemFn) -> Option<MethodInfo> {
    let sig = &method.sig;
    if sig.constness.is_some()
        || sig.asyncness.is_some()
        || sig.unsafety.is_some()
        || sig.abi.is_some()
        || sig.variadic.is_some()
    {
        return None;
    }
    if !sig.generics.params.is_empty() || sig.generics.where_clause.is_some() {
        return None;
    }
    let receiver = receiver_kind(sig)?;

    let mut params = Vec::new();
    for input in sig.inputs.iter().skip(1) {
        let FnArg::Typed(pat_type) = input else {
            continue;
        };
        let Pat::Ident(pat_ident) = pat_type.pat.as_ref() else {
            // Destructuring patterns have no single name to pair with
            continue;
        };
        let Some(ty) = type_name(&pat_type.ty) else {
            continue;
        };
        params.push(ParamInfo {
            name: pat_ident.ident.to_string(),
            ty,
        });
    }

    Some(MethodInfo {
        name: sig.ident.to_string(),
        receiver,
        params,
        returns: return_slots(&sig.output),
    })
}

/// Maps the method's receiver to its model form.
///
/// Plain `self`, `&self`, and `&mut self` qualify. A typed receiver
/// (`self: Box<Self>`) or a named-lifetime reference does not.
fn receiver_kind(sig: &syn::Signature) -> Option<Receiver> {
    let receiver = sig.receiver()?;
    if receiver.colon_token.is_some() {
        return None;
    }
    match &receiver.reference {
        Some((_, Some(_lifetime))) => None,
        Some((_, None)) => {
            if receiver.mutability.is_some() {
                Some(Receiver::RefMut)
            } else {
                Some(Receiver::Ref)
            }
        }
        None => Some(Receiver::Owned),
    }
}

/// Flattens a return type into positional slots.
///
/// `()` and a missing arrow both mean no slots. Tuples of arity two or more
/// contribute one slot per element; a 1-tuple is not the same type as its
/// element, so it degrades to a single unresolved slot rather than being
/// flattened.
fn return_slots(output: &ReturnType) -> Vec<String> {
    match output {
        ReturnType::Default => Vec::new(),
        ReturnType::Type(_, ty) => match ty.as_ref() {
            Type::Tuple(tuple) if tuple.elems.is_empty() => Vec::new(),
            Type::Tuple(tuple) if tuple.elems.len() >= 2 => tuple
                .elems
                .iter()
                .map(|elem| type_name(elem).unwrap_or_default())
                .collect(),
            Type::Tuple(_) => vec![String::new()],
            other => vec![type_name(other).unwrap_or_default()],
        },
    }
}

/// Resolves a type expression to a simple name, if it has one.
///
/// Accepted shapes: a bare single-segment path (`Widget`, `i64`, `T`) and a
/// single-level reference to one (`&Widget`, `&mut Widget`). Everything
/// else, including references with named lifetimes, returns `None`.
fn type_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(type_path) => path_name(type_path),
        Type::Reference(reference) => {
            if reference.lifetime.is_some() {
                return None;
            }
            let Type::Path(type_path) = reference.elem.as_ref() else {
                return None;
            };
            let inner = path_name(type_path)?;
            if reference.mutability.is_some() {
                Some(format!("&mut {}", inner))
            } else {
                Some(format!("&{}", inner))
            }
        }
        _ => None,
    }
}

/// Resolves a path type to its bare identifier, if it is one.
fn path_name(type_path: &syn::TypePath) -> Option<String> {
    if type_path.qself.is_some() {
        return None;
    }
    let path = &type_path.path;
    if path.leading_colon.is_some() || path.segments.len() != 1 {
        return None;
    }
    let segment = path.segments.first()?;
    match segment.arguments {
        syn::PathArguments::None => {}
        _ => return None,
    }
    let name = segment.ident.to_string();
    if name == "Self" {
        return None;
    }
    Some(name)
}

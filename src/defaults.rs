//! Safe default values for method return slots.
//!
//! When a mock is constructed, every behavior slot gets a closure that
//! returns placeholder values instead of panicking. This module decides what
//! those placeholders are: it classifies a type name into a small closed set
//! of kinds and maps each kind to a syntactically valid expression string.
//!
//! Classification is purely lexical. The extractor performs no semantic type
//! resolution, so an opaque name might be a struct, an alias, or a generic
//! placeholder; the fallback `T::default()` works uniformly for all three.
//!
//! ## Defaults by kind
//!
//! | Input | Expression |
//! |---|---|
//! | `bool` | `false` |
//! | `char` | `'\0'` |
//! | integer widths | `0` |
//! | `f32` / `f64` | `0.0` |
//! | `String` | `String::new()` |
//! | `&str` | `""` |
//! | `Complex32` / `Complex64` | `Complex32::new(0.0, 0.0)` etc. |
//! | `Error` | `Error::msg("not implemented")` |
//! | empty slot / `_` | `Default::default()` |
//! | `&T` / `&mut T` | `Box::leak(Box::new(T::default()))` |
//! | anything else | `T::default()` |

/// Integer type names that default to a bare `0` literal.
const INTEGER_TYPES: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
];

/// Float type names that default to a bare `0.0` literal.
const FLOAT_TYPES: &[&str] = &["f32", "f64"];

/// Complex number types (from the `num-complex` convention) that default to
/// a two-component zero construction.
const COMPLEX_TYPES: &[&str] = &["Complex32", "Complex64"];

/// Lexical kind of a type name, as far as the generator can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// `bool`
    Bool,
    /// `char`
    Char,
    /// Fixed-width and pointer-sized integers.
    Integer,
    /// `f32` and `f64`.
    Float,
    /// `Complex32` / `Complex64`.
    Complex,
    /// Owned `String`.
    OwnedString,
    /// Borrowed `&str`.
    BorrowedStr,
    /// The bare name `Error`.
    ErrorLike,
    /// An empty slot or the inferred type `_`.
    Placeholder,
    /// A single-level reference to a named type.
    Reference,
    /// Any other bare name: a user type or a generic parameter.
    Opaque,
}

/// Classifies a type name into its [`TypeKind`].
///
/// Total over arbitrary input: unknown names land in [`TypeKind::Opaque`],
/// never an error.
///
/// ## Examples
///
/// ```
/// use traitstub::defaults::{TypeKind, classify};
///
/// assert_eq!(classify("bool"), TypeKind::Bool);
/// assert_eq!(classify("&str"), TypeKind::BorrowedStr);
/// assert_eq!(classify("&Widget"), TypeKind::Reference);
/// assert_eq!(classify("Widget"), TypeKind::Opaque);
/// assert_eq!(classify(""), TypeKind::Placeholder);
/// ```
pub fn classify(name: &str) -> TypeKind {
    let name = name.trim();
    if name.is_empty() || name == "_" {
        return TypeKind::Placeholder;
    }
    if name == "&str" {
        return TypeKind::BorrowedStr;
    }
    if reference_target(name).is_some() {
        return TypeKind::Reference;
    }
    match name {
        "bool" => TypeKind::Bool,
        "char" => TypeKind::Char,
        "String" => TypeKind::OwnedString,
        "Error" => TypeKind::ErrorLike,
        n if INTEGER_TYPES.contains(&n) => TypeKind::Integer,
        n if FLOAT_TYPES.contains(&n) => TypeKind::Float,
        n if COMPLEX_TYPES.contains(&n) => TypeKind::Complex,
        _ => TypeKind::Opaque,
    }
}

/// Returns the safe default expression for a type name.
///
/// Total function: every input produces a non-empty, syntactically valid
/// expression string. The caller splices it into a generated closure body,
/// so the expression must stand alone (no statement context assumed).
///
/// ## Examples
///
/// ```
/// use traitstub::defaults::default_value_expr;
///
/// assert_eq!(default_value_expr("bool"), "false");
/// assert_eq!(default_value_expr("u32"), "0");
/// assert_eq!(default_value_expr("String"), "String::new()");
/// assert_eq!(default_value_expr("Widget"), "Widget::default()");
/// assert_eq!(
///     default_value_expr("&Widget"),
///     "Box::leak(Box::new(Widget::default()))"
/// );
/// ```
pub fn default_value_expr(name: &str) -> String {
    let name = name.trim();
    match classify(name) {
        TypeKind::Bool => "false".to_string(),
        TypeKind::Char => "'\\0'".to_string(),
        TypeKind::Integer => "0".to_string(),
        TypeKind::Float => "0.0".to_string(),
        TypeKind::Complex => format!("{}::new(0.0, 0.0)", name),
        TypeKind::OwnedString => "String::new()".to_string(),
        TypeKind::BorrowedStr => "\"\"".to_string(),
        TypeKind::ErrorLike => "Error::msg(\"not implemented\")".to_string(),
        TypeKind::Placeholder => "Default::default()".to_string(),
        TypeKind::Reference => {
            let target = reference_target(name).unwrap_or(name);
            format!("Box::leak(Box::new({}::default()))", target)
        }
        TypeKind::Opaque => format!("{}::default()", name),
    }
}

/// Strips a single leading reference marker, returning the target name.
///
/// `&mut ` must be tried before `&` so the mutable form is not read as a
/// reference to a name starting with "mut ".
fn reference_target(name: &str) -> Option<&str> {
    name.strip_prefix("&mut ")
        .or_else(|| name.strip_prefix('&'))
        .map(str::trim)
}

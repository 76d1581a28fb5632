//! Structural model of mockable traits.
//!
//! These types are the language-neutral description the extractor builds and
//! the renderer consumes: one [`TraitInfo`] per interface-shaped trait, with
//! its generic parameters and method signatures flattened to plain strings.
//! Nothing here touches `syn` types; signature shapes are reduced to names
//! during extraction so rendering is a pure read over string data.

/// One interface-shaped trait declaration.
///
/// Built once during extraction and never mutated afterwards. Method order
/// matches declaration order so generated output is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitInfo {
    /// The trait's declared name.
    pub name: String,
    /// Declared generic type parameters, in declaration order.
    pub generics: Vec<TypeParamInfo>,
    /// Method signatures, in declaration order.
    pub methods: Vec<MethodInfo>,
}

impl TraitInfo {
    /// Returns the name of the generated mock type for this trait.
    ///
    /// ## Examples
    ///
    /// ```
    /// use traitstub::model::TraitInfo;
    ///
    /// let info = TraitInfo {
    ///     name: "Store".to_string(),
    ///     generics: vec![],
    ///     methods: vec![],
    /// };
    /// assert_eq!(info.mock_name("Mock"), "StoreMock");
    /// ```
    pub fn mock_name(&self, suffix: &str) -> String {
        format!("{}{}", self.name, suffix)
    }
}

/// A generic type parameter and its declared bounds.
///
/// An unconstrained parameter has an empty `bounds` string; a constrained
/// one carries the bound list verbatim (e.g. `"Clone + Send"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParamInfo {
    pub name: String,
    pub bounds: String,
}

/// One method signature inside a mockable trait.
///
/// Parameter order and return-slot order are significant: they define the
/// calling convention and round-trip into generated code verbatim. A return
/// slot holding an empty string is a signature piece the extractor could not
/// reduce to a simple name; it renders as the inferred type `_` so the
/// output stays parseable and the hole is visible to whoever fixes it up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodInfo {
    /// The method name.
    pub name: String,
    /// The receiver form the delegating method must re-emit.
    pub receiver: Receiver,
    /// Named parameters whose types resolved to simple names.
    pub params: Vec<ParamInfo>,
    /// Positional return slots; empty string marks an unresolved slot.
    pub returns: Vec<String>,
}

impl MethodInfo {
    /// Returns the name of the behavior-slot field backing this method.
    pub fn field_name(&self) -> String {
        format!("{}_fn", self.name)
    }
}

/// Receiver form of a trait method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receiver {
    /// `&self`
    Ref,
    /// `&mut self`
    RefMut,
    /// `self`
    Owned,
}

/// A parameter binding: a name paired with its resolved type name.
///
/// The type name may be reference-qualified (`&T` or `&mut T`); anything the
/// extractor could not reduce to such a shape never becomes a `ParamInfo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamInfo {
    pub name: String,
    pub ty: String,
}

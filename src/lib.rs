//! Trait mock generator library.
//!
//! This crate scans Rust source files for mockable trait declarations and
//! generates hand-editable mock implementations for them. For each trait
//! the generated code includes:
//!
//! - A mock struct with one public behavior slot (boxed closure) per method
//! - A `new()` constructor assigning safe default closures to every slot
//! - A `Default` impl delegating to `new()`
//! - An `impl Trait for TraitMock` whose methods forward to the slots
//!
//! A fresh mock answers every method with synthesized defaults (zeroes,
//! empty strings, `Default::default()`), so tests only script the methods
//! they care about.
//!
//! ## Modules
//!
//! - [`extract`] - syn-based discovery of mockable trait declarations
//! - [`model`] - Language-neutral description of extracted traits
//! - [`defaults`] - Default value synthesis per return type
//! - [`codegen`] - Code generation for structs, constructors, and trait impls
//! - [`validation`] - Suffix and mock name collision checks
//! - [`output`] - Final assembly, validation, formatting, and file writing
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```
//! use std::collections::BTreeSet;
//! use traitstub::codegen::RenderOptions;
//! use traitstub::output::generate_mocks;
//!
//! let source = r#"
//!     pub trait Greeter {
//!         fn greet(&self, name: String) -> String;
//!     }
//! "#;
//!
//! let options = RenderOptions::new("greeter");
//! let code = generate_mocks(source, &BTreeSet::new(), &options).unwrap();
//! assert!(code.contains("pub struct GreeterMock"));
//! ```
//!
//! ## Generated Code Structure
//!
//! For a trait `Greeter` with method `fn greet(&self, name: String) -> String`:
//!
//! ```text
//! pub struct GreeterMock {
//!     pub greet_fn: Box<dyn Fn(String) -> String>,
//! }
//!
//! impl GreeterMock {
//!     pub fn new() -> Self {
//!         Self {
//!             greet_fn: Box::new(|_name: String| String::new()),
//!         }
//!     }
//! }
//!
//! impl Default for GreeterMock {
//!     fn default() -> Self {
//!         Self::new()
//!     }
//! }
//!
//! impl Greeter for GreeterMock {
//!     fn greet(&self, name: String) -> String {
//!         (self.greet_fn)(name)
//!     }
//! }
//! ```
//!
//! Traits that do not fit the mockable shape (supertraits, associated
//! items, generic methods) are skipped silently, as are method parameters
//! and return types outside the supported forms. The generated code is
//! meant to be read and edited, so degraded spots surface as visible
//! holes rather than failures.

pub mod codegen;
pub mod defaults;
pub mod errors;
pub mod extract;
pub mod model;
pub mod output;
pub mod validation;

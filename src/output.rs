//! Output assembly and file writing for generated mocks.
//!
//! This module handles the final phase of generation: assembling the mocks
//! for every selected trait into a complete Rust module, validating the
//! output, formatting it, and writing it to disk atomically.
//!
//! ## Output Structure
//!
//! The generator produces one module file per source file:
//! ```text
//! //! Generated mocks for the `store` module.
//! use super::*;
//!
//! pub struct StoreMock { ... }
//! impl StoreMock { ... }
//! impl Store for StoreMock { ... }
//! ```
//!
//! ## Safety Guarantees
//!
//! - **Validation**: All generated code is re-parsed with `syn` before writing
//! - **Formatting**: Output is formatted with `prettyplease` for consistent style
//! - **Atomic writes**: Uses temp file + rename pattern to prevent partial writes

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use proc_macro2::TokenStream;
use quote::quote;

use crate::codegen::{RenderOptions, generate_mock};
use crate::errors::StubError;
use crate::extract::{extract_traits, parse_source};
use crate::model::TraitInfo;
use crate::validation::{check_collisions, validate_suffix};

/// Assembles the full mock module for the selected traits.
///
/// The module starts with documentation and a `use super::*;` header so the
/// generated code can live as a child module of the file it was derived
/// from, seeing the same names the original trait declarations see. The
/// mocks follow in source declaration order.
///
/// ## Arguments
///
/// * `traits` - Extracted traits, already filtered, in declaration order
/// * `options` - Module name and mock suffix to render with
///
/// ## Returns
///
/// A TokenStream containing the complete module code.
pub fn assemble_mock_module(traits: &[TraitInfo], options: &RenderOptions) -> TokenStream {
    let module_docs = module_docs(traits, options);
    let mocks: TokenStream = traits
        .iter()
        .map(|trait_info| generate_mock(trait_info, &options.suffix))
        .collect();

    quote! {
        #module_docs

        use super::*;

        #mocks
    }
}

/// Builds the module-level documentation.
///
/// Emitted as inner `doc` attributes so the text survives the quote/parse
/// round trip; `prettyplease` renders them back as `//!` comments. Includes
/// a trait index when at least one mock was generated.
fn module_docs(traits: &[TraitInfo], options: &RenderOptions) -> TokenStream {
    let mut lines = vec![
        format!(" Generated mocks for the `{}` module.", options.module_name),
        String::new(),
        " Each mock pairs a struct with one public behavior slot per trait".to_string(),
        " method. Construct one with `new()` or `Default::default()`, then".to_string(),
        " overwrite individual slots to script behavior.".to_string(),
    ];

    if !traits.is_empty() {
        lines.push(String::new());
        lines.push(" ## Mocked traits".to_string());
        lines.push(String::new());
        for trait_info in traits {
            lines.push(format!(
                " - [`{}`] mocks [`{}`]",
                trait_info.mock_name(&options.suffix),
                trait_info.name
            ));
        }
    }

    let docs = lines.iter().map(|line| quote! { #![doc = #line] });
    quote! { #(#docs)* }
}

/// Validates generated code using syn.
///
/// Parses the token stream as a complete Rust file to ensure it is
/// syntactically valid before formatting or writing.
///
/// ## Errors
///
/// Returns [`StubError::Render`] if the code fails to parse.
pub fn validate_code(tokens: &TokenStream) -> Result<syn::File, StubError> {
    syn::parse2(tokens.clone()).map_err(|e| StubError::Render {
        reason: e.to_string(),
    })
}

/// Formats generated code using prettyplease.
///
/// Converts a parsed syn::File back to a nicely formatted string,
/// prepending an auto-generated notice as a regular comment.
pub fn format_code(file: &syn::File) -> String {
    let formatted = prettyplease::unparse(file);
    format!(
        "// This code was automatically generated by traitstub. Do not edit manually.\n\n{}",
        formatted
    )
}

/// Writes content to a file atomically using temp file + rename.
///
/// This pattern ensures that:
/// - The file is never left in a partially-written state
/// - Other processes see either the old or new content, never a mix
///
/// ## Errors
///
/// Returns [`StubError::Write`] if:
/// - Parent directories cannot be created
/// - The temp file cannot be written
/// - The rename operation fails
pub fn write_atomic(path: &Path, content: &str) -> Result<(), StubError> {
    // Create parent directories if needed
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| StubError::Write {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    // Write to temp file first
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| StubError::Write {
        path: temp_path.clone(),
        source: e,
    })?;

    // Atomically rename to final path
    fs::rename(&temp_path, path).map_err(|e| StubError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Generates formatted mock code for one source unit.
///
/// This is the main library entry point. It runs the whole pipeline:
/// suffix validation, parsing, trait extraction and filtering, collision
/// checking, assembly, validity re-parse, and formatting. An empty filter
/// selects every mockable trait.
///
/// Output is deterministic: the same source, filter, and options always
/// produce byte-identical code.
///
/// ## Arguments
///
/// * `source` - Rust source text to scan for mockable traits
/// * `filter` - Exact trait names to keep; empty means keep all
/// * `options` - Module name and mock suffix to render with
///
/// ## Returns
///
/// The formatted module code, ready to write to a file.
///
/// ## Errors
///
/// Returns an error if the suffix is invalid, the source does not parse,
/// a mock name collides with a declared type, or assembly produces invalid
/// Rust.
pub fn generate_mocks(
    source: &str,
    filter: &BTreeSet<String>,
    options: &RenderOptions,
) -> Result<String, StubError> {
    validate_suffix(&options.suffix)?;
    let file = parse_source(source)?;
    let traits = extract_traits(&file, filter);
    check_collisions(&file, &traits, &options.suffix)?;
    let tokens = assemble_mock_module(&traits, options);
    let module = validate_code(&tokens)?;
    Ok(format_code(&module))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SOURCE: &str = r#"
        pub trait Greeter {
            fn greet(&self, name: String) -> String;
            fn wave(&self);
        }

        pub trait Counter {
            fn count(&self) -> i64;
        }
    "#;

    fn default_options() -> RenderOptions {
        RenderOptions::new("fixtures")
    }

    fn no_filter() -> BTreeSet<String> {
        BTreeSet::new()
    }

    // === assemble_mock_module tests ===

    #[test]
    fn assemble_includes_all_components() {
        let file = parse_source(SOURCE).unwrap();
        let traits = extract_traits(&file, &no_filter());
        let tokens = assemble_mock_module(&traits, &default_options());
        let code = tokens.to_string();

        assert!(code.contains("use super :: *"), "got:\n{}", code);
        assert!(code.contains("GreeterMock"), "got:\n{}", code);
        assert!(code.contains("CounterMock"), "got:\n{}", code);
        assert!(code.contains("impl Greeter for GreeterMock"), "got:\n{}", code);
    }

    #[test]
    fn assemble_with_no_traits_still_has_header() {
        let tokens = assemble_mock_module(&[], &default_options());
        let code = tokens.to_string();

        assert!(code.contains("use super :: *"), "got:\n{}", code);
        assert!(!code.contains("struct"), "got:\n{}", code);
    }

    // === validate_code tests ===

    #[test]
    fn validate_code_accepts_assembled_module() {
        let file = parse_source(SOURCE).unwrap();
        let traits = extract_traits(&file, &no_filter());
        let tokens = assemble_mock_module(&traits, &default_options());

        assert!(validate_code(&tokens).is_ok());
    }

    #[test]
    fn validate_code_rejects_invalid_code() {
        // Valid tokens, but not a valid Rust file
        let invalid_tokens = quote! {
            let x =
        };

        let result = validate_code(&invalid_tokens);
        match result {
            Err(StubError::Render { .. }) => {}
            Err(other) => panic!("Unexpected error type: {:?}", other),
            Ok(_) => panic!("Expected error but got success"),
        }
    }

    // === format_code tests ===

    #[test]
    fn format_code_prepends_generated_notice() {
        let file = parse_source(SOURCE).unwrap();
        let traits = extract_traits(&file, &no_filter());
        let tokens = assemble_mock_module(&traits, &default_options());
        let module = validate_code(&tokens).unwrap();

        let formatted = format_code(&module);
        assert!(formatted.starts_with(
            "// This code was automatically generated by traitstub. Do not edit manually."
        ));
    }

    #[test]
    fn format_code_produces_readable_output() {
        let file = parse_source(SOURCE).unwrap();
        let traits = extract_traits(&file, &no_filter());
        let tokens = assemble_mock_module(&traits, &default_options());
        let module = validate_code(&tokens).unwrap();

        let formatted = format_code(&module);
        assert!(formatted.contains("//! Generated mocks for the `fixtures` module."));
        assert!(formatted.contains("use super::*;"));
        assert!(formatted.contains("pub struct GreeterMock"));
    }

    // === write_atomic tests ===

    #[test]
    fn write_atomic_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("mocks.rs");

        let content = "// Test content";
        write_atomic(&file_path, content).unwrap();

        assert!(file_path.exists());
        assert_eq!(fs::read_to_string(&file_path).unwrap(), content);
    }

    #[test]
    fn write_atomic_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nested/deep/mocks.rs");

        write_atomic(&file_path, "// Nested content").unwrap();

        assert!(file_path.exists());
    }

    #[test]
    fn write_atomic_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("existing.rs");

        fs::write(&file_path, "// Old content").unwrap();
        write_atomic(&file_path, "// New content").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "// New content");
    }

    #[test]
    fn write_atomic_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("clean.rs");

        write_atomic(&file_path, "// Content").unwrap();

        let temp_path = file_path.with_extension("tmp");
        assert!(!temp_path.exists());
    }

    // === generate_mocks tests ===

    #[test]
    fn generate_mocks_runs_the_full_pipeline() {
        let code = generate_mocks(SOURCE, &no_filter(), &default_options()).unwrap();

        assert!(code.starts_with("// This code was automatically generated"));
        assert!(code.contains("pub struct GreeterMock"));
        assert!(code.contains("pub struct CounterMock"));
        assert!(code.contains("impl Counter for CounterMock"));
    }

    #[test]
    fn generate_mocks_is_deterministic() {
        let first = generate_mocks(SOURCE, &no_filter(), &default_options()).unwrap();
        let second = generate_mocks(SOURCE, &no_filter(), &default_options()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn generate_mocks_lists_mocked_traits_in_docs() {
        let code = generate_mocks(SOURCE, &no_filter(), &default_options()).unwrap();

        assert!(code.contains("//! ## Mocked traits"), "got:\n{}", code);
        assert!(
            code.contains("//! - [`GreeterMock`] mocks [`Greeter`]"),
            "got:\n{}",
            code
        );
    }

    #[test]
    fn generate_mocks_with_no_traits_emits_header_only() {
        let code = generate_mocks("pub struct Widget;", &no_filter(), &default_options()).unwrap();

        assert!(code.contains("use super::*;"), "got:\n{}", code);
        assert!(!code.contains("pub struct WidgetMock"), "got:\n{}", code);
        assert!(!code.contains("## Mocked traits"), "got:\n{}", code);
    }

    #[test]
    fn generate_mocks_rejects_invalid_source() {
        let result = generate_mocks("pub trait {", &no_filter(), &default_options());

        assert!(matches!(result, Err(StubError::Parse { .. })));
    }

    #[test]
    fn generate_mocks_rejects_invalid_suffix() {
        let options = RenderOptions::new("fixtures").with_suffix("mock");
        let result = generate_mocks(SOURCE, &no_filter(), &options);

        assert!(matches!(result, Err(StubError::InvalidSuffix { .. })));
    }

    #[test]
    fn generate_mocks_rejects_name_collisions() {
        let source = r#"
            pub trait Greeter {
                fn greet(&self) -> String;
            }
            pub struct GreeterMock;
        "#;
        let result = generate_mocks(source, &no_filter(), &default_options());

        assert!(matches!(result, Err(StubError::NameCollision { .. })));
    }

    #[test]
    fn generate_mocks_collision_avoided_by_other_suffix() {
        let source = r#"
            pub trait Greeter {
                fn greet(&self) -> String;
            }
            pub struct GreeterMock;
        "#;
        let options = RenderOptions::new("fixtures").with_suffix("Stub");
        let code = generate_mocks(source, &no_filter(), &options).unwrap();

        assert!(code.contains("pub struct GreeterStub"), "got:\n{}", code);
    }

    #[test]
    fn generate_mocks_honors_the_filter() {
        let filter: BTreeSet<String> = ["Counter".to_string()].into_iter().collect();
        let code = generate_mocks(SOURCE, &filter, &default_options()).unwrap();

        assert!(code.contains("pub struct CounterMock"), "got:\n{}", code);
        assert!(!code.contains("GreeterMock"), "got:\n{}", code);
    }
}

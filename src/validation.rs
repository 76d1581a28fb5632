//! Pre-render validation of generation inputs.
//!
//! Catches configuration problems before any code is emitted: a suffix that
//! would produce non-identifier mock names, and mock names that collide
//! with types the source file already declares.

use std::collections::BTreeSet;

use crate::errors::StubError;
use crate::model::TraitInfo;

/// Validates the configured mock suffix.
///
/// The suffix is appended verbatim to trait names, so it must keep the
/// result a conventional Rust type identifier: non-empty, ASCII
/// alphanumeric, starting with an uppercase letter.
pub fn validate_suffix(suffix: &str) -> Result<(), StubError> {
    if suffix.is_empty() {
        return Err(StubError::InvalidSuffix {
            suffix: suffix.to_string(),
            reason: "suffix must not be empty".to_string(),
        });
    }
    if !suffix.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(StubError::InvalidSuffix {
            suffix: suffix.to_string(),
            reason: "suffix must contain only ASCII letters and digits".to_string(),
        });
    }
    if !suffix.starts_with(|c: char| c.is_ascii_uppercase()) {
        return Err(StubError::InvalidSuffix {
            suffix: suffix.to_string(),
            reason: "suffix must start with an uppercase letter".to_string(),
        });
    }
    Ok(())
}

/// Checks that no generated mock name collides with a declared type.
///
/// Only traits selected for generation are checked. A file declaring
/// `FooMock` next to trait `Foo` would otherwise produce two conflicting
/// definitions in the caller's namespace.
pub fn check_collisions(
    file: &syn::File,
    traits: &[TraitInfo],
    suffix: &str,
) -> Result<(), StubError> {
    let declared = declared_type_names(file);
    for trait_info in traits {
        let mock = trait_info.mock_name(suffix);
        if declared.contains(&mock) {
            return Err(StubError::NameCollision {
                mock,
                trait_name: trait_info.name.clone(),
            });
        }
    }
    Ok(())
}

/// Collects every top-level type name the file declares.
fn declared_type_names(file: &syn::File) -> BTreeSet<String> {
    file.items
        .iter()
        .filter_map(|item| match item {
            syn::Item::Struct(item) => Some(item.ident.to_string()),
            syn::Item::Enum(item) => Some(item.ident.to_string()),
            syn::Item::Trait(item) => Some(item.ident.to_string()),
            syn::Item::Type(item) => Some(item.ident.to_string()),
            syn::Item::Union(item) => Some(item.ident.to_string()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use crate::extract::{extract_traits, parse_source};

    // === validate_suffix tests ===

    #[test]
    fn default_suffix_is_accepted() {
        assert!(validate_suffix("Mock").is_ok());
    }

    #[test]
    fn alphanumeric_suffix_is_accepted() {
        assert!(validate_suffix("Stub2").is_ok());
    }

    #[test]
    fn empty_suffix_is_rejected() {
        let err = validate_suffix("").unwrap_err();
        assert!(matches!(err, StubError::InvalidSuffix { .. }));
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn non_alphanumeric_suffix_is_rejected() {
        let err = validate_suffix("Mock_").unwrap_err();
        assert!(err.to_string().contains("ASCII letters and digits"));
    }

    #[test]
    fn lowercase_suffix_is_rejected() {
        let err = validate_suffix("mock").unwrap_err();
        assert!(err.to_string().contains("uppercase letter"));
    }

    // === check_collisions tests ===

    fn traits_of(source: &str) -> (syn::File, Vec<TraitInfo>) {
        let file = parse_source(source).unwrap();
        let traits = extract_traits(&file, &BTreeSet::new());
        (file, traits)
    }

    #[test]
    fn distinct_names_pass() {
        let (file, traits) = traits_of(
            r#"
            pub trait Foo {
                fn bar(&self) -> bool;
            }
            pub struct Widget;
            "#,
        );
        assert!(check_collisions(&file, &traits, "Mock").is_ok());
    }

    #[test]
    fn declared_struct_with_mock_name_collides() {
        let (file, traits) = traits_of(
            r#"
            pub trait Foo {
                fn bar(&self) -> bool;
            }
            pub struct FooMock;
            "#,
        );
        let err = check_collisions(&file, &traits, "Mock").unwrap_err();
        assert!(matches!(
            err,
            StubError::NameCollision { ref mock, ref trait_name }
                if mock == "FooMock" && trait_name == "Foo"
        ));
        assert!(err.to_string().contains("--suffix"));
    }

    #[test]
    fn declared_trait_with_mock_name_collides() {
        let (file, traits) = traits_of(
            r#"
            pub trait Foo {
                fn bar(&self) -> bool;
            }
            pub trait FooMock {
                fn bar(&self) -> bool;
            }
            "#,
        );
        let err = check_collisions(&file, &[traits[0].clone()], "Mock").unwrap_err();
        assert!(matches!(err, StubError::NameCollision { .. }));
    }

    #[test]
    fn collision_with_unselected_trait_is_ignored() {
        let (file, all) = traits_of(
            r#"
            pub trait Foo {
                fn bar(&self) -> bool;
            }
            pub struct FooMock;
            pub trait Quiet {
                fn hum(&self) -> bool;
            }
            "#,
        );
        let selected: Vec<_> = all
            .iter()
            .filter(|t| t.name == "Quiet")
            .cloned()
            .collect();
        assert!(check_collisions(&file, &selected, "Mock").is_ok());
    }

    #[test]
    fn alternate_suffix_avoids_the_collision() {
        let (file, traits) = traits_of(
            r#"
            pub trait Foo {
                fn bar(&self) -> bool;
            }
            pub struct FooMock;
            "#,
        );
        assert!(check_collisions(&file, &traits, "Stub").is_ok());
    }
}

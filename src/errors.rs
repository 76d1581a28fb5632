//! Error types for the mock generator.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating trait mocks.
#[derive(Debug, Error)]
pub enum StubError {
    /// The source unit could not be parsed as Rust code
    #[error("Failed to parse source: {source}")]
    Parse {
        #[from]
        source: syn::Error,
    },

    /// The source file could not be read
    #[error("Failed to read source file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the generated output
    #[error("Failed to write output file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Assembled output failed the validity re-parse before formatting
    #[error("Generated code is invalid: {reason}")]
    Render { reason: String },

    /// Invalid mock suffix configuration.
    ///
    /// The suffix must be alphanumeric with a leading uppercase letter so
    /// every generated mock name is a conventional Rust type identifier.
    #[error("Invalid mock suffix '{suffix}': {reason}")]
    InvalidSuffix {
        /// The invalid suffix value.
        suffix: String,
        /// Explanation of why the suffix is invalid.
        reason: String,
    },

    /// Naming collision between a generated mock and an existing declaration.
    ///
    /// This occurs when suffixing a trait name produces a name the source
    /// file already declares (e.g., trait "Foo" + suffix "Mock" while the
    /// file also declares a "FooMock" type).
    #[error(
        "Mock name '{mock}' for trait '{trait_name}' is already declared in the source file. Suggestion: pick a different --suffix"
    )]
    NameCollision {
        /// The generated mock name that conflicts.
        mock: String,
        /// The trait whose mock caused the conflict.
        trait_name: String,
    },
}

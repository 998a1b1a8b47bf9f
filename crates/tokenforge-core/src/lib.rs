//! Tokenforge core — deterministic design token compiler and validator
//!
//! Turns a structured token document into portable build artifacts and
//! statically analyzes it for correctness and accessibility problems.
//!
//! # Architecture
//!
//! ```text
//! Token Document → CSS Emitter ──────┐
//!              └─→ Config Emitter ───┤
//!                                    ├─→ Size Calculator
//!                                    ↓
//!                                Validator → findings + artifacts
//! ```
//!
//! # Guarantees
//!
//! - **Deterministic**: same document always produces byte-identical
//!   artifacts
//! - **Pure**: no I/O, no global state; every call is independently
//!   re-entrant and the input document is never mutated
//! - **Non-blocking**: malformed documents still emit best-effort
//!   artifacts; problems surface as findings, never as panics

pub mod color;
pub mod config;
pub mod css;
pub mod document;
pub mod error;
pub mod size;
pub mod validator;

pub use document::TokenDocument;
pub use error::{Error, Result};
pub use validator::{Category, Finding, Severity, ValidationResult};

/// Everything one compiler run produces: both artifacts plus the
/// validation findings computed against them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOutput {
    pub css: String,
    pub config: String,
    pub validation: ValidationResult,
}

/// Run the full pipeline over a document: emit both artifacts, then
/// validate the document against them.
pub fn compile(doc: &TokenDocument) -> CompileOutput {
    let css = css::emit_css(doc);
    let config = config::emit_config(doc);
    let validation = validator::validate(doc, &css, &config);
    CompileOutput {
        css,
        config,
        validation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_default_document() {
        let out = compile(&TokenDocument::default());
        assert!(out.css.starts_with(":root {"));
        assert!(out.config.contains("export default"));
        assert!(out.validation.is_valid());
        // The default primary-on-white contrast is below AA, so exactly
        // one warning-severity contrast finding is expected.
        assert_eq!(out.validation.warnings().len(), 1);
    }

    #[test]
    fn test_determinism_100_iterations() {
        let doc = TokenDocument::default();
        let first = compile(&doc);
        for i in 0..100 {
            let result = compile(&doc);
            assert_eq!(first.css, result.css, "CSS drift at iteration {}", i);
            assert_eq!(first.config, result.config, "config drift at iteration {}", i);
            assert_eq!(
                first.validation, result.validation,
                "validation drift at iteration {}",
                i
            );
        }
    }

    #[test]
    fn test_compile_does_not_mutate_input() {
        let doc = TokenDocument::default();
        let before = doc.clone();
        let _ = compile(&doc);
        assert_eq!(doc, before);
    }

    #[test]
    fn test_broken_document_still_emits_artifacts() {
        let mut doc = TokenDocument::default();
        doc.colors.primary.remove("500");
        doc.colors.background = "not-a-color".to_string();
        let out = compile(&doc);
        assert!(!out.validation.is_valid());
        assert!(!out.css.is_empty());
        assert!(!out.config.is_empty());
    }
}

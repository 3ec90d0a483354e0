/*
 * error.rs
 * Copyright (c) 2025 Shutter Gallery contributors
 */

//! Error types for template loading, parsing and rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during template operations.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The named template file does not exist in the store.
    #[error("template not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// A conditional marker was opened but never closed.
    #[error("unterminated conditional 'IF {name}' opened at offset {offset}")]
    UnterminatedConditional { name: String, offset: usize },

    /// A repeatable block marker was opened but never closed.
    #[error("unterminated block 'BLOCK {name}' opened at offset {offset}")]
    UnterminatedBlock { name: String, offset: usize },

    /// A close marker does not match the innermost open marker.
    #[error("mismatched close marker: expected close for '{opened}', found '{found}'")]
    MismatchedClose { opened: String, found: String },

    /// A close marker appeared with no open marker at all.
    #[error("stray close marker '{marker}' has no matching open marker")]
    StrayClose { marker: String },

    /// I/O error while reading a template file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

//! Core error types for the rendering pipeline
//!
//! This module defines common error types used throughout the Markdown
//! rendering pipeline.

use thiserror::Error;

/// Core error types for Markdown rendering
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unknown front matter render mode: {mode}")]
    UnknownFrontMatterMode { mode: String },

    #[error("Unknown front matter format: {format}")]
    UnknownFrontMatterFormat { format: String },

    #[error("Transform error in '{transform}': {message}")]
    TransformError { transform: String, message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl RenderError {
    /// Create a new unknown front matter mode error
    pub fn unknown_mode(mode: impl Into<String>) -> Self {
        Self::UnknownFrontMatterMode { mode: mode.into() }
    }

    /// Create a new unknown front matter format error
    pub fn unknown_format(format: impl Into<String>) -> Self {
        Self::UnknownFrontMatterFormat {
            format: format.into(),
        }
    }

    /// Create a new transform error
    pub fn transform_error(transform: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TransformError {
            transform: transform.into(),
            message: message.into(),
        }
    }
}

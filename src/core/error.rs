//! # Error Handling for SiteFooter
//!
//! This module defines the error type shared by the configuration loader,
//! the template renderer and the output generator. The URL helpers and the
//! footer view never fail: absent optional values are simply omitted.
//! The `thiserror` crate is used to keep the error variants declarative.

use std::path::PathBuf;
use thiserror::Error;

/// A unified result type for the SiteFooter library.
///
/// This type alias simplifies function signatures by defining a result type that always uses `SiteFooterError` as the error variant.
pub type Result<T> = std::result::Result<T, SiteFooterError>;

/// The main error type for SiteFooter.
///
/// Each variant describes one of the ambient failure cases around footer
/// rendering: loading configuration, rendering templates and writing output.
#[derive(Error, Debug)]
pub enum SiteFooterError {
    /// Error related to loading or overriding the site configuration.
    ///
    /// This error occurs when a configuration file cannot be read or parsed,
    /// or when an override names an unknown key.
    #[error("Configuration error: {message}.")]
    ConfigError {
        /// Detailed description of the configuration error.
        message: String,
        /// Optional path of the configuration file that caused the error.
        path: Option<PathBuf>,
    },

    /// Error related to template rendering.
    ///
    /// Raised when a custom template fails to parse, is missing, or fails to render.
    #[error(
        "Template rendering error: {message} in template `{template}`."
    )]
    TemplateRenderingError {
        /// Description of the template rendering error.
        message: String,
        /// The specific template file or identifier associated with the error.
        template: String,
        /// Optional source error providing additional context, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Error while producing the footer fragment on disk.
    #[error("Output generation error: {message} at {path:?}.")]
    OutputGenerationError {
        /// Description of the output generation error.
        message: String,
        /// Path associated with the error.
        path: PathBuf,
        /// Optional source error providing additional context, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// IO error encountered during file operations.
    #[error("File IO error at `{path:?}`: {source}")]
    IOError {
        /// Path associated with the IO error.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// General internal error.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<std::io::Error> for SiteFooterError {
    /// Converts a standard IO error into a `SiteFooterError::IOError` with an empty path.
    fn from(source: std::io::Error) -> Self {
        SiteFooterError::IOError {
            path: PathBuf::new(),
            source,
        }
    }
}

impl SiteFooterError {
    /// Creates a `ConfigError` with a specific message.
    ///
    /// # Parameters
    /// - `message`: A description of the configuration error.
    /// - `path`: Optional path of the configuration file causing the error.
    pub fn config_error<S: Into<String>>(
        message: S,
        path: Option<PathBuf>,
    ) -> Self {
        SiteFooterError::ConfigError {
            message: message.into(),
            path,
        }
    }

    /// Creates a `TemplateRenderingError` with a message, template name, and optional source.
    pub fn template_rendering_error<S: Into<String>>(
        message: S,
        template: &str,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        SiteFooterError::TemplateRenderingError {
            message: message.into(),
            template: template.to_string(),
            source,
        }
    }

    /// Creates an `OutputGenerationError` with a specific message, path, and optional source.
    pub fn output_generation_error<S: Into<String>>(
        message: S,
        path: PathBuf,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        SiteFooterError::OutputGenerationError {
            message: message.into(),
            path,
            source,
        }
    }

    /// Wraps an IO error as an `IOError` variant with the specified path.
    pub fn io_error(path: PathBuf, source: std::io::Error) -> Self {
        SiteFooterError::IOError { path, source }
    }

    /// Creates a general internal error with a custom message.
    pub fn internal_error<S: Into<String>>(message: S) -> Self {
        SiteFooterError::InternalError(message.into())
    }
}

// Copyright © 2024 SiteFooter. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # SiteFooter Library
//!
//! SiteFooter renders the footer of a documentation site: a sitemap with the
//! docs entry point and a community link, a home link, and the copyright
//! notice. Links are built from the site's base URL, its optional docs
//! sub-path and the current display language.
//!
//! For more information, visit the [SiteFooter documentation](https://docs.rs/sitefooter).

#![doc = include_str!("../README.md")]
#![doc(html_root_url = "https://docs.rs/sitefooter")]
#![crate_name = "sitefooter"]

use serde_json::Value as JsonValue;
use std::path::Path;

/// Module containing core utilities, such as configuration and error handling.
pub mod core {
    /// Handles the site configuration consumed by the footer.
    pub mod config;
    /// Contains error types and handling for SiteFooter.
    pub mod error;
}

/// Provides command-line interface utilities.
pub mod cli;

/// Provides the footer component.
pub mod footer;

/// Provides fragment output utilities.
pub mod output;

/// Provides template rendering utilities.
pub mod template;

/// Provides documentation and page URL construction.
pub mod url;

/// Provides the footer view tree.
pub mod view;

pub use crate::core::config::SiteConfig;
pub use crate::core::error::{Result, SiteFooterError};
pub use crate::footer::SiteFooter;

/// Trait for template rendering implementations.
///
/// This trait defines methods for rendering and validating templates.
pub trait TemplateRenderer: Send + Sync + std::fmt::Debug {
    /// Renders a template with the specified context.
    ///
    /// # Arguments
    /// * `template` - The template name or identifier.
    /// * `context` - The context data for rendering the template.
    ///
    /// # Returns
    /// * `Result<String>` - The rendered output, or an error if rendering fails.
    fn render(&self, template: &str, context: &JsonValue) -> Result<String>;

    /// Validates the template against the context.
    ///
    /// # Arguments
    /// * `template` - The template name or identifier.
    /// * `context` - The context data.
    ///
    /// # Returns
    /// * `Result<()>` - Indicates success if valid, or an error otherwise.
    fn validate(&self, template: &str, context: &JsonValue) -> Result<()>;
}

/// Trait for output generation implementations.
///
/// Defines methods for writing rendered fragments.
pub trait OutputGenerator: Send + Sync + std::fmt::Debug {
    /// Generates output from the given content to the specified path.
    ///
    /// # Arguments
    /// * `content` - The content to be output.
    /// * `path` - The output file path.
    /// * `options` - Optional settings for generation.
    ///
    /// # Returns
    /// * `Result<()>` - Indicates success, or an error if generation fails.
    fn generate(
        &self,
        content: &str,
        path: &Path,
        options: Option<&JsonValue>,
    ) -> Result<()>;

    /// Validates the path and options for output generation.
    ///
    /// # Arguments
    /// * `path` - The output file path.
    /// * `options` - Optional settings for generation.
    ///
    /// # Returns
    /// * `Result<()>` - Indicates success if valid, or an error otherwise.
    fn validate(
        &self,
        path: &Path,
        options: Option<&JsonValue>,
    ) -> Result<()>;
}

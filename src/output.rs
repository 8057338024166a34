// Copyright © 2024 SiteFooter. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Fragment Output
//!
//! Writes rendered footer fragments to disk, optionally minified with
//! `minify-html`.

use std::fs;
use std::io::Write;
use std::path::Path;

use log::info;
use minify_html::{minify, Cfg};
use serde_json::Value as JsonValue;

use crate::{OutputGenerator, Result, SiteFooterError};

/// Minifies a footer fragment, keeping closing tags so it can be embedded
/// into any page template.
pub fn minify_fragment(content: &str) -> Result<String> {
    minify_for(content, Path::new(""))
}

fn minify_for(content: &str, path: &Path) -> Result<String> {
    let cfg = Cfg {
        keep_closing_tags: true,
        minify_css: true,
        minify_js: true,
        ..Cfg::default()
    };
    String::from_utf8(minify(content.as_bytes(), &cfg)).map_err(|e| {
        SiteFooterError::output_generation_error(
            "HTML minification failed",
            path.to_path_buf(),
            Some(Box::new(e)),
        )
    })
}

/// Generates fragment files. Pass `{"minify": true}` as options to minify
/// the content before writing.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlOutputGenerator;

impl HtmlOutputGenerator {
    /// Creates a new `HtmlOutputGenerator`.
    pub fn new() -> Self {
        Self
    }
}

fn wants_minify(options: Option<&JsonValue>) -> bool {
    options
        .and_then(|o| o.get("minify"))
        .and_then(JsonValue::as_bool)
        .unwrap_or(false)
}

impl OutputGenerator for HtmlOutputGenerator {
    fn generate(
        &self,
        content: &str,
        path: &Path,
        options: Option<&JsonValue>,
    ) -> Result<()> {
        self.validate(path, options)?;

        let content = if wants_minify(options) {
            minify_for(content, path)?
        } else {
            content.to_string()
        };

        let mut file = fs::File::create(path)
            .map_err(|e| SiteFooterError::io_error(path.to_path_buf(), e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| SiteFooterError::io_error(path.to_path_buf(), e))?;
        info!("Wrote footer fragment to {}", path.display());
        Ok(())
    }

    fn validate(
        &self,
        path: &Path,
        _options: Option<&JsonValue>,
    ) -> Result<()> {
        if path.is_dir() {
            return Err(SiteFooterError::output_generation_error(
                "Output path is a directory",
                path.to_path_buf(),
                None,
            ));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    SiteFooterError::io_error(parent.to_path_buf(), e)
                })?;
            }
        }
        Ok(())
    }
}

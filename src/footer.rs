// Copyright © 2024 SiteFooter. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Site Footer
//!
//! [`SiteFooter`] borrows a [`SiteConfig`] and turns it into the footer
//! fragment: a home link, an "Overview" column pointing at the docs entry
//! point, a "Community" column linking the source repository, and the
//! copyright line.
//!
//! ```
//! use sitefooter::{SiteConfig, SiteFooter};
//!
//! let config = SiteConfig::new("/site/").with_docs_url("docs");
//! let footer = SiteFooter::new(&config).unwrap();
//!
//! assert_eq!(footer.doc_url("intro", Some("fr")), "/site/docs/fr/intro");
//! assert_eq!(footer.page_url("users", None), "/site/users");
//!
//! let html = footer.render(Some("fr")).unwrap();
//! assert!(html.contains(r#"href="/site/docs/fr/getting-started""#));
//! ```

use std::path::Path;

use log::debug;

use crate::core::config::SiteConfig;
use crate::template::{HandlebarsRenderer, FOOTER_TEMPLATE_NAME};
use crate::url;
use crate::view::{FooterView, Image, Link, Section};
use crate::{Result, SiteFooterError, TemplateRenderer};

/// Source repository linked from the "Community" column.
pub const REPOSITORY_URL: &str = "https://github.com/alexarchambault/case-app";

/// GitHub stars badge shown inside the repository link.
pub const STARS_BADGE_URL: &str = "https://img.shields.io/github/stars/alexarchambault/case-app.svg?color=%23087e8b&label=stars&logo=github&style=social";

/// Documentation page the "Overview" column points at.
pub const GETTING_STARTED_DOC: &str = "getting-started";

/// The footer of a documentation site.
#[derive(Debug, Clone)]
pub struct SiteFooter<'a> {
    config: &'a SiteConfig,
    renderer: HandlebarsRenderer,
}

impl<'a> SiteFooter<'a> {
    /// Creates a footer for `config` using the built-in template.
    pub fn new(config: &'a SiteConfig) -> Result<Self> {
        Ok(Self {
            config,
            renderer: HandlebarsRenderer::for_site(config)?,
        })
    }

    /// Replaces the footer template with the one stored at `path`.
    ///
    /// The template receives the footer view as context and can call the
    /// `doc_url` and `page_url` helpers.
    pub fn with_template_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        self.renderer = self
            .renderer
            .with_template_file(FOOTER_TEMPLATE_NAME, path)?;
        Ok(self)
    }

    /// The configuration this footer renders.
    pub fn config(&self) -> &SiteConfig {
        self.config
    }

    /// URL of a documentation page, see [`url::doc_url`].
    pub fn doc_url(&self, doc: &str, language: Option<&str>) -> String {
        url::doc_url(self.config, doc, language)
    }

    /// URL of a generic site page, see [`url::page_url`].
    pub fn page_url(&self, doc: &str, language: Option<&str>) -> String {
        url::page_url(self.config, doc, language)
    }

    /// Builds the footer tree for the given display language.
    pub fn view(&self, language: Option<&str>) -> FooterView {
        FooterView {
            home: Link::text(&self.config.base_url, &self.config.title),
            sections: vec![
                Section::new(
                    "Overview",
                    vec![Link::text(
                        self.doc_url(GETTING_STARTED_DOC, language),
                        "Getting Started",
                    )],
                ),
                Section::new(
                    "Community",
                    vec![Link::external_image(
                        REPOSITORY_URL,
                        Image {
                            src: STARS_BADGE_URL.to_string(),
                            alt: "GitHub stars".to_string(),
                        },
                    )],
                ),
            ],
            copyright: self.config.copyright.clone().unwrap_or_default(),
            language: language.map(str::to_string),
        }
    }

    /// Renders the footer fragment for the given display language.
    ///
    /// The built-in template never fails; errors only come from custom
    /// templates.
    pub fn render(&self, language: Option<&str>) -> Result<String> {
        debug!(
            "Rendering footer for base URL '{}' and language {:?}",
            self.config.base_url, language
        );
        let context = serde_json::to_value(self.view(language)).map_err(|e| {
            SiteFooterError::internal_error(format!(
                "Failed to serialise footer view: {}",
                e
            ))
        })?;
        self.renderer.render(FOOTER_TEMPLATE_NAME, &context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config() -> SiteConfig {
        SiteConfig::new("/site/")
            .with_docs_url("docs")
            .with_copyright("Copyright © 2024 ACME")
    }

    #[test]
    fn test_doc_and_page_urls() {
        let config = config();
        let footer = SiteFooter::new(&config).unwrap();
        assert_eq!(footer.doc_url("intro", None), "/site/docs/intro");
        assert_eq!(footer.doc_url("intro", Some("fr")), "/site/docs/fr/intro");
        assert_eq!(footer.page_url("intro", Some("fr")), "/site/fr/intro");
        assert_eq!(footer.config().base_url, "/site/");
    }

    #[test]
    fn test_view_structure() {
        let config = config();
        let footer = SiteFooter::new(&config).unwrap();
        let view = footer.view(Some("fr"));

        assert_eq!(view.home, Link::text("/site/", "CaseApp"));
        assert_eq!(view.sections.len(), 2);
        assert_eq!(view.sections[0].title, "Overview");
        assert_eq!(
            view.sections[0].links,
            vec![Link::text("/site/docs/fr/getting-started", "Getting Started")]
        );
        assert_eq!(view.sections[1].title, "Community");
        let community = &view.sections[1].links[0];
        assert_eq!(community.href, REPOSITORY_URL);
        assert!(community.external);
        assert_eq!(
            community.image.as_ref().map(|i| i.src.as_str()),
            Some(STARS_BADGE_URL)
        );
        assert_eq!(view.copyright, "Copyright © 2024 ACME");
        assert_eq!(view.language.as_deref(), Some("fr"));
        assert!(footer.view(None).language.is_none());
    }

    #[test]
    fn test_render_markup() {
        let config = config();
        let footer = SiteFooter::new(&config).unwrap();
        let html = footer.render(None).unwrap();

        assert!(html.starts_with(r#"<footer class="nav-footer" id="footer">"#));
        assert!(html.contains(r#"<a href="/site/" class="nav-home">CaseApp</a>"#));
        assert!(html.contains(r#"<a href="/site/docs/getting-started">Getting Started</a>"#));
        assert!(html.contains(
            r#"<a href="https://github.com/alexarchambault/case-app" target="_blank"><img src="https://img.shields.io/github/stars/alexarchambault/case-app.svg?color&#x3D;%23087e8b&amp;label&#x3D;stars&amp;logo&#x3D;github&amp;style&#x3D;social" alt="GitHub stars" /></a>"#
        ));
        assert!(html.contains(r#"<section class="copyright">Copyright © 2024 ACME</section>"#));
    }

    #[test]
    fn test_render_without_copyright() {
        let config = SiteConfig::new("/site/");
        let footer = SiteFooter::new(&config).unwrap();
        let html = footer.render(None).unwrap();
        assert!(html.contains(r#"<section class="copyright"></section>"#));
    }

    #[test]
    fn test_render_is_idempotent() {
        let config = config();
        let footer = SiteFooter::new(&config).unwrap();
        assert_eq!(
            footer.render(Some("de")).unwrap(),
            footer.render(Some("de")).unwrap()
        );
    }

    #[test]
    fn test_custom_template_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("footer.hbs");
        fs::write(
            &path,
            r#"<footer><a href="{{page_url "help" "en"}}">Help</a>{{copyright}}</footer>"#,
        )
        .unwrap();

        let config = config();
        let footer = SiteFooter::new(&config)
            .unwrap()
            .with_template_file(&path)
            .unwrap();
        assert_eq!(
            footer.render(None).unwrap(),
            r#"<footer><a href="/site/en/help">Help</a>Copyright © 2024 ACME</footer>"#
        );
    }

    #[test]
    fn test_custom_template_sees_render_language() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("footer.hbs");
        fs::write(&path, r#"{{doc_url "getting-started" language}}"#)
            .unwrap();

        let config = config();
        let footer = SiteFooter::new(&config)
            .unwrap()
            .with_template_file(&path)
            .unwrap();
        assert_eq!(
            footer.render(Some("fr")).unwrap(),
            "/site/docs/fr/getting-started"
        );
        assert_eq!(
            footer.render(None).unwrap(),
            "/site/docs/getting-started"
        );
    }
}

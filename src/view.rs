//! # Footer View
//!
//! The static tree rendered into the footer fragment. Links are computed once
//! from the site configuration and the current language; the tree is then
//! serialised into a template context.

use serde::Serialize;

/// A rendered footer: home link, sitemap sections and the copyright line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterView {
    /// Link back to the site root, labelled with the site title.
    pub home: Link,
    /// Sitemap columns, in display order.
    pub sections: Vec<Section>,
    /// Copyright notice, empty when none is configured.
    pub copyright: String,
    /// Display language the footer is rendered for, passed on to the
    /// `doc_url` and `page_url` helpers by custom templates.
    pub language: Option<String>,
}

/// A titled column of sitemap links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Column heading.
    pub title: String,
    /// Links listed under the heading.
    pub links: Vec<Link>,
}

impl Section {
    /// Creates a section from its heading and links.
    pub fn new<S: Into<String>>(title: S, links: Vec<Link>) -> Self {
        Self {
            title: title.into(),
            links,
        }
    }
}

/// A single hyperlink, shown either as text or as an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Link target.
    pub href: String,
    /// Text label; `None` for image-only links.
    pub label: Option<String>,
    /// Image shown inside the link.
    pub image: Option<Image>,
    /// Whether the link opens in a new browsing context.
    pub external: bool,
}

impl Link {
    /// Internal text link.
    pub fn text<H: Into<String>, L: Into<String>>(href: H, label: L) -> Self {
        Self {
            href: href.into(),
            label: Some(label.into()),
            image: None,
            external: false,
        }
    }

    /// External link wrapping an image, opened in a new tab.
    pub fn external_image<H: Into<String>>(href: H, image: Image) -> Self {
        Self {
            href: href.into(),
            label: None,
            image: Some(image),
            external: true,
        }
    }
}

/// An image embedded in a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    /// Image URL.
    pub src: String,
    /// Alternative text.
    pub alt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_constructors() {
        let link = Link::text("/docs/intro", "Intro");
        assert_eq!(link.label.as_deref(), Some("Intro"));
        assert!(!link.external);
        assert!(link.image.is_none());

        let badge = Link::external_image(
            "https://example.org",
            Image {
                src: "https://example.org/badge.svg".to_string(),
                alt: "badge".to_string(),
            },
        );
        assert!(badge.external);
        assert!(badge.label.is_none());
    }

    #[test]
    fn test_view_serialises_for_templates() {
        let view = FooterView {
            home: Link::text("/", "Home"),
            sections: vec![Section::new(
                "Overview",
                vec![Link::text("/intro", "Intro")],
            )],
            copyright: String::new(),
            language: Some("fr".to_string()),
        };
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["home"]["href"], "/");
        assert_eq!(value["sections"][0]["links"][0]["label"], "Intro");
        assert!(value["sections"][0]["links"][0]["image"].is_null());
        assert_eq!(value["copyright"], "");
        assert_eq!(value["language"], "fr");
    }
}

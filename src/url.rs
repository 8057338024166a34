//! # URL Construction
//!
//! Builds documentation-page and site-page URLs relative to a [`SiteConfig`].
//!
//! Every URL is the base URL, followed by zero or more optional segments
//! (each terminated by `/`), followed by the page identifier. Absent or empty
//! segments are skipped. Nothing is normalised or validated: a base URL
//! without a trailing `/` is concatenated as-is.
//!
//! ```
//! use sitefooter::core::config::SiteConfig;
//! use sitefooter::url::{doc_url, page_url};
//!
//! let config = SiteConfig::new("/site/").with_docs_url("docs");
//! assert_eq!(doc_url(&config, "intro", Some("fr")), "/site/docs/fr/intro");
//! assert_eq!(page_url(&config, "help", Some("fr")), "/site/fr/help");
//! ```

use crate::core::config::SiteConfig;

/// Joins `base`, the present and non-empty `segments` (each followed by
/// `/`) and `doc` into one URL.
pub fn join_url(base: &str, segments: &[Option<&str>], doc: &str) -> String {
    let present = segments
        .iter()
        .flatten()
        .filter(|segment| !segment.is_empty());

    let capacity = base.len()
        + doc.len()
        + present.clone().map(|s| s.len() + 1).sum::<usize>();
    let mut url = String::with_capacity(capacity);
    url.push_str(base);
    for segment in present {
        url.push_str(segment);
        url.push('/');
    }
    url.push_str(doc);
    url
}

/// URL of a documentation page: base URL, docs sub-path, language, `doc`.
pub fn doc_url(config: &SiteConfig, doc: &str, language: Option<&str>) -> String {
    join_url(
        &config.base_url,
        &[config.docs_url.as_deref(), language],
        doc,
    )
}

/// URL of a generic site page: base URL, language, `doc`. The docs sub-path
/// is never inserted.
pub fn page_url(config: &SiteConfig, doc: &str, language: Option<&str>) -> String {
    join_url(&config.base_url, &[language], doc)
}

//! # Template Rendering Module
//!
//! Renders the footer view into markup through Handlebars.
//!
//! ## Features
//!
//! - Built-in `footer` template producing the standard footer fragment
//! - Custom templates and partials, loaded from strings or files
//! - Strict mode turning missing variables into errors
//! - Pluggable helpers, with `doc_url` and `page_url` built in

use crate::core::config::SiteConfig;
use crate::{Result, SiteFooterError, TemplateRenderer};
use handlebars::{
    html_escape, Context, Handlebars, Helper, HelperDef, HelperResult, Output,
    RenderContext, RenderError, RenderErrorReason,
};
use parking_lot::RwLock;
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Name under which the footer template is registered.
pub const FOOTER_TEMPLATE_NAME: &str = "footer";

/// Markup of the built-in footer template. Its context is a serialised
/// [`FooterView`](crate::view::FooterView).
pub const FOOTER_TEMPLATE: &str = r#"<footer class="nav-footer" id="footer">
  <section class="sitemap">
    <h2>
      <a href="{{home.href}}" class="nav-home">{{home.label}}</a>
    </h2>
    {{#each sections}}
    <div>
      <h5>{{title}}</h5>
      {{#each links}}
      <a href="{{href}}"{{#if external}} target="_blank"{{/if}}>{{#if image}}<img src="{{image.src}}" alt="{{image.alt}}" />{{else}}{{label}}{{/if}}</a>
      {{/each}}
    </div>
    {{/each}}
  </section>
  <section class="copyright">{{copyright}}</section>
</footer>
"#;

/// A custom template helper.
pub trait TemplateHelper: Send + Sync {
    /// Executes the helper with the given parameters and context.
    fn execute(
        &self,
        params: &[JsonValue],
        context: &JsonValue,
    ) -> Result<JsonValue>;

    /// Returns the name of the helper for registration.
    fn name(&self) -> &str;
}

/// Adapts a [`TemplateHelper`] to the Handlebars helper interface.
struct HelperBridge<H>(H);

impl<H: TemplateHelper> HelperDef for HelperBridge<H> {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        ctx: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let params: Vec<JsonValue> =
            h.params().iter().map(|p| p.value().clone()).collect();

        let result = self.0.execute(&params, ctx.data()).map_err(|e| {
            RenderError::from(RenderErrorReason::Other(e.to_string()))
        })?;

        match result {
            JsonValue::Null => {}
            JsonValue::String(text) => out.write(&html_escape(&text))?,
            other => out.write(&html_escape(&other.to_string()))?,
        }
        Ok(())
    }
}

/// Renderer for Handlebars templates with custom helpers.
#[derive(Clone)]
pub struct HandlebarsRenderer {
    engine: Arc<RwLock<Handlebars<'static>>>,
    strict_mode: bool,
}

impl std::fmt::Debug for HandlebarsRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let engine = self.engine.read();
        let mut templates: Vec<&String> =
            engine.get_templates().keys().collect();
        templates.sort();
        f.debug_struct("HandlebarsRenderer")
            .field("templates", &templates)
            .field("strict_mode", &self.strict_mode)
            .finish()
    }
}

impl HandlebarsRenderer {
    /// Creates a renderer with the built-in footer template registered.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(html_escape);

        let renderer = Self {
            engine: Arc::new(RwLock::new(handlebars)),
            strict_mode: false,
        };
        renderer.with_template(FOOTER_TEMPLATE_NAME, FOOTER_TEMPLATE)
    }

    /// Creates a renderer with the `doc_url` and `page_url` helpers bound to
    /// `config`.
    pub fn for_site(config: &SiteConfig) -> Result<Self> {
        Ok(Self::new()?
            .with_helper(helpers::DocUrlHelper::new(config.clone()))
            .with_helper(helpers::PageUrlHelper::new(config.clone())))
    }

    /// Enables or disables strict mode, in which missing variables are errors.
    pub fn with_strict_mode(mut self, strict: bool) -> Self {
        self.strict_mode = strict;
        self.engine.write().set_strict_mode(strict);
        self
    }

    /// Registers a helper under its own name.
    pub fn with_helper<H>(self, helper: H) -> Self
    where
        H: TemplateHelper + 'static,
    {
        let name = helper.name().to_string();
        self.engine
            .write()
            .register_helper(&name, Box::new(HelperBridge(helper)));
        self
    }

    /// Registers a template, replacing any template of the same name.
    pub fn with_template(self, name: &str, source: &str) -> Result<Self> {
        self.engine
            .write()
            .register_template_string(name, source)
            .map_err(|e| {
                SiteFooterError::template_rendering_error(
                    format!("Failed to register template: {}", e),
                    name,
                    Some(Box::new(e)),
                )
            })?;
        Ok(self)
    }

    /// Reads a template from `path` and registers it under `name`.
    pub fn with_template_file<P: AsRef<Path>>(
        self,
        name: &str,
        path: P,
    ) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            SiteFooterError::template_rendering_error(
                format!(
                    "Failed to read template file {}: {}",
                    path.display(),
                    e
                ),
                name,
                Some(Box::new(e)),
            )
        })?;
        self.with_template(name, &source)
    }

    /// Registers a partial template.
    pub fn with_partial(self, name: &str, template: &str) -> Result<Self> {
        self.engine
            .write()
            .register_partial(name, template)
            .map_err(|e| {
                SiteFooterError::template_rendering_error(
                    format!("Failed to register partial '{}': {}", name, e),
                    name,
                    Some(Box::new(e)),
                )
            })?;
        Ok(self)
    }

    /// Whether a template with the given name is registered.
    pub fn has_template(&self, name: &str) -> bool {
        self.engine.read().has_template(name)
    }
}

impl TemplateRenderer for HandlebarsRenderer {
    fn render(
        &self,
        template: &str,
        context: &JsonValue,
    ) -> Result<String> {
        self.validate(template, context)?;

        self.engine.read().render(template, context).map_err(|e| {
            SiteFooterError::template_rendering_error(
                format!("Template rendering failed: {}", e),
                template,
                Some(Box::new(e)),
            )
        })
    }

    fn validate(
        &self,
        template: &str,
        _context: &JsonValue,
    ) -> Result<()> {
        if !self.has_template(template) {
            return Err(SiteFooterError::template_rendering_error(
                format!("Template '{}' not found", template),
                template,
                None,
            ));
        }
        Ok(())
    }
}

/// Built-in helpers for footer templates.
pub mod helpers {
    use super::*;
    use crate::url::{doc_url, page_url};

    /// Splits helper parameters into the page identifier and optional language.
    fn url_params<'p>(
        helper: &str,
        params: &'p [JsonValue],
    ) -> Result<(&'p str, Option<&'p str>)> {
        let doc = params.first().and_then(|p| p.as_str()).ok_or_else(|| {
            SiteFooterError::template_rendering_error(
                format!("{} helper requires a page identifier", helper),
                helper,
                None,
            )
        })?;
        let language = params.get(1).and_then(|p| p.as_str());
        Ok((doc, language))
    }

    /// `{{doc_url "intro" language}}`: URL of a documentation page.
    #[derive(Debug, Clone)]
    pub struct DocUrlHelper {
        config: SiteConfig,
    }

    impl DocUrlHelper {
        /// Binds the helper to a site configuration.
        pub fn new(config: SiteConfig) -> Self {
            Self { config }
        }
    }

    impl TemplateHelper for DocUrlHelper {
        fn execute(
            &self,
            params: &[JsonValue],
            _context: &JsonValue,
        ) -> Result<JsonValue> {
            let (doc, language) = url_params(self.name(), params)?;
            Ok(JsonValue::String(doc_url(&self.config, doc, language)))
        }

        fn name(&self) -> &str {
            "doc_url"
        }
    }

    /// `{{page_url "users" language}}`: URL of a generic site page.
    #[derive(Debug, Clone)]
    pub struct PageUrlHelper {
        config: SiteConfig,
    }

    impl PageUrlHelper {
        /// Binds the helper to a site configuration.
        pub fn new(config: SiteConfig) -> Self {
            Self { config }
        }
    }

    impl TemplateHelper for PageUrlHelper {
        fn execute(
            &self,
            params: &[JsonValue],
            _context: &JsonValue,
        ) -> Result<JsonValue> {
            let (doc, language) = url_params(self.name(), params)?;
            Ok(JsonValue::String(page_url(&self.config, doc, language)))
        }

        fn name(&self) -> &str {
            "page_url"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn site_renderer() -> HandlebarsRenderer {
        let config = SiteConfig::new("/site/").with_docs_url("docs");
        HandlebarsRenderer::for_site(&config).unwrap()
    }

    #[test]
    fn test_builtin_footer_template_registered() {
        let renderer = HandlebarsRenderer::new().unwrap();
        assert!(renderer.has_template(FOOTER_TEMPLATE_NAME));
    }

    #[test]
    fn test_render_footer_template() {
        let renderer = HandlebarsRenderer::new().unwrap();
        let context = json!({
            "home": { "href": "/", "label": "Home", "image": null, "external": false },
            "sections": [{
                "title": "Overview",
                "links": [{ "href": "/intro", "label": "Intro", "image": null, "external": false }]
            }],
            "copyright": "A & B"
        });

        let output = renderer.render(FOOTER_TEMPLATE_NAME, &context).unwrap();
        assert!(output.contains(r#"<a href="/" class="nav-home">Home</a>"#));
        assert!(output.contains("<h5>Overview</h5>"));
        assert!(output.contains(r#"<a href="/intro">Intro</a>"#));
        assert!(output.contains(r#"<section class="copyright">A &amp; B</section>"#));
    }

    #[test]
    fn test_url_helpers() {
        let renderer = site_renderer()
            .with_template(
                "links",
                r#"{{doc_url "intro" lang}}|{{page_url "users" lang}}|{{doc_url "intro"}}"#,
            )
            .unwrap();

        let output =
            renderer.render("links", &json!({ "lang": "fr" })).unwrap();
        assert_eq!(output, "/site/docs/fr/intro|/site/fr/users|/site/docs/intro");
    }

    #[test]
    fn test_values_and_helper_output_are_html_escaped() {
        let renderer = site_renderer()
            .with_template(
                "escaped",
                r#"<a href="{{doc_url "search?q=x&lang=fr"}}">{{label}}</a>"#,
            )
            .unwrap();

        let output = renderer
            .render("escaped", &json!({ "label": "<a=b>" }))
            .unwrap();
        assert_eq!(
            output,
            r#"<a href="/site/docs/search?q&#x3D;x&amp;lang&#x3D;fr">&lt;a&#x3D;b&gt;</a>"#
        );
    }

    #[test]
    fn test_url_helper_requires_doc() {
        let renderer = site_renderer()
            .with_template("broken", "{{doc_url 42}}")
            .unwrap();
        assert!(renderer.render("broken", &json!({})).is_err());
    }

    #[test]
    fn test_missing_template() {
        let renderer = HandlebarsRenderer::new().unwrap();
        match renderer.render("nonexistent", &json!({})) {
            Err(SiteFooterError::TemplateRenderingError {
                template, ..
            }) => assert_eq!(template, "nonexistent"),
            other => panic!("expected template error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_template_syntax() {
        let result = HandlebarsRenderer::new()
            .unwrap()
            .with_template("bad", "{{#each items}}unclosed");
        assert!(result.is_err());
    }

    #[test]
    fn test_strict_mode_rejects_missing_variables() {
        let renderer = HandlebarsRenderer::new()
            .unwrap()
            .with_strict_mode(true)
            .with_template("greeting", "Hello {{name}}")
            .unwrap();
        assert!(renderer.render("greeting", &json!({})).is_err());
        assert_eq!(
            renderer
                .render("greeting", &json!({ "name": "World" }))
                .unwrap(),
            "Hello World"
        );
    }

    #[test]
    fn test_partials() {
        let renderer = HandlebarsRenderer::new()
            .unwrap()
            .with_partial("brand", "<b>{{title}}</b>")
            .unwrap()
            .with_template("page", "{{> brand}}")
            .unwrap();
        assert_eq!(
            renderer.render("page", &json!({ "title": "CaseApp" })).unwrap(),
            "<b>CaseApp</b>"
        );
    }

    #[test]
    fn test_template_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("footer.hbs");
        fs::write(&path, "<footer>{{copyright}}</footer>").unwrap();

        let renderer = HandlebarsRenderer::new()
            .unwrap()
            .with_template_file(FOOTER_TEMPLATE_NAME, &path)
            .unwrap();
        assert_eq!(
            renderer
                .render(FOOTER_TEMPLATE_NAME, &json!({ "copyright": "ACME" }))
                .unwrap(),
            "<footer>ACME</footer>"
        );
    }

    #[test]
    fn test_missing_template_file() {
        let result = HandlebarsRenderer::new()
            .unwrap()
            .with_template_file(FOOTER_TEMPLATE_NAME, "missing/footer.hbs");
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_lists_templates() {
        let renderer = HandlebarsRenderer::new().unwrap();
        let debug = format!("{:?}", renderer);
        assert!(debug.contains("footer"));
        assert!(debug.contains("strict_mode: false"));
    }
}

//! Template engine for the page shell.

use minijinja::Environment;

/// Swiper bundle served from the CDN.
pub const SWIPER_CSS: &str = "https://cdn.jsdelivr.net/npm/swiper@11/swiper-bundle.min.css";
pub const SWIPER_JS: &str = "https://cdn.jsdelivr.net/npm/swiper@11/swiper-bundle.min.js";

/// GLightbox bundle served from the CDN.
pub const GLIGHTBOX_CSS: &str = "https://cdn.jsdelivr.net/npm/glightbox/dist/css/glightbox.min.css";
pub const GLIGHTBOX_JS: &str = "https://cdn.jsdelivr.net/npm/glightbox/dist/js/glightbox.min.js";

/// Context for rendering the page template.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Context {
    /// Document language
    pub lang: String,
    /// Page title
    pub title: String,
    /// Meta description, omitted when empty
    pub description: String,
    /// Serialized body children
    pub body: String,
    /// Client bootstrap script, omitted when empty
    pub script: String,
    /// External stylesheets loaded before the site stylesheet
    pub styles: Vec<String>,
    /// External scripts loaded before the bootstrap script
    pub scripts: Vec<String>,
}

impl Context {
    /// Context with the widget bundles preloaded.
    pub fn with_widgets(title: &str, lang: &str) -> Self {
        Self {
            lang: lang.to_string(),
            title: title.to_string(),
            description: String::new(),
            body: String::new(),
            script: String::new(),
            styles: vec![SWIPER_CSS.to_string(), GLIGHTBOX_CSS.to_string()],
            scripts: vec![SWIPER_JS.to_string(), GLIGHTBOX_JS.to_string()],
        }
    }
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the page template.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("page.html".to_string(), PAGE_TEMPLATE.to_string())
            .expect("Failed to add page template");

        Self { env }
    }

    /// Render the page.
    pub fn render_page(&self, context: &Context) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("page.html")?;

        tmpl.render(context)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ lang }}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  {% if description %}<meta name="description" content="{{ description }}">
  {% endif %}{% for style in styles %}<link rel="stylesheet" href="{{ style }}">
  {% endfor %}<link rel="stylesheet" href="assets/main.css">
</head>
<body>
{{ body | safe }}
{% for src in scripts %}<script src="{{ src }}"></script>
{% endfor %}{% if script %}<script>
{{ script | safe }}</script>
{% endif %}</body>
</html>"##;

//! Theme engine wrapping Tera.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tera::Tera;
use tracing::debug;

/// Theme engine for rendering templates.
pub struct ThemeEngine {
    /// Tera template engine instance.
    tera: Tera,
}

impl ThemeEngine {
    /// Create a new theme engine loading templates from the given directory.
    pub fn new(template_dir: &Path) -> Result<Self> {
        let pattern = template_dir.join("**/*.html");
        let pattern_str = pattern
            .to_str()
            .context("invalid template directory path")?;

        let mut tera = Tera::new(pattern_str).context("failed to initialize Tera templates")?;
        Self::register_filters(&mut tera);

        let count = tera.get_template_names().count();
        debug!(count, dir = %template_dir.display(), "loaded templates");

        Ok(Self { tera })
    }

    /// Create a theme engine from in-memory `(name, source)` pairs.
    pub fn from_raw(templates: &[(&str, &str)]) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates.iter().copied())
            .context("failed to parse templates")?;
        tera.autoescape_on(vec![".html"]);
        Self::register_filters(&mut tera);
        Ok(Self { tera })
    }

    /// Create a theme engine with no templates (for testing).
    pub fn empty() -> Self {
        let mut tera = Tera::default();
        Self::register_filters(&mut tera);
        Self { tera }
    }

    /// Register custom Tera filters.
    fn register_filters(tera: &mut Tera) {
        // Unix timestamp -> "October 14, 2026 09:30 UTC"
        tera.register_filter(
            "format_date",
            |value: &tera::Value, _args: &HashMap<String, tera::Value>| {
                let Some(timestamp) = value.as_i64() else {
                    return Ok(tera::Value::String(String::new()));
                };

                let formatted = chrono::DateTime::from_timestamp(timestamp, 0)
                    .map(|dt| dt.format("%B %-d, %Y %H:%M UTC").to_string())
                    .unwrap_or_else(|| "Unknown date".to_string());

                Ok(tera::Value::String(formatted))
            },
        );
    }

    /// Whether a template with this name is loaded.
    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Render a named template.
    pub fn render(&self, template: &str, context: &tera::Context) -> Result<String> {
        self.tera
            .render(template, context)
            .with_context(|| format!("failed to render template {template}"))
    }
}

impl std::fmt::Debug for ThemeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEngine")
            .field("template_count", &self.tera.get_template_names().count())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_filter() {
        let engine = ThemeEngine::from_raw(&[("d.html", "{{ ts | format_date }}")]).unwrap();
        let mut context = tera::Context::new();
        context.insert("ts", &1_700_000_000_i64);
        assert_eq!(
            engine.render("d.html", &context).unwrap(),
            "November 14, 2023 22:13 UTC"
        );
    }

    #[test]
    fn test_format_date_ignores_non_numbers() {
        let engine = ThemeEngine::from_raw(&[("d.html", "[{{ ts | format_date }}]")]).unwrap();
        let mut context = tera::Context::new();
        context.insert("ts", "yesterday");
        assert_eq!(engine.render("d.html", &context).unwrap(), "[]");
    }

    #[test]
    fn test_html_templates_autoescape() {
        let engine = ThemeEngine::from_raw(&[("x.html", "{{ v }}")]).unwrap();
        let mut context = tera::Context::new();
        context.insert("v", "<b>&</b>");
        assert_eq!(
            engine.render("x.html", &context).unwrap(),
            "&lt;b&gt;&amp;&lt;&#x2F;b&gt;"
        );
    }

    #[test]
    fn test_empty_engine_has_no_templates() {
        let engine = ThemeEngine::empty();
        assert!(!engine.has_template("page.html"));
        assert!(engine.render("page.html", &tera::Context::new()).is_err());
    }
}

//! CSS and HTML emission for [`ResumeTheme`].
//!
//! Every design token becomes a custom property on `:root`:
//!
//! | Prefix       | Source                       |
//! |--------------|------------------------------|
//! | `--color-*`  | palette of the chosen mode   |
//! | `--font-*`   | font configuration           |
//! | `--spacing-*`| spacing scale                |
//! | `--radius-*` | border radius scale          |
//! | `--shadow-*` | shadow scale                 |
//! | `--layout-*` | page layout                  |
//!
//! `--color-on-primary` is black or white, whichever reads better on the
//! palette's primary color.
//!
//! The base rules after the `:root` block only reference these properties,
//! so swapping palettes is a matter of overriding the `--color-*` values.
//! [`generate_stylesheet`] does exactly that for `[data-theme="dark"]`.

use minijinja::{context, Environment};
use tracing::debug;
use vellum_color::{optimal_text_color, ColorPalette};

use super::theme::ResumeTheme;
use crate::error::Result;
use crate::font::{custom_properties, google_fonts_url, TYPOGRAPHY_RULES};
use crate::mode::ColorMode;

const DOCUMENT_TEMPLATE_NAME: &str = "document.html";

const DOCUMENT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en" data-theme="{{ mode }}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  <style>
{% if fonts_url %}@import url('{{ fonts_url|safe }}');

{% endif %}{{ css|safe }}
  </style>
</head>
<body class="theme-{{ theme_id }}">
  <main class="resume">
{{ content|safe }}
  </main>
</body>
</html>
"#;

const BASE_RULES: &str = "\
*, *::before, *::after {
  box-sizing: border-box;
}

body {
  margin: 0;
  background: var(--color-background);
  color: var(--color-text-primary);
  font-family: var(--font-body);
  font-size: var(--font-size-body);
  font-weight: var(--font-weight-body);
  line-height: var(--line-height-body);
}

.resume {
  max-width: var(--layout-max-width);
  margin: 0 auto;
  padding: var(--spacing-xl);
}

.resume header {
  text-align: var(--layout-header-alignment);
  margin-bottom: var(--layout-section-spacing);
}

.resume section {
  margin-bottom: var(--layout-section-spacing);
}

.resume .columns {
  display: grid;
  grid-template-columns: repeat(var(--layout-columns), minmax(0, 1fr));
  gap: var(--spacing-lg);
}

.card {
  background: var(--color-surface);
  border: 1px solid var(--color-border);
  border-radius: var(--radius-md);
  box-shadow: var(--shadow-sm);
  padding: var(--spacing-md);
}

a {
  color: var(--color-primary);
}

h1, h2, h3 {
  color: var(--color-text-primary);
}

h2 {
  border-bottom: 2px solid var(--color-accent);
  padding-bottom: var(--spacing-xs);
}

.muted {
  color: var(--color-text-muted);
}

.badge {
  background: var(--color-primary);
  color: var(--color-on-primary);
  border-radius: var(--radius-sm);
  padding: 0 var(--spacing-xs);
}

.secondary {
  color: var(--color-text-secondary);
}
";

fn push_property(css: &mut String, name: &str, value: &str) {
    css.push_str("  --");
    css.push_str(name);
    css.push_str(": ");
    css.push_str(value);
    css.push_str(";\n");
}

fn push_color_properties(css: &mut String, palette: &ColorPalette) {
    for (name, value) in palette.entries() {
        push_property(css, &format!("color-{}", name), value);
    }
    // an invalid primary is reported by validate_theme, not here
    if let Ok(on_primary) = optimal_text_color(&palette.primary) {
        push_property(css, "color-on-primary", on_primary);
    }
}

/// Emits the CSS for `theme` rendered in `mode`.
///
/// Only the palette for `mode` is included.
pub fn generate_css(theme: &ResumeTheme, mode: ColorMode) -> String {
    let mut css = String::with_capacity(4096);
    css.push_str(":root {\n");
    css.push_str(&format!("  color-scheme: {};\n", mode));
    push_color_properties(&mut css, theme.palette(mode));

    for (name, value) in custom_properties(&theme.fonts) {
        push_property(&mut css, name, &value);
    }

    let spacing = &theme.spacing;
    for (name, value) in [
        ("xs", &spacing.xs),
        ("sm", &spacing.sm),
        ("md", &spacing.md),
        ("lg", &spacing.lg),
        ("xl", &spacing.xl),
    ] {
        push_property(&mut css, &format!("spacing-{}", name), value);
    }

    let radius = &theme.border_radius;
    let shadows = &theme.shadows;
    for (name, r, s) in [
        ("sm", &radius.sm, &shadows.sm),
        ("md", &radius.md, &shadows.md),
        ("lg", &radius.lg, &shadows.lg),
    ] {
        push_property(&mut css, &format!("radius-{}", name), r);
        push_property(&mut css, &format!("shadow-{}", name), s);
    }

    let layout = &theme.layout;
    push_property(&mut css, "layout-max-width", &layout.max_width);
    push_property(&mut css, "layout-columns", &layout.columns.to_string());
    push_property(&mut css, "layout-section-spacing", &layout.section_spacing);
    push_property(
        &mut css,
        "layout-header-alignment",
        layout.header_alignment.as_str(),
    );
    css.push_str("}\n\n");

    css.push_str(BASE_RULES);
    css.push('\n');
    css.push_str(TYPOGRAPHY_RULES);
    css
}

/// Light CSS followed by a `[data-theme="dark"]` block of dark colors.
///
/// This is the content written to a theme's `.css` file.
pub fn generate_stylesheet(theme: &ResumeTheme) -> String {
    let mut css = generate_css(theme, ColorMode::Light);
    css.push_str("\n[data-theme=\"dark\"] {\n");
    css.push_str("  color-scheme: dark;\n");
    push_color_properties(&mut css, &theme.colors.dark);
    css.push_str("}\n");
    css
}

/// Wraps an HTML fragment in a complete themed document.
///
/// The fragment is inserted verbatim. The theme CSS is inlined in a
/// `<style>` element, preceded by a Google Fonts `@import` when the theme
/// uses any web font.
///
/// # Errors
///
/// Returns [`ThemeError::Render`](crate::ThemeError::Render) if the document
/// template fails to render.
pub fn apply_theme_to_html(html: &str, theme: &ResumeTheme, mode: ColorMode) -> Result<String> {
    let mut env = Environment::new();
    env.add_template(DOCUMENT_TEMPLATE_NAME, DOCUMENT_TEMPLATE)?;
    let template = env.get_template(DOCUMENT_TEMPLATE_NAME)?;

    let document = template.render(context! {
        mode => mode.as_str(),
        title => &theme.name,
        theme_id => &theme.id,
        fonts_url => google_fonts_url(&theme.fonts),
        // a value read from a theme file must not close the <style> element
        css => generate_css(theme, mode).replace("</", "<\\/"),
        content => html,
    })?;

    debug!(theme = %theme.id, mode = %mode, bytes = document.len(), "applied theme to html");
    Ok(document)
}

//! Stylesheet for the card page.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the main CSS file.
    pub fn generate_css() -> String {
        CARD_CSS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

// Dark card theme. Class names match the host skeleton and section renderers.
const CARD_CSS: &str = r#":root {
  --bg: #0e0f13;
  --surface: #171922;
  --surface-2: #1f2230;
  --text: #f2f3f7;
  --muted: #a3a8b8;
  --accent: #7c8cff;
  --radius: 16px;
  --max-width: 1100px;
}

* {
  box-sizing: border-box;
}

body {
  margin: 0;
  font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
  background: var(--bg);
  color: var(--text);
  line-height: 1.5;
}

a {
  color: inherit;
}

/* Header */
.topbar {
  position: sticky;
  top: 0;
  z-index: 10;
  padding: 14px 20px;
  background: rgba(14, 15, 19, 0.85);
  backdrop-filter: blur(8px);
}

.brand {
  font-weight: 700;
  text-decoration: none;
}

.container {
  max-width: var(--max-width);
  margin: 0 auto;
  padding: 20px;
}

.card {
  background: var(--surface);
  border-radius: var(--radius);
  overflow: hidden;
}

/* Profile */
.profile {
  display: flex;
  gap: 20px;
  align-items: center;
  padding: 20px;
}

.avatar {
  width: 120px;
  height: 120px;
  border-radius: 50%;
  object-fit: cover;
  flex-shrink: 0;
  background: var(--surface-2);
}

.profileInfo h1 {
  margin: 0 0 4px;
  font-size: 1.75rem;
}

.subtitle {
  margin: 0;
  color: var(--accent);
}

.about {
  margin: 10px 0 0;
  color: var(--muted);
  white-space: pre-line;
}

.pills,
.ctaRow {
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
  margin-top: 14px;
}

.pill {
  padding: 6px 12px;
  border-radius: 999px;
  background: var(--surface-2);
  font-size: 0.875rem;
  text-decoration: none;
}

.btn {
  padding: 10px 16px;
  border-radius: 12px;
  background: var(--accent);
  color: #0e0f13;
  font-weight: 600;
  text-decoration: none;
}

/* Galleries */
.gallery {
  margin-top: 28px;
}

.sectionTitle {
  margin: 0 0 12px;
  font-size: 1.25rem;
}

.swiper {
  padding-bottom: 36px;
}

.figure {
  position: relative;
  margin: 0;
}

.mediaThumb {
  display: block;
  width: 100%;
  aspect-ratio: 16 / 10;
  object-fit: cover;
}

.caption {
  padding: 10px 12px;
  color: var(--muted);
  font-size: 0.875rem;
}

.playBadge {
  position: absolute;
  inset: 0 0 40px 0;
  display: flex;
  align-items: center;
  justify-content: center;
  pointer-events: none;
}

.playIcon {
  width: 56px;
  height: 56px;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.55);
  font-size: 1.25rem;
}

.unstyledBtn {
  width: 100%;
  text-align: left;
}

/* Video modal */
.modal {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: none;
}

.modal[aria-hidden="false"] {
  display: block;
}

.modalBackdrop {
  position: absolute;
  inset: 0;
  background: rgba(0, 0, 0, 0.75);
}

.modalDialog {
  position: relative;
  max-width: 960px;
  margin: 8vh auto 0;
  padding: 0 16px;
}

.modalClose {
  position: absolute;
  top: -40px;
  right: 16px;
  background: none;
  border: none;
  color: var(--text);
  font-size: 1.5rem;
  cursor: pointer;
}

.modalFrame {
  position: relative;
  aspect-ratio: 16 / 9;
  background: #000;
  border-radius: var(--radius);
  overflow: hidden;
}

.modalFrame iframe {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  border: 0;
}

.modalCaption {
  margin: 10px 0 0;
  color: var(--muted);
}

/* Footer */
.footer {
  padding: 24px 20px 40px;
  text-align: center;
  color: var(--muted);
  font-size: 0.875rem;
}

/* Load failure */
.loadError {
  padding: 20px;
  font-family: system-ui, sans-serif;
  color: white;
}

.loadErrorDetail {
  white-space: pre-wrap;
  opacity: 0.85;
}

.loadErrorHint {
  opacity: 0.75;
}

@media (max-width: 560px) {
  .profile {
    flex-direction: column;
    text-align: center;
  }

  .pills,
  .ctaRow {
    justify-content: center;
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_every_rendered_class() {
        let css = AssetPipeline::generate_css();

        for class in [
            ".pill", ".btn", ".mediaThumb", ".playBadge", ".unstyledBtn", ".modalBackdrop",
            ".loadError",
        ] {
            assert!(css.contains(class), "missing {}", class);
        }
    }

    #[test]
    fn minifies_css() {
        let css = AssetPipeline::generate_css();

        let minified = AssetPipeline::minify_css(&css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.len() < css.len());
        assert!(minified.contains(".modalBackdrop"));
    }
}

//! Client bootstrap script generator.
//!
//! Replays recorded widget initializations in the browser and installs the
//! video modal runtime, so the served page behaves like the rendered one.

use crate::traits::{InitCall, WidgetError};

/// Element ids and URL pieces the modal runtime needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalRuntime {
    pub modal_id: String,
    pub close_id: String,
    pub frame_id: String,
    pub caption_id: String,

    /// Selector for controls carrying `data-youtube-id`/`data-caption`
    pub trigger_selector: String,

    /// Embed URL prefix, followed by the encoded video id
    pub embed_base: String,

    /// Embed URL suffix
    pub embed_query: String,
}

/// Generate the bootstrap script for `calls`, preceded by the modal runtime.
pub fn generate_bootstrap(
    calls: &[InitCall],
    modal: Option<&ModalRuntime>,
) -> Result<String, WidgetError> {
    let mut body = String::new();

    if let Some(modal) = modal {
        body.push_str(&generate_modal(modal)?);
    }

    for call in calls {
        let line = match call {
            InitCall::Lightbox(options) => {
                format!("  GLightbox({});\n", serde_json::to_string(options)?)
            }
            InitCall::Carousel(options) => format!(
                "  new Swiper({}, {});\n",
                js_string(&options.selector)?,
                serde_json::to_string(options)?
            ),
        };
        body.push_str(&line);
    }

    let script = format!(
        "/* Generated by cardsite */\n(() => {{\n  'use strict';\n{body}}})();\n",
        body = body
    );

    Ok(script_safe(&script))
}

fn generate_modal(modal: &ModalRuntime) -> Result<String, WidgetError> {
    Ok(format!(
        r#"  const modal = document.getElementById({modal_id});
  const closeBtn = document.getElementById({close_id});
  const frame = document.getElementById({frame_id});
  const caption = document.getElementById({caption_id});
  let current = null;

  const open = (id, text) => {{
    current = id;
    frame.src = {embed_base} + encodeURIComponent(id) + {embed_query};
    caption.textContent = text || '';
    modal.setAttribute('aria-hidden', 'false');
    document.body.style.overflow = 'hidden';
  }};

  const close = () => {{
    if (current === null) return;
    current = null;
    modal.setAttribute('aria-hidden', 'true');
    frame.src = '';
    caption.textContent = '';
    document.body.style.overflow = '';
  }};

  closeBtn.addEventListener('click', close);
  modal.addEventListener('click', (e) => {{
    const t = e.target;
    if (t && t.getAttribute && t.getAttribute('data-close') === 'true') close();
  }});
  window.addEventListener('keydown', (e) => {{
    if (e.key === 'Escape' && current !== null) close();
  }});
  document.querySelectorAll({trigger}).forEach((btn) => {{
    btn.addEventListener('click', () => open(btn.dataset.youtubeId, btn.dataset.caption || ''));
  }});

"#,
        modal_id = js_string(&modal.modal_id)?,
        close_id = js_string(&modal.close_id)?,
        frame_id = js_string(&modal.frame_id)?,
        caption_id = js_string(&modal.caption_id)?,
        embed_base = js_string(&modal.embed_base)?,
        embed_query = js_string(&modal.embed_query)?,
        trigger = js_string(&modal.trigger_selector)?,
    ))
}

/// A JSON string literal is also a valid JavaScript string literal.
fn js_string(s: &str) -> Result<String, WidgetError> {
    Ok(serde_json::to_string(s)?)
}

/// Keep inline scripts from closing their own `<script>` element.
fn script_safe(s: &str) -> String {
    s.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{CarouselOptions, LightboxOptions};

    fn runtime() -> ModalRuntime {
        ModalRuntime {
            modal_id: "videoModal".to_string(),
            close_id: "modalClose".to_string(),
            frame_id: "ytFrame".to_string(),
            caption_id: "videoCaption".to_string(),
            trigger_selector: "#videoWrapper [data-youtube-id]".to_string(),
            embed_base: "https://www.youtube-nocookie.com/embed/".to_string(),
            embed_query: "?rel=0&modestbranding=1".to_string(),
        }
    }

    #[test]
    fn replays_calls_in_order() {
        let calls = vec![
            InitCall::Lightbox(LightboxOptions::default()),
            InitCall::Carousel(CarouselOptions::for_gallery(".photoSwiper")),
            InitCall::Carousel(CarouselOptions::for_gallery(".videoSwiper")),
        ];

        let script = generate_bootstrap(&calls, None).unwrap();

        let lightbox = script.find(r#"GLightbox({"selector":".glightbox"});"#).unwrap();
        let photos = script.find(r#"new Swiper(".photoSwiper", {"#).unwrap();
        let videos = script.find(r#"new Swiper(".videoSwiper", {"#).unwrap();
        assert!(lightbox < photos && photos < videos);
        assert!(script.contains(r#""slidesPerView":1.15"#));
    }

    #[test]
    fn modal_runtime_comes_first() {
        let calls = vec![InitCall::Lightbox(LightboxOptions::default())];

        let script = generate_bootstrap(&calls, Some(&runtime())).unwrap();

        let modal = script.find(r#"document.getElementById("videoModal")"#).unwrap();
        let lightbox = script.find("GLightbox(").unwrap();
        assert!(modal < lightbox);
        assert!(script.contains(r#""https://www.youtube-nocookie.com/embed/" + encodeURIComponent(id)"#));
        assert!(script.contains("e.key === 'Escape'"));
    }

    #[test]
    fn escapes_script_terminators() {
        let mut options = CarouselOptions::for_gallery(".photoSwiper");
        options.selector = "</script>".to_string();

        let script = generate_bootstrap(&[InitCall::Carousel(options)], None).unwrap();

        assert!(!script.contains("</script>"));
    }
}

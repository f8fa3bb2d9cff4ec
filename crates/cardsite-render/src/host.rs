//! Host page skeleton and mount point lookup.
//!
//! The skeleton is the static markup the renderers populate. Renderers never
//! create mount points themselves; they look them up by id and fail with
//! [`RenderError::MissingMount`] when the host page lacks one.

use cardsite_dom::{el, text, Attrs, Document, NodeId};

use crate::RenderError;

/// Mount point ids.
pub mod ids {
    pub const BRAND: &str = "brand";
    pub const PROFILE_NAME: &str = "profileName";
    pub const PROFILE_TITLE: &str = "profileTitle";
    pub const PROFILE_ABOUT: &str = "profileAbout";
    pub const PROFILE_PHOTO: &str = "profilePhoto";
    pub const SOCIAL_LINKS: &str = "socialLinks";
    pub const CTA_ROW: &str = "ctaRow";
    pub const PHOTO_WRAPPER: &str = "photoWrapper";
    pub const VIDEO_WRAPPER: &str = "videoWrapper";
    pub const FOOTER_TEXT: &str = "footerText";
    pub const VIDEO_MODAL: &str = "videoModal";
    pub const MODAL_CLOSE: &str = "modalClose";
    pub const YT_FRAME: &str = "ytFrame";
    pub const VIDEO_CAPTION: &str = "videoCaption";
}

/// Gallery root selectors.
pub const PHOTO_GALLERY: &str = ".photoSwiper";
pub const VIDEO_GALLERY: &str = ".videoSwiper";

/// Look up a required mount point.
pub fn mount(doc: &Document, id: &str) -> Result<NodeId, RenderError> {
    doc.get_element_by_id(id)
        .ok_or_else(|| RenderError::MissingMount(id.to_string()))
}

/// Resolved section mount points.
#[derive(Debug, Clone, Copy)]
pub struct Mounts {
    pub brand: NodeId,
    pub profile_name: NodeId,
    pub profile_title: NodeId,
    pub profile_about: NodeId,
    pub profile_photo: NodeId,
    pub social_links: NodeId,
    pub cta_row: NodeId,
    pub photo_wrapper: NodeId,
    pub video_wrapper: NodeId,
    pub footer_text: NodeId,
}

impl Mounts {
    /// Resolve every section mount point by id.
    pub fn resolve(doc: &Document) -> Result<Self, RenderError> {
        Ok(Self {
            brand: mount(doc, ids::BRAND)?,
            profile_name: mount(doc, ids::PROFILE_NAME)?,
            profile_title: mount(doc, ids::PROFILE_TITLE)?,
            profile_about: mount(doc, ids::PROFILE_ABOUT)?,
            profile_photo: mount(doc, ids::PROFILE_PHOTO)?,
            social_links: mount(doc, ids::SOCIAL_LINKS)?,
            cta_row: mount(doc, ids::CTA_ROW)?,
            photo_wrapper: mount(doc, ids::PHOTO_WRAPPER)?,
            video_wrapper: mount(doc, ids::VIDEO_WRAPPER)?,
            footer_text: mount(doc, ids::FOOTER_TEXT)?,
        })
    }
}

/// Build the host page skeleton into the body of a fresh document.
pub fn skeleton(doc: &mut Document, labels: &crate::Labels) -> NodeId {
    let header = site_header(doc);
    let profile = profile_section(doc);
    let photos = gallery(doc, "photoSwiper", ids::PHOTO_WRAPPER, &labels.photos_heading);
    let videos = gallery(doc, "videoSwiper", ids::VIDEO_WRAPPER, &labels.videos_heading);
    let main = el(doc, "main", Attrs::new().class("container"), &[profile, photos, videos]);

    let footer_text = el(doc, "p", Attrs::new().set("id", ids::FOOTER_TEXT), &[]);
    let footer = el(doc, "footer", Attrs::new().class("footer"), &[footer_text]);

    let modal = video_modal(doc, labels);

    let body = doc.body();
    for node in [header, main, footer, modal] {
        doc.append(body, node);
    }
    body
}

fn site_header(doc: &mut Document) -> NodeId {
    let brand = el(
        doc,
        "a",
        Attrs::new().class("brand").set("id", ids::BRAND).set("href", "#"),
        &[],
    );
    el(doc, "header", Attrs::new().class("topbar"), &[brand])
}

fn profile_section(doc: &mut Document) -> NodeId {
    let photo = el(
        doc,
        "img",
        Attrs::new()
            .class("avatar")
            .set("id", ids::PROFILE_PHOTO)
            .set("src", "")
            .set("alt", ""),
        &[],
    );
    let name = el(doc, "h1", Attrs::new().set("id", ids::PROFILE_NAME), &[]);
    let title = el(doc, "p", Attrs::new().class("subtitle").set("id", ids::PROFILE_TITLE), &[]);
    let about = el(doc, "p", Attrs::new().class("about").set("id", ids::PROFILE_ABOUT), &[]);
    let links = el(doc, "div", Attrs::new().class("pills").set("id", ids::SOCIAL_LINKS), &[]);
    let cta = el(doc, "div", Attrs::new().class("ctaRow").set("id", ids::CTA_ROW), &[]);

    let info = el(doc, "div", Attrs::new().class("profileInfo"), &[name, title, about, links, cta]);
    el(doc, "section", Attrs::new().class("card profile"), &[photo, info])
}

fn gallery(doc: &mut Document, class: &str, wrapper_id: &str, heading: &str) -> NodeId {
    let heading_text = text(doc, heading);
    let h2 = el(doc, "h2", Attrs::new().class("sectionTitle"), &[heading_text]);

    let wrapper = el(
        doc,
        "div",
        Attrs::new().class("swiper-wrapper").set("id", wrapper_id),
        &[],
    );
    let dots = el(doc, "div", Attrs::new().class("swiper-pagination"), &[]);
    let prev = el(doc, "div", Attrs::new().class("swiper-button-prev"), &[]);
    let next = el(doc, "div", Attrs::new().class("swiper-button-next"), &[]);
    let swiper = el(
        doc,
        "div",
        Attrs::new().class(format!("swiper {}", class)),
        &[wrapper, dots, prev, next],
    );

    el(doc, "section", Attrs::new().class("gallery"), &[h2, swiper])
}

fn video_modal(doc: &mut Document, labels: &crate::Labels) -> NodeId {
    let backdrop = el(
        doc,
        "div",
        Attrs::new().class("modalBackdrop").set("data-close", "true"),
        &[],
    );

    let close_icon = text(doc, "✕");
    let close = el(
        doc,
        "button",
        Attrs::new()
            .class("modalClose")
            .set("id", ids::MODAL_CLOSE)
            .set("type", "button")
            .set("aria-label", labels.close.as_str()),
        &[close_icon],
    );

    let frame = el(
        doc,
        "iframe",
        Attrs::new()
            .set("id", ids::YT_FRAME)
            .set("src", "")
            .set("title", labels.video.as_str())
            .set("allow", "autoplay; encrypted-media; picture-in-picture")
            .set("allowfullscreen", "true"),
        &[],
    );
    let frame_box = el(doc, "div", Attrs::new().class("modalFrame"), &[frame]);
    let caption = el(
        doc,
        "p",
        Attrs::new().class("modalCaption").set("id", ids::VIDEO_CAPTION),
        &[],
    );

    let dialog = el(
        doc,
        "div",
        Attrs::new()
            .class("modalDialog")
            .set("role", "dialog")
            .set("aria-modal", "true"),
        &[close, frame_box, caption],
    );

    el(
        doc,
        "div",
        Attrs::new()
            .class("modal")
            .set("id", ids::VIDEO_MODAL)
            .set("aria-hidden", "true"),
        &[backdrop, dialog],
    )
}

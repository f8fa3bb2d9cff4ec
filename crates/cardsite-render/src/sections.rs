//! Section renderers.
//!
//! Every renderer clears its mount point before rebuilding it, so running
//! one twice with the same data leaves the same subtree behind.

use std::rc::Rc;

use cardsite_content::{LinkItem, Photo, Profile, Video};
use cardsite_dom::{el, text, Attrs, Document, NodeId};
use serde::Deserialize;

use crate::host::Mounts;
use crate::RenderError;

/// Callback invoked when a video slide is activated: `(video_id, caption)`.
pub type OpenVideo = Rc<dyn Fn(&mut Document, &str, &str)>;

/// Placeholder and UI texts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Photo caption and alt text placeholder
    pub photo: String,
    /// Video caption and alt text placeholder
    pub video: String,
    /// Brand text when the profile has no name
    pub brand: String,
    /// Profile photo alt text when the profile has no name
    pub profile_photo: String,
    /// Prefix of the video button label
    pub open_video: String,
    pub photos_heading: String,
    pub videos_heading: String,
    /// Modal close control label
    pub close: String,
    /// Heading of the diagnostic view
    pub error_title: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            photo: "Photo".to_string(),
            video: "Video".to_string(),
            brand: "Business card".to_string(),
            profile_photo: "Profile photo".to_string(),
            open_video: "Open video".to_string(),
            photos_heading: "Photos".to_string(),
            videos_heading: "Videos".to_string(),
            close: "Close".to_string(),
            error_title: "Failed to load".to_string(),
        }
    }
}

/// Populate brand, name, title, about and the profile photo.
pub fn render_profile(
    doc: &mut Document,
    mounts: &Mounts,
    profile: Option<&Profile>,
    labels: &Labels,
) -> Result<(), RenderError> {
    let name = profile.and_then(|p| p.name.as_deref()).unwrap_or("");
    let title = profile.and_then(|p| p.title.as_deref()).unwrap_or("");
    let about = profile.and_then(|p| p.about.as_deref()).unwrap_or("");
    let photo = profile.and_then(|p| p.photo.as_deref()).unwrap_or("");

    let brand = if name.is_empty() { labels.brand.as_str() } else { name };
    doc.set_text_content(mounts.brand, brand);
    doc.set_text_content(mounts.profile_name, name);
    doc.set_text_content(mounts.profile_title, title);
    doc.set_text_content(mounts.profile_about, about);

    let alt = if name.is_empty() {
        labels.profile_photo.clone()
    } else {
        format!("{}: {}", labels.photo, name)
    };
    doc.set_attribute(mounts.profile_photo, "src", photo)?;
    doc.set_attribute(mounts.profile_photo, "alt", alt)?;

    Ok(())
}

/// Pill-styled social links, each opening in a new tab.
pub fn render_social_links(doc: &mut Document, mount: NodeId, links: &[LinkItem]) {
    doc.clear_children(mount);

    for link in links {
        let label = text(doc, link.label());
        let a = el(
            doc,
            "a",
            Attrs::new()
                .class("pill")
                .set("href", link.url())
                .set("target", "_blank")
                .set("rel", "noopener noreferrer"),
            &[label],
        );
        doc.append(mount, a);
    }
}

/// Button-styled call-to-action links; mail links stay in the current tab.
pub fn render_cta(doc: &mut Document, mount: NodeId, cta: &[LinkItem]) {
    doc.clear_children(mount);

    for item in cta {
        let target = if item.opens_in_same_tab() { "_self" } else { "_blank" };
        let label = text(doc, item.label());
        let a = el(
            doc,
            "a",
            Attrs::new()
                .class("btn")
                .set("href", item.url())
                .set("target", target)
                .set("rel", "noopener noreferrer"),
            &[label],
        );
        doc.append(mount, a);
    }
}

/// Captioned photo slides wrapped in lightbox triggers.
pub fn render_photo_slides(doc: &mut Document, wrapper: NodeId, photos: &[Photo], labels: &Labels) {
    doc.clear_children(wrapper);

    for photo in photos {
        let caption = photo.caption().unwrap_or(&labels.photo);

        let img = el(
            doc,
            "img",
            Attrs::new()
                .class("mediaThumb")
                .set("src", photo.thumb_src())
                .set("alt", caption)
                .set("loading", "lazy"),
            &[],
        );
        let caption_text = text(doc, caption);
        let figcaption = el(doc, "figcaption", Attrs::new().class("caption"), &[caption_text]);
        let figure = el(doc, "figure", Attrs::new().class("card figure"), &[img, figcaption]);

        let link = el(
            doc,
            "a",
            Attrs::new()
                .class("glightbox")
                .set("href", photo.src())
                .set("data-gallery", "photos")
                .set("data-title", photo.caption().unwrap_or(""))
                .set("data-width", "100vw")
                .set("data-height", "100vh"),
            &[figure],
        );

        let slide = el(doc, "div", Attrs::new().class("swiper-slide"), &[link]);
        doc.append(wrapper, slide);
    }
}

/// Video slides showing a thumbnail with a play badge; activating one calls
/// `on_open` with the video id and caption.
pub fn render_video_slides(
    doc: &mut Document,
    wrapper: NodeId,
    videos: &[Video],
    labels: &Labels,
    on_open: OpenVideo,
) -> Result<(), RenderError> {
    doc.clear_children(wrapper);

    for video in videos {
        let id = video.id().to_string();
        let caption = video.caption().unwrap_or("").to_string();
        let shown = video.caption().unwrap_or(&labels.video);

        let img = el(
            doc,
            "img",
            Attrs::new()
                .class("mediaThumb")
                .set("src", video.thumbnail_url())
                .set("alt", shown)
                .set("loading", "lazy"),
            &[],
        );

        let play = text(doc, "▶");
        let icon = el(
            doc,
            "div",
            Attrs::new().class("playIcon").set("aria-hidden", "true"),
            &[play],
        );
        let badge = el(doc, "div", Attrs::new().class("playBadge"), &[icon]);

        let caption_text = text(doc, shown);
        let figcaption = el(doc, "figcaption", Attrs::new().class("caption"), &[caption_text]);
        let figure = el(
            doc,
            "figure",
            Attrs::new().class("card figure"),
            &[img, badge, figcaption],
        );

        let open = Rc::clone(&on_open);
        let (click_id, click_caption) = (id.clone(), caption.clone());
        let button = el(
            doc,
            "button",
            Attrs::new()
                .class("unstyledBtn")
                .set("type", "button")
                .set("aria-label", format!("{}: {}", labels.open_video, caption))
                .set("data-youtube-id", id)
                .set("data-caption", caption)
                .on("click", move |doc, _| open(doc, &click_id, &click_caption)),
            &[figure],
        );

        // Let the button cover the whole card.
        doc.set_style(button, "all", "unset")?;
        doc.set_style(button, "cursor", "pointer")?;
        doc.set_style(button, "display", "block")?;

        let slide = el(doc, "div", Attrs::new().class("swiper-slide"), &[button]);
        doc.append(wrapper, slide);
    }

    Ok(())
}

/// `© <owner> · <year>`.
pub fn footer_text(owner: &str, year: i32) -> String {
    format!("© {} · {}", owner, year)
}

/// Write the footer line.
pub fn render_footer(doc: &mut Document, mount: NodeId, owner: &str, year: i32) {
    doc.set_text_content(mount, &footer_text(owner, year));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use cardsite_dom::Event;
    use pretty_assertions::assert_eq;

    use crate::host::skeleton;

    fn page() -> (Document, Mounts) {
        let mut doc = Document::new();
        skeleton(&mut doc, &Labels::default());
        let mounts = Mounts::resolve(&doc).unwrap();
        (doc, mounts)
    }

    fn link(label: &str, url: &str) -> LinkItem {
        LinkItem {
            label: Some(label.to_string()),
            url: Some(url.to_string()),
        }
    }

    #[test]
    fn missing_profile_fields_render_empty() {
        let (mut doc, mounts) = page();

        render_profile(&mut doc, &mounts, Some(&Profile::default()), &Labels::default()).unwrap();

        assert_eq!(doc.text_content(mounts.profile_name), "");
        assert_eq!(doc.text_content(mounts.profile_title), "");
        assert_eq!(doc.text_content(mounts.profile_about), "");
        assert_eq!(doc.attribute(mounts.profile_photo, "src"), Some(""));
        assert_eq!(doc.text_content(mounts.brand), "Business card");
        assert_eq!(doc.attribute(mounts.profile_photo, "alt"), Some("Profile photo"));
    }

    #[test]
    fn absent_profile_renders_empty() {
        let (mut doc, mounts) = page();

        render_profile(&mut doc, &mounts, None, &Labels::default()).unwrap();

        let html = doc.to_html(doc.body());
        assert!(!html.contains("undefined"));
        assert!(!html.contains("null"));
        assert_eq!(doc.text_content(mounts.profile_name), "");
    }

    #[test]
    fn profile_fields_are_populated() {
        let (mut doc, mounts) = page();
        let profile = Profile {
            name: Some("Anna".to_string()),
            title: Some("Photographer".to_string()),
            photo: Some("me.jpg".to_string()),
            ..Default::default()
        };

        render_profile(&mut doc, &mounts, Some(&profile), &Labels::default()).unwrap();

        assert_eq!(doc.text_content(mounts.brand), "Anna");
        assert_eq!(doc.text_content(mounts.profile_title), "Photographer");
        assert_eq!(doc.attribute(mounts.profile_photo, "src"), Some("me.jpg"));
        assert_eq!(doc.attribute(mounts.profile_photo, "alt"), Some("Photo: Anna"));
    }

    #[test]
    fn social_links_open_in_new_tab() {
        let (mut doc, mounts) = page();
        let links = vec![link("GitHub", "https://github.com/a"), link("Mail", "mailto:a@b.c")];

        render_social_links(&mut doc, mounts.social_links, &links);

        let anchors = doc.children(mounts.social_links).to_vec();
        assert_eq!(anchors.len(), 2);
        for a in anchors {
            assert_eq!(doc.attribute(a, "target"), Some("_blank"));
            assert_eq!(doc.attribute(a, "class"), Some("pill"));
            assert_eq!(doc.attribute(a, "rel"), Some("noopener noreferrer"));
        }
    }

    #[test]
    fn cta_targets_follow_mailto_rule() {
        let (mut doc, mounts) = page();
        let cta = vec![
            link("Write", "mailto:a@b.c"),
            link("Book", "https://cal.example/a"),
            LinkItem::default(),
        ];

        render_cta(&mut doc, mounts.cta_row, &cta);

        let targets: Vec<_> = doc
            .children(mounts.cta_row)
            .iter()
            .map(|a| doc.attribute(*a, "target").unwrap().to_string())
            .collect();
        assert_eq!(targets, vec!["_self", "_blank", "_blank"]);
    }

    #[test]
    fn photo_slides_default_thumb_and_caption() {
        let (mut doc, mounts) = page();
        let photos = vec![
            Photo {
                src: Some("full.jpg".to_string()),
                ..Default::default()
            },
            Photo {
                src: Some("b.jpg".to_string()),
                thumb: Some("b-small.jpg".to_string()),
                caption: Some("Sea".to_string()),
            },
        ];

        render_photo_slides(&mut doc, mounts.photo_wrapper, &photos, &Labels::default());

        let imgs = doc.query_all("#photoWrapper img.mediaThumb").unwrap();
        assert_eq!(doc.attribute(imgs[0], "src"), Some("full.jpg"));
        assert_eq!(doc.attribute(imgs[0], "alt"), Some("Photo"));
        assert_eq!(doc.attribute(imgs[1], "src"), Some("b-small.jpg"));

        let links = doc.query_all("#photoWrapper a.glightbox").unwrap();
        assert_eq!(doc.attribute(links[0], "href"), Some("full.jpg"));
        assert_eq!(doc.attribute(links[0], "data-title"), Some(""));
        assert_eq!(doc.attribute(links[1], "data-title"), Some("Sea"));
        assert_eq!(doc.attribute(links[1], "data-width"), Some("100vw"));
        assert_eq!(doc.attribute(links[1], "data-height"), Some("100vh"));

        let captions = doc.query_all("#photoWrapper figcaption").unwrap();
        assert_eq!(doc.text_content(captions[0]), "Photo");
        assert_eq!(doc.text_content(captions[1]), "Sea");
    }

    #[test]
    fn video_thumbnail_uses_template() {
        let (mut doc, mounts) = page();
        let videos = vec![Video {
            youtube_id: Some("dQw4w9WgXcQ".to_string()),
            caption: None,
        }];

        render_video_slides(
            &mut doc,
            mounts.video_wrapper,
            &videos,
            &Labels::default(),
            Rc::new(|_: &mut Document, _: &str, _: &str| {}),
        )
        .unwrap();

        let img = doc.query_all("#videoWrapper img").unwrap()[0];
        assert_eq!(
            doc.attribute(img, "src"),
            Some("https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg")
        );
        assert_eq!(doc.attribute(img, "alt"), Some("Video"));
        assert_eq!(doc.query_all("#videoWrapper .playBadge .playIcon").unwrap().len(), 1);
    }

    #[test]
    fn video_click_invokes_open_with_id_and_caption() {
        let (mut doc, mounts) = page();
        let videos = vec![Video {
            youtube_id: Some("abc".to_string()),
            caption: Some("Reel".to_string()),
        }];
        let opened: Rc<RefCell<Vec<(String, String)>>> = Rc::default();
        let sink = Rc::clone(&opened);

        render_video_slides(
            &mut doc,
            mounts.video_wrapper,
            &videos,
            &Labels::default(),
            Rc::new(move |_: &mut Document, id: &str, caption: &str| {
                sink.borrow_mut().push((id.to_string(), caption.to_string()));
            }),
        )
        .unwrap();

        // Clicking the thumbnail bubbles up to the button.
        let img = doc.query_all("#videoWrapper img").unwrap()[0];
        doc.dispatch(&Event::click(img));

        assert_eq!(*opened.borrow(), vec![("abc".to_string(), "Reel".to_string())]);

        let button = doc.query_all("#videoWrapper button.unstyledBtn").unwrap()[0];
        assert_eq!(doc.attribute(button, "aria-label"), Some("Open video: Reel"));
        assert_eq!(doc.style(button, "display"), "block");
    }

    #[test]
    fn renderers_are_idempotent() {
        let (mut doc, mounts) = page();
        let links = vec![link("A", "https://a.example")];
        let photos = vec![Photo {
            src: Some("a.jpg".to_string()),
            ..Default::default()
        }];
        let videos = vec![Video {
            youtube_id: Some("v".to_string()),
            caption: None,
        }];
        let profile = Profile {
            name: Some("Anna".to_string()),
            photo: Some("me.jpg".to_string()),
            ..Default::default()
        };
        let labels = Labels::default();
        let noop: OpenVideo = Rc::new(|_: &mut Document, _: &str, _: &str| {});

        let mut snapshots = Vec::new();
        for _ in 0..2 {
            render_profile(&mut doc, &mounts, Some(&profile), &labels).unwrap();
            render_social_links(&mut doc, mounts.social_links, &links);
            render_cta(&mut doc, mounts.cta_row, &links);
            render_photo_slides(&mut doc, mounts.photo_wrapper, &photos, &labels);
            render_video_slides(&mut doc, mounts.video_wrapper, &videos, &labels, Rc::clone(&noop))
                .unwrap();
            render_footer(&mut doc, mounts.footer_text, "Anna", 2026);
            snapshots.push(doc.to_html(doc.body()));
        }

        assert_eq!(snapshots[0], snapshots[1]);
        assert_eq!(doc.children(mounts.photo_wrapper).len(), 1);
        assert_eq!(doc.children(mounts.video_wrapper).len(), 1);
        assert_eq!(doc.children(mounts.social_links).len(), 1);
        assert_eq!(doc.text_content(mounts.brand), "Anna");
        assert_eq!(doc.text_content(mounts.footer_text), "© Anna · 2026");
    }

    #[test]
    fn absent_collections_render_nothing() {
        let (mut doc, mounts) = page();
        let noop: OpenVideo = Rc::new(|_: &mut Document, _: &str, _: &str| {});

        render_photo_slides(&mut doc, mounts.photo_wrapper, &[], &Labels::default());
        render_video_slides(&mut doc, mounts.video_wrapper, &[], &Labels::default(), noop).unwrap();

        assert!(doc.children(mounts.photo_wrapper).is_empty());
        assert!(doc.children(mounts.video_wrapper).is_empty());
    }

    #[test]
    fn footer_shows_owner_and_year() {
        assert_eq!(footer_text("A", 2026), "© A · 2026");
    }
}

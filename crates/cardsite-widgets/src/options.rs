//! Widget configuration objects.
//!
//! Field names serialize to the option names Swiper and GLightbox expect.

use std::collections::BTreeMap;

use serde::Serialize;

/// Carousel configuration for one gallery.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselOptions {
    /// Root selector of the gallery markup (not serialized)
    #[serde(skip)]
    pub selector: String,

    /// Items visible at the narrowest viewport
    pub slides_per_view: f64,

    /// Gap between slides in pixels
    pub space_between: u32,

    pub grab_cursor: bool,

    /// Disable navigation when slides do not overflow
    pub watch_overflow: bool,

    pub pagination: Pagination,

    pub navigation: Navigation,

    /// Overrides keyed by viewport min-width in pixels
    pub breakpoints: BTreeMap<u32, Breakpoint>,
}

/// Paginated dots configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pagination {
    pub el: String,
    pub clickable: bool,
}

/// Previous/next controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub next_el: String,
    pub prev_el: String,
}

/// Per-breakpoint overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
    pub slides_per_view: f64,
    pub space_between: u32,
}

impl CarouselOptions {
    /// Default gallery carousel scoped to the markup under `selector`.
    ///
    /// One main item (plus a peek of the next) on phones, widening to 2.35
    /// items at 1180px and above.
    pub fn for_gallery(selector: &str) -> Self {
        let breakpoints = BTreeMap::from([
            (
                560,
                Breakpoint {
                    slides_per_view: 2.05,
                    space_between: 12,
                },
            ),
            (
                980,
                Breakpoint {
                    slides_per_view: 2.2,
                    space_between: 14,
                },
            ),
            (
                1180,
                Breakpoint {
                    slides_per_view: 2.35,
                    space_between: 14,
                },
            ),
        ]);

        Self {
            selector: selector.to_string(),
            slides_per_view: 1.15,
            space_between: 12,
            grab_cursor: true,
            watch_overflow: true,
            pagination: Pagination {
                el: format!("{} .swiper-pagination", selector),
                clickable: true,
            },
            navigation: Navigation {
                next_el: format!("{} .swiper-button-next", selector),
                prev_el: format!("{} .swiper-button-prev", selector),
            },
            breakpoints,
        }
    }

    /// Items visible at the widest configured breakpoint.
    pub fn widest_slides_per_view(&self) -> f64 {
        self.breakpoints
            .values()
            .next_back()
            .map(|b| b.slides_per_view)
            .unwrap_or(self.slides_per_view)
    }
}

/// Lightbox configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightboxOptions {
    /// Selector for trigger anchors
    pub selector: String,
}

impl Default for LightboxOptions {
    fn default() -> Self {
        Self {
            selector: ".glightbox".to_string(),
        }
    }
}

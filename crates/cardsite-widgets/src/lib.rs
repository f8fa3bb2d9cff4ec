//! Carousel and lightbox adapters.
//!
//! The page core never reaches for widget globals. It talks to the
//! [`CarouselFactory`] and [`LightboxFactory`] capabilities, and the Swiper
//! and GLightbox implementations here record the calls so they can be
//! replayed by the generated client bootstrap script.

pub mod generator;
pub mod options;
pub mod swiper;
pub mod traits;

pub use generator::{generate_bootstrap, ModalRuntime};
pub use options::{Breakpoint, CarouselOptions, LightboxOptions, Navigation, Pagination};
pub use swiper::{GLightboxFactory, SwiperFactory};
pub use traits::{CarouselFactory, InitCall, LightboxFactory, WidgetError, WidgetHandle, WidgetKind};

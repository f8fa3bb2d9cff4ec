//! Inline video player overlay.
//!
//! The open/closed state lives in [`ModalState`]; the overlay's DOM
//! attributes are only ever written from it, never read back.

use std::cell::RefCell;
use std::rc::Rc;

use cardsite_content::embed_url;
use cardsite_dom::{Document, DomError, Event, NodeId};

use crate::host::{ids, mount};
use crate::sections::OpenVideo;
use crate::RenderError;

/// Key that closes an open modal.
const CANCEL_KEY: &str = "Escape";

/// Current modal state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open { video_id: String, caption: String },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

/// Elements the modal projects its state onto.
#[derive(Debug, Clone, Copy)]
pub struct ModalMount {
    pub container: NodeId,
    pub close: NodeId,
    pub frame: NodeId,
    pub caption: NodeId,
    pub body: NodeId,
}

impl ModalMount {
    /// Resolve the modal elements by id.
    pub fn resolve(doc: &Document) -> Result<Self, RenderError> {
        Ok(Self {
            container: mount(doc, ids::VIDEO_MODAL)?,
            close: mount(doc, ids::MODAL_CLOSE)?,
            frame: mount(doc, ids::YT_FRAME)?,
            caption: mount(doc, ids::VIDEO_CAPTION)?,
            body: doc.body(),
        })
    }
}

/// Video modal controller.
#[derive(Debug)]
pub struct VideoModal {
    state: ModalState,
    mount: ModalMount,
}

impl VideoModal {
    /// Create a closed modal over `mount` without wiring any triggers.
    pub fn new(mount: ModalMount) -> Self {
        Self {
            state: ModalState::Closed,
            mount,
        }
    }

    /// Create a closed modal and bind its close triggers: the close control,
    /// a click on any `data-close="true"` element inside the overlay, and the
    /// cancel key while open.
    ///
    /// Install once per document: the triggers are never unbound, so a
    /// second install on the same mount stacks another set.
    pub fn install(
        doc: &mut Document,
        mount: ModalMount,
    ) -> Result<Rc<RefCell<Self>>, RenderError> {
        let modal = Rc::new(RefCell::new(Self::new(mount)));

        let on_close = Rc::clone(&modal);
        doc.add_event_listener(
            mount.close,
            "click",
            Rc::new(move |doc: &mut Document, _: &Event| {
                close_logged(&on_close, doc);
            }),
        )?;

        let on_backdrop = Rc::clone(&modal);
        doc.add_event_listener(
            mount.container,
            "click",
            Rc::new(move |doc: &mut Document, event: &Event| {
                if doc.attribute(event.target, "data-close") == Some("true") {
                    close_logged(&on_backdrop, doc);
                }
            }),
        )?;

        let on_key = Rc::clone(&modal);
        doc.add_window_listener(
            "keydown",
            Rc::new(move |doc: &mut Document, event: &Event| {
                let open = on_key.borrow().state.is_open();
                if open && event.key.as_deref() == Some(CANCEL_KEY) {
                    close_logged(&on_key, doc);
                }
            }),
        );

        Ok(modal)
    }

    /// Callback for video slides that opens this modal.
    pub fn opener(modal: &Rc<RefCell<Self>>) -> OpenVideo {
        let modal = Rc::clone(modal);
        Rc::new(move |doc: &mut Document, id: &str, caption: &str| {
            if let Err(e) = modal.borrow_mut().open(doc, id, caption) {
                tracing::warn!("Failed to open video {}: {}", id, e);
            }
        })
    }

    /// Current state.
    pub fn state(&self) -> &ModalState {
        &self.state
    }

    /// Show `video_id`. Replaces the current video when already open.
    pub fn open(
        &mut self,
        doc: &mut Document,
        video_id: &str,
        caption: &str,
    ) -> Result<(), DomError> {
        self.state = ModalState::Open {
            video_id: video_id.to_string(),
            caption: caption.to_string(),
        };
        self.project(doc)
    }

    /// Hide the overlay and stop playback. A no-op when already closed.
    pub fn close(&mut self, doc: &mut Document) -> Result<(), DomError> {
        if !self.state.is_open() {
            return Ok(());
        }
        self.state = ModalState::Closed;
        self.project(doc)
    }

    /// Write the current state onto the overlay elements.
    fn project(&self, doc: &mut Document) -> Result<(), DomError> {
        let m = self.mount;
        match &self.state {
            ModalState::Open { video_id, caption } => {
                doc.set_attribute(m.frame, "src", embed_url(video_id))?;
                doc.set_text_content(m.caption, caption);
                doc.set_attribute(m.container, "aria-hidden", "false")?;
                doc.set_style(m.body, "overflow", "hidden")?;
            }
            ModalState::Closed => {
                doc.set_attribute(m.container, "aria-hidden", "true")?;
                // Clearing the source stops playback.
                doc.set_attribute(m.frame, "src", "")?;
                doc.set_text_content(m.caption, "");
                doc.set_style(m.body, "overflow", "")?;
            }
        }
        Ok(())
    }
}

fn close_logged(modal: &Rc<RefCell<VideoModal>>, doc: &mut Document) {
    if let Err(e) = modal.borrow_mut().close(doc) {
        tracing::warn!("Failed to close video modal: {}", e);
    }
}

//! Owns every presentation resource and applies simulator effects to them.
//!
//! Event closures only ever call [`dispatch`]; all state changes go through
//! `Simulator::dispatch` and come back as effects. The simulator borrow is
//! released before any effect touches the DOM.

use crate::constants::{GALLERY_CLASS, GALLERY_ID, SIMULATION_ID};
use crate::controls::Controls;
use crate::dom;
use crate::gallery::GalleryView;
use crate::view::ImageView;
use focalsim_core::{Effect, ImageCache, Message, Simulator};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct Shell {
    pub document: web::Document,
    pub sim: RefCell<Simulator>,
    pub images: RefCell<ImageCache<web::HtmlImageElement>>,
    pub controls: Controls,
    pub preview: RefCell<ImageView>,
    pub gallery: RefCell<GalleryView>,
}

impl Shell {
    /// Build `#simulation` (controls + preview) and `#gallery` under `app`.
    pub fn mount(
        document: &web::Document,
        app: &web::Element,
        sim: Simulator,
    ) -> anyhow::Result<Rc<Self>> {
        let simulation = dom::div(document, "")?;
        simulation.set_id(SIMULATION_ID);

        let controls = Controls::new(document, &sim)?;
        dom::append(&simulation, controls.element());

        let preview = ImageView::new(document, sim.preview().aspect)?;
        dom::append(&simulation, preview.element());
        dom::append(app, &simulation);

        let gallery_root = dom::div(document, GALLERY_CLASS)?;
        gallery_root.set_id(GALLERY_ID);
        dom::append(app, &gallery_root);
        let gallery = GalleryView::new(document, gallery_root)?;

        Ok(Rc::new(Self {
            document: document.clone(),
            sim: RefCell::new(sim),
            images: RefCell::new(ImageCache::new()),
            controls,
            preview: RefCell::new(preview),
            gallery: RefCell::new(gallery),
        }))
    }

    fn apply(self: &Rc<Self>, effect: Effect) {
        match effect {
            Effect::SyncControls => self.controls.sync(self),
            Effect::RelayoutPreview => {
                let aspect = self.sim.borrow().preview().aspect;
                self.preview.borrow_mut().relayout(aspect);
                self.redraw_preview();
            }
            Effect::RedrawPreview => self.redraw_preview(),
            Effect::CaptureAdded(id) => {
                if let Err(e) = self.gallery.borrow_mut().add_tile(self, id) {
                    log::error!("[gallery] could not add {}: {:?}", id, e);
                }
            }
            Effect::CaptureRemoved(id) => self.gallery.borrow_mut().remove_tile(id),
            Effect::GalleryCleared => self.gallery.borrow_mut().clear(),
            Effect::RedrawCapture(id) => self.gallery.borrow_mut().refresh_tile(self, id),
        }
    }

    fn redraw_preview(&self) {
        let sim = self.sim.borrow();
        let view = sim.preview();
        self.preview
            .borrow_mut()
            .draw(sim.catalog(), &view, &self.images.borrow());
    }
}

pub fn dispatch(shell: &Rc<Shell>, msg: Message) {
    let effects = shell.sim.borrow_mut().dispatch(msg);
    for effect in effects {
        shell.apply(effect);
    }
}

//! Typed message dispatch between the view layer and simulator state.
//!
//! Views turn DOM events into [`Message`]s; [`Simulator::dispatch`] applies
//! them and answers with the [`Effect`]s the views must carry out. The
//! simulator never touches presentation resources.

use crate::catalog::{Catalog, Ratio};
use crate::frame::reference_for;
use crate::gallery::{Capture, CaptureId, Gallery};
use crate::state::{SimulationState, ViewParams};
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    SelectSensor(usize),
    SelectAspect(Ratio),
    SetFocal(f64),
    QuickFocal(f64),
    ToggleOrientation,
    Shutter,
    SelectCapture(CaptureId),
    DeleteCapture(CaptureId),
    ClearGallery,
    Resized,
    ImageLoaded { src: String },
    ImageFailed { src: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Re-read selects, slider, readout and quick-select buttons.
    SyncControls,
    /// Preview frame proportions changed; recompute canvas size.
    RelayoutPreview,
    RedrawPreview,
    CaptureAdded(CaptureId),
    CaptureRemoved(CaptureId),
    GalleryCleared,
    RedrawCapture(CaptureId),
}

pub type Effects = SmallVec<[Effect; 4]>;

pub struct Simulator {
    catalog: Catalog,
    state: SimulationState,
    gallery: Gallery,
}

impl Simulator {
    pub fn new(catalog: Catalog, focal_mm: f64) -> Self {
        let state = SimulationState::new(&catalog, focal_mm);
        Self {
            catalog,
            state,
            gallery: Gallery::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn preview(&self) -> ViewParams {
        self.state.view()
    }

    pub fn capture(&self, id: CaptureId) -> Option<&Capture> {
        self.gallery.get(id)
    }

    pub fn dispatch(&mut self, msg: Message) -> Effects {
        let mut fx = Effects::new();
        match msg {
            Message::SelectSensor(index) => {
                if self.state.select_sensor(&self.catalog, index) {
                    fx.push(Effect::RedrawPreview);
                    fx.push(Effect::SyncControls);
                } else {
                    log::warn!("[dispatch] unknown sensor index {}", index);
                }
            }
            Message::SelectAspect(ratio) => {
                self.state.select_aspect(ratio);
                fx.push(Effect::RelayoutPreview);
                fx.push(Effect::SyncControls);
            }
            Message::SetFocal(focal) | Message::QuickFocal(focal) => {
                if self.state.set_focal(focal) {
                    fx.push(Effect::RedrawPreview);
                    fx.push(Effect::SyncControls);
                }
            }
            Message::ToggleOrientation => {
                self.state.toggle_orientation();
                fx.push(Effect::RelayoutPreview);
                fx.push(Effect::SyncControls);
            }
            Message::Shutter => {
                let view = self.state.view();
                let id = self.gallery.add(view);
                log::info!(
                    "[shutter] {} {}mm {} on sensor {}",
                    id,
                    view.focal_mm,
                    view.aspect,
                    view.sensor
                );
                fx.push(Effect::CaptureAdded(id));
                self.relayout_all(&mut fx);
            }
            Message::SelectCapture(id) => match self.gallery.get(id) {
                Some(capture) => {
                    let view = capture.view;
                    self.state.restore(&self.catalog, &view);
                    fx.push(Effect::RelayoutPreview);
                    fx.push(Effect::SyncControls);
                }
                None => log::warn!("[dispatch] select of missing {}", id),
            },
            Message::DeleteCapture(id) => {
                if self.gallery.remove(id) {
                    fx.push(Effect::CaptureRemoved(id));
                    self.relayout_all(&mut fx);
                }
            }
            Message::ClearGallery => {
                if !self.gallery.is_empty() {
                    self.gallery.clear();
                    fx.push(Effect::GalleryCleared);
                    self.relayout_all(&mut fx);
                }
            }
            Message::Resized => self.relayout_all(&mut fx),
            Message::ImageLoaded { src } => {
                // Only views currently showing this photo care; other loads are stale.
                if self.shows(&self.state.view(), &src) {
                    fx.push(Effect::RedrawPreview);
                }
                let ids: Vec<CaptureId> = self
                    .gallery
                    .iter()
                    .filter(|c| self.shows(&c.view, &src))
                    .map(|c| c.id)
                    .collect();
                fx.extend(ids.into_iter().map(Effect::RedrawCapture));
            }
            Message::ImageFailed { src } => {
                log::warn!("[images] failed to load {}; keeping previous frame", src);
            }
        }
        fx
    }

    /// Adding or removing tiles can reflow the page (a scrollbar appearing),
    /// so every canvas is refitted just as after a window resize.
    fn relayout_all(&self, fx: &mut Effects) {
        fx.push(Effect::RelayoutPreview);
        fx.extend(self.gallery.iter().map(|c| Effect::RedrawCapture(c.id)));
    }

    fn shows(&self, view: &ViewParams, src: &str) -> bool {
        reference_for(&self.catalog, view).1.src == src
    }
}

//! Decode-readiness tracking for reference photos.
//!
//! The web layer owns the actual image elements; this cache only records which
//! `src` is pending, decoded (with its natural size) or failed, so rendering
//! can skip instead of erroring while a photo is still in flight.

use crate::optics::ReferenceImage;
use fnv::FnvHashMap;
use glam::DVec2;

#[derive(Clone, Debug)]
pub struct LoadedImage<H> {
    pub handle: H,
    pub natural: DVec2,
}

#[derive(Clone, Debug)]
pub enum ImageSlot<H> {
    Pending,
    Ready(LoadedImage<H>),
    Failed,
}

/// Why a handle is not available yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotReady {
    Pending,
    Failed,
    Unknown,
}

#[derive(Clone, Debug)]
pub struct ImageCache<H> {
    slots: FnvHashMap<String, ImageSlot<H>>,
}

impl<H> Default for ImageCache<H> {
    fn default() -> Self {
        Self {
            slots: FnvHashMap::default(),
        }
    }
}

impl<H> ImageCache<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_pending(&mut self, src: &str) {
        self.slots.insert(src.to_string(), ImageSlot::Pending);
    }

    pub fn mark_ready(&mut self, src: &str, handle: H, natural: DVec2) {
        self.slots.insert(
            src.to_string(),
            ImageSlot::Ready(LoadedImage { handle, natural }),
        );
    }

    pub fn mark_failed(&mut self, src: &str) {
        self.slots.insert(src.to_string(), ImageSlot::Failed);
    }

    pub fn slot(&self, src: &str) -> Option<&ImageSlot<H>> {
        self.slots.get(src)
    }

    /// Decoded photo for `reference`, or the reason it cannot be drawn yet.
    pub fn handle(&self, reference: &ReferenceImage) -> Result<&LoadedImage<H>, NotReady> {
        match self.slots.get(&reference.src) {
            Some(ImageSlot::Ready(img)) => Ok(img),
            Some(ImageSlot::Pending) => Err(NotReady::Pending),
            Some(ImageSlot::Failed) => Err(NotReady::Failed),
            None => Err(NotReady::Unknown),
        }
    }

    /// True once no registered photo is still loading.
    pub fn settled(&self) -> bool {
        !self
            .slots
            .values()
            .any(|s| matches!(s, ImageSlot::Pending))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

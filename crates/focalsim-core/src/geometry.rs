//! Layout and draw geometry for the preview canvases.
//!
//! Everything here is in CSS pixels unless stated otherwise; the web frontend
//! applies the device pixel ratio through the canvas transform.

use crate::catalog::Ratio;
use crate::optics::ReferenceImage;
use glam::DVec2;

/// Drawing surface size reported by the view layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub size: DVec2,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            size: DVec2::new(width, height),
            device_pixel_ratio,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0)
    }

    /// Device pixel ratio with unusable values replaced by 1.
    #[inline]
    pub fn pixel_ratio(&self) -> f64 {
        if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        }
    }

    /// Canvas backing-store size in device pixels, at least 1x1.
    pub fn backing_size(&self) -> (u32, u32) {
        let px = self.size * self.pixel_ratio();
        ((px.x as u32).max(1), (px.y as u32).max(1))
    }
}

/// Where and how large to draw a reference photo so it covers the viewport
/// and matches the requested field of view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderGeometry {
    pub cover_scale: f64,
    pub zoom_factor: f64,
    pub scale: f64,
    pub draw_size: DVec2,
    pub offset: DVec2,
}

/// Cover-fit the photo to `viewport`, then zoom by how far the requested
/// effective focal exceeds the rung the photo was shot at. Returns `None` while
/// the photo has no natural size yet or the viewport has no area.
pub fn compute_render_scale(
    effective_focal: f64,
    reference: &ReferenceImage,
    viewport: DVec2,
    natural: DVec2,
) -> Option<RenderGeometry> {
    if !(natural.x > 0.0 && natural.y > 0.0) {
        return None;
    }
    if !(viewport.x > 0.0 && viewport.y > 0.0) {
        return None;
    }
    if !(reference.baseline_focal_mm > 0.0) {
        return None;
    }
    let cover_scale = (viewport / natural).max_element();
    let zoom_factor = effective_focal / reference.baseline_focal_mm;
    let scale = cover_scale * zoom_factor;
    let draw_size = natural * scale;
    let offset = (viewport - draw_size) / 2.0;
    Some(RenderGeometry {
        cover_scale,
        zoom_factor,
        scale,
        draw_size,
        offset,
    })
}

/// Largest box of proportions `ratio` that fits `available`. Width is filled
/// first; height only constrains when it is known (non-zero).
pub fn fit_aspect(available: DVec2, ratio: Ratio) -> DVec2 {
    let r = ratio.value();
    if !(r > 0.0) {
        return available;
    }
    let mut layout = DVec2::new(available.x, available.x / r);
    if available.y > 0.0 && layout.y > available.y {
        layout = DVec2::new(available.y * r, available.y);
    }
    layout
}

use crate::catalog::Catalog;
use crate::geometry::{compute_render_scale, RenderGeometry, Viewport};
use crate::images::{ImageCache, NotReady};
use crate::optics::ReferenceImage;
use crate::state::ViewParams;

/// Outcome of running the render pipeline for one view.
#[derive(Clone, Debug, PartialEq)]
pub enum FramePlan {
    Draw {
        src: String,
        geometry: RenderGeometry,
    },
    /// Photo not decoded (or failed); leave the canvas as it is.
    NotReady { src: String, reason: NotReady },
    /// Nothing sensible to draw: zero-area viewport or zero natural size.
    Skip,
}

/// Reference photo a view resolves to, via the baseline-equivalent focal.
pub fn reference_for<'c>(catalog: &'c Catalog, view: &ViewParams) -> (f64, &'c ReferenceImage) {
    let ladder = catalog.ladder();
    let effective = match catalog.sensor(view.sensor) {
        Some(sensor) => ladder.effective_focal(view.focal_mm, sensor),
        None => view.focal_mm,
    };
    (effective, ladder.select(effective))
}

pub fn plan_frame<H>(
    catalog: &Catalog,
    view: &ViewParams,
    viewport: &Viewport,
    cache: &ImageCache<H>,
) -> FramePlan {
    if viewport.is_empty() {
        return FramePlan::Skip;
    }
    let (effective, reference) = reference_for(catalog, view);
    let loaded = match cache.handle(reference) {
        Ok(img) => img,
        Err(reason) => {
            return FramePlan::NotReady {
                src: reference.src.clone(),
                reason,
            }
        }
    };
    match compute_render_scale(effective, reference, viewport.size, loaded.natural) {
        Some(geometry) => FramePlan::Draw {
            src: reference.src.clone(),
            geometry,
        },
        None => FramePlan::Skip,
    }
}

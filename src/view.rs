use crate::constants::{CANVAS_WRAPPER_CLASS, CHECKER_DARK, CHECKER_LIGHT, CHECKER_TILE_PX};
use crate::dom;
use focalsim_core::{
    fit_aspect, plan_frame, Catalog, FramePlan, ImageCache, ImageSlot, NotReady, Ratio,
    ViewParams, Viewport,
};
use glam::DVec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Canvas preview of one [`ViewParams`]: wrapper sized by CSS aspect-ratio,
/// canvas fitted inside it, photo drawn with the planned geometry.
pub struct ImageView {
    wrapper: web::HtmlElement,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    checker: Option<web::CanvasPattern>,
    viewport: Viewport,
}

impl ImageView {
    pub fn new(document: &web::Document, aspect: Ratio) -> anyhow::Result<Self> {
        let wrapper = dom::div(document, CANVAS_WRAPPER_CLASS)?;
        dom::set_style(&wrapper, "position", "relative");
        dom::set_style(&wrapper, "width", "100%");
        dom::set_style(&wrapper, "overflow", "hidden");
        dom::set_style(&wrapper, "aspect-ratio", &aspect.css());

        let canvas = dom::create::<web::HtmlCanvasElement>(document, "canvas", "")?;
        dom::set_style(&canvas, "display", "block");
        dom::set_style(&canvas, "width", "100%");
        dom::append(&wrapper, &canvas);

        let ctx = context_2d(&canvas)?;
        Ok(Self {
            wrapper,
            canvas,
            ctx,
            checker: None,
            viewport: Viewport::new(0.0, 0.0, 1.0),
        })
    }

    pub fn element(&self) -> &web::HtmlElement {
        &self.wrapper
    }

    /// Refit the canvas to the wrapper for `aspect`. Resizing clears the
    /// backing store, so the checkerboard is repainted straight away.
    pub fn relayout(&mut self, aspect: Ratio) {
        dom::set_style(&self.wrapper, "aspect-ratio", &aspect.css());
        let (w, h) = dom::measure(&self.wrapper);
        let layout = fit_aspect(DVec2::new(w, h), aspect);
        self.viewport = Viewport::new(layout.x, layout.y, dom::device_pixel_ratio());

        let (bw, bh) = self.viewport.backing_size();
        self.canvas.set_width(bw);
        self.canvas.set_height(bh);
        let dpr = self.viewport.pixel_ratio();
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        dom::set_style(&self.canvas, "width", &format!("{}px", layout.x));
        dom::set_style(&self.canvas, "height", &format!("{}px", layout.y));
        self.paint_checker();
    }

    /// Draw `view` if its photo is decoded; otherwise leave the canvas alone
    /// until the next load signal.
    pub fn draw(
        &mut self,
        catalog: &Catalog,
        view: &ViewParams,
        images: &ImageCache<web::HtmlImageElement>,
    ) {
        match plan_frame(catalog, view, &self.viewport, images) {
            FramePlan::Draw { src, geometry } => {
                let Some(ImageSlot::Ready(img)) = images.slot(&src) else {
                    return;
                };
                self.paint_checker();
                if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    &img.handle,
                    geometry.offset.x,
                    geometry.offset.y,
                    geometry.draw_size.x,
                    geometry.draw_size.y,
                ) {
                    log::warn!("[view] drawImage {} failed: {:?}", src, e);
                }
            }
            FramePlan::NotReady {
                src,
                reason: NotReady::Failed,
            } => {
                log::warn!("[view] {} failed to load; keeping previous frame", src);
            }
            FramePlan::NotReady { src, .. } => {
                log::debug!("[view] image still not loaded: {}", src);
            }
            FramePlan::Skip => {}
        }
    }

    #[allow(deprecated)]
    fn paint_checker(&mut self) {
        if self.checker.is_none() {
            self.checker = self.build_checker();
        }
        match &self.checker {
            Some(pattern) => self.ctx.set_fill_style(pattern),
            None => self.ctx.set_fill_style(&JsValue::from_str(CHECKER_DARK)),
        }
        self.ctx
            .fill_rect(0.0, 0.0, self.viewport.size.x, self.viewport.size.y);
    }

    #[allow(deprecated)]
    fn build_checker(&self) -> Option<web::CanvasPattern> {
        let document = dom::window_document()?;
        let tile = dom::create::<web::HtmlCanvasElement>(&document, "canvas", "").ok()?;
        tile.set_width(CHECKER_TILE_PX);
        tile.set_height(CHECKER_TILE_PX);
        let pctx = context_2d(&tile).ok()?;
        let full = CHECKER_TILE_PX as f64;
        let half = full / 2.0;
        pctx.set_fill_style(&JsValue::from_str(CHECKER_DARK));
        pctx.fill_rect(0.0, 0.0, full, full);
        pctx.set_fill_style(&JsValue::from_str(CHECKER_LIGHT));
        pctx.fill_rect(0.0, 0.0, half, half);
        pctx.fill_rect(half, half, half, half);
        self.ctx
            .create_pattern_with_html_canvas_element(&tile, "repeat")
            .ok()
            .flatten()
    }
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(dom::js_err)?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

use crate::constants::*;
use crate::dom;
use crate::shell::{self, Shell};
use crate::view::ImageView;
use focalsim_core::{CaptureId, Message};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Tile {
    id: CaptureId,
    root: web::HtmlElement,
    view: ImageView,
}

/// One tile per shutter capture: thumbnail, caption and delete button.
/// Tiles carry their id in `data-capture`; clicks are handled by one listener
/// on the container, so removing a tile leaves nothing behind.
pub struct GalleryView {
    container: web::HtmlElement,
    clear_btn: web::HtmlButtonElement,
    tiles: Vec<Tile>,
}

impl GalleryView {
    pub fn new(document: &web::Document, container: web::HtmlElement) -> anyhow::Result<Self> {
        let clear_btn =
            dom::create::<web::HtmlButtonElement>(document, "button", GALLERY_CLEAR_CLASS)?;
        clear_btn.set_text_content(Some(CLEAR_LABEL));
        dom::append(&container, &clear_btn);
        Ok(Self {
            container,
            clear_btn,
            tiles: Vec::new(),
        })
    }

    /// The container exists before the shell does; wire it afterwards.
    pub fn wire(&self, shell: &Rc<Shell>) {
        let shell_c = shell.clone();
        dom::add_listener(&self.clear_btn, "click", move |_| {
            shell::dispatch(&shell_c, Message::ClearGallery);
        });

        let shell_t = shell.clone();
        let tile_selector = capture_tile_selector();
        let delete_selector = gallery_delete_selector();
        dom::add_listener(&self.container, "click", move |ev| {
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
                return;
            };
            let Some(id) = target
                .closest(&tile_selector)
                .ok()
                .flatten()
                .and_then(|tile| tile.get_attribute(CAPTURE_DATA_ATTR))
                .and_then(|v| v.parse::<CaptureId>().ok())
            else {
                return;
            };
            let on_delete = matches!(target.closest(&delete_selector), Ok(Some(_)));
            let msg = if on_delete {
                Message::DeleteCapture(id)
            } else {
                Message::SelectCapture(id)
            };
            shell::dispatch(&shell_t, msg);
        });
    }

    pub fn add_tile(&mut self, shell: &Rc<Shell>, id: CaptureId) -> anyhow::Result<()> {
        let sim = shell.sim.borrow();
        let capture = sim
            .capture(id)
            .ok_or_else(|| anyhow::anyhow!("{} not in gallery", id))?;
        let document = &shell.document;

        let root = dom::div(document, GALLERY_IMAGE_CLASS)?;
        root.set_attribute(CAPTURE_DATA_ATTR, &id.to_string()).map_err(dom::js_err)?;
        let view = ImageView::new(document, capture.view.aspect)?;
        dom::append(&root, view.element());

        let caption = dom::div(document, GALLERY_CAPTION_CONTAINER_CLASS)?;
        dom::append(
            &caption,
            &dom::text(
                document,
                "span",
                GALLERY_CAPTION_TEXT_CLASS,
                &capture.caption(sim.catalog()),
            )?,
        );
        let delete =
            dom::create::<web::HtmlButtonElement>(document, "button", GALLERY_DELETE_CLASS)?;
        delete.set_text_content(Some(DELETE_LABEL));
        dom::append(&caption, &delete);
        dom::append(&root, &caption);

        // Insert before the clear button so it stays last.
        _ = self
            .container
            .insert_before(&root, Some(self.clear_btn.as_ref()));

        let mut tile = Tile { id, root, view };
        tile.view.relayout(capture.view.aspect);
        tile.view
            .draw(sim.catalog(), &capture.view, &shell.images.borrow());
        self.tiles.push(tile);
        Ok(())
    }

    pub fn refresh_tile(&mut self, shell: &Rc<Shell>, id: CaptureId) {
        let sim = shell.sim.borrow();
        let (Some(tile), Some(capture)) = (
            self.tiles.iter_mut().find(|t| t.id == id),
            sim.capture(id),
        ) else {
            return;
        };
        tile.view.relayout(capture.view.aspect);
        tile.view
            .draw(sim.catalog(), &capture.view, &shell.images.borrow());
    }

    pub fn remove_tile(&mut self, id: CaptureId) {
        if let Some(pos) = self.tiles.iter().position(|t| t.id == id) {
            let tile = self.tiles.remove(pos);
            tile.root.remove();
        }
    }

    pub fn clear(&mut self) {
        for tile in self.tiles.drain(..) {
            tile.root.remove();
        }
    }
}

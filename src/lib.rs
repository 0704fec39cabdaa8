#![cfg(target_arch = "wasm32")]
use focalsim_core::{Catalog, Message, Simulator, DEFAULT_FOCAL_MM};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod controls;
mod dom;
mod gallery;
mod loader;
mod shell;
mod view;

fn wire_window_resize(shell: &Rc<shell::Shell>) {
    if let Some(window) = web::window() {
        let shell = shell.clone();
        dom::add_listener(&window, "resize", move |_| {
            shell::dispatch(&shell, Message::Resized);
        });
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("focalsim-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let app = document
        .get_element_by_id(constants::APP_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::APP_CONTAINER_ID))?;

    let catalog = Catalog::builtin()?;
    log::info!(
        "[catalog] {} sensors, {} aspects, {} reference photos (baseline {}, {}mm wide)",
        catalog.sensors().len(),
        catalog.aspects().len(),
        catalog.ladder().rungs().len(),
        catalog.baseline().name,
        catalog.ladder().baseline_width_mm()
    );
    let sim = Simulator::new(catalog, DEFAULT_FOCAL_MM);

    let shell = shell::Shell::mount(&document, &app, sim)?;
    controls::wire(&shell);
    shell.gallery.borrow().wire(&shell);
    wire_window_resize(&shell);

    // First layout + controls before any photo has decoded; draws follow the loads.
    shell::dispatch(&shell, Message::Resized);
    shell.controls.sync(&shell);
    loader::preload(&shell)?;
    Ok(())
}

use crate::dom;
use crate::shell::{self, Shell};
use focalsim_core::Message;
use glam::DVec2;
use instant::Instant;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Start fetching every reference photo. Each decode (or failure) updates the
/// image cache first and then notifies the simulator, which decides which
/// views still care about that photo.
pub fn preload(shell: &Rc<Shell>) -> anyhow::Result<()> {
    let started = Instant::now();
    let srcs: Vec<String> = shell
        .sim
        .borrow()
        .catalog()
        .ladder()
        .rungs()
        .iter()
        .map(|r| r.src.clone())
        .collect();

    for src in srcs {
        let img = web::HtmlImageElement::new().map_err(dom::js_err)?;
        shell.images.borrow_mut().register_pending(&src);

        let onload = {
            let shell = shell.clone();
            let img = img.clone();
            let src = src.clone();
            Closure::wrap(Box::new(move || {
                let natural = DVec2::new(img.natural_width() as f64, img.natural_height() as f64);
                let (settled, count) = {
                    let mut images = shell.images.borrow_mut();
                    images.mark_ready(&src, img.clone(), natural);
                    (images.settled(), images.len())
                };
                log::info!(
                    "[images] preloaded {} ({}x{}) after {:?}",
                    src,
                    natural.x,
                    natural.y,
                    started.elapsed()
                );
                if settled {
                    log::info!("[images] all {} reference photos settled", count);
                }
                shell::dispatch(&shell, Message::ImageLoaded { src: src.clone() });
            }) as Box<dyn FnMut()>)
        };
        let onerror = {
            let shell = shell.clone();
            let src = src.clone();
            Closure::wrap(Box::new(move || {
                shell.images.borrow_mut().mark_failed(&src);
                log::error!("[images] error preloading {}", src);
                shell::dispatch(&shell, Message::ImageFailed { src: src.clone() });
            }) as Box<dyn FnMut()>)
        };
        img.set_onload(Some(onload.as_ref().unchecked_ref::<js_sys::Function>()));
        img.set_onerror(Some(onerror.as_ref().unchecked_ref::<js_sys::Function>()));
        onload.forget();
        onerror.forget();
        img.set_src(&src);
    }
    Ok(())
}

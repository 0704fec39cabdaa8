use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Create `<tag class=..>` and cast it to the concrete element type.
pub fn create<T: JsCast>(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<T> {
    let el = document.create_element(tag).map_err(js_err)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    el.dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("<{}> cast failed: {:?}", tag, e))
}

#[inline]
pub fn div(document: &web::Document, class: &str) -> anyhow::Result<web::HtmlElement> {
    create::<web::HtmlElement>(document, "div", class)
}

pub fn text(
    document: &web::Document,
    tag: &str,
    class: &str,
    content: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = create::<web::HtmlElement>(document, tag, class)?;
    el.set_text_content(Some(content));
    Ok(el)
}

#[inline]
pub fn append(parent: &web::Node, child: &web::Node) {
    _ = parent.append_child(child);
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Attach a listener for the page lifetime.
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// CSS box of `el`; a zero height falls back to the computed style height.
pub fn measure(el: &web::HtmlElement) -> (f64, f64) {
    let rect = el.get_bounding_client_rect();
    let width = rect.width();
    let mut height = rect.height();
    if height <= 0.0 {
        height = web::window()
            .and_then(|w| w.get_computed_style(el).ok().flatten())
            .and_then(|s| s.get_property_value("height").ok())
            .and_then(|h| h.trim_end_matches("px").trim().parse::<f64>().ok())
            .unwrap_or(height);
    }
    (width, height)
}

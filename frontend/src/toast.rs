//! Transient notification banner, used for operation feedback (upload and
//! delete confirmations, association success). Errors that need a dismiss
//! action are rendered inline by the owning component instead.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const TOAST_MILLIS: u32 = 3000;

const TOAST_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("bottom", "20px"),
    ("left", "50%"),
    ("transform", "translateX(-50%)"),
    ("background", "rgba(0, 0, 0, 0.8)"),
    ("color", "#fff"),
    ("padding", "10px 20px"),
    ("border-radius", "4px"),
    ("z-index", "10000"),
    ("font-family", "Arial, sans-serif"),
];

/// Shows `message` at the bottom of the page and removes it after a few
/// seconds. Best-effort: silently does nothing outside a document context.
pub fn toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(node), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    node.set_text_content(Some(message));
    let node: HtmlElement = node.unchecked_into();
    let style = node.style();
    for (prop, value) in TOAST_STYLE {
        style.set_property(prop, value).ok();
    }

    if body.append_child(&node).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            if let Some(parent) = node.parent_node() {
                parent.remove_child(&node).ok();
            }
        });
    }
}

use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(popup: &web::Element) {
    let _ = popup.set_attribute("data-visible", "1");
    let _ = popup.set_attribute("style", "");
}

#[inline]
pub fn hide(popup: &web::Element) {
    let _ = popup.set_attribute("data-visible", "0");
    let _ = popup.set_attribute("style", "display:none");
}

pub fn set_label(popup: &web::Element, label: &str) {
    popup.set_text_content(Some(label));
}

/// Reserved for drawing a connector line from the marker to the popup.
/// Nothing is drawn yet; the overlay is only cleared.
pub fn clear_connector(overlay: &web::HtmlCanvasElement) {
    let ctx = overlay
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok());
    if let Some(ctx) = ctx {
        ctx.clear_rect(0.0, 0.0, overlay.width() as f64, overlay.height() as f64);
    }
}

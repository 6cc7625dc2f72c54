use globe_core::ContainerRect;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(
    document: &web::Document,
    element_id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", element_id, e))
}

pub fn element_by_selector(
    document: &web::Document,
    selector: &str,
) -> anyhow::Result<web::Element> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", selector))
}

/// On-page placement of the container, in the same client-pixel space the
/// pointer events report.
pub fn container_rect(el: &web::Element) -> ContainerRect {
    let rect = el.get_bounding_client_rect();
    ContainerRect::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// Square the container and both canvases to the given CSS-pixel side.
/// The 3D canvas backing store additionally follows the device pixel
/// ratio; the GPU surface reads its size from it each frame.
pub fn apply_square_layout(
    container: &web::HtmlElement,
    canvas3d: &web::HtmlCanvasElement,
    overlay: &web::HtmlCanvasElement,
    side: f32,
) {
    let style = format!("width:{side}px;height:{side}px");
    let _ = container.set_attribute("style", &style);

    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let px = (side as f64 * dpr) as u32;
    canvas3d.set_width(px.max(1));
    canvas3d.set_height(px.max(1));

    let overlay_px = side as u32;
    overlay.set_width(overlay_px.max(1));
    overlay.set_height(overlay_px.max(1));
}

/// Cursor affordance while the pointer hovers the globe.
pub fn set_body_cursor(pointer: bool) {
    if let Some(body) = window_document().and_then(|d| d.body()) {
        let cursor = if pointer { "pointer" } else { "auto" };
        let _ = body.style().set_property("cursor", cursor);
    }
}

#![cfg(target_arch = "wasm32")]
//! Web front-end: DOM wiring, texture fetch, and the WebGPU render loop
//! around the shared globe controller.

use globe_core::{icosphere_points, GlobeConfig, GlobeController};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod dom;
mod events;
mod frame;
mod popup;
mod render;

const MAP_TEXTURE_URL: &str = "https://ksenia-k.com/img/earth-map-colored.png";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("globe-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let container: web::HtmlElement = dom::element_by_selector(&document, ".globe-wrapper")?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("container is not an element: {:?}", e))?;
    let canvas = dom::canvas_by_id(&document, "globe-3d")?;
    let overlay = dom::canvas_by_id(&document, "globe-2d-overlay")?;
    let popup_el = dom::element_by_selector(&document, ".globe-popup")?;
    popup::hide(&popup_el);

    // The scene and all pointer handling wait for the map texture; a
    // failed fetch or decode aborts init with a reported error instead of
    // a blank page.
    let bytes = fetch_bytes(MAP_TEXTURE_URL).await?;
    let map = globe_core::decode_map_texture(&bytes)?;
    log::info!("[init] map texture {}x{}", map.width, map.height);

    let controller = Rc::new(RefCell::new(GlobeController::new(GlobeConfig::default())));
    let points = icosphere_points(controller.borrow().config().detail);
    log::info!("[init] point cloud with {} samples", points.len());

    let wiring = events::InputWiring {
        container,
        canvas: canvas.clone(),
        overlay,
        popup: popup_el,
        controller: controller.clone(),
    };
    events::apply_viewport_size(&wiring);

    let gpu = frame::init_gpu(&canvas, &map, &points).await?;
    controller.borrow_mut().mark_scene_ready(Instant::now());

    events::wire_resize(&wiring);
    events::wire_input_handlers(&wiring);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller,
        gpu,
        canvas,
        last_instant: Instant::now(),
        cursor_hover: false,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch failed: {:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("map texture fetch failed: HTTP {}", resp.status());
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?,
    )
    .await
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

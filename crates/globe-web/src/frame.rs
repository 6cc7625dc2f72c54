use globe_core::GlobeController;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::{dom, render};

/// Everything one animation frame needs.
pub struct FrameContext {
    pub controller: Rc<RefCell<GlobeController>>,
    pub gpu: render::GpuState<'static>,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
    pub cursor_hover: bool,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let frame_state = self.controller.borrow_mut().tick(now, dt);

        // Only touch the style when the hover state flips.
        if frame_state.hovering != self.cursor_hover {
            self.cursor_hover = frame_state.hovering;
            dom::set_body_cursor(frame_state.hovering);
        }

        // Keep the surface sized to the canvas backing store.
        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);
        if let Err(e) = self.gpu.render(&frame_state) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    map: &globe_core::MapTexture,
    points: &[glam::Vec3],
) -> anyhow::Result<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas, map, points).await
}

/// Drive frames off `requestAnimationFrame` for the page's lifetime.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

use globe_core::{
    square_side_for_viewport, GlobeController, InputEvent, PointerLike, Selection,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::{dom, popup};

// "Pointer-like" sources: anything with a primary contact point in client
// pixels. Touch events contribute their first touch.

impl PointerLike for web::MouseEvent {
    fn primary_contact(&self) -> Option<(f32, f32)> {
        Some((self.client_x() as f32, self.client_y() as f32))
    }
}

impl PointerLike for web::TouchEvent {
    fn primary_contact(&self) -> Option<(f32, f32)> {
        // Active touches during the gesture, lifted touches at its end.
        let touch = self
            .target_touches()
            .get(0)
            .or_else(|| self.changed_touches().get(0))?;
        Some((touch.client_x() as f32, touch.client_y() as f32))
    }
}

#[derive(Clone)]
pub struct InputWiring {
    pub container: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub overlay: web::HtmlCanvasElement,
    pub popup: web::Element,
    pub controller: Rc<RefCell<GlobeController>>,
}

pub fn wire_input_handlers(w: &InputWiring) {
    wire_pointermove(w);
    wire_pointerdown(w);
    wire_pointerup(w);
    wire_click(w);
    wire_touchend(w);
}

fn dispatch_move(w: &InputWiring, page_x: f32, page_y: f32) {
    let _ = w
        .controller
        .borrow_mut()
        .handle_event(InputEvent::PointerMove { page_x, page_y }, Instant::now());
}

fn dispatch_click(w: &InputWiring, contact: Option<(f32, f32)>) {
    let Some((page_x, page_y)) = contact else {
        return;
    };
    let selected = w
        .controller
        .borrow_mut()
        .handle_event(InputEvent::Click { page_x, page_y }, Instant::now());
    if let Some(selection) = selected {
        apply_selection(w, &selection);
    }
}

fn apply_selection(w: &InputWiring, selection: &Selection) {
    log::info!("[click] selected {}", selection.label);
    popup::set_label(&w.popup, &selection.label);
    popup::show(&w.popup);
    popup::clear_connector(&w.overlay);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let container = w.container.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some((x, y)) = ev.primary_contact() {
            dispatch_move(&w, x, y);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = container
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let _ = w
            .controller
            .borrow_mut()
            .handle_event(InputEvent::InteractionStart, Instant::now());
        let _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    let _ =
        canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let _ = w
            .controller
            .borrow_mut()
            .handle_event(InputEvent::InteractionEnd, Instant::now());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        let _ =
            window.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let container = w.container.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        dispatch_click(&w, ev.primary_contact());
    }) as Box<dyn FnMut(_)>);
    let _ = container.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Touch taps select through the same path; the contact comes from the
// first touch point instead of the mouse position.
fn wire_touchend(w: &InputWiring) {
    let w = w.clone();
    let container = w.container.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        dispatch_click(&w, ev.primary_contact());
        // Swallow the synthetic click that follows a tap.
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    let _ =
        container.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Keep the square container, both canvas backing stores, and the
/// controller rect in step with the viewport.
pub fn wire_resize(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        apply_viewport_size(&w);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

pub fn apply_viewport_size(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let side = square_side_for_viewport(width, height);
    dom::apply_square_layout(&w.container, &w.canvas, &w.overlay, side);
    let rect = dom::container_rect(&w.container);
    let _ = w
        .controller
        .borrow_mut()
        .handle_event(InputEvent::Resize { rect }, Instant::now());
}

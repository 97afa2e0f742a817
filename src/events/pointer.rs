use crate::input;
use crate::SharedButton;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Press on primary pointerdown over the canvas; release on pointerup/cancel.
pub fn wire_pointer_press(canvas: &web::HtmlCanvasElement, button: SharedButton) {
    wire_pointerdown(canvas, button.clone());
    wire_release(canvas, "pointerup", button.clone());
    wire_release(canvas, "pointercancel", button);
}

fn wire_pointerdown(canvas: &web::HtmlCanvasElement, button: SharedButton) {
    let canvas_capture = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !input::is_primary_button(ev.button()) {
            return;
        }
        ev.prevent_default();
        // Keep receiving pointerup even if the finger slides off the canvas
        _ = canvas_capture.set_pointer_capture(ev.pointer_id());
        let mut b = button.borrow_mut();
        if !b.is_pressed() {
            b.set_pressed(true);
            log::info!("[pointer] pressed");
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_release(canvas: &web::HtmlCanvasElement, event: &str, button: SharedButton) {
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let mut b = button.borrow_mut();
        if b.is_pressed() {
            b.set_pressed(false);
            log::info!("[pointer] released");
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

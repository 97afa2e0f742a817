use crate::input::press_intent_for_key;
use crate::SharedButton;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Space/Enter hold the switch down while the key is held.
pub fn wire_press_keys(button: SharedButton) {
    let Some(window) = web::window() else {
        return;
    };
    for (event, key_down) in [("keydown", true), ("keyup", false)] {
        let button = button.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            if let Some(pressed) = press_intent_for_key(&ev.key(), key_down, ev.repeat()) {
                ev.prevent_default();
                button.borrow_mut().set_pressed(pressed);
                log::info!("[keys] pressed={}", pressed);
            }
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

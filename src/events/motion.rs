use crate::core::TiltInput;
use crate::input::tilt_from_motion;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed `accelerationIncludingGravity` (x, z) into the shared tilt slot.
pub fn wire_device_motion(tilt: Arc<TiltInput>) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::DeviceMotionEvent| {
        let Some(acc) = ev.acceleration_including_gravity() else {
            return;
        };
        if !tilt.is_set() {
            log::info!("[motion] first reading");
        }
        let [x, z] = tilt_from_motion(acc.x(), acc.z());
        tilt.store(x, z);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("devicemotion", closure.as_ref().unchecked_ref());
    closure.forget();
}

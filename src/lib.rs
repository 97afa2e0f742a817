#![cfg(target_arch = "wasm32")]
use crate::core::{ButtonController, ButtonTuning};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

/// The button shared between the input listeners and the frame loop.
pub(crate) type SharedButton = Rc<RefCell<ButtonController>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("jelly-switch starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("[init] already started; ignoring");
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::observe_canvas_frame(&canvas)?;

    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let button: SharedButton = Rc::new(RefCell::new(ButtonController::seeded(
        ButtonTuning::default(),
        seed,
    )));
    log::info!("[button] created seed={}", seed);

    events::wire_pointer_press(&canvas, button.clone());
    events::wire_press_keys(button.clone());
    events::wire_device_motion(button.borrow().tilt_input());

    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        button,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Element whose box the jelly fills: the canvas parent, or the canvas itself
/// when it is detached.
fn frame_element(canvas: &web::HtmlCanvasElement) -> web::Element {
    canvas
        .parent_element()
        .unwrap_or_else(|| canvas.clone().unchecked_into())
}

/// Size the canvas backing store to the frame's client box in device pixels.
fn fit_backing_store(canvas: &web::HtmlCanvasElement, frame: &web::Element) {
    let dpr = web::window().map_or(1.0, |w| w.device_pixel_ratio());
    let px = |css: i32| ((css.max(0) as f64 * dpr) as u32).max(1);
    let (w, h) = (px(frame.client_width()), px(frame.client_height()));
    if canvas.width() != w || canvas.height() != h {
        canvas.set_width(w);
        canvas.set_height(h);
        log::debug!("[dom] canvas backing {w}x{h} (dpr {dpr})");
    }
}

/// Track the canvas frame with a `ResizeObserver` so the backing store
/// follows layout changes, not just window resizes.
pub fn observe_canvas_frame(canvas: &web::HtmlCanvasElement) -> anyhow::Result<()> {
    let frame = frame_element(canvas);
    fit_backing_store(canvas, &frame);

    let (canvas_cb, frame_cb) = (canvas.clone(), frame.clone());
    let on_resize = Closure::wrap(Box::new(move |_entries: js_sys::Array| {
        fit_backing_store(&canvas_cb, &frame_cb);
    }) as Box<dyn FnMut(js_sys::Array)>);
    let observer = web::ResizeObserver::new(on_resize.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("ResizeObserver: {e:?}"))?;
    observer.observe(&frame);
    on_resize.forget();
    Ok(())
}

// Pure input mapping shared by the event adapters; no DOM access here so the
// host-side tests can include it directly.

/// Whether `key` (a `KeyboardEvent.key` value) holds the switch down.
#[inline]
pub fn is_press_key(key: &str) -> bool {
    matches!(key, " " | "Spacebar" | "Enter")
}

/// Press intent for a key transition, or `None` when the key is not bound or
/// the event is an auto-repeat.
#[inline]
pub fn press_intent_for_key(key: &str, key_down: bool, repeat: bool) -> Option<bool> {
    if !is_press_key(key) || (key_down && repeat) {
        return None;
    }
    Some(key_down)
}

/// Convert a devicemotion `accelerationIncludingGravity` sample into the
/// (x, z) tilt pair. Missing or non-finite axes read as 0.
#[inline]
pub fn tilt_from_motion(x: Option<f64>, z: Option<f64>) -> [f32; 2] {
    let axis = |v: Option<f64>| match v {
        Some(a) if a.is_finite() => a as f32,
        _ => 0.0,
    };
    [axis(x), axis(z)]
}

/// Pointer buttons that should press the switch (primary only).
#[inline]
pub fn is_primary_button(button: i16) -> bool {
    button == 0
}

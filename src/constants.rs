/// Front-end tuning constants: page wiring, frame timing and the fixed scene
/// style the preview renderer uploads next to the pose.
// DOM
pub const CANVAS_ID: &str = "app-canvas";

// Frame timing
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches / long stalls

// Scene style (fixed control values)
pub const JELLY_COLOR: [f32; 3] = [0.08, 0.5, 1.0];
pub const LIGHT_DIR: f32 = 0.0; // 0..1, sweeps the key light around the button
pub const DARK_MODE: bool = true;

// Background clear colors
pub const CLEAR_DARK: [f64; 3] = [0.02, 0.02, 0.03];
pub const CLEAR_LIGHT: [f64; 3] = [0.92, 0.93, 0.95];

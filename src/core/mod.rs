pub mod button;
pub mod constants;
pub mod pose;
pub mod spring;
pub mod tilt;

pub use button::*;
pub use constants::*;
pub use pose::*;
pub use spring::*;
pub use tilt::*;

// Preview shader bundled as a string constant
pub static JELLY_WGSL: &str = include_str!("../../shaders/jelly.wgsl");

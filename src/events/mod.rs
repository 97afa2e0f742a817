pub mod keyboard;
pub mod motion;
pub mod pointer;

pub use keyboard::wire_press_keys;
pub use motion::wire_device_motion;
pub use pointer::wire_pointer_press;

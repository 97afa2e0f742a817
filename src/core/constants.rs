/// Physics tuning for the jelly switch.
///
/// Three integration styles share these numbers: the bang-bang position
/// accelerator, the per-axis springs and the flat velocity decay. Each value is
/// tuned for its own update rule, so they are not interchangeable.
// Spring coefficients (mass, stiffness, damping)
pub const SQUASH_X_MASS: f32 = 1.0;
pub const SQUASH_X_STIFFNESS: f32 = 1000.0;
pub const SQUASH_X_DAMPING: f32 = 10.0;

pub const SQUASH_Z_MASS: f32 = 1.0;
pub const SQUASH_Z_STIFFNESS: f32 = 900.0;
pub const SQUASH_Z_DAMPING: f32 = 12.0;

pub const WIGGLE_X_MASS: f32 = 1.0;
pub const WIGGLE_X_STIFFNESS: f32 = 1000.0;
pub const WIGGLE_X_DAMPING: f32 = 20.0;

// Relative |gamma - omega0| band treated as critically damped
pub const CRITICAL_DAMPING_TOLERANCE: f32 = 1e-4;

// Bang-bang position drive
pub const TARGET_ACCELERATION: f32 = 100.0; // units/s^2 toward 0 (pressed) or 1 (released)
pub const VELOCITY_DAMPING: f32 = 0.95; // per-tick multiplier

// Anticipation: fired while pressed and still close to the pressed extreme
pub const ANTICIPATION_POS_THRESHOLD: f32 = 0.1;
pub const ANTICIPATION_SQUASH_KICK: f32 = 5.0;
pub const ANTICIPATION_WIGGLE_MIN: f32 = -2.0;
pub const ANTICIPATION_WIGGLE_MAX: f32 = 0.0;

// Motion-coupled wiggle
pub const WIGGLE_SPEED_THRESHOLD: f32 = 0.1;
pub const WIGGLE_VELOCITY_GAIN: f32 = -0.1;

// Bound impact kicks, [squash_x, squash_z, wiggle_x]
pub const HIGH_BOUND_KICK: [f32; 3] = [5.0, 5.0, 5.0];
pub const LOW_BOUND_KICK: [f32; 3] = [-5.0, 5.0, 8.0];

// Tilt parallax: offset = input_pos * accel / -TILT_DIVISOR
pub const TILT_DIVISOR: f32 = 3.0;

use super::constants::*;
use super::pose::{Pose, PoseSink};
use super::spring::{Oscillator, OscillatorParams};
use super::tilt::TiltInput;
use rand::prelude::*;
use std::sync::Arc;

/// Static tuning for a [`ButtonController`].
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonTuning {
    pub squash_x: OscillatorParams,
    pub squash_z: OscillatorParams,
    pub wiggle_x: OscillatorParams,
    pub target_acceleration: f32,
    pub velocity_damping: f32,
    pub anticipation_pos_threshold: f32,
    pub anticipation_squash_kick: f32,
    pub anticipation_wiggle_min: f32,
    pub anticipation_wiggle_max: f32,
    pub wiggle_speed_threshold: f32,
    pub wiggle_velocity_gain: f32,
    pub high_bound_kick: [f32; 3],
    pub low_bound_kick: [f32; 3],
    pub tilt_divisor: f32,
}

impl Default for ButtonTuning {
    fn default() -> Self {
        Self {
            squash_x: OscillatorParams::new(SQUASH_X_MASS, SQUASH_X_STIFFNESS, SQUASH_X_DAMPING),
            squash_z: OscillatorParams::new(SQUASH_Z_MASS, SQUASH_Z_STIFFNESS, SQUASH_Z_DAMPING),
            wiggle_x: OscillatorParams::new(WIGGLE_X_MASS, WIGGLE_X_STIFFNESS, WIGGLE_X_DAMPING),
            target_acceleration: TARGET_ACCELERATION,
            velocity_damping: VELOCITY_DAMPING,
            anticipation_pos_threshold: ANTICIPATION_POS_THRESHOLD,
            anticipation_squash_kick: ANTICIPATION_SQUASH_KICK,
            anticipation_wiggle_min: ANTICIPATION_WIGGLE_MIN,
            anticipation_wiggle_max: ANTICIPATION_WIGGLE_MAX,
            wiggle_speed_threshold: WIGGLE_SPEED_THRESHOLD,
            wiggle_velocity_gain: WIGGLE_VELOCITY_GAIN,
            high_bound_kick: HIGH_BOUND_KICK,
            low_bound_kick: LOW_BOUND_KICK,
            tilt_divisor: TILT_DIVISOR,
        }
    }
}

/// Mutable physical state of one button.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonState {
    pub pressed: bool,
    /// 0 = fully pressed, 1 = fully released. Always within [0, 1].
    pub input_pos: f32,
    pub velocity: f32,
    pub squash_x: Oscillator,
    pub squash_z: Oscillator,
    pub wiggle_x: Oscillator,
}

/// Which extreme the position ran into during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundHit {
    Low,
    High,
}

/// Drives a jelly switch: a bang-bang position value plus three springs,
/// composed into a [`Pose`] each frame.
///
/// Press state flips immediately on [`set_pressed`](Self::set_pressed), but the
/// position only approaches its target under constant acceleration, so
/// "pressed" and `input_pos == 0` are not in sync.
pub struct ButtonController<R: Rng = StdRng> {
    state: ButtonState,
    tuning: ButtonTuning,
    tilt: Arc<TiltInput>,
    rng: R,
    last_hit: Option<BoundHit>,
}

impl ButtonController<StdRng> {
    pub fn seeded(tuning: ButtonTuning, seed: u64) -> Self {
        Self::new(tuning, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ButtonController<R> {
    /// Starts released at the pressed extreme (`input_pos = 0`), so the first
    /// frames pop the button up.
    pub fn new(tuning: ButtonTuning, rng: R) -> Self {
        let state = ButtonState {
            pressed: false,
            input_pos: 0.0,
            velocity: 0.0,
            squash_x: Oscillator::new(tuning.squash_x),
            squash_z: Oscillator::new(tuning.squash_z),
            wiggle_x: Oscillator::new(tuning.wiggle_x),
        };
        Self {
            state,
            tuning,
            tilt: Arc::new(TiltInput::new()),
            rng,
            last_hit: None,
        }
    }

    /// Place the button at rest at `pos` (clamped into [0, 1]).
    pub fn with_input_pos(mut self, pos: f32) -> Self {
        self.state.input_pos = pos.clamp(0.0, 1.0);
        self.state.velocity = 0.0;
        self
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.state.pressed = pressed;
    }

    pub fn is_pressed(&self) -> bool {
        self.state.pressed
    }

    pub fn state(&self) -> &ButtonState {
        &self.state
    }

    pub fn tuning(&self) -> &ButtonTuning {
        &self.tuning
    }

    /// Shared accelerometer slot written by the motion listener.
    pub fn tilt_input(&self) -> Arc<TiltInput> {
        Arc::clone(&self.tilt)
    }

    /// Bound reached during the most recent positive-`dt` tick, if any.
    pub fn last_bound_hit(&self) -> Option<BoundHit> {
        self.last_hit
    }

    /// Advance the simulation by `dt` seconds and write the resulting pose.
    ///
    /// Non-positive or non-finite `dt` changes nothing and writes nothing.
    pub fn update(&mut self, dt: f32, sink: &mut impl PoseSink) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let t = &self.tuning;
        let s = &mut self.state;

        let target = if s.pressed { 0.0 } else { 1.0 };
        if s.input_pos < target {
            s.velocity += t.target_acceleration * dt;
        } else if s.input_pos > target {
            s.velocity -= t.target_acceleration * dt;
        }

        // Squash ahead of the position while held near the bottom
        if s.pressed && s.input_pos < t.anticipation_pos_threshold {
            s.squash_x.kick(t.anticipation_squash_kick);
            s.squash_z.kick(t.anticipation_squash_kick);
            let wiggle = if t.anticipation_wiggle_min < t.anticipation_wiggle_max {
                self.rng
                    .gen_range(t.anticipation_wiggle_min..t.anticipation_wiggle_max)
            } else {
                t.anticipation_wiggle_min
            };
            s.wiggle_x.kick(wiggle);
        }

        s.input_pos += s.velocity * dt;

        if s.velocity.abs() > t.wiggle_speed_threshold {
            s.wiggle_x.kick(s.velocity * t.wiggle_velocity_gain);
        }

        self.last_hit = None;
        if s.input_pos > 1.0 {
            s.input_pos = 1.0;
            s.velocity = 0.0;
            apply_kick(s, t.high_bound_kick);
            self.last_hit = Some(BoundHit::High);
            log::trace!("[button] hit high bound");
        }
        if s.input_pos < 0.0 {
            s.input_pos = 0.0;
            s.velocity = 0.0;
            apply_kick(s, t.low_bound_kick);
            self.last_hit = Some(BoundHit::Low);
            log::trace!("[button] hit low bound");
        }
        s.input_pos = s.input_pos.clamp(0.0, 1.0);

        s.velocity *= t.velocity_damping;

        s.squash_x.update(dt);
        s.squash_z.update(dt);
        s.wiggle_x.update(dt);

        sink.write(&self.pose());
    }

    /// Pose for the current state, without advancing time.
    pub fn pose(&self) -> Pose {
        let s = &self.state;
        let tilt = self.tilt.load_or_zero();
        let divisor = -self.tuning.tilt_divisor;
        Pose {
            pos_x: s.input_pos * tilt.x / divisor,
            pos_y: s.input_pos,
            pos_z: s.input_pos * tilt.y / divisor,
            squash_x: s.squash_x.value,
            squash_z: s.squash_z.value,
            wiggle_x: s.wiggle_x.value,
        }
    }
}

fn apply_kick(state: &mut ButtonState, [squash_x, squash_z, wiggle_x]: [f32; 3]) {
    state.squash_x.kick(squash_x);
    state.squash_z.kick(squash_z);
    state.wiggle_x.kick(wiggle_x);
}

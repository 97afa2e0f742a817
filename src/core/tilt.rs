use glam::Vec2;
use std::sync::atomic::{AtomicU64, Ordering};

// Both halves set to a quiet-NaN pattern; stored readings are always finite,
// so this can never collide with a real sample.
const UNSET: u64 = u64::MAX;

/// Latest accelerometer pair (x, z), shared between the motion listener and
/// the physics loop.
///
/// The pair lives in one `AtomicU64` so a reader always sees x and z from the
/// same event.
#[derive(Debug)]
pub struct TiltInput {
    packed: AtomicU64,
}

impl Default for TiltInput {
    fn default() -> Self {
        Self {
            packed: AtomicU64::new(UNSET),
        }
    }
}

impl TiltInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reading. Non-finite components are stored as 0.
    pub fn store(&self, accel_x: f32, accel_z: f32) {
        let x = if accel_x.is_finite() { accel_x } else { 0.0 };
        let z = if accel_z.is_finite() { accel_z } else { 0.0 };
        let packed = ((x.to_bits() as u64) << 32) | z.to_bits() as u64;
        self.packed.store(packed, Ordering::Release);
    }

    /// Forget any reading, returning to the unset state.
    pub fn clear(&self) {
        self.packed.store(UNSET, Ordering::Release);
    }

    /// The last reading, or `None` before the first event.
    pub fn load(&self) -> Option<Vec2> {
        let packed = self.packed.load(Ordering::Acquire);
        if packed == UNSET {
            return None;
        }
        let x = f32::from_bits((packed >> 32) as u32);
        let z = f32::from_bits(packed as u32);
        Some(Vec2::new(x, z))
    }

    /// The last reading with unset treated as zero.
    #[inline]
    pub fn load_or_zero(&self) -> Vec2 {
        self.load().unwrap_or(Vec2::ZERO)
    }

    pub fn is_set(&self) -> bool {
        self.load().is_some()
    }
}

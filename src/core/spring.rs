use super::constants::CRITICAL_DAMPING_TOLERANCE;

/// Coefficients of a damped spring pulling toward 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OscillatorParams {
    pub mass: f32,
    pub stiffness: f32,
    pub damping: f32,
}

impl OscillatorParams {
    pub const fn new(mass: f32, stiffness: f32, damping: f32) -> Self {
        Self {
            mass,
            stiffness,
            damping,
        }
    }

    /// Undamped angular frequency, sqrt(k / m).
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    /// c / (2 * sqrt(k * m)); 1.0 is critical.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Damping coefficient that makes a spring with this mass and stiffness critically damped.
    pub fn critical_damping(mass: f32, stiffness: f32) -> f32 {
        2.0 * (stiffness * mass).sqrt()
    }
}

/// A single scalar damped harmonic oscillator with equilibrium at 0.
///
/// The only way to set it in motion is [`Oscillator::kick`]. `value` and
/// `velocity` are unconstrained, so overshoot is expected.
#[derive(Clone, Debug, PartialEq)]
pub struct Oscillator {
    pub value: f32,
    pub velocity: f32,
    params: OscillatorParams,
}

impl Oscillator {
    pub fn new(params: OscillatorParams) -> Self {
        Self {
            value: 0.0,
            velocity: 0.0,
            params,
        }
    }

    pub fn params(&self) -> &OscillatorParams {
        &self.params
    }

    /// Overwrite the velocity, modelling an instantaneous impulse.
    #[inline]
    pub fn kick(&mut self, velocity: f32) {
        self.velocity = velocity;
    }

    /// Advance by `dt` seconds along the exact solution of
    /// `m·x'' + c·x' + k·x = 0`.
    ///
    /// The closed form is unconditionally stable, so any finite `dt` is safe.
    /// Non-positive or non-finite `dt` does nothing.
    pub fn update(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let OscillatorParams {
            mass,
            stiffness,
            damping,
        } = self.params;
        let (x0, v0) = (self.value, self.velocity);

        if stiffness <= 0.0 {
            // Free body with linear drag
            if damping <= 0.0 {
                self.value += v0 * dt;
            } else {
                let rate = damping / mass;
                let decay = (-rate * dt).exp();
                self.value += v0 * (1.0 - decay) / rate;
                self.velocity = v0 * decay;
            }
            return;
        }

        let omega0 = (stiffness / mass).sqrt();
        let gamma = damping / (2.0 * mass);
        let w2 = omega0 * omega0;

        if (gamma - omega0).abs() <= CRITICAL_DAMPING_TOLERANCE * omega0 {
            // Critically damped
            let decay = (-gamma * dt).exp();
            let b = v0 + gamma * x0;
            self.value = (x0 + b * dt) * decay;
            self.velocity = (v0 - gamma * b * dt) * decay;
        } else if gamma < omega0 {
            // Underdamped
            let omega_d = (w2 - gamma * gamma).sqrt();
            let decay = (-gamma * dt).exp();
            let (sin, cos) = (omega_d * dt).sin_cos();
            self.value = decay * (x0 * cos + (v0 + gamma * x0) / omega_d * sin);
            self.velocity = decay * (v0 * cos - (w2 * x0 + gamma * v0) / omega_d * sin);
        } else {
            // Overdamped
            let root = (gamma * gamma - w2).sqrt();
            let (r1, r2) = (-gamma + root, -gamma - root);
            let c1 = (v0 - r2 * x0) / (r1 - r2);
            let c2 = x0 - c1;
            let (e1, e2) = ((r1 * dt).exp(), (r2 * dt).exp());
            self.value = c1 * e1 + c2 * e2;
            self.velocity = c1 * r1 * e1 + c2 * r2 * e2;
        }
    }

    /// Kinetic plus potential energy, used to check settling.
    pub fn energy(&self) -> f32 {
        0.5 * self.params.mass * self.velocity * self.velocity
            + 0.5 * self.params.stiffness * self.value * self.value
    }
}

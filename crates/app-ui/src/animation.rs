//! Spring animation
//!
//! A damped harmonic oscillator with unit mass, sampled in closed form so the
//! result does not depend on how time is sliced between ticks. Changing the
//! target mid-flight continues from the current value and velocity.

use crate::tokens::spring;
use std::time::Duration;

/// Android's multiplier from a visibility threshold to a velocity threshold
const VELOCITY_THRESHOLD_MULTIPLIER: f32 = 1000.0 / 16.0;

/// Spring parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio; below 1 overshoots, 1 is critical, above 1 is sluggish
    pub damping_ratio: f32,
    /// Stiffness for a unit mass
    pub stiffness: f32,
    /// Distance from the target below which the spring counts as settled
    pub visibility_threshold: f32,
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::new(spring::DAMPING_RATIO_NO_BOUNCY, spring::STIFFNESS_MEDIUM)
    }
}

impl SpringSpec {
    /// Create a spring with the unit visibility threshold
    pub fn new(damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            damping_ratio: damping_ratio.max(0.0),
            stiffness: stiffness.max(f32::EPSILON),
            visibility_threshold: spring::VISIBILITY_THRESHOLD_UNIT,
        }
    }

    /// Set the settle threshold
    pub fn with_visibility_threshold(mut self, threshold: f32) -> Self {
        self.visibility_threshold = threshold.abs();
        self
    }

    /// Undamped angular frequency in radians per second
    pub fn natural_frequency(&self) -> f32 {
        self.stiffness.sqrt()
    }

    /// Displacement and velocity `t` seconds after starting at displacement
    /// `x0` with velocity `v0`
    pub fn sample(&self, x0: f32, v0: f32, t: f32) -> (f32, f32) {
        let omega = self.natural_frequency();
        let zeta = self.damping_ratio;

        if zeta > 1.0 {
            let root = omega * (zeta * zeta - 1.0).sqrt();
            let gamma_plus = -zeta * omega + root;
            let gamma_minus = -zeta * omega - root;
            let coeff_b = (gamma_minus * x0 - v0) / (gamma_minus - gamma_plus);
            let coeff_a = x0 - coeff_b;
            let ea = (gamma_minus * t).exp();
            let eb = (gamma_plus * t).exp();
            (
                coeff_a * ea + coeff_b * eb,
                coeff_a * gamma_minus * ea + coeff_b * gamma_plus * eb,
            )
        } else if zeta == 1.0 {
            let coeff_a = x0;
            let coeff_b = v0 + omega * x0;
            let decay = (-omega * t).exp();
            let disp = (coeff_a + coeff_b * t) * decay;
            (disp, coeff_b * decay - omega * disp)
        } else {
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            let cos_coeff = x0;
            let sin_coeff = (zeta * omega * x0 + v0) / damped;
            let decay = (-zeta * omega * t).exp();
            let (sin, cos) = (damped * t).sin_cos();
            let disp = decay * (cos_coeff * cos + sin_coeff * sin);
            let vel = -zeta * omega * disp
                + decay * damped * (sin_coeff * cos - cos_coeff * sin);
            (disp, vel)
        }
    }

    /// Check whether a displacement/velocity pair is close enough to rest
    pub fn is_at_rest(&self, displacement: f32, velocity: f32) -> bool {
        displacement.abs() < self.visibility_threshold
            && velocity.abs() < self.visibility_threshold * VELOCITY_THRESHOLD_MULTIPLIER
    }
}

/// A value animated toward a target by a spring
#[derive(Debug, Clone, PartialEq)]
pub struct SpringAnimation {
    spec: SpringSpec,
    start_value: f32,
    start_velocity: f32,
    target: f32,
    elapsed: Duration,
    value: f32,
    velocity: f32,
    settled: bool,
}

impl SpringAnimation {
    /// Create an animation resting at `initial`
    pub fn new(spec: SpringSpec, initial: f32) -> Self {
        Self {
            spec,
            start_value: initial,
            start_velocity: 0.0,
            target: initial,
            elapsed: Duration::ZERO,
            value: initial,
            velocity: 0.0,
            settled: true,
        }
    }

    /// Spring parameters
    pub fn spec(&self) -> &SpringSpec {
        &self.spec
    }

    /// Current value, unclamped; may overshoot the target
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current velocity in units per second
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Value the spring is heading for
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Check whether the spring has come to rest on its target
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Head for a new target from the current value and velocity
    ///
    /// Returns `false` if `target` is already the target.
    pub fn retarget(&mut self, target: f32) -> bool {
        if target == self.target {
            return false;
        }
        self.start_value = self.value;
        self.start_velocity = self.velocity;
        self.target = target;
        self.elapsed = Duration::ZERO;
        self.settled = false;
        true
    }

    /// Value and velocity `elapsed` after the last retarget
    pub fn value_at(&self, elapsed: Duration) -> (f32, f32) {
        let (disp, vel) = self.spec.sample(
            self.start_value - self.target,
            self.start_velocity,
            elapsed.as_secs_f32(),
        );
        (self.target + disp, vel)
    }

    /// Advance time by `dt`; returns `true` while still in motion
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.settled {
            return false;
        }
        self.elapsed += dt;
        let (value, velocity) = self.value_at(self.elapsed);
        if self.spec.is_at_rest(value - self.target, velocity) {
            self.value = self.target;
            self.velocity = 0.0;
            self.settled = true;
        } else {
            self.value = value;
            self.velocity = velocity;
        }
        !self.settled
    }
}

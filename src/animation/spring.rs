use crate::foundation::core::Point;
use crate::foundation::error::{ReticleError, ReticleResult};

const MAX_SUBSTEPS: u32 = 10_000;
const MIN_SUBSTEP_SECS: f64 = 1e-6;

/// Damped harmonic oscillator parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Spring constant `k`.
    pub stiffness: f64,
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Mass `m`.
    #[serde(default = "default_mass")]
    pub mass: f64,
}

fn default_mass() -> f64 {
    1.0
}

impl SpringConfig {
    /// Build from `(k, c, m)`.
    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// `c / (2 * sqrt(k * m))`: 1 is critically damped, above 1 overdamped.
    pub fn damping_ratio(self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Reject parameters that would make the integrator meaningless.
    pub fn validate(self, name: &str) -> ReticleResult<()> {
        if !(self.stiffness.is_finite() && self.stiffness > 0.0) {
            return Err(ReticleError::validation(format!(
                "{name}: stiffness must be finite and > 0"
            )));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(ReticleError::validation(format!(
                "{name}: damping must be finite and >= 0"
            )));
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ReticleError::validation(format!(
                "{name}: mass must be finite and > 0"
            )));
        }
        if self.stable_step_secs() < MIN_SUBSTEP_SECS {
            return Err(ReticleError::validation(format!(
                "{name}: too stiff or damped to integrate (stable step below {MIN_SUBSTEP_SECS} s)"
            )));
        }
        Ok(())
    }

    // Largest step for which semi-implicit Euler stays well inside its stability region.
    fn stable_step_secs(self) -> f64 {
        let w0 = (self.stiffness / self.mass).sqrt();
        let decay = self.damping / self.mass;
        let rate = w0.max(decay);
        if rate > 0.0 { 0.5 / rate } else { f64::INFINITY }
    }
}

/// Integration settings shared by every spring of a cursor.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Integration {
    /// Upper bound on a single integration sub-step, in seconds.
    pub max_substep_secs: f64,
    /// A spring closer than this to its target (and slower than `rest_speed`) snaps to rest.
    pub rest_delta: f64,
    /// Speed threshold for settling, in units per second.
    pub rest_speed: f64,
}

impl Default for Integration {
    fn default() -> Self {
        Self {
            max_substep_secs: 1.0 / 240.0,
            rest_delta: 1e-3,
            rest_speed: 1e-2,
        }
    }
}

impl Integration {
    /// Reject non-positive or non-finite settings.
    pub fn validate(self) -> ReticleResult<()> {
        for (name, v) in [
            ("max_substep_secs", self.max_substep_secs),
            ("rest_delta", self.rest_delta),
            ("rest_speed", self.rest_speed),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(ReticleError::validation(format!(
                    "integration.{name} must be finite and > 0"
                )));
            }
        }
        Ok(())
    }
}

/// A scalar that chases a target with damped-oscillator physics.
///
/// The value is never assigned directly after construction: [`Spring::set_target`] moves the
/// goal and [`Spring::step`] integrates `a = k(target - x)/m - c v/m` toward it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// A spring at rest on `initial`.
    pub fn new(initial: f64, config: SpringConfig) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current velocity, units per second.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Current goal.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Oscillator parameters.
    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Move the goal. Non-finite targets are ignored.
    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// True once the spring has settled exactly on its target.
    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance by `dt_secs`, split into sub-steps small enough to stay stable.
    pub fn step(&mut self, dt_secs: f64, integration: Integration) {
        if !(dt_secs.is_finite() && dt_secs > 0.0) || self.is_at_rest() {
            return;
        }

        let SpringConfig {
            stiffness: k,
            damping: c,
            mass: m,
        } = self.config;

        let max_h = integration
            .max_substep_secs
            .min(self.config.stable_step_secs());
        if !(max_h.is_finite() && max_h > 0.0) {
            return;
        }
        // Past the sub-step budget the frame is shortened rather than the step lengthened.
        let wanted = (dt_secs / max_h).ceil();
        let (steps, h) = if wanted > f64::from(MAX_SUBSTEPS) {
            (MAX_SUBSTEPS, max_h)
        } else {
            let steps = (wanted as u32).max(1);
            (steps, dt_secs / f64::from(steps))
        };

        for _ in 0..steps {
            let accel = k * (self.target - self.value) / m - c * self.velocity / m;
            self.velocity += accel * h;
            self.value += self.velocity * h;
        }

        if (self.target - self.value).abs() < integration.rest_delta
            && self.velocity.abs() < integration.rest_speed
        {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}

/// Two independent springs driving a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointSpring {
    x: Spring,
    y: Spring,
}

impl PointSpring {
    /// A point spring at rest on `initial`.
    pub fn new(initial: Point, config: SpringConfig) -> Self {
        Self {
            x: Spring::new(initial.x, config),
            y: Spring::new(initial.y, config),
        }
    }

    /// Current position.
    pub fn value(&self) -> Point {
        Point::new(self.x.value(), self.y.value())
    }

    /// Current goal.
    pub fn target(&self) -> Point {
        Point::new(self.x.target(), self.y.target())
    }

    /// Move the goal.
    pub fn set_target(&mut self, target: Point) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    /// True once both axes are at rest.
    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }

    /// Advance both axes.
    pub fn step(&mut self, dt_secs: f64, integration: Integration) {
        self.x.step(dt_secs, integration);
        self.y.step(dt_secs, integration);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;

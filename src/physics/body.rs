//! Circular point-mass bodies and their motion integration.

use glam::DVec2;

use crate::error::{Result, SimError};

/// A circular body with mass. No rotation, no forces: velocity only changes
/// through collision and wall response.
///
/// `radius` and `mass` are fixed at construction; `position` and `velocity`
/// are mutated by [`integrate`](Body::integrate) and by the corrective passes
/// (boundary clamping, overlap correction, impulse response).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Center position in meters.
    pub position: DVec2,
    /// Velocity in meters per second.
    pub velocity: DVec2,
    radius: f64,
    mass: f64,
}

impl Body {
    /// Create a body, rejecting non-positive mass and negative or non-finite radius.
    pub fn new(position: DVec2, velocity: DVec2, radius: f64, mass: f64) -> Result<Self> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(SimError::invalid("mass", format!("must be > 0, got {mass}")));
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(SimError::invalid(
                "radius",
                format!("must be finite and >= 0, got {radius}"),
            ));
        }
        if !position.is_finite() {
            return Err(SimError::invalid("position", "must be finite"));
        }
        if !velocity.is_finite() {
            return Err(SimError::invalid("velocity", "must be finite"));
        }

        Ok(Self {
            position,
            velocity,
            radius,
            mass,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn inverse_mass(&self) -> f64 {
        1.0 / self.mass
    }

    /// Advance position by one timestep: p += v * dt.
    ///
    /// `dt > 0` is validated once in the configuration, not here.
    pub fn integrate(&mut self, dt: f64) {
        self.position += self.velocity * dt;
    }

    /// Linear momentum m * v.
    pub fn momentum(&self) -> DVec2 {
        self.velocity * self.mass
    }

    /// Translational kinetic energy 0.5 * m * (v . v).
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }
}

//! System-level quantities derived from the two bodies.
//!
//! Everything is recomputed from the current body state on every call; with a
//! fixed pair there is nothing worth caching.

use glam::DVec2;

use super::body::Body;

/// Total momentum vector `m_a v_a + m_b v_b`.
pub fn total_momentum(a: &Body, b: &Body) -> DVec2 {
    a.momentum() + b.momentum()
}

/// `|P|`, the scalar reported in the momentum series.
pub fn momentum_magnitude(a: &Body, b: &Body) -> f64 {
    total_momentum(a, b).length()
}

/// Total translational kinetic energy.
pub fn kinetic_energy(a: &Body, b: &Body) -> f64 {
    a.kinetic_energy() + b.kinetic_energy()
}

/// Mass-weighted mean position.
pub fn center_of_mass(a: &Body, b: &Body) -> DVec2 {
    (a.position * a.mass() + b.position * b.mass()) / (a.mass() + b.mass())
}

/// Snapshot of the derived quantities for one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemQuantities {
    /// `|P|` in kg·m/s.
    pub momentum: f64,
    /// Total kinetic energy in J.
    pub kinetic_energy: f64,
    pub center_of_mass: DVec2,
}

impl SystemQuantities {
    pub fn measure(a: &Body, b: &Body) -> Self {
        Self {
            momentum: momentum_magnitude(a, b),
            kinetic_energy: kinetic_energy(a, b),
            center_of_mass: center_of_mass(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_pair_quantities() {
        let a = Body::new(DVec2::new(0.0, 0.0), DVec2::new(3.0, 0.0), 1.0, 2.0).unwrap();
        let b = Body::new(DVec2::new(2.0, 0.0), DVec2::new(-1.5, 0.0), 1.0, 1.5).unwrap();

        let q = SystemQuantities::measure(&a, &b);

        // 2*3 - 1.5*1.5 = 3.75
        assert!((q.momentum - 3.75).abs() < 1e-12, "P = {}", q.momentum);
        // 0.5*2*9 + 0.5*1.5*2.25 = 10.6875
        assert!((q.kinetic_energy - 10.6875).abs() < 1e-12, "KE = {}", q.kinetic_energy);
        // (0*2 + 2*1.5) / 3.5
        assert!((q.center_of_mass.x - 3.0 / 3.5).abs() < 1e-12);
        assert_eq!(q.center_of_mass.y, 0.0);
    }

    #[test]
    fn test_momentum_magnitude_is_vector_norm() {
        let a = Body::new(DVec2::ZERO, DVec2::new(1.0, 0.0), 0.1, 3.0).unwrap();
        let b = Body::new(DVec2::ONE, DVec2::new(0.0, 2.0), 0.1, 2.0).unwrap();

        // P = (3, 4)
        assert_eq!(total_momentum(&a, &b), DVec2::new(3.0, 4.0));
        assert!((momentum_magnitude(&a, &b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_opposite_momenta_cancel() {
        let a = Body::new(DVec2::ZERO, DVec2::new(2.0, 1.0), 0.1, 1.0).unwrap();
        let b = Body::new(DVec2::ONE, DVec2::new(-1.0, -0.5), 0.1, 2.0).unwrap();
        assert!(momentum_magnitude(&a, &b) < 1e-12);
        assert!(kinetic_energy(&a, &b) > 0.0);
    }
}

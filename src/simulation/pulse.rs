//! Idealized force pulse for a finished contact episode.
//!
//! A discrete step only knows the total impulse `J` of an episode. For
//! plotting, the contact is modelled as a half-sine force over an assumed
//! duration `T`, scaled so its area equals `J`:
//!
//! ```text
//! F(t) = F_max * sin(pi * t / T),   F_max = J * pi / (2 T)
//! ```

use std::f64::consts::PI;

/// Assumed contact duration in seconds.
pub const COLLISION_DURATION: f64 = 0.05;
/// Default number of points in a sampled pulse.
pub const PULSE_SAMPLES: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpulsePulse {
    impulse: f64,
    duration: f64,
}

impl ImpulsePulse {
    /// Pulse over [`COLLISION_DURATION`]. `None` for a non-positive impulse.
    pub fn from_finished(impulse: f64) -> Option<Self> {
        Self::with_duration(impulse, COLLISION_DURATION)
    }

    pub fn with_duration(impulse: f64, duration: f64) -> Option<Self> {
        if !(impulse.is_finite() && impulse > 0.0) || !(duration.is_finite() && duration > 0.0) {
            return None;
        }
        Some(Self { impulse, duration })
    }

    /// Total impulse in N·s.
    pub fn impulse(&self) -> f64 {
        self.impulse
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn peak_force(&self) -> f64 {
        self.impulse * PI / (2.0 * self.duration)
    }

    /// Force at time `t` after contact start; zero outside `[0, T]`.
    pub fn force_at(&self, t: f64) -> f64 {
        if !(0.0..=self.duration).contains(&t) {
            return 0.0;
        }
        self.peak_force() * (PI * t / self.duration).sin()
    }

    /// `n` evenly spaced `(t, F)` points from 0 to `T` inclusive.
    pub fn samples(&self, n: usize) -> Vec<(f64, f64)> {
        match n {
            0 => Vec::new(),
            1 => vec![(0.0, 0.0)],
            _ => {
                let step = self.duration / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        let t = if i == n - 1 { self.duration } else { i as f64 * step };
                        (t, self.force_at(t))
                    })
                    .collect()
            }
        }
    }
}

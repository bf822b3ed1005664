//! Contact data structures for collision response.

use glam::DVec2;

/// Geometric contact between two circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactInfo {
    /// Contact normal (from body B to body A).
    pub normal: DVec2,
    /// Overlap depth, `max(0, r_a + r_b - distance)`.
    pub penetration: f64,
    /// Center-to-center distance.
    pub distance: f64,
}

/// Impulse bookkeeping for the single body pair across consecutive contact steps.
///
/// An episode opens on the first approaching contact step, accumulates the
/// signed normal impulse of every approaching step, and closes on the first
/// step the circles are apart again.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContactEpisode {
    in_contact: bool,
    accumulated_impulse: f64,
    /// Number of impulse samples accumulated in the open episode.
    samples: u32,
}

impl ContactEpisode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_contact(&self) -> bool {
        self.in_contact
    }

    pub fn accumulated_impulse(&self) -> f64 {
        self.accumulated_impulse
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Open an episode. Returns `false` if one was already open, in which case
    /// the accumulator is left alone.
    pub fn begin(&mut self) -> bool {
        if self.in_contact {
            return false;
        }
        self.in_contact = true;
        self.accumulated_impulse = 0.0;
        self.samples = 0;
        true
    }

    pub fn accumulate(&mut self, impulse: f64) {
        debug_assert!(self.in_contact, "accumulate outside a contact episode");
        self.accumulated_impulse += impulse;
        self.samples += 1;
    }

    /// Close the episode and return `|accumulated_impulse|`, or `None` if no
    /// episode was open.
    pub fn end(&mut self) -> Option<f64> {
        if !self.in_contact {
            return None;
        }
        let total = self.accumulated_impulse.abs();
        self.reset();
        Some(total)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episode_lifecycle() {
        let mut episode = ContactEpisode::new();
        assert_eq!(episode.end(), None, "ending a closed episode is a no-op");

        assert!(episode.begin());
        episode.accumulate(2.5);
        assert!(!episode.begin(), "second begin must not reopen");
        episode.accumulate(1.0);
        assert_eq!(episode.samples(), 2);
        assert!((episode.accumulated_impulse() - 3.5).abs() < 1e-12);

        assert_eq!(episode.end(), Some(3.5));
        assert!(!episode.in_contact());
        assert_eq!(episode.accumulated_impulse(), 0.0);
        assert_eq!(episode.end(), None);
    }

    #[test]
    fn test_end_reports_magnitude() {
        let mut episode = ContactEpisode::new();
        episode.begin();
        episode.accumulate(-4.0);
        assert_eq!(episode.end(), Some(4.0));
    }

    #[test]
    fn test_begin_clears_stale_accumulator() {
        let mut episode = ContactEpisode::new();
        episode.begin();
        episode.accumulate(7.0);
        episode.end();

        episode.begin();
        assert_eq!(episode.accumulated_impulse(), 0.0);
        assert_eq!(episode.samples(), 0);
    }
}

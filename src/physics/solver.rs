//! Impulse-based collision response for the body pair.

use glam::DVec2;
use tracing::debug;

use super::body::Body;
use super::contact::{ContactEpisode, ContactInfo};
use super::narrowphase::circle_circle;

/// Result of resolving one step of the pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollisionOutcome {
    /// Mean impulsive force over the step, `|j| / dt`. Zero unless an impulse
    /// was applied this step.
    pub force_sample: f64,
    /// `|accumulated impulse|` of a contact episode that ended this step.
    /// Set on exactly one step per episode.
    pub finished_impulse: Option<f64>,
    /// Signed scalar impulse applied this step, if any.
    pub impulse: Option<f64>,
}

/// Detect contact between `a` and `b` and resolve it in place.
///
/// While the circles overlap they are always pushed apart along the normal,
/// weighted by the other body's mass share so the pair's center of mass does
/// not move. A velocity impulse is only applied while they approach
/// (`v_n < 0`); a resting or separating pair gets no impulse.
///
/// `restitution` is expected in `[0, 1]`; values outside that range are
/// applied as given.
pub fn resolve_collision(
    a: &mut Body,
    b: &mut Body,
    episode: &mut ContactEpisode,
    restitution: f64,
    dt: f64,
) -> CollisionOutcome {
    let Some(contact) = circle_circle(a, b) else {
        let finished_impulse = episode.end();
        if let Some(total) = finished_impulse {
            debug!(impulse = total, "contact episode finished");
        }
        return CollisionOutcome {
            finished_impulse,
            ..Default::default()
        };
    };

    let normal = contact.normal;
    let normal_speed = (a.velocity - b.velocity).dot(normal);

    correct_overlap(a, b, &contact);

    if normal_speed >= 0.0 {
        return CollisionOutcome::default();
    }

    let j = normal_impulse(a, b, normal_speed, restitution);
    apply_impulse(a, b, normal, j);

    if episode.begin() {
        debug!(normal_speed, "contact episode started");
    }
    episode.accumulate(j);

    let force_sample = j.abs() / dt;
    debug!(impulse = j, force = force_sample, "collision impulse applied");

    CollisionOutcome {
        force_sample,
        finished_impulse: None,
        impulse: Some(j),
    }
}

/// Scalar normal impulse `j = -(1 + e) v_n / (1/m_a + 1/m_b)`.
pub fn normal_impulse(a: &Body, b: &Body, normal_speed: f64, restitution: f64) -> f64 {
    -(1.0 + restitution) * normal_speed / (a.inverse_mass() + b.inverse_mass())
}

/// Push the bodies apart along the contact normal so they just touch.
///
/// `a` moves by `overlap * m_b / M` and `b` by `overlap * m_a / M` in the
/// opposite direction, which leaves the center of mass where it was.
pub fn correct_overlap(a: &mut Body, b: &mut Body, contact: &ContactInfo) {
    let overlap = contact.penetration;
    if overlap <= 0.0 {
        return;
    }
    let total_mass = a.mass() + b.mass();
    a.position += contact.normal * (overlap * (b.mass() / total_mass));
    b.position -= contact.normal * (overlap * (a.mass() / total_mass));
}

/// Apply the equal and opposite impulse `j * normal` to the pair.
fn apply_impulse(a: &mut Body, b: &mut Body, normal: DVec2, j: f64) {
    let impulse = normal * j;
    a.velocity += impulse * a.inverse_mass();
    b.velocity -= impulse * b.inverse_mass();
}

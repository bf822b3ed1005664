//! Narrowphase collision detection for the circle pair.

use super::body::Body;
use super::contact::ContactInfo;

/// Guard added to the distance when normalizing, so coincident centers still
/// produce a finite (if arbitrary) normal.
pub const NORMAL_EPSILON: f64 = 1e-9;

/// Center-to-center distance between two bodies.
pub fn separation_distance(a: &Body, b: &Body) -> f64 {
    (a.position - b.position).length()
}

/// Circle-circle test. Touching (`distance == r_a + r_b`) counts as contact.
///
/// The normal points from `b` towards `a`.
pub fn circle_circle(a: &Body, b: &Body) -> Option<ContactInfo> {
    let separation = a.position - b.position;
    let distance = separation.length();
    let min_distance = a.radius() + b.radius();

    if distance > min_distance {
        return None;
    }

    Some(ContactInfo {
        normal: separation / (distance + NORMAL_EPSILON),
        penetration: (min_distance - distance).max(0.0),
        distance,
    })
}

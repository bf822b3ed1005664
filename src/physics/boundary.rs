//! Rectangular arena walls.

use glam::DVec2;
use tracing::trace;

use super::body::Body;

/// Axis-aligned arena spanning `[0, width] x [0, height]` in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

/// Which velocity components were reflected by a wall check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BounceAxes {
    pub x: bool,
    pub y: bool,
}

impl BounceAxes {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

impl Arena {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Whether the whole circle lies inside the arena.
    pub fn contains(&self, body: &Body) -> bool {
        let r = body.radius();
        let p = body.position;
        p.x - r >= 0.0 && p.x + r <= self.width && p.y - r >= 0.0 && p.y + r <= self.height
    }

    /// Clamp the body back inside the walls and reflect the velocity
    /// component of each violated axis.
    ///
    /// Axes are handled independently, so a corner hit reflects both.
    /// Re-applying to a body that is already inside changes nothing.
    pub fn bounce(&self, body: &mut Body) -> BounceAxes {
        let r = body.radius();
        let mut axes = BounceAxes::default();

        if body.position.x - r < 0.0 {
            body.position.x = r;
            body.velocity.x = -body.velocity.x;
            axes.x = true;
        } else if body.position.x + r > self.width {
            body.position.x = self.width - r;
            body.velocity.x = -body.velocity.x;
            axes.x = true;
        }

        if body.position.y - r < 0.0 {
            body.position.y = r;
            body.velocity.y = -body.velocity.y;
            axes.y = true;
        } else if body.position.y + r > self.height {
            body.position.y = self.height - r;
            body.velocity.y = -body.velocity.y;
            axes.y = true;
        }

        if axes.any() {
            trace!(?axes, position = ?body.position, "wall bounce");
        }
        axes
    }
}

impl Default for Arena {
    /// 600 x 400 px canvas at 0.01 m/px.
    fn default() -> Self {
        Self::new(6.0, 4.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(x: f64, y: f64, vx: f64, vy: f64) -> Body {
        Body::new(DVec2::new(x, y), DVec2::new(vx, vy), 0.2, 1.0).unwrap()
    }

    #[test]
    fn test_left_wall_bounce() {
        let arena = Arena::default();
        let r = 0.2;
        let mut b = body(r - 0.01, 2.0, -1.0, 0.0);

        let axes = arena.bounce(&mut b);

        assert!(axes.x && !axes.y);
        assert_eq!(b.velocity, DVec2::new(1.0, 0.0));
        assert!((b.position.x - r).abs() < 1e-12, "x = {}", b.position.x);
    }

    #[test]
    fn test_right_and_bottom_walls() {
        let arena = Arena::new(6.0, 4.0);
        let mut b = body(5.9, 3.95, 2.0, 0.5);

        arena.bounce(&mut b);

        assert!((b.position.x - 5.8).abs() < 1e-12);
        assert!((b.position.y - 3.8).abs() < 1e-12);
        assert_eq!(b.velocity, DVec2::new(-2.0, -0.5));
    }

    #[test]
    fn test_corner_bounces_both_axes() {
        let arena = Arena::default();
        let mut b = body(0.1, 0.05, -1.0, -3.0);

        let axes = arena.bounce(&mut b);

        assert!(axes.x && axes.y, "corner hit should reflect both axes");
        assert_eq!(b.velocity, DVec2::new(1.0, 3.0));
        assert_eq!(b.position, DVec2::new(0.2, 0.2));
    }

    #[test]
    fn test_bounce_is_idempotent_inside() {
        let arena = Arena::default();
        let mut b = body(3.0, 2.0, -1.0, 1.0);
        let before = b;

        assert!(!arena.bounce(&mut b).any());
        assert_eq!(b, before);
        assert!(arena.contains(&b));

        // A clamped body stays put on a second pass
        let mut c = body(0.0, 2.0, -1.0, 0.0);
        arena.bounce(&mut c);
        let clamped = c;
        arena.bounce(&mut c);
        assert_eq!(c, clamped);
    }
}

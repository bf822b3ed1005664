//! Two-body physics: integration, wall response and impulse-based collisions.
//!
//! # Architecture
//!
//! One fixed step of the pair runs in this order:
//!
//! 1. Integrate positions (`p += v * dt`)
//! 2. Clamp and reflect against the arena walls
//! 3. Narrowphase circle-circle test
//! 4. Overlap correction and normal impulse (sequential, single pair)
//! 5. Measure momentum, kinetic energy and center of mass
//!
//! Nothing here allocates, blocks, or keeps state outside the arguments it
//! is handed; the [`Simulation`](crate::Simulation) owns all of it.

pub mod body;
pub mod boundary;
pub mod contact;
pub mod narrowphase;
pub mod quantities;
pub mod solver;

use self::body::Body;
use self::boundary::{Arena, BounceAxes};
use self::contact::ContactEpisode;
use self::quantities::SystemQuantities;
use self::solver::{resolve_collision, CollisionOutcome};

/// Everything one fixed step produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairStep {
    pub collision: CollisionOutcome,
    pub bounces: [BounceAxes; 2],
    pub quantities: SystemQuantities,
}

/// Advance the pair by one fixed step of `dt` seconds.
pub fn step_pair(
    bodies: &mut [Body; 2],
    episode: &mut ContactEpisode,
    arena: &Arena,
    restitution: f64,
    dt: f64,
) -> PairStep {
    // 1. Integrate
    for body in bodies.iter_mut() {
        body.integrate(dt);
    }

    // 2. Walls
    let bounces = [arena.bounce(&mut bodies[0]), arena.bounce(&mut bodies[1])];

    // 3-4. Pair collision
    let [a, b] = bodies;
    let collision = resolve_collision(a, b, episode, restitution, dt);

    // 5. Derived quantities
    let quantities = SystemQuantities::measure(a, b);

    PairStep {
        collision,
        bounces,
        quantities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn pair(va: DVec2, vb: DVec2) -> [Body; 2] {
        [
            Body::new(DVec2::new(2.0, 2.0), va, 0.2, 2.0).unwrap(),
            Body::new(DVec2::new(4.0, 2.0), vb, 0.2, 1.5).unwrap(),
        ]
    }

    #[test]
    fn test_step_pair_free_flight() {
        let mut bodies = pair(DVec2::new(1.0, 0.0), DVec2::new(-1.0, 0.5));
        let mut episode = ContactEpisode::new();

        let step = step_pair(&mut bodies, &mut episode, &Arena::default(), 1.0, 0.02);

        assert_eq!(step.collision, CollisionOutcome::default());
        assert!(!step.bounces[0].any() && !step.bounces[1].any());
        assert!((bodies[0].position.x - 2.02).abs() < 1e-12);
        assert!((bodies[1].position.y - 2.01).abs() < 1e-12);
        // 2*1 - 1.5*1 = 0.5 in x, 0.75 in y
        let expected = DVec2::new(0.5, 0.75).length();
        assert!((step.quantities.momentum - expected).abs() < 1e-12);
    }

    #[test]
    fn test_step_pair_collides_after_approach() {
        let mut bodies = pair(DVec2::new(3.0, 0.0), DVec2::new(-1.5, 0.0));
        let mut episode = ContactEpisode::new();
        let arena = Arena::default();

        let mut hits = 0;
        for _ in 0..100 {
            let step = step_pair(&mut bodies, &mut episode, &arena, 1.0, 0.02);
            if step.collision.impulse.is_some() {
                hits += 1;
            }
        }

        assert!(hits >= 1, "bodies heading at each other must collide");
        assert!(bodies.iter().all(|b| b.position.is_finite()));
    }

    #[test]
    fn test_step_pair_wall_bounce() {
        let mut bodies = pair(DVec2::new(-20.0, 0.0), DVec2::ZERO);
        let mut episode = ContactEpisode::new();

        // 2.0 - 20*0.2 = -2.0, clamped back to the radius
        let step = step_pair(&mut bodies, &mut episode, &Arena::default(), 1.0, 0.2);

        assert!(step.bounces[0].x);
        assert_eq!(bodies[0].position.x, 0.2);
        assert_eq!(bodies[0].velocity.x, 20.0);
    }
}

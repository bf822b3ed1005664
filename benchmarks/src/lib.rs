//! Shared setup for the stepping benchmarks.

use glam::DVec2;
use impact::{Arena, Body, BodyParams, ContactEpisode, Simulation, SimulationConfig};

pub const DT: f64 = 0.02;

/// Reference pair placed `gap` meters apart along x (center to center).
pub fn head_on_pair(gap: f64) -> [Body; 2] {
    let y = 2.0;
    let a = Body::new(DVec2::new(3.0 - gap * 0.5, y), DVec2::new(3.0, 0.0), 0.2, 2.0)
        .expect("body A setup");
    let b = Body::new(DVec2::new(3.0 + gap * 0.5, y), DVec2::new(-1.5, 0.0), 0.2, 1.5)
        .expect("body B setup");
    [a, b]
}

/// Pair overlapping by `depth` and still approaching.
pub fn overlapping_pair(depth: f64) -> [Body; 2] {
    head_on_pair(0.4 - depth)
}

pub fn arena() -> Arena {
    Arena::default()
}

pub fn episode() -> ContactEpisode {
    ContactEpisode::new()
}

/// Running simulation with the given restitution and timestep.
pub fn running_simulation(restitution: f64, timestep: f64) -> Simulation {
    let config = SimulationConfig::new()
        .restitution(restitution)
        .timestep(timestep)
        .body_a(BodyParams::new(2.0, DVec2::new(3.0, 0.4)))
        .body_b(BodyParams::new(1.5, DVec2::new(-1.5, -0.3)));
    let mut sim = Simulation::new(config).expect("simulation setup");
    sim.start().expect("simulation start");
    sim
}

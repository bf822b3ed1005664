//! Run control for a two-body simulation.
//!
//! The host owns a [`Simulation`] value and drives it with ticks, either one
//! fixed step at a time ([`Simulation::step`]) or by handing over elapsed
//! wall-clock time ([`Simulation::advance`]). There are no timers or threads
//! inside; each call runs to completion before returning.
//!
//! ```text
//!            start            pause
//!   Idle ───────────► Running ◄────► Paused
//!    ▲                   │   resume     │
//!    └──────── reset ────┴──────────────┘
//! ```

pub mod pulse;
pub mod series;

use glam::DVec2;
use tracing::{info, warn};

use crate::config::SimulationConfig;
use crate::error::{Result, SimError};
use crate::physics::body::Body;
use crate::physics::contact::ContactEpisode;
use crate::physics::quantities::SystemQuantities;
use crate::physics::step_pair;

use self::pulse::ImpulsePulse;
use self::series::{Series, SeriesRow};

/// Run state of a [`Simulation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Paused,
}

/// Physical state of one run: the body pair, their contact episode, and time.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    /// Elapsed simulated seconds.
    pub time: f64,
    pub bodies: [Body; 2],
    pub contact: ContactEpisode,
}

impl SimulationState {
    /// Fresh bodies at the configured start positions.
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        let [pos_a, pos_b] = config.initial_positions();
        let a = &config.body_a;
        let b = &config.body_b;
        Ok(Self {
            time: 0.0,
            bodies: [
                Body::new(pos_a, a.velocity, a.radius, a.mass)?,
                Body::new(pos_b, b.velocity, b.radius, b.mass)?,
            ],
            contact: ContactEpisode::new(),
        })
    }
}

/// Position and velocity of one body after a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySnapshot {
    pub position: DVec2,
    pub velocity: DVec2,
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        Self {
            position: body.position,
            velocity: body.velocity,
        }
    }
}

/// Output of one fixed step, for rendering and charting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRecord {
    /// Simulated time the sample is logged at (before the step's advance).
    pub time: f64,
    pub bodies: [BodySnapshot; 2],
    /// Mean impulsive force over the step in N.
    pub force: f64,
    /// Total impulse of a contact episode that ended on this step.
    pub finished_impulse: Option<f64>,
    pub quantities: SystemQuantities,
}

impl StepRecord {
    /// Half-sine pulse for the episode that ended this step, if any.
    pub fn pulse(&self) -> Option<ImpulsePulse> {
        self.finished_impulse.and_then(ImpulsePulse::from_finished)
    }
}

/// A two-body collision run: configuration, state, recorded series, and the
/// fixed-timestep driver.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    state: SimulationState,
    series: Series,
    run_state: RunState,
    accumulator: f64,
}

impl Simulation {
    /// Validate `config` and build an idle simulation from it.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let state = SimulationState::from_config(&config)?;
        Ok(Self {
            config,
            state,
            series: Series::new(),
            run_state: RunState::Idle,
            accumulator: 0.0,
        })
    }

    /// Replace the run with fresh bodies from `config`.
    ///
    /// Everything is validated and built first; on error the current run is
    /// left exactly as it was.
    pub fn reset(&mut self, config: SimulationConfig) -> Result<()> {
        config.validate()?;
        let state = SimulationState::from_config(&config)?;

        self.config = config;
        self.state = state;
        self.series.clear();
        self.run_state = RunState::Idle;
        self.accumulator = 0.0;
        info!(
            restitution = self.config.restitution.coefficient(),
            timestep = self.config.timestep,
            "simulation reset"
        );
        Ok(())
    }

    /// Reset with the current configuration.
    pub fn restart(&mut self) -> Result<()> {
        self.reset(self.config.clone())
    }

    /// Begin running. Only valid while idle.
    pub fn start(&mut self) -> Result<()> {
        if self.run_state != RunState::Idle {
            return Err(SimError::InvalidTransition {
                from: self.run_state,
                action: "start",
            });
        }
        self.series.clear();
        self.state.time = 0.0;
        self.accumulator = 0.0;
        self.run_state = RunState::Running;
        info!("simulation started");
        Ok(())
    }

    pub fn pause(&mut self) -> Result<()> {
        if self.run_state != RunState::Running {
            return Err(SimError::InvalidTransition {
                from: self.run_state,
                action: "pause",
            });
        }
        self.run_state = RunState::Paused;
        Ok(())
    }

    pub fn resume(&mut self) -> Result<()> {
        if self.run_state != RunState::Paused {
            return Err(SimError::InvalidTransition {
                from: self.run_state,
                action: "resume",
            });
        }
        self.run_state = RunState::Running;
        Ok(())
    }

    /// Flip between running and paused. Does nothing while idle.
    pub fn toggle_pause(&mut self) -> RunState {
        self.run_state = match self.run_state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
            RunState::Idle => RunState::Idle,
        };
        self.run_state
    }

    /// Run one fixed step of `config.timestep`.
    ///
    /// Returns `None` without touching any state unless running; a paused
    /// host can keep ticking this as a heartbeat.
    pub fn step(&mut self) -> Option<StepRecord> {
        if self.run_state != RunState::Running {
            return None;
        }

        let dt = self.config.timestep;
        let result = step_pair(
            &mut self.state.bodies,
            &mut self.state.contact,
            &self.config.arena,
            self.config.restitution.coefficient(),
            dt,
        );

        let time = self.state.time;
        self.series.push(SeriesRow {
            time,
            force: result.collision.force_sample,
            momentum: result.quantities.momentum,
            kinetic_energy: result.quantities.kinetic_energy,
        });
        self.state.time += dt;

        let [a, b] = &self.state.bodies;
        Some(StepRecord {
            time,
            bodies: [a.into(), b.into()],
            force: result.collision.force_sample,
            finished_impulse: result.collision.finished_impulse,
            quantities: result.quantities,
        })
    }

    /// Feed `elapsed` wall-clock seconds and run as many fixed steps as fit,
    /// at most `config.max_substeps`. Backlog beyond that is dropped.
    pub fn advance(&mut self, elapsed: f64) -> Vec<StepRecord> {
        if self.run_state != RunState::Running {
            return Vec::new();
        }

        let dt = self.config.timestep;
        self.accumulator += elapsed.max(0.0);

        let mut records = Vec::new();
        let mut substeps = 0u32;
        while self.accumulator >= dt && substeps < self.config.max_substeps {
            records.extend(self.step());
            self.accumulator -= dt;
            substeps += 1;
        }

        // Clamp accumulator to avoid spiral of death
        if self.accumulator > dt * self.config.max_substeps as f64 {
            warn!(backlog = self.accumulator, "dropping simulation backlog");
            self.accumulator = 0.0;
        }

        records
    }

    /// Run `n` fixed steps back to back.
    pub fn run_steps(&mut self, n: usize) -> Vec<StepRecord> {
        (0..n).map_while(|_| self.step()).collect()
    }

    /// Run the number of fixed steps closest to `duration` seconds.
    ///
    /// A non-finite duration runs nothing.
    pub fn run_for(&mut self, duration: f64) -> Vec<StepRecord> {
        if !duration.is_finite() {
            warn!(duration, "ignoring non-finite run duration");
            return Vec::new();
        }
        let n = (duration.max(0.0) / self.config.timestep).round() as usize;
        self.run_steps(n)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn bodies(&self) -> &[Body; 2] {
        &self.state.bodies
    }

    pub fn contact(&self) -> &ContactEpisode {
        &self.state.contact
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn time(&self) -> f64 {
        self.state.time
    }

    /// Momentum, energy and center of mass of the current state.
    pub fn quantities(&self) -> SystemQuantities {
        let [a, b] = &self.state.bodies;
        SystemQuantities::measure(a, b)
    }
}

//! Impact: two-body collision simulator core
//!
//! Steps a pair of circular point masses through a rectangular arena with
//! impulse-based collision response, and records the momentum, kinetic energy
//! and impulsive force of every tick for charting and export.
//!
//! # Architecture
//!
//! 1. **config** - Run parameters, text-field parsing and validation
//! 2. **physics** - Bodies, walls, contact detection, impulse solver, derived quantities
//! 3. **simulation** - Idle/Running/Paused stepper, recorded series, CSV export, impulse pulses
//! 4. **error** - `SimError` and the crate `Result`
//!
//! Rendering, input widgets and charts belong to the host; the core only takes
//! a [`SimulationConfig`] and hands back [`StepRecord`]s.
//!
//! ```
//! use impact::{Simulation, SimulationConfig};
//!
//! let mut sim = Simulation::new(SimulationConfig::default().restitution(0.5))?;
//! sim.start()?;
//! for record in sim.run_for(2.0) {
//!     if let Some(pulse) = record.pulse() {
//!         println!("impulse {:.3} N·s, peak {:.1} N", pulse.impulse(), pulse.peak_force());
//!     }
//! }
//! let csv = sim.series().to_csv_string()?;
//! assert!(csv.starts_with("t (s)"));
//! # Ok::<(), impact::SimError>(())
//! ```

pub mod config;
pub mod error;
pub mod physics;
pub mod simulation;

pub use config::{BodyParams, LayoutMode, Restitution, SimulationConfig};
pub use error::{Result, SimError};

pub use physics::body::Body;
pub use physics::boundary::{Arena, BounceAxes};
pub use physics::contact::{ContactEpisode, ContactInfo};
pub use physics::quantities::SystemQuantities;
pub use physics::solver::CollisionOutcome;

pub use simulation::pulse::ImpulsePulse;
pub use simulation::series::{Series, SeriesRow, EXPORT_PRECISION};
pub use simulation::{BodySnapshot, RunState, Simulation, SimulationState, StepRecord};

// Re-export glam for convenience
pub use glam;

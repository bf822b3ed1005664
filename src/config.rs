//! Simulation configuration.
//!
//! Values arrive from a host (UI fields, CLI flags, a scenario file), are
//! validated once by [`SimulationConfig::validate`], and are never re-checked
//! per step.

use glam::DVec2;

use crate::error::{Result, SimError};
use crate::physics::boundary::Arena;

/// Reference fixed timestep (50 Hz).
pub const DEFAULT_TIMESTEP: f64 = 0.02;
/// Body radius used when none is given (20 px at 0.01 m/px).
pub const DEFAULT_RADIUS: f64 = 0.2;
/// Horizontal distance from the arena edge to each body's default start.
pub const EDGE_INSET: f64 = 0.5;
/// Margin kept between a 2D vertical offset and the arena edge.
pub const OFFSET_MARGIN: f64 = 0.5;

/// Parse a numeric text field, rejecting anything that is not a finite number.
pub fn parse_number(name: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| SimError::invalid(name, format!("`{trimmed}` is not a number")))?;
    if !value.is_finite() {
        return Err(SimError::invalid(name, format!("`{trimmed}` is not finite")));
    }
    Ok(value)
}

/// Coefficient of restitution.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Restitution {
    /// e = 1.0
    #[default]
    Elastic,
    /// e = 0.5
    PartiallyElastic,
    /// e = 0.0
    Inelastic,
    Custom(f64),
}

impl Restitution {
    pub fn coefficient(&self) -> f64 {
        match self {
            Restitution::Elastic => 1.0,
            Restitution::PartiallyElastic => 0.5,
            Restitution::Inelastic => 0.0,
            Restitution::Custom(e) => *e,
        }
    }
}

impl From<f64> for Restitution {
    fn from(e: f64) -> Self {
        if e == 1.0 {
            Restitution::Elastic
        } else if e == 0.5 {
            Restitution::PartiallyElastic
        } else if e == 0.0 {
            Restitution::Inelastic
        } else {
            Restitution::Custom(e)
        }
    }
}

/// How default start positions are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LayoutMode {
    /// Both bodies on the horizontal center line.
    #[default]
    OneDimensional,
    /// Each body shifted vertically from the center line (meters, +y down).
    TwoDimensional { offset_a: f64, offset_b: f64 },
}

/// Initial parameters of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BodyParams {
    /// Mass in kg.
    pub mass: f64,
    /// Initial velocity in m/s.
    pub velocity: DVec2,
    /// Radius in m.
    pub radius: f64,
    /// Explicit start position. `None` uses the layout default.
    pub position: Option<DVec2>,
}

impl Default for BodyParams {
    fn default() -> Self {
        Self {
            mass: 1.0,
            velocity: DVec2::ZERO,
            radius: DEFAULT_RADIUS,
            position: None,
        }
    }
}

impl BodyParams {
    pub fn new(mass: f64, velocity: DVec2) -> Self {
        Self {
            mass,
            velocity,
            ..Default::default()
        }
    }

    /// Build from raw text fields (mass, vx, vy).
    pub fn from_text(mass: &str, velocity_x: &str, velocity_y: &str) -> Result<Self> {
        let mass = parse_number("mass", mass)?;
        let vx = parse_number("velocity.x", velocity_x)?;
        let vy = parse_number("velocity.y", velocity_y)?;
        Ok(Self::new(mass, DVec2::new(vx, vy)))
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn position(mut self, position: DVec2) -> Self {
        self.position = Some(position);
        self
    }
}

/// Full configuration of one simulation run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    pub body_a: BodyParams,
    pub body_b: BodyParams,
    pub restitution: Restitution,
    pub arena: Arena,
    /// Fixed timestep in seconds. Default: 0.02.
    pub timestep: f64,
    /// Maximum fixed steps per [`Simulation::advance`](crate::Simulation::advance) call. Default: 4.
    pub max_substeps: u32,
    pub layout: LayoutMode,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            body_a: BodyParams::new(2.0, DVec2::new(3.0, 0.0)),
            body_b: BodyParams::new(1.5, DVec2::new(-1.5, 0.0)),
            restitution: Restitution::Elastic,
            arena: Arena::default(),
            timestep: DEFAULT_TIMESTEP,
            max_substeps: 4,
            layout: LayoutMode::OneDimensional,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body_a(mut self, params: BodyParams) -> Self {
        self.body_a = params;
        self
    }

    pub fn body_b(mut self, params: BodyParams) -> Self {
        self.body_b = params;
        self
    }

    pub fn restitution(mut self, restitution: impl Into<Restitution>) -> Self {
        self.restitution = restitution.into();
        self
    }

    pub fn arena(mut self, width: f64, height: f64) -> Self {
        self.arena = Arena::new(width, height);
        self
    }

    pub fn timestep(mut self, timestep: f64) -> Self {
        self.timestep = timestep;
        self
    }

    pub fn max_substeps(mut self, max_substeps: u32) -> Self {
        self.max_substeps = max_substeps;
        self
    }

    pub fn layout(mut self, layout: LayoutMode) -> Self {
        self.layout = layout;
        self
    }

    /// Largest vertical offset the 2D layout accepts.
    pub fn max_offset(&self) -> f64 {
        (self.arena.height * 0.5 - OFFSET_MARGIN).max(0.0)
    }

    /// Start positions for both bodies: explicit positions win, otherwise A
    /// starts near the left edge and B near the right edge on the center line,
    /// shifted by the 2D offsets (clamped to [`max_offset`](Self::max_offset)).
    pub fn initial_positions(&self) -> [DVec2; 2] {
        let center_y = self.arena.height * 0.5;
        let (offset_a, offset_b) = match self.layout {
            LayoutMode::OneDimensional => (0.0, 0.0),
            LayoutMode::TwoDimensional { offset_a, offset_b } => {
                let limit = self.max_offset();
                (offset_a.clamp(-limit, limit), offset_b.clamp(-limit, limit))
            }
        };

        let a = self
            .body_a
            .position
            .unwrap_or(DVec2::new(EDGE_INSET, center_y + offset_a));
        let b = self
            .body_b
            .position
            .unwrap_or(DVec2::new(self.arena.width - EDGE_INSET, center_y + offset_b));
        [a, b]
    }

    /// Check every value once, before any body is built.
    pub fn validate(&self) -> Result<()> {
        if !self.timestep.is_finite() || self.timestep <= 0.0 {
            return Err(SimError::invalid(
                "timestep",
                format!("must be > 0, got {}", self.timestep),
            ));
        }
        if self.max_substeps == 0 {
            return Err(SimError::invalid("max_substeps", "must be at least 1"));
        }

        let arena = self.arena;
        if !(arena.width.is_finite() && arena.width > 0.0) {
            return Err(SimError::invalid(
                "arena.width",
                format!("must be > 0, got {}", arena.width),
            ));
        }
        if !(arena.height.is_finite() && arena.height > 0.0) {
            return Err(SimError::invalid(
                "arena.height",
                format!("must be > 0, got {}", arena.height),
            ));
        }

        let e = self.restitution.coefficient();
        if !(0.0..=1.0).contains(&e) {
            return Err(SimError::invalid(
                "restitution",
                format!("must be within [0, 1], got {e}"),
            ));
        }

        if let LayoutMode::TwoDimensional { offset_a, offset_b } = self.layout {
            if !offset_a.is_finite() || !offset_b.is_finite() {
                return Err(SimError::invalid("layout", "offsets must be finite"));
            }
        }

        let positions = self.initial_positions();
        for (label, params, position) in [
            ("body_a", &self.body_a, positions[0]),
            ("body_b", &self.body_b, positions[1]),
        ] {
            validate_body(label, params, position, &arena)?;
        }

        Ok(())
    }
}

fn validate_body(label: &str, params: &BodyParams, position: DVec2, arena: &Arena) -> Result<()> {
    if !params.mass.is_finite() || params.mass <= 0.0 {
        return Err(SimError::invalid(
            format!("{label}.mass"),
            format!("must be > 0, got {}", params.mass),
        ));
    }
    if !params.radius.is_finite() || params.radius < 0.0 {
        return Err(SimError::invalid(
            format!("{label}.radius"),
            format!("must be finite and >= 0, got {}", params.radius),
        ));
    }
    if !params.velocity.is_finite() {
        return Err(SimError::invalid(format!("{label}.velocity"), "must be finite"));
    }
    if !position.is_finite() {
        return Err(SimError::invalid(format!("{label}.position"), "must be finite"));
    }
    let r = params.radius;
    if 2.0 * r > arena.width || 2.0 * r > arena.height {
        return Err(SimError::invalid(
            format!("{label}.radius"),
            format!("{r} m does not fit in a {} x {} m arena", arena.width, arena.height),
        ));
    }
    Ok(())
}

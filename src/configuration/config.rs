//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – update order of the integrator
//! - [`ParametersConfig`] – physical constants, step size, trail bound, units
//! - [`ViewerConfig`]     – window size, world-to-screen scale, frame rate
//! - [`BodyConfig`]       – initial state and looks of each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An Earth–Sun scenario matching these types:
//!
//! ```yaml
//! engine:
//!   update_order: "sequential"   # or "simultaneous"
//!
//! parameters:
//!   G: 6.67428e-11               # gravitational constant
//!   timestep: 86400.0            # one day per step
//!   trail_capacity: 2000         # null -> unbounded trails
//!   distance_unit: "au"          # body positions in AU ("m" by default)
//!
//! bodies:
//!   - name: "Sun"
//!     x: [0.0, 0.0]
//!     v: [0.0, 0.0]
//!     m: 1.989e30
//!     radius: 30.0
//!     color: [255, 255, 0]
//!     reference: true
//!   - name: "Earth"
//!     x: [-1.0, 0.0]
//!     v: [0.0, 29783.0]
//!     m: 5.972e24
//!     radius: 16.0
//!     color: [100, 149, 237]
//! ```
//!
//! [`ScenarioConfig::build_simulation`] maps this into the runtime
//! [`Simulation`], turning the per-body `reference` flag into a single index.

use serde::Deserialize;

use crate::simulation::engine::Engine;
use crate::simulation::error::{SimError, SimResult};
use crate::simulation::params::{Parameters, AU, DAY, G};
use crate::simulation::scenario::Simulation;
use crate::simulation::states::{Body, NVec2, Rgb};
use crate::simulation::trail::DEFAULT_TRAIL_CAPACITY;

/// Order in which the integrator advances bodies within one step
/// `update_order: "sequential"` or `update_order: "simultaneous"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateOrderConfig {
    #[serde(rename = "sequential")] // Each body fully advanced before the next one, later bodies see moved earlier bodies
    #[default]
    Sequential,

    #[serde(rename = "simultaneous")] // All forces from one snapshot, then every body advanced
    Simultaneous,
}

/// Unit the body positions in the file are written in
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceUnit {
    #[serde(rename = "m")]
    #[default]
    Meters,

    #[serde(rename = "au")]
    AstronomicalUnits,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub update_order: UpdateOrderConfig,
}

/// Global physical and numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
    #[serde(default = "default_timestep")]
    pub timestep: f64, // seconds per step
    #[serde(default = "default_trail_capacity")]
    pub trail_capacity: Option<usize>, // null -> unbounded
    #[serde(default)]
    pub distance_unit: DistanceUnit, // unit of body `x`
    #[serde(default = "default_au")]
    pub au: f64, // length of one AU in meters
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G: default_g(),
            timestep: default_timestep(),
            trail_capacity: default_trail_capacity(),
            distance_unit: DistanceUnit::default(),
            au: default_au(),
        }
    }
}

fn default_g() -> f64 {
    G
}

fn default_timestep() -> f64 {
    DAY
}

fn default_trail_capacity() -> Option<usize> {
    Some(DEFAULT_TRAIL_CAPACITY)
}

fn default_au() -> f64 {
    AU
}

/// Presentation settings, owned by the viewer and never read by the physics
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ViewerConfig {
    pub width: f32,
    pub height: f32,
    pub pixels_per_au: f32, // world-to-screen scale
    pub fps: f64, // steps (and frames) per real second
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
            pixels_per_au: 225.0,
            fps: 60.0,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub x: Vec<f64>, // initial position, in `distance_unit`
    #[serde(default = "zero_vec")]
    pub v: Vec<f64>, // initial velocity, m/s
    pub m: f64, // mass, kg
    #[serde(default = "default_radius")]
    pub radius: f64, // draw radius, px
    #[serde(default = "default_color")]
    pub color: Rgb,
    #[serde(default)]
    pub reference: bool, // distances of all other bodies are measured to this one
}

fn zero_vec() -> Vec<f64> {
    vec![0.0, 0.0]
}

fn default_radius() -> f64 {
    8.0
}

fn default_color() -> Rgb {
    [255, 255, 255]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub viewer: ViewerConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    /// Validate the scenario and build the runtime simulation from it
    pub fn build_simulation(&self) -> SimResult<Simulation> {
        let p_cfg = &self.parameters;
        let scale = match p_cfg.distance_unit {
            DistanceUnit::Meters => 1.0,
            DistanceUnit::AstronomicalUnits => p_cfg.au,
        };

        let mut reference = None;
        let mut bodies = Vec::with_capacity(self.bodies.len());

        for (i, bc) in self.bodies.iter().enumerate() {
            let x = vec2(i, "x", &bc.x)? * scale;
            let v = vec2(i, "v", &bc.v)?;

            let mut body = Body::new(x, bc.m, bc.radius, bc.color)?.with_velocity(v);
            if let Some(name) = &bc.name {
                body = body.with_name(name.clone());
            }
            bodies.push(body);

            if bc.reference {
                if let Some(first) = reference {
                    return Err(SimError::MultipleReferences { first, second: i });
                }
                reference = Some(i);
            }
        }

        let parameters = Parameters {
            G: p_cfg.G,
            timestep: p_cfg.timestep,
            trail_capacity: p_cfg.trail_capacity,
        };

        let engine = Engine {
            update_order: self.engine.update_order,
        };

        Simulation::new(bodies, reference, parameters, engine)
    }
}

fn vec2(body: usize, field: &'static str, c: &[f64]) -> SimResult<NVec2> {
    match c {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(SimError::InvalidVector { body, field, len: c.len() }),
    }
}

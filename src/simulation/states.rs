//! Core state types for the orbit simulation.
//!
//! - `Body`   one point mass: position, velocity, mass, presentation
//!            attributes and its orbit trail
//! - `System` the fixed set of bodies plus elapsed simulated time
//!
//! Bodies are created once, then mutated in place by the integrator.

use nalgebra::Vector2;

use super::error::{SimError, SimResult};
use super::trail::Trail;

pub type NVec2 = Vector2<f64>;

/// sRGB color carried for the viewer, not used by the physics
pub type Rgb = [u8; 3];

#[derive(Debug, Clone)]
pub struct Body {
    pub(crate) x: NVec2, // position, m
    pub(crate) v: NVec2, // velocity, m/s
    pub(crate) m: f64, // mass, kg
    pub(crate) radius: f64, // draw radius, px
    pub(crate) color: Rgb,
    pub(crate) name: Option<String>,
    pub(crate) distance_to_reference: Option<f64>, // m, set during force accumulation
    pub(crate) trail: Trail,
}

impl Body {
    /// Build a body at rest at `x`. Fails if the mass is not a positive finite number.
    pub fn new(x: NVec2, m: f64, radius: f64, color: Rgb) -> SimResult<Self> {
        if !(m.is_finite() && m > 0.0) {
            return Err(SimError::InvalidMass { mass: m });
        }
        Ok(Self {
            x,
            v: NVec2::zeros(),
            m,
            radius,
            color,
            name: None,
            distance_to_reference: None,
            trail: Trail::default(),
        })
    }

    pub fn with_velocity(mut self, v: NVec2) -> Self {
        self.v = v;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn velocity(&self) -> NVec2 {
        self.v
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Distance to the reference body measured the last time this body
    /// accumulated its attraction toward it. `None` for the reference body
    /// itself, or before the first step.
    pub fn distance_to_reference(&self) -> Option<f64> {
        self.distance_to_reference
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Linear momentum m * v
    pub fn momentum(&self) -> NVec2 {
        self.v * self.m
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // fixed for the run
    pub t: f64, // elapsed simulated time, s
    pub steps: u64, // completed steps
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            t: 0.0,
            steps: 0,
        }
    }
}

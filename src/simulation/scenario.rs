//! Build and drive a fully-initialized simulation
//!
//! `Simulation` is the runtime bundle the viewer and the headless runner hold:
//! - engine settings (`Engine`)
//! - physical parameters (`Parameters`)
//! - system state (`System`, bodies at t = 0 after construction)
//! - index of the reference body distances are measured against
//!
//! It is inserted into Bevy as a `Resource` and stepped once per frame.

use bevy::log::{debug, info};
use bevy::prelude::Resource;

use crate::configuration::config::UpdateOrderConfig;
use crate::simulation::engine::Engine;
use crate::simulation::error::{SimError, SimResult};
use crate::simulation::integrator::{sequential_euler, simultaneous_euler};
use crate::simulation::params::{Parameters, AU};
use crate::simulation::states::{Body, NVec2, Rgb, System};
use crate::simulation::trail::Trail;

#[derive(Resource, Debug, Clone)]
pub struct Simulation {
    engine: Engine,
    parameters: Parameters,
    system: System,
    reference: Option<usize>,
}

impl Simulation {
    /// Assemble a simulation from already-built bodies.
    ///
    /// Every body's trail is re-bounded to `parameters.trail_capacity` so the
    /// whole run shares one limit.
    pub fn new(mut bodies: Vec<Body>, reference: Option<usize>, parameters: Parameters, engine: Engine) -> SimResult<Self> {
        parameters.validate()?;

        if let Some(index) = reference {
            if index >= bodies.len() {
                return Err(SimError::InvalidReference { index, len: bodies.len() });
            }
        }

        for b in bodies.iter_mut() {
            b.trail.set_capacity(parameters.trail_capacity);
        }

        debug!(
            "simulation built: {} bodies, reference {:?}, dt = {} s, order {:?}",
            bodies.len(),
            reference,
            parameters.timestep,
            engine.update_order
        );

        Ok(Self {
            engine,
            parameters,
            system: System::new(bodies),
            reference,
        })
    }

    /// The inner solar system: Sun (reference), Earth, Mars, Mercury, Venus.
    ///
    /// Planets start on the negative x-axis moving in +y, one day per step.
    pub fn solar_system() -> Self {
        let planet = |x_au: f64, m: f64, vy: f64, radius: f64, color: Rgb, name: &str| {
            Body {
                x: NVec2::new(x_au * AU, 0.0),
                v: NVec2::new(0.0, vy),
                m,
                radius,
                color,
                name: Some(name.to_owned()),
                distance_to_reference: None,
                trail: Trail::default(),
            }
        };

        let bodies = vec![
            planet(0.0, 1.989e30, 0.0, 30.0, [255, 255, 0], "Sun"),
            planet(-1.0, 5.972e24, 29_783.0, 16.0, [100, 149, 237], "Earth"),
            planet(-1.524, 6.39e23, 24_077.0, 12.0, [188, 39, 50], "Mars"),
            planet(-0.387, 3.285e23, 47_362.0, 8.0, [80, 78, 81], "Mercury"),
            planet(-0.723, 4.867e24, 35_020.0, 12.0, [255, 165, 0], "Venus"),
        ];

        Self {
            engine: Engine::default(),
            parameters: Parameters::default(),
            system: System::new(bodies),
            reference: Some(0),
        }
    }

    /// Same simulation, stepped with a different update order
    pub fn with_update_order(mut self, update_order: UpdateOrderConfig) -> Self {
        self.engine.update_order = update_order;
        self
    }

    /// Advance every body by one fixed timestep.
    ///
    /// On error the step is abandoned where it failed; there is no rollback
    /// and `elapsed`/`steps` are not advanced.
    pub fn step(&mut self) -> SimResult<()> {
        let Simulation { engine, parameters, system, reference } = self;

        match engine.update_order {
            UpdateOrderConfig::Sequential => sequential_euler(system, parameters, *reference),
            UpdateOrderConfig::Simultaneous => simultaneous_euler(system, parameters, *reference),
        }
    }

    /// Step `n` times, stopping at the first fault
    pub fn run(&mut self, n: usize) -> SimResult<()> {
        for _ in 0..n {
            self.step()?;
        }
        info!("ran {} steps, t = {:.0} s", n, self.system.t);
        Ok(())
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn body(&self, i: usize) -> Option<&Body> {
        self.system.bodies.get(i)
    }

    pub fn reference(&self) -> Option<usize> {
        self.reference
    }

    pub fn reference_body(&self) -> Option<&Body> {
        self.reference.and_then(|i| self.system.bodies.get(i))
    }

    pub fn is_reference(&self, i: usize) -> bool {
        self.reference == Some(i)
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Simulated seconds since the start of the run
    pub fn elapsed(&self) -> f64 {
        self.system.t
    }

    pub fn steps(&self) -> u64 {
        self.system.steps
    }

    /// Σ m_i v_i
    pub fn total_momentum(&self) -> NVec2 {
        self.system.bodies.iter().map(Body::momentum).sum()
    }

    /// Mass-weighted mean position
    pub fn center_of_mass(&self) -> NVec2 {
        let (weighted, mass) = self
            .system
            .bodies
            .iter()
            .fold((NVec2::zeros(), 0.0), |(acc, m), b| (acc + b.x * b.m, m + b.m));

        if mass > 0.0 {
            weighted / mass
        } else {
            NVec2::zeros()
        }
    }
}

//! Physical and numerical parameters for the simulation
//!
//! `Parameters` is fixed at startup and never changes during a run:
//! - gravitational constant `G`
//! - fixed step size `timestep` (simulated seconds per `step()`)
//! - trail bound applied to every body

use super::error::{SimError, SimResult};
use super::trail::DEFAULT_TRAIL_CAPACITY;

/// Universal gravitational constant, m^3 kg^-1 s^-2
pub const G: f64 = 6.67428e-11;

/// Astronomical unit, m
pub const AU: f64 = 149_597_870_700.0;

/// One day, s
pub const DAY: f64 = 24.0 * 3600.0;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub timestep: f64, // step size dt, s
    pub trail_capacity: Option<usize>, // None = unbounded trails
}

impl Parameters {
    /// Reject parameters the integrator cannot work with
    pub fn validate(&self) -> SimResult<()> {
        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            return Err(SimError::InvalidTimestep(self.timestep));
        }
        if !(self.G.is_finite() && self.G > 0.0) {
            return Err(SimError::InvalidGravitationalConstant(self.G));
        }
        Ok(())
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G,
            timestep: DAY,
            trail_capacity: Some(DEFAULT_TRAIL_CAPACITY),
        }
    }
}

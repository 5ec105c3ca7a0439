//! Pairwise Newtonian gravity
//!
//! `Body::attraction` gives the force one body feels toward another.
//! There is no softening: coincident bodies are a fault, not a clamp.

use super::error::SimError;
use super::states::{Body, NVec2};

/// Result of one pairwise force evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attraction {
    pub force: NVec2, // N, pointing from self toward other
    pub distance: f64, // m, separation at evaluation time
}

/// Why a pairwise evaluation failed, before body indices are attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceFault {
    Coincident,
    NonFinite,
}

impl ForceFault {
    /// Attach the indices of the offending pair
    pub fn at(self, body: usize, other: usize) -> SimError {
        match self {
            ForceFault::Coincident => SimError::DegenerateGeometry { body, other },
            ForceFault::NonFinite => SimError::NonFiniteForce { body, other },
        }
    }
}

impl Body {
    /// Gravitational force exerted on `self` by `other`.
    ///
    /// `F = G * m_self * m_other / d^2`, directed along `atan2(dy, dx)` of the
    /// displacement `other - self`. The magnitude is split into components
    /// with `cos`/`sin` of that angle so trajectories match the reference
    /// scenario bit for bit.
    pub fn attraction(&self, other: &Body, G: f64) -> Result<Attraction, ForceFault> {
        // r points from self to other
        let r = other.x - self.x;
        let distance = r.x.hypot(r.y);

        if distance == 0.0 {
            return Err(ForceFault::Coincident);
        }

        let magnitude = G * self.m * other.m / distance.powi(2);
        let theta = r.y.atan2(r.x);
        let force = NVec2::new(theta.cos() * magnitude, theta.sin() * magnitude);

        if !(magnitude.is_finite() && force.x.is_finite() && force.y.is_finite()) {
            return Err(ForceFault::NonFinite);
        }

        Ok(Attraction { force, distance })
    }
}

/// Net force on `bodies[i]` from every other body, summed in index order.
///
/// When the reference body is among the sources, the measured separation is
/// returned alongside the force so the caller can record it.
pub(crate) fn net_force(bodies: &[Body], i: usize, G: f64, reference: Option<usize>) -> Result<(NVec2, Option<f64>), SimError> {
    let bi = &bodies[i];
    let mut total = NVec2::zeros();
    let mut distance_to_reference = None;

    for (j, bj) in bodies.iter().enumerate() {
        if j == i { // no self-interaction
            continue;
        }

        let a = bi.attraction(bj, G).map_err(|fault| fault.at(i, j))?;
        if reference == Some(j) {
            distance_to_reference = Some(a.distance);
        }
        total += a.force;
    }

    Ok((total, distance_to_reference))
}

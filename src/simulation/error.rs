//! Fault taxonomy for the physics core
//!
//! Every fault is fatal to the step that raised it and is handed back to the
//! caller of `Simulation::step`. Nothing is recovered locally.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// Two bodies sit on exactly the same point, distance is zero
    #[error("bodies {body} and {other} coincide, gravitational force is undefined")]
    DegenerateGeometry { body: usize, other: usize },

    #[error("body mass must be positive and finite, got {mass}")]
    InvalidMass { mass: f64 },

    /// Force magnitude overflowed or became NaN
    #[error("non-finite force between bodies {body} and {other}")]
    NonFiniteForce { body: usize, other: usize },

    /// Velocity or position of a body left the finite range during a step
    #[error("body {body} reached a non-finite velocity or position")]
    NonFiniteState { body: usize },

    #[error("reference body index {index} out of range for {len} bodies")]
    InvalidReference { index: usize, len: usize },

    #[error("bodies {first} and {second} are both flagged as reference")]
    MultipleReferences { first: usize, second: usize },

    #[error("timestep must be positive and finite, got {0}")]
    InvalidTimestep(f64),

    #[error("gravitational constant must be positive and finite, got {0}")]
    InvalidGravitationalConstant(f64),

    #[error("body {body}: `{field}` needs 2 components, got {len}")]
    InvalidVector { body: usize, field: &'static str, len: usize },
}

pub type SimResult<T> = Result<T, SimError>;

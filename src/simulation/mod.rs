pub mod error;
pub mod states;
pub mod trail;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod scenario;

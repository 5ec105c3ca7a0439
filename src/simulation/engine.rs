//! Runtime engine settings
//!
//! Selects the update order used by the integrator when building and
//! stepping a `Simulation`

use crate::configuration::config::UpdateOrderConfig;

#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub update_order: UpdateOrderConfig, // sequential (reference) or simultaneous
}

use std::time::Instant;

use crate::configuration::config::UpdateOrderConfig;
use crate::simulation::error::SimResult;
use crate::simulation::scenario::Simulation;

/// Time `steps` steps of the given simulation under both update orders.
/// Prints one line per order, per-step time in microseconds.
pub fn bench_step(template: &Simulation, steps: usize) -> SimResult<()> {
    let steps = steps.max(1);

    println!("order,steps,us_per_step,momentum_drift");

    for order in [UpdateOrderConfig::Sequential, UpdateOrderConfig::Simultaneous] {
        let mut sim = template.clone().with_update_order(order);
        let p0 = sim.total_momentum();

        // Warm-up
        sim.step()?;

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.step()?;
        }
        let us_per_step = t0.elapsed().as_secs_f64() * 1.0e6 / steps as f64;

        let drift = (sim.total_momentum() - p0).norm();

        println!("{:?},{},{:.3},{:.6e}", order, steps, us_per_step, drift);
    }

    Ok(())
}

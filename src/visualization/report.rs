//! Text rendition of the simulation for runs without a window

use crate::simulation::error::SimResult;
use crate::simulation::params::{AU, DAY};
use crate::simulation::scenario::Simulation;

/// Advance `steps` steps, then print where every body ended up
pub fn run_headless(simulation: &mut Simulation, steps: usize) -> SimResult<()> {
    let p0 = simulation.total_momentum();
    let result = simulation.run(steps);

    println!(
        "t = {:.1} days after {} steps",
        simulation.elapsed() / DAY,
        simulation.steps()
    );
    println!("{:<10} {:>12} {:>12} {:>18} {:>8}", "body", "x [AU]", "y [AU]", "distance [KM]", "trail");

    for (i, b) in simulation.bodies().iter().enumerate() {
        let label = match b.name() {
            Some(name) => name.to_owned(),
            None => format!("#{i}"),
        };
        let distance = match (simulation.is_reference(i), b.distance_to_reference()) {
            (false, Some(d)) => format!("{:.2}", d / 1000.0),
            _ => "-".to_owned(),
        };
        let x = b.position() / AU;

        println!("{:<10} {:>12.6} {:>12.6} {:>18} {:>8}", label, x.x, x.y, distance, b.trail().len());
    }

    let drift = (simulation.total_momentum() - p0).norm();
    println!("momentum drift: {:.6e} kg m/s", drift);

    result
}

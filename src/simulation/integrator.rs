//! Fixed-step semi-implicit Euler integrators
//!
//! Both variants kick the velocity with the force at the start of the body's
//! update, then drift the position with the *new* velocity:
//!
//! ```text
//! v_n+1 = v_n + F_n / m * dt
//! x_n+1 = x_n + v_n+1 * dt
//! ```
//!
//! They differ only in which positions the force sees:
//! - `sequential_euler` advances bodies one at a time in place, so body `i`
//!   feels bodies `0..i` at their already-advanced positions
//! - `simultaneous_euler` evaluates every force from one start-of-step
//!   snapshot before moving anything

use bevy::log::trace;

use super::error::{SimError, SimResult};
use super::forces::net_force;
use super::params::Parameters;
use super::states::{Body, NVec2, System};

/// Kick then drift a single body without touching it.
///
/// Returns the new `(v, x)`, or a fault if either left the finite range
/// (a tiny mass under a finite force can still overflow the acceleration).
fn kick_drift(b: &Body, i: usize, force: NVec2, dt: f64) -> SimResult<(NVec2, NVec2)> {
    // v_n+1 = v_n + (F / m) * dt
    let v = b.v + force / b.m * dt;

    // x_n+1 = x_n + v_n+1 * dt
    let x = b.x + v * dt;

    if !(v.iter().all(|c| c.is_finite()) && x.iter().all(|c| c.is_finite())) {
        return Err(SimError::NonFiniteState { body: i });
    }
    Ok((v, x))
}

/// Write an advanced state back and record it in the trail
fn commit(b: &mut Body, v: NVec2, x: NVec2, distance: Option<f64>) {
    if distance.is_some() {
        b.distance_to_reference = distance;
    }
    b.v = v;
    b.x = x;
    b.trail.push(x);
}

/// Advance the system one step, mutating each body fully before the next.
///
/// This is the reference update order. A fault aborts the step right away,
/// leaving bodies before the faulting one advanced and the rest untouched.
/// The faulting body itself is never written.
pub fn sequential_euler(sys: &mut System, params: &Parameters, reference: Option<usize>) -> SimResult<()> {
    let dt = params.timestep;

    for i in 0..sys.bodies.len() {
        // Reads current state of every other body, including ones already
        // moved this step
        let (force, distance) = net_force(&sys.bodies, i, params.G, reference)?;

        let (v, x) = kick_drift(&sys.bodies[i], i, force, dt)?;
        commit(&mut sys.bodies[i], v, x, distance);
    }

    sys.t += dt;
    sys.steps += 1;
    trace!("sequential step {} done, t = {} s", sys.steps, sys.t);
    Ok(())
}

/// Advance the system one step from a single start-of-step snapshot.
///
/// All forces are computed before any body moves, so pair forces cancel
/// exactly and any fault leaves the whole system untouched.
pub fn simultaneous_euler(sys: &mut System, params: &Parameters, reference: Option<usize>) -> SimResult<()> {
    let n = sys.bodies.len();
    let dt = params.timestep;

    let mut advanced = Vec::with_capacity(n);
    for i in 0..n {
        let (force, distance) = net_force(&sys.bodies, i, params.G, reference)?;
        let (v, x) = kick_drift(&sys.bodies[i], i, force, dt)?;
        advanced.push((v, x, distance));
    }

    for (b, (v, x, distance)) in sys.bodies.iter_mut().zip(advanced) {
        commit(b, v, x, distance);
    }

    sys.t += dt;
    sys.steps += 1;
    trace!("simultaneous step {} done, t = {} s", sys.steps, sys.t);
    Ok(())
}

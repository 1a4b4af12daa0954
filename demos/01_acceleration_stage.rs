/// Electric Acceleration Stage Example
///
/// Samples the position of a singly charged ion accelerated along y by a
/// uniform electric field, then the velocity it reaches as a function of
/// distance travelled.

use ion_beam_engine::constants::{ATOMIC_MASS_KG, ELEMENTARY_CHARGE_C};
use ion_beam_engine::AcceleratedParticle;

fn main() {
    println!("=== Electric Acceleration Stage ===\n");

    // A 1 u ion carrying one elementary charge, starting at rest
    let ratio = ATOMIC_MASS_KG / ELEMENTARY_CHARGE_C;
    let ey = 1.0e3; // V/m
    let particle = AcceleratedParticle::new(ratio, 0.0);

    println!("Initial Parameters:");
    println!("  m/q: {:.4e} kg/C", ratio);
    println!("  Ey: {} V/m", ey);
    println!("  Initial velocity: {} m/s", particle.initial_velocity);
    println!();

    let samples = particle.sample_positions_over_time(ey, 0.0, 1.0e-5, 11, 0.0, 0.0);

    println!("Position over time:");
    println!("  Time (s)  |   Y (m)");
    println!("  ----------|----------");
    for (t, y) in samples.times.iter().zip(samples.ys.iter()) {
        println!("  {:8.1e} | {:8.4}", t, y);
    }
    println!();

    let final_y = *samples.ys.last().unwrap();
    let velocity = particle.sample_velocity_over_position(ey, 0.0, final_y, 11);

    println!("Velocity over position:");
    println!("   Y (m)    | Velocity (m/s)");
    println!("  ----------|---------------");
    for (y, v) in velocity.positions.iter().zip(velocity.velocities.iter()) {
        println!("  {:8.4} | {:12.4e}", y, v);
    }
}

/// Magnetic Deflection Example
///
/// Solves for the field magnitude that steers an ion onto a target point,
/// then samples the resulting arc to confirm the particle lands there.

use ion_beam_engine::DeflectedParticle;

fn main() {
    println!("=== Magnetic Deflection Stage ===\n");

    // Singly charged 1e-27 kg ion entering at 1 m/s
    let ratio = 1.0e-27 / 1.602e-19;
    let velocity = 1.0;
    let particle = DeflectedParticle::new(ratio, velocity);

    let (x_target, y_target) = (0.5, 0.5);

    println!("Initial Parameters:");
    println!("  m/q: {:.4e} kg/C", ratio);
    println!("  Entry velocity: {} m/s", velocity);
    println!("  Target: ({}, {}) m", x_target, y_target);
    println!();

    match particle.solve_field_for_target(x_target, y_target, None) {
        Ok(solution) => {
            println!("Solver Results:");
            println!("  Bz: {:.6e} T", solution.field);
            println!("  Iterations: {}", solution.iterations);
            println!("  Residual: {:.3e} m", solution.residual);
            println!("  Max reach in that field: {:.4} m", particle.max_reach(solution.field));
            println!();

            let series = particle.trajectory(solution.field, 0.0, x_target, 11);
            println!("Trajectory to the target:");
            println!("   X (m)   |   Y (m)");
            println!("  ---------|---------");
            for (x, y) in series.xs.iter().zip(series.ys.iter()) {
                println!("  {:7.3}  | {:7.4}", x, y);
            }

            let landed = particle.y_at_x(x_target, solution.field);
            println!();
            println!("Landed at y = {:.6} m (target {} m)", landed, y_target);
        }
        Err(err) => {
            eprintln!("Solve failed: {}", err);
        }
    }
}

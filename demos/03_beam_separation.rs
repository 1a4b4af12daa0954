/// Beam Separation Example
///
/// Sends three ion species with different mass/charge ratios through the
/// same deflecting field and renders the fanned-out trajectories to a PNG.

use ion_beam_engine::beam_trajectories;
use ion_beam_engine::plotting::render_beam;

fn main() {
    println!("=== Beam Separation ===\n");

    // Singly charged ions of 1, 2 and 3e-27 kg sharing the entry velocity
    let ratios = [
        1.0e-27 / 1.602e-19,
        2.0e-27 / 1.602e-19,
        3.0e-27 / 1.602e-19,
    ];
    let velocity = 1.0;
    let bz = 1.25e-8;
    let (x_min, x_max) = (0.0, 3.0);

    println!("Shared Parameters:");
    println!("  Entry velocity: {} m/s", velocity);
    println!("  Bz: {:.3e} T", bz);
    println!("  X range: [{}, {}] m", x_min, x_max);
    println!();

    let beam = beam_trajectories(&ratios, velocity, bz, x_min, x_max, 2000);

    for member in &beam {
        let finite = member.series.ys.iter().filter(|y| y.is_finite()).count();
        println!(
            "  m/q = {:>12}: {} of {} samples inside the reachable arc",
            member.label,
            finite,
            member.series.ys.len()
        );
    }
    println!();

    match render_beam(&beam, "beam_separation.png") {
        Ok(()) => println!("Wrote beam_separation.png"),
        Err(err) => eprintln!("Rendering failed: {}", err),
    }
}

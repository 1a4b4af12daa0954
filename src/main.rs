//! Command-line entry point for the ion beam engine

fn main() {
    println!("Ion Beam Engine v0.1.0");
    println!();
    println!("Closed-form trajectories for charged particles in uniform electric");
    println!("and magnetic fields (acceleration and deflection stages).");
    println!();
    println!("Use the ion-beam-cli binary for the full command-line interface:");
    println!();
    println!("  ion-beam-cli accelerate --ratio 1.04e-8 --ey 1000 --t-max 1e-5");
    println!("  ion-beam-cli solve-field --ratio 6.24e-9 --velocity 1.0 \\");
    println!("      --x-target 0.5 --y-target 0.5");
    println!();
    println!("To use as a Rust library:");
    println!("  Add to Cargo.toml: ion-beam-engine = \"0.1\"");
}

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::error::Error;

use ion_beam_engine::constants::DEFAULT_SAMPLE_POINTS;
use ion_beam_engine::{
    beam_trajectories, render_beam, AcceleratedParticle, DeflectedParticle, TimeSamples,
    TrajectorySeries, VelocitySamples,
};

#[derive(Parser)]
#[command(name = "ion-beam")]
#[command(version = "0.1.0")]
#[command(about = "Charged-particle trajectory calculator for uniform E and B fields", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample positions over time in the electric acceleration stage
    Accelerate {
        /// Mass/charge ratio (kg/C)
        #[arg(short = 'r', long)]
        ratio: f64,

        /// Initial velocity along y (m/s)
        #[arg(short = 'v', long, default_value = "0.0")]
        velocity: f64,

        /// Electric field along y (V/m)
        #[arg(long)]
        ey: f64,

        /// Electric field along x (V/m)
        #[arg(long, default_value = "0.0")]
        ex: f64,

        /// Electric field along z (V/m)
        #[arg(long, default_value = "0.0")]
        ez: f64,

        /// Start time (s)
        #[arg(long, default_value = "0.0")]
        t_min: f64,

        /// End time (s)
        #[arg(long)]
        t_max: f64,

        /// Number of sample points
        #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_POINTS)]
        points: usize,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Sample velocity against position in the acceleration stage
    Velocity {
        /// Mass/charge ratio (kg/C)
        #[arg(short = 'r', long)]
        ratio: f64,

        /// Initial velocity along y (m/s)
        #[arg(short = 'v', long, default_value = "0.0")]
        velocity: f64,

        /// Electric field along y (V/m)
        #[arg(long)]
        ey: f64,

        /// Lowest y position (m)
        #[arg(long, default_value = "0.0")]
        y_min: f64,

        /// Highest y position (m)
        #[arg(long)]
        y_max: f64,

        /// Number of sample points
        #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_POINTS)]
        points: usize,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Sample the circular-arc trajectory in the magnetic deflection stage
    Deflect {
        /// Mass/charge ratio (kg/C)
        #[arg(short = 'r', long)]
        ratio: f64,

        /// Entry velocity along x (m/s)
        #[arg(short = 'v', long)]
        velocity: f64,

        /// Magnetic field along z (T)
        #[arg(short = 'b', long)]
        bz: f64,

        /// Lowest x position (m)
        #[arg(long, default_value = "0.0")]
        x_min: f64,

        /// Highest x position (m)
        #[arg(long)]
        x_max: f64,

        /// Number of sample points
        #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_POINTS)]
        points: usize,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Solve for the field magnitude that lands the particle on a target
    SolveField {
        /// Mass/charge ratio (kg/C)
        #[arg(short = 'r', long)]
        ratio: f64,

        /// Entry velocity along x (m/s)
        #[arg(short = 'v', long)]
        velocity: f64,

        /// Target x position (m)
        #[arg(long)]
        x_target: f64,

        /// Target y position (m)
        #[arg(long)]
        y_target: f64,

        /// Starting guess for the field (T); defaults to the m/q ratio
        #[arg(long)]
        b0: Option<f64>,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Render a beam of mass/charge ratios through a shared field to a PNG
    Beam {
        /// Comma-separated mass/charge ratios (kg/C)
        #[arg(short = 'r', long)]
        ratios: String,

        /// Shared entry velocity along x (m/s)
        #[arg(short = 'v', long)]
        velocity: f64,

        /// Magnetic field along z (T)
        #[arg(short = 'b', long)]
        bz: f64,

        /// Lowest x position (m)
        #[arg(long, default_value = "0.0")]
        x_min: f64,

        /// Highest x position (m)
        #[arg(long)]
        x_max: f64,

        /// Number of sample points per trajectory
        #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_POINTS)]
        points: usize,

        /// Output PNG path
        #[arg(long, default_value = "beam.png")]
        out: String,
    },

    /// Display engine information
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
    Table,
}

#[derive(Debug, Serialize, Deserialize)]
struct PositionRow {
    time: f64,
    x: f64,
    y: f64,
    z: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct VelocityRow {
    y: f64,
    velocity: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct TrajectoryRow {
    x: f64,
    y: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct FieldSolutionReport {
    field: f64,
    iterations: usize,
    residual: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Accelerate {
            ratio,
            velocity,
            ey,
            ex,
            ez,
            t_min,
            t_max,
            points,
            output,
        } => {
            let particle = AcceleratedParticle::new(ratio, velocity);
            let samples = particle.sample_positions_over_time(ey, t_min, t_max, points, ex, ez);
            display_position_samples(&samples, output)?;
        }

        Commands::Velocity {
            ratio,
            velocity,
            ey,
            y_min,
            y_max,
            points,
            output,
        } => {
            let particle = AcceleratedParticle::new(ratio, velocity);
            let samples = particle.sample_velocity_over_position(ey, y_min, y_max, points);
            display_velocity_samples(&samples, output)?;
        }

        Commands::Deflect {
            ratio,
            velocity,
            bz,
            x_min,
            x_max,
            points,
            output,
        } => {
            let particle = DeflectedParticle::new(ratio, velocity);
            let series = particle.trajectory(bz, x_min, x_max, points);
            display_trajectory(&series, particle.max_reach(bz), output)?;
        }

        Commands::SolveField {
            ratio,
            velocity,
            x_target,
            y_target,
            b0,
            output,
        } => {
            let particle = DeflectedParticle::new(ratio, velocity);
            let solution = particle.solve_field_for_target(x_target, y_target, b0)?;
            let reached = particle.y_at_x(x_target, solution.field);
            display_field_solution(
                FieldSolutionReport {
                    field: solution.field,
                    iterations: solution.iterations,
                    residual: solution.residual,
                },
                x_target,
                y_target,
                reached,
                output,
            )?;
        }

        Commands::Beam {
            ratios,
            velocity,
            bz,
            x_min,
            x_max,
            points,
            out,
        } => {
            let parsed: Vec<f64> = ratios
                .split(',')
                .map(|part| part.trim().parse::<f64>())
                .collect::<Result<_, _>>()?;
            let beam = beam_trajectories(&parsed, velocity, bz, x_min, x_max, points);
            render_beam(&beam, &out)?;

            println!("Rendered {} trajectories to {}", beam.len(), out);
            for member in &beam {
                println!("  m/q = {}", member.label);
            }
        }

        Commands::Info => {
            println!("╔════════════════════════════════════════╗");
            println!("║        ION BEAM ENGINE v0.1.0          ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Closed-form charged-particle           ║");
            println!("║ kinematics in uniform fields.          ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Features:                              ║");
            println!("║ • Electric acceleration stage          ║");
            println!("║ • Magnetic circular-arc deflection     ║");
            println!("║ • Inverse field solver (Brent)         ║");
            println!("║ • Beam rendering with legend           ║");
            println!("║ • Multiple output formats              ║");
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn display_position_samples(
    samples: &TimeSamples,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let rows: Vec<PositionRow> = samples
        .times
        .iter()
        .zip(samples.xs.iter())
        .zip(samples.ys.iter())
        .zip(samples.zs.iter())
        .map(|(((&time, &x), &y), &z)| PositionRow { time, x, y, z })
        .collect();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }

        OutputFormat::Csv => {
            println!("time,x,y,z");
            for row in &rows {
                println!("{:e},{:e},{:e},{:e}", row.time, row.x, row.y, row.z);
            }
        }

        OutputFormat::Table => {
            println!("╔════════════════════════════════════════╗");
            println!("║       ACCELERATION STAGE RESULTS       ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Samples:           {:>8}            ║", rows.len());
            if let (Some(first), Some(last)) = (rows.first(), rows.last()) {
                println!("║ Time span:     {:>10.3e} s          ║", last.time - first.time);
                println!("║ Final y:       {:>10.3e} m          ║", last.y);
            }
            println!("╚════════════════════════════════════════╝");
            println!();
            print_position_rows(&rows);
        }
    }

    Ok(())
}

fn print_position_rows(rows: &[PositionRow]) {
    println!("┌────────────┬────────────┬────────────┬────────────┐");
    println!("│  Time (s)  │   X (m)    │   Y (m)    │   Z (m)    │");
    println!("├────────────┼────────────┼────────────┼────────────┤");

    let step = (rows.len() / 10).max(1);
    for (i, row) in rows.iter().enumerate() {
        if i % step == 0 || i == rows.len() - 1 {
            println!(
                "│ {:>10.3e} │ {:>10.3e} │ {:>10.3e} │ {:>10.3e} │",
                row.time, row.x, row.y, row.z
            );
        }
    }
    println!("└────────────┴────────────┴────────────┴────────────┘");
}

fn display_velocity_samples(
    samples: &VelocitySamples,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let rows: Vec<VelocityRow> = samples
        .positions
        .iter()
        .zip(samples.velocities.iter())
        .map(|(&y, &velocity)| VelocityRow { y, velocity })
        .collect();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }

        OutputFormat::Csv => {
            println!("y,velocity");
            for row in &rows {
                println!("{:e},{:e}", row.y, row.velocity);
            }
        }

        OutputFormat::Table => {
            println!("VELOCITY OVER POSITION ({} samples)", rows.len());
            println!("┌────────────┬──────────────┐");
            println!("│   Y (m)    │  Vel (m/s)   │");
            println!("├────────────┼──────────────┤");

            let step = (rows.len() / 10).max(1);
            for (i, row) in rows.iter().enumerate() {
                if i % step == 0 || i == rows.len() - 1 {
                    println!("│ {:>10.3e} │ {:>12.5e} │", row.y, row.velocity);
                }
            }
            println!("└────────────┴──────────────┘");
        }
    }

    Ok(())
}

fn display_trajectory(
    series: &TrajectorySeries,
    max_reach: f64,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let rows: Vec<TrajectoryRow> = series
        .xs
        .iter()
        .zip(series.ys.iter())
        .map(|(&x, &y)| TrajectoryRow { x, y })
        .collect();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }

        OutputFormat::Csv => {
            println!("x,y");
            for row in &rows {
                println!("{:e},{:e}", row.x, row.y);
            }
        }

        OutputFormat::Table => {
            let unreachable = rows.iter().filter(|row| row.y.is_nan()).count();
            println!("╔════════════════════════════════════════╗");
            println!("║       DEFLECTION STAGE RESULTS         ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Samples:           {:>8}            ║", rows.len());
            println!("║ Max reach:     {:>10.3e} m          ║", max_reach);
            println!("║ Past the arc:      {:>8}            ║", unreachable);
            println!("╚════════════════════════════════════════╝");
            println!();
            println!("┌────────────┬────────────┐");
            println!("│   X (m)    │   Y (m)    │");
            println!("├────────────┼────────────┤");

            let step = (rows.len() / 10).max(1);
            for (i, row) in rows.iter().enumerate() {
                if i % step == 0 || i == rows.len() - 1 {
                    println!("│ {:>10.3e} │ {:>10.3e} │", row.x, row.y);
                }
            }
            println!("└────────────┴────────────┘");
        }
    }

    Ok(())
}

fn display_field_solution(
    report: FieldSolutionReport,
    x_target: f64,
    y_target: f64,
    y_reached: f64,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        OutputFormat::Csv => {
            println!("field,iterations,residual");
            println!("{:e},{},{:e}", report.field, report.iterations, report.residual);
        }

        OutputFormat::Table => {
            println!("╔════════════════════════════════════════╗");
            println!("║         FIELD SOLVER RESULTS           ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Target x:      {:>10.3e} m          ║", x_target);
            println!("║ Target y:      {:>10.3e} m          ║", y_target);
            println!("║ Field Bz:      {:>10.4e} T          ║", report.field);
            println!("║ Iterations:        {:>8}            ║", report.iterations);
            println!("║ Residual:      {:>10.3e} m          ║", report.residual);
            println!("║ Reached y:     {:>10.3e} m          ║", y_reached);
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

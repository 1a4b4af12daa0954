//! # Ion Beam Engine
//!
//! Closed-form kinematics of charged particles in uniform electric and magnetic fields:
//! the acceleration and deflection stages of a simplified mass-spectrometer beamline,
//! with an inverse solver for the deflecting field magnitude.

// Re-export the main types and functions
pub use acceleration::{AcceleratedParticle, TimeSamples, VelocitySamples};
pub use beam::{beam_trajectories, BeamTrajectory};
pub use deflection::{DeflectedParticle, FieldSolution, TrajectorySeries};
pub use error::FieldSolveError;
pub use plotting::render_beam;
pub use root_finding::{bracket_around, brent_root_find, RootResult};

// Module declarations
pub mod acceleration;
pub mod beam;
pub mod constants;
pub mod deflection;
pub mod error;
pub mod plotting;
pub mod root_finding;
pub mod sampling;

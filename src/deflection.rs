//! Magnetic deflection stage: circular-arc motion in a uniform
//! perpendicular field, and the inverse solve for the field magnitude that
//! lands a particle on a target.

use crate::constants::{ROOT_FINDING_MAX_ITER, ROOT_FINDING_TOLERANCE};
use crate::error::{FieldSolveError, Result};
use crate::root_finding::{bracket_around, brent_root_find};
use crate::sampling::{linspace, map_samples};

/// Charged particle deflected along a circular arc by a uniform magnetic
/// field perpendicular to its entry velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeflectedParticle {
    /// Mass (kg) / charge (C) of the particle.
    pub mass_to_charge_ratio: f64,
    /// Entry speed along x (m/s). Nonzero: it scales the gyroradius and
    /// divides the arccos argument.
    pub initial_velocity: f64,
}

/// Trajectory samples, x and y in lockstep order.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectorySeries {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

/// Converged output of the inverse deflection solve.
#[derive(Debug, Clone, Copy)]
pub struct FieldSolution {
    /// Field magnitude steering the particle onto the target (T).
    pub field: f64,
    /// Root-finder iterations spent.
    pub iterations: usize,
    /// |y_target - y_at_x(x_target, field)| at the returned field (m).
    pub residual: f64,
}

impl DeflectedParticle {
    pub fn new(mass_to_charge_ratio: f64, initial_velocity: f64) -> Self {
        Self {
            mass_to_charge_ratio,
            initial_velocity,
        }
    }

    /// Height of the arc at horizontal position `x` (m) in field `bz` (T).
    ///
    /// With gyroradius `R = v0 * (m/q) / Bz` the closed form is
    /// `y = R * sin(arccos(1 - x / R))`. An arccos argument outside [-1, 1]
    /// means the particle would have to travel past the arc's maximum x
    /// extent; the result is NaN, never an extrapolated value.
    pub fn y_at_x(&self, x: f64, bz: f64) -> f64 {
        let radius_term = self.mass_to_charge_ratio / bz;
        let radius = self.initial_velocity * radius_term;
        radius * (1.0 - x / radius).acos().sin()
    }

    /// The largest x the arc reaches in field `bz`: the full gyrodiameter
    /// `2 * R`. [`y_at_x`](Self::y_at_x) is NaN beyond it.
    pub fn max_reach(&self, bz: f64) -> f64 {
        2.0 * self.initial_velocity * self.mass_to_charge_ratio / bz
    }

    /// Sample the arc at `n_points` evenly spaced x values over
    /// `[x_min, x_max]`, endpoints inclusive.
    pub fn trajectory(&self, bz: f64, x_min: f64, x_max: f64, n_points: usize) -> TrajectorySeries {
        let xs = linspace(x_min, x_max, n_points);
        let ys = map_samples(&xs, |x| self.y_at_x(x, bz));
        TrajectorySeries { xs, ys }
    }

    /// Solve for the field magnitude that lands the particle on
    /// `(x_target, y_target)`.
    ///
    /// Finds a root of the residual `f(B) = y_target - y_at_x(x_target, B)`
    /// by bracketing around `b0` and polishing with Brent's method. `b0`
    /// defaults to `mass_to_charge_ratio` — a historically stable seed, not
    /// a physically derived one; pass an explicit guess when the expected
    /// field is far from that scale. The first root found is returned;
    /// global uniqueness is not checked.
    ///
    /// The convergence status is checked rather than trusted: a run that
    /// exhausts its iteration budget surfaces
    /// [`FieldSolveError::NonConvergence`] instead of the last iterate, and
    /// a target past the reachable arc surfaces
    /// [`FieldSolveError::Domain`].
    pub fn solve_field_for_target(
        &self,
        x_target: f64,
        y_target: f64,
        b0: Option<f64>,
    ) -> Result<FieldSolution> {
        let residual = |b: f64| y_target - self.y_at_x(x_target, b);
        let seed = b0.unwrap_or(self.mass_to_charge_ratio);

        let (lower, upper) = bracket_around(&residual, seed)?;
        let width = (upper - lower).abs();
        let tolerance = if width > f64::EPSILON {
            ROOT_FINDING_TOLERANCE * width
        } else {
            ROOT_FINDING_TOLERANCE
        };

        let result = brent_root_find(&residual, lower, upper, tolerance, ROOT_FINDING_MAX_ITER)?;
        if !result.success {
            return Err(FieldSolveError::NonConvergence {
                iterations: result.iterations_used,
                final_error: result.final_error,
            });
        }

        Ok(FieldSolution {
            field: result.root,
            iterations: result.iterations_used,
            residual: result.final_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_y_at_entry_is_zero() {
        let particle = DeflectedParticle::new(1.0, 1.0);
        assert_eq!(particle.y_at_x(0.0, 1.0), 0.0);
    }

    #[test]
    fn test_trajectory_monotone_up_to_gyroradius() {
        // R = v0 * m/q / Bz = 1; y rises from 0 to R over [0, R]
        let particle = DeflectedParticle::new(1.0, 1.0);
        let series = particle.trajectory(1.0, 0.0, 1.0, 101);

        let mut previous = f64::NEG_INFINITY;
        for &y in &series.ys {
            assert!(y.is_finite());
            assert!(y >= previous);
            previous = y;
        }
        assert!((series.ys[100] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_y_matches_circle_equation() {
        // The arc is the circle (x - R)^2 + y^2 = R^2, i.e. y = sqrt(x(2R - x))
        let particle = DeflectedParticle::new(2.0, 3.0);
        let bz = 1.5;
        let radius = particle.initial_velocity * particle.mass_to_charge_ratio / bz;
        for x in [0.1, 1.0, radius, 1.9 * radius] {
            let expected = (x * (2.0 * radius - x)).sqrt();
            assert!((particle.y_at_x(x, bz) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_y_past_reach_is_nan() {
        let particle = DeflectedParticle::new(1.0, 1.0);
        let reach = particle.max_reach(1.0);
        assert_eq!(reach, 2.0);
        assert!(particle.y_at_x(reach + 0.5, 1.0).is_nan());
    }

    #[test]
    fn test_trajectory_single_point() {
        let particle = DeflectedParticle::new(1.0, 1.0);
        let series = particle.trajectory(1.0, 0.25, 8.0, 1);

        assert_eq!(series.xs, vec![0.25]);
        assert_eq!(series.ys, vec![particle.y_at_x(0.25, 1.0)]);
    }

    #[test]
    fn test_solve_field_round_trip_with_known_seed() {
        let particle = DeflectedParticle::new(1.0, 1.0);
        let b_known = 0.8;
        let x_target = 0.5;
        let y_target = particle.y_at_x(x_target, b_known);

        let solution = particle
            .solve_field_for_target(x_target, y_target, Some(b_known))
            .unwrap();
        let y_reached = particle.y_at_x(x_target, solution.field);
        assert!((y_reached - y_target).abs() <= 1e-6 * y_target.abs());
    }

    #[test]
    fn test_solve_field_round_trip_with_default_seed() {
        let particle = DeflectedParticle::new(1.0, 1.0);
        let b_known = 0.8;
        let x_target = 0.5;
        let y_target = particle.y_at_x(x_target, b_known);

        let solution = particle
            .solve_field_for_target(x_target, y_target, None)
            .unwrap();
        let y_reached = particle.y_at_x(x_target, solution.field);
        assert!((y_reached - y_target).abs() <= 1e-6 * y_target.abs());
    }

    #[test]
    fn test_solve_field_realistic_ion_scale() {
        // Singly charged ~1e-27 kg ion; the solved field is nanotesla-scale
        let particle = DeflectedParticle::new(1e-27 / 1.602e-19, 1.0);
        let x_target = 0.5;
        let y_target = 0.5;
        // Geometry: B = 2 * v0 * (m/q) * x / (x^2 + y^2)
        let k = particle.initial_velocity * particle.mass_to_charge_ratio;
        let b_expected = 2.0 * k * x_target / (x_target * x_target + y_target * y_target);

        let solution = particle
            .solve_field_for_target(x_target, y_target, None)
            .unwrap();
        assert!((solution.field - b_expected).abs() <= 1e-6 * b_expected);
        let y_reached = particle.y_at_x(x_target, solution.field);
        assert!((y_reached - y_target).abs() <= 1e-6 * y_target);
    }

    #[test]
    fn test_solve_field_unreachable_at_seed_is_domain_error() {
        // x_target = 3 is past the reachable arc at the default seed (R = 1)
        let particle = DeflectedParticle::new(1.0, 1.0);
        let result = particle.solve_field_for_target(3.0, 0.5, None);
        assert!(matches!(result, Err(FieldSolveError::Domain { .. })));
    }

    #[test]
    fn test_solve_field_errors_are_distinct() {
        let particle = DeflectedParticle::new(1.0, 1.0);
        let domain = particle
            .solve_field_for_target(3.0, 0.5, None)
            .unwrap_err();
        assert!(domain.to_string().contains("reachable"));
        assert!(!domain.to_string().contains("did not converge"));
    }
}

//! Electric acceleration stage: uniform-field kinematics of a charged
//! particle starting at the origin.

use nalgebra::Vector3;

use crate::sampling::{linspace, map_samples};

/// Charged particle accelerated by a uniform electric field.
///
/// The particle starts at the origin with `initial_velocity` directed along
/// the field axis (y). Value object: two scalars and nothing else, so equal
/// fields mean interchangeable behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcceleratedParticle {
    /// Mass (kg) / charge (C) of the particle. A zero ratio divides every
    /// axis formula by zero and propagates non-finite values.
    pub mass_to_charge_ratio: f64,
    /// Initial velocity along y (m/s). May be zero.
    pub initial_velocity: f64,
}

/// Position samples over a time range, one slice per axis in lockstep order.
#[derive(Debug, Clone)]
pub struct TimeSamples {
    pub times: Vec<f64>,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub zs: Vec<f64>,
}

/// Velocity samples over a y-position range.
#[derive(Debug, Clone)]
pub struct VelocitySamples {
    pub positions: Vec<f64>,
    pub velocities: Vec<f64>,
}

impl AcceleratedParticle {
    pub fn new(mass_to_charge_ratio: f64, initial_velocity: f64) -> Self {
        Self {
            mass_to_charge_ratio,
            initial_velocity,
        }
    }

    /// Position after time `t` (s) under constant field components (V/m).
    ///
    /// Each axis follows `E * t^2 / (2 * m/q)`; the y axis carries the
    /// initial-drift offset on top. Negative `t` is valid: position depends
    /// on `t^2`, so the motion is symmetric in time.
    pub fn position_at_time(&self, t: f64, ex: f64, ey: f64, ez: f64) -> Vector3<f64> {
        let spread = t * t * 0.5 / self.mass_to_charge_ratio;
        Vector3::new(
            ex * spread,
            ey * spread + self.initial_velocity,
            ez * spread,
        )
    }

    /// Elementwise [`position_at_time`](Self::position_at_time) over an
    /// ordered time sequence; output length matches input length.
    pub fn positions_at_times(
        &self,
        times: &[f64],
        ex: f64,
        ey: f64,
        ez: f64,
    ) -> Vec<Vector3<f64>> {
        map_samples(times, |t| self.position_at_time(t, ex, ey, ez))
    }

    /// Speed along y as a function of the y position, inverting the
    /// constant-acceleration relation:
    /// `v = sqrt(2 * Ey * (y - v0) / (m/q)) + v0`.
    ///
    /// A negative radicand (position unreachable under this field)
    /// propagates NaN per real-valued sqrt semantics. The value is never
    /// clamped.
    pub fn velocity_from_position(&self, y_pos: f64, ey: f64) -> f64 {
        (2.0 * ey * (y_pos - self.initial_velocity) / self.mass_to_charge_ratio).sqrt()
            + self.initial_velocity
    }

    /// Sample positions at `n_points` evenly spaced times in
    /// `[t_min, t_max]`, endpoints inclusive.
    ///
    /// `ex` and `ez` are usually zero: the acceleration stage is aligned
    /// with y. A single point or a zero-length time interval degenerate the
    /// sampling, not the formulas.
    pub fn sample_positions_over_time(
        &self,
        ey: f64,
        t_min: f64,
        t_max: f64,
        n_points: usize,
        ex: f64,
        ez: f64,
    ) -> TimeSamples {
        let times = linspace(t_min, t_max, n_points);
        let positions = self.positions_at_times(&times, ex, ey, ez);
        let xs = positions.iter().map(|p| p.x).collect();
        let ys = positions.iter().map(|p| p.y).collect();
        let zs = positions.iter().map(|p| p.z).collect();
        TimeSamples { times, xs, ys, zs }
    }

    /// Sample [`velocity_from_position`](Self::velocity_from_position) at
    /// `n_points` evenly spaced y positions in `[y_min, y_max]`.
    pub fn sample_velocity_over_position(
        &self,
        ey: f64,
        y_min: f64,
        y_max: f64,
        n_points: usize,
    ) -> VelocitySamples {
        let positions = linspace(y_min, y_max, n_points);
        let velocities = map_samples(&positions, |y| self.velocity_from_position(y, ey));
        VelocitySamples {
            positions,
            velocities,
        }
    }
}

//! Error types for the ion beam engine.
//!
//! Formula-level domain problems (negative sqrt radicand, out-of-range
//! arccos argument, division by a zero field or ratio) are not errors: they
//! propagate as NaN, matching real-valued IEEE semantics. The variants here
//! cover the inverse field solver only, where "no physical solution" and
//! "solver gave up" must stay distinguishable.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldSolveError {
    /// The deflection residual is not finite at this field value: the
    /// target lies past the arc's maximum x extent for the fields probed.
    #[error("residual is not finite at Bz = {field:e} T: target outside the reachable arc")]
    Domain { field: f64 },

    /// No sign change of the residual was found near the starting guess.
    #[error("unable to bracket a root near Bz = {near:e} T; try a different starting guess")]
    BracketingFailed { near: f64 },

    /// The bracketed iteration hit its cap with the residual still above
    /// tolerance.
    #[error("root finding did not converge after {iterations} iterations (residual {final_error:e})")]
    NonConvergence { iterations: usize, final_error: f64 },
}

pub type Result<T> = std::result::Result<T, FieldSolveError>;

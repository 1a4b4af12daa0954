//! Scalar root finding for the inverse deflection problem.
//!
//! Brent's method over a sign-changing bracket, plus a bracket-expansion
//! search that grows an interval around an initial guess until the residual
//! changes sign. Non-finite residuals mark the geometric domain edge and
//! shrink the probe back toward the guess instead of expanding past it.

use crate::constants::MAX_BRACKET_ATTEMPTS;
use crate::error::{FieldSolveError, Result};

/// Outcome of a bracketed scalar root search.
#[derive(Debug, Clone)]
pub struct RootResult {
    pub root: f64,
    pub iterations_used: usize,
    pub final_error: f64,
    pub success: bool,
}

/// Brent's method for root finding.
///
/// Combines inverse quadratic interpolation, secant steps and bisection;
/// falls back to bisection whenever an interpolation denominator degenerates.
/// `tolerance` bounds both the accepted residual and (scaled) the bracket
/// width at exit. Hitting `max_iterations` returns the last iterate with
/// `success` reflecting a relaxed residual check, so callers can decide how
/// to surface the non-convergence.
pub fn brent_root_find<F>(
    f: F,
    mut a: f64,
    mut b: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<RootResult>
where
    F: Fn(f64) -> f64,
{
    let mut fa = f(a);
    let mut fb = f(b);

    if !fa.is_finite() {
        return Err(FieldSolveError::Domain { field: a });
    }
    if !fb.is_finite() {
        return Err(FieldSolveError::Domain { field: b });
    }
    if fa * fb > 0.0 {
        return Err(FieldSolveError::BracketingFailed {
            near: 0.5 * (a + b),
        });
    }

    // Keep |f(a)| >= |f(b)| so b stays the better iterate
    if fa.abs() < fb.abs() {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut fa, &mut fb);
    }

    let mut c = a;
    let mut fc = fa;
    let mut d = b - a;
    let mut e = d;
    let mut iterations = 0;

    while iterations < max_iterations {
        iterations += 1;

        if fb.abs() < tolerance {
            return Ok(RootResult {
                root: b,
                iterations_used: iterations,
                final_error: fb.abs(),
                success: true,
            });
        }

        if fa.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tolerance_scaled = 2.0 * f64::EPSILON * b.abs() + 0.5 * tolerance;
        let m = 0.5 * (c - b);

        if m.abs() <= tolerance_scaled {
            return Ok(RootResult {
                root: b,
                iterations_used: iterations,
                final_error: fb.abs(),
                success: true,
            });
        }

        if e.abs() >= tolerance_scaled && fc.abs() > fb.abs() {
            if fc.abs() < f64::EPSILON || fa.abs() < f64::EPSILON {
                // Interpolation denominators degenerate; bisect
                d = m;
                e = m;
            } else {
                let s = fb / fc;
                let mut p;
                let mut q;

                if (a - c).abs() < f64::EPSILON {
                    // Secant step
                    p = 2.0 * m * s;
                    q = 1.0 - s;
                } else {
                    // Inverse quadratic interpolation
                    q = fc / fa;
                    let r = fb / fa;
                    p = s * (2.0 * m * q * (q - r) - (b - a) * (r - 1.0));
                    q = (q - 1.0) * (r - 1.0) * (s - 1.0);
                }

                if p > 0.0 {
                    q = -q;
                } else {
                    p = -p;
                }

                let prev_step = e;
                e = d;

                // Accept the interpolated step only while it stays inside
                // the bracket and keeps shrinking
                if q.abs() > f64::EPSILON
                    && 2.0 * p < 3.0 * m * q - (tolerance_scaled * q).abs()
                    && p < (0.5 * prev_step * q).abs()
                {
                    d = p / q;
                } else {
                    d = m;
                    e = d;
                }
            }
        } else {
            d = m;
            e = d;
        }

        a = b;
        fa = fb;

        if d.abs() > tolerance_scaled {
            b += d;
        } else if m > 0.0 {
            b += tolerance_scaled;
        } else {
            b -= tolerance_scaled;
        }

        fb = f(b);
        if !fb.is_finite() {
            return Err(FieldSolveError::Domain { field: b });
        }

        if fc * fb > 0.0 {
            c = a;
            fc = fa;
            e = b - a;
            d = e;
        }
    }

    Ok(RootResult {
        root: b,
        iterations_used: iterations,
        final_error: fb.abs(),
        success: fb.abs() < tolerance * 10.0, // Relaxed criterion at the cap
    })
}

/// Expand an interval around `guess` until `f` changes sign across it.
///
/// Probes `[0.5 * guess, 1.5 * guess]` first, then widens geometrically.
/// A non-finite residual at a probe point shrinks that endpoint halfway
/// back toward the guess, so the search creeps up to a domain edge without
/// crossing it. The guess itself must yield a finite residual; a non-finite
/// one means the target is unreachable at that field and surfaces as
/// [`FieldSolveError::Domain`].
pub fn bracket_around<F>(f: F, guess: f64) -> Result<(f64, f64)>
where
    F: Fn(f64) -> f64,
{
    if guess == 0.0 || !guess.is_finite() {
        return Err(FieldSolveError::BracketingFailed { near: guess });
    }

    let f_guess = f(guess);
    if !f_guess.is_finite() {
        return Err(FieldSolveError::Domain { field: guess });
    }
    if f_guess == 0.0 {
        return Ok((guess, guess));
    }

    let mut lo = 0.5 * guess;
    let mut hi = 1.5 * guess;

    for _ in 0..MAX_BRACKET_ATTEMPTS {
        let f_lo = f(lo);
        if !f_lo.is_finite() {
            lo = 0.5 * (lo + guess);
            continue;
        }
        let f_hi = f(hi);
        if !f_hi.is_finite() {
            hi = 0.5 * (hi + guess);
            continue;
        }

        if f_lo * f_guess <= 0.0 {
            return Ok((lo, guess));
        }
        if f_guess * f_hi <= 0.0 {
            return Ok((guess, hi));
        }
        if f_lo * f_hi <= 0.0 {
            return Ok((lo, hi));
        }

        lo *= 0.5;
        hi *= 2.0;
    }

    Err(FieldSolveError::BracketingFailed { near: guess })
}

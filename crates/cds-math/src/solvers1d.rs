//! Bracketed 1-D root finders.
//!
//! Brent's method is the workhorse of the curve bootstrappers and the
//! upfront-to-spread inversion; bisection is the unconditionally-robust
//! alternative. Both require a sign change on the initial bracket and
//! converge when either the interval or the residual drops below the
//! requested accuracy.

use cds_core::{
    errors::{Error, Result},
    Real,
};

const ITERATION_CAP: u32 = 100;
const FALLBACK_ACCURACY: Real = 1.0e-12;

// ── Brent ────────────────────────────────────────────────────────────────────

/// Brent's method for finding a root of `f(x)` in `[x_min, x_max]`.
///
/// Each iteration proposes a candidate by inverse quadratic interpolation
/// through the three most recent residuals (secant when two of them
/// coincide), then accepts it only if it lands well inside the bracket and
/// keeps at least halving the step; otherwise the iteration bisects.
/// Convergence is superlinear on smooth functions and never worse than
/// bisection.
pub fn brent<F>(mut f: F, x_min: Real, x_max: Real, accuracy: Real) -> Result<Real>
where
    F: FnMut(Real) -> Real,
{
    let tol = if accuracy > 0.0 {
        accuracy
    } else {
        FALLBACK_ACCURACY
    };

    // `best` carries the smaller residual, `far` the opposite-signed one;
    // together they always bracket the root.
    let mut far = x_min;
    let mut best = x_max;
    let mut f_far = f(far);
    let mut f_best = f(best);

    if !f_far.is_finite() || !f_best.is_finite() {
        return Err(Error::Solver(format!(
            "objective is not finite on the bracket [{x_min}, {x_max}]"
        )));
    }
    if f_far == 0.0 {
        return Ok(far);
    }
    if f_best == 0.0 {
        return Ok(best);
    }
    if f_far.signum() == f_best.signum() {
        return Err(Error::Solver(format!(
            "no sign change on [{x_min}, {x_max}] (f = {f_far:.3e} and {f_best:.3e})"
        )));
    }
    if f_far.abs() < f_best.abs() {
        std::mem::swap(&mut far, &mut best);
        std::mem::swap(&mut f_far, &mut f_best);
    }

    // The two previous estimates: `prior` seeds the three-point
    // interpolation, `relic` measures whether the step before last still
    // shrank fast enough to trust interpolating again.
    let mut prior = far;
    let mut f_prior = f_far;
    let mut relic = far;
    let mut bisected = true;

    for _ in 0..ITERATION_CAP {
        if f_best.abs() <= tol {
            return Ok(best);
        }
        let delta = 2.0 * f64::EPSILON * best.abs() + 0.5 * tol;
        if (far - best).abs() <= delta {
            return Ok(best);
        }

        // Candidate step. The bracket invariant keeps f_far and f_best of
        // opposite sign (hence distinct), so the secant denominator is
        // safe; inverse quadratic additionally needs `prior` distinct in
        // residual from both.
        let mut candidate = if f_prior != f_far && f_prior != f_best {
            far * f_best * f_prior / ((f_far - f_best) * (f_far - f_prior))
                + best * f_far * f_prior / ((f_best - f_far) * (f_best - f_prior))
                + prior * f_far * f_best / ((f_prior - f_far) * (f_prior - f_best))
        } else {
            best - f_best * (best - far) / (f_best - f_far)
        };

        // Validate: the candidate must fall in the inner three quarters of
        // the bracket, and the steps must keep halving; otherwise bisect.
        let edge = (3.0 * far + best) / 4.0;
        let inside = candidate > edge.min(best) && candidate < edge.max(best);
        let reference = if bisected { best - prior } else { prior - relic };
        let shrinking =
            (candidate - best).abs() < 0.5 * reference.abs() && reference.abs() > delta;
        bisected = !(inside && shrinking);
        if bisected {
            candidate = 0.5 * (far + best);
        }

        let f_candidate = f(candidate);

        relic = prior;
        prior = best;
        f_prior = f_best;

        // Keep the sign change between `far` and `best`.
        if f_candidate.signum() == f_far.signum() {
            far = candidate;
            f_far = f_candidate;
        } else {
            best = candidate;
            f_best = f_candidate;
        }
        if f_far.abs() < f_best.abs() {
            std::mem::swap(&mut far, &mut best);
            std::mem::swap(&mut f_far, &mut f_best);
        }
    }
    Err(Error::Solver("Brent: maximum iterations reached".into()))
}

// ── Bisection ────────────────────────────────────────────────────────────────

/// Simple bisection. Linear convergence, unconditionally robust on a
/// bracketing interval.
pub fn bisection<F>(mut f: F, x_min: Real, x_max: Real, accuracy: Real) -> Result<Real>
where
    F: FnMut(Real) -> Real,
{
    let tol = if accuracy > 0.0 {
        accuracy
    } else {
        FALLBACK_ACCURACY
    };
    let mut lo = x_min;
    let mut hi = x_max;
    let f_lo = f(lo);
    let f_hi = f(hi);

    if f_lo == 0.0 {
        return Ok(lo);
    }
    if f_hi == 0.0 {
        return Ok(hi);
    }
    if f_lo.signum() == f_hi.signum() {
        return Err(Error::Solver(format!(
            "no sign change on [{x_min}, {x_max}] (f = {f_lo:.3e} and {f_hi:.3e})"
        )));
    }

    // Orient once: does the residual rise from `lo` to `hi`?
    let rising = f_lo < 0.0;
    for _ in 0..ITERATION_CAP {
        let mid = 0.5 * (lo + hi);
        let f_mid = f(mid);
        if f_mid == 0.0 || 0.5 * (hi - lo).abs() < tol {
            return Ok(mid);
        }
        if (f_mid < 0.0) == rising {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Err(Error::Solver("bisection: maximum iterations reached".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brent_sqrt2() {
        let root = brent(|x| x * x - 2.0, 0.0, 2.0, 1e-14).unwrap();
        assert!((root - 2.0_f64.sqrt()).abs() < 1e-12, "got {root}");
    }

    #[test]
    fn brent_exponential_root() {
        // The shape of a credit bootstrap residual: monotone, exponential.
        let f = |h: f64| 1.0 - (-3.0 * h).exp() - 0.05;
        let root = brent(f, 1e-8, 10.0, 1e-14).unwrap();
        assert!(f(root).abs() < 1e-13, "residual {}", f(root));
    }

    #[test]
    fn brent_steep_and_flat_mix() {
        // Nearly flat on the left, steep near the root: interpolation alone
        // would overshoot, so the bisection safeguard must engage.
        let f = |x: f64| (10.0 * (x - 0.9)).tanh() + x * 1e-3;
        let root = brent(f, 0.0, 1.0, 1e-13).unwrap();
        assert!(f(root).abs() < 1e-12, "residual {}", f(root));
    }

    #[test]
    fn brent_requires_bracket() {
        assert!(matches!(
            brent(|x| x * x + 1.0, -1.0, 1.0, 1e-12),
            Err(Error::Solver(_))
        ));
    }

    #[test]
    fn bisection_sqrt2() {
        let root = bisection(|x| x * x - 2.0, 0.0, 2.0, 1e-12).unwrap();
        assert!((root - 2.0_f64.sqrt()).abs() < 1e-10, "got {root}");
    }

    #[test]
    fn bisection_decreasing_function() {
        let root = bisection(|x| 1.0 - x, 0.0, 3.0, 1e-12).unwrap();
        assert!((root - 1.0).abs() < 1e-10, "got {root}");
    }

    #[test]
    fn bisection_requires_bracket() {
        assert!(bisection(|x| x + 10.0, 0.0, 1.0, 1e-12).is_err());
    }

    #[test]
    fn endpoint_roots_returned_directly() {
        assert_eq!(brent(|x| x, 0.0, 1.0, 1e-12).unwrap(), 0.0);
        assert_eq!(bisection(|x| x - 1.0, 0.0, 1.0, 1e-12).unwrap(), 1.0);
    }
}

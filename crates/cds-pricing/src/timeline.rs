//! Integration grid shared by the leg valuations.

use cds_core::Time;
use cds_curves::{CreditCurve, ZeroCurve};

/// Knots closer than this are treated as coincident.
const KNOT_EPS: Time = 1.0e-10;

/// Build the integration grid over `[t0, t1]`: both endpoints plus every
/// knot of either curve strictly inside. Between consecutive grid points
/// the forward hazard and forward discount rates are both constant, which
/// is what the closed-form sub-interval integrals require.
pub(crate) fn integration_grid(
    zero: &ZeroCurve,
    credit: &CreditCurve,
    t0: Time,
    t1: Time,
) -> Vec<Time> {
    debug_assert!(t0 < t1);
    let mut grid = Vec::with_capacity(zero.times().len() + credit.times().len() + 2);
    grid.push(t0);
    grid.extend(
        zero.times()
            .iter()
            .chain(credit.times().iter())
            .copied()
            .filter(|&t| t > t0 + KNOT_EPS && t < t1 - KNOT_EPS),
    );
    grid.push(t1);
    grid.sort_by(|a, b| a.partial_cmp(b).expect("grid times are finite"));
    grid.dedup_by(|a, b| (*a - *b).abs() <= KNOT_EPS);
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use cds_time::Date;

    fn curves() -> (ZeroCurve, CreditCurve) {
        let base = Date::from_ymd(2022, 8, 31).unwrap();
        let zero = ZeroCurve::new(base, vec![0.5, 1.0, 2.0], vec![0.01, 0.012, 0.015]).unwrap();
        let credit = CreditCurve::new(base, vec![0.75, 2.0, 5.0], vec![0.02, 0.022, 0.025]).unwrap();
        (zero, credit)
    }

    #[test]
    fn grid_contains_interior_knots_once() {
        let (zero, credit) = curves();
        let grid = integration_grid(&zero, &credit, 0.25, 3.0);
        // Interior knots: 0.5, 0.75, 1.0, 2.0 (shared knot 2.0 deduplicated).
        assert_eq!(grid, vec![0.25, 0.5, 0.75, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn grid_is_sorted_and_bounded() {
        let (zero, credit) = curves();
        let grid = integration_grid(&zero, &credit, 0.6, 0.9);
        assert_eq!(grid.first(), Some(&0.6));
        assert_eq!(grid.last(), Some(&0.9));
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn knots_on_endpoints_not_duplicated() {
        let (zero, credit) = curves();
        let grid = integration_grid(&zero, &credit, 0.5, 2.0);
        assert_eq!(grid, vec![0.5, 0.75, 1.0, 2.0]);
    }
}

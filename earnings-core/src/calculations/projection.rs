//! Projected partner earnings.
//!
//! | Figure            | Formula                                            |
//! |-------------------|----------------------------------------------------|
//! | future earnings   | pending × avg investment × rate / 100              |
//! | min projection    | pending × avg investment × 0.2                     |
//! | max projection    | (pending × 1.5) × avg investment × rate / 100      |
//!
//! # Example
//!
//! ```
//! use earnings_core::Inputs;
//! use earnings_core::calculations::project;
//!
//! let inputs = Inputs {
//!     pending_users: 10,
//!     avg_investment: 400.0,
//!     commission_rate: 20,
//! };
//!
//! let projection = project(&inputs);
//!
//! assert_eq!(projection.future_earnings, 800.0);
//! assert_eq!(projection.min_projection, 800.0);
//! assert_eq!(projection.max_projection, 1200.0);
//! ```

use crate::{DerivedProjection, Inputs};

/// Commission fraction used for the floor projection.
pub const MIN_COMMISSION_FRACTION: f64 = 0.2;

/// How much larger the pipeline is in the max projection.
pub const GROWTH_FACTOR: f64 = 1.5;

pub fn compute_future_earnings(
    pending_users: u32,
    avg_investment: f64,
    commission_rate: u8,
) -> f64 {
    f64::from(pending_users) * avg_investment * (f64::from(commission_rate) / 100.0)
}

pub fn compute_min_projection(
    pending_users: u32,
    avg_investment: f64,
) -> f64 {
    f64::from(pending_users) * avg_investment * MIN_COMMISSION_FRACTION
}

pub fn compute_max_projection(
    pending_users: u32,
    avg_investment: f64,
    commission_rate: u8,
) -> f64 {
    (f64::from(pending_users) * GROWTH_FACTOR) * avg_investment * (f64::from(commission_rate) / 100.0)
}

/// Pending users in the grown pipeline, rounded up (`10` -> `15`, `3` -> `5`).
pub fn projected_pending_users(pending_users: u32) -> u64 {
    (f64::from(pending_users) * GROWTH_FACTOR).ceil() as u64
}

/// Computes every derived figure for `inputs`.
pub fn project(inputs: &Inputs) -> DerivedProjection {
    DerivedProjection {
        future_earnings: compute_future_earnings(
            inputs.pending_users,
            inputs.avg_investment,
            inputs.commission_rate,
        ),
        min_projection: compute_min_projection(inputs.pending_users, inputs.avg_investment),
        max_projection: compute_max_projection(
            inputs.pending_users,
            inputs.avg_investment,
            inputs.commission_rate,
        ),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{COMMISSION_RATE_MAX, COMMISSION_RATE_MIN};

    fn sample_grid() -> Vec<Inputs> {
        let mut grid = Vec::new();
        for pending_users in [1, 7, 10, 250, 500, 12_000] {
            for avg_investment in [0.0, 0.01, 400.0, 1234.56, 1e7] {
                for commission_rate in COMMISSION_RATE_MIN..=COMMISSION_RATE_MAX {
                    grid.push(Inputs {
                        pending_users,
                        avg_investment,
                        commission_rate,
                    });
                }
            }
        }
        grid
    }

    // =========================================================================
    // compute_future_earnings tests
    // =========================================================================

    #[test]
    fn future_earnings_matches_formula_across_inputs() {
        for inputs in sample_grid() {
            let expected = f64::from(inputs.pending_users)
                * inputs.avg_investment
                * f64::from(inputs.commission_rate)
                / 100.0;

            let result = compute_future_earnings(
                inputs.pending_users,
                inputs.avg_investment,
                inputs.commission_rate,
            );

            assert_relative_eq!(result, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn future_earnings_default_inputs() {
        assert_eq!(compute_future_earnings(10, 400.0, 20), 800.0);
    }

    #[test]
    fn future_earnings_zero_investment_is_zero() {
        assert_eq!(compute_future_earnings(500, 0.0, 50), 0.0);
    }

    // =========================================================================
    // compute_min_projection tests
    // =========================================================================

    #[test]
    fn min_projection_ignores_commission_rate() {
        assert_relative_eq!(compute_min_projection(25, 1000.0), 5000.0);
    }

    #[test]
    fn min_projection_equals_future_earnings_at_floor_rate() {
        for inputs in sample_grid() {
            let floor = compute_future_earnings(
                inputs.pending_users,
                inputs.avg_investment,
                COMMISSION_RATE_MIN,
            );

            assert_relative_eq!(
                compute_min_projection(inputs.pending_users, inputs.avg_investment),
                floor,
                max_relative = 1e-12
            );
        }
    }

    // =========================================================================
    // compute_max_projection tests
    // =========================================================================

    #[test]
    fn max_projection_is_one_and_a_half_times_future_earnings() {
        for inputs in sample_grid() {
            let projection = project(&inputs);

            assert_relative_eq!(
                projection.max_projection,
                GROWTH_FACTOR * projection.future_earnings,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn max_projection_example() {
        // (40 * 1.5) * 250 * 0.35 = 60 * 87.5 = 5250
        assert_relative_eq!(compute_max_projection(40, 250.0, 35), 5250.0);
    }

    // =========================================================================
    // projected_pending_users tests
    // =========================================================================

    #[test]
    fn projected_pending_users_rounds_up() {
        assert_eq!(projected_pending_users(10), 15);
        assert_eq!(projected_pending_users(3), 5);
        assert_eq!(projected_pending_users(1), 2);
        assert_eq!(projected_pending_users(500), 750);
    }

    // =========================================================================
    // project tests
    // =========================================================================

    #[test]
    fn project_default_inputs() {
        let projection = project(&Inputs::default());

        assert_eq!(
            projection,
            DerivedProjection {
                future_earnings: 800.0,
                min_projection: 800.0,
                max_projection: 1200.0,
            }
        );
    }
}

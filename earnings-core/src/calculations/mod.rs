//! Earnings projection calculations.
//!
//! Everything here is a pure function of the current [`Inputs`](crate::Inputs).
//! The controller recomputes on every read, so nothing is cached.

pub mod common;
pub mod projection;

pub use projection::{
    GROWTH_FACTOR, MIN_COMMISSION_FRACTION, compute_future_earnings, compute_max_projection,
    compute_min_projection, project, projected_pending_users,
};

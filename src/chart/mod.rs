//! Wallet activity charts.
//!
//! Backend statistics arrive sparse and in no particular order. Charts need a
//! complete, chronological axis, so the axis is derived from the clock
//! ([`generate_fixed_buckets`]) and the observations are joined onto it by
//! label ([`reconcile`]). Everything here is pure and infallible.

pub mod buckets;
pub mod reconcile;
pub mod series;
pub mod window;

pub use buckets::{generate_fixed_buckets, generate_fixed_buckets_now, truncate_to_hour};
pub use reconcile::{observations_from_statistics, reconcile, ChartPoint, Observation};
pub use series::ChartSeries;
pub use window::{Granularity, TimeWindow};

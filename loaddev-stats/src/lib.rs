//! Loaddev Stats - Single-pass velocity statistics
//!
//! Computes count, sum, min, max, and sum of squares for shot velocities in
//! one pass, normalizing heterogeneous input units before combining. The
//! accumulator never retains raw samples, so group summaries over thousands
//! of shots stay O(1) in space, and disjoint accumulators can be merged for
//! chunked aggregation.

mod velocity;

pub use velocity::{compute_stats, VelocityStats};

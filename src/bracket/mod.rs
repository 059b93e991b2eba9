//! Brackets, the assignment result, derived statistics, and display order.
//!
//! A [`Bracket`] keeps its membership sorted by weight and its
//! [`BracketStats`] recomputed from that membership on every change; neither
//! is writable from outside this crate. A [`BracketResult`] partitions the
//! entrant set into brackets and [`Outlier`]s.

mod sort;
mod stats;
mod types;

pub use sort::{display_cmp, sort_brackets};
pub use stats::{recalculate, spread_percent, BracketStats};
pub use types::{
    Bracket, BracketId, BracketOrigin, BracketResult, Outlier, OutlierReason, Placement, ResultSummary,
};

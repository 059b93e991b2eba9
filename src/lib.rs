//! Automatic bracket generation for grappling tournaments.
//!
//! Groups registered entrants into small, fair brackets and leaves the
//! rest as outliers for a tournament director to place by hand:
//!
//! - **Entrants** ([`entrant`]): registration records, closed skill-tier
//!   vocabularies with a shared rank scale, and a seeded demo roster
//!   generator.
//! - **Divisions** ([`division`]): fixed age/gender bands.
//! - **Engine** ([`engine`]): pools by (discipline, division, tier), then a
//!   greedy sliding-window partition checked against configurable weight
//!   and age rules. Deterministic for identical inputs.
//! - **Brackets** ([`bracket`]): the result aggregate, derived statistics
//!   and display ordering.
//! - **Manual overrides** ([`manual`]): moves with capacity eviction,
//!   renames, new brackets, a drag-compatibility policy, and a workspace
//!   session that reprocesses on every data change.
//! - **Advisory** ([`advisory`]): an optional seam for an external service
//!   that suggests placements for outliers.
//!
//! # Example
//!
//! ```
//! use u_bracket::engine::{BracketEngine, EngineConfig};
//! use u_bracket::entrant::RosterGenerator;
//!
//! let entrants = RosterGenerator::new(7).generate(200);
//! let result = BracketEngine::run(&entrants, &EngineConfig::default());
//!
//! let summary = result.summary();
//! assert_eq!(summary.total_entrants, 200);
//! assert!(result.brackets().iter().all(|b| b.len() >= 2 && b.len() <= 5));
//! ```

pub mod advisory;
pub mod bracket;
pub mod division;
pub mod engine;
pub mod entrant;
pub mod manual;

#[cfg(feature = "wasm")]
pub mod wasm;

//! Automatic bracketing engine.
//!
//! Builds candidate pools keyed by (discipline, division, tier), partitions
//! each pool with a greedy sliding window checked against the validity
//! rules, and sorts the resulting brackets for display.
//!
//! # Pipeline
//!
//! 1. Entrants missing weight or age become outliers.
//! 2. Remaining entrants are grouped by [`PoolKey`].
//! 3. Each pool is sorted by weight and scanned by [`partition_pool`].
//! 4. Brackets are sorted by [`sort_brackets`](crate::bracket::sort_brackets).
//!
//! # Example
//!
//! ```
//! use u_bracket::engine::{BracketEngine, EngineConfig};
//! use u_bracket::entrant::{Entrant, Gender, SkillTier};
//!
//! let entrants: Vec<Entrant> = [150.0, 152.0, 155.0, 240.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &w)| Entrant::new(format!("e{i}"), format!("E{i}"), Gender::Male, 30, w, SkillTier::Blue))
//!     .collect();
//!
//! let result = BracketEngine::run(&entrants, &EngineConfig::default().with_ultra_heavy_ignore(false));
//! assert_eq!(result.brackets().len(), 1);
//! assert_eq!(result.outliers().len(), 1);
//! ```

mod config;
mod partition;
mod pool;
mod runner;
mod validity;

pub use config::{ConfigError, EngineConfig};
pub use partition::{partition_pool, size_priority, PoolPartition, MAX_BRACKET_SIZE, WINDOW_SIZES};
pub use pool::{build_pools, PoolKey, Pools};
pub use runner::BracketEngine;
pub use validity::{
    allowed_age_gap, is_valid, weight_rule_holds, ADULT_MAX_AGE_GAP, KIDS_MAX_AGE_GAP, MIN_GROUP_SIZE,
    ULTRA_HEAVY_THRESHOLD,
};

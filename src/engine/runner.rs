//! Full bracketing pipeline.
//!
//! [`BracketEngine`] runs pool building, per-pool partitioning and display
//! sorting as one pure function of (entrants, config).

use super::config::EngineConfig;
use super::partition::{partition_pool, PoolPartition};
use super::pool::{build_pools, PoolKey, Pools};
use crate::bracket::{sort_brackets, BracketResult, Outlier, OutlierReason};
use crate::entrant::Entrant;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Executes the bracketing pipeline.
///
/// # Usage
///
/// ```
/// use u_bracket::engine::{BracketEngine, EngineConfig};
/// use u_bracket::entrant::RosterGenerator;
///
/// let entrants = RosterGenerator::new(42).generate(100);
/// let result = BracketEngine::run(&entrants, &EngineConfig::default());
/// assert_eq!(result.entrant_count(), 100);
/// ```
pub struct BracketEngine;

impl BracketEngine {
    /// Builds brackets from scratch.
    ///
    /// Never fails: any configuration produces a result, in the extreme
    /// with every entrant an outlier. Identical inputs give identical output.
    pub fn run(entrants: &[Entrant], config: &EngineConfig) -> BracketResult {
        let Pools {
            pools,
            missing_data,
        } = build_pools(entrants);

        info!(
            event = "bracketing_start",
            entrants = entrants.len(),
            pools = pools.len(),
            missing_data = missing_data.len(),
            target_size = config.target_bracket_size,
        );

        let mut outliers: Vec<Outlier> = missing_data
            .into_iter()
            .map(|e| Outlier::new(e, OutlierReason::MissingData))
            .collect();
        let mut brackets = Vec::new();

        for (key, partition) in partition_all(pools, config) {
            debug!(
                event = "pool_partitioned",
                pool = %key,
                brackets = partition.brackets.len(),
                outliers = partition.outliers.len(),
            );
            brackets.extend(partition.brackets);
            outliers.extend(
                partition
                    .outliers
                    .into_iter()
                    .map(|e| Outlier::new(e, OutlierReason::Unmatched)),
            );
        }

        sort_brackets(&mut brackets);

        info!(
            event = "bracketing_end",
            brackets = brackets.len(),
            outliers = outliers.len(),
        );

        BracketResult::new(brackets, outliers)
    }
}

/// Partitions every pool, preserving pool-key order in the output.
#[cfg(feature = "parallel")]
fn partition_all(
    pools: BTreeMap<PoolKey, Vec<Entrant>>,
    config: &EngineConfig,
) -> Vec<(PoolKey, PoolPartition)> {
    use rayon::prelude::*;

    if !config.parallel {
        return partition_sequential(pools, config);
    }
    pools
        .into_iter()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|(key, pool)| {
            let partition = partition_pool(&key, pool, config);
            (key, partition)
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn partition_all(
    pools: BTreeMap<PoolKey, Vec<Entrant>>,
    config: &EngineConfig,
) -> Vec<(PoolKey, PoolPartition)> {
    partition_sequential(pools, config)
}

fn partition_sequential(
    pools: BTreeMap<PoolKey, Vec<Entrant>>,
    config: &EngineConfig,
) -> Vec<(PoolKey, PoolPartition)> {
    pools
        .into_iter()
        .map(|(key, pool)| {
            let partition = partition_pool(&key, pool, config);
            (key, partition)
        })
        .collect()
}

//! Greedy sliding-window partitioning of one pool.
//!
//! The pool is sorted by weight and scanned left to right. At each cursor
//! position the window sizes are tried in [`size_priority`] order and the
//! first window the validity oracle accepts becomes a bracket. When no size
//! fits, the entrant at the cursor becomes an outlier and the cursor moves
//! by one.
//!
//! First-fit with no backtracking: the result is deterministic and easy to
//! explain, but it does not minimize the outlier count.

use super::config::EngineConfig;
use super::pool::PoolKey;
use super::validity::is_valid;
use crate::bracket::{Bracket, BracketId, BracketOrigin};
use crate::entrant::Entrant;

/// Hard cap on automatic and manual bracket size.
pub const MAX_BRACKET_SIZE: usize = 5;

/// Window sizes the partitioner may emit.
pub const WINDOW_SIZES: [usize; 3] = [3, 4, 5];

/// Order in which window sizes are tried: the target first, then the rest
/// largest first. A target outside [`WINDOW_SIZES`] yields `[5, 4, 3]`.
///
/// # Examples
///
/// ```
/// use u_bracket::engine::size_priority;
///
/// assert_eq!(size_priority(3), [3, 5, 4]);
/// assert_eq!(size_priority(4), [4, 5, 3]);
/// assert_eq!(size_priority(5), [5, 4, 3]);
/// assert_eq!(size_priority(9), [5, 4, 3]);
/// ```
pub fn size_priority(target: usize) -> [usize; 3] {
    match target {
        3 => [3, 5, 4],
        4 => [4, 5, 3],
        _ => [5, 4, 3],
    }
}

/// Brackets and leftovers produced from one pool.
#[derive(Debug, Clone, Default)]
pub struct PoolPartition {
    pub brackets: Vec<Bracket>,
    pub outliers: Vec<Entrant>,
}

/// Partitions one pool.
///
/// Brackets are named `"{pool} (Group n)"` with ids `"bracket-{slug}-{n}"`,
/// numbered from 1 within the pool.
pub fn partition_pool(key: &PoolKey, mut pool: Vec<Entrant>, config: &EngineConfig) -> PoolPartition {
    pool.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let is_adult = key.division.is_adult();
    let sizes = size_priority(config.target_bracket_size);
    let slug = key.slug();

    let mut out = PoolPartition::default();
    let mut cursor = 0usize;

    while cursor < pool.len() {
        let remaining = pool.len() - cursor;
        let accepted = sizes
            .iter()
            .copied()
            .filter(|&size| size <= remaining)
            .find(|&size| is_valid(&pool[cursor..cursor + size], config, is_adult));

        match accepted {
            Some(size) => {
                let n = out.brackets.len() + 1;
                let bracket = Bracket::new(
                    BracketId::new(format!("bracket-{slug}-{n}")),
                    format!("{key} (Group {n})"),
                    key.discipline,
                    key.division,
                    pool[cursor..cursor + size].to_vec(),
                )
                .with_origin(BracketOrigin::Auto);
                out.brackets.push(bracket);
                cursor += size;
            }
            None => {
                out.outliers.push(pool[cursor].clone());
                cursor += 1;
            }
        }
    }

    out
}

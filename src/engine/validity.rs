//! Validity rules for automatically formed brackets.
//!
//! This is the automatic ruleset only. The looser check used to gate manual
//! drags lives in [`crate::manual::DragPolicy`] and is maintained separately.

use super::config::EngineConfig;
use crate::entrant::Entrant;

/// Lightest-member weight at or above which the weight rules may be waived.
pub const ULTRA_HEAVY_THRESHOLD: f64 = 225.0;

/// Maximum age gap in Adult/Masters divisions when the gap is not ignored.
pub const ADULT_MAX_AGE_GAP: u32 = 15;

/// Maximum age gap in kids divisions.
pub const KIDS_MAX_AGE_GAP: u32 = 5;

/// Smallest group the oracle accepts.
pub const MIN_GROUP_SIZE: usize = 2;

/// Age gap allowed for a division class.
pub fn allowed_age_gap(config: &EngineConfig, is_adult_division: bool) -> u32 {
    match (is_adult_division, config.adults_ignore_age_gap) {
        (true, true) => u32::MAX,
        (true, false) => ADULT_MAX_AGE_GAP,
        (false, _) => KIDS_MAX_AGE_GAP,
    }
}

/// Whether the weight rules hold for a group with the given extremes.
///
/// Both the percent cap and the absolute cap must hold, so the stricter one
/// governs. The ultra-heavyweight waiver skips both.
pub fn weight_rule_holds(lo: f64, hi: f64, config: &EngineConfig, is_adult_division: bool) -> bool {
    if config.ultra_heavy_ignore && lo >= ULTRA_HEAVY_THRESHOLD {
        return true;
    }
    let diff = hi - lo;
    let percent = diff / lo * 100.0;
    percent <= config.max_weight_diff_percent(is_adult_division)
        && diff <= config.max_weight_diff_absolute_cap
}

/// Decides whether `group` may form a bracket.
///
/// # Examples
///
/// ```
/// use u_bracket::engine::{is_valid, EngineConfig};
/// use u_bracket::entrant::{Entrant, Gender, SkillTier};
///
/// let config = EngineConfig::default()
///     .with_adults_max_weight_diff_percent(10.0)
///     .with_max_weight_diff_absolute_cap(13.0);
/// let group: Vec<Entrant> = [150.0, 155.0, 160.0]
///     .iter()
///     .enumerate()
///     .map(|(i, &w)| Entrant::new(format!("e{i}"), "E", Gender::Male, 25, w, SkillTier::Blue))
///     .collect();
///
/// assert!(is_valid(&group, &config, true));
/// assert!(!is_valid(&group[..1], &config, true));
/// ```
pub fn is_valid(group: &[Entrant], config: &EngineConfig, is_adult_division: bool) -> bool {
    if group.len() < MIN_GROUP_SIZE {
        return false;
    }

    let lo = group.iter().map(|e| e.weight).fold(f64::INFINITY, f64::min);
    let hi = group.iter().map(|e| e.weight).fold(f64::NEG_INFINITY, f64::max);
    if !weight_rule_holds(lo, hi, config, is_adult_division) {
        return false;
    }

    let min_age = group.iter().map(|e| e.age).min().unwrap_or(0);
    let max_age = group.iter().map(|e| e.age).max().unwrap_or(0);
    max_age - min_age <= allowed_age_gap(config, is_adult_division)
}

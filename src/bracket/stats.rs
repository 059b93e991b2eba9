//! Derived bracket statistics.

use crate::entrant::Entrant;

/// Statistics derived from a bracket's membership.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BracketStats {
    /// Arithmetic mean weight. `0` for an empty bracket.
    pub avg_weight: f64,
    /// `(max - min) / min * 100`. `0` when empty or when the lightest
    /// member has no recorded weight.
    pub weight_spread_percent: f64,
    /// `max(age) - min(age)`. `0` for fewer than two members.
    pub age_gap: u32,
}

/// Percent weight spread between a lightest and heaviest weight.
///
/// Returns `0` when `lo` is not positive.
pub fn spread_percent(lo: f64, hi: f64) -> f64 {
    if lo > 0.0 {
        (hi - lo) / lo * 100.0
    } else {
        0.0
    }
}

/// Sorts `members` by weight (stable, ascending) and computes their stats.
///
/// # Examples
///
/// ```
/// use u_bracket::bracket::recalculate;
/// use u_bracket::entrant::{Entrant, Gender, SkillTier};
///
/// let members = vec![
///     Entrant::new("b", "B", Gender::Male, 30, 110.0, SkillTier::Blue),
///     Entrant::new("a", "A", Gender::Male, 22, 100.0, SkillTier::Blue),
/// ];
/// let (sorted, stats) = recalculate(members);
/// assert_eq!(sorted[0].id.as_str(), "a");
/// assert!((stats.avg_weight - 105.0).abs() < 1e-10);
/// assert!((stats.weight_spread_percent - 10.0).abs() < 1e-10);
/// assert_eq!(stats.age_gap, 8);
/// ```
pub fn recalculate(mut members: Vec<Entrant>) -> (Vec<Entrant>, BracketStats) {
    members.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let (Some(lightest), Some(heaviest)) = (members.first(), members.last()) else {
        return (members, BracketStats::default());
    };

    let avg_weight = members.iter().map(|e| e.weight).sum::<f64>() / members.len() as f64;
    let weight_spread_percent = spread_percent(lightest.weight, heaviest.weight);

    let min_age = members.iter().map(|e| e.age).min().unwrap_or(0);
    let max_age = members.iter().map(|e| e.age).max().unwrap_or(0);

    let stats = BracketStats {
        avg_weight,
        weight_spread_percent,
        age_gap: max_age - min_age,
    };
    (members, stats)
}

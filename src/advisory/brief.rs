//! Director brief sent to an advisor.

use super::types::OutlierProfile;
use std::fmt::Write;

/// Placement strategies an advisor is asked to consider, as (title, detail).
pub const STRATEGIES: [(&str, &str); 4] = [
    (
        "Bump up age",
        "move older teens (13-15) into Adult divisions where weights align",
    ),
    (
        "Drop down age",
        "move Masters (35+) down to Adult (16+) where weights align",
    ),
    (
        "Bump up skill",
        "combine adjacent skill tiers (e.g. Purple vs Brown) for a superfight or mixed bracket",
    ),
    (
        "Catch weights",
        "find 2-4 entrants who can safely compete despite falling outside standard brackets",
    ),
];

/// Formats the outlier list and placement strategies as a markdown brief.
///
/// # Examples
///
/// ```
/// use u_bracket::advisory::{render_brief, OutlierProfile};
/// use u_bracket::entrant::{Gender, SkillTier};
///
/// let brief = render_brief(&[OutlierProfile {
///     name: "Ana".to_string(),
///     gender: Gender::Female,
///     tier: SkillTier::Blue,
///     age: 36,
///     weight: 118.0,
///     affiliation: "Alliance".to_string(),
/// }]);
/// assert!(brief.contains("Ana"));
/// assert!(brief.contains("Catch weights"));
/// ```
pub fn render_brief(outliers: &[OutlierProfile]) -> String {
    let mut out = String::new();
    out.push_str("# Unmatched competitors\n\n");
    for p in outliers {
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "- {} ({}, {}, age {}, {:.1} lbs, {}) [{}]",
            p.name,
            p.gender,
            p.tier,
            p.age,
            p.weight,
            if p.affiliation.is_empty() { "unaffiliated" } else { p.affiliation.as_str() },
            p.division(),
        );
    }
    out.push_str("\n# Strategies\n\n");
    for (i, (title, detail)) in STRATEGIES.iter().enumerate() {
        let _ = writeln!(out, "{}. **{}:** {}.", i + 1, title, detail);
    }
    out.push_str("\nSuggest specific matches as an actionable markdown report.\n");
    out
}

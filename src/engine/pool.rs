//! Candidate pool formation.

use crate::division::{classify, Division};
use crate::entrant::{Discipline, Entrant, SkillTier};
use std::collections::BTreeMap;
use std::fmt;

/// Entrants sharing a pool key may be grouped together.
///
/// Distinct skill tiers are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PoolKey {
    pub discipline: Discipline,
    pub division: Division,
    pub tier: SkillTier,
}

impl PoolKey {
    pub fn of(entrant: &Entrant) -> Self {
        Self {
            discipline: entrant.discipline,
            division: classify(entrant.age, entrant.gender),
            tier: entrant.tier,
        }
    }

    /// Lowercase, dash-separated form of the label, used in bracket ids.
    pub fn slug(&self) -> String {
        let mut slug = String::new();
        for c in self.to_string().chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if c == '+' {
                slug.push_str("plus");
            } else if !slug.ends_with('-') {
                slug.push('-');
            }
        }
        slug.trim_matches('-').to_string()
    }
}

impl fmt::Display for PoolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.discipline, self.tier, self.division)
    }
}

/// Output of the pool builder.
#[derive(Debug, Clone, Default)]
pub struct Pools {
    /// Eligible entrants by key, in input order within each pool.
    pub pools: BTreeMap<PoolKey, Vec<Entrant>>,
    /// Entrants with no recorded weight or age, in input order.
    pub missing_data: Vec<Entrant>,
}

/// Splits entrants into pools, routing missing-data entrants aside before
/// they are classified.
pub fn build_pools(entrants: &[Entrant]) -> Pools {
    let mut out = Pools::default();
    for entrant in entrants {
        if !entrant.is_eligible() {
            out.missing_data.push(entrant.clone());
            continue;
        }
        out.pools
            .entry(PoolKey::of(entrant))
            .or_default()
            .push(entrant.clone());
    }
    out
}

//! Bracket and result aggregates.

use super::stats::{recalculate, BracketStats};
use crate::division::Division;
use crate::entrant::{Discipline, Entrant, EntrantId};
use std::fmt;

/// Spread above which a bracket is flagged for the operator.
const WEIGHT_WARNING_PERCENT: f64 = 20.0;

/// Age gap above which a bracket is flagged for the operator.
const AGE_WARNING_YEARS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BracketId(String);

impl BracketId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BracketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BracketId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How a bracket came to exist.
///
/// An automatic bracket that loses its last member is removed; a manual one
/// stays, empty, as a drop target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BracketOrigin {
    /// Formed by the partitioner.
    #[default]
    Auto,
    /// Created by an override command.
    Manual,
}

/// A group of entrants who compete against each other.
///
/// Membership is always sorted by weight ascending and [`Bracket::stats`]
/// always reflects the current membership: every mutation goes through
/// [`recalculate`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "camelCase", from = "BracketRecord")
)]
pub struct Bracket {
    pub id: BracketId,
    pub name: String,
    pub discipline: Discipline,
    pub division: Division,
    origin: BracketOrigin,
    members: Vec<Entrant>,
    stats: BracketStats,
}

impl Bracket {
    /// Creates a [`BracketOrigin::Auto`] bracket; see [`Bracket::with_origin`].
    pub fn new(
        id: BracketId,
        name: impl Into<String>,
        discipline: Discipline,
        division: Division,
        members: Vec<Entrant>,
    ) -> Self {
        let (members, stats) = recalculate(members);
        Self {
            id,
            name: name.into(),
            discipline,
            division,
            origin: BracketOrigin::Auto,
            members,
            stats,
        }
    }

    pub fn with_origin(mut self, origin: BracketOrigin) -> Self {
        self.origin = origin;
        self
    }

    pub fn origin(&self) -> BracketOrigin {
        self.origin
    }

    /// Whether an empty bracket should be dropped rather than kept.
    pub(crate) fn is_disposable(&self) -> bool {
        self.members.is_empty() && self.origin == BracketOrigin::Auto
    }

    /// Members, lightest first.
    pub fn members(&self) -> &[Entrant] {
        &self.members
    }

    pub fn stats(&self) -> BracketStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: &EntrantId) -> bool {
        self.members.iter().any(|e| &e.id == id)
    }

    /// Spread is above the display warning threshold (20%).
    pub fn has_weight_warning(&self) -> bool {
        self.stats.weight_spread_percent > WEIGHT_WARNING_PERCENT
    }

    /// Age gap is above the display warning threshold (10 years).
    pub fn has_age_warning(&self) -> bool {
        self.stats.age_gap > AGE_WARNING_YEARS
    }

    pub(crate) fn push(&mut self, entrant: Entrant) {
        let mut members = std::mem::take(&mut self.members);
        members.push(entrant);
        self.set_members(members);
    }

    pub(crate) fn remove(&mut self, id: &EntrantId) -> Option<Entrant> {
        let idx = self.members.iter().position(|e| &e.id == id)?;
        let removed = self.members.remove(idx);
        let members = std::mem::take(&mut self.members);
        self.set_members(members);
        Some(removed)
    }

    pub(crate) fn set_members(&mut self, members: Vec<Entrant>) {
        let (members, stats) = recalculate(members);
        self.members = members;
        self.stats = stats;
    }
}

/// Wire shape accepted when deserializing a bracket. Stats are never
/// trusted from input; they are recomputed.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct BracketRecord {
    id: BracketId,
    name: String,
    discipline: Discipline,
    division: Division,
    #[serde(default)]
    origin: BracketOrigin,
    #[serde(default)]
    members: Vec<Entrant>,
}

#[cfg(feature = "serde")]
impl From<BracketRecord> for Bracket {
    fn from(r: BracketRecord) -> Self {
        Bracket::new(r.id, r.name, r.discipline, r.division, r.members).with_origin(r.origin)
    }
}

/// Why an entrant is not in a bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutlierReason {
    /// Weight or age was not recorded.
    MissingData,
    /// No valid window contained this entrant during partitioning.
    Unmatched,
    /// Moved out of a bracket by the operator.
    ManualRemoval,
    /// Bumped out of a full bracket by a manual insertion.
    Evicted,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outlier {
    pub entrant: Entrant,
    pub reason: OutlierReason,
}

impl Outlier {
    pub fn new(entrant: Entrant, reason: OutlierReason) -> Self {
        Self { entrant, reason }
    }
}

/// Where an entrant currently sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    Outlier,
    Member(BracketId),
}

/// Dashboard counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSummary {
    pub total_entrants: usize,
    pub brackets: usize,
    pub outliers: usize,
}

/// The assignment of every entrant to one bracket or to the outliers.
///
/// Produced by [`BracketEngine::run`](crate::engine::BracketEngine::run) and
/// mutated afterwards only through the manual override commands.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BracketResult {
    pub(crate) brackets: Vec<Bracket>,
    pub(crate) outliers: Vec<Outlier>,
}

impl BracketResult {
    pub(crate) fn new(brackets: Vec<Bracket>, outliers: Vec<Outlier>) -> Self {
        Self { brackets, outliers }
    }

    /// Brackets in display order.
    pub fn brackets(&self) -> &[Bracket] {
        &self.brackets
    }

    pub fn outliers(&self) -> &[Outlier] {
        &self.outliers
    }

    pub fn bracket(&self, id: &BracketId) -> Option<&Bracket> {
        self.brackets.iter().find(|b| &b.id == id)
    }

    /// Finds where an entrant is placed, searching outliers first.
    pub fn locate(&self, id: &EntrantId) -> Option<Placement> {
        if self.outliers.iter().any(|o| &o.entrant.id == id) {
            return Some(Placement::Outlier);
        }
        self.brackets
            .iter()
            .find(|b| b.contains(id))
            .map(|b| Placement::Member(b.id.clone()))
    }

    /// Number of entrants placed anywhere.
    pub fn entrant_count(&self) -> usize {
        self.outliers.len() + self.brackets.iter().map(Bracket::len).sum::<usize>()
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary {
            total_entrants: self.entrant_count(),
            brackets: self.brackets.len(),
            outliers: self.outliers.len(),
        }
    }
}

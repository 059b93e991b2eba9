//! Override commands on a [`BracketResult`].

use crate::bracket::{
    spread_percent, Bracket, BracketId, BracketOrigin, BracketResult, Outlier, OutlierReason,
};
use crate::division::{classify, Division};
use crate::engine::MAX_BRACKET_SIZE;
use crate::entrant::{Discipline, Entrant, EntrantId};
use tracing::{debug, info, warn};

/// Name given to brackets created with [`BracketResult::create_empty_bracket`].
pub const EMPTY_BRACKET_NAME: &str = "New Bracket";

/// Destination of a move. `None` in a command means "unset" and behaves
/// like [`MoveTarget::Outliers`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveTarget {
    Outliers,
    /// Seed a new single-member bracket from the entrant.
    NewBracket,
    Bracket(BracketId),
}

/// What a move did.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    /// The entrant id is unknown; nothing changed.
    NotFound,
    ToOutliers,
    Created(BracketId),
    Placed(BracketId),
    /// The target was full; `evicted` went to the outliers. It may be the
    /// moved entrant itself.
    Evicted { bracket: BracketId, evicted: EntrantId },
    /// The target bracket does not exist; the entrant went to the outliers.
    UnknownBracket(BracketId),
    /// The entrant is already a member of the target; nothing changed.
    AlreadyPlaced(BracketId),
}

impl MoveOutcome {
    /// Whether the result was modified.
    pub fn changed(&self) -> bool {
        !matches!(self, MoveOutcome::NotFound | MoveOutcome::AlreadyPlaced(_))
    }
}

/// A manual edit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverrideCommand {
    Move {
        entrant: EntrantId,
        target: Option<MoveTarget>,
    },
    Rename {
        bracket: BracketId,
        name: String,
    },
    CreateEmpty,
}

/// What a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandOutcome {
    Moved(MoveOutcome),
    /// `false` when the bracket id was unknown.
    Renamed(bool),
    Created(BracketId),
}

impl CommandOutcome {
    pub fn changed(&self) -> bool {
        match self {
            CommandOutcome::Moved(outcome) => outcome.changed(),
            CommandOutcome::Renamed(found) => *found,
            CommandOutcome::Created(_) => true,
        }
    }
}

impl BracketResult {
    /// Executes one override command.
    pub fn apply(&mut self, command: OverrideCommand) -> CommandOutcome {
        match command {
            OverrideCommand::Move { entrant, target } => {
                CommandOutcome::Moved(self.move_entrant(&entrant, target))
            }
            OverrideCommand::Rename { bracket, name } => {
                CommandOutcome::Renamed(self.rename_bracket(&bracket, name))
            }
            OverrideCommand::CreateEmpty => CommandOutcome::Created(self.create_empty_bracket()),
        }
    }

    /// Moves an entrant out of its current location and places it at
    /// `target`.
    ///
    /// Dropping onto a full bracket triggers capacity eviction: of the six
    /// candidates sorted by weight, the five with the smaller spread stay
    /// (the lighter five on a tie) and the sixth becomes an outlier.
    ///
    /// An automatic bracket left without members is removed; manual
    /// brackets persist when emptied.
    ///
    /// Manual placement does not consult the validity rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_bracket::engine::{BracketEngine, EngineConfig};
    /// use u_bracket::entrant::{Entrant, Gender, SkillTier};
    /// use u_bracket::manual::{MoveOutcome, MoveTarget};
    /// use u_bracket::bracket::Placement;
    ///
    /// let entrants: Vec<Entrant> = [150.0, 151.0, 152.0]
    ///     .iter()
    ///     .enumerate()
    ///     .map(|(i, &w)| Entrant::new(format!("e{i}"), "E", Gender::Male, 30, w, SkillTier::Blue))
    ///     .collect();
    /// let mut result = BracketEngine::run(&entrants, &EngineConfig::default());
    ///
    /// let outcome = result.move_entrant(&"e2".into(), Some(MoveTarget::Outliers));
    /// assert_eq!(outcome, MoveOutcome::ToOutliers);
    /// assert_eq!(result.locate(&"e2".into()), Some(Placement::Outlier));
    /// assert_eq!(result.brackets()[0].len(), 2);
    /// ```
    pub fn move_entrant(&mut self, id: &EntrantId, target: Option<MoveTarget>) -> MoveOutcome {
        if let Some(MoveTarget::Bracket(bracket_id)) = &target {
            if self.bracket(bracket_id).is_some_and(|b| b.contains(id)) {
                return MoveOutcome::AlreadyPlaced(bracket_id.clone());
            }
        }

        let Some(entrant) = self.take_entrant(id) else {
            warn!(event = "move_unknown_entrant", entrant = %id);
            return MoveOutcome::NotFound;
        };

        match target.unwrap_or(MoveTarget::Outliers) {
            MoveTarget::Outliers => {
                self.outliers
                    .push(Outlier::new(entrant, OutlierReason::ManualRemoval));
                MoveOutcome::ToOutliers
            }
            MoveTarget::NewBracket => {
                let bracket_id = self.next_manual_id();
                let division = classify(entrant.age, entrant.gender);
                let name = format!("{} {} {} (Manual)", entrant.discipline, entrant.tier, division);
                let bracket = Bracket::new(
                    bracket_id.clone(),
                    name,
                    entrant.discipline,
                    division,
                    vec![entrant],
                )
                .with_origin(BracketOrigin::Manual);
                self.brackets.insert(0, bracket);
                debug!(event = "bracket_created", bracket = %bracket_id);
                MoveOutcome::Created(bracket_id)
            }
            MoveTarget::Bracket(bracket_id) => {
                let Some(bracket) = self.brackets.iter_mut().find(|b| b.id == bracket_id) else {
                    warn!(
                        event = "move_unknown_bracket",
                        entrant = %entrant.id,
                        bracket = %bracket_id,
                    );
                    self.outliers
                        .push(Outlier::new(entrant, OutlierReason::ManualRemoval));
                    return MoveOutcome::UnknownBracket(bracket_id);
                };

                match insert_with_eviction(bracket, entrant) {
                    None => MoveOutcome::Placed(bracket_id),
                    Some(evicted) => {
                        info!(
                            event = "entrant_evicted",
                            bracket = %bracket_id,
                            entrant = %evicted.id,
                            weight = evicted.weight,
                        );
                        let evicted_id = evicted.id.clone();
                        self.outliers
                            .push(Outlier::new(evicted, OutlierReason::Evicted));
                        MoveOutcome::Evicted {
                            bracket: bracket_id,
                            evicted: evicted_id,
                        }
                    }
                }
            }
        }
    }

    /// Renames a bracket. Returns `false` for an unknown id.
    pub fn rename_bracket(&mut self, id: &BracketId, name: impl Into<String>) -> bool {
        match self.brackets.iter_mut().find(|b| &b.id == id) {
            Some(bracket) => {
                bracket.name = name.into();
                true
            }
            None => {
                warn!(event = "rename_unknown_bracket", bracket = %id);
                false
            }
        }
    }

    /// Inserts an empty Gi / Open bracket at the front of the list.
    pub fn create_empty_bracket(&mut self) -> BracketId {
        let id = self.next_manual_id();
        self.brackets.insert(
            0,
            Bracket::new(
                id.clone(),
                EMPTY_BRACKET_NAME,
                Discipline::default(),
                Division::Open,
                Vec::new(),
            )
            .with_origin(BracketOrigin::Manual),
        );
        debug!(event = "bracket_created", bracket = %id);
        id
    }

    /// Removes an entrant from wherever it is, outliers first. Drops the
    /// source bracket if it was automatic and is now empty.
    fn take_entrant(&mut self, id: &EntrantId) -> Option<Entrant> {
        if let Some(idx) = self.outliers.iter().position(|o| &o.entrant.id == id) {
            return Some(self.outliers.remove(idx).entrant);
        }

        let idx = self.brackets.iter().position(|b| b.contains(id))?;
        let entrant = self.brackets[idx].remove(id)?;
        if self.brackets[idx].is_disposable() {
            let dropped = self.brackets.remove(idx);
            debug!(event = "bracket_dropped", bracket = %dropped.id);
        }
        Some(entrant)
    }

    fn next_manual_id(&self) -> BracketId {
        let mut n = self.brackets.len() + 1;
        loop {
            let id = BracketId::new(format!("manual-{n}"));
            if self.bracket(&id).is_none() {
                return id;
            }
            n += 1;
        }
    }
}

/// Spread key for comparing eviction subsets: percent spread, then
/// absolute spread. A subset whose lightest weight is unrecorded (`<= 0`)
/// has an unbounded percent spread.
fn subset_spread(lo: f64, hi: f64) -> (f64, f64) {
    let percent = if lo > 0.0 {
        spread_percent(lo, hi)
    } else {
        f64::INFINITY
    };
    (percent, hi - lo)
}

/// Adds `incoming` to `bracket`, evicting one member if the bracket is full.
fn insert_with_eviction(bracket: &mut Bracket, incoming: Entrant) -> Option<Entrant> {
    if bracket.len() < MAX_BRACKET_SIZE {
        bracket.push(incoming);
        return None;
    }

    let mut candidates = bracket.members().to_vec();
    candidates.push(incoming);
    candidates.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let last = candidates.len() - 1;
    let light_spread = subset_spread(candidates[0].weight, candidates[last - 1].weight);
    let heavy_spread = subset_spread(candidates[1].weight, candidates[last].weight);

    let evicted = if heavy_spread < light_spread {
        candidates.remove(0)
    } else {
        candidates.remove(last)
    };
    bracket.set_members(candidates);
    Some(evicted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bracket::{recalculate, Placement};
    use crate::engine::{BracketEngine, EngineConfig};
    use crate::entrant::{Gender, RosterGenerator, SkillTier};
    use proptest::prelude::*;

    fn entrant(id: &str, weight: f64) -> Entrant {
        Entrant::new(id, id, Gender::Male, 30, weight, SkillTier::Blue)
    }

    fn bracket(id: &str, weights: &[f64]) -> Bracket {
        let members = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| entrant(&format!("{id}-m{i}"), w))
            .collect();
        Bracket::new(
            BracketId::from(id),
            id,
            Discipline::Gi,
            Division::Adult(Gender::Male),
            members,
        )
    }

    fn result_with(brackets: Vec<Bracket>, outliers: Vec<Entrant>) -> BracketResult {
        BracketResult::new(
            brackets,
            outliers
                .into_iter()
                .map(|e| Outlier::new(e, OutlierReason::Unmatched))
                .collect(),
        )
    }

    fn assert_stats_fresh(result: &BracketResult) {
        for b in result.brackets() {
            let (_, fresh) = recalculate(b.members().to_vec());
            assert_eq!(b.stats(), fresh, "stale stats on {}", b.id);
        }
    }

    #[test]
    fn test_heavy_drop_on_full_bracket_evicts_incoming() {
        let mut result = result_with(
            vec![bracket("full", &[150.0, 151.0, 152.0, 153.0, 154.0])],
            vec![entrant("big", 200.0)],
        );

        let outcome = result.move_entrant(&"big".into(), Some(MoveTarget::Bracket("full".into())));

        assert_eq!(
            outcome,
            MoveOutcome::Evicted {
                bracket: "full".into(),
                evicted: "big".into(),
            }
        );
        let full = result.bracket(&"full".into()).map(Bracket::len);
        assert_eq!(full, Some(5));
        assert_eq!(result.outliers().len(), 1);
        assert_eq!(result.outliers()[0].reason, OutlierReason::Evicted);
        assert_eq!(result.locate(&"big".into()), Some(Placement::Outlier));
        assert_stats_fresh(&result);
    }

    #[test]
    fn test_eviction_drops_lightest_when_heavy_five_tighter() {
        let mut result = result_with(
            vec![bracket("full", &[100.0, 150.0, 151.0, 152.0, 153.0])],
            vec![entrant("new", 154.0)],
        );

        let outcome = result.move_entrant(&"new".into(), Some(MoveTarget::Bracket("full".into())));

        assert_eq!(
            outcome,
            MoveOutcome::Evicted {
                bracket: "full".into(),
                evicted: "full-m0".into(),
            }
        );
        assert!(result.bracket(&"full".into()).is_some_and(|b| b.contains(&"new".into())));
        assert_eq!(result.outliers()[0].entrant.weight, 100.0);
        assert_stats_fresh(&result);
    }

    #[test]
    fn test_eviction_tie_keeps_light_five() {
        let mut result = result_with(
            vec![bracket("full", &[150.0, 150.0, 150.0, 150.0, 150.0])],
            vec![entrant("same", 150.0)],
        );
        let outcome = result.move_entrant(&"same".into(), Some(MoveTarget::Bracket("full".into())));
        // Stable sort puts the incoming entrant last; it is the one evicted.
        assert_eq!(
            outcome,
            MoveOutcome::Evicted {
                bracket: "full".into(),
                evicted: "same".into(),
            }
        );
    }

    #[test]
    fn test_move_below_capacity_appends() {
        let mut result = result_with(
            vec![bracket("b", &[150.0, 160.0])],
            vec![entrant("x", 140.0)],
        );
        let outcome = result.move_entrant(&"x".into(), Some(MoveTarget::Bracket("b".into())));
        assert_eq!(outcome, MoveOutcome::Placed("b".into()));
        assert!(result.outliers().is_empty());
        let b = &result.brackets()[0];
        assert_eq!(b.len(), 3);
        assert_eq!(b.members()[0].id.as_str(), "x");
        assert_stats_fresh(&result);
    }

    #[test]
    fn test_move_between_brackets_updates_both() {
        let mut result = result_with(
            vec![bracket("a", &[150.0, 151.0, 170.0]), bracket("b", &[165.0, 168.0])],
            Vec::new(),
        );
        let outcome = result.move_entrant(&"a-m2".into(), Some(MoveTarget::Bracket("b".into())));
        assert_eq!(outcome, MoveOutcome::Placed("b".into()));
        assert_eq!(result.brackets()[0].len(), 2);
        assert_eq!(result.brackets()[1].len(), 3);
        assert!((result.brackets()[0].stats().avg_weight - 150.5).abs() < 1e-10);
        assert_stats_fresh(&result);
    }

    #[test]
    fn test_unset_target_removes_to_outliers() {
        let mut result = result_with(vec![bracket("a", &[150.0, 151.0])], Vec::new());
        let outcome = result.move_entrant(&"a-m0".into(), None);
        assert_eq!(outcome, MoveOutcome::ToOutliers);
        assert_eq!(result.outliers()[0].reason, OutlierReason::ManualRemoval);
        assert_eq!(result.brackets()[0].len(), 1);
        assert_stats_fresh(&result);
    }

    #[test]
    fn test_unknown_entrant_is_noop() {
        let mut result = result_with(vec![bracket("a", &[150.0, 151.0])], vec![entrant("x", 90.0)]);
        let before = result.clone();
        let outcome = result.move_entrant(&"ghost".into(), Some(MoveTarget::Bracket("a".into())));
        assert_eq!(outcome, MoveOutcome::NotFound);
        assert!(!outcome.changed());
        assert_eq!(result, before);
    }

    #[test]
    fn test_unknown_bracket_falls_back_to_outliers() {
        let mut result = result_with(vec![bracket("a", &[150.0, 151.0])], Vec::new());
        let outcome = result.move_entrant(&"a-m1".into(), Some(MoveTarget::Bracket("gone".into())));
        assert_eq!(outcome, MoveOutcome::UnknownBracket("gone".into()));
        assert_eq!(result.locate(&"a-m1".into()), Some(Placement::Outlier));
        assert_eq!(result.entrant_count(), 2);
    }

    #[test]
    fn test_new_bracket_sentinel_seeds_single_member() {
        let mut result = result_with(vec![bracket("a", &[150.0, 151.0])], Vec::new());
        let mut teen = Entrant::new("t", "T", Gender::Female, 14, 110.0, SkillTier::Grey);
        teen.discipline = Discipline::NoGi;
        result.outliers.push(Outlier::new(teen, OutlierReason::Unmatched));

        let outcome = result.move_entrant(&"t".into(), Some(MoveTarget::NewBracket));

        assert_eq!(outcome, MoveOutcome::Created("manual-2".into()));
        let created = &result.brackets()[0];
        assert_eq!(created.id.as_str(), "manual-2");
        assert_eq!(created.len(), 1);
        assert_eq!(created.discipline, Discipline::NoGi);
        assert_eq!(created.division, Division::Teen(Gender::Female));
        assert_eq!(created.stats().weight_spread_percent, 0.0);
        assert_eq!(created.stats().age_gap, 0);
        assert!(result.outliers().is_empty());
    }

    #[test]
    fn test_create_empty_bracket_goes_first() {
        let mut result = result_with(vec![bracket("a", &[150.0, 151.0])], Vec::new());
        let first = result.create_empty_bracket();
        let second = result.create_empty_bracket();
        assert_ne!(first, second);
        assert_eq!(result.brackets()[0].id, second);
        assert_eq!(result.brackets()[1].id, first);
        let empty = &result.brackets()[0];
        assert!(empty.is_empty());
        assert_eq!(empty.discipline, Discipline::Gi);
        assert_eq!(empty.division, Division::Open);
        assert_eq!(empty.name, EMPTY_BRACKET_NAME);
    }

    #[test]
    fn test_manual_ids_skip_taken() {
        let mut result = result_with(vec![bracket("manual-2", &[150.0, 151.0])], Vec::new());
        assert_eq!(result.create_empty_bracket().as_str(), "manual-3");
    }

    #[test]
    fn test_rename() {
        let mut result = result_with(vec![bracket("a", &[150.0, 151.0])], Vec::new());
        assert!(result.rename_bracket(&"a".into(), "Superfight"));
        assert_eq!(result.brackets()[0].name, "Superfight");
        assert!(!result.rename_bracket(&"zzz".into(), "Nope"));
    }

    #[test]
    fn test_apply_routes_commands() {
        let mut result = result_with(vec![bracket("a", &[150.0, 151.0])], vec![entrant("x", 152.0)]);

        let outcome = result.apply(OverrideCommand::Move {
            entrant: "x".into(),
            target: Some(MoveTarget::Bracket("a".into())),
        });
        assert_eq!(outcome, CommandOutcome::Moved(MoveOutcome::Placed("a".into())));

        let outcome = result.apply(OverrideCommand::Rename {
            bracket: "a".into(),
            name: "Renamed".to_string(),
        });
        assert_eq!(outcome, CommandOutcome::Renamed(true));

        let outcome = result.apply(OverrideCommand::CreateEmpty);
        assert!(matches!(outcome, CommandOutcome::Created(_)));
        assert!(outcome.changed());
    }

    #[test]
    fn test_weightless_drop_on_full_bracket_is_evicted() {
        let mut result = result_with(
            vec![bracket("full", &[150.0, 151.0, 152.0, 153.0, 154.0])],
            vec![entrant("nw", 0.0)],
        );

        let outcome = result.move_entrant(&"nw".into(), Some(MoveTarget::Bracket("full".into())));

        assert_eq!(
            outcome,
            MoveOutcome::Evicted {
                bracket: "full".into(),
                evicted: "nw".into(),
            }
        );
        let kept: Vec<f64> = result.brackets()[0].members().iter().map(|e| e.weight).collect();
        assert_eq!(kept, vec![150.0, 151.0, 152.0, 153.0, 154.0]);
        assert_eq!(result.outliers()[0].reason, OutlierReason::Evicted);
        assert_stats_fresh(&result);
    }

    #[test]
    fn test_weightless_member_evicted_by_real_weight() {
        let mut result = result_with(
            vec![bracket("full", &[0.0, 150.0, 151.0, 152.0, 153.0])],
            vec![entrant("in", 154.0)],
        );
        let outcome = result.move_entrant(&"in".into(), Some(MoveTarget::Bracket("full".into())));
        assert_eq!(
            outcome,
            MoveOutcome::Evicted {
                bracket: "full".into(),
                evicted: "full-m0".into(),
            }
        );
    }

    #[test]
    fn test_emptied_engine_bracket_is_removed() {
        let entrants: Vec<Entrant> = [150.0, 151.0, 152.0]
            .iter()
            .enumerate()
            .map(|(i, &w)| entrant(&format!("e{i}"), w))
            .collect();
        let mut result = BracketEngine::run(&entrants, &EngineConfig::default());
        assert_eq!(result.brackets().len(), 1);

        for e in &entrants {
            result.move_entrant(&e.id, None);
        }

        assert!(result.brackets().is_empty());
        assert_eq!(result.outliers().len(), 3);
    }

    #[test]
    fn test_emptied_manual_bracket_persists() {
        let mut result = result_with(vec![bracket("auto", &[150.0, 151.0])], Vec::new());
        let seeded = match result.move_entrant(&"auto-m0".into(), Some(MoveTarget::NewBracket)) {
            MoveOutcome::Created(id) => id,
            other => panic!("expected a new bracket, got {other:?}"),
        };
        let empty = result.create_empty_bracket();

        result.move_entrant(&"auto-m1".into(), None);
        result.move_entrant(&"auto-m0".into(), None);

        assert!(result.bracket(&"auto".into()).is_none());
        for id in [&seeded, &empty] {
            let b = result.bracket(id);
            assert!(b.is_some_and(|b| b.is_empty()), "{id} should persist empty");
            assert_eq!(b.map(Bracket::origin), Some(BracketOrigin::Manual));
        }
        assert_eq!(result.brackets().len(), 2);
        assert_eq!(result.entrant_count(), 2);
    }

    #[test]
    fn test_move_into_own_bracket_is_noop() {
        let mut result = result_with(vec![bracket("solo", &[150.0])], Vec::new());
        let before = result.clone();
        let outcome = result.move_entrant(&"solo-m0".into(), Some(MoveTarget::Bracket("solo".into())));
        assert_eq!(outcome, MoveOutcome::AlreadyPlaced("solo".into()));
        assert!(!outcome.changed());
        assert_eq!(result, before);
    }

    // ---- Properties ----

    proptest! {
        #[test]
        fn prop_full_bracket_stays_full_with_one_eviction(
            weights in prop::collection::vec(40.0f64..300.0, 5),
            incoming in 40.0f64..300.0,
        ) {
            let mut result = result_with(vec![bracket("full", &weights)], vec![entrant("in", incoming)]);

            let outcome = result.move_entrant(&"in".into(), Some(MoveTarget::Bracket("full".into())));

            let evicted = match outcome {
                MoveOutcome::Evicted { evicted, .. } => evicted,
                other => return Err(TestCaseError::fail(format!("no eviction: {other:?}"))),
            };
            prop_assert_eq!(result.brackets()[0].len(), 5);
            prop_assert_eq!(result.outliers().len(), 1);
            prop_assert_eq!(&result.outliers()[0].entrant.id, &evicted);

            // The kept five never spread wider than the alternative split.
            let mut all: Vec<f64> = weights.clone();
            all.push(incoming);
            all.sort_by(f64::total_cmp);
            let light = spread_percent(all[0], all[4]);
            let heavy = spread_percent(all[1], all[5]);
            let kept = result.brackets()[0].stats().weight_spread_percent;
            prop_assert!((kept - light.min(heavy)).abs() < 1e-9);
        }

        #[test]
        fn prop_stats_stay_fresh_under_moves(
            seed in 0u64..1000,
            moves in prop::collection::vec((0usize..60, 0usize..8), 1..30),
        ) {
            let entrants = RosterGenerator::new(seed).generate(60);
            let mut result = BracketEngine::run(&entrants, &EngineConfig::default());

            for (who, where_) in moves {
                let id = entrants[who].id.clone();
                let target = match where_ {
                    0 => None,
                    1 => Some(MoveTarget::NewBracket),
                    2 => Some(MoveTarget::Bracket("missing".into())),
                    n => result
                        .brackets()
                        .get(n - 3)
                        .map(|b| MoveTarget::Bracket(b.id.clone())),
                };
                result.move_entrant(&id, target);

                prop_assert_eq!(result.entrant_count(), entrants.len());
                for b in result.brackets() {
                    let (_, fresh) = recalculate(b.members().to_vec());
                    prop_assert_eq!(b.stats(), fresh);
                    prop_assert!(b.len() <= MAX_BRACKET_SIZE);
                    prop_assert!(!(b.is_empty() && b.origin() == BracketOrigin::Auto));
                }
            }
        }
    }
}

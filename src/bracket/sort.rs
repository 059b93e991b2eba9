//! Deterministic display order for brackets.
//!
//! Keys, in priority order:
//!
//! 1. Discipline precedence (Gi, then No-Gi).
//! 2. Skill-tier rank of the lightest member ([`SkillTier::rank`]).
//! 3. Division rank ([`Division::rank`]).
//! 4. Bracket name, then bracket id.
//!
//! A missing tier (empty bracket) or unranked division sorts last within
//! its level. Sorting never changes membership.
//!
//! [`SkillTier::rank`]: crate::entrant::SkillTier::rank
//! [`Division::rank`]: crate::division::Division::rank

use super::types::Bracket;
use std::cmp::Ordering;

/// Orders `None` after every `Some`.
fn ranked(rank: Option<u8>) -> (bool, u8) {
    (rank.is_none(), rank.unwrap_or(0))
}

/// Total display ordering between two brackets.
pub fn display_cmp(a: &Bracket, b: &Bracket) -> Ordering {
    let tier_rank = |b: &Bracket| ranked(b.members().first().map(|e| e.tier.rank()));

    a.discipline
        .precedence()
        .cmp(&b.discipline.precedence())
        .then_with(|| tier_rank(a).cmp(&tier_rank(b)))
        .then_with(|| ranked(a.division.rank()).cmp(&ranked(b.division.rank())))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

/// Sorts brackets into display order in place.
pub fn sort_brackets(brackets: &mut [Bracket]) {
    brackets.sort_by(display_cmp);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bracket::BracketId;
    use crate::division::Division;
    use crate::entrant::{Discipline, Entrant, Gender, SkillTier};

    fn bracket(
        id: &str,
        name: &str,
        discipline: Discipline,
        division: Division,
        tier: Option<SkillTier>,
    ) -> Bracket {
        let members = tier
            .map(|t| vec![Entrant::new(id, id, Gender::Male, 25, 150.0, t)])
            .unwrap_or_default();
        Bracket::new(BracketId::from(id), name, discipline, division, members)
    }

    fn ids(brackets: &[Bracket]) -> Vec<&str> {
        brackets.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_discipline_first() {
        let adult = Division::Adult(Gender::Male);
        let mut brackets = vec![
            bracket("nogi", "A", Discipline::NoGi, adult, Some(SkillTier::Beginner)),
            bracket("gi", "Z", Discipline::Gi, adult, Some(SkillTier::Black)),
        ];
        sort_brackets(&mut brackets);
        assert_eq!(ids(&brackets), vec!["gi", "nogi"]);
    }

    #[test]
    fn test_tier_rank_then_division() {
        let mut brackets = vec![
            bracket("purple-adult", "x", Discipline::Gi, Division::Adult(Gender::Male), Some(SkillTier::Purple)),
            bracket("white-masters", "x", Discipline::Gi, Division::MastersOne(Gender::Male), Some(SkillTier::White)),
            bracket("white-teen", "x", Discipline::Gi, Division::Teen(Gender::Male), Some(SkillTier::White)),
        ];
        sort_brackets(&mut brackets);
        assert_eq!(ids(&brackets), vec!["white-teen", "white-masters", "purple-adult"]);
    }

    #[test]
    fn test_equivalent_tiers_tie_on_rank() {
        // Blue and Intermediate share a rank, so division decides.
        let mut brackets = vec![
            bracket("blue-masters", "x", Discipline::NoGi, Division::MastersTwo(Gender::Female), Some(SkillTier::Blue)),
            bracket("inter-adult", "x", Discipline::NoGi, Division::Adult(Gender::Female), Some(SkillTier::Intermediate)),
        ];
        sort_brackets(&mut brackets);
        assert_eq!(ids(&brackets), vec!["inter-adult", "blue-masters"]);
    }

    #[test]
    fn test_unknowns_sort_last() {
        let adult = Division::Adult(Gender::Male);
        let mut brackets = vec![
            bracket("empty", "a", Discipline::Gi, adult, None),
            bracket("open", "a", Discipline::Gi, Division::Open, Some(SkillTier::White)),
            bracket("ranked", "z", Discipline::Gi, adult, Some(SkillTier::White)),
        ];
        sort_brackets(&mut brackets);
        assert_eq!(ids(&brackets), vec!["ranked", "open", "empty"]);
    }

    #[test]
    fn test_name_tiebreak() {
        let adult = Division::Adult(Gender::Male);
        let mut brackets = vec![
            bracket("b2", "Group 2", Discipline::Gi, adult, Some(SkillTier::Blue)),
            bracket("b1", "Group 1", Discipline::Gi, adult, Some(SkillTier::Blue)),
        ];
        sort_brackets(&mut brackets);
        assert_eq!(ids(&brackets), vec!["b1", "b2"]);
    }
}

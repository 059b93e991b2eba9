//! Age/gender → division mapping and display precedence.

use crate::entrant::Gender;
use std::fmt;

/// Age/gender category.
///
/// Variants are declared youngest to oldest; the derived `Ord` is only used
/// for deterministic pool iteration. Display ordering goes through
/// [`Division::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Division {
    EightUnder,
    NineToTwelve,
    Teen(Gender),
    Adult(Gender),
    MastersOne(Gender),
    MastersTwo(Gender),
    MastersThree(Gender),
    /// Neutral label for manually created brackets.
    Open,
}

/// Classifies an entrant into a division.
///
/// Total over all ages; an age of `0` lands in `8U Coed`, though such
/// entrants never reach classification in the pipeline.
pub fn classify(age: u32, gender: Gender) -> Division {
    match age {
        0..=8 => Division::EightUnder,
        9..=12 => Division::NineToTwelve,
        13..=15 => Division::Teen(gender),
        16..=34 => Division::Adult(gender),
        35..=39 => Division::MastersOne(gender),
        40..=44 => Division::MastersTwo(gender),
        _ => Division::MastersThree(gender),
    }
}

impl Division {
    /// Display precedence, youngest first. Within an age band, Male before
    /// Female. `None` for [`Division::Open`], which sorts last.
    pub fn rank(self) -> Option<u8> {
        let gender_offset = |g: Gender| match g {
            Gender::Male => 0,
            Gender::Female => 1,
        };
        match self {
            Division::EightUnder => Some(0),
            Division::NineToTwelve => Some(1),
            Division::Teen(g) => Some(2 + gender_offset(g)),
            Division::Adult(g) => Some(4 + gender_offset(g)),
            Division::MastersOne(g) => Some(6 + gender_offset(g)),
            Division::MastersTwo(g) => Some(8 + gender_offset(g)),
            Division::MastersThree(g) => Some(10 + gender_offset(g)),
            Division::Open => None,
        }
    }

    /// Adult and Masters divisions. Everything else uses the kids rules.
    pub fn is_adult(self) -> bool {
        matches!(
            self,
            Division::Adult(_)
                | Division::MastersOne(_)
                | Division::MastersTwo(_)
                | Division::MastersThree(_)
        )
    }

    /// The gender encoded in the label, if any.
    pub fn gender(self) -> Option<Gender> {
        match self {
            Division::Teen(g)
            | Division::Adult(g)
            | Division::MastersOne(g)
            | Division::MastersTwo(g)
            | Division::MastersThree(g) => Some(g),
            Division::EightUnder | Division::NineToTwelve | Division::Open => None,
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Division::EightUnder => f.write_str("8U Coed"),
            Division::NineToTwelve => f.write_str("9-12 Coed"),
            Division::Teen(g) => write!(f, "13-15 {g}"),
            Division::Adult(g) => write!(f, "Adult (16+) {g}"),
            Division::MastersOne(g) => write!(f, "Masters I (35+) {g}"),
            Division::MastersTwo(g) => write!(f, "Masters II (40+) {g}"),
            Division::MastersThree(g) => write!(f, "Masters III (45+) {g}"),
            Division::Open => f.write_str("Open"),
        }
    }
}

//! Drag-compatibility policy.

use crate::bracket::Bracket;
use crate::entrant::Entrant;

/// Youngest age admitted into an Adult or Masters bracket by drag.
pub const MIN_ADULT_DROP_AGE: u32 = 13;

/// Gate deciding whether a move may be attempted from the interface.
///
/// Looser than [`crate::engine::is_valid`]: no weight check and no precise
/// age-gap check. Manual placement may build brackets the engine would
/// never form.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragPolicy;

impl DragPolicy {
    /// Whether `entrant` may be dropped onto `bracket`.
    ///
    /// Rejects on any of:
    /// - discipline mismatch
    /// - entrant under 13 and the bracket division is Adult or Masters
    /// - the bracket division names a gender and the entrant's differs
    pub fn can_drop(entrant: &Entrant, bracket: &Bracket) -> bool {
        if entrant.discipline != bracket.discipline {
            return false;
        }
        if bracket.division.is_adult() && entrant.age < MIN_ADULT_DROP_AGE {
            return false;
        }
        match bracket.division.gender() {
            Some(gender) => gender == entrant.gender,
            None => true,
        }
    }
}

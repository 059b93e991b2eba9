//! Entrant records and demo roster generation.
//!
//! An [`Entrant`] is one registration: a person entered in one discipline.
//! The same person competing in both Gi and No-Gi appears as two entrants
//! with distinct ids.
//!
//! The taxonomies ([`Gender`], [`Discipline`], [`SkillTier`]) are closed
//! enumerations. [`SkillTier::rank`] maps the kids belt colors, the adult
//! belts, and the No-Gi experience levels onto one shared rank scale.

mod roster;
mod types;

pub use roster::RosterGenerator;
pub use types::{Discipline, Entrant, EntrantId, Gender, SkillTier};

//! Entrant data model.

use std::fmt;

/// Stable identity of an entrant.
///
/// Assigned once by the importer or generator and never changed by edits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntrantId(String);

impl EntrantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntrantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntrantId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Competition ruleset an entrant registered for.
///
/// Variant order is the display precedence: Gi brackets are listed before
/// No-Gi brackets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Discipline {
    #[default]
    Gi,
    NoGi,
}

impl Discipline {
    pub fn label(self) -> &'static str {
        match self {
            Discipline::Gi => "Gi",
            Discipline::NoGi => "No-Gi",
        }
    }

    /// Display precedence; lower sorts first.
    pub fn precedence(self) -> u8 {
        match self {
            Discipline::Gi => 0,
            Discipline::NoGi => 1,
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Skill tier, spanning three naming vocabularies.
///
/// - Kids colored belts: Grey, Yellow, Orange, Green.
/// - Adult belts: White, Blue, Purple, Brown, Black.
/// - No-Gi experience levels: Beginner, Intermediate, Advanced, Expert.
///
/// Pools never merge distinct tiers; the vocabularies only meet in
/// [`SkillTier::rank`], which orders brackets for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillTier {
    White,
    Grey,
    Yellow,
    Orange,
    Green,
    Blue,
    Purple,
    Brown,
    Black,
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillTier {
    pub const ALL: [SkillTier; 13] = [
        SkillTier::White,
        SkillTier::Grey,
        SkillTier::Yellow,
        SkillTier::Orange,
        SkillTier::Green,
        SkillTier::Blue,
        SkillTier::Purple,
        SkillTier::Brown,
        SkillTier::Black,
        SkillTier::Beginner,
        SkillTier::Intermediate,
        SkillTier::Advanced,
        SkillTier::Expert,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillTier::White => "White",
            SkillTier::Grey => "Grey",
            SkillTier::Yellow => "Yellow",
            SkillTier::Orange => "Orange",
            SkillTier::Green => "Green",
            SkillTier::Blue => "Blue",
            SkillTier::Purple => "Purple",
            SkillTier::Brown => "Brown",
            SkillTier::Black => "Black",
            SkillTier::Beginner => "Beginner",
            SkillTier::Intermediate => "Intermediate",
            SkillTier::Advanced => "Advanced",
            SkillTier::Expert => "Expert",
        }
    }

    /// Shared display rank across vocabularies.
    ///
    /// Equivalent tiers from different vocabularies share a rank:
    ///
    /// | Rank | Tiers |
    /// |------|-------|
    /// | 1 | White, Beginner |
    /// | 2–5 | Grey, Yellow, Orange, Green |
    /// | 6 | Blue, Intermediate |
    /// | 7 | Purple, Advanced |
    /// | 8 | Brown, Expert |
    /// | 9 | Black |
    pub fn rank(self) -> u8 {
        match self {
            SkillTier::White | SkillTier::Beginner => 1,
            SkillTier::Grey => 2,
            SkillTier::Yellow => 3,
            SkillTier::Orange => 4,
            SkillTier::Green => 5,
            SkillTier::Blue | SkillTier::Intermediate => 6,
            SkillTier::Purple | SkillTier::Advanced => 7,
            SkillTier::Brown | SkillTier::Expert => 8,
            SkillTier::Black => 9,
        }
    }

    /// Parses a tier label, case-insensitively. Returns `None` for labels
    /// outside the three vocabularies.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for SkillTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One contest registration.
///
/// `weight` and `age` use `0` to mean "not recorded". Such entrants are
/// never grouped automatically; see [`Entrant::is_eligible`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Entrant {
    pub id: EntrantId,
    pub name: String,
    /// Academy or team.
    pub affiliation: String,
    pub gender: Gender,
    /// Age in whole years.
    pub age: u32,
    /// Weight in a uniform unit (the ultra-heavyweight threshold assumes lbs).
    pub weight: f64,
    pub tier: SkillTier,
    pub discipline: Discipline,
    #[cfg_attr(feature = "serde", serde(default))]
    pub email: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub phone: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub notes: Option<String>,
}

impl Entrant {
    /// Creates a Gi entrant with no affiliation or contact details.
    pub fn new(
        id: impl Into<EntrantId>,
        name: impl Into<String>,
        gender: Gender,
        age: u32,
        weight: f64,
        tier: SkillTier,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            affiliation: String::new(),
            gender,
            age,
            weight,
            tier,
            discipline: Discipline::Gi,
            email: None,
            phone: None,
            notes: None,
        }
    }

    pub fn with_affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation = affiliation.into();
        self
    }

    pub fn with_discipline(mut self, discipline: Discipline) -> Self {
        self.discipline = discipline;
        self
    }

    pub fn with_contact(mut self, email: Option<String>, phone: Option<String>) -> Self {
        self.email = email;
        self.phone = phone;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Whether both weight and age are recorded.
    ///
    /// A NaN weight counts as missing.
    pub fn is_eligible(&self) -> bool {
        self.weight > 0.0 && self.age > 0
    }
}

impl From<String> for EntrantId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

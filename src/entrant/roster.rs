//! Seeded demo roster generation.

use super::types::{Discipline, Entrant, Gender, SkillTier};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: [&str; 20] = [
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "William",
    "Elizabeth", "David", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen",
];

const ACADEMIES: [&str; 10] = [
    "Gracie Barra",
    "Alliance",
    "Checkmat",
    "Atos",
    "10th Planet",
    "Renzo Gracie",
    "Carlson Gracie",
    "GF Team",
    "Unity",
    "Fabio Clemente",
];

/// Generates plausible tournament rosters for demos and benchmarks.
///
/// Output is fully determined by the seed and the builder settings.
///
/// # Examples
///
/// ```
/// use u_bracket::entrant::RosterGenerator;
///
/// let a = RosterGenerator::new(7).generate(50);
/// let b = RosterGenerator::new(7).generate(50);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct RosterGenerator {
    seed: u64,
    /// Fraction of entrants registered for No-Gi.
    no_gi_share: f64,
    /// Fraction of entrants aged 15 or under.
    kids_share: f64,
    /// Fraction of entrants with weight or age left unrecorded.
    missing_share: f64,
}

impl RosterGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            no_gi_share: 0.0,
            kids_share: 0.0,
            missing_share: 0.0,
        }
    }

    pub fn with_no_gi_share(mut self, share: f64) -> Self {
        self.no_gi_share = share.clamp(0.0, 1.0);
        self
    }

    pub fn with_kids_share(mut self, share: f64) -> Self {
        self.kids_share = share.clamp(0.0, 1.0);
        self
    }

    pub fn with_missing_share(mut self, share: f64) -> Self {
        self.missing_share = share.clamp(0.0, 1.0);
        self
    }

    /// Generates `count` entrants with ids `entrant-{seed}-{i}`.
    pub fn generate(&self, count: usize) -> Vec<Entrant> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..count).map(|i| self.entrant(i, &mut rng)).collect()
    }

    fn entrant<R: Rng>(&self, i: usize, rng: &mut R) -> Entrant {
        // Roughly 70% male, common for open tournaments.
        let gender = if rng.random::<f64>() > 0.3 {
            Gender::Male
        } else {
            Gender::Female
        };

        let is_kid = rng.random::<f64>() < self.kids_share;
        let (age, weight, belt) = if is_kid {
            kid_profile(rng)
        } else {
            adult_profile(gender, rng)
        };

        let discipline = if rng.random::<f64>() < self.no_gi_share {
            Discipline::NoGi
        } else {
            Discipline::Gi
        };
        let tier = match discipline {
            Discipline::Gi => belt,
            Discipline::NoGi => no_gi_level(belt),
        };

        let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Alex");
        let initial = char::from(b'A' + (i % 26) as u8);
        let academy = ACADEMIES.choose(rng).copied().unwrap_or_default();

        let mut entrant = Entrant::new(
            format!("entrant-{}-{i}", self.seed),
            format!("{first} {initial}."),
            gender,
            age,
            weight,
            tier,
        )
        .with_affiliation(academy)
        .with_discipline(discipline);

        if rng.random::<f64>() < self.missing_share {
            if rng.random_bool(0.5) {
                entrant.weight = 0.0;
            } else {
                entrant.age = 0;
            }
        }
        entrant
    }
}

fn adult_profile<R: Rng>(gender: Gender, rng: &mut R) -> (u32, f64, SkillTier) {
    let roll = rng.random::<f64>();
    let belt = if roll > 0.95 {
        SkillTier::Black
    } else if roll > 0.85 {
        SkillTier::Brown
    } else if roll > 0.7 {
        SkillTier::Purple
    } else if roll > 0.4 {
        SkillTier::Blue
    } else {
        SkillTier::White
    };

    let base_weight: u32 = match gender {
        Gender::Male => 140,
        Gender::Female => 110,
    };
    let weight = rng.random_range(base_weight..=base_weight + 100) as f64;

    let min_age: u32 = if belt == SkillTier::Black { 25 } else { 18 };
    let age = rng.random_range(min_age..=min_age + 25);

    (age, weight, belt)
}

fn kid_profile<R: Rng>(rng: &mut R) -> (u32, f64, SkillTier) {
    const KID_BELTS: [SkillTier; 5] = [
        SkillTier::White,
        SkillTier::Grey,
        SkillTier::Yellow,
        SkillTier::Orange,
        SkillTier::Green,
    ];
    let age = rng.random_range(5..=15u32);
    let base = 35 + (age - 5) * 8;
    let weight = rng.random_range(base..=base + 25) as f64;
    let belt = KID_BELTS.choose(rng).copied().unwrap_or(SkillTier::White);
    (age, weight, belt)
}

fn no_gi_level(belt: SkillTier) -> SkillTier {
    match belt.rank() {
        0..=5 => SkillTier::Beginner,
        6 => SkillTier::Intermediate,
        7 => SkillTier::Advanced,
        _ => SkillTier::Expert,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_count_and_ids() {
        let roster = RosterGenerator::new(42).generate(30);
        assert_eq!(roster.len(), 30);
        assert_eq!(roster[0].id.as_str(), "entrant-42-0");
        assert_eq!(roster[29].id.as_str(), "entrant-42-29");
    }

    #[test]
    fn test_generate_is_reproducible() {
        let gen = RosterGenerator::new(3).with_kids_share(0.3).with_no_gi_share(0.5);
        assert_eq!(gen.generate(40), gen.generate(40));
    }

    #[test]
    fn test_adult_ranges() {
        let roster = RosterGenerator::new(1).generate(200);
        for e in &roster {
            assert!(e.age >= 18 && e.age <= 50, "age {} out of range", e.age);
            assert!(e.weight >= 110.0 && e.weight <= 240.0, "weight {}", e.weight);
            assert_eq!(e.discipline, Discipline::Gi);
            assert!(e.is_eligible());
        }
    }

    #[test]
    fn test_no_gi_uses_experience_levels() {
        let roster = RosterGenerator::new(9).with_no_gi_share(1.0).generate(50);
        for e in &roster {
            assert_eq!(e.discipline, Discipline::NoGi);
            assert!(matches!(
                e.tier,
                SkillTier::Beginner
                    | SkillTier::Intermediate
                    | SkillTier::Advanced
                    | SkillTier::Expert
            ));
        }
    }

    #[test]
    fn test_missing_share_produces_ineligible() {
        let roster = RosterGenerator::new(5).with_missing_share(1.0).generate(20);
        assert!(roster.iter().all(|e| !e.is_eligible()));
    }
}

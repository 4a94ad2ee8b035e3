//! Synthetic student population.
//!
//! Every student draws a latent base performance in `[0.2, 0.8)`. The four
//! cognitive attributes are that base plus independent noise, so they
//! correlate with each other only through the base. The assessment score
//! tracks the cognitive mean and engagement time tracks the base, each with
//! its own noise.

use cohort_core::entities::StudentRecord;
use cohort_core::enums::Subject;
use cohort_core::errors::CoreError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::statistics::round1;

/// Population size used when nothing else is configured.
pub const DEFAULT_POPULATION: usize = 150;

const FIRST_NAMES: [&str; 57] = [
    "Emma", "Liam", "Olivia", "Noah", "Ava", "Oliver", "Isabella", "Elijah", "Sophia", "Lucas",
    "Charlotte", "Mason", "Amelia", "Logan", "Mia", "Alexander", "Harper", "Ethan", "Evelyn",
    "Jacob", "Abigail", "Michael", "Emily", "Benjamin", "Elizabeth", "Sebastian", "Sofia", "Jack",
    "Avery", "Owen", "Ella", "Theodore", "Scarlett", "Aiden", "Grace", "Samuel", "Chloe", "Joseph",
    "Victoria", "John", "Riley", "David", "Aria", "Wyatt", "Zoey", "Matthew", "Lily", "Luke",
    "Eleanor", "Asher", "Hannah", "Carter", "Lillian", "Julian", "Addison", "Grayson", "Aubrey",
];

const LAST_NAMES: [&str; 40] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright", "Scott",
    "Torres", "Nguyen", "Hill", "Flores",
];

const BASE_RANGE: std::ops::Range<f64> = 0.2..0.8;
const ATTRIBUTE_NOISE: f64 = 0.15;
const SCORE_NOISE: f64 = 10.0;
const ENGAGEMENT_NOISE: f64 = 15.0;
const MIN_ENGAGEMENT: f64 = 10.0;
const MAX_ENGAGEMENT: f64 = 120.0;

/// Generate `n` student records from `rng`.
///
/// Records are numbered `STU001`, `STU002`, ... in generation order.
///
/// # Errors
///
/// Returns [`CoreError::InvalidArgument`] if `n` is zero.
pub fn generate<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Vec<StudentRecord>, CoreError> {
    if n == 0 {
        return Err(CoreError::invalid("population size must be positive"));
    }

    let students: Vec<StudentRecord> = (1..=n).map(|seq| generate_one(seq, rng)).collect();
    tracing::debug!(count = students.len(), "generated synthetic population");
    Ok(students)
}

/// Generate `n` records from a [`StdRng`] seeded with `seed`.
///
/// The same `(n, seed)` pair always yields the same population.
///
/// # Errors
///
/// Returns [`CoreError::InvalidArgument`] if `n` is zero.
pub fn generate_seeded(n: usize, seed: u64) -> Result<Vec<StudentRecord>, CoreError> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(n, &mut rng)
}

fn generate_one<R: Rng + ?Sized>(seq: usize, rng: &mut R) -> StudentRecord {
    let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];

    let base = rng.random_range(BASE_RANGE);
    let mut attribute = || {
        let noise = rng.random_range(-ATTRIBUTE_NOISE..ATTRIBUTE_NOISE);
        round1(((base + noise) * 100.0).clamp(0.0, 100.0))
    };
    let comprehension = attribute();
    let attention = attribute();
    let focus = attribute();
    let retention = attribute();

    let cognitive_avg = (comprehension + attention + focus + retention) / 4.0;
    let assessment_score =
        round1((cognitive_avg + rng.random_range(-SCORE_NOISE..SCORE_NOISE)).clamp(0.0, 100.0));

    let engagement_time = round1(
        (base.mul_add(60.0, 30.0) + rng.random_range(-ENGAGEMENT_NOISE..ENGAGEMENT_NOISE))
            .clamp(MIN_ENGAGEMENT, MAX_ENGAGEMENT),
    );

    let class_name = Subject::ALL[rng.random_range(0..Subject::ALL.len())];

    StudentRecord {
        student_id: format!("STU{seq:03}"),
        name: format!("{first} {last}"),
        class_name,
        comprehension,
        attention,
        focus,
        retention,
        assessment_score,
        engagement_time,
    }
}

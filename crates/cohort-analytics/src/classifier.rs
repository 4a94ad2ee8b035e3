//! Two-factor persona classification.
//!
//! A record's persona depends on two ordinal levels:
//!
//! ```text
//! engagement   high: time > 60      medium: 35 < time <= 60    low: otherwise
//! performance  high: avg > 75       medium: 50 < avg <= 75     low: otherwise
//! ```
//!
//! The decision table is evaluated top to bottom, first match wins:
//!
//! ```text
//! high   / high    -> High Achiever
//! high   / medium  -> Efficient Learner
//! medium / high    -> Engaged Learner
//! medium / medium  -> Steady Performer
//! any    / low     -> Needs Support
//! (rest)           -> Developing Learner
//! ```
//!
//! Low engagement always wins over performance: a high performer with low
//! engagement is `Needs Support`, while a low performer with high or medium
//! engagement falls through to `Developing Learner`.

use cohort_core::entities::{ClassifiedStudent, StudentRecord};
use cohort_core::enums::{Level, PersonaLabel};

const HIGH_ENGAGEMENT_MINUTES: f64 = 60.0;
const MEDIUM_ENGAGEMENT_MINUTES: f64 = 35.0;
const HIGH_PERFORMANCE: f64 = 75.0;
const MEDIUM_PERFORMANCE: f64 = 50.0;

/// Engagement level for an engagement time in minutes.
#[must_use]
pub fn engagement_level(minutes: f64) -> Level {
    if minutes > HIGH_ENGAGEMENT_MINUTES {
        Level::High
    } else if minutes > MEDIUM_ENGAGEMENT_MINUTES {
        Level::Medium
    } else {
        Level::Low
    }
}

/// Performance level for a cognitive average.
#[must_use]
pub fn performance_level(cognitive_avg: f64) -> Level {
    if cognitive_avg > HIGH_PERFORMANCE {
        Level::High
    } else if cognitive_avg > MEDIUM_PERFORMANCE {
        Level::Medium
    } else {
        Level::Low
    }
}

/// The decision table itself. Total over all nine level pairs.
#[must_use]
pub const fn classify_levels(performance: Level, engagement: Level) -> PersonaLabel {
    match (performance, engagement) {
        (Level::High, Level::High) => PersonaLabel::HighAchiever,
        (Level::High, Level::Medium) => PersonaLabel::EfficientLearner,
        (Level::Medium, Level::High) => PersonaLabel::EngagedLearner,
        (Level::Medium, Level::Medium) => PersonaLabel::SteadyPerformer,
        (_, Level::Low) => PersonaLabel::NeedsSupport,
        (Level::Low, _) => PersonaLabel::DevelopingLearner,
    }
}

/// Persona for a single record.
#[must_use]
pub fn classify(record: &StudentRecord) -> PersonaLabel {
    classify_levels(
        performance_level(record.cognitive_avg()),
        engagement_level(record.engagement_time),
    )
}

/// Pair every record with its persona, preserving order.
#[must_use]
pub fn cluster(records: &[StudentRecord]) -> Vec<ClassifiedStudent> {
    records
        .iter()
        .map(|student| ClassifiedStudent {
            persona: classify(student),
            student: student.clone(),
        })
        .collect()
}

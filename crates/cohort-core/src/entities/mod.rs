//! Students, personas, and the population summary.
//!
//! Every type here is plain data with serde and `JsonSchema` derives; the
//! schema registry validates CLI output against them.

mod insights;
mod persona;
mod student;

pub use insights::{
    Correlations, Insights, PersonaCount, PredictorCorrelation, ScoreBands, ScoreRange,
};
pub use persona::{LearningPersona, PersonaStats};
pub use student::{ClassifiedStudent, StudentRecord};

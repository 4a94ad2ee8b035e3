//! Pearson correlation and population insights.
//!
//! ## Zero variance
//!
//! Pearson's r is undefined when either series is constant. [`correlation`]
//! returns `0.0` in that case instead of NaN so that consumers can plot the
//! value directly. This is a presentation choice: a caller that needs to tell
//! "no linear relation" apart from "undefined" must check the variance itself.

use cohort_core::entities::{
    Correlations, Insights, PersonaCount, PersonaStats, PredictorCorrelation, ScoreBands,
    ScoreRange, StudentRecord,
};
use cohort_core::enums::{NumericField, PersonaLabel, Predictor, ScoreBand};
use cohort_core::errors::CoreError;

use crate::classifier::classify;

/// Round to one decimal place, halves away from zero.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Pearson product-moment correlation of two equally long series.
///
/// ```text
/// r = (nΣxy − ΣxΣy) / sqrt((nΣx² − (Σx)²)(nΣy² − (Σy)²))
/// ```
///
/// Evaluated on peak-scaled, centered deviations, so large or tiny finite
/// inputs neither overflow nor underflow. Returns `0.0` when either series
/// has no variance (see the module docs). The result is clamped into
/// `[-1, 1]`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidArgument`] if either series is empty, the
/// lengths differ, or any value is NaN or infinite.
pub fn correlation(x: &[f64], y: &[f64]) -> Result<f64, CoreError> {
    if x.is_empty() || y.is_empty() {
        return Err(CoreError::invalid("correlation requires non-empty series"));
    }
    if x.len() != y.len() {
        return Err(CoreError::invalid(format!(
            "correlation requires equal lengths, got {} and {}",
            x.len(),
            y.len()
        )));
    }
    if x.iter().chain(y).any(|v| !v.is_finite()) {
        return Err(CoreError::invalid("correlation requires finite values"));
    }
    if is_constant(x) || is_constant(y) {
        return Ok(0.0);
    }

    // r is invariant under scaling and shifting, so each series is divided
    // by its peak magnitude and centered before anything is squared. Sums
    // stay finite for any finite input.
    let (x, y) = (unit_scaled(x), unit_scaled(y));
    let (mean_x, mean_y) = (mean(&x), mean(&y));
    let (cov, var_x, var_y) = x.iter().zip(&y).fold(
        (0.0, 0.0, 0.0),
        |(cov, var_x, var_y), (&xi, &yi)| {
            let (dx, dy) = (xi - mean_x, yi - mean_y);
            (dx.mul_add(dy, cov), dx.mul_add(dx, var_x), dy.mul_add(dy, var_y))
        },
    );
    let denominator = var_x.sqrt() * var_y.sqrt();

    // A near-constant series can still leave a rounding residue.
    if denominator.is_nan() || denominator <= 0.0 {
        return Ok(0.0);
    }

    Ok((cov / denominator).clamp(-1.0, 1.0))
}

/// Correlation between two fields across `records`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidArgument`] if `records` is empty.
pub fn correlate_fields(
    records: &[StudentRecord],
    x: NumericField,
    y: NumericField,
) -> Result<f64, CoreError> {
    correlation(&series(records, x), &series(records, y))
}

/// One field of every record, in record order.
#[must_use]
pub fn series(records: &[StudentRecord], field: NumericField) -> Vec<f64> {
    records.iter().map(|r| r.value(field)).collect()
}

/// Compute [`Insights`] over the full population.
///
/// Nothing is cached: every call classifies and aggregates from scratch.
///
/// # Errors
///
/// Returns [`CoreError::InvalidArgument`] if `records` is empty.
pub fn summarize(records: &[StudentRecord]) -> Result<Insights, CoreError> {
    if records.is_empty() {
        return Err(CoreError::invalid("cannot summarize an empty population"));
    }

    let scores = series(records, NumericField::AssessmentScore);
    let coefficient = |predictor: Predictor| -> Result<f64, CoreError> {
        correlation(&series(records, predictor.field()), &scores)
    };
    let correlations = Correlations {
        comprehension_to_score: coefficient(Predictor::Comprehension)?,
        attention_to_score: coefficient(Predictor::Attention)?,
        focus_to_score: coefficient(Predictor::Focus)?,
        retention_to_score: coefficient(Predictor::Retention)?,
        engagement_to_score: coefficient(Predictor::EngagementTime)?,
    };

    let persona_counts = persona_counts(records);
    let cognitive: Vec<f64> = records.iter().map(StudentRecord::cognitive_avg).collect();

    let (strongest, strongest_value) =
        first_max_by(&correlations.entries(), |(_, r)| r.abs()).unwrap_or((Predictor::ALL[0], 0.0));
    let most_common = first_max_by(&persona_counts, |entry| entry.count).unwrap_or(PersonaCount {
        persona: PersonaLabel::ALL[0],
        count: 0,
    });

    let insights = Insights {
        correlations,
        avg_score: round1(mean(&scores)),
        avg_engagement: round1(mean(&series(records, NumericField::EngagementTime))),
        avg_cognitive: round1(mean(&cognitive)),
        distinct_personas: persona_counts.iter().filter(|entry| entry.count > 0).count(),
        persona_counts,
        total_students: records.len(),
        score_range: score_range(&scores),
        score_bands: score_bands(&scores),
        top_performer_count: scores.iter().filter(|&&s| s > 80.0).count(),
        strongest_predictor: PredictorCorrelation {
            predictor: strongest,
            coefficient: strongest_value,
        },
        most_common_persona: most_common,
    };

    tracing::debug!(
        total = insights.total_students,
        avg_score = insights.avg_score,
        strongest = %insights.strongest_predictor.predictor,
        "summarized population"
    );

    Ok(insights)
}

/// Persona tallies in catalog order, zero counts included.
#[must_use]
pub fn persona_counts(records: &[StudentRecord]) -> Vec<PersonaCount> {
    let mut tally = [0usize; PersonaLabel::ALL.len()];
    for record in records {
        tally[classify(record).index()] += 1;
    }
    PersonaLabel::ALL
        .iter()
        .map(|&persona| PersonaCount {
            persona,
            count: tally[persona.index()],
        })
        .collect()
}

/// Per-persona head count, population share, and mean assessment score.
#[must_use]
pub fn persona_stats(records: &[StudentRecord]) -> Vec<PersonaStats> {
    let mut sums = [(0usize, 0.0f64); PersonaLabel::ALL.len()];
    for record in records {
        let slot = &mut sums[classify(record).index()];
        slot.0 += 1;
        slot.1 += record.assessment_score;
    }

    let total = records.len();
    PersonaLabel::ALL
        .iter()
        .map(|&persona| {
            let (count, score_sum) = sums[persona.index()];
            PersonaStats {
                persona,
                count,
                share: ratio(count, total),
                avg_score: if count == 0 {
                    0.0
                } else {
                    round1(score_sum / count_f64(count))
                },
            }
        })
        .collect()
}

/// The `k` highest-scoring records, best first.
///
/// Equal scores keep generation order.
#[must_use]
pub fn top_performers(records: &[StudentRecord], k: usize) -> Vec<&StudentRecord> {
    let mut ranked: Vec<&StudentRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.assessment_score.total_cmp(&a.assessment_score));
    ranked.truncate(k);
    ranked
}

/// Pick the item with the largest key, scanning in slice order.
///
/// Only a strictly larger key replaces the current pick, so the first of
/// several equal maxima wins. Returns `None` for an empty slice.
#[must_use]
pub fn first_max_by<T, K, F>(items: &[T], key: F) -> Option<T>
where
    T: Copy,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut iter = items.iter();
    let mut best = *iter.next()?;
    let mut best_key = key(&best);
    for item in iter {
        let candidate = key(item);
        if candidate > best_key {
            best = *item;
            best_key = candidate;
        }
    }
    Some(best)
}

fn score_range(scores: &[f64]) -> ScoreRange {
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    ScoreRange {
        min,
        max,
        spread: round1(max - min),
    }
}

fn score_bands(scores: &[f64]) -> ScoreBands {
    scores
        .iter()
        .fold(ScoreBands::default(), |mut bands, &score| {
            match ScoreBand::of(score) {
                ScoreBand::Excellent => bands.excellent += 1,
                ScoreBand::Proficient => bands.proficient += 1,
                ScoreBand::Developing => bands.developing += 1,
            }
            bands
        })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / len_f64(values)
}

/// `values` divided by their largest magnitude. Callers rule out all-zero input.
fn unit_scaled(values: &[f64]) -> Vec<f64> {
    let peak = values.iter().fold(0.0_f64, |peak, v| peak.max(v.abs()));
    values.iter().map(|v| v / peak).collect()
}

#[allow(clippy::float_cmp)]
fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|pair| pair[0] == pair[1])
}

fn len_f64(values: &[f64]) -> f64 {
    count_f64(values.len())
}

#[allow(clippy::cast_precision_loss)]
const fn count_f64(count: usize) -> f64 {
    count as f64
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        count_f64(part) / count_f64(whole)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_seeded;
    use cohort_core::enums::Subject;
    use pretty_assertions::assert_eq;

    const EPS: f64 = 1e-12;

    fn record(id: &str, cognitive: [f64; 4], score: f64, engagement: f64) -> StudentRecord {
        StudentRecord {
            student_id: id.into(),
            name: "Test Student".into(),
            class_name: Subject::Math,
            comprehension: cognitive[0],
            attention: cognitive[1],
            focus: cognitive[2],
            retention: cognitive[3],
            assessment_score: score,
            engagement_time: engagement,
        }
    }

    // --- correlation ---

    #[test]
    fn perfect_positive_relation() {
        let r = correlation(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.0, 6.0, 8.0]).unwrap();
        assert!((r - 1.0).abs() < EPS);
    }

    #[test]
    fn perfect_negative_relation() {
        let r = correlation(&[1.0, 2.0, 3.0], &[9.0, 6.0, 3.0]).unwrap();
        assert!((r + 1.0).abs() < EPS);
    }

    #[test]
    fn zero_variance_yields_zero() {
        assert_eq!(correlation(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]).unwrap(), 0.0);
        assert_eq!(correlation(&[0.1, 0.1, 0.1], &[1.0, 7.0, 3.0]).unwrap(), 0.0);
    }

    #[test]
    fn single_sample_has_no_variance() {
        assert_eq!(correlation(&[4.0], &[2.0]).unwrap(), 0.0);
    }

    #[test]
    fn self_correlation_is_one() {
        let x = [12.5, 3.1, 99.9, 47.0, 47.1, 0.0];
        assert!((correlation(&x, &x).unwrap() - 1.0).abs() < EPS);
    }

    #[test]
    fn large_magnitudes_do_not_overflow() {
        let huge = [1e200, 2e200, 3e200];
        assert!((correlation(&huge, &huge).unwrap() - 1.0).abs() < 1e-9);

        let mixed = correlation(&[1e160, 3e160, 2e160], &[1.0, 3.0, 2.0]).unwrap();
        assert!((mixed - 1.0).abs() < 1e-9);

        let inverse = correlation(&[f64::MAX, 0.0, -f64::MAX], &[1.0, 2.0, 3.0]).unwrap();
        assert!((inverse + 1.0).abs() < 1e-9);
    }

    #[test]
    fn tiny_magnitudes_keep_their_relation() {
        let r = correlation(&[1e-300, 2e-300, 4e-300], &[1.0, 2.0, 4.0]).unwrap();
        assert!((r - 1.0).abs() < 1e-9);
    }

    #[test]
    fn correlation_is_symmetric() {
        let x = [1.0, 4.5, 2.2, 8.0, 3.3];
        let y = [2.0, 1.0, 7.5, 3.0, 0.5];
        let xy = correlation(&x, &y).unwrap();
        let yx = correlation(&y, &x).unwrap();
        assert!((xy - yx).abs() < EPS);
        assert!((-1.0..=1.0).contains(&xy));
    }

    #[test]
    fn mismatched_lengths_rejected() {
        let err = correlation(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
        assert!(err.to_string().contains("equal lengths"));
    }

    #[test]
    fn empty_series_rejected() {
        assert!(correlation(&[], &[]).is_err());
        assert!(correlation(&[1.0], &[]).is_err());
    }

    #[test]
    fn non_finite_values_rejected() {
        assert!(correlation(&[1.0, f64::NAN], &[1.0, 2.0]).is_err());
        assert!(correlation(&[1.0, 2.0], &[f64::INFINITY, 2.0]).is_err());
    }

    // --- reductions ---

    #[test]
    fn first_max_keeps_earliest_tie() {
        let items = [("a", 3), ("b", 5), ("c", 5), ("d", 1)];
        assert_eq!(first_max_by(&items, |(_, v)| *v), Some(("b", 5)));
        assert_eq!(first_max_by::<(&str, i32), i32, _>(&[], |(_, v)| *v), None);
    }

    // --- summarize ---

    #[test]
    fn summarize_rejects_empty_population() {
        assert!(matches!(summarize(&[]), Err(CoreError::InvalidArgument(_))));
    }

    #[test]
    fn summarize_small_population() {
        let records = vec![
            record("STU001", [90.0, 90.0, 90.0, 90.0], 85.0, 70.0),
            record("STU002", [90.0, 90.0, 90.0, 90.0], 82.0, 20.0),
            record("STU003", [60.0, 60.0, 55.0, 65.0], 61.0, 70.0),
            record("STU004", [40.0, 40.0, 40.0, 40.0], 35.0, 50.0),
        ];

        let insights = summarize(&records).unwrap();

        assert_eq!(insights.total_students, 4);
        assert_eq!(insights.avg_score, 65.8);
        assert_eq!(insights.avg_engagement, 52.5);
        assert_eq!(insights.avg_cognitive, 70.0);
        assert_eq!(insights.persona_count(PersonaLabel::HighAchiever), 1);
        assert_eq!(insights.persona_count(PersonaLabel::NeedsSupport), 1);
        assert_eq!(insights.persona_count(PersonaLabel::EngagedLearner), 1);
        assert_eq!(insights.persona_count(PersonaLabel::DevelopingLearner), 1);
        assert_eq!(insights.distinct_personas, 4);
        assert_eq!(
            insights.most_common_persona,
            PersonaCount {
                persona: PersonaLabel::HighAchiever,
                count: 1
            }
        );
        assert_eq!(insights.score_range.min, 35.0);
        assert_eq!(insights.score_range.max, 85.0);
        assert_eq!(insights.score_range.spread, 50.0);
        assert_eq!(
            insights.score_bands,
            ScoreBands {
                excellent: 2,
                proficient: 1,
                developing: 1
            }
        );
        assert_eq!(insights.top_performer_count, 2);
    }

    #[test]
    fn strongest_predictor_uses_magnitude_and_first_tie() {
        // Every cognitive attribute equals the score, so the four tie at 1.0.
        let records: Vec<StudentRecord> = [20.0, 40.0, 60.0, 80.0]
            .iter()
            .enumerate()
            .map(|(i, &v)| record(&format!("STU{:03}", i + 1), [v; 4], v, 50.0))
            .collect();

        let insights = summarize(&records).unwrap();
        assert_eq!(insights.correlations.engagement_to_score, 0.0);
        assert_eq!(insights.strongest_predictor.predictor, Predictor::Comprehension);
        assert!((insights.strongest_predictor.coefficient - 1.0).abs() < EPS);
    }

    #[test]
    fn negative_coefficient_can_be_strongest() {
        let records = vec![
            record("STU001", [50.0, 50.0, 50.0, 50.0], 10.0, 110.0),
            record("STU002", [50.0, 50.0, 50.0, 50.0], 50.0, 60.0),
            record("STU003", [50.0, 50.0, 50.0, 50.0], 90.0, 10.0),
        ];
        let insights = summarize(&records).unwrap();
        assert_eq!(insights.strongest_predictor.predictor, Predictor::EngagementTime);
        assert!(insights.strongest_predictor.coefficient < -0.99);
    }

    #[test]
    fn persona_counts_sum_to_population() {
        let records = generate_seeded(150, 17).unwrap();
        let insights = summarize(&records).unwrap();
        let total: usize = insights.persona_counts.iter().map(|c| c.count).sum();
        assert_eq!(total, 150);
        assert_eq!(insights.persona_counts.len(), 6);
        let banded = insights.score_bands.excellent
            + insights.score_bands.proficient
            + insights.score_bands.developing;
        assert_eq!(banded, 150);
    }

    #[test]
    fn summarize_is_deterministic() {
        let records = generate_seeded(150, 5).unwrap();
        assert_eq!(summarize(&records).unwrap(), summarize(&records).unwrap());
    }

    // --- persona stats / top performers ---

    #[test]
    fn persona_stats_cover_catalog() {
        let records = vec![
            record("STU001", [90.0; 4], 80.0, 70.0),
            record("STU002", [90.0; 4], 90.0, 65.0),
            record("STU003", [40.0; 4], 30.0, 20.0),
        ];
        let stats = persona_stats(&records);

        assert_eq!(stats.len(), 6);
        assert_eq!(stats[0].persona, PersonaLabel::HighAchiever);
        assert_eq!(stats[0].count, 2);
        assert_eq!(stats[0].avg_score, 85.0);
        assert!((stats[0].share - 2.0 / 3.0).abs() < EPS);
        assert_eq!(stats[1].count, 0);
        assert_eq!(stats[1].avg_score, 0.0);
        assert_eq!(stats[5].persona, PersonaLabel::NeedsSupport);
        assert_eq!(stats[5].count, 1);
    }

    #[test]
    fn top_performers_sorted_and_stable() {
        let records = vec![
            record("STU001", [50.0; 4], 70.0, 50.0),
            record("STU002", [50.0; 4], 90.0, 50.0),
            record("STU003", [50.0; 4], 70.0, 50.0),
            record("STU004", [50.0; 4], 40.0, 50.0),
        ];
        let ids: Vec<&str> = top_performers(&records, 3)
            .iter()
            .map(|r| r.student_id.as_str())
            .collect();
        assert_eq!(ids, vec!["STU002", "STU001", "STU003"]);
        assert_eq!(top_performers(&records, 10).len(), 4);
    }

    #[test]
    fn correlate_fields_reads_named_columns() {
        let records = vec![
            record("STU001", [10.0, 0.0, 0.0, 0.0], 20.0, 50.0),
            record("STU002", [20.0, 0.0, 0.0, 0.0], 40.0, 50.0),
            record("STU003", [30.0, 0.0, 0.0, 0.0], 60.0, 50.0),
        ];
        let r = correlate_fields(
            &records,
            NumericField::Comprehension,
            NumericField::AssessmentScore,
        )
        .unwrap();
        assert!((r - 1.0).abs() < EPS);
        assert_eq!(
            correlate_fields(&records, NumericField::Attention, NumericField::AssessmentScore)
                .unwrap(),
            0.0
        );
    }

    #[test]
    fn round1_rounds_half_away_from_zero() {
        assert_eq!(round1(65.75), 65.8);
        assert_eq!(round1(12.34), 12.3);
        assert_eq!(round1(0.0), 0.0);
    }
}

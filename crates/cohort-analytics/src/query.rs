//! Search, filter, and sort over classified student records.

use std::cmp::Ordering;

use cohort_core::entities::{ClassifiedStudent, StudentRecord};
use cohort_core::enums::{PersonaLabel, SortDirection, SortField};

use crate::classifier::cluster;

/// A student listing request.
///
/// The default query returns every student ordered by assessment score,
/// best first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentQuery {
    /// Case-insensitive substring matched against name, class, and id.
    pub search: Option<String>,
    pub persona: Option<PersonaLabel>,
    pub sort: SortField,
    pub direction: SortDirection,
    pub limit: Option<usize>,
}

impl StudentQuery {
    /// Classify, filter, sort, and truncate `records`.
    ///
    /// Sorting is stable: rows with equal keys keep generation order.
    #[must_use]
    pub fn run(&self, records: &[StudentRecord]) -> Vec<ClassifiedStudent> {
        let needle = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase);

        let mut rows: Vec<ClassifiedStudent> = cluster(records)
            .into_iter()
            .filter(|row| self.persona.is_none_or(|persona| row.persona == persona))
            .filter(|row| needle.as_deref().is_none_or(|term| matches_term(&row.student, term)))
            .collect();

        rows.sort_by(|a, b| {
            let ordering = compare(&a.student, &b.student, self.sort);
            match self.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        if let Some(limit) = self.limit {
            rows.truncate(limit);
        }

        tracing::debug!(
            matched = rows.len(),
            total = records.len(),
            sort = %self.sort,
            direction = %self.direction,
            "ran student query"
        );
        rows
    }
}

fn matches_term(student: &StudentRecord, term: &str) -> bool {
    student.name.to_lowercase().contains(term)
        || student.class_name.label().to_lowercase().contains(term)
        || student.student_id.to_lowercase().contains(term)
}

fn compare(a: &StudentRecord, b: &StudentRecord, field: SortField) -> Ordering {
    if let Some(numeric) = field.numeric() {
        return a.value(numeric).total_cmp(&b.value(numeric));
    }
    match field {
        SortField::StudentId => a.student_id.to_lowercase().cmp(&b.student_id.to_lowercase()),
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        _ => a
            .class_name
            .label()
            .to_lowercase()
            .cmp(&b.class_name.label().to_lowercase()),
    }
}

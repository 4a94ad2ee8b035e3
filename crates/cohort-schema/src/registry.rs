//! Named JSON Schemas for every type `cohort` prints.
//!
//! Schemas are generated once, when the registry is built, from the
//! `JsonSchema` derives in `cohort-core`. Names are the snake_case type names,
//! so `StudentRecord` is `student_record`.

use std::collections::BTreeMap;

use cohort_core::entities::{
    ClassifiedStudent, Correlations, Insights, LearningPersona, PersonaStats, StudentRecord,
};
use cohort_core::responses::{CorrelateResponse, PersonaOverview, StudentDetailResponse};
use schemars::{JsonSchema, schema_for};
use serde_json::Value;

use crate::error::SchemaError;

fn schema_of<T: JsonSchema>() -> Value {
    schema_for!(T).to_value()
}

/// Schema lookup and validation by type name.
pub struct SchemaRegistry {
    schemas: BTreeMap<&'static str, Value>,
}

impl SchemaRegistry {
    /// Build a registry containing every entity and response schema.
    #[must_use]
    pub fn new() -> Self {
        let schemas = BTreeMap::from([
            // entities
            ("student_record", schema_of::<StudentRecord>()),
            ("classified_student", schema_of::<ClassifiedStudent>()),
            ("learning_persona", schema_of::<LearningPersona>()),
            ("persona_stats", schema_of::<PersonaStats>()),
            ("insights", schema_of::<Insights>()),
            ("correlations", schema_of::<Correlations>()),
            // responses
            ("student_detail_response", schema_of::<StudentDetailResponse>()),
            ("persona_overview", schema_of::<PersonaOverview>()),
            ("correlate_response", schema_of::<CorrelateResponse>()),
        ]);
        Self { schemas }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Check `instance` against the schema registered as `name`.
    ///
    /// # Errors
    ///
    /// [`SchemaError::NotFound`] for an unregistered name,
    /// [`SchemaError::ValidationFailed`] with every violation otherwise.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let schema = self.get(name).ok_or_else(|| SchemaError::NotFound(name.into()))?;
        let validator = jsonschema::validator_for(schema)
            .map_err(|error| SchemaError::Generation(error.to_string()))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|error| format!("{}: {error}", error.instance_path))
            .collect();

        if errors.is_empty() {
            return Ok(());
        }
        Err(SchemaError::ValidationFailed { errors })
    }

    /// Registered names in alphabetical order.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        self.schemas.keys().copied().collect()
    }

    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

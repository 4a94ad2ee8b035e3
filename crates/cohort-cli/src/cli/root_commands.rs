use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List students, with search, persona filter, and sorting.
    Students(StudentsArgs),
    /// Show one student with its persona and levels.
    Student(StudentArgs),
    /// Correlations, averages, score bands, and persona counts.
    Insights,
    /// Persona catalog joined with population statistics.
    Personas,
    /// Highest-scoring students.
    Top(TopArgs),
    /// Correlation between two numeric fields.
    Correlate(CorrelateArgs),
    /// Print JSON Schemas for output types.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct StudentsArgs {
    /// Case-insensitive match on name, class, or student id.
    #[arg(long)]
    pub search: Option<String>,
    /// Only students with this persona (e.g. `needs-support`).
    #[arg(long)]
    pub persona: Option<String>,
    /// Sort column (e.g. `assessment-score`, `name`, `student-id`).
    #[arg(long, default_value = "assessment_score")]
    pub sort: String,
    /// Sort order: asc or desc.
    #[arg(long, default_value = "desc")]
    pub order: String,
}

#[derive(Clone, Debug, Args)]
pub struct StudentArgs {
    /// Student id, e.g. STU042.
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct TopArgs {
    /// How many students to show.
    #[arg(short = 'n', long)]
    pub count: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct CorrelateArgs {
    /// First field (e.g. `attention`).
    pub x: String,
    /// Second field (e.g. `assessment-score`).
    pub y: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Registered type name. Omit to list all names.
    pub type_name: Option<String>,
}

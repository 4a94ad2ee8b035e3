use anyhow::bail;
use cohort_analytics::classifier::{classify, engagement_level, performance_level};
use cohort_analytics::statistics::round1;
use cohort_core::enums::ScoreBand;
use cohort_core::responses::StudentDetailResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StudentArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cohort student <ID>`.
pub fn handle(args: &StudentArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let detail = detail(&args.id, ctx)?;
    output(&detail, flags.format)
}

fn detail(id: &str, ctx: &AppContext) -> anyhow::Result<StudentDetailResponse> {
    let Some(record) = ctx.population.find(id.trim()) else {
        bail!(
            "no student '{id}' in a population of {}",
            ctx.population.len()
        );
    };

    let cognitive_avg = record.cognitive_avg();
    Ok(StudentDetailResponse {
        persona: classify(record),
        cognitive_avg: round1(cognitive_avg),
        performance_level: performance_level(cognitive_avg),
        engagement_level: engagement_level(record.engagement_time),
        score_band: ScoreBand::of(record.assessment_score),
        student: record.clone(),
    })
}

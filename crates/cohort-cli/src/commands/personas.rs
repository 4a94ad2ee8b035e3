use cohort_analytics::statistics::persona_stats;
use cohort_core::catalog;
use cohort_core::responses::PersonaOverview;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cohort personas`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&overview(ctx), flags.format)
}

/// Catalog entries joined with population statistics, in catalog order.
fn overview(ctx: &AppContext) -> Vec<PersonaOverview> {
    persona_stats(ctx.population.records())
        .into_iter()
        .map(|stats| {
            let persona = catalog::persona(stats.persona);
            PersonaOverview {
                persona: stats.persona,
                name: persona.name.clone(),
                description: persona.description.clone(),
                characteristics: persona.characteristics.clone(),
                count: stats.count,
                share: stats.share,
                avg_score: stats.avg_score,
                color: persona.color.clone(),
            }
        })
        .collect()
}

use cohort_analytics::classifier::classify;
use cohort_analytics::statistics::top_performers;
use cohort_core::entities::ClassifiedStudent;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TopArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cohort top`.
pub fn handle(args: &TopArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ranked(args, ctx, flags), flags.format)
}

fn ranked(args: &TopArgs, ctx: &AppContext, flags: &GlobalFlags) -> Vec<ClassifiedStudent> {
    let k = effective_limit(args.count, flags.limit, ctx.config.general.top_performers);
    top_performers(ctx.population.records(), k)
        .into_iter()
        .map(|student| ClassifiedStudent {
            persona: classify(student),
            student: student.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::ranked;
    use crate::cli::root_commands::TopArgs;
    use crate::commands::shared::test_flags;
    use crate::context::AppContext;

    #[test]
    fn defaults_to_configured_count() {
        let ctx = AppContext::for_tests(50, 17);
        let rows = ranked(&TopArgs { count: None }, &ctx, &test_flags());
        assert_eq!(rows.len(), 5);

        let best = ctx
            .population
            .records()
            .iter()
            .map(|r| r.assessment_score)
            .fold(f64::MIN, f64::max);
        assert!((rows[0].student.assessment_score - best).abs() < f64::EPSILON);
    }

    #[test]
    fn count_beats_global_limit_and_caps_at_population() {
        let ctx = AppContext::for_tests(8, 17);
        let mut flags = test_flags();
        flags.limit = Some(2);
        assert_eq!(ranked(&TopArgs { count: Some(3) }, &ctx, &flags).len(), 3);
        assert_eq!(ranked(&TopArgs { count: Some(50) }, &ctx, &flags).len(), 8);
        assert_eq!(ranked(&TopArgs { count: None }, &ctx, &flags).len(), 2);
    }
}

use cohort_analytics::query::StudentQuery;
use cohort_core::entities::ClassifiedStudent;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StudentsArgs;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cohort students`.
pub fn handle(args: &StudentsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = list(args, ctx, flags)?;
    output(&rows, flags.format)
}

fn list(
    args: &StudentsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<Vec<ClassifiedStudent>> {
    let query = StudentQuery {
        search: args.search.clone(),
        persona: args
            .persona
            .as_deref()
            .map(|raw| parse_enum(raw, "persona"))
            .transpose()?,
        sort: parse_enum(&args.sort, "sort")?,
        direction: parse_enum(&args.order, "order")?,
        limit: Some(effective_limit(
            None,
            flags.limit,
            ctx.config.general.default_limit,
        )),
    };
    Ok(query.run(ctx.population.records()))
}

#[cfg(test)]
mod tests {
    use cohort_core::enums::PersonaLabel;

    use super::list;
    use crate::cli::root_commands::StudentsArgs;
    use crate::commands::shared::test_flags;
    use crate::context::AppContext;

    fn args() -> StudentsArgs {
        StudentsArgs {
            search: None,
            persona: None,
            sort: "assessment_score".into(),
            order: "desc".into(),
        }
    }

    #[test]
    fn default_listing_is_capped_and_sorted() {
        let ctx = AppContext::for_tests(60, 4);
        let rows = list(&args(), &ctx, &test_flags()).expect("list");
        assert_eq!(rows.len(), 20);
        assert!(
            rows.windows(2)
                .all(|w| w[0].student.assessment_score >= w[1].student.assessment_score)
        );
    }

    #[test]
    fn global_limit_overrides_config() {
        let ctx = AppContext::for_tests(60, 4);
        let mut flags = test_flags();
        flags.limit = Some(3);
        assert_eq!(list(&args(), &ctx, &flags).expect("list").len(), 3);
    }

    #[test]
    fn persona_filter_accepts_hyphens() {
        let ctx = AppContext::for_tests(80, 9);
        let mut flags = test_flags();
        flags.limit = Some(500);
        let args = StudentsArgs {
            persona: Some("needs-support".into()),
            ..args()
        };
        let rows = list(&args, &ctx, &flags).expect("list");
        assert!(rows.iter().all(|r| r.persona == PersonaLabel::NeedsSupport));
    }

    #[test]
    fn bad_sort_is_an_error() {
        let ctx = AppContext::for_tests(5, 1);
        let args = StudentsArgs {
            sort: "height".into(),
            ..args()
        };
        let err = list(&args, &ctx, &test_flags()).expect_err("should fail");
        assert!(err.to_string().contains("invalid sort 'height'"));
    }
}

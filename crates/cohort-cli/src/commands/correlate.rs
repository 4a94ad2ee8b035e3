use anyhow::Context;
use cohort_analytics::statistics::correlate_fields;
use cohort_core::enums::NumericField;
use cohort_core::responses::CorrelateResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CorrelateArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cohort correlate <X> <Y>`.
pub fn handle(args: &CorrelateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&correlate(args, ctx)?, flags.format)
}

fn correlate(args: &CorrelateArgs, ctx: &AppContext) -> anyhow::Result<CorrelateResponse> {
    let x: NumericField = parse_enum(&args.x, "field")?;
    let y: NumericField = parse_enum(&args.y, "field")?;
    let records = ctx.population.records();
    let coefficient = correlate_fields(records, x, y)
        .with_context(|| format!("failed to correlate {x} with {y}"))?;

    Ok(CorrelateResponse {
        x,
        y,
        coefficient,
        samples: records.len(),
    })
}

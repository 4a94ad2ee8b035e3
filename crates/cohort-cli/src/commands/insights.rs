use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `cohort insights`. Recomputed on every call.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let insights = ctx
        .population
        .insights()
        .context("failed to summarize population")?;
    output(&insights, flags.format)
}

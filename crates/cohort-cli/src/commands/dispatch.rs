use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
///
/// `main` answers `schema` before a population exists; it is routed here too
/// so every command has a handler.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Students(args) => commands::students::handle(args, ctx, flags),
        Commands::Student(args) => commands::student::handle(args, ctx, flags),
        Commands::Insights => commands::insights::handle(ctx, flags),
        Commands::Personas => commands::personas::handle(ctx, flags),
        Commands::Top(args) => commands::top::handle(args, ctx, flags),
        Commands::Correlate(args) => commands::correlate::handle(args, ctx, flags),
        Commands::Schema(args) => commands::schema::handle(args, flags),
    }
}

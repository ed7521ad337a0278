use crate::cli::global::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Route a parsed command to its handler.
pub async fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Students => commands::roster::students(ctx, flags).await,
        Commands::Tutors => commands::roster::tutors(ctx, flags).await,
        Commands::Strategy { action } => commands::strategy::handle(action, ctx, flags).await,
        Commands::Lesson { action } => commands::lesson::handle(action, ctx, flags).await,
        Commands::Activity { action } => commands::activity::handle(action, ctx, flags).await,
        Commands::Insights(args) => commands::reflection::insights(args, ctx, flags).await,
        Commands::Reflect(args) => commands::reflection::reflect(args, ctx, flags).await,
        Commands::Health => commands::health::run(ctx, flags).await,
        Commands::Render { kind } => commands::render::handle(kind),
        Commands::Schema(args) => commands::schema::handle(args, flags),
    }
}

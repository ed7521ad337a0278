mod create;
mod gallery;

use tp_core::enums::ContentType;

use crate::cli::global::GlobalFlags;
use crate::cli::subcommands::StrategyCommands;
use crate::commands::content;
use crate::context::AppContext;

pub async fn handle(action: &StrategyCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        StrategyCommands::Create(args) => create::run(args, ctx, flags).await,
        StrategyCommands::List { student } => gallery::list(student, ctx, flags).await,
        StrategyCommands::Show(args) => gallery::show(args, ctx, flags).await,
        StrategyCommands::Versions { id } => {
            content::versions(ContentType::Strategy, id, ctx, flags).await
        }
        StrategyCommands::Save(args) => content::save(ContentType::Strategy, args, ctx, flags).await,
    }
}

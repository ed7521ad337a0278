mod chat;
mod create;
mod redeploy;

use crate::cli::global::GlobalFlags;
use crate::cli::subcommands::ActivityCommands;
use crate::context::AppContext;

pub async fn handle(action: &ActivityCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ActivityCommands::Create(args) => create::run(args, ctx, flags).await,
        ActivityCommands::Redeploy(args) => redeploy::run(args, ctx, flags).await,
        ActivityCommands::Chat(args) => chat::send(args, ctx, flags).await,
        ActivityCommands::History { id } => chat::history(id, ctx, flags).await,
    }
}

mod create;
mod gallery;

use tp_core::enums::ContentType;

use crate::cli::global::GlobalFlags;
use crate::cli::subcommands::LessonCommands;
use crate::commands::content;
use crate::context::AppContext;

pub async fn handle(action: &LessonCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        LessonCommands::Create(args) => create::run(args, ctx, flags).await,
        LessonCommands::List { student } => gallery::list(student, ctx, flags).await,
        LessonCommands::Show(args) => gallery::show(args, ctx, flags).await,
        LessonCommands::Versions { id } => content::versions(ContentType::Lesson, id, ctx, flags).await,
        LessonCommands::Save(args) => content::save(ContentType::Lesson, args, ctx, flags).await,
    }
}

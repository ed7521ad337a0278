use anyhow::Context;
use tp_core::entities::LessonRecord;
use tp_core::enums::{AgentKind, ContentType};

use crate::cli::global::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::ShowArgs;
use crate::commands::content::timestamp;
use crate::commands::shared::report::print_evaluation;
use crate::context::AppContext;
use crate::output::{Tabular, opt_cell, output, output_rows};

pub async fn list(student: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let lessons = ctx
        .client
        .lessons(student)
        .await
        .with_context(|| format!("failed to load lessons for student {student}"))?;
    output_rows(&lessons, flags.format)
}

pub async fn show(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = ctx
        .client
        .lessons(&args.student)
        .await
        .with_context(|| format!("failed to load lessons for student {}", args.student))?
        .into_iter()
        .find(|lesson| lesson.id == args.id)
        .with_context(|| format!("lesson {} not found for student {}", args.id, args.student))?;

    if args.html {
        println!("{}", tp_format::content_to_html(ContentType::Lesson, &record.content));
        return Ok(());
    }
    if flags.format != OutputFormat::Table {
        return output(&record, flags.format);
    }
    output_rows(std::slice::from_ref(&record), flags.format)?;
    println!("\nPhases: {}", record.phase_names().join(", "));
    print_evaluation(record.self_evaluation.as_ref(), AgentKind::LessonCreator);
    Ok(())
}

impl Tabular for LessonRecord {
    const HEADERS: &'static [&'static str] = &["id", "title", "strategy", "week", "score", "created"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            opt_cell(self.title.as_deref()),
            opt_cell(self.strategy_id.as_deref()),
            opt_cell(self.strategy_week_number),
            opt_cell(self.self_evaluation.as_ref().map(|e| format!("{:.1}", e.overall_score))),
            opt_cell(self.created_at.as_ref().map(timestamp)),
        ]
    }
}

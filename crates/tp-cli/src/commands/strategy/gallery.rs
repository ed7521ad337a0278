use anyhow::Context;
use tp_core::entities::StrategyRecord;
use tp_core::enums::AgentKind;

use crate::cli::global::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::ShowArgs;
use crate::commands::content::timestamp;
use crate::commands::shared::report::{print_evaluation, strategy_html};
use crate::context::AppContext;
use crate::output::{Tabular, opt_cell, output, output_rows};

pub async fn list(student: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let strategies = ctx
        .client
        .strategies(student)
        .await
        .with_context(|| format!("failed to load strategies for student {student}"))?;
    output_rows(&strategies, flags.format)
}

/// The gallery has no single-record endpoint; the record is picked out of
/// the student's list.
pub async fn show(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = ctx
        .client
        .strategies(&args.student)
        .await
        .with_context(|| format!("failed to load strategies for student {}", args.student))?
        .into_iter()
        .find(|strategy| strategy.id == args.id)
        .with_context(|| {
            format!("strategy {} not found for student {}", args.id, args.student)
        })?;

    if args.html {
        println!("{}", strategy_html(&record.content)?);
        return Ok(());
    }
    if flags.format != OutputFormat::Table {
        return output(&record, flags.format);
    }
    output_rows(std::slice::from_ref(&record), flags.format)?;
    print_evaluation(record.self_evaluation.as_ref(), AgentKind::StrategyCreator);
    Ok(())
}

impl Tabular for StrategyRecord {
    const HEADERS: &'static [&'static str] = &["id", "title", "weeks", "format", "score", "created"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            opt_cell(self.title.as_deref()),
            self.content.week_count().to_string(),
            opt_cell(self.content.format.as_deref()),
            opt_cell(self.self_evaluation.as_ref().map(|e| format!("{:.1}", e.overall_score))),
            opt_cell(self.created_at.as_ref().map(timestamp)),
        ]
    }
}

use anyhow::Context;
use serde::Serialize;
use tp_core::enums::AgentKind;
use tp_core::requests::StrategyRequest;
use tp_core::responses::StrategyResponse;

use crate::cli::global::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::StrategyCreateArgs;
use crate::commands::shared::report::{print_evaluation, strategy_html};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct CreatedStrategy<'a> {
    strategy_id: &'a str,
    weeks: u32,
    topics: String,
    sources: usize,
    score: Option<f64>,
}

impl<'a> CreatedStrategy<'a> {
    fn from_response(response: &'a StrategyResponse) -> Self {
        Self {
            strategy_id: &response.strategy_id,
            weeks: response.content.week_count(),
            topics: response.content.topics.join(", "),
            sources: response.sources.len(),
            score: response.evaluation.as_ref().map(|e| e.overall_score),
        }
    }
}

pub async fn run(args: &StrategyCreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let request = StrategyRequest {
        student_id: ctx.student(args.people.student.as_deref())?,
        tutor_id: ctx.tutor(args.people.tutor.as_deref())?,
        subject: args.subject.clone(),
        weeks: args.weeks.unwrap_or(ctx.config.defaults.strategy_weeks),
    };

    let response = Progress::spinner(&format!(
        "Planning {} weeks of {}",
        request.weeks, request.subject
    ))
    .wrap(ctx.client.create_strategy(&request))
    .await
    .context("strategy generation failed")?;

    if args.html {
        println!("{}", strategy_html(&response.content)?);
        return Ok(());
    }
    if flags.format != OutputFormat::Table {
        return output(&response, flags.format);
    }
    output(&CreatedStrategy::from_response(&response), flags.format)?;
    print_evaluation(response.evaluation.as_ref(), AgentKind::StrategyCreator);
    Ok(())
}

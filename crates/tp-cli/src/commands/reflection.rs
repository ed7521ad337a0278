use anyhow::Context;
use tp_core::enums::AgentKind;

use crate::cli::global::{GlobalFlags, OutputFormat};
use crate::cli::root_commands::{InsightsArgs, ReflectArgs};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn insights(args: &InsightsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let agent: AgentKind = parse_enum(&args.agent, "agent")?;
    let response = ctx
        .client
        .insights(agent)
        .await
        .with_context(|| format!("failed to load insights for {agent}"))?;
    if flags.format == OutputFormat::Table {
        output(&response.insights, flags.format)
    } else {
        output(&response, flags.format)
    }
}

pub async fn reflect(args: &ReflectArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let agent = args
        .agent
        .as_deref()
        .map(|raw| parse_enum::<AgentKind>(raw, "agent"))
        .transpose()?;
    let report = Progress::spinner("Analyzing tutor edits")
        .wrap(ctx.client.analyze(agent))
        .await
        .context("reflection analysis failed")?;
    tracing::info!(insights = report.total(), "reflection finished");
    output(&report, flags.format)
}

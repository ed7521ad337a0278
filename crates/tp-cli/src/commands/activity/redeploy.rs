use anyhow::Context;
use tp_core::requests::RedeployRequest;

use super::create::DeploymentSummary;
use crate::cli::global::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::RedeployArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Re-run the sandbox deployment of stored activity code. Nothing is
/// regenerated.
pub async fn run(args: &RedeployArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let request = RedeployRequest {
        activity_id: args.id.clone(),
        student_id: ctx.student(args.student.as_deref())?,
    };
    let response = Progress::spinner("Redeploying activity")
        .wrap(ctx.client.redeploy_activity(&request))
        .await
        .with_context(|| format!("failed to redeploy activity {}", args.id))?;

    if !response.deployment.succeeded() {
        tracing::warn!(activity_id = %response.activity_id, "redeployment did not come up");
    }
    if flags.format != OutputFormat::Table {
        return output(&response, flags.format);
    }
    output(
        &DeploymentSummary::new(
            Some(response.activity_id.as_str()),
            Some(&response.deployment),
            response.sandbox_url.as_deref(),
        ),
        flags.format,
    )
}

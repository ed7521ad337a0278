use anyhow::Context;

use crate::cli::global::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Print backend health; a reachable but unhealthy backend still exits
/// non-zero.
pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let health = ctx
        .client
        .health()
        .await
        .with_context(|| format!("backend at {} is unreachable", ctx.client.base_url()))?;
    output(&health, flags.format)?;
    if !health.is_healthy() {
        anyhow::bail!("backend reports status '{}'", health.status);
    }
    Ok(())
}

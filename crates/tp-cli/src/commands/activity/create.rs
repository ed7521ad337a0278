use anyhow::Context;
use serde::Serialize;
use tp_core::entities::Deployment;
use tp_core::enums::AgentKind;
use tp_core::requests::ActivityRequest;
use tp_core::responses::ActivityResponse;

use crate::cli::global::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::ActivityCreateArgs;
use crate::commands::shared::report::print_evaluation;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Table view of a generated or redeployed activity.
#[derive(Debug, Serialize)]
pub struct DeploymentSummary<'a> {
    pub activity_id: Option<&'a str>,
    pub status: &'a str,
    pub sandbox_url: Option<&'a str>,
    pub attempts: Option<u32>,
    pub error: Option<&'a str>,
}

impl<'a> DeploymentSummary<'a> {
    pub fn new(
        activity_id: Option<&'a str>,
        deployment: Option<&'a Deployment>,
        sandbox_url: Option<&'a str>,
    ) -> Self {
        Self {
            activity_id,
            status: deployment
                .and_then(|d| d.status.as_deref())
                .unwrap_or("not deployed"),
            sandbox_url: sandbox_url.or_else(|| deployment.and_then(|d| d.url.as_deref())),
            attempts: deployment.and_then(|d| d.attempts),
            error: deployment.and_then(|d| d.error.as_deref()),
        }
    }
}

pub async fn run(args: &ActivityCreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let student = ctx.student(args.people.student.as_deref())?;
    let tutor = ctx.tutor(args.people.tutor.as_deref())?;
    let defaults = &ctx.config.defaults;
    let duration = args.duration.unwrap_or(defaults.activity_duration);
    let max_attempts = args.max_attempts.unwrap_or(defaults.max_attempts);

    let request = match (&args.topic, &args.lesson, &args.phase) {
        (Some(topic), _, _) => ActivityRequest::from_topic(
            student,
            tutor,
            topic,
            args.description.clone(),
            duration,
            max_attempts,
        ),
        (None, Some(lesson), Some(phase)) => {
            check_phase(ctx, &student, lesson, phase).await?;
            ActivityRequest::from_lesson_phase(student, tutor, lesson, phase, duration, max_attempts)
        }
        _ => anyhow::bail!("an activity needs --topic, or --lesson with --phase"),
    };

    let response = Progress::spinner("Generating and deploying activity")
        .wrap(ctx.client.create_activity(&request))
        .await
        .context("activity generation failed")?;

    if args.code {
        let code = response
            .content
            .code
            .as_deref()
            .context("the activity response carried no code")?;
        println!("{code}");
        return Ok(());
    }
    if flags.format != OutputFormat::Table {
        return output(&response, flags.format);
    }
    output(&summary(&response), flags.format)?;
    print_evaluation(response.evaluation.as_ref(), AgentKind::ActivityCreator);
    Ok(())
}

fn summary(response: &ActivityResponse) -> DeploymentSummary<'_> {
    DeploymentSummary::new(
        response.activity_id.as_deref(),
        response.deployment.as_ref(),
        response.sandbox_url.as_deref(),
    )
}

/// Reject phases the lesson does not have. A lesson missing from the
/// student's gallery is left for the backend to judge.
async fn check_phase(ctx: &AppContext, student: &str, lesson_id: &str, phase: &str) -> anyhow::Result<()> {
    let lessons = ctx
        .client
        .lessons(student)
        .await
        .with_context(|| format!("failed to load lessons for student {student}"))?;
    let Some(lesson) = lessons.iter().find(|l| l.id == lesson_id) else {
        tracing::warn!(lesson_id, student, "lesson not in student's gallery; sending as given");
        return Ok(());
    };
    let phases = lesson.phase_names();
    if !phases.iter().any(|name| name == phase) {
        anyhow::bail!(
            "lesson {lesson_id} has no phase '{phase}'; choose one of: {}",
            phases.join(", ")
        );
    }
    Ok(())
}

use anyhow::Context;
use serde::Serialize;
use tp_core::enums::{AgentKind, ContentType};
use tp_core::requests::LessonRequest;
use tp_core::responses::LessonResponse;

use crate::cli::global::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::LessonCreateArgs;
use crate::commands::shared::report::print_evaluation;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct CreatedLesson<'a> {
    lesson_id: &'a str,
    title: Option<&'a str>,
    objectives: usize,
    score: Option<f64>,
}

impl<'a> CreatedLesson<'a> {
    fn from_response(response: &'a LessonResponse) -> Self {
        Self {
            lesson_id: &response.lesson_id,
            title: response.content.get("title").and_then(serde_json::Value::as_str),
            objectives: response
                .content
                .get("learning_objectives")
                .and_then(serde_json::Value::as_array)
                .map_or(0, Vec::len),
            score: response.evaluation.as_ref().map(|e| e.overall_score),
        }
    }
}

pub async fn run(args: &LessonCreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let student = ctx.student(args.people.student.as_deref())?;
    let tutor = ctx.tutor(args.people.tutor.as_deref())?;
    let duration = args.duration.unwrap_or(ctx.config.defaults.lesson_duration);

    let request = match (&args.topic, &args.strategy, args.week) {
        (Some(topic), _, _) => LessonRequest::from_topic(student, tutor, topic, duration),
        (None, Some(strategy), Some(week)) => {
            check_week(ctx, &student, strategy, week).await?;
            LessonRequest::from_strategy_week(student, tutor, strategy, week, duration)
        }
        _ => anyhow::bail!("a lesson needs --topic, or --strategy with --week"),
    };

    let response = Progress::spinner("Creating lesson")
        .wrap(ctx.client.create_lesson(&request))
        .await
        .context("lesson generation failed")?;

    if args.html {
        println!("{}", tp_format::content_to_html(ContentType::Lesson, &response.content));
        return Ok(());
    }
    if flags.format != OutputFormat::Table {
        return output(&response, flags.format);
    }
    output(&CreatedLesson::from_response(&response), flags.format)?;
    print_evaluation(response.evaluation.as_ref(), AgentKind::LessonCreator);
    Ok(())
}

/// Reject weeks past the end of the strategy. A strategy missing from the
/// student's gallery is left for the backend to judge.
async fn check_week(ctx: &AppContext, student: &str, strategy_id: &str, week: u32) -> anyhow::Result<()> {
    let strategies = ctx
        .client
        .strategies(student)
        .await
        .with_context(|| format!("failed to load strategies for student {student}"))?;
    let Some(strategy) = strategies.iter().find(|s| s.id == strategy_id) else {
        tracing::warn!(strategy_id, student, "strategy not in student's gallery; sending as given");
        return Ok(());
    };
    let weeks = strategy.content.week_count();
    if week == 0 || week > weeks {
        anyhow::bail!("week {week} is outside strategy {strategy_id}, which covers weeks 1-{weeks}");
    }
    let index = usize::try_from(week - 1).unwrap_or(usize::MAX);
    if let Some(topic) = strategy.content.topics.get(index) {
        tracing::info!(week, topic = %topic, "planning lesson from strategy week");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reads_title_and_objectives() {
        let response: LessonResponse = serde_json::from_value(serde_json::json!({
            "success": true,
            "lesson_id": "les-1",
            "content": {"title": "Halves", "learning_objectives": ["a", "b", "c"]},
            "evaluation": {"overall_score": 7.0, "criteria": {}},
        }))
        .expect("fixture decodes");
        let summary = CreatedLesson::from_response(&response);
        assert_eq!(summary.title, Some("Halves"));
        assert_eq!(summary.objectives, 3);
        assert_eq!(summary.score, Some(7.0));
    }
}

use anyhow::Context;
use serde::Serialize;
use tp_core::entities::ChatMessage;
use tp_core::requests::ChatRequest;
use tp_core::responses::ChatReply;

use crate::cli::global::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::ChatArgs;
use crate::commands::content::timestamp;
use crate::context::AppContext;
use crate::output::{Tabular, opt_cell, output, output_rows};
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct ReplySummary<'a> {
    explanation: Option<&'a str>,
    sandbox_url: Option<&'a str>,
    code_changed: bool,
}

impl<'a> From<&'a ChatReply> for ReplySummary<'a> {
    fn from(reply: &'a ChatReply) -> Self {
        Self {
            explanation: reply.explanation.as_deref(),
            sandbox_url: reply.sandbox_url.as_deref(),
            code_changed: reply.new_code.is_some(),
        }
    }
}

pub async fn send(args: &ChatArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let request = ChatRequest {
        activity_id: args.id.clone(),
        tutor_id: ctx.tutor(args.people.tutor.as_deref())?,
        student_id: ctx.student(args.people.student.as_deref())?,
        message: args.message.clone(),
    };
    let reply = Progress::spinner("Updating activity")
        .wrap(ctx.client.send_chat(&request))
        .await
        .with_context(|| format!("chat with activity {} failed", args.id))?;

    if flags.format == OutputFormat::Table {
        output(&ReplySummary::from(&reply), flags.format)
    } else {
        output(&reply, flags.format)
    }
}

pub async fn history(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let messages = ctx
        .client
        .chat_history(id)
        .await
        .with_context(|| format!("failed to load chat history of activity {id}"))?;
    output_rows(&messages, flags.format)
}

impl Tabular for ChatMessage {
    const HEADERS: &'static [&'static str] = &["time", "from", "message", "sandbox"];

    fn cells(&self) -> Vec<String> {
        vec![
            timestamp(&self.created_at),
            self.message_type.to_string(),
            self.message_content.clone(),
            opt_cell(self.sandbox_url.as_deref()),
        ]
    }
}

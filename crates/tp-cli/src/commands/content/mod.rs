//! Version history and manual edits, shared by strategies and lessons.

use anyhow::Context;
use chrono::{DateTime, Utc};
use tp_core::entities::ContentVersion;
use tp_core::enums::ContentType;
use tp_core::requests::SaveVersionRequest;

use crate::cli::global::GlobalFlags;
use crate::cli::subcommands::SaveArgs;
use crate::commands::shared::input::read_document;
use crate::context::AppContext;
use crate::output::{Tabular, opt_cell, output, output_rows};

pub async fn versions(
    kind: ContentType,
    id: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let versions = ctx
        .client
        .versions(kind, id)
        .await
        .with_context(|| format!("failed to load versions of {kind} {id}"))?;
    output_rows(&versions, flags.format)
}

/// Save edited HTML as the next version. Blank notes are rejected before
/// anything is sent.
pub async fn save(
    kind: ContentType,
    args: &SaveArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let tutor = ctx.tutor(args.tutor.as_deref())?;
    let html = read_document(args.file.as_deref())?;
    let request = SaveVersionRequest::html_edit(
        kind,
        &args.id,
        html.trim(),
        &args.notes,
        tutor,
        args.summary.clone(),
    );
    let response = ctx
        .client
        .save_version(&request)
        .await
        .with_context(|| format!("failed to save {kind} {}", args.id))?;
    output(&response, flags.format)
}

/// Compact timestamp for table cells.
#[must_use]
pub fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

impl Tabular for ContentVersion {
    const HEADERS: &'static [&'static str] = &["version", "edit", "edited_by", "created", "notes"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.version_number.to_string(),
            self.edit_type.label().to_string(),
            opt_cell(self.edited_by.as_deref()),
            timestamp(&self.created_at),
            opt_cell(self.edit_notes.as_deref().or(self.changes_summary.as_deref())),
        ]
    }
}

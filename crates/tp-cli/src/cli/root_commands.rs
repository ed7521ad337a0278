use clap::{Args, Subcommand};

use crate::cli::subcommands::{ActivityCommands, LessonCommands, StrategyCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List students.
    Students,
    /// List tutors.
    Tutors,
    /// Generate, browse, and edit learning strategies.
    Strategy {
        #[command(subcommand)]
        action: StrategyCommands,
    },
    /// Generate, browse, and edit lessons.
    Lesson {
        #[command(subcommand)]
        action: LessonCommands,
    },
    /// Generate, redeploy, and refine interactive activities.
    Activity {
        #[command(subcommand)]
        action: ActivityCommands,
    },
    /// Convert strategy markdown or lesson JSON to HTML without the backend.
    Render {
        #[command(subcommand)]
        kind: RenderKind,
    },
    /// Show what an agent has learned from tutor edits.
    Insights(InsightsArgs),
    /// Ask the backend to analyze recent edits and derive new insights.
    Reflect(ReflectArgs),
    /// Check backend health.
    Health,
    /// Print the JSON schema of a record type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Subcommand)]
pub enum RenderKind {
    /// Strategy markdown to HTML.
    Strategy(InputArgs),
    /// Lesson JSON to HTML.
    Lesson(InputArgs),
}

/// Where to read a document from.
#[derive(Clone, Debug, Args)]
pub struct InputArgs {
    /// Input file; `-` or omitted reads stdin.
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct InsightsArgs {
    /// Agent: strategy-creator, lesson-creator, or activity-creator.
    pub agent: String,
}

#[derive(Clone, Debug, Args)]
pub struct ReflectArgs {
    /// Restrict the analysis to one agent; all agents when omitted.
    #[arg(long)]
    pub agent: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Record type, e.g. `strategy`, `lesson_request`, `chat_message`.
    pub name: String,
}

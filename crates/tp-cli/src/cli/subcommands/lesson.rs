use clap::{ArgGroup, Args, Subcommand};

use super::content::{PeopleArgs, SaveArgs, ShowArgs};

#[derive(Clone, Debug, Subcommand)]
pub enum LessonCommands {
    /// Generate a lesson from a topic or from one week of a strategy.
    Create(LessonCreateArgs),
    /// List a student's past lessons.
    List {
        /// Student ID.
        student: String,
    },
    /// Show one of a student's lessons.
    Show(ShowArgs),
    /// List saved versions of a lesson, newest first.
    Versions {
        /// Lesson ID.
        id: String,
    },
    /// Save an edited lesson as a new version.
    Save(SaveArgs),
}

#[derive(Clone, Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["topic", "strategy"])))]
pub struct LessonCreateArgs {
    #[command(flatten)]
    pub people: PeopleArgs,

    /// Free-standing lesson topic.
    #[arg(long)]
    pub topic: Option<String>,

    /// Strategy to take the week's plan from.
    #[arg(long, requires = "week")]
    pub strategy: Option<String>,

    /// Week of the strategy, starting at 1.
    #[arg(long, requires = "strategy")]
    pub week: Option<u32>,

    /// Lesson length in minutes [default: configured, 60].
    #[arg(long)]
    pub duration: Option<u32>,

    /// Print the rendered HTML instead of the response.
    #[arg(long)]
    pub html: bool,
}

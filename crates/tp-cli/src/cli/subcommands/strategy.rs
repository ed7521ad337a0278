use clap::{Args, Subcommand};

use super::content::{PeopleArgs, SaveArgs, ShowArgs};

#[derive(Clone, Debug, Subcommand)]
pub enum StrategyCommands {
    /// Generate a multi-week learning strategy.
    Create(StrategyCreateArgs),
    /// List a student's past strategies.
    List {
        /// Student ID.
        student: String,
    },
    /// Show one of a student's strategies.
    Show(ShowArgs),
    /// List saved versions of a strategy, newest first.
    Versions {
        /// Strategy ID.
        id: String,
    },
    /// Save an edited strategy as a new version.
    Save(SaveArgs),
}

#[derive(Clone, Debug, Args)]
pub struct StrategyCreateArgs {
    #[command(flatten)]
    pub people: PeopleArgs,

    /// Subject to plan, e.g. "Fractions".
    #[arg(long)]
    pub subject: String,

    /// Number of weeks [default: configured, 4].
    #[arg(long)]
    pub weeks: Option<u32>,

    /// Print the rendered HTML instead of the response.
    #[arg(long)]
    pub html: bool,
}

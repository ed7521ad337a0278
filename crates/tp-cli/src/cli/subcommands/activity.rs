use clap::{ArgGroup, Args, Subcommand};

use super::content::PeopleArgs;

#[derive(Clone, Debug, Subcommand)]
pub enum ActivityCommands {
    /// Generate an interactive activity and deploy it to a sandbox.
    Create(ActivityCreateArgs),
    /// Retry the sandbox deployment of an existing activity.
    Redeploy(RedeployArgs),
    /// Ask the activity agent to change the activity's code.
    Chat(ChatArgs),
    /// Show the chat history of an activity.
    History {
        /// Activity ID.
        id: String,
    },
}

#[derive(Clone, Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["topic", "lesson"])))]
pub struct ActivityCreateArgs {
    #[command(flatten)]
    pub people: PeopleArgs,

    /// Free-standing activity topic.
    #[arg(long)]
    pub topic: Option<String>,

    /// What the activity should do.
    #[arg(long, requires = "topic")]
    pub description: Option<String>,

    /// Lesson to build the activity for.
    #[arg(long, requires = "phase")]
    pub lesson: Option<String>,

    /// Lesson phase, e.g. "Class Activities".
    #[arg(long, requires = "lesson")]
    pub phase: Option<String>,

    /// Activity length in minutes [default: configured, 20].
    #[arg(long)]
    pub duration: Option<u32>,

    /// Deployment attempts before giving up [default: configured, 1].
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Print the generated code instead of the response.
    #[arg(long)]
    pub code: bool,
}

#[derive(Clone, Debug, Args)]
pub struct RedeployArgs {
    /// Activity ID.
    pub id: String,

    /// Student ID.
    #[arg(long)]
    pub student: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ChatArgs {
    /// Activity ID.
    pub id: String,

    #[command(flatten)]
    pub people: PeopleArgs,

    /// Requested change, e.g. "add a 60 second timer".
    #[arg(long)]
    pub message: String,
}

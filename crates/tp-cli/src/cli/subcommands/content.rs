use clap::Args;

/// Student and tutor selection. Either falls back to the configured default.
#[derive(Clone, Debug, Default, Args)]
pub struct PeopleArgs {
    /// Student ID.
    #[arg(long)]
    pub student: Option<String>,

    /// Tutor ID.
    #[arg(long)]
    pub tutor: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Student who owns the content.
    pub student: String,

    /// Content ID.
    pub id: String,

    /// Print the rendered HTML instead of the record.
    #[arg(long)]
    pub html: bool,
}

/// Save an edited HTML body as a new version.
#[derive(Clone, Debug, Args)]
pub struct SaveArgs {
    /// Content ID.
    pub id: String,

    /// Editing tutor's ID.
    #[arg(long)]
    pub tutor: Option<String>,

    /// Why the content was changed.
    #[arg(long)]
    pub notes: String,

    /// Short description of the change.
    #[arg(long)]
    pub summary: Option<String>,

    /// Edited HTML; `-` or omitted reads stdin.
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,
}

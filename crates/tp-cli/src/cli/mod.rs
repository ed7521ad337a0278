pub mod global;
pub mod root_commands;
pub mod subcommands;

use clap::Parser;

use crate::cli::global::{ColorMode, GlobalFlags, OutputFormat};
use crate::cli::root_commands::Commands;

/// Generate, review, and edit personalized tutoring content.
#[derive(Clone, Debug, Parser)]
#[command(name = "tutorpilot", version, about, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format.
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Colour status words in table output.
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log backend requests and other debug detail.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Backend base URL for this invocation, overriding configuration.
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            color: self.color,
            quiet: self.quiet,
            api_url: self.api_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::cli::root_commands::RenderKind;
    use crate::cli::subcommands::{ActivityCommands, LessonCommands, StrategyCommands};

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("tutorpilot").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = parse(&["health", "--format", "table", "--api-url", "http://api:9000"])
            .expect("should parse");
        let flags = cli.global_flags();
        assert_eq!(flags.format, OutputFormat::Table);
        assert_eq!(flags.api_url.as_deref(), Some("http://api:9000"));
        assert!(matches!(cli.command, Commands::Health));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(parse(&["health", "--quiet", "--verbose"]).is_err());
    }

    #[test]
    fn strategy_create_uses_optional_ids() {
        let cli = parse(&["strategy", "create", "--subject", "Fractions", "--weeks", "6"])
            .expect("should parse");
        let Commands::Strategy { action: StrategyCommands::Create(args) } = cli.command else {
            panic!("expected strategy create");
        };
        assert_eq!(args.subject, "Fractions");
        assert_eq!(args.weeks, Some(6));
        assert!(args.people.student.is_none());
        assert!(!args.html);
    }

    #[test]
    fn strategy_save_requires_notes() {
        assert!(parse(&["strategy", "save", "strat-1", "--tutor", "t-1"]).is_err());
        let cli = parse(&["strategy", "save", "strat-1", "--notes", "shorter week 2", "--file", "-"])
            .expect("should parse");
        let Commands::Strategy { action: StrategyCommands::Save(args) } = cli.command else {
            panic!("expected strategy save");
        };
        assert_eq!(args.id, "strat-1");
        assert_eq!(args.file.as_deref(), Some("-"));
    }

    #[test]
    fn lesson_create_topic_excludes_strategy_source() {
        assert!(parse(&["lesson", "create", "--topic", "Halves", "--strategy", "s-1", "--week", "2"])
            .is_err());
        assert!(parse(&["lesson", "create", "--strategy", "s-1"]).is_err());
        assert!(parse(&["lesson", "create"]).is_err());

        let cli = parse(&["lesson", "create", "--strategy", "s-1", "--week", "2"])
            .expect("should parse");
        let Commands::Lesson { action: LessonCommands::Create(args) } = cli.command else {
            panic!("expected lesson create");
        };
        assert_eq!(args.strategy.as_deref(), Some("s-1"));
        assert_eq!(args.week, Some(2));
        assert!(args.topic.is_none());
    }

    #[test]
    fn activity_create_sources_are_exclusive() {
        assert!(parse(&["activity", "create", "--topic", "t", "--lesson", "l-1", "--phase", "Homework"])
            .is_err());
        assert!(parse(&["activity", "create", "--lesson", "l-1"]).is_err());
        assert!(parse(&["activity", "create", "--description", "x"]).is_err());

        let cli = parse(&["activity", "create", "--topic", "Halves", "--description", "drag pieces"])
            .expect("should parse");
        let Commands::Activity { action: ActivityCommands::Create(args) } = cli.command else {
            panic!("expected activity create");
        };
        assert_eq!(args.description.as_deref(), Some("drag pieces"));
        assert_eq!(args.max_attempts, None);
    }

    #[test]
    fn activity_chat_requires_message() {
        assert!(parse(&["activity", "chat", "act-1"]).is_err());
        let cli = parse(&["activity", "chat", "act-1", "--message", "add a timer"])
            .expect("should parse");
        assert!(matches!(
            cli.command,
            Commands::Activity { action: ActivityCommands::Chat(_) }
        ));
    }

    #[test]
    fn render_kinds_take_optional_file() {
        let cli = parse(&["render", "lesson", "--file", "lesson.json"]).expect("should parse");
        let Commands::Render { kind: RenderKind::Lesson(input) } = cli.command else {
            panic!("expected render lesson");
        };
        assert_eq!(input.file.as_deref(), Some("lesson.json"));
    }

    #[test]
    fn reflect_agent_is_optional() {
        let cli = parse(&["reflect"]).expect("should parse");
        assert!(matches!(cli.command, Commands::Reflect(ref args) if args.agent.is_none()));
    }
}

mod activity;
mod content;
mod lesson;
mod strategy;

pub use activity::{ActivityCommands, ActivityCreateArgs, ChatArgs, RedeployArgs};
pub use content::{SaveArgs, ShowArgs};
pub use lesson::{LessonCommands, LessonCreateArgs};
pub use strategy::{StrategyCommands, StrategyCreateArgs};

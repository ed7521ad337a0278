//! Display records mirrored from backend responses.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`. Optional
//! backend fields are `Option` or defaulted collections, so any subset of
//! fields deserializes. Open-ended payloads (generated lesson bodies, profile
//! snapshots) stay as `serde_json::Value`.

mod activity;
mod chat;
mod evaluation;
mod lesson;
mod people;
mod strategy;
mod version;

pub use activity::{ActivityContent, Deployment};
pub use chat::ChatMessage;
pub use evaluation::{CriterionScore, SelfEvaluation};
pub use lesson::LessonRecord;
pub use people::{Student, Tutor};
pub use strategy::{StrategyContent, StrategyRecord};
pub use version::ContentVersion;

//! Fallback values for command arguments the user leaves out.

use serde::{Deserialize, Serialize};

const fn default_lesson_duration() -> u32 {
    60
}

const fn default_activity_duration() -> u32 {
    20
}

const fn default_strategy_weeks() -> u32 {
    4
}

const fn default_max_attempts() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DefaultsConfig {
    /// Tutor used when `--tutor` is omitted. Empty means "must be given".
    #[serde(default)]
    pub tutor_id: String,

    /// Student used when `--student` is omitted. Empty means "must be given".
    #[serde(default)]
    pub student_id: String,

    /// Lesson length in minutes.
    #[serde(default = "default_lesson_duration")]
    pub lesson_duration: u32,

    /// Activity length in minutes.
    #[serde(default = "default_activity_duration")]
    pub activity_duration: u32,

    /// Strategy length in weeks.
    #[serde(default = "default_strategy_weeks")]
    pub strategy_weeks: u32,

    /// Deployment attempts per generated activity.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            tutor_id: String::new(),
            student_id: String::new(),
            lesson_duration: default_lesson_duration(),
            activity_duration: default_activity_duration(),
            strategy_weeks: default_strategy_weeks(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl DefaultsConfig {
    /// The explicit tutor id, else the configured one, else `None`.
    #[must_use]
    pub fn tutor(&self, explicit: Option<&str>) -> Option<String> {
        pick(explicit, &self.tutor_id)
    }

    /// The explicit student id, else the configured one, else `None`.
    #[must_use]
    pub fn student(&self, explicit: Option<&str>) -> Option<String> {
        pick(explicit, &self.student_id)
    }
}

fn pick(explicit: Option<&str>, configured: &str) -> Option<String> {
    explicit
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .or_else(|| Some(configured.trim()).filter(|id| !id.is_empty()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = DefaultsConfig::default();
        assert!(config.tutor_id.is_empty());
        assert!(config.student_id.is_empty());
        assert_eq!(config.lesson_duration, 60);
        assert_eq!(config.activity_duration, 20);
        assert_eq!(config.strategy_weeks, 4);
        assert_eq!(config.max_attempts, 1);
    }

    #[test]
    fn explicit_id_wins_over_configured() {
        let config = DefaultsConfig {
            tutor_id: "tut-configured".into(),
            ..DefaultsConfig::default()
        };
        assert_eq!(config.tutor(Some("tut-flag")).as_deref(), Some("tut-flag"));
        assert_eq!(config.tutor(None).as_deref(), Some("tut-configured"));
        assert_eq!(config.tutor(Some("  ")).as_deref(), Some("tut-configured"));
    }

    #[test]
    fn nothing_configured_yields_none() {
        let config = DefaultsConfig::default();
        assert_eq!(config.student(None), None);
        assert_eq!(config.student(Some("stu-1")).as_deref(), Some("stu-1"));
    }
}

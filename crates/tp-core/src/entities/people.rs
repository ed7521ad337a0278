use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A learner, as listed by `GET /api/v1/data/students`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Student {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub learning_style: Option<String>,
}

/// A tutor, as listed by `GET /api/v1/data/tutors`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Tutor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub teaching_style: Option<String>,
    #[serde(default)]
    pub education_system: Option<String>,
}

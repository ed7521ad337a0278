//! JSON Schema lookup for the record types, by snake_case name.

use schemars::schema_for;
use serde_json::Value;

use crate::entities::{
    ChatMessage, ContentVersion, LessonRecord, SelfEvaluation, StrategyRecord, Student, Tutor,
};
use crate::errors::CoreError;
use crate::requests::{
    ActivityRequest, ChatRequest, LessonRequest, RedeployRequest, SaveVersionRequest,
    StrategyRequest,
};
use crate::responses::{
    ActivityResponse, ChatReply, LessonResponse, RedeployResponse, SaveVersionResponse,
    StrategyResponse,
};

/// Names accepted by [`schema_for_name`].
pub const SCHEMA_NAMES: &[&str] = &[
    "student",
    "tutor",
    "strategy",
    "lesson",
    "self_evaluation",
    "content_version",
    "chat_message",
    "strategy_request",
    "lesson_request",
    "activity_request",
    "redeploy_request",
    "chat_request",
    "save_version_request",
    "strategy_response",
    "lesson_response",
    "activity_response",
    "redeploy_response",
    "chat_reply",
    "save_version_response",
];

/// Generate the JSON Schema of a registered record type.
pub fn schema_for_name(name: &str) -> Result<Value, CoreError> {
    let schema = match name.replace('-', "_").as_str() {
        "student" => schema_for!(Student),
        "tutor" => schema_for!(Tutor),
        "strategy" => schema_for!(StrategyRecord),
        "lesson" => schema_for!(LessonRecord),
        "self_evaluation" => schema_for!(SelfEvaluation),
        "content_version" => schema_for!(ContentVersion),
        "chat_message" => schema_for!(ChatMessage),
        "strategy_request" => schema_for!(StrategyRequest),
        "lesson_request" => schema_for!(LessonRequest),
        "activity_request" => schema_for!(ActivityRequest),
        "redeploy_request" => schema_for!(RedeployRequest),
        "chat_request" => schema_for!(ChatRequest),
        "save_version_request" => schema_for!(SaveVersionRequest),
        "strategy_response" => schema_for!(StrategyResponse),
        "lesson_response" => schema_for!(LessonResponse),
        "activity_response" => schema_for!(ActivityResponse),
        "redeploy_response" => schema_for!(RedeployResponse),
        "chat_reply" => schema_for!(ChatReply),
        "save_version_response" => schema_for!(SaveVersionResponse),
        _ => return Err(CoreError::UnknownType(name.to_string())),
    };
    Ok(schema.to_value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_name_resolves() {
        for name in SCHEMA_NAMES {
            let schema = schema_for_name(name).unwrap();
            assert!(schema.is_object(), "{name} should produce an object schema");
        }
    }

    #[test]
    fn hyphenated_names_are_accepted() {
        assert!(schema_for_name("content-version").is_ok());
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = schema_for_name("homework").unwrap_err();
        assert!(matches!(err, CoreError::UnknownType(_)));
    }
}

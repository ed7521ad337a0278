use serde::de::DeserializeOwned;

/// Parse a snake_case enum from user input, accepting kebab-case too.
pub fn parse_enum<T: DeserializeOwned>(raw: &str, field: &str) -> anyhow::Result<T> {
    let normalized = raw.trim().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use tp_core::enums::{AgentKind, ContentType};

    use super::parse_enum;

    #[test]
    fn accepts_kebab_and_snake_case() {
        let kebab: AgentKind = parse_enum("lesson-creator", "agent").expect("should parse");
        let snake: AgentKind = parse_enum("lesson_creator", "agent").expect("should parse");
        assert_eq!(kebab, AgentKind::LessonCreator);
        assert_eq!(snake, AgentKind::LessonCreator);
    }

    #[test]
    fn rejects_unknown_variant_with_field_name() {
        let error = parse_enum::<ContentType>("activity", "content type").expect_err("should fail");
        assert!(error.to_string().starts_with("invalid content type 'activity'"));
    }
}

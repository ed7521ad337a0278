use serde_json::Value;
use tp_core::enums::ContentType;

use crate::{lesson_to_html, strategy_to_html};

/// Render stored content of either kind.
///
/// Content saved from the editor arrives as `{"content": "<html>", "format":
/// "html"}` and is passed through unchanged. Anything else goes through the
/// formatter for its kind.
#[must_use]
pub fn content_to_html(kind: ContentType, content: &Value) -> String {
    if let Some(html) = saved_html(content) {
        return html.to_string();
    }
    match kind {
        ContentType::Lesson => lesson_to_html(content),
        ContentType::Strategy => {
            let markdown = content
                .as_str()
                .or_else(|| content.get("content").and_then(Value::as_str));
            markdown.map_or_else(
                || {
                    tracing::warn!("strategy content has no markdown body");
                    String::new()
                },
                strategy_to_html,
            )
        }
    }
}

fn saved_html(content: &Value) -> Option<&str> {
    if content.get("format").and_then(Value::as_str) != Some("html") {
        return None;
    }
    content.get("content").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn saved_html_passes_through() {
        let saved = json!({"content": "<h1>Edited</h1>", "format": "html"});
        assert_eq!(content_to_html(ContentType::Lesson, &saved), "<h1>Edited</h1>");
        assert_eq!(content_to_html(ContentType::Strategy, &saved), "<h1>Edited</h1>");
    }

    #[test]
    fn strategy_markdown_is_formatted() {
        let generated = json!({"content": "# Plan\n- a", "format": "markdown"});
        assert_eq!(
            content_to_html(ContentType::Strategy, &generated),
            "<h1>Plan</h1><ul><li>a</li></ul>"
        );
        assert_eq!(
            content_to_html(ContentType::Strategy, &json!("## Week")),
            "<h2>Week</h2>"
        );
    }

    #[test]
    fn strategy_without_body_is_empty() {
        assert_eq!(content_to_html(ContentType::Strategy, &json!({"weeks": 4})), "");
    }

    #[test]
    fn lesson_object_is_formatted() {
        assert_eq!(
            content_to_html(ContentType::Lesson, &json!({"title": "T"})),
            "<h1>T</h1>"
        );
    }
}

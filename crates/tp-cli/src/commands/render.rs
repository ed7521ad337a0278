use anyhow::Context;
use serde_json::Value;

use crate::cli::root_commands::RenderKind;
use crate::commands::shared::input::read_document;

/// Print the HTML for a local strategy or lesson document.
pub fn handle(kind: &RenderKind) -> anyhow::Result<()> {
    let html = match kind {
        RenderKind::Strategy(input) => {
            tp_format::strategy_to_html(&read_document(input.file.as_deref())?)
        }
        RenderKind::Lesson(input) => render_lesson(&read_document(input.file.as_deref())?)?,
    };
    println!("{html}");
    Ok(())
}

fn render_lesson(text: &str) -> anyhow::Result<String> {
    let lesson: Value = serde_json::from_str(text).context("lesson input is not valid JSON")?;
    Ok(tp_format::lesson_to_html(&lesson))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::render_lesson;

    #[test]
    fn lesson_json_renders_title() {
        assert_eq!(render_lesson(r#"{"title": "T"}"#).expect("valid"), "<h1>T</h1>");
    }

    #[test]
    fn invalid_lesson_json_is_an_error() {
        let error = render_lesson("# not json").expect_err("should fail");
        assert_eq!(error.to_string(), "lesson input is not valid JSON");
    }
}

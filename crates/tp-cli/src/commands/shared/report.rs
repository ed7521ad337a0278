use tp_core::entities::{SelfEvaluation, StrategyContent};
use tp_core::enums::{AgentKind, ContentType};
use tp_format::evaluation::render_report;

/// Print the self-evaluation report under a table summary.
pub fn print_evaluation(evaluation: Option<&SelfEvaluation>, agent: AgentKind) {
    match evaluation {
        Some(evaluation) => println!("\n{}", render_report(evaluation, agent.display_name())),
        None => tracing::debug!(%agent, "response carried no self-evaluation"),
    }
}

/// HTML for a strategy body, generated markdown or editor-saved markup.
pub fn strategy_html(content: &StrategyContent) -> anyhow::Result<String> {
    let stored = serde_json::to_value(content)?;
    Ok(tp_format::content_to_html(ContentType::Strategy, &stored))
}

#[cfg(test)]
mod tests {
    use super::strategy_html;
    use tp_core::entities::StrategyContent;

    #[test]
    fn saved_markup_is_not_reformatted() {
        let saved = StrategyContent {
            format: Some("html".into()),
            content: "<p>**kept**</p>".into(),
            ..StrategyContent::default()
        };
        assert_eq!(strategy_html(&saved).expect("renders"), "<p>**kept**</p>");

        let generated = StrategyContent {
            format: Some("markdown".into()),
            content: "# Plan".into(),
            ..StrategyContent::default()
        };
        assert_eq!(strategy_html(&generated).expect("renders"), "<h1>Plan</h1>");
    }
}

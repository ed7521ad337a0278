//! Backend health and learning-insight endpoints.

use tp_core::enums::AgentKind;
use tp_core::responses::{HealthStatus, InsightsResponse, ReflectionReport};

use crate::{ClientError, TutorClient};

impl TutorClient {
    /// Check `GET /health`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the backend is unreachable or answers with
    /// a non-success status.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        self.get_json("/health").await
    }

    /// Stored learning insights for one agent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the backend returns a
    /// non-success status, or the response cannot be decoded.
    pub async fn insights(&self, agent: AgentKind) -> Result<InsightsResponse, ClientError> {
        let path = format!("/api/v1/reflection/insights/{agent}");
        self.get_json(&path).await
    }

    /// Run reflection analysis for one agent, or for all agents when `None`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::insights`].
    pub async fn analyze(&self, agent: Option<AgentKind>) -> Result<ReflectionReport, ClientError> {
        let path = analyze_path(agent);
        let report: ReflectionReport = self.post_empty(&path).await?;
        tracing::info!(insights = report.total(), "reflection analysis finished");
        Ok(report)
    }
}

fn analyze_path(agent: Option<AgentKind>) -> String {
    agent.map_or_else(
        || "/api/v1/reflection/analyze".to_string(),
        |agent| format!("/api/v1/reflection/analyze?agent_type={agent}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn analyze_path_with_and_without_agent() {
        assert_eq!(analyze_path(None), "/api/v1/reflection/analyze");
        assert_eq!(
            analyze_path(Some(AgentKind::LessonCreator)),
            "/api/v1/reflection/analyze?agent_type=lesson_creator"
        );
    }

    #[test]
    fn parse_health() {
        let health: HealthStatus = serde_json::from_str(
            r#"{"status": "healthy", "environment": "development", "weave_enabled": true}"#,
        )
        .unwrap();
        assert!(health.is_healthy());
        assert_eq!(health.environment.as_deref(), Some("development"));
    }

    #[test]
    fn parse_insights() {
        let resp: InsightsResponse = serde_json::from_str(
            r#"{"success": true, "agent_type": "strategy_creator", "insights": [{"insight": "Shorter weeks"}]}"#,
        )
        .unwrap();
        assert_eq!(resp.insights.len(), 1);
    }
}

//! Content generation endpoints.
//!
//! Each call runs a backend agent end to end (research, generation,
//! self-evaluation, and for activities a sandbox deployment), so these
//! requests routinely take minutes.

use tp_core::requests::{ActivityRequest, LessonRequest, RedeployRequest, StrategyRequest};
use tp_core::responses::{ActivityResponse, LessonResponse, RedeployResponse, StrategyResponse};

use crate::{ClientError, TutorClient};

impl TutorClient {
    /// Generate a multi-week learning strategy.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidRequest`] if the request fails local
    /// validation, otherwise any transport, status, or decode error.
    pub async fn create_strategy(
        &self,
        request: &StrategyRequest,
    ) -> Result<StrategyResponse, ClientError> {
        request.validate()?;
        let response: StrategyResponse =
            self.post_json("/api/v1/agents/strategy", request).await?;
        tracing::info!(strategy_id = %response.strategy_id, "strategy generated");
        Ok(response)
    }

    /// Generate a lesson from a topic or from one week of a strategy.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create_strategy`].
    pub async fn create_lesson(&self, request: &LessonRequest) -> Result<LessonResponse, ClientError> {
        request.validate()?;
        let response: LessonResponse = self.post_json("/api/v1/agents/lesson", request).await?;
        tracing::info!(lesson_id = %response.lesson_id, "lesson generated");
        Ok(response)
    }

    /// Generate an interactive activity and deploy it to a sandbox.
    ///
    /// A failed deployment is not an error: the response carries the
    /// deployment status, and [`Self::redeploy_activity`] can retry it.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create_strategy`].
    pub async fn create_activity(
        &self,
        request: &ActivityRequest,
    ) -> Result<ActivityResponse, ClientError> {
        request.validate()?;
        let response: ActivityResponse =
            self.post_json("/api/v1/agents/activity", request).await?;
        if let Some(deployment) = response
            .deployment
            .as_ref()
            .filter(|deployment| !deployment.succeeded())
        {
            tracing::warn!(
                activity_id = response.activity_id.as_deref().unwrap_or_default(),
                status = deployment.status.as_deref().unwrap_or("unknown"),
                error = deployment.error.as_deref().unwrap_or_default(),
                "activity generated but deployment failed"
            );
        }
        Ok(response)
    }

    /// Re-deploy an existing activity's code to a fresh sandbox without
    /// regenerating it.
    ///
    /// # Errors
    ///
    /// Same as [`Self::create_strategy`].
    pub async fn redeploy_activity(
        &self,
        request: &RedeployRequest,
    ) -> Result<RedeployResponse, ClientError> {
        request.validate()?;
        self.post_json("/api/v1/agents/activity/redeploy", request)
            .await
    }
}

//! Tutor edit history of strategies and lessons.

use tp_core::entities::ContentVersion;
use tp_core::enums::ContentType;
use tp_core::requests::SaveVersionRequest;
use tp_core::responses::SaveVersionResponse;

use crate::{ClientError, TutorClient, segment};

#[derive(serde::Deserialize)]
struct VersionsEnvelope {
    #[serde(default)]
    versions: Vec<ContentVersion>,
}

impl TutorClient {
    /// Save a tutor's edit as a new version.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidRequest`] when the edit notes are blank
    /// or the body is empty, otherwise any transport, status, or decode error.
    pub async fn save_version(
        &self,
        request: &SaveVersionRequest,
    ) -> Result<SaveVersionResponse, ClientError> {
        request.validate()?;
        let response: SaveVersionResponse =
            self.post_json("/api/v1/content/save-version", request).await?;
        tracing::info!(
            content_type = %request.content_type,
            content_id = %request.content_id,
            version = response.version_number,
            "version saved"
        );
        Ok(response)
    }

    /// All versions of one strategy or lesson, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the backend returns a
    /// non-success status, or the response cannot be decoded.
    pub async fn versions(
        &self,
        content_type: ContentType,
        content_id: &str,
    ) -> Result<Vec<ContentVersion>, ClientError> {
        let path = format!(
            "/api/v1/content/versions/{content_type}/{}",
            segment(content_id)
        );
        let data: VersionsEnvelope = self.get_json(&path).await?;
        Ok(data.versions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tp_core::enums::EditType;

    const FIXTURE: &str = r##"{
        "success": true,
        "versions": [
            {
                "id": "ver-2",
                "content_type": "strategy",
                "content_id": "strat-1",
                "version_number": 2,
                "content": {"content": "<h1>Plan</h1>", "format": "html"},
                "changes_summary": "Tutor edited strategy",
                "edit_type": "manual_edit",
                "edit_notes": "Shortened week 3",
                "edited_by": "tut-1",
                "created_at": "2025-07-14T16:45:00+00:00"
            },
            {
                "id": "ver-1",
                "content_type": "strategy",
                "content_id": "strat-1",
                "version_number": 1,
                "content": {"content": "# Plan", "format": "markdown"},
                "edit_type": "ai_generated",
                "created_at": "2025-07-12T10:15:30+00:00"
            }
        ],
        "total_versions": 2
    }"##;

    #[test]
    fn parse_versions_envelope() {
        let data: VersionsEnvelope = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(data.versions.len(), 2);
        assert_eq!(data.versions[0].edit_type, EditType::ManualEdit);
        assert_eq!(data.versions[1].edit_type, EditType::AiGenerated);
        assert!(data.versions[1].edit_notes.is_none());
    }

    #[test]
    fn parse_save_response() {
        let resp: SaveVersionResponse = serde_json::from_str(
            r#"{"success": true, "version_number": 3, "message": "Version 3 saved", "edit_notes": "Too long"}"#,
        )
        .unwrap();
        assert_eq!(resp.version_number, 3);
    }

    #[tokio::test]
    async fn blank_notes_never_reach_the_backend() {
        let client = TutorClient::new(&tp_config::ApiConfig::default()).unwrap();
        let request = SaveVersionRequest::html_edit(
            ContentType::Lesson,
            "les-1",
            "<h1>Lesson</h1>",
            "   ",
            "tut-1",
            None,
        );
        let err = client.save_version(&request).await.unwrap_err();
        assert!(err.to_string().contains("edit notes are required"), "{err}");
    }
}

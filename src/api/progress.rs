//! Per-content completion records.

use super::{decode_list, ApiClient, ApiError};
use crate::models::content::{NewProgress, Progress};

impl ApiClient {
    /// Existing progress record for (enrollment, content), if any. Duplicates
    /// should not exist; the first record wins.
    pub async fn find_progress(
        &self,
        enrollment_id: i64,
        content_id: i64,
    ) -> Result<Option<Progress>, ApiError> {
        let value = self
            .get_value(
                "/progress/",
                &[
                    ("enrollment", enrollment_id.to_string()),
                    ("content", content_id.to_string()),
                ],
            )
            .await?;
        let mut list: Vec<Progress> = decode_list(value);
        if list.is_empty() {
            Ok(None)
        } else {
            Ok(Some(list.remove(0)))
        }
    }

    pub async fn create_progress(&self, body: &NewProgress) -> Result<(), ApiError> {
        self.post_value("/progress/", body).await?;
        Ok(())
    }

    /// Full-record update via `PUT /progress/{id}/`.
    pub async fn update_progress(&self, record: &Progress) -> Result<(), ApiError> {
        self.put_value(&format!("/progress/{}/", record.id), record)
            .await?;
        Ok(())
    }
}

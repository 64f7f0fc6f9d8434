//! Course endpoints: catalog listing, detail, and admin creation.

use tracing::warn;

use super::{decode_list, ApiClient, ApiError};
use crate::models::course::{Course, NewCourse};

impl ApiClient {
    /// Active courses for the catalog view.
    pub async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        let value = self
            .get_value("/courses/", &[("is_active", "true".to_string())])
            .await?;
        Ok(decode_list(value))
    }

    /// A single course, or `None` when the server does not know the id or the
    /// payload is unusable.
    pub async fn get_course(&self, id: i64) -> Result<Option<Course>, ApiError> {
        let value = match self.get_value(&format!("/courses/{id}/"), &[]).await {
            Ok(v) => v,
            Err(ApiError::Server { status: 404, .. }) => return Ok(None),
            Err(e) => return Err(e),
        };
        match serde_json::from_value(value) {
            Ok(course) => Ok(Some(course)),
            Err(e) => {
                warn!("course payload did not parse, treating as not found: {e}");
                Ok(None)
            }
        }
    }

    /// Admin course creation.
    pub async fn create_course(&self, body: &NewCourse) -> Result<(), ApiError> {
        self.post_value("/courses/", body).await?;
        Ok(())
    }
}

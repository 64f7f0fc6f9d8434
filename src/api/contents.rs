//! Course content listing: `GET /contents/?course={id}`.

use super::{decode_list, ApiClient, ApiError};
use crate::models::content::Content;

impl ApiClient {
    pub async fn list_contents(&self, course_id: i64) -> Result<Vec<Content>, ApiError> {
        let value = self
            .get_value("/contents/", &[("course", course_id.to_string())])
            .await?;
        Ok(decode_list(value))
    }
}

//! Enrollment endpoints: listing, creation, and the admin approve/reject
//! transitions.

use serde_json::json;

use super::{decode_list, ApiClient, ApiError};
use crate::models::enrollment::{Enrollment, NewEnrollment, PendingApproval};

impl ApiClient {
    /// Current student's enrollment records for one course.
    pub async fn enrollments_for_course(
        &self,
        course_id: i64,
    ) -> Result<Vec<Enrollment>, ApiError> {
        let value = self
            .get_value("/enrollments/", &[("course", course_id.to_string())])
            .await?;
        Ok(decode_list(value))
    }

    /// All enrollment records for the current student.
    pub async fn student_enrollments(&self) -> Result<Vec<Enrollment>, ApiError> {
        let value = self
            .get_value("/enrollments/student_enrollments/", &[])
            .await?;
        Ok(decode_list(value))
    }

    /// Pending enrollments for courses owned by the current admin.
    pub async fn pending_approvals(&self) -> Result<Vec<PendingApproval>, ApiError> {
        let value = self
            .get_value("/enrollments/pending_approvals/", &[])
            .await?;
        Ok(decode_list(value))
    }

    /// Request enrollment. The caller resolves the student id from the
    /// session; the server then holds a pending record.
    pub async fn create_enrollment(&self, body: &NewEnrollment) -> Result<(), ApiError> {
        self.post_value("/enrollments/", body).await?;
        Ok(())
    }

    pub async fn approve_enrollment(&self, id: i64) -> Result<(), ApiError> {
        self.post_value(&format!("/enrollments/{id}/approve/"), &json!({}))
            .await?;
        Ok(())
    }

    pub async fn reject_enrollment(&self, id: i64) -> Result<(), ApiError> {
        self.post_value(&format!("/enrollments/{id}/reject/"), &json!({}))
            .await?;
        Ok(())
    }
}

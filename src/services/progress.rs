//! Marking course content completed.
//!
//! This is the one dependent operation chain in the client: the enrollment
//! must be resolved before the progress mutation can be issued, so the two
//! steps are sequenced rather than joined.

use anyhow::bail;
use chrono::Utc;

use crate::api::ApiClient;
use crate::models::content::NewProgress;
use crate::models::enrollment::CourseAccess;

pub struct ProgressService;

impl ProgressService {
    pub async fn mark_completed(
        api: &ApiClient,
        course_id: i64,
        content_id: i64,
    ) -> anyhow::Result<()> {
        let records = api.enrollments_for_course(course_id).await?;
        let (access, winner) = CourseAccess::resolve(course_id, &records);
        let enrollment = match (access, winner) {
            (CourseAccess::Approved, Some(e)) => e,
            _ => bail!("you are not enrolled in this course (or not yet approved)"),
        };

        match api.find_progress(enrollment.id, content_id).await? {
            Some(mut existing) => {
                existing.is_completed = true;
                existing.completed_at = Some(Utc::now());
                api.update_progress(&existing).await?;
            }
            None => {
                api.create_progress(&NewProgress {
                    enrollment: enrollment.id,
                    content: content_id,
                    is_completed: true,
                    completed_at: Utc::now(),
                })
                .await?;
            }
        }
        Ok(())
    }
}

//! Course view assembly and admin course creation.

use crate::api::ApiClient;
use crate::models::course::NewCourse;
use crate::views::catalog::CatalogView;
use crate::views::course_detail::{CourseDetailLoader, CourseDetailView};
use crate::views::dashboard::DashboardView;

pub struct CourseService;

impl CourseService {
    /// Student catalog: active courses and the student's enrollments, fetched
    /// concurrently.
    pub async fn browse(api: &ApiClient) -> anyhow::Result<CatalogView> {
        let (courses, enrollments) =
            tokio::join!(api.list_courses(), api.student_enrollments());
        Ok(CatalogView::assemble(courses?, enrollments?))
    }

    /// Course detail: three independent fetches joined into one view. The
    /// loader makes the result insensitive to completion order.
    pub async fn detail(api: &ApiClient, course_id: i64) -> anyhow::Result<CourseDetailView> {
        let (course, contents, enrollments) = tokio::join!(
            api.get_course(course_id),
            api.list_contents(course_id),
            api.enrollments_for_course(course_id),
        );
        let mut loader = CourseDetailLoader::new();
        loader.apply_course(course?);
        loader.apply_contents(contents?);
        loader.apply_enrollments(enrollments?);
        Ok(loader.finish())
    }

    /// Admin dashboard: own courses plus the pending approval queue.
    pub async fn dashboard(api: &ApiClient) -> anyhow::Result<DashboardView> {
        let (courses, pending) = tokio::join!(api.list_courses(), api.pending_approvals());
        Ok(DashboardView::assemble(courses?, pending?))
    }

    pub async fn create(api: &ApiClient, course: NewCourse) -> anyhow::Result<()> {
        api.create_course(&course).await?;
        Ok(())
    }
}

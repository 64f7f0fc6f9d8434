//! Course detail view: course header, content list, and the enrollment gate.
//!
//! The three fetches feeding this view (course, contents, enrollment records)
//! run concurrently and may resolve in any order. The loader therefore only
//! stores each result in its own slot; `finish` computes the view from the
//! complete set, so the final state is identical for every completion order.

use crate::models::content::Content;
use crate::models::course::Course;
use crate::models::enrollment::{CourseAccess, Enrollment};

#[derive(Debug, Default)]
pub struct CourseDetailLoader {
    course: Option<Course>,
    contents: Vec<Content>,
    enrollments: Vec<Enrollment>,
}

impl CourseDetailLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_course(&mut self, course: Option<Course>) {
        self.course = course;
    }

    pub fn apply_contents(&mut self, contents: Vec<Content>) {
        self.contents = contents;
    }

    pub fn apply_enrollments(&mut self, enrollments: Vec<Enrollment>) {
        self.enrollments = enrollments;
    }

    pub fn finish(self) -> CourseDetailView {
        let Some(course) = self.course else {
            return CourseDetailView::NotFound;
        };
        match CourseAccess::resolve(course.id, &self.enrollments) {
            (CourseAccess::Approved, Some(winner)) => CourseDetailView::Enrolled {
                enrollment: winner.clone(),
                contents: self.contents,
                course,
            },
            (CourseAccess::Pending, _) => CourseDetailView::Pending { course },
            (CourseAccess::Rejected, _) => CourseDetailView::Rejected { course },
            (CourseAccess::Unrequested, _) | (CourseAccess::Approved, None) => {
                CourseDetailView::NotEnrolled { course }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CourseDetailView {
    NotFound,
    NotEnrolled { course: Course },
    Pending { course: Course },
    Rejected { course: Course },
    Enrolled {
        course: Course,
        enrollment: Enrollment,
        contents: Vec<Content>,
    },
}

impl CourseDetailView {
    /// Completion percentage clamped to 0..=100, for the progress bar.
    pub fn completion_percentage(&self) -> f64 {
        match self {
            CourseDetailView::Enrolled { enrollment, .. } => {
                enrollment.completion_percentage.clamp(0.0, 100.0)
            }
            _ => 0.0,
        }
    }

    /// "N of M items completed", estimated from the overall percentage.
    pub fn completed_items(&self) -> (usize, usize) {
        match self {
            CourseDetailView::Enrolled { contents, .. } => {
                let total = contents.len();
                let done = (self.completion_percentage() / 100.0 * total as f64).round() as usize;
                (done, total)
            }
            _ => (0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::models::content::ContentType;
    use crate::models::enrollment::EnrollmentStatus;

    fn course() -> Course {
        Course {
            id: 42,
            title: "Rust 101".into(),
            description: "intro".into(),
            instructor_name: Some("Dr. White".into()),
            start_date: None,
            end_date: None,
            thumbnail: None,
            is_active: true,
        }
    }

    fn content(id: i64) -> Content {
        Content {
            id,
            course: 42,
            title: format!("lesson {id}"),
            description: String::new(),
            content_type: ContentType::Video,
            content_file: None,
        }
    }

    fn enrollment(status: EnrollmentStatus, pct: f64) -> Enrollment {
        Enrollment {
            id: 9,
            course: 42,
            student: Some(1),
            status,
            completion_percentage: pct,
            grade: None,
            enrolled_at: None,
        }
    }

    #[test]
    fn missing_course_renders_not_found() {
        let mut loader = CourseDetailLoader::new();
        loader.apply_course(None);
        loader.apply_contents(vec![content(1)]);
        loader.apply_enrollments(vec![enrollment(EnrollmentStatus::Approved, 50.0)]);
        assert_eq!(loader.finish(), CourseDetailView::NotFound);
    }

    #[test]
    fn enrollment_status_drives_the_branch() {
        for (status, expect_enrolled) in [
            (EnrollmentStatus::Pending, false),
            (EnrollmentStatus::Rejected, false),
            (EnrollmentStatus::Approved, true),
        ] {
            let mut loader = CourseDetailLoader::new();
            loader.apply_course(Some(course()));
            loader.apply_enrollments(vec![enrollment(status, 0.0)]);
            loader.apply_contents(vec![]);
            let view = loader.finish();
            assert_eq!(
                matches!(view, CourseDetailView::Enrolled { .. }),
                expect_enrolled,
                "status {status:?}"
            );
        }
    }

    #[test]
    fn no_enrollment_renders_not_enrolled() {
        let mut loader = CourseDetailLoader::new();
        loader.apply_course(Some(course()));
        loader.apply_contents(vec![]);
        loader.apply_enrollments(vec![]);
        assert!(matches!(loader.finish(), CourseDetailView::NotEnrolled { .. }));
    }

    #[test]
    fn all_completion_orders_yield_the_same_view() {
        let c = Some(course());
        let contents = vec![content(1), content(2)];
        let enrollments = vec![enrollment(EnrollmentStatus::Approved, 50.0)];

        // index the three applications so every permutation can be replayed
        let apply = |loader: &mut CourseDetailLoader, step: usize| match step {
            0 => loader.apply_course(c.clone()),
            1 => loader.apply_contents(contents.clone()),
            _ => loader.apply_enrollments(enrollments.clone()),
        };

        let orders = [
            [0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0],
        ];
        let mut views = orders.iter().map(|order| {
            let mut loader = CourseDetailLoader::new();
            for &step in order {
                apply(&mut loader, step);
            }
            loader.finish()
        });
        let first = views.next().unwrap();
        assert!(matches!(first, CourseDetailView::Enrolled { .. }));
        for view in views {
            assert_eq!(view, first);
        }
    }

    #[test]
    fn enrolled_view_carries_the_winning_record() {
        let older = Enrollment {
            id: 10,
            enrolled_at: Some(chrono::Utc.timestamp_opt(100, 0).unwrap()),
            ..enrollment(EnrollmentStatus::Rejected, 0.0)
        };
        let newer = Enrollment {
            id: 11,
            enrolled_at: Some(chrono::Utc.timestamp_opt(200, 0).unwrap()),
            ..enrollment(EnrollmentStatus::Approved, 25.0)
        };

        let mut loader = CourseDetailLoader::new();
        loader.apply_course(Some(course()));
        loader.apply_contents(vec![]);
        loader.apply_enrollments(vec![older, newer]);
        match loader.finish() {
            CourseDetailView::Enrolled { enrollment, .. } => assert_eq!(enrollment.id, 11),
            other => panic!("expected the enrolled view, got {other:?}"),
        }
    }

    #[test]
    fn completed_items_estimate_rounds_from_percentage() {
        let mut loader = CourseDetailLoader::new();
        loader.apply_course(Some(course()));
        loader.apply_contents(vec![content(1), content(2), content(3), content(4)]);
        loader.apply_enrollments(vec![enrollment(EnrollmentStatus::Approved, 50.0)]);
        let view = loader.finish();
        assert_eq!(view.completion_percentage(), 50.0);
        assert_eq!(view.completed_items(), (2, 4));
    }

    #[test]
    fn completion_percentage_is_clamped() {
        let mut loader = CourseDetailLoader::new();
        loader.apply_course(Some(course()));
        loader.apply_contents(vec![]);
        loader.apply_enrollments(vec![enrollment(EnrollmentStatus::Approved, 180.0)]);
        assert_eq!(loader.finish().completion_percentage(), 100.0);
    }
}

//! Student course catalog: every active course joined with the student's own
//! enrollment records, so each card carries the right affordance.

use crate::models::course::Course;
use crate::models::enrollment::{CourseAccess, Enrollment, StudentAffordance};

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub course: Course,
    pub access: CourseAccess,
}

impl CatalogEntry {
    pub fn affordance(&self) -> StudentAffordance {
        self.access.student_affordance()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    pub entries: Vec<CatalogEntry>,
}

impl CatalogView {
    pub fn assemble(courses: Vec<Course>, enrollments: Vec<Enrollment>) -> Self {
        let entries = courses
            .into_iter()
            .map(|course| {
                let access = CourseAccess::from_records(course.id, &enrollments);
                CatalogEntry { course, access }
            })
            .collect();
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enrollment::EnrollmentStatus;

    fn course(id: i64) -> Course {
        Course {
            id,
            title: format!("course {id}"),
            description: String::new(),
            instructor_name: None,
            start_date: None,
            end_date: None,
            thumbnail: None,
            is_active: true,
        }
    }

    fn enrollment(course: i64, status: EnrollmentStatus) -> Enrollment {
        Enrollment {
            id: course * 10,
            course,
            student: Some(1),
            status,
            completion_percentage: 0.0,
            grade: None,
            enrolled_at: None,
        }
    }

    #[test]
    fn entries_carry_per_course_access() {
        let view = CatalogView::assemble(
            vec![course(1), course(2), course(3), course(4)],
            vec![
                enrollment(2, EnrollmentStatus::Pending),
                enrollment(3, EnrollmentStatus::Approved),
                enrollment(4, EnrollmentStatus::Rejected),
            ],
        );
        let accesses: Vec<_> = view.entries.iter().map(|e| e.access).collect();
        assert_eq!(
            accesses,
            vec![
                CourseAccess::Unrequested,
                CourseAccess::Pending,
                CourseAccess::Approved,
                CourseAccess::Rejected,
            ]
        );
        assert_eq!(view.entries[0].affordance(), StudentAffordance::Enroll);
        assert_eq!(view.entries[2].affordance(), StudentAffordance::AccessCourse);
    }

    #[test]
    fn empty_inputs_render_an_empty_catalog() {
        let view = CatalogView::assemble(vec![], vec![]);
        assert!(view.entries.is_empty());
    }
}

//! Admin dashboard: the admin's courses plus the pending enrollment queue.

use crate::models::course::Course;
use crate::models::enrollment::PendingApproval;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub courses: Vec<Course>,
    pub pending: Vec<PendingApproval>,
}

impl DashboardView {
    pub fn assemble(courses: Vec<Course>, pending: Vec<PendingApproval>) -> Self {
        Self { courses, pending }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_keeps_both_sections_independent() {
        let pending = vec![PendingApproval {
            id: 5,
            student_name: Some("Ada".into()),
            course_title: Some("Rust 101".into()),
        }];
        let view = DashboardView::assemble(vec![], pending.clone());
        assert!(view.courses.is_empty());
        assert_eq!(view.pending, pending);
    }
}

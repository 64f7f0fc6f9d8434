use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    Pending,
    Approved,
    Rejected,
}

/// Relationship record between a student and a course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Enrollment {
    pub id: i64,
    pub course: i64,
    #[serde(default)]
    pub student: Option<i64>,
    pub status: EnrollmentStatus,
    #[serde(default)]
    pub completion_percentage: f64,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub enrolled_at: Option<DateTime<Utc>>,
}

/// Body for `POST /enrollments/`. The student id is always the acting user's,
/// read from the resolved session — the request must be attributable.
#[derive(Debug, Serialize)]
pub struct NewEnrollment {
    pub course: i64,
    pub student: i64,
}

/// Item of `GET /enrollments/pending_approvals/` (admin view).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendingApproval {
    pub id: i64,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub course_title: Option<String>,
}

/// Client-side access state for one (student, course) pair, derived from the
/// server's enrollment records. `Approved` and `Rejected` are terminal: the
/// client offers no re-request affordance after either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseAccess {
    Unrequested,
    Pending,
    Approved,
    Rejected,
}

impl CourseAccess {
    /// Derive the access state for `course_id` from a set of enrollment
    /// records. The server should return at most one record per
    /// (student, course) pair, but that is not guaranteed; duplicates are
    /// tie-broken deterministically by most recent (`enrolled_at`, then `id`)
    /// so the UI never renders contradictory affordances.
    pub fn from_records(course_id: i64, records: &[Enrollment]) -> Self {
        Self::resolve(course_id, records).0
    }

    /// Same derivation, also yielding the winning record.
    pub fn resolve(course_id: i64, records: &[Enrollment]) -> (Self, Option<&Enrollment>) {
        let winner = records
            .iter()
            .filter(|e| e.course == course_id)
            .max_by_key(|e| (e.enrolled_at, e.id));
        let access = match winner {
            None => CourseAccess::Unrequested,
            Some(e) => match e.status {
                EnrollmentStatus::Pending => CourseAccess::Pending,
                EnrollmentStatus::Approved => CourseAccess::Approved,
                EnrollmentStatus::Rejected => CourseAccess::Rejected,
            },
        };
        (access, winner)
    }

    pub fn student_affordance(self) -> StudentAffordance {
        match self {
            CourseAccess::Unrequested => StudentAffordance::Enroll,
            CourseAccess::Pending => StudentAffordance::WaitingForApproval,
            CourseAccess::Approved => StudentAffordance::AccessCourse,
            CourseAccess::Rejected => StudentAffordance::RejectedNotice,
        }
    }

    /// Admin affordance for an enrollment in this state. Only pending
    /// enrollments are actionable; unrequested ones are not listed at all.
    pub fn admin_affordance(self) -> AdminAffordance {
        match self {
            CourseAccess::Unrequested => AdminAffordance::NotListed,
            CourseAccess::Pending => AdminAffordance::ApproveOrReject,
            CourseAccess::Approved | CourseAccess::Rejected => AdminAffordance::Resolved,
        }
    }
}

/// What the student-facing course card offers for a given access state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentAffordance {
    Enroll,
    WaitingForApproval,
    AccessCourse,
    RejectedNotice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAffordance {
    NotListed,
    ApproveOrReject,
    Resolved,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(id: i64, course: i64, status: EnrollmentStatus, ts: Option<i64>) -> Enrollment {
        Enrollment {
            id,
            course,
            student: Some(1),
            status,
            completion_percentage: 0.0,
            grade: None,
            enrolled_at: ts.map(|t| Utc.timestamp_opt(t, 0).unwrap()),
        }
    }

    #[test]
    fn no_record_means_unrequested() {
        assert_eq!(CourseAccess::from_records(42, &[]), CourseAccess::Unrequested);
        let other_course = [record(1, 7, EnrollmentStatus::Approved, Some(100))];
        assert_eq!(
            CourseAccess::from_records(42, &other_course),
            CourseAccess::Unrequested
        );
    }

    #[test]
    fn enroll_then_approve_unlocks_access() {
        // student requests enrollment in course 42: server now holds a pending record
        let mut records = vec![record(10, 42, EnrollmentStatus::Pending, Some(100))];
        let access = CourseAccess::from_records(42, &records);
        assert_eq!(access, CourseAccess::Pending);
        assert_eq!(access.student_affordance(), StudentAffordance::WaitingForApproval);
        assert_eq!(access.admin_affordance(), AdminAffordance::ApproveOrReject);

        // admin approves: the refetched record is approved
        records[0].status = EnrollmentStatus::Approved;
        let access = CourseAccess::from_records(42, &records);
        assert_eq!(access, CourseAccess::Approved);
        assert_eq!(access.student_affordance(), StudentAffordance::AccessCourse);
        assert_eq!(access.admin_affordance(), AdminAffordance::Resolved);
    }

    #[test]
    fn rejection_is_terminal_with_no_enroll_affordance() {
        let records = [record(10, 42, EnrollmentStatus::Rejected, Some(100))];
        let access = CourseAccess::from_records(42, &records);
        assert_eq!(access, CourseAccess::Rejected);
        assert_eq!(access.student_affordance(), StudentAffordance::RejectedNotice);
        assert_ne!(access.student_affordance(), StudentAffordance::Enroll);
    }

    #[test]
    fn duplicate_records_pick_most_recent() {
        let records = [
            record(10, 42, EnrollmentStatus::Rejected, Some(100)),
            record(11, 42, EnrollmentStatus::Approved, Some(200)),
        ];
        assert_eq!(CourseAccess::from_records(42, &records), CourseAccess::Approved);
        // reversed input order must not change the outcome
        let reversed = [records[1].clone(), records[0].clone()];
        assert_eq!(CourseAccess::from_records(42, &reversed), CourseAccess::Approved);
    }

    #[test]
    fn duplicate_records_without_timestamps_fall_back_to_id() {
        let records = [
            record(11, 42, EnrollmentStatus::Approved, None),
            record(10, 42, EnrollmentStatus::Pending, None),
        ];
        assert_eq!(CourseAccess::from_records(42, &records), CourseAccess::Approved);
    }

    #[test]
    fn derivation_is_pure_function_of_records() {
        // monotonicity: the rendered state only moves off approved/rejected
        // when the server records themselves change
        let approved = [record(10, 42, EnrollmentStatus::Approved, Some(100))];
        for _ in 0..3 {
            assert_eq!(CourseAccess::from_records(42, &approved), CourseAccess::Approved);
        }
    }

    #[test]
    fn resolve_returns_winning_record() {
        let records = [
            record(10, 42, EnrollmentStatus::Pending, Some(100)),
            record(11, 42, EnrollmentStatus::Approved, Some(200)),
        ];
        let (access, winner) = CourseAccess::resolve(42, &records);
        assert_eq!(access, CourseAccess::Approved);
        assert_eq!(winner.unwrap().id, 11);
    }
}

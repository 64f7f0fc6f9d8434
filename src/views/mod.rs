//! Pure view-state assembly. Each view is a plain value computed from fetched
//! data; rendering happens in the CLI layer.

pub mod catalog;
pub mod course_detail;
pub mod dashboard;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Read-mostly course entity as served by `GET /courses/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructor_name: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// Body for `POST /courses/` (admin course creation).
#[derive(Debug, Serialize)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
}

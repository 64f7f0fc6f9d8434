pub mod auth;
pub mod courses;
pub mod enrollment;
pub mod progress;

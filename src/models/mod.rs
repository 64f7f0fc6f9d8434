pub mod content;
pub mod course;
pub mod enrollment;
pub mod user;

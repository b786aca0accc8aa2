pub mod tour;

pub use crate::domain::model::LessonReport;
pub use crate::domain::ports::Lesson;
pub use crate::utils::error::Result;

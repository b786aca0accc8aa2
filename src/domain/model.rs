use serde::{Deserialize, Serialize};

/// What a single lesson printed, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonReport {
    pub lesson: String,
    pub lines: Vec<String>,
}

impl LessonReport {
    pub fn new(lesson: &str, output: &str) -> Self {
        Self {
            lesson: lesson.to_string(),
            lines: output.lines().map(str::to_string).collect(),
        }
    }
}

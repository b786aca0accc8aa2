use crate::core::{Lesson, LessonReport};
use crate::utils::error::Result;
use std::io::Write;
use std::time::Instant;

pub struct TourEngine<L: Lesson> {
    lesson: L,
}

impl<L: Lesson> TourEngine<L> {
    pub fn new(lesson: L) -> Self {
        Self { lesson }
    }

    /// Runs the lesson, returning what it printed. When `echo` is given the
    /// output is also forwarded there.
    pub fn run(&self, echo: Option<&mut dyn Write>) -> Result<LessonReport> {
        let name = self.lesson.name();
        tracing::info!("📘 Running lesson '{}': {}", name, self.lesson.summary());
        let started = Instant::now();

        let mut buffer = Vec::new();
        self.lesson.run(&mut buffer)?;

        if let Some(out) = echo {
            out.write_all(&buffer)?;
            out.flush()?;
        }

        let report = LessonReport::new(name, &String::from_utf8_lossy(&buffer));
        tracing::debug!(
            "Lesson '{}' printed {} lines in {:?}",
            name,
            report.lines.len(),
            started.elapsed()
        );

        Ok(report)
    }
}

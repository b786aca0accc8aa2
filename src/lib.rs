pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::lessons::LessonKind;
pub use config::TourConfig;
pub use core::{tour::TourEngine, Lesson, LessonReport};
pub use utils::error::{ErrorCategory, ErrorSeverity, Result, TourError};

use crate::core::Lesson;
use crate::utils::error::{Result, TourError};
use std::io::Write;

/// Upper-cases the value if there is one.
pub fn shout(value: Option<&str>) -> Option<String> {
    value.map(str::to_uppercase)
}

/// Same transformation, but an absent value is an error rather than a no-op.
pub fn require_upper(value: Option<&str>) -> Result<String> {
    value
        .map(str::to_uppercase)
        .ok_or_else(|| TourError::NullReference {
            what: "str".to_string(),
        })
}

pub struct NullableLesson {
    value: Option<String>,
}

impl NullableLesson {
    pub fn new(value: Option<String>) -> Self {
        Self { value }
    }
}

impl Lesson for NullableLesson {
    fn name(&self) -> &'static str {
        "nullable"
    }

    fn summary(&self) -> &'static str {
        "Optional values and safe calls"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        // Safe call: an absent value prints nothing.
        if let Some(upper) = shout(self.value.as_deref()) {
            writeln!(out, "{}", upper)?;
        }

        // Unchecked call: an absent value is a null reference.
        if let Err(e) = require_upper(self.value.as_deref()) {
            tracing::debug!("nullable lesson value is absent: {}", e);
            writeln!(out, "{}", e)?;
        }
        Ok(())
    }
}

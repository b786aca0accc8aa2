use crate::core::Lesson;
use crate::utils::error::Result;
use std::io::Write;

/// Arguments for [`log_with`]. Fields can be set in any order; `repeat` defaults to 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    pub message: String,
    pub repeat: u32,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            message: String::new(),
            repeat: 1,
        }
    }
}

impl LogOptions {
    pub fn new(message: &str) -> Self {
        Self::default().message(message)
    }

    pub fn message(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }

    pub fn repeat(mut self, repeat: u32) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn lines(&self) -> Vec<String> {
        (1..=self.repeat)
            .map(|i| format!("{} {}", self.message, i))
            .collect()
    }
}

pub fn log(out: &mut dyn Write, message: &str) -> Result<()> {
    log_with(out, &LogOptions::new(message))
}

pub fn log_with(out: &mut dyn Write, options: &LogOptions) -> Result<()> {
    for line in options.lines() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub struct FunctionsLesson {
    options: LogOptions,
}

impl FunctionsLesson {
    pub fn new(options: LogOptions) -> Self {
        Self { options }
    }
}

impl Lesson for FunctionsLesson {
    fn name(&self) -> &'static str {
        "functions"
    }

    fn summary(&self) -> &'static str {
        "Named and default parameters"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        log(out, "Default Value")?;
        log_with(out, &LogOptions::new("Default Value Overridden").repeat(10))?;
        log_with(out, &self.options)?;
        Ok(())
    }
}

use crate::core::Lesson;
use crate::utils::error::Result;
use regex::Regex;
use std::io::Write;
use std::ops::Add;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("whitespace pattern is valid")
});

pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Method-call form of [`collapse_whitespace`].
pub trait CollapseWhitespace {
    fn collapse_whitespace(&self) -> String;
}

impl CollapseWhitespace for str {
    fn collapse_whitespace(&self) -> String {
        collapse_whitespace(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
}

impl Header {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn plus(&self, other: &Header) -> Header {
        Header {
            name: format!("{}{}", self.name, other.name),
        }
    }
}

impl Add for Header {
    type Output = Header;

    fn add(self, other: Header) -> Header {
        self.plus(&other)
    }
}

impl Add<&Header> for &Header {
    type Output = Header;

    fn add(self, other: &Header) -> Header {
        self.plus(other)
    }
}

pub struct ExtensionsLesson {
    text: String,
    left: String,
    right: String,
}

impl ExtensionsLesson {
    pub fn new(text: String, left: String, right: String) -> Self {
        Self { text, left, right }
    }
}

impl Lesson for ExtensionsLesson {
    fn name(&self) -> &'static str {
        "extensions"
    }

    fn summary(&self) -> &'static str {
        "Extension methods and infix operators"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", collapse_whitespace(&self.text))?;
        writeln!(out, "{}", self.text.collapse_whitespace())?;

        let combined = Header::new(&self.left) + Header::new(&self.right);
        writeln!(out, "{}", combined.name)?;
        Ok(())
    }
}

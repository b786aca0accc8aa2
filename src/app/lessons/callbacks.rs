use crate::core::Lesson;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn display(&self) -> String {
        format!("Name: {}", self.name)
    }

    /// Hands the name to a caller-supplied function.
    pub fn display_with<R>(&self, func: impl FnOnce(&str) -> R) -> R {
        func(&self.name)
    }
}

pub fn print_name(name: &str) -> String {
    format!("Name: {}", name)
}

pub struct CallbacksLesson;

impl Lesson for CallbacksLesson {
    fn name(&self) -> &'static str {
        "callbacks"
    }

    fn summary(&self) -> &'static str {
        "Passing functions as parameters"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let fredrik = Person::new("Fredrik");
        writeln!(out, "{}", fredrik.display())?;
        fredrik.display_with(|name| writeln!(out, "{}", print_name(name)))?;
        Ok(())
    }
}

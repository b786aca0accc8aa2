use crate::core::Lesson;
use crate::utils::error::Result;
use std::io::Write;

pub trait Person {
    fn first_name(&self) -> &str;
    fn last_name(&self) -> &str;

    fn name(&self) -> String {
        format!("{} {}", self.first_name(), self.last_name())
    }

    fn details(&self) -> String;
}

#[derive(Debug, Clone, Default)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
}

impl Person for Student {
    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }

    fn details(&self) -> String {
        format!("{}, living at {}", self.name(), self.address)
    }
}

pub struct ClassesLesson;

impl Lesson for ClassesLesson {
    fn name(&self) -> &'static str {
        "classes"
    }

    fn summary(&self) -> &'static str {
        "Abstract classes and overriding"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut student = Student::default();
        student.first_name = "Fredrik".to_string();
        student.last_name = "Pedersen".to_string();
        student.address = "Trondheim".to_string();

        let person: &dyn Person = &student;
        writeln!(out, "{}", person.details())?;
        Ok(())
    }
}

use crate::core::Lesson;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub name: String,
    pub age: u32,
}

impl Employee {
    pub fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }
}

/// Identity comparison: true only when both references point at the same instance.
pub fn same_instance<T>(a: &T, b: &T) -> bool {
    std::ptr::eq(a, b)
}

pub struct EqualityLesson;

impl Lesson for EqualityLesson {
    fn name(&self) -> &'static str {
        "equality"
    }

    fn summary(&self) -> &'static str {
        "Referential vs structural equality"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let employee1 = Employee::new("Fredrik", 26);
        let employee2 = Employee::new("Thomas", 24);
        let employee3 = Employee::new("Thomas", 24);

        writeln!(out, "{}", same_instance(&employee1, &employee2))?;
        writeln!(out, "{}", same_instance(&employee2, &employee3))?;
        writeln!(out, "{}", employee1 == employee2)?;
        writeln!(out, "{}", employee2 == employee3)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_instances_are_never_identical() {
        let a = Employee::new("Thomas", 24);
        let b = Employee::new("Thomas", 24);
        assert!(!same_instance(&a, &b));
        assert!(same_instance(&a, &a));
    }

    #[test]
    fn test_value_equality_requires_every_field() {
        let thomas = Employee::new("Thomas", 24);
        assert_eq!(thomas, Employee::new("Thomas", 24));
        assert_ne!(thomas, Employee::new("Thomas", 25));
        assert_ne!(thomas, Employee::new("Fredrik", 24));
    }

    #[test]
    fn test_lesson_output() {
        let mut out = Vec::new();
        EqualityLesson.run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "false\nfalse\nfalse\ntrue\n");
    }
}

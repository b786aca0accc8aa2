use crate::core::Lesson;
use crate::utils::error::Result;
use std::io::Write;

pub const INIT_MESSAGE: &str = "I have been Initialized";

#[derive(Debug, Clone)]
pub struct Car {
    pub name: String,
    init_message: &'static str,
}

impl Car {
    pub fn new(name: &str) -> Self {
        tracing::debug!("initializing car {}", name);
        Self {
            name: name.to_string(),
            init_message: INIT_MESSAGE,
        }
    }

    pub fn init_message(&self) -> &str {
        self.init_message
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarWithDefault {
    pub name: String,
    pub wheels: u32,
}

impl CarWithDefault {
    pub const DEFAULT_WHEELS: u32 = 4;

    pub fn new(name: &str) -> Self {
        Self::with_wheels(name, Self::DEFAULT_WHEELS)
    }

    pub fn with_wheels(name: &str, wheels: u32) -> Self {
        Self {
            name: name.to_string(),
            wheels,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarWithSecondary {
    pub name: String,
}

impl CarWithSecondary {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Secondary constructor: delegates to [`CarWithSecondary::new`], wheels are not stored.
    pub fn with_wheels(name: &str, _wheels: u32) -> Self {
        Self::new(name)
    }
}

pub struct ConstructorsLesson;

impl Lesson for ConstructorsLesson {
    fn name(&self) -> &'static str {
        "constructors"
    }

    fn summary(&self) -> &'static str {
        "Primary, default and secondary constructors"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let car = Car::new("Audi");
        writeln!(out, "{}", car.init_message())?;

        let car_default = CarWithDefault::new("Audi");
        let car_default2 = CarWithDefault::with_wheels("Audi", 4);
        writeln!(out, "{} {}", car_default.name, car_default.wheels)?;
        writeln!(out, "{}", car_default == car_default2)?;

        let car_secondary = CarWithSecondary::new("Audi");
        let car_secondary2 = CarWithSecondary::with_wheels("Audi", 4);
        writeln!(out, "{}", car_secondary == car_secondary2)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wheels() {
        assert_eq!(CarWithDefault::new("Audi").wheels, 4);
        assert_eq!(CarWithDefault::with_wheels("Reliant", 3).wheels, 3);
    }

    #[test]
    fn test_secondary_constructor_delegates() {
        assert_eq!(
            CarWithSecondary::with_wheels("Audi", 6),
            CarWithSecondary::new("Audi")
        );
        assert_eq!(Car::new("Audi").init_message(), INIT_MESSAGE);
    }
}

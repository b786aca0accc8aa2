use crate::core::Lesson;
use crate::utils::error::Result;
use std::io::Write;

pub trait Printer {
    fn model_name(&self) -> &str;

    fn describe_model(&self) -> String {
        format!("Printer model is {}", self.model_name())
    }

    fn best_selling_price(&self) -> f64;
}

#[derive(Debug, Clone)]
pub struct LaserPrinter {
    model_name: String,
}

impl LaserPrinter {
    pub fn new(model_name: &str) -> Self {
        Self {
            model_name: model_name.to_string(),
        }
    }
}

impl Printer for LaserPrinter {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn describe_model(&self) -> String {
        format!("Laser printer model is {}", self.model_name)
    }

    fn best_selling_price(&self) -> f64 {
        1299.00
    }
}

/// Keeps the default rendering.
#[derive(Debug, Clone)]
pub struct InkjetPrinter {
    model_name: String,
}

impl InkjetPrinter {
    pub fn new(model_name: &str) -> Self {
        Self {
            model_name: model_name.to_string(),
        }
    }
}

impl Printer for InkjetPrinter {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn best_selling_price(&self) -> f64 {
        149.00
    }
}

pub struct InheritanceLesson {
    model: String,
}

impl InheritanceLesson {
    pub fn new(model: String) -> Self {
        Self { model }
    }
}

impl Lesson for InheritanceLesson {
    fn name(&self) -> &'static str {
        "inheritance"
    }

    fn summary(&self) -> &'static str {
        "Abstract base with an overriding subtype"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let laser_printer: Box<dyn Printer> = Box::new(LaserPrinter::new(&self.model));
        writeln!(out, "{}", laser_printer.describe_model())?;
        Ok(())
    }
}

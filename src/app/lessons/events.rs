use crate::core::Lesson;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonEvent {
    Awake,
    Asleep,
    Eating { food: String },
}

pub fn handle_person_event(event: &PersonEvent) -> &str {
    match event {
        PersonEvent::Awake => "Awake",
        PersonEvent::Asleep => "Sleeping",
        PersonEvent::Eating { food } => food,
    }
}

pub struct EventsLesson;

impl Lesson for EventsLesson {
    fn name(&self) -> &'static str {
        "events"
    }

    fn summary(&self) -> &'static str {
        "Sealed variants with exhaustive matching"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let day = [
            PersonEvent::Awake,
            PersonEvent::Eating {
                food: "Pancakes".to_string(),
            },
            PersonEvent::Asleep,
        ];
        for event in &day {
            writeln!(out, "{}", handle_person_event(event))?;
        }
        Ok(())
    }
}

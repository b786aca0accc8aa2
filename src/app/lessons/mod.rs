pub mod callbacks;
pub mod classes;
pub mod constructors;
pub mod equality;
pub mod events;
pub mod extensions;
pub mod functions;
pub mod inheritance;
pub mod interfaces;
pub mod nullable;
pub mod question;
pub mod recursion;

use crate::config::TourConfig;
use crate::core::Lesson;
use crate::utils::error::TourError;
use std::str::FromStr;

/// Catalogue of runnable lessons, in the order `all` runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonKind {
    Equality,
    Nullable,
    Inheritance,
    Classes,
    Interfaces,
    Constructors,
    Events,
    Question,
    Callbacks,
    Functions,
    Extensions,
    Recursion,
}

impl LessonKind {
    pub const ALL: [LessonKind; 12] = [
        LessonKind::Equality,
        LessonKind::Nullable,
        LessonKind::Inheritance,
        LessonKind::Classes,
        LessonKind::Interfaces,
        LessonKind::Constructors,
        LessonKind::Events,
        LessonKind::Question,
        LessonKind::Callbacks,
        LessonKind::Functions,
        LessonKind::Extensions,
        LessonKind::Recursion,
    ];

    pub fn build(self, config: &TourConfig) -> Box<dyn Lesson> {
        match self {
            LessonKind::Equality => Box::new(equality::EqualityLesson),
            LessonKind::Nullable => {
                Box::new(nullable::NullableLesson::new(config.nullable.value.clone()))
            }
            LessonKind::Inheritance => Box::new(inheritance::InheritanceLesson::new(
                config.printer.model.clone(),
            )),
            LessonKind::Classes => Box::new(classes::ClassesLesson),
            LessonKind::Interfaces => Box::new(interfaces::InterfacesLesson),
            LessonKind::Constructors => Box::new(constructors::ConstructorsLesson),
            LessonKind::Events => Box::new(events::EventsLesson),
            LessonKind::Question => Box::new(question::QuestionLesson::new(
                config.question.text_answer.clone(),
                config.question.numeric_answer.clone(),
            )),
            LessonKind::Callbacks => Box::new(callbacks::CallbacksLesson),
            LessonKind::Functions => Box::new(functions::FunctionsLesson::new(
                functions::LogOptions::default()
                    .repeat(config.log.repeat)
                    .message(&config.log.message),
            )),
            LessonKind::Extensions => Box::new(extensions::ExtensionsLesson::new(
                config.extensions.text.clone(),
                config.extensions.left.clone(),
                config.extensions.right.clone(),
            )),
            LessonKind::Recursion => Box::new(recursion::RecursionLesson::new(
                config.recursion.n,
                config.recursion.frame_budget,
            )),
        }
    }
}

impl FromStr for LessonKind {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        LessonKind::ALL
            .into_iter()
            .find(|kind| kind.build(&TourConfig::default()).name() == wanted)
            .ok_or_else(|| TourError::UnknownLesson {
                name: s.to_string(),
            })
    }
}

//! Two independent takes on the same quiz record: one stores the answer as
//! text, the other parses it into an integer and falls back to a sentinel.

use crate::core::Lesson;
use crate::utils::error::Result;
use std::io::Write;

pub const PROMPT: &str = "What is the answer to life, the universe and everything?";

/// Stored instead of an answer when the submitted text was not an integer.
pub const INVALID_ANSWER: i32 = -1;

const UNANSWERED: &str = "You haven't answered yet!";

fn verdict_prefix(prompt: &str, answer: impl std::fmt::Display) -> String {
    format!("Question: {}\nYou answered: {}, which is ", prompt, answer)
}

#[derive(Debug, Clone)]
pub struct TextQuestion {
    pub answer: Option<String>,
    pub correct_answer: String,
    pub question: String,
}

impl Default for TextQuestion {
    fn default() -> Self {
        Self {
            answer: None,
            correct_answer: "42".to_string(),
            question: PROMPT.to_string(),
        }
    }
}

impl TextQuestion {
    pub fn solution(&self) -> String {
        match &self.answer {
            None => UNANSWERED.to_string(),
            Some(answer) if *answer == self.correct_answer => {
                verdict_prefix(&self.question, answer) + "correct"
            }
            Some(answer) => verdict_prefix(&self.question, answer) + "wrong",
        }
    }
}

#[derive(Debug, Clone)]
pub struct NumericQuestion {
    pub answer: Option<i32>,
    pub correct_answer: i32,
    pub question: String,
}

impl Default for NumericQuestion {
    fn default() -> Self {
        Self {
            answer: None,
            correct_answer: 42,
            question: PROMPT.to_string(),
        }
    }
}

impl NumericQuestion {
    pub fn solution(&self) -> String {
        match self.answer {
            None => UNANSWERED.to_string(),
            Some(answer) if answer == self.correct_answer => {
                verdict_prefix(&self.question, answer) + "correct"
            }
            Some(INVALID_ANSWER) => "Your answer must be an Integer".to_string(),
            Some(answer) => verdict_prefix(&self.question, answer) + "wrong",
        }
    }

    pub fn convert_answer_to_int(&self, user_answer: &str) -> i32 {
        match user_answer.parse::<i32>() {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!("'{}' is not an integer: {}", user_answer, e);
                INVALID_ANSWER
            }
        }
    }

    pub fn submit(&mut self, user_answer: &str) {
        self.answer = Some(self.convert_answer_to_int(user_answer));
    }

    pub fn biggest_number(value1: i32, value2: i32) -> i32 {
        if value1 > value2 {
            value1
        } else {
            value2
        }
    }
}

pub struct QuestionLesson {
    text_answer: Option<String>,
    numeric_answer: Option<String>,
}

impl QuestionLesson {
    pub fn new(text_answer: Option<String>, numeric_answer: Option<String>) -> Self {
        Self {
            text_answer,
            numeric_answer,
        }
    }
}

impl Lesson for QuestionLesson {
    fn name(&self) -> &'static str {
        "question"
    }

    fn summary(&self) -> &'static str {
        "Nullable answers and a parse-failure sentinel"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut question = TextQuestion::default();
        question.answer = self.text_answer.clone();
        writeln!(out, "{}", question.solution())?;

        let mut numeric = NumericQuestion::default();
        if let Some(raw) = &self.numeric_answer {
            numeric.submit(raw);
        }
        writeln!(out, "{}", numeric.solution())?;
        Ok(())
    }
}

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

pub type QuestionId = u32;

/// Number of answer options every question offers.
pub const OPTION_COUNT: usize = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Math,
    General,
}

impl Category {
    pub const fn label(self) -> &'static str {
        use Category::*;
        match self {
            Math => "math",
            General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single trivia question. Fields are only readable once constructed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    category: Category,
    text: String,
    options: Vec<String>,
    correct_answer: String,
    explanation: String,
}

impl Question {
    pub fn new<O>(
        id: QuestionId,
        category: Category,
        text: impl Into<String>,
        options: impl IntoIterator<Item = O>,
        correct_answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self
    where
        O: Into<String>,
    {
        Self {
            id,
            category,
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_answer: correct_answer.into(),
            explanation: explanation.into(),
        }
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Exact comparison, no case folding or partial credit.
    pub fn is_correct(&self, choice: &str) -> bool {
        choice == self.correct_answer
    }

    /// Letter shown next to the option at `index`: `A`, `B`, `C`, ...
    pub fn option_label(index: usize) -> char {
        u8::try_from(index)
            .ok()
            .and_then(|index| b'A'.checked_add(index))
            .map_or('?', char::from)
    }

    pub fn validate(&self) -> Result<()> {
        if self.options.len() != OPTION_COUNT {
            return Err(QuizError::WrongOptionCount {
                id: self.id,
                found: self.options.len(),
            });
        }

        let matches = self
            .options
            .iter()
            .filter(|option| **option == self.correct_answer)
            .count();
        if matches != 1 {
            return Err(QuizError::MalformedQuestion { id: self.id });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn capital() -> Question {
        Question::new(
            0,
            Category::General,
            "What is the capital city of India?",
            ["Mumbai", "New Delhi", "Kolkata", "Chennai"],
            "New Delhi",
            "New Delhi has been the capital of India since 1911.",
        )
    }

    #[test]
    fn answer_comparison_is_exact() {
        let question = capital();

        assert!(question.is_correct("New Delhi"));
        assert!(!question.is_correct("new delhi"));
        assert!(!question.is_correct("New Delhi "));
        assert!(!question.is_correct("Mumbai"));
    }

    #[test]
    fn validate_accepts_well_formed_question() {
        assert_eq!(capital().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_missing_correct_answer() {
        let question = Question::new(7, Category::Math, "2 + 2?", ["1", "2", "3", "5"], "4", "");

        assert_eq!(
            question.validate(),
            Err(QuizError::MalformedQuestion { id: 7 })
        );
    }

    #[test]
    fn validate_rejects_duplicated_correct_answer() {
        let question = Question::new(3, Category::Math, "2 + 2?", ["4", "2", "4", "5"], "4", "");

        assert_eq!(
            question.validate(),
            Err(QuizError::MalformedQuestion { id: 3 })
        );
    }

    #[test]
    fn validate_rejects_wrong_option_count() {
        let question = Question::new(1, Category::Math, "1 + 1?", ["2", "3"], "2", "");

        assert_eq!(
            question.validate(),
            Err(QuizError::WrongOptionCount { id: 1, found: 2 })
        );
    }

    #[test]
    fn option_labels_are_letters() {
        assert_eq!(Question::option_label(0), 'A');
        assert_eq!(Question::option_label(3), 'D');
        assert_eq!(Question::option_label(300), '?');
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Math).unwrap();
        assert_eq!(json, "\"math\"");
        assert_eq!(Category::General.to_string(), "general");
    }
}

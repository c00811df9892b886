use alloc::collections::BTreeSet;
use alloc::string::ToString;
use alloc::vec::Vec;

use crate::*;

type QuestionRecord = (
    QuestionId,
    Category,
    &'static str,
    [&'static str; OPTION_COUNT],
    &'static str,
    &'static str,
);

const BUILTIN_QUESTIONS: [QuestionRecord; TILE_COUNT] = [
    (
        0,
        Category::General,
        "What is the capital city of India?",
        ["Mumbai", "New Delhi", "Kolkata", "Chennai"],
        "New Delhi",
        "New Delhi has been the capital of India since 1911.",
    ),
    (
        1,
        Category::Math,
        "What is 15 + 27?",
        ["32", "41", "42", "52"],
        "42",
        "15 + 27 = 42.",
    ),
    (
        2,
        Category::General,
        "Which Indian state is famously known as 'God's Own Country'?",
        ["Tamil Nadu", "Karnataka", "Kerala", "Goa"],
        "Kerala",
        "Kerala is known for its lush green landscapes and tranquil backwaters.",
    ),
    (
        3,
        Category::Math,
        "What is 12 multiplied by 6?",
        ["62", "72", "82", "54"],
        "72",
        "12 * 6 = 72.",
    ),
    (
        4,
        Category::General,
        "What is the national fruit of India?",
        ["Apple", "Banana", "Mango", "Guava"],
        "Mango",
        "The Mango (Mangifera indica) is the national fruit of India.",
    ),
    (
        5,
        Category::Math,
        "What is 150 minus 75?",
        ["65", "75", "85", "95"],
        "75",
        "150 - 75 = 75.",
    ),
    (
        6,
        Category::General,
        "Which is the classical dance form that originated in Kerala?",
        ["Bharatanatyam", "Kathak", "Kathakali", "Kuchipudi"],
        "Kathakali",
        "Kathakali is a major form of classical Indian dance characterized by its elaborate makeup and costumes.",
    ),
    (
        7,
        Category::Math,
        "What is 9 times 9?",
        ["71", "81", "91", "89"],
        "81",
        "9 * 9 = 81.",
    ),
    (
        8,
        Category::General,
        "Who is known as the 'Father of the Nation' in India?",
        [
            "Jawaharlal Nehru",
            "Subhas Chandra Bose",
            "Mahatma Gandhi",
            "Sardar Patel",
        ],
        "Mahatma Gandhi",
        "Mahatma Gandhi led India to independence through non-violent civil disobedience.",
    ),
    (
        9,
        Category::Math,
        "What is 40 divided by 8?",
        ["4", "5", "6", "8"],
        "5",
        "40 / 8 = 5.",
    ),
];

/// Validated, immutable set of questions, one per tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.len() != TILE_COUNT {
            return Err(QuizError::WrongQuestionCount {
                found: questions.len(),
            });
        }

        let mut seen = BTreeSet::new();
        for question in &questions {
            question.validate()?;
            if !seen.insert(question.id()) {
                return Err(QuizError::DuplicateQuestionId { id: question.id() });
            }
        }

        log::debug!("question bank loaded with {} questions", questions.len());
        Ok(Self { questions })
    }

    /// The ten India & Kerala questions shipped with the game.
    pub fn builtin() -> Result<Self> {
        let questions = BUILTIN_QUESTIONS
            .iter()
            .map(|&(id, category, text, options, correct_answer, explanation)| {
                Question::new(id, category, text, options, correct_answer, explanation)
            })
            .collect();
        Self::new(questions)
    }

    /// Parses a JSON array of questions and validates it.
    pub fn from_json(json: &str) -> Result<Self> {
        let questions: Vec<Question> = serde_json::from_str(json)
            .map_err(|err| QuizError::InvalidBankData(err.to_string()))?;
        Self::new(questions)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id() == id)
    }
}

use alloc::string::String;
use thiserror::Error;

use crate::{Operation, Phase, QuestionId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("Cannot {operation} while the session is {phase}")]
    InvalidTransition { operation: Operation, phase: Phase },
    #[error("An answer was already submitted for question #{}", .index + 1)]
    AnswerAlreadySubmitted { index: usize },
    #[error("Question {id} must list its correct answer exactly once among its options")]
    MalformedQuestion { id: QuestionId },
    #[error("Question {id} has {found} options, expected {}", crate::OPTION_COUNT)]
    WrongOptionCount { id: QuestionId, found: usize },
    #[error("Question bank holds {found} questions, expected {}", crate::TILE_COUNT)]
    WrongQuestionCount { found: usize },
    #[error("Question id {id} is used more than once")]
    DuplicateQuestionId { id: QuestionId },
    #[error("Invalid question bank data: {0}")]
    InvalidBankData(String),
}

pub type Result<T> = core::result::Result<T, QuizError>;

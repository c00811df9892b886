use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Setup,
    Playing,
    Revealed,
}

impl Phase {
    pub const fn is_setup(self) -> bool {
        matches!(self, Self::Setup)
    }

    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Setup
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Phase::*;
        f.write_str(match self {
            Setup => "in setup",
            Playing => "playing",
            Revealed => "revealed",
        })
    }
}

/// Phase-restricted session operations, named in transition errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Start,
    SubmitAnswer,
    Advance,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Operation::*;
        f.write_str(match self {
            Start => "start",
            SubmitAnswer => "submit an answer",
            Advance => "advance",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub explanation: String,
    pub revealed_tile: Option<TileIndex>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved on to the question at this index.
    NextQuestion(usize),
    /// That was the last question, the image is now revealed.
    Revealed,
}

impl AdvanceOutcome {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

/// Read-only copy of everything a view needs to render the session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub question: Option<Question>,
    pub question_number: usize,
    pub question_count: usize,
    pub revealed_tiles: Vec<TileIndex>,
    pub score: usize,
    pub total_tiles: TileIndex,
    pub perfect: bool,
    pub last_outcome: Option<AnswerOutcome>,
    pub theme: String,
    pub image_url: String,
}

impl SessionSnapshot {
    pub fn is_awaiting_advance(&self) -> bool {
        self.last_outcome.is_some()
    }
}

/// One play-through of the quiz: `Setup -> Playing -> Revealed`, then `reset`.
#[derive(Clone, Debug)]
pub struct GameSession {
    bank: QuestionBank,
    config: QuizConfig,
    rng: SmallRng,
    phase: Phase,
    questions: Vec<Question>,
    current_index: usize,
    revealed: RevealedTiles,
    score: usize,
    last_outcome: Option<AnswerOutcome>,
}

impl GameSession {
    pub fn new(bank: QuestionBank, config: QuizConfig, seed: u64) -> Self {
        log::trace!("new session, seed: {}", seed);
        Self::with_rng(bank, config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(bank: QuestionBank, config: QuizConfig, mut rng: SmallRng) -> Self {
        let questions = shuffled(bank.questions(), &mut rng);
        let total_tiles = config.total_tiles();
        Self {
            bank,
            config,
            rng,
            phase: Phase::Setup,
            questions,
            current_index: 0,
            revealed: RevealedTiles::new(total_tiles),
            score: 0,
            last_outcome: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn revealed_tiles(&self) -> &[TileIndex] {
        self.revealed.as_slice()
    }

    pub fn tile_state(&self, index: TileIndex) -> TileState {
        self.revealed.state_at(index)
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total_tiles(&self) -> TileIndex {
        self.config.total_tiles()
    }

    pub fn is_perfect(&self) -> bool {
        self.score == self.total_tiles()
    }

    /// An answer is in for the current question and `advance` is expected next.
    pub fn is_awaiting_advance(&self) -> bool {
        self.last_outcome.is_some()
    }

    pub fn last_outcome(&self) -> Option<&AnswerOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            question: self.current_question().cloned(),
            question_number: self.current_index + 1,
            question_count: self.questions.len(),
            revealed_tiles: self.revealed.as_slice().to_vec(),
            score: self.score,
            total_tiles: self.total_tiles(),
            perfect: self.is_perfect(),
            last_outcome: self.last_outcome.clone(),
            theme: self.config.theme.clone(),
            image_url: self.config.image_url.clone(),
        }
    }

    pub fn start(&mut self) -> Result<()> {
        self.check_phase(Phase::Setup, Operation::Start)?;
        self.phase = Phase::Playing;
        log::debug!("session started with {} questions", self.questions.len());
        Ok(())
    }

    /// Checks `choice` against the current question. A correct answer opens the
    /// next tile; the question index only moves on `advance`.
    pub fn submit_answer(&mut self, choice: &str) -> Result<AnswerOutcome> {
        self.check_phase(Phase::Playing, Operation::SubmitAnswer)?;
        if self.last_outcome.is_some() {
            log::warn!(
                "ignoring answer {:?}, question #{} already answered",
                choice,
                self.current_index + 1
            );
            return Err(QuizError::AnswerAlreadySubmitted {
                index: self.current_index,
            });
        }

        let question = &self.questions[self.current_index];
        let correct = question.is_correct(choice);
        let explanation = question.explanation().into();

        let revealed_tile = if correct {
            let tile = self.revealed.reveal_next();
            if tile.is_some() {
                self.score += 1;
            }
            tile
        } else {
            None
        };

        log::debug!(
            "question #{} answered {:?}: correct={}, score={}",
            self.current_index + 1,
            choice,
            correct,
            self.score
        );

        let outcome = AnswerOutcome {
            correct,
            explanation,
            revealed_tile,
        };
        self.last_outcome = Some(outcome.clone());
        Ok(outcome)
    }

    pub fn advance(&mut self) -> Result<AdvanceOutcome> {
        self.check_phase(Phase::Playing, Operation::Advance)?;
        self.last_outcome = None;

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            log::debug!("advanced to question #{}", self.current_index + 1);
            Ok(AdvanceOutcome::NextQuestion(self.current_index))
        } else {
            self.phase = Phase::Revealed;
            log::debug!(
                "image revealed, final score {} of {}",
                self.score,
                self.total_tiles()
            );
            Ok(AdvanceOutcome::Revealed)
        }
    }

    /// Replaces the session with a freshly shuffled one, continuing the same random stream.
    pub fn reset(&mut self) {
        let bank = self.bank.clone();
        let config = self.config.clone();
        let rng = self.rng.clone();
        *self = Self::with_rng(bank, config, rng);
        log::debug!("session reset");
    }

    fn check_phase(&self, expected: Phase, operation: Operation) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            log::warn!("cannot {} while {}", operation, self.phase);
            Err(QuizError::InvalidTransition {
                operation,
                phase: self.phase,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn session(seed: u64) -> GameSession {
        GameSession::new(
            QuestionBank::builtin().unwrap(),
            QuizConfig::default(),
            seed,
        )
    }

    fn correct_choice(session: &GameSession) -> String {
        session.current_question().unwrap().correct_answer().into()
    }

    fn wrong_choice(session: &GameSession) -> String {
        let question = session.current_question().unwrap();
        question
            .options()
            .iter()
            .find(|option| !question.is_correct(option))
            .unwrap()
            .clone()
    }

    fn assert_tiles_track_score(session: &GameSession) {
        let expected: Vec<TileIndex> = (0..session.score()).collect();
        assert_eq!(session.revealed_tiles(), expected.as_slice());
    }

    #[test]
    fn new_session_starts_in_setup_with_shuffled_bank() {
        let session = session(1);
        let bank = QuestionBank::builtin().unwrap();

        assert_eq!(session.phase(), Phase::Setup);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert!(session.revealed_tiles().is_empty());
        assert_eq!(session.questions().len(), session.total_tiles());

        let mut ids: Vec<_> = session.questions().iter().map(Question::id).collect();
        ids.sort_unstable();
        let mut bank_ids: Vec<_> = bank.questions().iter().map(Question::id).collect();
        bank_ids.sort_unstable();
        assert_eq!(ids, bank_ids);
    }

    #[test]
    fn same_seed_gives_same_order() {
        assert_eq!(session(5).questions(), session(5).questions());
    }

    #[test]
    fn start_only_from_setup() {
        let mut session = session(2);

        assert_eq!(session.start(), Ok(()));
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(
            session.start(),
            Err(QuizError::InvalidTransition {
                operation: Operation::Start,
                phase: Phase::Playing
            })
        );
    }

    #[test]
    fn operations_rejected_in_setup_without_mutation() {
        let mut session = session(3);

        assert_eq!(
            session.submit_answer("42"),
            Err(QuizError::InvalidTransition {
                operation: Operation::SubmitAnswer,
                phase: Phase::Setup
            })
        );
        assert_eq!(
            session.advance(),
            Err(QuizError::InvalidTransition {
                operation: Operation::Advance,
                phase: Phase::Setup
            })
        );
        assert_eq!(session.phase(), Phase::Setup);
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn submit_does_not_advance_index() {
        let mut session = session(4);
        session.start().unwrap();
        let choice = correct_choice(&session);

        let outcome = session.submit_answer(&choice).unwrap();

        assert!(outcome.correct);
        assert_eq!(outcome.revealed_tile, Some(0));
        assert_eq!(session.current_index(), 0);
        assert!(session.is_awaiting_advance());
    }

    #[test]
    fn second_submit_for_same_question_is_rejected() {
        let mut session = session(6);
        session.start().unwrap();
        let choice = correct_choice(&session);

        session.submit_answer(&choice).unwrap();
        assert_eq!(
            session.submit_answer(&choice),
            Err(QuizError::AnswerAlreadySubmitted { index: 0 })
        );
        assert_eq!(session.score(), 1);
        assert_eq!(session.revealed_tiles(), &[0]);
    }

    #[test]
    fn wrong_answer_returns_stored_explanation() {
        let mut session = session(8);
        session.start().unwrap();
        while session.current_question().unwrap().id() != 0 {
            let choice = wrong_choice(&session);
            session.submit_answer(&choice).unwrap();
            session.advance().unwrap();
        }

        let outcome = session.submit_answer("Mumbai").unwrap();

        assert!(!outcome.correct);
        assert_eq!(
            outcome.explanation,
            "New Delhi has been the capital of India since 1911."
        );
        assert_eq!(outcome.revealed_tile, None);
        assert_eq!(session.score(), 0);
        assert!(session.revealed_tiles().is_empty());
    }

    #[test]
    fn perfect_run_reveals_every_tile() {
        let mut session = session(10);
        session.start().unwrap();

        for round in 0..10 {
            let choice = correct_choice(&session);
            session.submit_answer(&choice).unwrap();
            assert_eq!(session.revealed_tiles().len(), session.score());
            assert_tiles_track_score(&session);

            let outcome = session.advance().unwrap();
            if round < 9 {
                assert_eq!(outcome, AdvanceOutcome::NextQuestion(round + 1));
            } else {
                assert_eq!(outcome, AdvanceOutcome::Revealed);
            }
        }

        assert_eq!(session.phase(), Phase::Revealed);
        assert_eq!(session.score(), 10);
        assert_eq!(session.revealed_tiles(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert!(session.is_perfect());
        assert!(session.snapshot().perfect);
    }

    #[test]
    fn first_miss_then_all_correct_scores_nine() {
        let mut session = session(11);
        session.start().unwrap();

        let choice = wrong_choice(&session);
        session.submit_answer(&choice).unwrap();
        session.advance().unwrap();
        for _ in 1..10 {
            let choice = correct_choice(&session);
            session.submit_answer(&choice).unwrap();
            session.advance().unwrap();
        }

        assert_eq!(session.phase(), Phase::Revealed);
        assert_eq!(session.score(), 9);
        assert_eq!(session.revealed_tiles(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(!session.is_perfect());
        assert_eq!(session.tile_state(8), TileState::Revealed);
        assert_eq!(session.tile_state(9), TileState::Hidden);
    }

    #[test]
    fn tiles_track_score_for_mixed_answers() {
        let mut session = session(12);
        session.start().unwrap();
        let pattern = [true, false, false, true, true, false, true, false, true, true];

        for right in pattern {
            let choice = if right {
                correct_choice(&session)
            } else {
                wrong_choice(&session)
            };
            session.submit_answer(&choice).unwrap();
            assert_tiles_track_score(&session);
            session.advance().unwrap();
        }

        assert_eq!(session.score(), 6);
        assert_tiles_track_score(&session);
    }

    #[test]
    fn advance_past_last_question_reveals_once() {
        let mut session = session(13);
        session.start().unwrap();
        for _ in 0..9 {
            session.advance().unwrap();
        }
        let index = session.current_index();

        assert_eq!(session.advance(), Ok(AdvanceOutcome::Revealed));
        assert_eq!(
            session.advance(),
            Err(QuizError::InvalidTransition {
                operation: Operation::Advance,
                phase: Phase::Revealed
            })
        );
        assert_eq!(session.current_index(), index);
        assert!(session.current_index() <= session.questions().len());
    }

    #[test]
    fn reset_from_perfect_run_returns_to_setup() {
        let mut session = session(14);
        session.start().unwrap();
        for _ in 0..10 {
            let choice = correct_choice(&session);
            session.submit_answer(&choice).unwrap();
            session.advance().unwrap();
        }
        assert!(session.is_perfect());

        session.reset();

        assert_eq!(session.phase(), Phase::Setup);
        assert_eq!(session.score(), 0);
        assert!(session.revealed_tiles().is_empty());
        assert_eq!(session.current_index(), 0);
        assert!(!session.is_awaiting_advance());
        assert_eq!(session.questions().len(), 10);
    }

    #[test]
    fn reset_reshuffles() {
        let mut session = session(15);
        let first = session.questions().to_vec();

        let mut orders = vec![];
        for _ in 0..5 {
            session.reset();
            orders.push(session.questions().to_vec());
        }

        assert!(orders.iter().any(|order| *order != first));
    }

    #[test]
    fn snapshot_mirrors_session() {
        let mut session = session(16);
        session.start().unwrap();
        let choice = correct_choice(&session);
        session.submit_answer(&choice).unwrap();

        let snapshot = session.snapshot();

        assert_eq!(snapshot.phase, Phase::Playing);
        assert_eq!(snapshot.question_number, 1);
        assert_eq!(snapshot.question_count, 10);
        assert_eq!(snapshot.revealed_tiles, vec![0]);
        assert_eq!(snapshot.score, 1);
        assert!(snapshot.is_awaiting_advance());
        assert_eq!(snapshot.question.as_ref(), session.current_question());
        assert_eq!(snapshot.image_url, QuizConfig::DEFAULT_IMAGE_URL);
    }

    #[test]
    fn transition_error_message_names_operation_and_phase() {
        use alloc::string::ToString;
        let err = QuizError::InvalidTransition {
            operation: Operation::SubmitAnswer,
            phase: Phase::Setup,
        };

        assert_eq!(
            err.to_string(),
            "Cannot submit an answer while the session is in setup"
        );
    }
}

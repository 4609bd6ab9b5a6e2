//! Questionnaire wizard state machine.
//!
//! States are step indices `0..N-1` plus a terminal `Completed` reached by
//! advancing past the last answered step. The engine, not the UI, guards
//! the invariant that a completed questionnaire has an answer for every
//! question: `advance()` refuses to move while the current step is
//! unanswered, and a terminal engine rejects all further operations. A
//! fresh engine is required to restart.

use thiserror::Error;

use crate::domain::foundation::{Percentage, QuestionId, ValidationError};

use super::{questionnaire, Question, QuestionKind, UserAnswers};

/// Errors from wizard operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The questionnaire already emitted its completion; no further
    /// operations are valid.
    #[error("Questionnaire is already completed")]
    Completed,

    /// `select_option` was called for a question other than the current
    /// step's.
    #[error("Question '{0}' is not the current step")]
    WrongStep(QuestionId),

    /// The option is not declared for the current question.
    #[error("Option '{option}' is not declared for question '{question}'")]
    UnknownOption { question: QuestionId, option: String },
}

/// Result of an `advance()` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineOutcome {
    /// The wizard is still running (moved a step, or stayed because the
    /// current step is unanswered).
    InProgress,
    /// The last step was advanced past; carries the full answer set.
    Completed(UserAnswers),
}

/// Wizard over an ordered question list.
#[derive(Debug, Clone)]
pub struct QuestionnaireEngine {
    questions: Vec<Question>,
    step_index: usize,
    answers: UserAnswers,
    completed: bool,
}

impl QuestionnaireEngine {
    /// Creates an engine over the standard onboarding catalog.
    pub fn new() -> Self {
        Self {
            questions: questionnaire().to_vec(),
            step_index: 0,
            answers: UserAnswers::new(),
            completed: false,
        }
    }

    /// Creates an engine over a custom question list (tests, previews).
    pub fn with_questions(questions: Vec<Question>) -> Result<Self, ValidationError> {
        if questions.is_empty() {
            return Err(ValidationError::empty_field("questions"));
        }
        Ok(Self {
            questions,
            step_index: 0,
            answers: UserAnswers::new(),
            completed: false,
        })
    }

    /// The question at the current step, or None once completed.
    pub fn current_question(&self) -> Option<&Question> {
        if self.completed {
            None
        } else {
            self.questions.get(self.step_index)
        }
    }

    /// Records a selection for the current step's question.
    ///
    /// Single-choice questions replace their value; multi-choice questions
    /// toggle membership. Ids other than the current step's and undeclared
    /// options are rejected.
    pub fn select_option(
        &mut self,
        question_id: &QuestionId,
        option: &str,
    ) -> Result<(), EngineError> {
        let question = self.current_question().ok_or(EngineError::Completed)?;
        if question.id() != question_id {
            return Err(EngineError::WrongStep(question_id.clone()));
        }
        if !question.has_option(option) {
            return Err(EngineError::UnknownOption {
                question: question_id.clone(),
                option: option.to_string(),
            });
        }
        match question.kind() {
            QuestionKind::Single => self.answers.set_single(question_id.clone(), option),
            QuestionKind::Multiple => self.answers.toggle_multiple(question_id.clone(), option),
        }
        Ok(())
    }

    /// True if the current step has a usable answer.
    pub fn is_current_step_answered(&self) -> bool {
        match self.current_question() {
            Some(question) => self
                .answers
                .get(question.id())
                .map(|a| a.is_answered())
                .unwrap_or(false),
            None => false,
        }
    }

    /// Moves to the next step, or completes the wizard from the last one.
    ///
    /// A no-op while the current step is unanswered. From the last step
    /// with an answer present, emits [`EngineOutcome::Completed`] with the
    /// full answer set and becomes terminal.
    pub fn advance(&mut self) -> Result<EngineOutcome, EngineError> {
        if self.completed {
            return Err(EngineError::Completed);
        }
        if !self.is_current_step_answered() {
            return Ok(EngineOutcome::InProgress);
        }
        if self.is_last_step() {
            self.completed = true;
            return Ok(EngineOutcome::Completed(self.answers.clone()));
        }
        self.step_index += 1;
        Ok(EngineOutcome::InProgress)
    }

    /// Moves back one step, keeping all recorded answers. A no-op at the
    /// first step.
    pub fn retreat(&mut self) -> Result<(), EngineError> {
        if self.completed {
            return Err(EngineError::Completed);
        }
        self.step_index = self.step_index.saturating_sub(1);
        Ok(())
    }

    /// Progress through the wizard, `(step + 1) / total`, for display.
    pub fn progress(&self) -> Percentage {
        Percentage::from_ratio(self.step_index + 1, self.questions.len())
    }

    /// True when the current step is the final question.
    pub fn is_last_step(&self) -> bool {
        self.step_index + 1 == self.questions.len()
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn total_steps(&self) -> usize {
        self.questions.len()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// The in-flight answer set.
    pub fn answers(&self) -> &UserAnswers {
        &self.answers
    }
}

impl Default for QuestionnaireEngine {
    fn default() -> Self {
        Self::new()
    }
}

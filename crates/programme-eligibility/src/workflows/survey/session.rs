use chrono::NaiveDate;

use super::classifier::{ClassifyError, EligibilityClassifier, EligibilityResult};
use super::domain::{StepId, SurveyAnswers};
use super::questions::{StepResult, WELCOME_MESSAGE};
use super::sequencer::{StepError, StepSequencer};

/// One in-progress questionnaire run, held only in memory.
///
/// Answers for the question on screen are written through
/// [`SurveySession::answers_mut`] before calling [`SurveySession::advance`].
/// Going back replays the recorded history instead of re-deriving the
/// predecessor, so it also works from the final step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveySession {
    cursor: StepId,
    answers: SurveyAnswers,
    history: Vec<StepId>,
    current: StepResult,
}

impl SurveySession {
    pub fn new() -> Self {
        Self {
            cursor: StepId::Welcome,
            answers: SurveyAnswers::default(),
            history: Vec::new(),
            current: StepResult::Welcome {
                message: WELCOME_MESSAGE,
            },
        }
    }

    pub fn cursor(&self) -> StepId {
        self.cursor
    }

    pub fn current(&self) -> &StepResult {
        &self.current
    }

    pub fn answers(&self) -> &SurveyAnswers {
        &self.answers
    }

    pub fn answers_mut(&mut self) -> &mut SurveyAnswers {
        &mut self.answers
    }

    pub fn history(&self) -> &[StepId] {
        &self.history
    }

    pub fn is_complete(&self) -> bool {
        self.current.is_complete()
    }

    /// Moves forward; on error the cursor and answers are left untouched.
    /// A completed session stays on its completion message.
    pub fn advance(
        &mut self,
        sequencer: &StepSequencer,
        today: NaiveDate,
    ) -> Result<&StepResult, StepError> {
        if self.is_complete() {
            return Ok(&self.current);
        }
        let transition = sequencer.advance(self.cursor, self.answers.clone(), today)?;
        self.history.push(self.cursor);
        self.answers = transition.answers;
        self.cursor = transition.result.step();
        self.current = transition.result;
        Ok(&self.current)
    }

    /// Returns to the previous step, keeping every answer recorded so far.
    pub fn back(&mut self, sequencer: &StepSequencer) -> &StepResult {
        let previous = self
            .history
            .pop()
            .unwrap_or_else(|| sequencer.previous_step(self.cursor, &self.answers));
        self.cursor = previous;
        self.current = sequencer.present(previous, &self.answers);
        &self.current
    }

    /// Discards all answers and returns to the welcome step.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    pub fn recommend(
        &self,
        classifier: &EligibilityClassifier,
        today: NaiveDate,
    ) -> Result<EligibilityResult, ClassifyError> {
        classifier.classify(&self.answers, today)
    }
}

impl Default for SurveySession {
    fn default() -> Self {
        Self::new()
    }
}

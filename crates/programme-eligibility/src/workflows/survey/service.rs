use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::calendar::{AcademicCalendar, Clock};
use super::classifier::{ClassifyError, EligibilityClassifier, EligibilityResult};
use super::domain::{StepId, SurveyAnswers};
use super::questions::{InputKind, StepResult};
use super::sequencer::{StepError, StepSequencer, Transition};

/// Next-step request: the cursor, the direction, and the answers so far.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StepRequest {
    pub current_step: StepId,
    #[serde(default)]
    pub is_previous: bool,
    #[serde(flatten)]
    pub answers: SurveyAnswers,
}

/// Flattened next-step response with the updated answers echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReply {
    pub next_step: StepId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<&'static str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<InputKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_placement: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub answers: SurveyAnswers,
}

impl From<Transition> for StepReply {
    fn from(transition: Transition) -> Self {
        let Transition { answers, result } = transition;
        let next_step = result.step();
        let message = result.message();

        match result {
            StepResult::Ask { question, .. } => Self {
                next_step,
                question: Some(question.prompt),
                kind: Some(question.kind),
                options: question.options,
                has_placement: question.asks_placement.then_some(true),
                message,
                answers,
            },
            StepResult::Welcome { .. } | StepResult::Complete { .. } => Self {
                next_step,
                question: None,
                kind: None,
                options: Vec::new(),
                has_placement: None,
                message,
                answers,
            },
        }
    }
}

/// Composes the sequencer, the classifier, and the clock behind the two
/// request/response operations.
pub struct SurveyService<C> {
    sequencer: StepSequencer,
    classifier: EligibilityClassifier,
    clock: Arc<C>,
}

impl<C> SurveyService<C>
where
    C: Clock + 'static,
{
    pub fn new(calendar: AcademicCalendar, clock: Arc<C>) -> Self {
        Self {
            sequencer: StepSequencer::new(calendar),
            classifier: EligibilityClassifier::new(calendar),
            clock,
        }
    }

    pub fn sequencer(&self) -> &StepSequencer {
        &self.sequencer
    }

    pub fn classifier(&self) -> &EligibilityClassifier {
        &self.classifier
    }

    /// Resolve the next (or previous) step for a request.
    pub fn next_step(&self, request: StepRequest) -> Result<StepReply, SurveyServiceError> {
        let StepRequest {
            current_step,
            is_previous,
            answers,
        } = request;

        let transition = if is_previous {
            self.sequencer.retreat(current_step, answers)
        } else {
            self.sequencer
                .advance(current_step, answers, self.clock.today())
                .map_err(|error| {
                    warn!(step = %current_step, %error, "survey step rejected");
                    error
                })?
        };

        debug!(
            from = %current_step,
            to = %transition.result.step(),
            backward = is_previous,
            "survey step resolved"
        );

        Ok(StepReply::from(transition))
    }

    /// Classify a completed answers record.
    pub fn submit(&self, answers: &SurveyAnswers) -> Result<EligibilityResult, SurveyServiceError> {
        let result = self.classifier.classify(answers, self.clock.today())?;

        info!(
            stage = ?answers.effective_stage(),
            sector = ?answers.sector,
            primary_tab = %result.primary_tab,
            secondary = result.secondary_tabs.len(),
            "eligibility classified"
        );

        Ok(result)
    }
}

/// Error raised by the survey service.
#[derive(Debug, thiserror::Error)]
pub enum SurveyServiceError {
    #[error(transparent)]
    Step(#[from] StepError),
    #[error(transparent)]
    Classify(#[from] ClassifyError),
}

//! Multi-step eligibility questionnaire and the classifier that turns its
//! answers into recommended programme tabs.

pub mod calendar;
pub(crate) mod classifier;
pub mod commentary;
pub mod domain;
pub mod questions;
pub mod router;
pub mod sequencer;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use calendar::{
    AcademicCalendar, Clock, FixedClock, StudyTimeline, TimelineError, TimelineSnapshot,
    DEFAULT_CUTOFF_MONTH,
};
pub use classifier::{ClassifyError, EligibilityClassifier, EligibilityResult};
pub use commentary::CommentaryKey;
pub use domain::{EducationStage, Sector, StepId, SurveyAnswers, Tab};
pub use questions::{InputKind, Question, StepResult};
pub use router::survey_router;
pub use sequencer::{StepError, StepSequencer, Transition};
pub use service::{StepReply, StepRequest, SurveyService, SurveyServiceError};
pub use session::SurveySession;

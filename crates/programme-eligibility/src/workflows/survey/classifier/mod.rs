mod recommendation;
mod rules;

pub use recommendation::EligibilityResult;

use chrono::NaiveDate;

use super::calendar::{AcademicCalendar, StudyTimeline, TimelineError};
use super::domain::{EducationStage, SurveyAnswers};

/// Stateless classifier mapping a completed answers record onto tabs.
#[derive(Debug, Clone, Copy, Default)]
pub struct EligibilityClassifier {
    calendar: AcademicCalendar,
}

impl EligibilityClassifier {
    pub fn new(calendar: AcademicCalendar) -> Self {
        Self { calendar }
    }

    /// Classifies `answers` as of `today`.
    ///
    /// University records must carry both years; anything without a
    /// recognised education stage is treated as high school.
    pub fn classify(
        &self,
        answers: &SurveyAnswers,
        today: NaiveDate,
    ) -> Result<EligibilityResult, ClassifyError> {
        let result = match answers.effective_stage() {
            Some(EducationStage::University) => {
                let timeline = StudyTimeline::from_answers(answers)?;
                let snapshot = self.calendar.snapshot(&timeline, today);
                rules::university(answers, &snapshot)
            }
            Some(EducationStage::Graduate) => rules::graduate(answers),
            Some(EducationStage::HighSchool) | None => rules::high_school(answers.sector),
        };

        Ok(result)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    #[error("cannot classify university record: {0}")]
    Timeline(#[from] TimelineError),
}

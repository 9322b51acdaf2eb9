use chrono::NaiveDate;

use super::calendar::{AcademicCalendar, StudyTimeline, TimelineError, TimelineSnapshot};
use super::domain::{EducationStage, StepId, SurveyAnswers};
use super::questions::{
    education_stage_question, grad_offer_question, internship_experience_question,
    sector_question, spring_conversion_question, spring_weeks_question,
    university_timeline_question, StepResult, COMPLETION_MESSAGE, HIGH_SCHOOL_MESSAGE,
    WELCOME_MESSAGE,
};

/// Result of a navigation call: the answers after any side effects of the
/// traversed step, and what to present next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub answers: SurveyAnswers,
    pub result: StepResult,
}

/// Recoverable rejection; the caller stays on [`StepError::step`] and re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error("Please select a sector")]
    MissingSector,
    #[error("Please select your education stage")]
    MissingEducationStage,
    #[error("Error processing step: {source}")]
    Timeline {
        step: StepId,
        #[source]
        source: TimelineError,
    },
}

impl StepError {
    pub fn step(&self) -> StepId {
        match self {
            StepError::MissingSector => StepId::SectorSelect,
            StepError::MissingEducationStage => StepId::EducationStageSelect,
            StepError::Timeline { step, .. } => *step,
        }
    }
}

/// Stateless questionnaire state machine; every call re-derives the
/// transition from the cursor and the answers record.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepSequencer {
    calendar: AcademicCalendar,
}

impl StepSequencer {
    pub fn new(calendar: AcademicCalendar) -> Self {
        Self { calendar }
    }

    pub fn calendar(&self) -> AcademicCalendar {
        self.calendar
    }

    /// Forward transition out of `step`.
    ///
    /// Consumes the answers and hands back the updated record, so a retried
    /// call starts from the caller's copy rather than re-applying side effects.
    pub fn advance(
        &self,
        step: StepId,
        answers: SurveyAnswers,
        today: NaiveDate,
    ) -> Result<Transition, StepError> {
        let mut answers = answers;

        let result = match step {
            StepId::Welcome => self.present(StepId::SectorSelect, &answers),
            StepId::SectorSelect => {
                if answers.sector.is_none() {
                    return Err(StepError::MissingSector);
                }
                self.present(StepId::EducationStageSelect, &answers)
            }
            StepId::EducationStageSelect => match answers.education_stage {
                None => return Err(StepError::MissingEducationStage),
                Some(EducationStage::HighSchool) => StepResult::complete(HIGH_SCHOOL_MESSAGE),
                Some(EducationStage::Graduate) => {
                    self.present(StepId::InternshipExperience, &answers)
                }
                Some(EducationStage::University) => {
                    self.present(StepId::UniversityTimeline, &answers)
                }
            },
            StepId::UniversityTimeline => {
                let snapshot = self.snapshot(step, &answers, today)?;
                if snapshot.year_of_study < 2 || snapshot.has_graduated() {
                    StepResult::complete(COMPLETION_MESSAGE)
                } else {
                    self.present(StepId::SpringWeeks, &answers)
                }
            }
            StepId::SpringWeeks => {
                if answers.has_spring_weeks == Some(true) {
                    self.present(StepId::SpringConversion, &answers)
                } else if self.snapshot(step, &answers, today)?.year_of_study >= 2 {
                    self.present(StepId::InternshipExperience, &answers)
                } else {
                    StepResult::complete(COMPLETION_MESSAGE)
                }
            }
            StepId::SpringConversion => {
                if answers.converted_spring_to_internship == Some(true) {
                    answers.mark_experience();
                    self.grad_offer_or_complete(step, &answers, today)?
                } else {
                    self.present(StepId::InternshipExperience, &answers)
                }
            }
            StepId::InternshipExperience => {
                if answers.internship_experience == Some(true) {
                    answers.mark_experience();
                }
                if answers.education_stage == Some(EducationStage::Graduate) {
                    self.present(StepId::GradOffer, &answers)
                } else {
                    self.grad_offer_or_complete(step, &answers, today)?
                }
            }
            StepId::GradOffer | StepId::Final | StepId::Unrecognized => {
                StepResult::complete(COMPLETION_MESSAGE)
            }
        };

        Ok(Transition { answers, result })
    }

    /// Backward transition: the step whose forward transition led to `step`.
    pub fn retreat(&self, step: StepId, answers: SurveyAnswers) -> Transition {
        let previous = self.previous_step(step, &answers);
        let result = self.present(previous, &answers);
        Transition { answers, result }
    }

    /// Inverse of [`StepSequencer::advance`], disambiguated by the recorded answers.
    pub fn previous_step(&self, step: StepId, answers: &SurveyAnswers) -> StepId {
        match step {
            StepId::SectorSelect => StepId::Welcome,
            StepId::EducationStageSelect => StepId::SectorSelect,
            StepId::UniversityTimeline => StepId::EducationStageSelect,
            StepId::SpringWeeks => StepId::UniversityTimeline,
            StepId::SpringConversion => StepId::SpringWeeks,
            StepId::InternshipExperience => {
                if answers.education_stage == Some(EducationStage::Graduate) {
                    StepId::EducationStageSelect
                } else if answers.has_spring_weeks == Some(true)
                    && answers.converted_spring_to_internship == Some(false)
                {
                    StepId::SpringConversion
                } else {
                    StepId::SpringWeeks
                }
            }
            StepId::GradOffer => {
                if answers.has_spring_weeks == Some(true)
                    && answers.converted_spring_to_internship == Some(true)
                {
                    StepId::SpringConversion
                } else {
                    StepId::InternshipExperience
                }
            }
            StepId::Welcome | StepId::Final | StepId::Unrecognized => StepId::SectorSelect,
        }
    }

    /// Question (or message) shown while the cursor sits on `step`.
    pub fn present(&self, step: StepId, answers: &SurveyAnswers) -> StepResult {
        match step {
            StepId::Welcome => StepResult::Welcome {
                message: WELCOME_MESSAGE,
            },
            StepId::SectorSelect => StepResult::ask(step, sector_question()),
            StepId::EducationStageSelect => StepResult::ask(step, education_stage_question()),
            StepId::UniversityTimeline => StepResult::ask(step, university_timeline_question()),
            StepId::SpringWeeks => StepResult::ask(step, spring_weeks_question(answers.sector)),
            StepId::SpringConversion => {
                StepResult::ask(step, spring_conversion_question(answers.sector))
            }
            StepId::InternshipExperience => {
                StepResult::ask(step, internship_experience_question(answers.education_stage))
            }
            StepId::GradOffer => StepResult::ask(step, grad_offer_question()),
            StepId::Final | StepId::Unrecognized => StepResult::complete(COMPLETION_MESSAGE),
        }
    }

    fn snapshot(
        &self,
        step: StepId,
        answers: &SurveyAnswers,
        today: NaiveDate,
    ) -> Result<TimelineSnapshot, StepError> {
        let timeline = StudyTimeline::from_answers(answers)
            .map_err(|source| StepError::Timeline { step, source })?;
        Ok(self.calendar.snapshot(&timeline, today))
    }

    fn grad_offer_or_complete(
        &self,
        step: StepId,
        answers: &SurveyAnswers,
        today: NaiveDate,
    ) -> Result<StepResult, StepError> {
        let snapshot = self.snapshot(step, answers, today)?;
        if snapshot.approaching_graduation() {
            Ok(self.present(StepId::GradOffer, answers))
        } else {
            Ok(StepResult::complete(COMPLETION_MESSAGE))
        }
    }
}

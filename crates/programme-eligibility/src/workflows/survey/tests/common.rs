use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::survey::{
    AcademicCalendar, EducationStage, EligibilityClassifier, FixedClock, Sector, StepSequencer,
    SurveyAnswers, SurveyService,
};

/// Academic year in effect on [`today`] under the default July cutoff.
pub(super) const ACADEMIC_YEAR: i32 = 2026;

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 1).expect("valid date")
}

pub(super) fn sequencer() -> StepSequencer {
    StepSequencer::default()
}

pub(super) fn classifier() -> EligibilityClassifier {
    EligibilityClassifier::default()
}

pub(super) fn build_service() -> Arc<SurveyService<FixedClock>> {
    Arc::new(SurveyService::new(
        AcademicCalendar::default(),
        Arc::new(FixedClock(today())),
    ))
}

pub(super) fn high_schooler(sector: Sector) -> SurveyAnswers {
    SurveyAnswers {
        sector: Some(sector),
        education_stage: Some(EducationStage::HighSchool),
        ..SurveyAnswers::default()
    }
}

/// University student `years_in` academic years after starting a course of
/// `duration` years.
pub(super) fn student(
    sector: Sector,
    years_in: i32,
    duration: i32,
    has_placement: bool,
) -> SurveyAnswers {
    let start_year = ACADEMIC_YEAR - years_in;
    SurveyAnswers {
        sector: Some(sector),
        education_stage: Some(EducationStage::University),
        start_year: Some(start_year),
        graduation_year: Some(start_year + duration),
        has_placement,
        ..SurveyAnswers::default()
    }
}

pub(super) fn graduate(sector: Sector, has_experience: bool) -> SurveyAnswers {
    SurveyAnswers {
        sector: Some(sector),
        education_stage: Some(EducationStage::Graduate),
        has_experience,
        ..SurveyAnswers::default()
    }
}

pub(super) async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}

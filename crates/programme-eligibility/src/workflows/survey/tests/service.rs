use super::common::*;

use crate::workflows::survey::questions::{InputKind, COMPLETION_MESSAGE};
use crate::workflows::survey::{
    Sector, StepError, StepId, StepRequest, SurveyAnswers, SurveyServiceError, Tab,
};

#[test]
fn next_step_flattens_question_into_reply() {
    let service = build_service();
    let reply = service
        .next_step(StepRequest {
            current_step: StepId::EducationStageSelect,
            is_previous: false,
            answers: student(Sector::Finance, 1, 3, false),
        })
        .expect("step resolves");

    assert_eq!(reply.next_step, StepId::UniversityTimeline);
    assert_eq!(reply.kind, Some(InputKind::YearSelection));
    assert_eq!(reply.has_placement, Some(true));
    assert!(reply.options.is_empty());
    assert!(reply.message.is_none());
}

#[test]
fn completion_reply_carries_message_only() {
    let service = build_service();
    let reply = service
        .next_step(StepRequest {
            current_step: StepId::GradOffer,
            is_previous: false,
            answers: graduate(Sector::Law, true),
        })
        .expect("step resolves");

    assert_eq!(reply.next_step, StepId::Final);
    assert_eq!(reply.message, Some(COMPLETION_MESSAGE));
    assert!(reply.question.is_none());
    assert!(reply.kind.is_none());
}

#[test]
fn next_step_echoes_updated_answers() {
    let service = build_service();
    let mut answers = student(Sector::Finance, 2, 3, false);
    answers.has_spring_weeks = Some(true);
    answers.converted_spring_to_internship = Some(true);

    let reply = service
        .next_step(StepRequest {
            current_step: StepId::SpringConversion,
            is_previous: false,
            answers,
        })
        .expect("step resolves");

    assert!(reply.answers.has_experience);
    assert_eq!(reply.next_step, StepId::GradOffer);
}

#[test]
fn previous_flag_navigates_backward() {
    let service = build_service();
    let reply = service
        .next_step(StepRequest {
            current_step: StepId::SpringWeeks,
            is_previous: true,
            answers: student(Sector::Technology, 1, 3, false),
        })
        .expect("step resolves");

    assert_eq!(reply.next_step, StepId::UniversityTimeline);
}

#[test]
fn missing_sector_is_reported_as_step_error() {
    let service = build_service();
    let err = service
        .next_step(StepRequest {
            current_step: StepId::SectorSelect,
            is_previous: false,
            answers: SurveyAnswers::default(),
        })
        .expect_err("sector required");

    assert!(matches!(
        err,
        SurveyServiceError::Step(StepError::MissingSector)
    ));
}

#[test]
fn submit_classifies_with_injected_clock() {
    let service = build_service();
    let result = service
        .submit(&student(Sector::Finance, 3, 4, false))
        .expect("classifies");

    assert_eq!(result.primary_tab, Tab::SummerInternships);
    assert_eq!(result.secondary_tabs, vec![Tab::SpringWeeks]);
}

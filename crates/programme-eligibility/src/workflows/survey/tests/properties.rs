use std::collections::HashSet;

use proptest::prelude::*;

use super::common::*;

use crate::workflows::survey::{
    EducationStage, Sector, StepId, StudyTimeline, SurveyAnswers, SurveySession,
};

/// Choices a respondent makes; each is written only when its step is on screen.
#[derive(Debug, Clone)]
struct Persona {
    sector: Sector,
    stage: EducationStage,
    years_in: i32,
    duration: i32,
    has_placement: bool,
    has_spring_weeks: bool,
    converted: bool,
    internship: bool,
    grad_offer: bool,
}

fn sector_strategy() -> impl Strategy<Value = Sector> {
    prop_oneof![
        Just(Sector::Finance),
        Just(Sector::Technology),
        Just(Sector::Law),
    ]
}

fn stage_strategy() -> impl Strategy<Value = EducationStage> {
    prop_oneof![
        Just(EducationStage::HighSchool),
        Just(EducationStage::University),
        Just(EducationStage::Graduate),
    ]
}

prop_compose! {
    fn persona_strategy()(
        sector in sector_strategy(),
        stage in stage_strategy(),
        years_in in -1i32..7,
        duration in 0i32..6,
        has_placement in any::<bool>(),
        has_spring_weeks in any::<bool>(),
        converted in any::<bool>(),
        internship in any::<bool>(),
        grad_offer in any::<bool>(),
    ) -> Persona {
        Persona {
            sector,
            stage,
            years_in,
            duration,
            has_placement,
            has_spring_weeks,
            converted,
            internship,
            grad_offer,
        }
    }
}

fn answer(step: StepId, persona: &Persona, answers: &mut SurveyAnswers) {
    match step {
        StepId::SectorSelect => answers.sector = Some(persona.sector),
        StepId::EducationStageSelect => answers.education_stage = Some(persona.stage),
        StepId::UniversityTimeline => {
            let start_year = ACADEMIC_YEAR - persona.years_in;
            answers.start_year = Some(start_year);
            answers.graduation_year = Some(start_year + persona.duration);
            answers.has_placement = persona.has_placement;
        }
        StepId::SpringWeeks => answers.has_spring_weeks = Some(persona.has_spring_weeks),
        StepId::SpringConversion => {
            answers.converted_spring_to_internship = Some(persona.converted)
        }
        StepId::InternshipExperience => answers.internship_experience = Some(persona.internship),
        StepId::GradOffer => answers.has_grad_offer = persona.grad_offer,
        StepId::Welcome | StepId::Final | StepId::Unrecognized => {}
    }
}

/// Drives a session to completion, checking each transition as it goes.
fn walk(persona: &Persona) -> Result<SurveySession, TestCaseError> {
    let sequencer = sequencer();
    let mut session = SurveySession::new();
    let mut had_experience = false;

    for _ in 0..12 {
        if session.is_complete() {
            return Ok(session);
        }

        let from = session.cursor();
        let from_prompt = session.current().question().map(|question| question.prompt);
        answer(from, persona, session.answers_mut());
        session
            .advance(&sequencer, today())
            .map_err(|err| TestCaseError::fail(format!("{from} rejected: {err}")))?;

        if had_experience {
            prop_assert!(session.answers().has_experience, "experience reset after {}", from);
        }
        had_experience = session.answers().has_experience;

        if !session.is_complete() {
            let back = sequencer.retreat(session.cursor(), session.answers().clone());
            prop_assert_eq!(back.result.step(), from);
            prop_assert_eq!(back.result.question().map(|question| question.prompt), from_prompt);
        }
    }

    Err(TestCaseError::fail("questionnaire did not terminate"))
}

proptest! {
    #[test]
    fn year_of_study_stays_within_course(
        start_year in 1990i32..2040,
        duration in 1i32..8,
        academic_year in 1980i32..2060,
        has_placement in any::<bool>(),
    ) {
        let timeline = StudyTimeline::new(start_year, start_year + duration, has_placement)
            .expect("ordered years");
        let year = timeline.year_of_study(academic_year);
        prop_assert!(year >= 1);
        prop_assert!(year <= duration);
    }

    #[test]
    fn walks_terminate_with_round_trips_and_monotonic_experience(persona in persona_strategy()) {
        let session = walk(&persona)?;
        prop_assert!(session.is_complete());
    }

    #[test]
    fn completed_walks_classify_with_clean_secondaries(persona in persona_strategy()) {
        let session = walk(&persona)?;
        let result = session
            .recommend(&classifier(), today())
            .map_err(|err| TestCaseError::fail(err.to_string()))?;

        prop_assert!(!result.secondary_tabs.contains(&result.primary_tab));
        let unique: HashSet<_> = result.secondary_tabs.iter().collect();
        prop_assert_eq!(unique.len(), result.secondary_tabs.len());
        for tab in result.tabs() {
            prop_assert!(result
                .commentary_for(tab)
                .map(|text| !text.is_empty())
                .unwrap_or(false));
        }
    }
}

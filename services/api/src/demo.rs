use crate::infra::{parse_date, parse_sector, parse_stage};
use chrono::{Local, NaiveDate};
use clap::Args;
use programme_eligibility::config::AppConfig;
use programme_eligibility::error::AppError;
use programme_eligibility::workflows::survey::commentary::resolved_key;
use programme_eligibility::workflows::survey::{
    EducationStage, EligibilityClassifier, EligibilityResult, Sector, StepId, StepSequencer,
    StudyTimeline, SurveyAnswers, SurveyServiceError, SurveySession,
};

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Sector of interest (Finance, Technology or Law)
    #[arg(long, value_parser = parse_sector)]
    pub(crate) sector: Sector,
    /// Education stage (high school, university or graduate)
    #[arg(long, value_parser = parse_stage)]
    pub(crate) stage: EducationStage,
    /// University start year
    #[arg(long)]
    pub(crate) start_year: Option<i32>,
    /// Expected graduation year
    #[arg(long)]
    pub(crate) graduation_year: Option<i32>,
    /// The course includes an industrial placement year
    #[arg(long)]
    pub(crate) placement: bool,
    /// Prior relevant internship or full-time experience
    #[arg(long)]
    pub(crate) experience: bool,
    /// Already holds a graduate offer
    #[arg(long)]
    pub(crate) grad_offer: bool,
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the recommendation as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let calendar = AppConfig::load()?.survey.calendar()?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let mut answers = SurveyAnswers {
        sector: Some(args.sector),
        education_stage: Some(args.stage),
        start_year: args.start_year,
        graduation_year: args.graduation_year,
        has_placement: args.placement,
        has_grad_offer: args.grad_offer,
        ..SurveyAnswers::default()
    };
    if args.experience {
        answers.mark_experience();
    }

    let result = EligibilityClassifier::new(calendar)
        .classify(&answers, today)
        .map_err(SurveyServiceError::from)?;

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(err) => println!("Recommendation unavailable as JSON: {}", err),
        }
        return Ok(());
    }

    println!(
        "Eligibility for a {} {} student (as of {})",
        args.sector, args.stage, today
    );
    if let Ok(timeline) = StudyTimeline::from_answers(&answers) {
        let snapshot = calendar.snapshot(&timeline, today);
        println!(
            "- Academic year {} | year {} of {} | {} year(s) until graduation",
            snapshot.academic_year,
            snapshot.year_of_study,
            snapshot.total_duration,
            snapshot.years_until_graduation
        );
    }
    render_recommendation(&result, Some(args.sector));

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let calendar = AppConfig::load()?.survey.calendar()?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let sequencer = StepSequencer::new(calendar);
    let classifier = EligibilityClassifier::new(calendar);

    println!("Programme eligibility demo (as of {})", today);
    for persona in personas(calendar.academic_year(today)) {
        println!("\n== {} ==", persona.name);
        let mut session = SurveySession::new();
        if let Err(err) = walk(&mut session, &sequencer, &persona, today) {
            println!("  Questionnaire stopped: {}", err);
            continue;
        }

        match session.recommend(&classifier, today) {
            Ok(result) => render_recommendation(&result, session.answers().sector),
            Err(err) => println!("  Recommendation unavailable: {}", err),
        }
    }

    Ok(())
}

/// Scripted respondent; each field is written only when its question is shown.
struct Persona {
    name: &'static str,
    sector: Sector,
    stage: EducationStage,
    years: Option<(i32, i32)>,
    has_placement: bool,
    has_spring_weeks: bool,
    converted: bool,
    internship: bool,
    grad_offer: bool,
}

impl Persona {
    fn answer(&self, step: StepId, answers: &mut SurveyAnswers) -> String {
        match step {
            StepId::SectorSelect => {
                answers.sector = Some(self.sector);
                self.sector.to_string()
            }
            StepId::EducationStageSelect => {
                answers.education_stage = Some(self.stage);
                self.stage.to_string()
            }
            StepId::UniversityTimeline => match self.years {
                Some((start_year, graduation_year)) => {
                    answers.start_year = Some(start_year);
                    answers.graduation_year = Some(graduation_year);
                    answers.has_placement = self.has_placement;
                    format!(
                        "{} to {}{}",
                        start_year,
                        graduation_year,
                        if self.has_placement {
                            " with placement"
                        } else {
                            ""
                        }
                    )
                }
                None => "(left blank)".to_string(),
            },
            StepId::SpringWeeks => {
                answers.has_spring_weeks = Some(self.has_spring_weeks);
                yes_no(self.has_spring_weeks)
            }
            StepId::SpringConversion => {
                answers.converted_spring_to_internship = Some(self.converted);
                yes_no(self.converted)
            }
            StepId::InternshipExperience => {
                answers.internship_experience = Some(self.internship);
                yes_no(self.internship)
            }
            StepId::GradOffer => {
                answers.has_grad_offer = self.grad_offer;
                yes_no(self.grad_offer)
            }
            StepId::Welcome | StepId::Final | StepId::Unrecognized => String::new(),
        }
    }
}

fn yes_no(value: bool) -> String {
    let answer = if value { "yes" } else { "no" };
    answer.to_string()
}

fn personas(academic_year: i32) -> Vec<Persona> {
    vec![
        Persona {
            name: "Sixth-former interested in law",
            sector: Sector::Law,
            stage: EducationStage::HighSchool,
            years: None,
            has_placement: false,
            has_spring_weeks: false,
            converted: false,
            internship: false,
            grad_offer: false,
        },
        Persona {
            name: "Penultimate-year finance student",
            sector: Sector::Finance,
            stage: EducationStage::University,
            years: Some((academic_year - 2, academic_year + 1)),
            has_placement: false,
            has_spring_weeks: true,
            converted: false,
            internship: false,
            grad_offer: false,
        },
        Persona {
            name: "Second-year finance student on a placement degree",
            sector: Sector::Finance,
            stage: EducationStage::University,
            years: Some((academic_year - 1, academic_year + 3)),
            has_placement: true,
            has_spring_weeks: false,
            converted: false,
            internship: false,
            grad_offer: false,
        },
        Persona {
            name: "Third-year technology student with a converted insight programme",
            sector: Sector::Technology,
            stage: EducationStage::University,
            years: Some((academic_year - 2, academic_year + 1)),
            has_placement: false,
            has_spring_weeks: true,
            converted: true,
            internship: false,
            grad_offer: true,
        },
        Persona {
            name: "Technology graduate without internships",
            sector: Sector::Technology,
            stage: EducationStage::Graduate,
            years: None,
            has_placement: false,
            has_spring_weeks: false,
            converted: false,
            internship: false,
            grad_offer: false,
        },
    ]
}

fn walk(
    session: &mut SurveySession,
    sequencer: &StepSequencer,
    persona: &Persona,
    today: NaiveDate,
) -> Result<(), SurveyServiceError> {
    while !session.is_complete() {
        let step = session.cursor();
        match session.current().question().map(|question| question.prompt) {
            Some(prompt) => {
                let reply = persona.answer(step, session.answers_mut());
                println!("  Q: {}", prompt);
                println!("     -> {}", reply);
            }
            None => {
                if let Some(message) = session.current().message() {
                    println!("  {}", message);
                }
            }
        }
        session.advance(sequencer, today)?;
    }

    if let Some(message) = session.current().message() {
        println!("  {}", message);
    }
    Ok(())
}

fn render_recommendation(result: &EligibilityResult, sector: Option<Sector>) {
    println!("  Primary tab: {}", result.primary_tab);
    if result.secondary_tabs.is_empty() {
        println!("  Secondary tabs: none");
    } else {
        let secondary: Vec<_> = result.secondary_tabs.iter().map(|tab| tab.label()).collect();
        println!("  Secondary tabs: {}", secondary.join(", "));
    }
    for (tab, key) in result.commentary_sources() {
        println!("  [{}] ({})", tab, resolved_key(*key, sector));
        if let Some(text) = result.commentary_for(*tab) {
            println!("    {}", text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use programme_eligibility::workflows::survey::AcademicCalendar;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 1).expect("valid date")
    }

    #[test]
    fn every_persona_completes_and_classifies() {
        let calendar = AcademicCalendar::default();
        let sequencer = StepSequencer::new(calendar);
        let classifier = EligibilityClassifier::new(calendar);

        for persona in personas(calendar.academic_year(today())) {
            let mut session = SurveySession::new();
            walk(&mut session, &sequencer, &persona, today()).expect("walk completes");
            assert!(session.is_complete(), "{} did not finish", persona.name);
            session
                .recommend(&classifier, today())
                .expect("persona classifies");
        }
    }

    #[test]
    fn converted_tech_student_is_asked_for_grad_offer() {
        let calendar = AcademicCalendar::default();
        let sequencer = StepSequencer::new(calendar);
        let persona = personas(calendar.academic_year(today()))
            .into_iter()
            .find(|persona| persona.converted)
            .expect("persona exists");

        let mut session = SurveySession::new();
        walk(&mut session, &sequencer, &persona, today()).expect("walk completes");

        assert!(session.history().contains(&StepId::GradOffer));
        assert!(session.answers().has_experience);
        assert!(session.answers().has_grad_offer);
    }
}

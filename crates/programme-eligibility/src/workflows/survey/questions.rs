use serde::Serialize;

use super::domain::{EducationStage, Sector, StepId};

pub const WELCOME_MESSAGE: &str = "Welcome to the Programme Eligibility Survey";
pub const COMPLETION_MESSAGE: &str = "Thank you for completing the survey!";
pub const HIGH_SCHOOL_MESSAGE: &str =
    "High school students should check the Pre-University tab for available opportunities.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    SingleSelect,
    Boolean,
    YearSelection,
}

/// Question presented for a step, independent of how it is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub prompt: &'static str,
    pub kind: InputKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<&'static str>,
    /// Compound year selection also collects the placement flag.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub asks_placement: bool,
}

impl Question {
    fn boolean(prompt: &'static str) -> Self {
        Self {
            prompt,
            kind: InputKind::Boolean,
            options: Vec::new(),
            asks_placement: false,
        }
    }

    fn single_select(prompt: &'static str, options: Vec<&'static str>) -> Self {
        Self {
            prompt,
            kind: InputKind::SingleSelect,
            options,
            asks_placement: false,
        }
    }
}

pub fn sector_question() -> Question {
    Question::single_select(
        "Which sector are you interested in?",
        Sector::ordered().iter().map(|sector| sector.label()).collect(),
    )
}

pub fn education_stage_question() -> Question {
    Question::single_select(
        "What is your current education stage?",
        EducationStage::ordered()
            .iter()
            .map(|stage| stage.label())
            .collect(),
    )
}

pub fn university_timeline_question() -> Question {
    Question {
        prompt: "Please select your university start year and expected graduation year:",
        kind: InputKind::YearSelection,
        options: Vec::new(),
        asks_placement: true,
    }
}

pub fn spring_weeks_question(sector: Option<Sector>) -> Question {
    match sector {
        Some(Sector::Technology) => Question::boolean("Have you attended any insight programmes?"),
        _ => Question::boolean("Have you attended any spring weeks?"),
    }
}

pub fn spring_conversion_question(sector: Option<Sector>) -> Question {
    match sector {
        Some(Sector::Technology) => Question::boolean(
            "Did you convert your insight programme to a summer internship?",
        ),
        _ => Question::boolean("Did you convert your spring week to a summer internship?"),
    }
}

pub fn internship_experience_question(stage: Option<EducationStage>) -> Question {
    match stage {
        Some(EducationStage::Graduate) => {
            Question::boolean("Do you have any internship experience?")
        }
        _ => Question::boolean(
            "Have you completed any prior relevant Summer Internships or Full-Time work?",
        ),
    }
}

pub fn grad_offer_question() -> Question {
    Question::boolean("Do you have a graduate offer?")
}

/// Outcome of a navigation call: a question to ask or a message to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult {
    Ask { step: StepId, question: Question },
    Welcome { message: &'static str },
    Complete { message: &'static str },
}

impl StepResult {
    pub fn ask(step: StepId, question: Question) -> Self {
        Self::Ask { step, question }
    }

    pub fn complete(message: &'static str) -> Self {
        Self::Complete { message }
    }

    pub fn step(&self) -> StepId {
        match self {
            Self::Ask { step, .. } => *step,
            Self::Welcome { .. } => StepId::Welcome,
            Self::Complete { .. } => StepId::Final,
        }
    }

    pub fn question(&self) -> Option<&Question> {
        match self {
            Self::Ask { question, .. } => Some(question),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Ask { .. } => None,
            Self::Welcome { message } | Self::Complete { message } => Some(*message),
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }
}

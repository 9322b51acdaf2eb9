use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Career sector chosen at the start of the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sector {
    Finance,
    Technology,
    Law,
}

impl Sector {
    pub const fn ordered() -> [Self; 3] {
        [Self::Finance, Self::Technology, Self::Law]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Finance => "Finance",
            Self::Technology => "Technology",
            Self::Law => "Law",
        }
    }

    /// Prefix used for sector-qualified commentary keys.
    pub const fn commentary_prefix(self) -> &'static str {
        match self {
            Self::Finance => "Finance",
            Self::Technology => "Tech",
            Self::Law => "Law",
        }
    }

    /// Early-exposure tab: insight programmes for tech, spring weeks elsewhere.
    pub const fn early_insight_tab(self) -> Tab {
        match self {
            Self::Technology => Tab::InsightProgrammes,
            Self::Finance | Self::Law => Tab::SpringWeeks,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "finance" => Some(Self::Finance),
            "technology" | "tech" => Some(Self::Technology),
            "law" => Some(Self::Law),
            _ => None,
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Early tab for an optional sector; records without a sector read as finance.
pub(crate) fn early_insight_tab(sector: Option<Sector>) -> Tab {
    sector.map(Sector::early_insight_tab).unwrap_or(Tab::SpringWeeks)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationStage {
    #[serde(rename = "high school", alias = "pre-university")]
    HighSchool,
    #[serde(rename = "university")]
    University,
    #[serde(rename = "graduate", alias = "graduated")]
    Graduate,
}

impl EducationStage {
    pub const fn ordered() -> [Self; 3] {
        [Self::HighSchool, Self::University, Self::Graduate]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HighSchool => "high school",
            Self::University => "university",
            Self::Graduate => "graduate",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high school" | "high-school" | "pre-university" => Some(Self::HighSchool),
            "university" => Some(Self::University),
            "graduate" | "graduated" => Some(Self::Graduate),
            _ => None,
        }
    }
}

impl fmt::Display for EducationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Career-opportunity category presented as a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tab {
    #[serde(rename = "Pre-University")]
    PreUniversity,
    #[serde(rename = "Spring Weeks")]
    SpringWeeks,
    #[serde(rename = "Insight Programmes")]
    InsightProgrammes,
    #[serde(rename = "Industrial Placements")]
    IndustrialPlacements,
    #[serde(rename = "Summer Internships")]
    SummerInternships,
    #[serde(rename = "Off-Cycle Internships")]
    OffCycleInternships,
    #[serde(rename = "Graduate Schemes")]
    GraduateSchemes,
    #[serde(rename = "Vacation Schemes")]
    VacationSchemes,
    #[serde(rename = "Non-Law Internships")]
    NonLawInternships,
    #[serde(rename = "Training Contracts")]
    TrainingContracts,
}

impl Tab {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PreUniversity => "Pre-University",
            Self::SpringWeeks => "Spring Weeks",
            Self::InsightProgrammes => "Insight Programmes",
            Self::IndustrialPlacements => "Industrial Placements",
            Self::SummerInternships => "Summer Internships",
            Self::OffCycleInternships => "Off-Cycle Internships",
            Self::GraduateSchemes => "Graduate Schemes",
            Self::VacationSchemes => "Vacation Schemes",
            Self::NonLawInternships => "Non-Law Internships",
            Self::TrainingContracts => "Training Contracts",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cursor into the questionnaire.
///
/// The first six steps keep their legacy numeric codes on the wire; the steps
/// reached only through branching are symbolic. Anything else deserializes to
/// [`StepId::Unrecognized`] and is routed to a safe default by the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "StepCode")]
pub enum StepId {
    Welcome,
    SectorSelect,
    EducationStageSelect,
    UniversityTimeline,
    SpringWeeks,
    SpringConversion,
    InternshipExperience,
    GradOffer,
    Final,
    Unrecognized,
}

impl StepId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::SectorSelect => "sector_select",
            Self::EducationStageSelect => "education_stage_select",
            Self::UniversityTimeline => "university_timeline",
            Self::SpringWeeks => "spring_weeks",
            Self::SpringConversion => "spring_conversion",
            Self::InternshipExperience => "internship_experience",
            Self::GradOffer => "grad_offer",
            Self::Final => "final",
            Self::Unrecognized => "unrecognized",
        }
    }

    pub const fn legacy_code(self) -> Option<u8> {
        match self {
            Self::Welcome => Some(0),
            Self::SectorSelect => Some(1),
            Self::EducationStageSelect => Some(2),
            Self::UniversityTimeline => Some(3),
            Self::SpringWeeks => Some(4),
            Self::SpringConversion => Some(5),
            _ => None,
        }
    }

    pub fn from_legacy_code(code: i64) -> Self {
        match code {
            0 => Self::Welcome,
            1 => Self::SectorSelect,
            2 => Self::EducationStageSelect,
            3 => Self::UniversityTimeline,
            4 => Self::SpringWeeks,
            5 => Self::SpringConversion,
            _ => Self::Unrecognized,
        }
    }

    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase();
        if let Ok(code) = normalized.parse::<i64>() {
            return Self::from_legacy_code(code);
        }
        match normalized.as_str() {
            "welcome" => Self::Welcome,
            "sector_select" | "sector" => Self::SectorSelect,
            "education_stage_select" | "education_stage" => Self::EducationStageSelect,
            "university_timeline" => Self::UniversityTimeline,
            "spring_weeks" => Self::SpringWeeks,
            "spring_conversion" => Self::SpringConversion,
            "internship_experience" => Self::InternshipExperience,
            "grad_offer" => Self::GradOffer,
            "final" => Self::Final,
            _ => Self::Unrecognized,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Final)
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StepCode {
    Index(i64),
    Name(String),
}

impl From<StepCode> for StepId {
    fn from(value: StepCode) -> Self {
        match value {
            StepCode::Index(code) => StepId::from_legacy_code(code),
            StepCode::Name(name) => StepId::parse(&name),
        }
    }
}

/// Answers accumulated over one questionnaire run.
///
/// `has_experience` only ever moves from `false` to `true`; use
/// [`SurveyAnswers::mark_experience`] rather than assigning it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyAnswers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<Sector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_stage: Option<EducationStage>,
    #[serde(
        default,
        deserialize_with = "deserialize_year",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_year: Option<i32>,
    #[serde(
        default,
        deserialize_with = "deserialize_year",
        skip_serializing_if = "Option::is_none"
    )]
    pub graduation_year: Option<i32>,
    #[serde(default)]
    pub has_placement: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_spring_weeks: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converted_spring_to_internship: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internship_experience: Option<bool>,
    #[serde(default)]
    pub has_experience: bool,
    #[serde(default)]
    pub has_grad_offer: bool,
    #[serde(default)]
    pub graduated: bool,
}

impl SurveyAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_experience(&mut self) {
        self.has_experience = true;
    }

    /// Experience counted by the final-year and graduate rules.
    pub fn has_relevant_experience(&self) -> bool {
        self.has_experience || self.has_placement
    }

    /// Stage used for classification; a graduated university record reads as graduate.
    pub fn effective_stage(&self) -> Option<EducationStage> {
        match self.education_stage {
            Some(EducationStage::University) if self.graduated => Some(EducationStage::Graduate),
            other => other,
        }
    }
}

fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YearInput {
        Number(i32),
        Text(String),
    }

    let raw = Option::<YearInput>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(YearInput::Number(year)) => Ok(Some(year)),
        Some(YearInput::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(YearInput::Text(text)) => text
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("'{text}' is not a calendar year"))),
    }
}

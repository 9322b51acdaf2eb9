use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::domain::SurveyAnswers;

pub const DEFAULT_CUTOFF_MONTH: u32 = 7;

/// Calendar years accepted for a study timeline.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1900..=2200;

/// Source of "today" for the engine; the engine never reads the system clock.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Clock pinned to a single date, for tests and replayed requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Maps calendar dates onto academic years that roll over on the first day of
/// `cutoff_month`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcademicCalendar {
    cutoff_month: u32,
}

impl AcademicCalendar {
    /// Returns `None` unless `cutoff_month` is within 1..=12.
    pub fn new(cutoff_month: u32) -> Option<Self> {
        (1..=12)
            .contains(&cutoff_month)
            .then_some(Self { cutoff_month })
    }

    pub const fn cutoff_month(&self) -> u32 {
        self.cutoff_month
    }

    pub fn academic_year(&self, today: NaiveDate) -> i32 {
        if today.month() >= self.cutoff_month {
            today.year()
        } else {
            today.year() - 1
        }
    }

    pub fn snapshot(&self, timeline: &StudyTimeline, today: NaiveDate) -> TimelineSnapshot {
        timeline.snapshot(self.academic_year(today))
    }
}

impl Default for AcademicCalendar {
    fn default() -> Self {
        Self {
            cutoff_month: DEFAULT_CUTOFF_MONTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TimelineError {
    #[error("start year and graduation year are required")]
    MissingYears,
    #[error("year {year} is outside the supported range 1900-2200")]
    YearOutOfRange { year: i32 },
    #[error("graduation year {graduation_year} precedes start year {start_year}")]
    GraduationBeforeStart {
        start_year: i32,
        graduation_year: i32,
    },
}

/// Validated university timeline taken from an answers record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudyTimeline {
    start_year: i32,
    graduation_year: i32,
    has_placement: bool,
}

impl StudyTimeline {
    pub fn new(
        start_year: i32,
        graduation_year: i32,
        has_placement: bool,
    ) -> Result<Self, TimelineError> {
        for year in [start_year, graduation_year] {
            if !YEAR_RANGE.contains(&year) {
                return Err(TimelineError::YearOutOfRange { year });
            }
        }
        if graduation_year < start_year {
            return Err(TimelineError::GraduationBeforeStart {
                start_year,
                graduation_year,
            });
        }
        Ok(Self {
            start_year,
            graduation_year,
            has_placement,
        })
    }

    pub fn from_answers(answers: &SurveyAnswers) -> Result<Self, TimelineError> {
        match (answers.start_year, answers.graduation_year) {
            (Some(start), Some(graduation)) => {
                Self::new(start, graduation, answers.has_placement)
            }
            _ => Err(TimelineError::MissingYears),
        }
    }

    pub const fn total_duration(&self) -> i32 {
        self.graduation_year - self.start_year
    }

    /// Year of study within `[1, total_duration]`.
    ///
    /// A four-year placement degree reports year 3 for the placement year and
    /// year 4 for the year after it. A zero-length course reports year 1.
    pub fn year_of_study(&self, academic_year: i32) -> i32 {
        let total = self.total_duration();
        let years_since_start = academic_year - self.start_year;

        if self.has_placement && total == 4 {
            match years_since_start {
                2 => return 3,
                3 => return 4,
                _ => {}
            }
        }

        (years_since_start + 1).clamp(1, total.max(1))
    }

    pub const fn years_until_graduation(&self, academic_year: i32) -> i32 {
        self.graduation_year - academic_year
    }

    pub fn snapshot(&self, academic_year: i32) -> TimelineSnapshot {
        let year_of_study = self.year_of_study(academic_year);
        let total_duration = self.total_duration();
        TimelineSnapshot {
            academic_year,
            year_of_study,
            years_until_graduation: self.years_until_graduation(academic_year),
            total_duration,
            is_in_final_year: year_of_study >= total_duration,
        }
    }
}

/// Derived quantities shared by the sequencer and the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineSnapshot {
    pub academic_year: i32,
    pub year_of_study: i32,
    pub years_until_graduation: i32,
    pub total_duration: i32,
    pub is_in_final_year: bool,
}

impl TimelineSnapshot {
    /// Penultimate or final year, or a placement student back for year four.
    pub fn approaching_graduation(&self) -> bool {
        self.years_until_graduation <= 1 || self.year_of_study >= 4
    }

    pub fn has_graduated(&self) -> bool {
        self.years_until_graduation <= 0
    }
}

use super::super::calendar::TimelineSnapshot;
use super::super::commentary::CommentaryKey::*;
use super::super::domain::{early_insight_tab, Sector, SurveyAnswers, Tab};
use super::recommendation::{EligibilityResult, Recommendation};

pub(crate) fn high_school(sector: Option<Sector>) -> EligibilityResult {
    Recommendation::new(sector, Tab::PreUniversity, HighSchool).build()
}

pub(crate) fn graduate(answers: &SurveyAnswers) -> EligibilityResult {
    let sector = answers.sector;
    let experienced = answers.has_relevant_experience();

    match sector {
        Some(Sector::Technology) => {
            let key = if experienced {
                GradWithExpGradScheme
            } else {
                GradNoExpGradScheme
            };
            Recommendation::new(sector, Tab::GraduateSchemes, key).build()
        }
        Some(Sector::Law) => {
            Recommendation::new(sector, Tab::TrainingContracts, GradTrainingContracts).build()
        }
        Some(Sector::Finance) | None if experienced => {
            Recommendation::new(sector, Tab::OffCycleInternships, GradWithExpOffCycleInternship)
                .secondary(Tab::GraduateSchemes, GradWithExpGradScheme)
                .build()
        }
        Some(Sector::Finance) | None => {
            Recommendation::new(sector, Tab::GraduateSchemes, GradNoExpGradScheme)
                .secondary(Tab::OffCycleInternships, GradNoExpOffCycleInternship)
                .build()
        }
    }
}

pub(crate) fn university(answers: &SurveyAnswers, snapshot: &TimelineSnapshot) -> EligibilityResult {
    let sector = answers.sector;

    match snapshot.years_until_graduation {
        years if years >= 2 => {
            if snapshot.year_of_study == 2 && answers.has_placement {
                second_year_placement(sector)
            } else {
                early_university(sector, answers.has_placement, snapshot)
            }
        }
        1 => penultimate_year(sector),
        _ => final_year(answers),
    }
}

fn early_university(
    sector: Option<Sector>,
    has_placement: bool,
    snapshot: &TimelineSnapshot,
) -> EligibilityResult {
    let early_tab = early_insight_tab(sector);
    let early_key = if snapshot.years_until_graduation > 2 {
        MoreThanTwoYearsOutSpring
    } else {
        TwoYearsOutSpring
    };

    if has_placement {
        let placement_key = if snapshot.year_of_study <= 1 {
            FirstYearIndustrialPlacement
        } else {
            TwoYearsOutIndustrialPlacement
        };
        Recommendation::new(sector, Tab::IndustrialPlacements, placement_key)
            .secondary(early_tab, early_key)
            .build()
    } else {
        Recommendation::new(sector, early_tab, early_key).build()
    }
}

fn second_year_placement(sector: Option<Sector>) -> EligibilityResult {
    let recommendation =
        Recommendation::new(sector, Tab::IndustrialPlacements, TwoYearsOutIndustrialPlacement);

    match sector {
        Some(Sector::Technology) | Some(Sector::Law) => recommendation.build(),
        Some(Sector::Finance) | None => recommendation
            .secondary(Tab::OffCycleInternships, TwoYearsOutOffCycleInternship)
            .build(),
    }
}

fn penultimate_year(sector: Option<Sector>) -> EligibilityResult {
    match sector {
        Some(Sector::Law) => Recommendation::new(sector, Tab::VacationSchemes, PenultimateVacation)
            .secondary(Tab::NonLawInternships, PenultimateNonLawInternships)
            .build(),
        _ => Recommendation::new(sector, Tab::SummerInternships, PenultimateSummerInternship)
            .secondary(early_insight_tab(sector), PenultimateSpringWeek)
            .build(),
    }
}

fn final_year(answers: &SurveyAnswers) -> EligibilityResult {
    let sector = answers.sector;
    let experienced = answers.has_relevant_experience();

    match sector {
        Some(Sector::Law) => {
            Recommendation::new(sector, Tab::TrainingContracts, FinalYearTrainingContracts)
                .secondary(Tab::VacationSchemes, FinalYearVacation)
                .build()
        }
        Some(Sector::Technology) => {
            let (primary_key, summer_key) = if answers.has_grad_offer {
                (FinalYearGradOfferGradScheme, FinalYearGradOfferSummerInternship)
            } else if experienced {
                (FinalYearWithExpGradScheme, FinalYearWithExpSummerInternship)
            } else {
                (FinalYearNoExpGradScheme, FinalYearNoExpSummerInternship)
            };
            Recommendation::new(sector, Tab::GraduateSchemes, primary_key)
                .secondary(Tab::SummerInternships, summer_key)
                .build()
        }
        Some(Sector::Finance) | None => {
            if answers.has_grad_offer {
                Recommendation::new(sector, Tab::GraduateSchemes, FinalYearGradOfferGradScheme)
                    .secondary(Tab::SummerInternships, FinalYearGradOfferSummerInternship)
                    .secondary(Tab::OffCycleInternships, FinalYearGradOfferOffCycleInternship)
                    .build()
            } else if experienced {
                Recommendation::new(
                    sector,
                    Tab::OffCycleInternships,
                    FinalYearWithExpOffCycleInternship,
                )
                .secondary(Tab::SummerInternships, FinalYearWithExpSummerInternship)
                .secondary(Tab::GraduateSchemes, FinalYearWithExpGradScheme)
                .build()
            } else {
                Recommendation::new(sector, Tab::SummerInternships, FinalYearNoExpSummerInternship)
                    .secondary(Tab::OffCycleInternships, FinalYearNoExpOffCycleInternship)
                    .secondary(Tab::GraduateSchemes, FinalYearNoExpGradScheme)
                    .build()
            }
        }
    }
}

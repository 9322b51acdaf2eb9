//! Static commentary prose shown alongside each recommended tab.
//!
//! Every [`CommentaryKey`] has an unprefixed base entry, so [`lookup`] is total.
//! Sector entries (`"Tech Penultimate Spring Week"`, `"Law High School"`, ...)
//! override the base wording where the sector reads differently.

use super::domain::Sector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentaryKey {
    HighSchool,
    MoreThanTwoYearsOutSpring,
    TwoYearsOutSpring,
    FirstYearIndustrialPlacement,
    TwoYearsOutIndustrialPlacement,
    TwoYearsOutOffCycleInternship,
    PenultimateSummerInternship,
    PenultimateSpringWeek,
    PenultimateVacation,
    PenultimateNonLawInternships,
    FinalYearGradOfferGradScheme,
    FinalYearGradOfferSummerInternship,
    FinalYearGradOfferOffCycleInternship,
    FinalYearWithExpOffCycleInternship,
    FinalYearWithExpSummerInternship,
    FinalYearWithExpGradScheme,
    FinalYearNoExpSummerInternship,
    FinalYearNoExpOffCycleInternship,
    FinalYearNoExpGradScheme,
    FinalYearTrainingContracts,
    FinalYearVacation,
    GradWithExpOffCycleInternship,
    GradWithExpGradScheme,
    GradNoExpGradScheme,
    GradNoExpOffCycleInternship,
    GradTrainingContracts,
}

impl CommentaryKey {
    pub const ALL: [Self; 26] = [
        Self::HighSchool,
        Self::MoreThanTwoYearsOutSpring,
        Self::TwoYearsOutSpring,
        Self::FirstYearIndustrialPlacement,
        Self::TwoYearsOutIndustrialPlacement,
        Self::TwoYearsOutOffCycleInternship,
        Self::PenultimateSummerInternship,
        Self::PenultimateSpringWeek,
        Self::PenultimateVacation,
        Self::PenultimateNonLawInternships,
        Self::FinalYearGradOfferGradScheme,
        Self::FinalYearGradOfferSummerInternship,
        Self::FinalYearGradOfferOffCycleInternship,
        Self::FinalYearWithExpOffCycleInternship,
        Self::FinalYearWithExpSummerInternship,
        Self::FinalYearWithExpGradScheme,
        Self::FinalYearNoExpSummerInternship,
        Self::FinalYearNoExpOffCycleInternship,
        Self::FinalYearNoExpGradScheme,
        Self::FinalYearTrainingContracts,
        Self::FinalYearVacation,
        Self::GradWithExpOffCycleInternship,
        Self::GradWithExpGradScheme,
        Self::GradNoExpGradScheme,
        Self::GradNoExpOffCycleInternship,
        Self::GradTrainingContracts,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HighSchool => "High School",
            Self::MoreThanTwoYearsOutSpring => "More Than Two Years Out Spring",
            Self::TwoYearsOutSpring => "Two Years Out Spring",
            Self::FirstYearIndustrialPlacement => "First Year Industrial Placement",
            Self::TwoYearsOutIndustrialPlacement => "Two Years Out Industrial Placement",
            Self::TwoYearsOutOffCycleInternship => "Two Years Out Off-Cycle Internship",
            Self::PenultimateSummerInternship => "Penultimate Summer Internship",
            Self::PenultimateSpringWeek => "Penultimate Spring Week",
            Self::PenultimateVacation => "Penultimate Vacation",
            Self::PenultimateNonLawInternships => "Penultimate Non-Law Internships",
            Self::FinalYearGradOfferGradScheme => "Final Year Grad Offer Grad Scheme",
            Self::FinalYearGradOfferSummerInternship => "Final Year Grad Offer Summer Internship",
            Self::FinalYearGradOfferOffCycleInternship => {
                "Final Year Grad Offer Off-Cycle Internship"
            }
            Self::FinalYearWithExpOffCycleInternship => "Final Year With Exp Off-Cycle Internship",
            Self::FinalYearWithExpSummerInternship => "Final Year With Exp Summer Internship",
            Self::FinalYearWithExpGradScheme => "Final Year With Exp Grad Scheme",
            Self::FinalYearNoExpSummerInternship => "Final Year No Exp Summer Internship",
            Self::FinalYearNoExpOffCycleInternship => "Final Year No Exp Off-Cycle Internship",
            Self::FinalYearNoExpGradScheme => "Final Year No Exp Grad Scheme",
            Self::FinalYearTrainingContracts => "Final Year Training Contracts",
            Self::FinalYearVacation => "Final Year Vacation",
            Self::GradWithExpOffCycleInternship => "Grad With Exp Off-Cycle Internship",
            Self::GradWithExpGradScheme => "Grad With Exp Grad Scheme",
            Self::GradNoExpGradScheme => "Grad No Exp Grad Scheme",
            Self::GradNoExpOffCycleInternship => "Grad No Exp Off-Cycle Internship",
            Self::GradTrainingContracts => "Grad Training Contracts",
        }
    }
}

/// Resolves commentary for `key`, preferring the sector-qualified entry.
pub fn lookup(key: CommentaryKey, sector: Option<Sector>) -> &'static str {
    sector
        .and_then(|sector| sector_entry(sector, key))
        .unwrap_or_else(|| base_entry(key))
}

/// Name of the entry [`lookup`] resolves to, e.g. `"Tech Penultimate Spring Week"`.
pub fn resolved_key(key: CommentaryKey, sector: Option<Sector>) -> String {
    match sector {
        Some(sector) if sector_entry(sector, key).is_some() => {
            format!("{} {}", sector.commentary_prefix(), key.as_str())
        }
        _ => key.as_str().to_string(),
    }
}

fn sector_entry(sector: Sector, key: CommentaryKey) -> Option<&'static str> {
    match sector {
        Sector::Finance => finance_entry(key),
        Sector::Technology => tech_entry(key),
        Sector::Law => law_entry(key),
    }
}

fn base_entry(key: CommentaryKey) -> &'static str {
    use CommentaryKey::*;

    match key {
        HighSchool => "As a high school student, every opportunity you are eligible for will be listed on the Pre-University tab.",
        MoreThanTwoYearsOutSpring => "As you are not two years out from graduation, you are technically not eligible for Spring Weeks. However, many 4+ year courses are flexible in their graduation date; if you are on an integrated Master's, your university will normally allow you to switch to a Bachelor's to become eligible for Spring Weeks with no issues. You can always switch back to an Integrated Master's if you change your mind. Similarly, if you have an industrial placement year, you can often switch to the equivalent course without an industrial placement to become eligible for Spring Weeks, and switch back after your spring weeks if you choose to continue with your industrial placement degree.",
        TwoYearsOutSpring => "As you are two years away from graduating, every opportunity you are eligible for will be listed on the Spring Weeks tab. This includes a handful of summer internships open for all students.",
        FirstYearIndustrialPlacement => "As a first-year student interested in placements, you should focus on building foundational skills and experiences. While it's early to apply for placements directly, you can prepare by researching companies, improving your CV, and gaining relevant experiences through societies or projects. You'll be in a stronger position to apply for placements in your second year.",
        TwoYearsOutIndustrialPlacement => "As a second-year student, you should now be applying for industrial placement programmes. These are relatively uncompetitive because the pool of candidates is much smaller.",
        TwoYearsOutOffCycleInternship => "It is also possible to fill your industrial placement year with 2 off-cycle internships. However, these programmes are far more competitive and securing two internships that align in timing will be challenging.",
        PenultimateSummerInternship => "As a penultimate-year student, summer internships are the ideal opportunity to gain experience and receive a graduate offer.",
        PenultimateSpringWeek => "You can become eligible for Spring Weeks by writing 'Intended Master's Degree' on your resume. These serve as a less competitive route into great roles, and act as a backup option in case you fail to convert your summer internship this year. Many companies will not force you to complete the Master's Degree but even if they do, it will often be a favourable outcome regardless.",
        PenultimateVacation => "As a penultimate-year student, Vacation Schemes are the ideal opportunity to gain experience and receive a training contract.",
        PenultimateNonLawInternships => "Applying to non-law internships can be a smart move in the penultimate year of university. These roles build transferable skills like research, communication, and commercial awareness, all of which are highly valued by law firms.",
        FinalYearGradOfferGradScheme => "Because you already have a graduate scheme, you should not prioritise applying for internships which you risk not converting to the full-time position. Although more competitive, it would be safer to continue applying for other graduate programmes.",
        FinalYearGradOfferSummerInternship => "If you are deeply unsatisfied with your current graduate offer, you can become eligible for summer internships by writing 'Intended Master's Degree' on your resume. These programmes are less competitive and typically convert to a full-time role, although it will likely clash with your graduate job and will require you to reject your current offer. Most firms will not force you to complete a Master's Degree.",
        FinalYearGradOfferOffCycleInternship => "If you are deeply unsatisfied with your current graduate offer, you can apply for off-cycle internships. These programmes are less competitive and often convert to a full-time role, although it will likely clash with your graduate job and will require you to reject your current offer.",
        FinalYearWithExpOffCycleInternship => "Because you have previous experience, you will be a strong candidate for off-cycle internships. These programmes have less applicants and are suitable for upcoming graduates, often converting to a full-time position.",
        FinalYearWithExpSummerInternship => "You can become eligible for summer internships by writing 'Intended Master's Degree' on your resume. These programmes are less competitive and are a reliable route into receiving a full-time offer.",
        FinalYearWithExpGradScheme => "Graduate programmes are highly competitive. You should still send applications, especially to less competitive companies, but prioritise off-cycle internships and summer internships.",
        FinalYearNoExpSummerInternship => "You can become eligible for summer internships by writing 'Intended Master's Degree' on your resume. These programmes are less competitive and are a reliable route into receiving a full-time offer. Because you have no relevant experience, applying for summer internships will give you the best chance of receiving an offer.",
        FinalYearNoExpOffCycleInternship => "You are eligible for off-cycle internships, but these are typically unattainable for those without relevant experience. You should still submit applications where possible, but prioritise applying for summer internships.",
        FinalYearNoExpGradScheme => "Graduate programmes are highly competitive. You should still send applications to smaller or less competitive companies, but prioritise summer internships for the most competitive roles.",
        FinalYearTrainingContracts => "Applying to training contracts in your final year of university aligns with law firms' recruitment cycles, allowing you to secure a role before graduation. Many firms recruit up to two years in advance, so applying now gives you the best chance to lock in a position and focus on your studies without added pressure.",
        FinalYearVacation => "Applying to vacation schemes in your final year can still be highly beneficial, especially if you haven't secured a training contract yet. Many firms use vacation schemes as the primary route to offering training contracts.",
        GradWithExpOffCycleInternship => "Because you have relevant experience, you have the opportunity to pass CV screening for off-cycle internships which are typically unattainable for those without past internships.",
        GradWithExpGradScheme => "You are also eligible for graduate schemes but, even for candidates with relevant experience, these are very competitive. Prioritise off-cycle internships for the most competitive roles.",
        GradNoExpGradScheme => "Because you have no relevant experience, we recommend targeting graduate roles at less competitive companies or divisions, as these are often attainable for candidates with no experience.",
        GradNoExpOffCycleInternship => "You are eligible for off-cycle internships, but these are typically unattainable for those without relevant experience. You should still submit applications where possible, but prioritise applying for graduate programmes at less competitive companies.",
        GradTrainingContracts => "As you've already graduated, applying for training contracts is the next logical step. Most firms recruit up to two years in advance, so applying early allows you to secure a position while you complete any required legal studies.",
    }
}

fn finance_entry(key: CommentaryKey) -> Option<&'static str> {
    use CommentaryKey::*;

    let text = match key {
        FinalYearWithExpGradScheme => "Graduate programmes are unrealistically competitive for most roles in finance. You should still send applications for less competitive companies, but prioritise off-cycle internships and summer internships.",
        FinalYearNoExpGradScheme => "Graduate programmes are unrealistically competitive for most roles in finance. You should still send applications for smaller or less competitive companies, but prioritise summer internships for the most competitive roles.",
        GradWithExpGradScheme => "You are also eligible for graduate schemes but, even for students with relevant experience, these are unrealistically competitive. These are good options for less competitive companies or back office divisions, but prioritise off-cycle internships for more competitive roles.",
        GradNoExpGradScheme => "Because you have no relevant experience, we recommend targeting graduate roles at less competitive companies or divisions such as Big 4, or risk/operations at banks as these are often attainable for candidates with no experience.",
        _ => return None,
    };
    Some(text)
}

fn tech_entry(key: CommentaryKey) -> Option<&'static str> {
    use CommentaryKey::*;

    let text = match key {
        HighSchool => "Unfortunately we don't cover technology programmes for students who are still in school. Continue building as much experience as you can, and come back to apply to insight programmes when you begin your first year of university.",
        MoreThanTwoYearsOutSpring => "As you are not two years out from graduation, you are technically not eligible for Insight Programmes. However, many 4+ year courses are flexible in their graduation date; if you are on an integrated Master's, your university will normally allow you to switch to a Bachelor's to become eligible for Insight Programmes with no issues. You can always switch back to an Integrated Master's if you change your mind. Similarly, if you have an industrial placement year, you can often switch to the equivalent course without an industrial placement to become eligible for Insight Programmes, and switch back after your Insight Programme if you choose to continue with your industrial placement degree.",
        TwoYearsOutSpring => "As you are two years away from graduating, every opportunity you are eligible for will be listed on the Insight Programmes tab. This includes a handful of summer internships open for all students.",
        PenultimateSpringWeek => "You can become eligible for Insight Programmes by writing 'Intended Master's Degree' on your resume. These serve as a less competitive route into great roles, and act as a backup option in case you fail to convert your summer internship this year. Many companies will not force you to complete the Master's Degree but even if they do, it will often be a favourable outcome regardless.",
        FinalYearWithExpGradScheme => "Your prior experience makes you a credible candidate for graduate programmes in tech. They remain competitive, but they are a great way to enter a job directly instead of needing to complete an internship at the company first.",
        FinalYearNoExpGradScheme => "Graduate programmes are competitive for most roles in tech, but are still achievable. These are great opportunities to enter a job directly, instead of needing to complete an internship at the company first.",
        GradWithExpGradScheme => "Because you have relevant experience, you may be well placed for more competitive graduate schemes at many of the top technology companies, or technology roles within large financial services organisations. Remember, even with relevant experience graduate schemes are highly competitive, so it is important that you apply early and apply to as many as possible to maximise your chance of success.",
        GradNoExpGradScheme => "Because you have no relevant experience, we recommend targeting graduate roles at less competitive companies or in less technical divisions such as IT, QA testing, or internal tools teams. You might also consider roles at larger consulting firms like the Big 4, or technology analyst/operations roles at corporates or banks, as these are often more accessible for candidates without prior experience.",
        _ => return None,
    };
    Some(text)
}

fn law_entry(key: CommentaryKey) -> Option<&'static str> {
    use CommentaryKey::*;

    let text = match key {
        HighSchool => "Unfortunately we don't cover law programmes for students who are still in school. Continue building as much experience as you can, and come back to apply to first year schemes when you begin your first year of university.",
        MoreThanTwoYearsOutSpring => "As you are not two years out from graduation, you are technically not eligible for first year schemes. However, many 4+ year courses are flexible in their graduation date; if you are on an integrated Master's, your university will normally allow you to switch to a Bachelor's to become eligible for first year schemes with no issues. You can always switch back to an Integrated Master's if you change your mind.",
        TwoYearsOutSpring => "As you are two years away from graduating, every first year scheme you are eligible for will be listed on the Spring Weeks tab. This includes a handful of internships open for all students.",
        PenultimateNonLawInternships => "Applying to non-law internships can be a smart move, especially in the penultimate year of university. These roles help build transferable skills like research, communication, and commercial awareness, all of which are highly valued by law firms. Gaining experience in sectors like finance, consulting, or tech also broadens your perspective and makes your applications stand out in a competitive legal recruitment process.",
        FinalYearTrainingContracts => "Applying to training contracts in your final year of university aligns perfectly with law firms' recruitment cycles, allowing you to secure a role before graduation. Many firms recruit up to two years in advance, so applying now gives you the best chance to lock in a position and focus on your studies without added pressure. It also avoids the risk of missing deadlines and being left waiting an extra year to reapply.",
        GradTrainingContracts => "As you've already graduated, applying for training contracts is the next logical step. Most firms recruit up to two years in advance, so applying early allows you to secure a position while you complete any required legal studies, such as the GDL or SQE preparation. Delaying your application can push back your qualification timeline unnecessarily, so applying now helps you stay on track.",
        _ => return None,
    };
    Some(text)
}

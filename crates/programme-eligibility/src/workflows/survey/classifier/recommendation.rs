use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::super::commentary::{self, CommentaryKey};
use super::super::domain::{Sector, Tab};

/// Recommendation produced once the questionnaire is complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub primary_tab: Tab,
    pub secondary_tabs: Vec<Tab>,
    pub commentary: BTreeMap<Tab, String>,
    #[serde(skip)]
    sources: Vec<(Tab, CommentaryKey)>,
}

impl EligibilityResult {
    /// Primary tab followed by the secondaries, in rank order.
    pub fn tabs(&self) -> impl Iterator<Item = Tab> + '_ {
        std::iter::once(self.primary_tab).chain(self.secondary_tabs.iter().copied())
    }

    pub fn commentary_for(&self, tab: Tab) -> Option<&str> {
        self.commentary.get(&tab).map(String::as_str)
    }

    /// Knowledge-base key each tab's commentary was resolved from.
    pub fn commentary_sources(&self) -> &[(Tab, CommentaryKey)] {
        &self.sources
    }
}

/// Assembles a result while keeping the secondary list free of duplicates and
/// of the primary tab.
pub(crate) struct Recommendation {
    sector: Option<Sector>,
    primary: Tab,
    secondary: Vec<Tab>,
    commentary: BTreeMap<Tab, String>,
    sources: Vec<(Tab, CommentaryKey)>,
}

impl Recommendation {
    pub(crate) fn new(sector: Option<Sector>, primary: Tab, key: CommentaryKey) -> Self {
        let mut commentary = BTreeMap::new();
        commentary.insert(primary, commentary::lookup(key, sector).to_string());
        Self {
            sector,
            primary,
            secondary: Vec::new(),
            commentary,
            sources: vec![(primary, key)],
        }
    }

    pub(crate) fn secondary(mut self, tab: Tab, key: CommentaryKey) -> Self {
        if tab == self.primary || self.secondary.contains(&tab) {
            return self;
        }
        self.secondary.push(tab);
        self.commentary
            .insert(tab, commentary::lookup(key, self.sector).to_string());
        self.sources.push((tab, key));
        self
    }

    pub(crate) fn build(self) -> EligibilityResult {
        EligibilityResult {
            primary_tab: self.primary,
            secondary_tabs: self.secondary,
            commentary: self.commentary,
            sources: self.sources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_skips_primary_and_duplicate_secondaries() {
        let result = Recommendation::new(
            Some(Sector::Finance),
            Tab::SummerInternships,
            CommentaryKey::PenultimateSummerInternship,
        )
        .secondary(Tab::SummerInternships, CommentaryKey::FinalYearNoExpSummerInternship)
        .secondary(Tab::SpringWeeks, CommentaryKey::PenultimateSpringWeek)
        .secondary(Tab::SpringWeeks, CommentaryKey::TwoYearsOutSpring)
        .build();

        assert_eq!(result.secondary_tabs, vec![Tab::SpringWeeks]);
        assert_eq!(result.commentary.len(), 2);
        assert_eq!(
            result.commentary_for(Tab::SpringWeeks),
            Some(commentary::lookup(
                CommentaryKey::PenultimateSpringWeek,
                Some(Sector::Finance)
            ))
        );
        assert_eq!(
            result.tabs().collect::<Vec<_>>(),
            vec![Tab::SummerInternships, Tab::SpringWeeks]
        );
    }

    #[test]
    fn result_serializes_tab_labels_as_commentary_keys() {
        let result = Recommendation::new(None, Tab::PreUniversity, CommentaryKey::HighSchool)
            .build();
        let value = serde_json::to_value(&result).expect("serializes");

        assert_eq!(value["primary_tab"], "Pre-University");
        assert_eq!(value["secondary_tabs"], serde_json::json!([]));
        assert!(value["commentary"]["Pre-University"].is_string());
        assert!(value.get("sources").is_none());
    }
}

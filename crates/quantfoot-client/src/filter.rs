//! Client-side fixture list filtering.
//!
//! List views filter an already-fetched fixture collection against a
//! reference date; nothing here touches the network.

use crate::types::FixtureResponse;
use chrono::NaiveDate;


/// View filter for a fixture list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFilter {
    /// Every fixture.
    All,
    /// Fixtures played on the reference date.
    Today,
    /// Fixtures before the reference date.
    Past,
    /// Fixtures after the reference date.
    Upcoming,
}

impl FixtureFilter {
    /// Whether a fixture on `date` passes the filter relative to `reference`.
    #[must_use]
    pub fn matches(self, date: NaiveDate, reference: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Today => date == reference,
            Self::Past => date < reference,
            Self::Upcoming => date > reference,
        }
    }
}

/// Filters fixtures against a reference date, sorted by kickoff ascending.
/// The result does not depend on the input order.
#[must_use]
pub fn filter_fixtures(
    fixtures: &[FixtureResponse],
    filter: FixtureFilter,
    reference: NaiveDate,
) -> Vec<FixtureResponse> {
    let mut selected: Vec<FixtureResponse> = fixtures
        .iter()
        .filter(|f| filter.matches(f.fixture_date, reference))
        .cloned()
        .collect();
    selected.sort_by(|a, b| {
        a.fixture_datetime
            .cmp(&b.fixture_datetime)
            .then(a.id.cmp(&b.id))
    });
    selected
}

//! Client-side filtering and ordering of the gainers grid.
//!
//! Everything here is a pure function over snapshot slices; the state cache is
//! never touched.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

use crate::domain::market_data::GainerSnapshot;
use crate::domain::scanning::{CONDITION_COUNT, ScanLookup, ScanSnapshot};

/// Default threshold for the high-change quick filter, in percent
pub const DEFAULT_HIGH_CHANGE_THRESHOLD: f64 = 10.0;

/// Mutually exclusive quick filter
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
pub enum QuickFilter {
    #[default]
    #[strum(serialize = "all")]
    All,
    #[strum(serialize = "scanning")]
    Scanning,
    #[strum(serialize = "signals")]
    Signals,
    #[strum(serialize = "high-change")]
    HighChange,
}

impl QuickFilter {
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Scanning => "Scanning",
            Self::Signals => "Signals (8/8)",
            Self::HighChange => "High Change",
        }
    }
}

/// Grid ordering. `Default` ranks by conditions met and then by 24h change;
/// any explicit key fully overrides it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
pub enum SortOrder {
    #[default]
    #[strum(serialize = "default")]
    Default,
    #[strum(serialize = "change")]
    Change,
    #[strum(serialize = "volume")]
    Volume,
    #[strum(serialize = "conditions")]
    Conditions,
}

impl SortOrder {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Change => "24h Change",
            Self::Volume => "Volume",
            Self::Conditions => "Conditions Met",
        }
    }
}

/// Current filter inputs from the filter bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search: String,
    pub quick: QuickFilter,
    pub sort: SortOrder,
    pub high_change_threshold: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            quick: QuickFilter::All,
            sort: SortOrder::Default,
            high_change_threshold: DEFAULT_HIGH_CHANGE_THRESHOLD,
        }
    }
}

impl FilterCriteria {
    pub fn with_threshold(high_change_threshold: f64) -> Self {
        Self { high_change_threshold, ..Self::default() }
    }

    /// Search term AND quick filter. An empty search term matches every name.
    pub fn matches(&self, gainer: &GainerSnapshot, scan: ScanLookup<'_>) -> bool {
        if !self.search.is_empty() && !gainer.name_contains(&self.search) {
            return false;
        }

        match self.quick {
            QuickFilter::All => true,
            QuickFilter::Scanning => scan.scanning(),
            QuickFilter::Signals => scan.conditions_met() == CONDITION_COUNT,
            QuickFilter::HighChange => gainer.change_24h > self.high_change_threshold,
        }
    }
}

/// A gainer joined with its scan cache entry, if any
#[derive(Debug, Clone, PartialEq)]
pub struct CoinRow {
    pub gainer: GainerSnapshot,
    pub scan: Option<ScanSnapshot>,
}

impl CoinRow {
    pub fn new(gainer: GainerSnapshot, scan: Option<ScanSnapshot>) -> Self {
        Self { gainer, scan }
    }

    pub fn lookup(&self) -> ScanLookup<'_> {
        ScanLookup(self.scan.as_ref())
    }
}

/// Rows passing `criteria`, in input order
pub fn apply_filters<'a>(rows: &'a [CoinRow], criteria: &FilterCriteria) -> Vec<&'a CoinRow> {
    rows.iter().filter(|row| criteria.matches(&row.gainer, row.lookup())).collect()
}

/// Stable sort; all keys descending, floats ordered with `total_cmp`.
pub fn sort_gainers(rows: &mut [&CoinRow], order: SortOrder) {
    match order {
        SortOrder::Default => rows.sort_by(|a, b| {
            b.lookup()
                .conditions_met()
                .cmp(&a.lookup().conditions_met())
                .then_with(|| b.gainer.change_24h.total_cmp(&a.gainer.change_24h))
        }),
        SortOrder::Change => rows.sort_by(|a, b| b.gainer.change_24h.total_cmp(&a.gainer.change_24h)),
        SortOrder::Volume => {
            rows.sort_by(|a, b| b.gainer.volume_usdt.value().total_cmp(&a.gainer.volume_usdt.value()))
        }
        SortOrder::Conditions => {
            rows.sort_by(|a, b| b.lookup().conditions_met().cmp(&a.lookup().conditions_met()))
        }
    }
}

/// Filter then sort; the rows handed to the grid renderer.
pub fn filtered_view(rows: &[CoinRow], criteria: &FilterCriteria) -> Vec<CoinRow> {
    let mut visible = apply_filters(rows, criteria);
    sort_gainers(&mut visible, criteria.sort);
    visible.into_iter().cloned().collect()
}

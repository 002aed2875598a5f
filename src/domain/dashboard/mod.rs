//! Dashboard aggregate: the state cache plus the pure filter and format helpers
//! the renderer builds on.

pub mod filter;
pub mod format;
pub mod state;

pub use filter::{
    CoinRow, DEFAULT_HIGH_CHANGE_THRESHOLD, FilterCriteria, QuickFilter, SortOrder, apply_filters,
    filtered_view, sort_gainers,
};
pub use state::{DashboardState, LoadPhase, Region, StatusUpdate};

//! Standings Viewer: fetches a league-year record from the gateway,
//! normalizes whatever shape comes back into a canonical `Standing` list and
//! degrades to a fixed fallback data set whenever live data cannot be had.
//! The rendered table is never blank.

pub mod fallback;
pub mod model;
pub mod normalize;
pub mod viewer;

pub use fallback::fallback_standings;
pub use model::{chart_series, total_points, ChartPoint, Standing};
pub use normalize::normalize_standings;
pub use viewer::{StandingsViewer, ViewerConfig, ViewerState};

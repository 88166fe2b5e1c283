use serde::{Deserialize, Serialize};

/// One team's row in the standings table. Derived view model, never stored.
///
/// `name` doubles as the row key for rendering; duplicate names are allowed
/// by the data model and simply produce ambiguous rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    /// Omitted entirely (not zero) when absent or zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ties: Option<u32>,
    pub points_for: f64,
    pub points_against: f64,
    /// Playoff seeding rank, the default display order key.
    pub seed: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

/// One bar of the points-for chart, derived 1:1 from the standings list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub name: String,
    pub points_for: f64,
}

/// Chart series in standings order, no implicit sort.
pub fn chart_series(standings: &[Standing]) -> Vec<ChartPoint> {
    standings
        .iter()
        .map(|team| ChartPoint {
            name: team.name.clone(),
            points_for: team.points_for,
        })
        .collect()
}

/// Sum of all `points_for` values, the summary total shown above the chart.
pub fn total_points(standings: &[Standing]) -> f64 {
    standings.iter().map(|team| team.points_for).sum()
}

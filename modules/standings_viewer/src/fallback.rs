use crate::model::Standing;

fn team(
    name: &str,
    wins: u32,
    losses: u32,
    points_for: f64,
    points_against: f64,
    seed: u32,
    owner: &str,
) -> Standing {
    Standing {
        name: name.to_string(),
        wins,
        losses,
        ties: None,
        points_for,
        points_against,
        seed,
        owner: Some(owner.to_string()),
    }
}

/// Fixed sample standings shown whenever live data cannot be obtained or is
/// empty. Keeps the table populated offline or misconfigured.
pub fn fallback_standings() -> Vec<Standing> {
    vec![
        team("Staten Island Sailors", 12, 2, 1780.0, 1450.0, 1, "Nate B"),
        team("Queens Sidewinders", 10, 4, 1665.0, 1510.0, 2, "M. Harris"),
        team("Brooklyn Blitz", 9, 5, 1612.0, 1588.0, 3, "T. Young"),
        team("Harlem Heat", 8, 6, 1540.0, 1499.0, 4, "R. Kelly"),
        team("Bronx Bombers", 7, 7, 1492.0, 1533.0, 5, "S. Reyes"),
        team("Jersey Fury", 6, 8, 1446.0, 1575.0, 6, "C. Lowe"),
        team("Hudson Valley Hawks", 5, 9, 1380.0, 1601.0, 7, "L. Porter"),
        team("Garden State Grit", 3, 11, 1288.0, 1692.0, 8, "D. Webb"),
    ]
}

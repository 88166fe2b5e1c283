use serde_json::Value;

use crate::model::Standing;

/// Defensive extraction of the canonical standings list from whatever shape
/// the backend currently returns. Total: any input maps to a (possibly
/// empty) list, never an error.
///
/// Shape tolerance, in order:
/// - a `{ "data": ... }` wrapper is unwrapped one level;
/// - the team list is read from `standings`, then `teams`;
/// - every field falls back through a small chain of alternate source keys
///   (see the per-field chains below), with numeric fields accepting both
///   JSON numbers and numeric strings.
pub fn normalize_standings(payload: &Value) -> Vec<Standing> {
    let root = payload.get("data").unwrap_or(payload);

    let rows = root
        .get("standings")
        .and_then(Value::as_array)
        .or_else(|| root.get("teams").and_then(Value::as_array));

    let Some(rows) = rows else {
        return Vec::new();
    };

    rows.iter()
        .enumerate()
        .map(|(index, team)| normalize_team(team, index))
        .collect()
}

fn normalize_team(team: &Value, index: usize) -> Standing {
    let position = index as u32 + 1;

    let ties = number_chain(team, &["ties", "record.ties"]).unwrap_or(0.0) as u32;

    Standing {
        name: string_chain(team, &["teamName", "name"])
            .map(str::to_string)
            .unwrap_or_else(|| format!("Team {position}")),
        wins: number_chain(team, &["wins", "record.wins"]).unwrap_or(0.0) as u32,
        losses: number_chain(team, &["losses", "record.losses"]).unwrap_or(0.0) as u32,
        // Zero collapses to absent so renderers print "9-5", not "9-5-0".
        ties: (ties != 0).then_some(ties),
        points_for: number_chain(team, &["pointsFor", "points", "stats.pointsFor"]).unwrap_or(0.0),
        points_against: number_chain(team, &["pointsAgainst", "stats.pointsAgainst"])
            .unwrap_or(0.0),
        seed: number_chain(team, &["seed", "playoffSeed"])
            .map(|n| n as u32)
            .unwrap_or(position),
        owner: string_chain(team, &["owner", "manager"]).map(str::to_string),
    }
}

/// Look up a possibly nested field, `"record.wins"` meaning `team.record.wins`.
fn lookup<'a>(team: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(team, |value, key| value.get(key))
}

/// First non-blank string along the chain.
fn string_chain<'a>(team: &'a Value, paths: &[&str]) -> Option<&'a str> {
    paths
        .iter()
        .filter_map(|path| lookup(team, path).and_then(Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
}

/// First numeric value along the chain; numeric strings count.
fn number_chain(team: &Value, paths: &[&str]) -> Option<f64> {
    paths.iter().find_map(|path| {
        let value = lookup(team, path)?;
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    })
}

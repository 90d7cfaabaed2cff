use crate::distance_map::DistanceMap;
use crate::error::SolveError;

/// Total weight of the consecutive edges in `path`, without the return edge.
///
/// A pair absent from the map is a hard error: the caller handed over
/// incomplete data and a fabricated weight would corrupt the minimum.
pub fn open_distance(path: &[String], map: &DistanceMap) -> Result<u64, SolveError> {
    let mut total = 0;
    for pair in path.windows(2) {
        total += map.distance(&pair[0], &pair[1])?;
    }
    Ok(total)
}

/// Open distance plus the edge from the last node back to the first.
///
/// A one-node path closes on itself: its self-loop weight counts when the
/// map records one, and is zero otherwise.
pub fn closed_distance(path: &[String], map: &DistanceMap) -> Result<u64, SolveError> {
    let mut total = open_distance(path, map)?;
    if path.len() > 1 {
        // Return to the start
        total += map.distance(&path[path.len() - 1], &path[0])?;
    } else if let Some(only) = path.first() {
        total += map.self_loop(only).unwrap_or(0);
    }
    Ok(total)
}

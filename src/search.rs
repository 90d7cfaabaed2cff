use rayon::prelude::*;

use crate::distance_map::DistanceMap;
use crate::error::SolveError;
use crate::permutations::{permutations, Permutations};
use crate::solution::Solution;
use crate::tour::closed_distance;

/// Exhaustive single-threaded search for the minimum-weight closed tour.
///
/// Permutations are consumed lazily, one at a time; the running minimum uses
/// strict less-than, so the earliest-generated tour wins a tie.
pub fn solve_sequential(map: &DistanceMap) -> Result<Solution, SolveError> {
    let nodes = map.nodes();
    if nodes.len() < 2 {
        return Ok(trivial_solution(&nodes, map));
    }

    let mut best: Option<(Vec<String>, u64)> = None;
    for path in Permutations::new(nodes) {
        let distance = closed_distance(&path, map)?;
        match &best {
            Some((_, shortest)) if distance >= *shortest => {}
            _ => best = Some((path, distance)),
        }
    }

    match best {
        Some((path, distance)) => Ok(Solution {
            route: close_route(path),
            distance,
        }),
        None => Ok(Solution::empty()),
    }
}

/// Same search, partitioned across the rayon pool.
///
/// The full permutation sequence is materialized once and split into
/// contiguous chunks, one task per chunk. Each task owns its chunk and its
/// local minimum outright; nothing is shared mutably during the scan, and the
/// reduction only runs after every task has finished. Chunk results come back
/// in chunk order, so ties resolve to the earliest chunk and the outcome is
/// reproducible for a given map and worker count. Any task error aborts the
/// whole search; partial results are discarded.
pub fn solve_parallel(map: &DistanceMap) -> Result<Solution, SolveError> {
    let nodes = map.nodes();
    if nodes.len() < 2 {
        return Ok(trivial_solution(&nodes, map));
    }

    let paths = permutations(&nodes);
    let workers = rayon::current_num_threads().max(1);
    let per_chunk = chunk_len(paths.len(), workers);

    let chunk_minima: Vec<Option<(&[String], u64)>> = paths
        .par_chunks(per_chunk)
        .map(|chunk| shortest_in_chunk(chunk, map))
        .collect::<Result<_, _>>()?;

    let mut best: Option<(&[String], u64)> = None;
    for (path, distance) in chunk_minima.into_iter().flatten() {
        match best {
            Some((_, shortest)) if distance >= shortest => {}
            _ => best = Some((path, distance)),
        }
    }

    match best {
        Some((path, distance)) => Ok(Solution {
            route: close_route(path.to_vec()),
            distance,
        }),
        None => Ok(Solution::empty()),
    }
}

/* Ceiling division; the last chunk may come up short. */
fn chunk_len(total: usize, workers: usize) -> usize {
    ((total + workers - 1) / workers).max(1)
}

/* Local minimum over one contiguous slice of the permutation sequence. A
 * missing edge anywhere in the slice fails the whole task. */
fn shortest_in_chunk<'a>(
    chunk: &'a [Vec<String>],
    map: &DistanceMap,
) -> Result<Option<(&'a [String], u64)>, SolveError> {
    let mut best: Option<(&[String], u64)> = None;
    for path in chunk {
        let distance = closed_distance(path, map)?;
        match best {
            Some((_, shortest)) if distance >= shortest => {}
            _ => best = Some((path, distance)),
        }
    }
    Ok(best)
}

fn close_route(mut route: Vec<String>) -> Vec<String> {
    if let Some(start) = route.first().cloned() {
        route.push(start);
    }
    route
}

/* Zero or one node never reaches the evaluator: an empty map is an empty
 * tour, a lone node closes on itself at its self-loop weight, if any. */
fn trivial_solution(nodes: &[String], map: &DistanceMap) -> Solution {
    match nodes.first() {
        None => Solution::empty(),
        Some(only) => Solution {
            route: vec![only.clone(), only.clone()],
            distance: map.self_loop(only).unwrap_or(0),
        },
    }
}

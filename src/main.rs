use std::env;
use std::fs;
use std::process;
use std::time::{Duration, Instant};

mod distance_map;
mod error;
mod permutations;
mod random_map;
mod search;
mod solution;
mod tour;

use distance_map::DistanceMap;
use random_map::RandomMapGenerator;
use solution::Solution;

/* Exhaustive search tolerates about a dozen nodes before N! takes over. */
const MAX_GENERATED_NODES: usize = 12;
const MAX_RANDOM_DISTANCE: u64 = 200;

/* The five towns from the original routing exercise. */
fn sample_map() -> DistanceMap {
    DistanceMap::from_edges(&[
        ("Cornelio", "Londrina", 67),
        ("Cornelio", "Maringa", 162),
        ("Cornelio", "Bandeirantes", 37),
        ("Cornelio", "Santa Mariana", 18),
        ("Londrina", "Maringa", 100),
        ("Londrina", "Bandeirantes", 103),
        ("Londrina", "Santa Mariana", 83),
        ("Maringa", "Bandeirantes", 198),
        ("Maringa", "Santa Mariana", 100),
        ("Bandeirantes", "Santa Mariana", 20),
    ])
}

fn print_help() {
    println!("Usage: ./tsp_exhaustive <command> [options]");
    println!("");
    println!("Commands:");
    print!("(none)               ");
    println!("Solve the built-in five-city sample");
    print!("solve <file>         ");
    println!("Solve the distance map in the given .json file");
    print!("generate <n> [file]  ");
    println!("Write a random symmetric map of n nodes (default distances.json)");
    println!("");
    println!("General Options:");
    print!("-h, --help, h, help  ");
    println!("Show this help message and exit.");
}

fn report(label: &str, solution: &Solution, elapsed: Duration) {
    println!(
        "The shortest route is [{}] at {} km.",
        solution.route.join(", "),
        solution.distance
    );
    println!("Execution time ({}): {:?}", label, elapsed);
}

/* Run both strategies over the same map and time each around the call. */
fn solve_both(map: &DistanceMap) {
    let start = Instant::now();
    match search::solve_sequential(map) {
        Ok(solution) => report("sequential", &solution, start.elapsed()),
        Err(why) => {
            eprintln!("Sequential search failed: {}", why);
            process::exit(1);
        }
    }

    let start = Instant::now();
    match search::solve_parallel(map) {
        Ok(solution) => report("parallel", &solution, start.elapsed()),
        Err(why) => {
            eprintln!("Parallel search failed: {}", why);
            process::exit(1);
        }
    }
}

fn load_map(file_name: &str) -> DistanceMap {
    let mut path = file_name.to_string();
    if fs::metadata(&path).is_err() && !path.ends_with(".json") {
        path.push_str(".json");
    }

    let data = match fs::read_to_string(&path) {
        Ok(data) => data,
        Err(why) => {
            eprintln!("Couldn't read {}: {}", path, why);
            process::exit(1);
        }
    };

    let map: DistanceMap = match serde_json::from_str(&data) {
        Ok(map) => map,
        Err(why) => {
            eprintln!("Couldn't parse {}: {}", path, why);
            process::exit(1);
        }
    };

    if let Err(why) = map.validate() {
        eprintln!("Bad distance map in {}: {}", path, why);
        process::exit(1);
    }

    map
}

fn run_generate(args: &[String]) {
    let count = match args.first().and_then(|n| n.parse::<usize>().ok()) {
        Some(n) if n >= 2 && n <= MAX_GENERATED_NODES => n,
        _ => {
            eprintln!(
                "generate needs a node count between 2 and {}.",
                MAX_GENERATED_NODES
            );
            process::exit(1);
        }
    };

    let file_name = args.get(1).map(String::as_str).unwrap_or("distances.json");
    let map = RandomMapGenerator::new(MAX_RANDOM_DISTANCE).generate(count);
    RandomMapGenerator::write_to_file(&map, file_name);
}

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        None => solve_both(&sample_map()),
        Some("solve") => match args.get(2) {
            Some(file_name) => solve_both(&load_map(file_name)),
            None => {
                eprintln!("solve needs a .json file to read the distance map from.");
                process::exit(1);
            }
        },
        Some("generate") => run_generate(&args[2..]),
        Some("-h" | "--help" | "h" | "help") => print_help(),
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            print_help();
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_map_matches_the_original_exercise() {
        let map = sample_map();
        assert_eq!(map.node_count(), 5);
        assert!(map.validate().is_ok());
        assert_eq!(map.distance("Cornelio", "Santa Mariana"), Ok(18));
        assert_eq!(map.distance("Santa Mariana", "Cornelio"), Ok(18));
    }

    #[test]
    fn sample_optimum_is_found_by_both_strategies() {
        let map = sample_map();

        // Independent check: minimum over every permutation, straight off the
        // generator and evaluator.
        let expected = permutations::permutations(&map.nodes())
            .iter()
            .map(|p| tour::closed_distance(p, &map).unwrap())
            .min()
            .unwrap();
        assert_eq!(expected, 324);

        let sequential = search::solve_sequential(&map).unwrap();
        let parallel = search::solve_parallel(&map).unwrap();
        assert_eq!(sequential.distance, expected);
        assert_eq!(parallel.distance, expected);
    }
}

use rand::Rng;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::distance_map::DistanceMap;

/// Builds complete symmetric instances with random edge weights, for timing
/// the sequential engine against the parallel one on something bigger than
/// the built-in sample.
pub struct RandomMapGenerator {
    max_distance: u64,
}

impl RandomMapGenerator {
    pub fn new(max_distance: u64) -> RandomMapGenerator {
        RandomMapGenerator {
            max_distance: max_distance.max(1),
        }
    }

    /* Nodes are named C1..Cn; every distinct pair gets a weight. */
    pub fn generate(&self, count: usize) -> DistanceMap {
        let names: Vec<String> = (1..=count).map(|i| format!("C{}", i)).collect();
        let mut rng = rand::thread_rng();

        let mut map = DistanceMap::new();
        for (i, from) in names.iter().enumerate() {
            for to in names.iter().skip(i + 1) {
                map.insert(from, to, rng.gen_range(1..=self.max_distance));
            }
        }
        map
    }

    pub fn write_to_file(map: &DistanceMap, file_name: &str) {
        let json_string =
            serde_json::to_string_pretty(map).expect("Error converting to JSON");

        let path = Path::new(file_name);
        let display = path.display();

        let mut file = match File::create(path) {
            Err(why) => panic!("Couldn't create {}: {}", display, why),
            Ok(file) => file,
        };

        match file.write_all(json_string.as_bytes()) {
            Err(why) => panic!("Couldn't write to {}: {}", display, why),
            Ok(_) => println!("Successfully wrote to {}", display),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_maps_are_complete_and_symmetric() {
        let generator = RandomMapGenerator::new(200);
        for n in 2..=6 {
            let map = generator.generate(n);
            assert_eq!(map.node_count(), n);
            assert!(map.validate().is_ok(), "n={}", n);
        }
    }

    #[test]
    fn weights_stay_within_the_configured_bound() {
        let generator = RandomMapGenerator::new(10);
        let map = generator.generate(5);
        let nodes = map.nodes();
        for (i, a) in nodes.iter().enumerate() {
            for b in nodes.iter().skip(i + 1) {
                let weight = map.distance(a, b).unwrap();
                assert!((1..=10).contains(&weight));
            }
        }
    }
}

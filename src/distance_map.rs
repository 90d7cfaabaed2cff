use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::SolveError;

/// Symmetric distances between named locations.
///
/// The map is built (or deserialized) once before a search starts and is only
/// ever read after that, so the engines borrow it freely across workers.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistanceMap {
    map: HashMap<String, HashMap<String, u64>>,
}

impl DistanceMap {
    pub fn new() -> DistanceMap {
        DistanceMap {
            map: HashMap::new(),
        }
    }

    /* Insert both directions so the map stays symmetric. */
    pub fn insert(&mut self, a: &str, b: &str, distance: u64) {
        self.map
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string(), distance);
        self.map
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string(), distance);
    }

    pub fn from_edges(edges: &[(&str, &str, u64)]) -> DistanceMap {
        let mut map = DistanceMap::new();
        for (a, b, distance) in edges {
            map.insert(a, b, *distance);
        }
        map
    }

    pub fn node_count(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /* Node identifiers in a fixed order, so a search over the same map is
     * deterministic from call to call. */
    pub fn nodes(&self) -> Vec<String> {
        let mut nodes: Vec<String> = self.map.keys().cloned().collect();
        nodes.sort();
        nodes
    }

    pub fn distance(&self, from: &str, to: &str) -> Result<u64, SolveError> {
        self.map
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .ok_or_else(|| SolveError::MissingDistance {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /* Self-loops are optional; single-node tours fall back to zero. */
    pub fn self_loop(&self, node: &str) -> Option<u64> {
        self.map.get(node).and_then(|row| row.get(node)).copied()
    }

    /// Check that every pair of distinct nodes has an entry and that both
    /// directions agree. Deserialized input goes through this before any
    /// search touches it.
    pub fn validate(&self) -> Result<(), SolveError> {
        let nodes = self.nodes();
        for (i, a) in nodes.iter().enumerate() {
            for b in nodes.iter().skip(i + 1) {
                let forward = self.distance(a, b)?;
                let backward = self.distance(b, a)?;
                if forward != backward {
                    return Err(SolveError::AsymmetricDistance {
                        a: a.clone(),
                        b: b.clone(),
                        forward,
                        backward,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_symmetric() {
        let mut map = DistanceMap::new();
        map.insert("A", "B", 42);
        assert_eq!(map.distance("A", "B"), Ok(42));
        assert_eq!(map.distance("B", "A"), Ok(42));
    }

    #[test]
    fn nodes_are_sorted() {
        let map = DistanceMap::from_edges(&[("C", "A", 1), ("B", "C", 2), ("A", "B", 3)]);
        assert_eq!(map.nodes(), vec!["A", "B", "C"]);
    }

    #[test]
    fn missing_pair_is_an_error() {
        let map = DistanceMap::from_edges(&[("A", "B", 1), ("A", "C", 2)]);
        assert_eq!(
            map.distance("B", "C"),
            Err(SolveError::MissingDistance {
                from: "B".to_string(),
                to: "C".to_string(),
            })
        );
    }

    #[test]
    fn validate_accepts_complete_symmetric_map() {
        let map = DistanceMap::from_edges(&[("A", "B", 1), ("A", "C", 2), ("B", "C", 3)]);
        assert!(map.validate().is_ok());
    }

    #[test]
    fn validate_rejects_incomplete_map() {
        let map = DistanceMap::from_edges(&[("A", "B", 1), ("A", "C", 2)]);
        assert!(matches!(
            map.validate(),
            Err(SolveError::MissingDistance { .. })
        ));
    }

    #[test]
    fn validate_rejects_asymmetric_json() {
        let data = r#"{"A": {"B": 5}, "B": {"A": 7}}"#;
        let map: DistanceMap = serde_json::from_str(data).unwrap();
        assert_eq!(
            map.validate(),
            Err(SolveError::AsymmetricDistance {
                a: "A".to_string(),
                b: "B".to_string(),
                forward: 5,
                backward: 7,
            })
        );
    }

    #[test]
    fn json_round_trip() {
        let map = DistanceMap::from_edges(&[("A", "B", 1), ("A", "C", 2), ("B", "C", 3)]);
        let json = serde_json::to_string(&map).unwrap();
        let back: DistanceMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back.distance("B", "C"), Ok(3));
        assert_eq!(back.node_count(), 3);
    }
}

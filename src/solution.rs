use serde::Serialize;

/// Winning closed route and its total distance. The first node is repeated at
/// the end of the route so the cycle is explicit to callers.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Solution {
    pub route: Vec<String>,
    pub distance: u64,
}

impl Solution {
    pub fn empty() -> Solution {
        Solution {
            route: Vec::new(),
            distance: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.route.len()
    }

    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }
}

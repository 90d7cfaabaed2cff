use thiserror::Error;

/// Failures surfaced by distance lookups and the search engines.
///
/// A bad distance map is caller-supplied data that cannot become correct on
/// retry, so every variant aborts the search that hit it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// A consecutive pair in a tour has no entry in the distance map.
    #[error("no distance recorded from {from} to {to}")]
    MissingDistance { from: String, to: String },

    /// The map holds different weights for the two directions of an edge.
    #[error("asymmetric distance between {a} and {b}: {forward} vs {backward}")]
    AsymmetricDistance {
        a: String,
        b: String,
        forward: u64,
        backward: u64,
    },
}

use std::collections::HashMap;

use crate::ztm::models::{RawEdge, SimpleEdge, Stop};
use crate::ztm::simplify;

/// Everything one parse of an export produces. Each call to [`Ztm::parse`]
/// returns a fresh, independently owned value.
///
/// [`Ztm::parse`]: crate::ztm::Ztm::parse
#[derive(Default, Debug)]
pub struct Timetable {
    /// Stop code to stop record. Duplicate codes in the source overwrite,
    /// last occurrence wins.
    pub stops: HashMap<String, Stop>,
    /// One entry per scheduled trip traversal, in source order. The same
    /// (route, from, to) triple showing up many times is the normal case.
    pub edges: Vec<RawEdge>,
}

impl Timetable {
    pub fn stop(&self, id: &str) -> Option<&Stop> {
        self.stops.get(id)
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty() && self.edges.is_empty()
    }

    /// Deduplicated edge list, see [`simplify`].
    pub fn simple_edges(&self) -> Vec<SimpleEdge> {
        simplify(&self.edges)
    }
}

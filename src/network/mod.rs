use rayon::prelude::*;
use std::{collections::HashMap, sync::Arc, time::Instant};
use tracing::debug;

mod stop;
pub use stop::*;

use crate::{
    shared::{Coordinate, search},
    ztm::{
        self, Timetable, Ztm,
        models::{RawEdge, SimpleEdge},
        simplify,
    },
};

/// Indexed view over one parsed timetable: the stop table plus the raw and
/// simplified edge lists, ready for graph construction. Cheap to clone, all
/// collections are shared.
#[derive(Clone, Default)]
pub struct Network {
    stops: Arc<[Stop]>,
    stop_lookup: Arc<HashMap<Arc<str>, u32>>,
    raw_edges: Arc<[RawEdge]>,
    simple_edges: Arc<[SimpleEdge]>,
}

impl Network {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn load_ztm(self, ztm: Ztm) -> Result<Self, ztm::Error> {
        let timetable = ztm.parse()?;
        Ok(self.load_timetable(timetable))
    }

    pub fn load_timetable(mut self, timetable: Timetable) -> Self {
        debug!("Loading stops...");
        let now = Instant::now();
        let mut stops: Vec<Stop> = timetable.stops.into_values().map(Stop::from).collect();
        // HashMap order is arbitrary, sort for a stable index layout
        stops.sort_unstable_by(|a, b| a.id.cmp(&b.id));
        let mut stop_lookup: HashMap<Arc<str>, u32> = HashMap::with_capacity(stops.len());
        for (i, stop) in stops.iter_mut().enumerate() {
            stop.index = i as u32;
            stop_lookup.insert(stop.id.clone(), i as u32);
        }
        self.stops = stops.into();
        self.stop_lookup = stop_lookup.into();
        debug!("Loading stops took {:?}", now.elapsed());

        debug!("Simplifying edges...");
        let now = Instant::now();
        self.simple_edges = simplify(&timetable.edges).into();
        self.raw_edges = timetable.edges.into();
        debug!("Simplifying edges took {:?}", now.elapsed());
        self
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn stop(&self, id: &str) -> Option<&Stop> {
        let stop_index = self.stop_lookup.get(id)?;
        Some(&self.stops[*stop_index as usize])
    }

    /// Every scheduled trip traversal, in source order.
    pub fn raw_edges(&self) -> &[RawEdge] {
        &self.raw_edges
    }

    /// One entry per (route, from, to) triple, first-seen order.
    pub fn simple_edges(&self) -> &[SimpleEdge] {
        &self.simple_edges
    }

    /// Resolves an edge to its stop records. `None` when either endpoint is
    /// missing from the stop table, which the format layer does not rule out.
    pub fn endpoints(&self, edge: &SimpleEdge) -> Option<(&Stop, &Stop)> {
        Some((self.stop(&edge.from)?, self.stop(&edge.to)?))
    }

    pub fn search_stops_by_name<'a>(&'a self, needle: &'a str) -> Vec<&'a Stop> {
        search(needle, &self.stops)
    }

    pub fn stops_near(&self, coordinate: &Coordinate, radius_m: f64) -> Vec<&Stop> {
        let mut near: Vec<(&Stop, f64)> = self
            .stops
            .par_iter()
            .filter_map(|stop| {
                let distance = stop.coordinate.distance_m(coordinate);
                if distance <= radius_m {
                    Some((stop, distance))
                } else {
                    None
                }
            })
            .collect();
        near.sort_unstable_by(|(_, a), (_, b)| a.total_cmp(b));
        near.into_iter().map(|(stop, _)| stop).collect()
    }
}

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Stop {
    /// 6-character stop code. Kept as a string because leading zeros are
    /// significant ("004501" and "4501" are different stops).
    pub id: String,
    /// Name shared by every stop of one group (all platforms of a station).
    pub group_name: String,
    pub street: String,
    pub lat: f64,
    pub long: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RawEdge {
    pub route: String,
    pub from: String,
    pub to: String,
    /// Minutes since midnight, unclamped (next-day trips run past 1440).
    pub start_time: u32,
    pub end_time: u32,
    /// Negative only under `NegativeDurations::Tolerate`.
    pub time_between: i32,
    /// Opaque classification tag copied from the export as-is.
    #[serde(rename = "type")]
    pub route_type: String,
}

impl RawEdge {
    pub fn key(&self) -> EdgeKey {
        EdgeKey {
            route: self.route.clone(),
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }
}

/// Identity of a route-labeled directed connection, the unit the reducer
/// deduplicates on.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub route: String,
    pub from: String,
    pub to: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SimpleEdge {
    pub route: String,
    pub from: String,
    pub to: String,
}

impl From<&RawEdge> for SimpleEdge {
    fn from(value: &RawEdge) -> Self {
        Self {
            route: value.route.clone(),
            from: value.from.clone(),
            to: value.to.clone(),
        }
    }
}

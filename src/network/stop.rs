use std::sync::Arc;

use crate::{
    shared::{Coordinate, Identifiable, fuzzy},
    ztm::models,
};

#[derive(Debug, Default, Clone)]
pub struct Stop {
    pub id: Arc<str>,
    pub group_name: Arc<str>,
    pub street: Arc<str>,
    pub normalized_name: Arc<str>,
    pub coordinate: Coordinate,
    pub index: u32,
}

impl Identifiable for Stop {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.group_name
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}

impl From<models::Stop> for Stop {
    fn from(value: models::Stop) -> Self {
        Self {
            id: value.id.into(),
            normalized_name: fuzzy::normalize(&value.group_name).into(),
            group_name: value.group_name.into(),
            street: value.street.into(),
            coordinate: Coordinate {
                latitude: value.lat,
                longitude: value.long,
            },
            index: 0,
        }
    }
}

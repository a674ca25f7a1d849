use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Coordinates, Location};
use crate::error::Error;
use crate::geo::total_distance;

/// Ordered flight path: origin, any stops, destination.
///
/// `distance` is the summed great-circle length in kilometers, computed once
/// when the route is built.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Route {
    pub token: Uuid,
    pub origin: Location,
    pub stops: Vec<Location>,
    pub destination: Location,
    pub distance: f64,
}

impl Route {
    pub fn new(origin: Location, stops: Vec<Location>, destination: Location) -> Result<Self, Error> {
        let path: Vec<Coordinates> = std::iter::once(&origin)
            .chain(stops.iter())
            .chain(std::iter::once(&destination))
            .map(|location| location.coordinates)
            .collect();

        let distance = total_distance(&path)?;

        Ok(Self {
            token: Uuid::new_v4(),
            origin,
            stops,
            destination,
            distance,
        })
    }

    pub fn waypoints(&self) -> impl Iterator<Item = &Location> {
        std::iter::once(&self.origin)
            .chain(self.stops.iter())
            .chain(std::iter::once(&self.destination))
    }

    pub fn path(&self) -> Vec<Coordinates> {
        self.waypoints().map(|location| location.coordinates).collect()
    }
}

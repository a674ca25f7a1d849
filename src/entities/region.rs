use geo_types::{Coord, Rect};
use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

/// Service area that pickup, stop and drop-off points must fall inside.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub center: Coordinates,
    pub bounds: Rect<f64>,
}

impl Region {
    pub fn new(name: String, south_west: Coordinates, north_east: Coordinates) -> Self {
        let bounds = Rect::new(
            Coord {
                x: south_west.longitude,
                y: south_west.latitude,
            },
            Coord {
                x: north_east.longitude,
                y: north_east.latitude,
            },
        );

        Self {
            name,
            center: bounds.center().into(),
            bounds,
        }
    }

    pub fn bengaluru() -> Self {
        let mut region = Self::new(
            "Bengaluru".into(),
            Coordinates::new(12.7342, 77.3787),
            Coordinates::new(13.1736, 77.8826),
        );
        region.center = Coordinates::new(12.9716, 77.5946);
        region
    }

    pub fn south_west(&self) -> Coordinates {
        self.bounds.min().into()
    }

    pub fn north_east(&self) -> Coordinates {
        self.bounds.max().into()
    }

    /// Edges count as inside.
    pub fn contains(&self, coordinates: &Coordinates) -> bool {
        let min = self.bounds.min();
        let max = self.bounds.max();

        (min.y..=max.y).contains(&coordinates.latitude)
            && (min.x..=max.x).contains(&coordinates.longitude)
    }
}

impl From<Coord<f64>> for Coordinates {
    fn from(coord: Coord<f64>) -> Self {
        Coordinates::new(coord.y, coord.x)
    }
}

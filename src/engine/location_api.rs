use super::Engine;

use async_trait::async_trait;

use crate::{
    api::LocationAPI,
    entities::{Coordinates, Location},
    error::{out_of_region_error, Error},
};

#[async_trait]
impl LocationAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_location(
        &self,
        coordinates: Coordinates,
        description: String,
    ) -> Result<Location, Error> {
        if !self.region.contains(&coordinates) {
            tracing::warn!("location outside {}", self.region.name);
            return Err(out_of_region_error());
        }

        let description = if description.trim().is_empty() {
            coordinates.into()
        } else {
            description
        };

        Ok(Location::new(coordinates, description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::engine::test_support::engine;
    use std::time::Duration;
    use tokio_test::block_on;

    #[test]
    fn create_location_inside_region() {
        let engine = engine(Duration::from_millis(1));

        let location = block_on(
            engine.create_location(Coordinates::new(12.9716, 77.5946), "MG Road".into()),
        )
        .unwrap();

        assert_eq!(location.description, "MG Road");
        assert_eq!(location.coordinates, Coordinates::new(12.9716, 77.5946));
    }

    #[test]
    fn create_location_describes_bare_points() {
        let engine = engine(Duration::from_millis(1));

        let location =
            block_on(engine.create_location(Coordinates::new(12.9352, 77.6245), "  ".into()))
                .unwrap();

        assert_eq!(location.description, "12.9352°N, 77.6245°E");
    }

    #[test]
    fn create_location_outside_region() {
        let engine = engine(Duration::from_millis(1));

        // Chennai
        let err = block_on(engine.create_location(Coordinates::new(13.0827, 80.2707), "".into()))
            .unwrap_err();

        assert_eq!(err.code, 113);
    }
}

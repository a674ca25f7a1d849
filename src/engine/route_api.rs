use super::Engine;

use async_trait::async_trait;

use crate::{
    api::RouteAPI,
    entities::{Location, Route},
    error::Error,
};

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip_all, fields(stops = stops.len()))]
    async fn create_route(
        &self,
        origin: Location,
        stops: Vec<Location>,
        destination: Location,
    ) -> Result<Route, Error> {
        let route = Route::new(origin, stops, destination)?;

        tracing::info!("created route {} covering {:.2} km", route.token, route.distance);

        Ok(route)
    }
}

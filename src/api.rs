use async_channel::Receiver;
use async_trait::async_trait;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::entities::{
    Booking, BookingStatus, Coordinates, Location, Quote, Route, ServiceTier,
};
use crate::error::Error;

#[async_trait]
pub trait LocationAPI {
    async fn create_location(
        &self,
        coordinates: Coordinates,
        description: String,
    ) -> Result<Location, Error>;
}

#[async_trait]
pub trait RouteAPI {
    async fn create_route(
        &self,
        origin: Location,
        stops: Vec<Location>,
        destination: Location,
    ) -> Result<Route, Error>;
}

#[async_trait]
pub trait TierAPI {
    async fn list_tiers(&self) -> Result<Vec<ServiceTier>, Error>;
    async fn find_tier(&self, id: &str) -> Result<ServiceTier, Error>;
}

#[async_trait]
pub trait QuoteAPI {
    async fn create_quote(&self, route: Route, tier_id: &str) -> Result<Quote, Error>;
    async fn quote_all_tiers(&self, route: Route) -> Result<Vec<Quote>, Error>;
}

#[async_trait]
pub trait BookingAPI {
    async fn create_booking(&self, quote: Quote) -> Result<Booking, Error>;
    async fn find_booking(&self, id: Uuid) -> Result<Booking, Error>;
    async fn tick_booking(&self, id: Uuid) -> Result<Booking, Error>;
    async fn cancel_booking(&self, id: Uuid) -> Result<Booking, Error>;
    async fn track_booking(
        &self,
        id: Uuid,
    ) -> Result<(JoinHandle<()>, Receiver<BookingStatus>), Error>;
}

pub trait API: LocationAPI + RouteAPI + TierAPI + QuoteAPI + BookingAPI {}

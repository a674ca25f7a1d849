use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Route, ServiceTier};

/// Distance, price and timing for one route flown at one tier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripQuote {
    pub distance_km: f64,
    pub fare: i64,
    pub eta_minutes: i64,
    pub flight_time_minutes: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareBreakdown {
    pub base_fare: i64,
    pub tier_surcharge: i64,
    pub total: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quote {
    pub token: Uuid,
    pub route: Route,
    pub tier: ServiceTier,
    pub trip: TripQuote,
    pub breakdown: FareBreakdown,
}

impl Quote {
    pub fn new(route: Route, tier: ServiceTier, trip: TripQuote, breakdown: FareBreakdown) -> Self {
        Self {
            token: Uuid::new_v4(),
            route,
            tier,
            trip,
            breakdown,
        }
    }
}

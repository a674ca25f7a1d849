use super::Engine;

use async_trait::async_trait;

use crate::{
    api::{QuoteAPI, TierAPI},
    entities::{Quote, Route, ServiceTier},
    error::Error,
    pricing,
};

impl Engine {
    // Each call draws a fresh taxi ETA.
    async fn price(&self, route: Route, tier: ServiceTier) -> Result<Quote, Error> {
        let base_rate = self.config.base_rate;

        let trip = {
            let mut rng = self.rng.lock().await;
            pricing::quote_with_rate(route.distance, &tier, base_rate, &mut *rng)?
        };
        let breakdown = pricing::fare_breakdown(route.distance, &tier, base_rate)?;

        Ok(Quote::new(route, tier, trip, breakdown))
    }
}

#[async_trait]
impl QuoteAPI for Engine {
    #[tracing::instrument(skip(self, route), fields(route = %route.token))]
    async fn create_quote(&self, route: Route, tier_id: &str) -> Result<Quote, Error> {
        let tier = self.find_tier(tier_id).await?;
        let quote = self.price(route, tier).await?;

        tracing::info!(
            "quoted {} at {} for {:.2} km",
            quote.tier.id,
            quote.trip.fare,
            quote.trip.distance_km
        );

        Ok(quote)
    }

    #[tracing::instrument(skip(self, route), fields(route = %route.token))]
    async fn quote_all_tiers(&self, route: Route) -> Result<Vec<Quote>, Error> {
        let mut quotes = Vec::with_capacity(self.tiers.len());

        for tier in self.tiers.iter() {
            quotes.push(self.price(route.clone(), tier.clone()).await?);
        }

        Ok(quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::api::{LocationAPI, RouteAPI};
    use crate::engine::test_support::engine;
    use crate::entities::Coordinates;
    use crate::pricing::{MAX_ETA_MINUTES, MIN_ETA_MINUTES};
    use std::time::Duration;
    use tokio_test::block_on;

    fn route(engine: &Engine) -> Route {
        block_on(async {
            let origin = engine
                .create_location(Coordinates::new(12.9716, 77.5946), "".into())
                .await?;
            let destination = engine
                .create_location(Coordinates::new(12.9352, 77.6245), "".into())
                .await?;

            engine.create_route(origin, vec![], destination).await
        })
        .unwrap()
    }

    #[test]
    fn create_quote() {
        let engine = engine(Duration::from_millis(1));
        let route = route(&engine);

        let quote = block_on(engine.create_quote(route.clone(), "standard")).unwrap();

        assert_eq!(quote.trip.fare, 259);
        assert_eq!(quote.trip.flight_time_minutes, 1);
        assert_eq!(quote.trip.distance_km, route.distance);
        assert_eq!(quote.breakdown.total, quote.trip.fare);
        assert!((MIN_ETA_MINUTES..=MAX_ETA_MINUTES).contains(&quote.trip.eta_minutes));
    }

    #[test]
    fn requotes_keep_distance_and_fare() {
        let engine = engine(Duration::from_millis(1));
        let route = route(&engine);

        for _ in 0..20 {
            let quote = block_on(engine.create_quote(route.clone(), "premium")).unwrap();
            assert_eq!(quote.trip.fare, 389);
            assert_eq!(quote.trip.distance_km, route.distance);
        }
    }

    #[test]
    fn quote_all_tiers() {
        let engine = engine(Duration::from_millis(1));
        let route = route(&engine);

        let fares: Vec<(String, i64)> = block_on(engine.quote_all_tiers(route))
            .unwrap()
            .into_iter()
            .map(|quote| (quote.tier.id, quote.trip.fare))
            .collect();

        assert_eq!(
            fares,
            vec![
                ("standard".to_string(), 259),
                ("premium".to_string(), 389),
                ("luxury".to_string(), 648),
            ]
        );
    }

    #[test]
    fn create_quote_for_unknown_tier() {
        let engine = engine(Duration::from_millis(1));
        let route = route(&engine);

        assert_eq!(
            block_on(engine.create_quote(route, "hyperloop")).unwrap_err().code,
            101
        );
    }
}

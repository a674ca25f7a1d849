mod booking_api;
mod helpers;
mod location_api;
mod quote_api;
mod route_api;
mod tier_api;

use std::collections::HashMap;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    api::API,
    config::Config,
    entities::{Booking, Region, TierCatalog},
    error::Error,
};

type BookingTable = Arc<Mutex<HashMap<Uuid, Booking>>>;

pub struct Engine {
    config: Config,
    region: Region,
    tiers: TierCatalog,
    rng: Mutex<StdRng>,
    bookings: BookingTable,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new")]
    pub fn new(config: Config) -> Result<Self, Error> {
        let tiers = match &config.tiers_path {
            Some(path) => TierCatalog::from_file(path)?,
            None => TierCatalog::default(),
        };

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self::with_parts(config, Region::bengaluru(), tiers, rng))
    }

    /// Assembles an engine from explicit parts; tests pass a seeded `rng`.
    pub fn with_parts(config: Config, region: Region, tiers: TierCatalog, rng: StdRng) -> Self {
        Self {
            config,
            region,
            tiers,
            rng: Mutex::new(rng),
            bookings: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn region(&self) -> &Region {
        &self.region
    }
}

impl API for Engine {}


#[test]
fn new_engine() {
    let engine = Engine::new(Config::default()).unwrap();

    assert_eq!(engine.region().name, "Bengaluru");
    assert_eq!(engine.tiers.len(), 3);
}

#[test]
fn new_engine_with_missing_tier_file() {
    let config = Config {
        tiers_path: Some("/nonexistent/skytaxi/tiers.json".into()),
        ..Config::default()
    };

    assert_eq!(Engine::new(config).err().unwrap().code, 3);
}

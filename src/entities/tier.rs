use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, invalid_tier_error, Error};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceTier {
    pub id: String,
    pub name: String,
    pub fare_multiplier: f64,
    pub passenger_capacity: u32,
    pub description: String,
}

impl ServiceTier {
    pub fn new(
        id: &str,
        name: &str,
        fare_multiplier: f64,
        passenger_capacity: u32,
        description: &str,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            fare_multiplier,
            passenger_capacity,
            description: description.into(),
        }
    }

    pub fn standard() -> Self {
        Self::new(
            "standard",
            "Standard",
            1.0,
            2,
            "Comfortable and affordable sky travel",
        )
    }

    pub fn premium() -> Self {
        Self::new(
            "premium",
            "Premium",
            1.5,
            4,
            "Enhanced comfort with extra space",
        )
    }

    pub fn luxury() -> Self {
        Self::new(
            "luxury",
            "Luxury",
            2.5,
            4,
            "Ultimate flying experience with premium amenities",
        )
    }

    /// Per-kilometer price of this tier.
    pub fn rate_per_km(&self, base_rate: f64) -> f64 {
        base_rate * self.fare_multiplier
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !(self.fare_multiplier > 0.0) || self.passenger_capacity == 0 {
            return Err(invalid_tier_error());
        }

        Ok(())
    }
}

/// Fixed, ordered set of tiers offered to passengers.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<ServiceTier>", into = "Vec<ServiceTier>")]
pub struct TierCatalog {
    tiers: Vec<ServiceTier>,
}

impl Default for TierCatalog {
    fn default() -> Self {
        Self {
            tiers: vec![
                ServiceTier::standard(),
                ServiceTier::premium(),
                ServiceTier::luxury(),
            ],
        }
    }
}

impl TryFrom<Vec<ServiceTier>> for TierCatalog {
    type Error = Error;

    fn try_from(tiers: Vec<ServiceTier>) -> Result<Self, Error> {
        Self::new(tiers)
    }
}

impl From<TierCatalog> for Vec<ServiceTier> {
    fn from(catalog: TierCatalog) -> Self {
        catalog.tiers
    }
}

impl TierCatalog {
    pub fn new(tiers: Vec<ServiceTier>) -> Result<Self, Error> {
        if tiers.is_empty() {
            return Err(invalid_input_error());
        }

        for (i, tier) in tiers.iter().enumerate() {
            tier.validate()?;

            if tiers[..i].iter().any(|other| other.id == tier.id) {
                return Err(invalid_tier_error());
            }
        }

        Ok(Self { tiers })
    }

    /// Loads a JSON array of tiers.
    #[tracing::instrument]
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, Error> {
        let tiers: Vec<ServiceTier> = serde_json::from_str(raw)?;
        Self::new(tiers)
    }

    pub fn find(&self, id: &str) -> Option<&ServiceTier> {
        self.tiers.iter().find(|tier| tier.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceTier> {
        self.tiers.iter()
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

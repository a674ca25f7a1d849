//! Fare and timing estimates derived from a flown distance.

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::entities::{FareBreakdown, ServiceTier, TripQuote};
use crate::error::{invalid_distance_error, invalid_input_error, invalid_tier_error, Error};

/// Currency units per kilometer before the tier multiplier.
pub const BASE_RATE: f64 = 50.0;
/// Average cruising speed in km per minute.
pub const CRUISE_SPEED_KM_PER_MIN: f64 = 3.0;
pub const MIN_ETA_MINUTES: i64 = 5;
pub const MAX_ETA_MINUTES: i64 = 15;

/// Quotes a trip at the standard base rate. See [`quote_with_rate`].
pub fn quote<R: Rng + ?Sized>(
    distance_km: f64,
    tier: &ServiceTier,
    rng: &mut R,
) -> Result<TripQuote, Error> {
    quote_with_rate(distance_km, tier, BASE_RATE, rng)
}

/// Fare is `round(distance × base_rate × multiplier)`, rounding halves away
/// from zero. The taxi ETA is drawn uniformly from `[5, 15]` minutes on every
/// call; everything else is a pure function of the inputs.
pub fn quote_with_rate<R: Rng + ?Sized>(
    distance_km: f64,
    tier: &ServiceTier,
    base_rate: f64,
    rng: &mut R,
) -> Result<TripQuote, Error> {
    let fare = fare(distance_km, tier, base_rate)?;

    Ok(TripQuote {
        distance_km,
        fare,
        eta_minutes: sample_eta(rng),
        flight_time_minutes: flight_time_minutes(distance_km),
    })
}

pub fn fare(distance_km: f64, tier: &ServiceTier, base_rate: f64) -> Result<i64, Error> {
    validate(distance_km, tier, base_rate)?;

    Ok((distance_km * base_rate * tier.fare_multiplier).round() as i64)
}

/// Splits a fare into the distance charge and the tier's share of it.
pub fn fare_breakdown(
    distance_km: f64,
    tier: &ServiceTier,
    base_rate: f64,
) -> Result<FareBreakdown, Error> {
    let total = fare(distance_km, tier, base_rate)?;
    let base = distance_km * base_rate;

    Ok(FareBreakdown {
        base_fare: base.round() as i64,
        tier_surcharge: (base * tier.fare_multiplier - base).round() as i64,
        total,
    })
}

pub fn flight_time_minutes(distance_km: f64) -> i64 {
    (distance_km / CRUISE_SPEED_KM_PER_MIN).floor() as i64
}

pub fn sample_eta<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    Uniform::new_inclusive(MIN_ETA_MINUTES, MAX_ETA_MINUTES).sample(rng)
}

fn validate(distance_km: f64, tier: &ServiceTier, base_rate: f64) -> Result<(), Error> {
    if !(distance_km >= 0.0) {
        return Err(invalid_distance_error());
    }

    if !(tier.fare_multiplier > 0.0) {
        return Err(invalid_tier_error());
    }

    if !(base_rate > 0.0) {
        return Err(invalid_input_error());
    }

    Ok(())
}

use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::{Binomial, Distribution, Uniform};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::api::{BookingAPI, LocationAPI, QuoteAPI, RouteAPI, API};
use crate::entities::{
    Booking, BookingStatus, Coordinates, Location, Region, Wizard, WizardStep,
};
use crate::error::{invalid_input_error, invalid_state_error, Error};

fn sample_binomial<R: Rng + ?Sized>(rng: &mut R, n: u64, p: f64) -> Result<u64, Error> {
    let bin = Binomial::new(n, p).map_err(|_| invalid_input_error())?;
    Ok(bin.sample(rng))
}

// The countdown may finish between a status arriving and the passenger
// reacting to it.
fn handle_invocation_error<T>(result: Result<T, Error>) -> Result<(), Error> {
    match result {
        Ok(_) => Ok(()),
        Err(err) if err.code == 102 => {
            tracing::warn!("invalid invocation error");
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Scripted passenger sessions against any [`API`] implementation.
struct Simulation<T: API> {
    e: Arc<T>,
    region: Region,
    rng: Mutex<StdRng>,
    cancel_probability: f64,
}

impl<T: API + Send + Sync> Simulation<T> {
    async fn sample_location(&self, label: &str) -> Result<Location, Error> {
        let coordinates = {
            let mut rng = self.rng.lock().await;
            let south_west = self.region.south_west();
            let north_east = self.region.north_east();

            let latitude = Uniform::new_inclusive(south_west.latitude, north_east.latitude);
            let longitude = Uniform::new_inclusive(south_west.longitude, north_east.longitude);

            Coordinates::new(latitude.sample(&mut *rng), longitude.sample(&mut *rng))
        };

        self.e.create_location(coordinates, label.into()).await
    }

    #[tracing::instrument(skip(self))]
    async fn run_session(&self, session: usize) -> Result<Booking, Error> {
        let mut wizard = Wizard::new();

        wizard.place_point(self.sample_location("pickup").await?)?;
        wizard.place_point(self.sample_location("drop-off").await?)?;

        let stop_count = sample_binomial(&mut *self.rng.lock().await, 2, 0.5)?;
        for i in 0..stop_count {
            let stop = self.sample_location(&format!("stop {}", i + 1)).await?;
            wizard.add_stop(stop)?;
        }

        let (origin, stops, destination) = wizard.selection().ok_or_else(invalid_state_error)?;
        let route = self.e.create_route(origin, stops, destination).await?;
        wizard.complete_route(route.clone())?;

        let quotes = self.e.quote_all_tiers(route).await?;
        for quote in quotes.iter() {
            tracing::info!(
                "{}: {} seats, ₹{} ({:.2} km, {} min flight)",
                quote.tier.name,
                quote.tier.passenger_capacity,
                quote.trip.fare,
                quote.trip.distance_km,
                quote.trip.flight_time_minutes
            );
        }

        if quotes.is_empty() {
            return Err(invalid_state_error());
        }

        let pick = {
            let mut rng = self.rng.lock().await;
            Uniform::from(0..quotes.len()).sample(&mut *rng)
        };
        let quote = quotes.into_iter().nth(pick).ok_or_else(invalid_state_error)?;
        wizard.select_tier(quote)?;

        // passengers sometimes go back to compare tiers before confirming
        if sample_binomial(&mut *self.rng.lock().await, 1, 0.2)? > 0 {
            tracing::info!("going back to tier selection");
            wizard.back()?;

            let route = match &wizard.step {
                WizardStep::TierSelection { route } => route.clone(),
                _ => return Err(invalid_state_error()),
            };
            let quote = self.e.create_quote(route, "standard").await?;
            wizard.select_tier(quote)?;
        }

        let quote = wizard.quote().cloned().ok_or_else(invalid_state_error)?;
        let booking = self.e.create_booking(quote).await?;
        wizard.confirm(booking.id)?;

        let (handle, rx) = self.e.track_booking(booking.id).await?;
        let mut cancel =
            sample_binomial(&mut *self.rng.lock().await, 1, self.cancel_probability)? > 0;

        while let Ok(status) = rx.recv().await {
            match status {
                BookingStatus::Arriving { minutes_remaining } => {
                    tracing::info!("session {}: taxi {} mins away", session, minutes_remaining);

                    if cancel {
                        tracing::info!("session {}: passenger cancels", session);
                        handle_invocation_error(self.e.cancel_booking(booking.id).await)?;
                        cancel = false;
                    }
                }
                BookingStatus::Completed => {
                    tracing::info!("session {}: taxi has arrived, enjoy your flight", session);
                }
                BookingStatus::Cancelled => {
                    tracing::info!("session {}: booking cancelled", session);
                }
            }
        }

        handle.await.map_err(|_| invalid_state_error())?;

        self.e.find_booking(booking.id).await
    }
}

pub struct Executor<T: API> {
    s: Arc<Simulation<T>>,
}

impl<T: API + Send + Sync + 'static> Executor<T> {
    pub fn new(e: Arc<T>, region: Region, rng: StdRng, cancel_probability: f64) -> Self {
        Self {
            s: Arc::new(Simulation {
                e,
                region,
                rng: Mutex::new(rng),
                cancel_probability,
            }),
        }
    }

    /// Runs `sessions` passengers concurrently and returns their final bookings.
    #[tracing::instrument(skip(self))]
    pub async fn run(&self, sessions: usize) -> Result<Vec<Booking>, Error> {
        let handles = (0..sessions).map(|session| {
            let s = self.s.clone();
            tokio::spawn(async move { s.run_session(session).await })
        });

        let mut bookings = vec![];
        for result in futures::future::join_all(handles).await {
            let booking = result.map_err(|_| invalid_state_error())??;

            tracing::info!(
                "{}: {} for ₹{}",
                booking.reference,
                booking.status.name(),
                booking.quote.fare
            );
            bookings.push(booking);
        }

        Ok(bookings)
    }
}

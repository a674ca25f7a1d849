use super::helpers::{fetch_booking, insert_booking, update_booking};
use super::Engine;

use async_channel::{Receiver, Sender};
use async_trait::async_trait;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::{
    api::BookingAPI,
    entities::{Booking, BookingStatus, Quote},
    error::Error,
    pricing,
};

#[async_trait]
impl BookingAPI for Engine {
    /// Snapshots the quote into a booking. The arrival ETA is drawn again
    /// here, independently of the one shown on the quote.
    #[tracing::instrument(skip(self, quote), fields(quote = %quote.token))]
    async fn create_booking(&self, quote: Quote) -> Result<Booking, Error> {
        let trip = {
            let mut rng = self.rng.lock().await;
            pricing::quote_with_rate(
                quote.route.distance,
                &quote.tier,
                self.config.base_rate,
                &mut *rng,
            )?
        };

        let booking = Booking::new(quote.route, quote.tier, trip);
        insert_booking(&self.bookings, &booking).await;

        tracing::info!(
            "booked {} ({}), taxi arriving in {} mins",
            booking.reference,
            booking.tier.name,
            booking.quote.eta_minutes
        );

        Ok(booking)
    }

    #[tracing::instrument(skip(self))]
    async fn find_booking(&self, id: Uuid) -> Result<Booking, Error> {
        fetch_booking(&self.bookings, &id).await
    }

    #[tracing::instrument(skip(self))]
    async fn tick_booking(&self, id: Uuid) -> Result<Booking, Error> {
        let (_, booking) = update_booking(&self.bookings, &id, |booking| booking.tick()).await?;

        Ok(booking)
    }

    #[tracing::instrument(skip(self))]
    async fn cancel_booking(&self, id: Uuid) -> Result<Booking, Error> {
        let (_, booking) = update_booking(&self.bookings, &id, |booking| booking.cancel()).await?;

        tracing::info!("booking {} cancelled", booking.reference);

        Ok(booking)
    }

    /// Runs the arrival countdown in the background, one tick per
    /// `tick_interval`, publishing each status until a terminal one.
    #[tracing::instrument(skip(self))]
    async fn track_booking(
        &self,
        id: Uuid,
    ) -> Result<(JoinHandle<()>, Receiver<BookingStatus>), Error> {
        let booking = fetch_booking(&self.bookings, &id).await?;

        let (tx, rx): (Sender<BookingStatus>, Receiver<BookingStatus>) =
            async_channel::unbounded();
        let bookings = self.bookings.clone();
        let tick_interval = self.config.tick_interval;

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick_interval);
            // the first tick of a tokio interval completes immediately
            interval.tick().await;

            loop {
                interval.tick().await;

                let result = update_booking(&bookings, &id, |booking| {
                    if booking.status.is_terminal() {
                        return Ok(booking.status);
                    }

                    booking.tick()
                })
                .await;

                let status = match result {
                    Ok((status, _)) => status,
                    Err(err) => {
                        tracing::warn!("stopped tracking {}: {}", booking.reference, err);
                        break;
                    }
                };

                if tx.send(status).await.is_err() {
                    tracing::warn!("status receiver for {} dropped", booking.reference);
                    break;
                }

                if status.is_terminal() {
                    tracing::info!("booking {} is {}", booking.reference, status.name());
                    break;
                }
            }
        });

        Ok((handle, rx))
    }
}

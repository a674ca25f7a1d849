use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Route, ServiceTier, TripQuote};
use crate::error::{invalid_invocation_error, Error};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub reference: String,
    pub route: Route,
    pub tier: ServiceTier,
    pub quote: TripQuote,
    pub created_at: DateTime<Utc>,
    pub elapsed_minutes: i64,
    pub status: Status,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Status {
    Arriving { minutes_remaining: i64 },
    Completed,
    Cancelled,
}

impl Status {
    pub fn name(&self) -> String {
        match self {
            Self::Arriving {
                minutes_remaining: _,
            } => "arriving".into(),
            Self::Completed => "completed".into(),
            Self::Cancelled => "cancelled".into(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Arriving { .. })
    }
}

impl Booking {
    pub fn new(route: Route, tier: ServiceTier, quote: TripQuote) -> Self {
        let created_at = Utc::now();

        Self {
            id: Uuid::new_v4(),
            reference: reference_for(&created_at),
            route,
            tier,
            quote,
            created_at,
            elapsed_minutes: 0,
            status: Status::Arriving {
                minutes_remaining: quote.eta_minutes.max(0),
            },
        }
    }

    /// Advances the arrival countdown by one minute. The taxi is treated as
    /// arrived once a tick lands with at most one minute left.
    #[tracing::instrument(skip(self), fields(booking = %self.reference))]
    pub fn tick(&mut self) -> Result<Status, Error> {
        match self.status {
            Status::Arriving { minutes_remaining } => {
                self.elapsed_minutes += 1;
                self.status = if minutes_remaining <= 1 {
                    Status::Completed
                } else {
                    Status::Arriving {
                        minutes_remaining: minutes_remaining - 1,
                    }
                };
                Ok(self.status)
            }
            _ => Err(invalid_invocation_error()),
        }
    }

    #[tracing::instrument(skip(self), fields(booking = %self.reference))]
    pub fn cancel(&mut self) -> Result<(), Error> {
        match self.status {
            Status::Arriving {
                minutes_remaining: _,
            } => {
                self.status = Status::Cancelled;
                Ok(())
            }
            _ => Err(invalid_invocation_error()),
        }
    }

    /// Share of the arrival countdown already elapsed, in percent.
    pub fn progress(&self) -> f64 {
        if self.status == Status::Completed || self.quote.eta_minutes <= 0 {
            return 100.0;
        }

        (self.elapsed_minutes as f64 * 100.0 / self.quote.eta_minutes as f64).min(100.0)
    }
}

// "FT" plus the last eight digits of the creation time in milliseconds.
fn reference_for(created_at: &DateTime<Utc>) -> String {
    format!("FT{:08}", created_at.timestamp_millis().rem_euclid(100_000_000))
}

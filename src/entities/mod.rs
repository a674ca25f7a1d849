mod booking;
mod location;
mod quote;
mod region;
mod route;
mod tier;
mod wizard;

pub use booking::{Booking, Status as BookingStatus};
pub use location::{Coordinates, Location};
pub use quote::{FareBreakdown, Quote, TripQuote};
pub use region::Region;
pub use route::Route;
pub use tier::{ServiceTier, TierCatalog};
pub use wizard::{Step as WizardStep, Wizard};

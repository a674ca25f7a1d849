use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Location, Quote, Route};
use crate::error::{invalid_invocation_error, Error};

/// Booking flow for one passenger session.
///
/// Steps only move forward one at a time, may step back from tier selection
/// and confirmation, and reach `Status` solely through [`Wizard::confirm`].
/// Rejected transitions leave the current step untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Wizard {
    pub step: Step,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Step {
    MapSelection {
        origin: Option<Location>,
        destination: Option<Location>,
        stops: Vec<Location>,
    },
    TierSelection {
        route: Route,
    },
    Confirmation {
        quote: Quote,
    },
    Status {
        booking_id: Uuid,
    },
}

impl Step {
    pub fn name(&self) -> String {
        match self {
            Self::MapSelection { .. } => "map_selection".into(),
            Self::TierSelection { route: _ } => "tier_selection".into(),
            Self::Confirmation { quote: _ } => "confirmation".into(),
            Self::Status { booking_id: _ } => "status".into(),
        }
    }

    fn empty_map() -> Self {
        Self::MapSelection {
            origin: None,
            destination: None,
            stops: vec![],
        }
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: Step::empty_map(),
        }
    }

    /// First point placed is the pickup, the second the drop-off.
    #[tracing::instrument(skip(self))]
    pub fn place_point(&mut self, location: Location) -> Result<(), Error> {
        match &mut self.step {
            Step::MapSelection {
                origin: origin @ None,
                ..
            } => {
                *origin = Some(location);
                Ok(())
            }
            Step::MapSelection {
                destination: destination @ None,
                ..
            } => {
                *destination = Some(location);
                Ok(())
            }
            _ => Err(invalid_invocation_error()),
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn add_stop(&mut self, location: Location) -> Result<(), Error> {
        match &mut self.step {
            Step::MapSelection { stops, .. } => {
                stops.push(location);
                Ok(())
            }
            _ => Err(invalid_invocation_error()),
        }
    }

    pub fn clear_points(&mut self) -> Result<(), Error> {
        match self.step {
            Step::MapSelection { .. } => {
                self.step = Step::empty_map();
                Ok(())
            }
            _ => Err(invalid_invocation_error()),
        }
    }

    /// Waypoints picked so far, once both ends are set.
    pub fn selection(&self) -> Option<(Location, Vec<Location>, Location)> {
        match &self.step {
            Step::MapSelection {
                origin: Some(origin),
                destination: Some(destination),
                stops,
            } => Some((origin.clone(), stops.clone(), destination.clone())),
            _ => None,
        }
    }

    #[tracing::instrument(skip_all)]
    pub fn complete_route(&mut self, route: Route) -> Result<(), Error> {
        match self.selection() {
            Some((origin, stops, destination))
                if origin.token == route.origin.token
                    && destination.token == route.destination.token
                    && stops
                        .iter()
                        .map(|stop| stop.token)
                        .eq(route.stops.iter().map(|stop| stop.token)) => {}
            _ => return Err(invalid_invocation_error()),
        }

        self.step = Step::TierSelection { route };
        Ok(())
    }

    #[tracing::instrument(skip_all)]
    pub fn select_tier(&mut self, quote: Quote) -> Result<(), Error> {
        match &self.step {
            Step::TierSelection { route } if route.token == quote.route.token => {
                self.step = Step::Confirmation { quote };
                Ok(())
            }
            _ => Err(invalid_invocation_error()),
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn back(&mut self) -> Result<(), Error> {
        let previous = match &self.step {
            Step::TierSelection { route } => Step::MapSelection {
                origin: Some(route.origin.clone()),
                destination: Some(route.destination.clone()),
                stops: route.stops.clone(),
            },
            Step::Confirmation { quote } => Step::TierSelection {
                route: quote.route.clone(),
            },
            _ => return Err(invalid_invocation_error()),
        };

        self.step = previous;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub fn confirm(&mut self, booking_id: Uuid) -> Result<(), Error> {
        match self.step {
            Step::Confirmation { quote: _ } => {
                self.step = Step::Status { booking_id };
                Ok(())
            }
            _ => Err(invalid_invocation_error()),
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn start_over(&mut self) -> Result<(), Error> {
        match self.step {
            Step::Status { booking_id: _ } => {
                self.step = Step::empty_map();
                Ok(())
            }
            _ => Err(invalid_invocation_error()),
        }
    }

    pub fn quote(&self) -> Option<&Quote> {
        match &self.step {
            Step::Confirmation { quote } => Some(quote),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::entities::{Coordinates, FareBreakdown, ServiceTier, TripQuote};

    fn at(latitude: f64, longitude: f64) -> Location {
        Location::new(Coordinates::new(latitude, longitude), "".into())
    }

    fn route_for(wizard: &Wizard) -> Route {
        let (origin, stops, destination) = wizard.selection().unwrap();
        Route::new(origin, stops, destination).unwrap()
    }

    fn route_for_step(wizard: &Wizard) -> Route {
        match &wizard.step {
            Step::TierSelection { route } => route.clone(),
            _ => panic!("not selecting a tier"),
        }
    }

    fn quote_for(route: &Route) -> Quote {
        let trip = TripQuote {
            distance_km: route.distance,
            fare: 100,
            eta_minutes: 5,
            flight_time_minutes: 0,
        };
        let breakdown = FareBreakdown {
            base_fare: 100,
            tier_surcharge: 0,
            total: 100,
        };

        Quote::new(route.clone(), ServiceTier::standard(), trip, breakdown)
    }

    fn wizard_at_tiers() -> Wizard {
        let mut wizard = Wizard::new();
        wizard.place_point(at(12.9716, 77.5946)).unwrap();
        wizard.place_point(at(12.9352, 77.6245)).unwrap();

        let route = route_for(&wizard);
        wizard.complete_route(route).unwrap();
        wizard
    }

    #[test]
    fn happy_path() {
        let mut wizard = wizard_at_tiers();
        assert_eq!(wizard.step.name(), "tier_selection");

        let route = route_for_step(&wizard);
        wizard.select_tier(quote_for(&route)).unwrap();
        assert_eq!(wizard.step.name(), "confirmation");
        assert_eq!(wizard.quote().unwrap().trip.fare, 100);

        let booking_id = Uuid::new_v4();
        wizard.confirm(booking_id).unwrap();
        assert!(matches!(wizard.step, Step::Status { booking_id: id } if id == booking_id));

        wizard.start_over().unwrap();
        assert!(wizard.selection().is_none());
        assert_eq!(wizard.step.name(), "map_selection");
    }

    #[test]
    fn third_point_needs_add_stop() {
        let mut wizard = Wizard::new();
        wizard.place_point(at(12.9716, 77.5946)).unwrap();
        wizard.place_point(at(12.9352, 77.6245)).unwrap();

        assert_eq!(
            wizard.place_point(at(12.96, 77.64)).unwrap_err().code,
            102
        );

        wizard.add_stop(at(12.96, 77.64)).unwrap();
        let (_, stops, _) = wizard.selection().unwrap();
        assert_eq!(stops.len(), 1);

        wizard.clear_points().unwrap();
        assert!(wizard.selection().is_none());
    }

    #[test]
    fn route_needs_both_ends() {
        let mut wizard = Wizard::new();
        wizard.place_point(at(12.9716, 77.5946)).unwrap();

        let route = Route::new(at(12.9716, 77.5946), vec![], at(12.9352, 77.6245)).unwrap();
        assert_eq!(wizard.complete_route(route).unwrap_err().code, 102);
        assert_eq!(wizard.step.name(), "map_selection");
    }

    #[test]
    fn route_must_keep_selected_stops() {
        let mut wizard = Wizard::new();
        let origin = at(12.9716, 77.5946);
        let destination = at(12.9352, 77.6245);
        let (first, second) = (at(12.96, 77.64), at(12.95, 77.61));

        wizard.place_point(origin.clone()).unwrap();
        wizard.place_point(destination.clone()).unwrap();
        wizard.add_stop(first.clone()).unwrap();

        let direct = Route::new(origin.clone(), vec![], destination.clone()).unwrap();
        assert_eq!(wizard.complete_route(direct).unwrap_err().code, 102);
        assert_eq!(wizard.step.name(), "map_selection");

        wizard.add_stop(second.clone()).unwrap();
        let swapped = Route::new(
            origin.clone(),
            vec![second.clone(), first.clone()],
            destination.clone(),
        )
        .unwrap();
        assert_eq!(wizard.complete_route(swapped).unwrap_err().code, 102);

        let selected = Route::new(origin, vec![first, second], destination).unwrap();
        wizard.complete_route(selected).unwrap();
        assert_eq!(route_for_step(&wizard).stops.len(), 2);
    }

    #[test]
    fn back_steps() {
        let mut wizard = wizard_at_tiers();
        let route = route_for_step(&wizard);

        wizard.select_tier(quote_for(&route)).unwrap();
        wizard.back().unwrap();
        assert_eq!(wizard.step.name(), "tier_selection");

        wizard.back().unwrap();
        assert_eq!(wizard.step.name(), "map_selection");
        assert!(wizard.selection().is_some());

        assert_eq!(wizard.back().unwrap_err().code, 102);
    }

    #[test]
    fn illegal_jumps_are_rejected() {
        let mut wizard = Wizard::new();

        assert_eq!(wizard.confirm(Uuid::new_v4()).unwrap_err().code, 102);
        assert_eq!(wizard.start_over().unwrap_err().code, 102);

        let mut wizard = wizard_at_tiers();
        let route = route_for_step(&wizard);
        let stale = Route::new(at(12.9, 77.5), vec![], at(12.95, 77.6)).unwrap();

        assert_eq!(wizard.select_tier(quote_for(&stale)).unwrap_err().code, 102);
        assert_eq!(wizard.confirm(Uuid::new_v4()).unwrap_err().code, 102);
        assert_eq!(wizard.add_stop(at(12.96, 77.64)).unwrap_err().code, 102);

        wizard.select_tier(quote_for(&route)).unwrap();
        wizard.confirm(Uuid::new_v4()).unwrap();
        assert_eq!(wizard.back().unwrap_err().code, 102);
    }
}

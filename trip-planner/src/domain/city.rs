//! Cities and the routes leaving them.

use super::Comfort;
use crate::traffic::DayType;

/// A directed route from one city to a neighbour.
///
/// Routes are registered in pairs by [`crate::graph::CityGraph::add_route`],
/// so every route has a mirror image with the same comfort, cost and
/// duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    destination: String,
    comfort: Comfort,
    cost: u32,
    duration_mins: u32,
}

impl Route {
    pub(crate) fn new(
        destination: impl Into<String>,
        comfort: Comfort,
        cost: u32,
        duration_mins: u32,
    ) -> Self {
        Self {
            destination: destination.into(),
            comfort,
            cost,
            duration_mins,
        }
    }

    /// Name of the city this route leads to.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Comfort class of the service on this route.
    pub fn comfort(&self) -> Comfort {
        self.comfort
    }

    /// Ticket price. Informational only.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Base travel time in minutes, before any traffic adjustment.
    /// Always positive.
    pub fn duration_mins(&self) -> u32 {
        self.duration_mins
    }

    /// Fare for travelling this route on the given day type.
    ///
    /// The ticket price scaled by the comfort class and the day type's
    /// discount. Never used to choose a path.
    pub fn fare(&self, day_type: DayType) -> f64 {
        f64::from(self.cost) * day_type.fare_factor() * self.comfort.price_factor()
    }
}

/// A city and its outgoing routes, in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    name: String,
    routes: Vec<Route>,
}

impl City {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            routes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the first route to `destination`, if any.
    pub fn route_to(&self, destination: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.destination == destination)
    }

    pub(crate) fn push_route(&mut self, route: Route) {
        self.routes.push(route);
    }
}

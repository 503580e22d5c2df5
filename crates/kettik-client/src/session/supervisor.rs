/*
[INPUT]:  Results of domain calls and a navigator implementation
[OUTPUT]: Navigation to the login entry point when a session ends
[POS]:    Session layer - single top-level owner of navigation side effects
[UPDATE]: When navigation rules on failure change
*/

use tracing::info;

use super::route::{LOGIN_ROUTE, Route, RouteGate};
use crate::http::{KettikError, Result};

/// Moves the user between views
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &Route);
}

/// Observes call results and performs the navigation they require.
///
/// The HTTP layer only reports [`KettikError::SessionExpired`]; this is
/// the one place that turns it into a trip to the login view.
#[derive(Debug)]
pub struct SessionSupervisor<N: Navigator> {
    navigator: N,
    gate: RouteGate,
}

impl<N: Navigator> SessionSupervisor<N> {
    pub fn new(navigator: N, gate: RouteGate) -> Self {
        Self { navigator, gate }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Pass `result` through, navigating to login on an expired session
    pub fn observe<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(KettikError::SessionExpired) = &result {
            info!(route = %LOGIN_ROUTE, "session expired, returning to login");
            self.navigator.navigate(&LOGIN_ROUTE);
        }
        result
    }

    /// Navigate through the route gate; returns the route shown
    pub fn navigate_to(&self, requested: Route) -> Route {
        let admitted = self.gate.admit(requested);
        self.navigator.navigate(&admitted);
        admitted
    }
}

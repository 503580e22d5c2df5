/*
[INPUT]:  Routes chosen by the session supervisor
[OUTPUT]: Route lines on stdout and an in-memory history
[POS]:    Presentation layer - terminal navigation
[UPDATE]: When route presentation changes
*/

use std::sync::{Mutex, PoisonError};

use console::style;
use kettik_client::{Navigator, Route};

/// Navigator for a terminal session: there is no view to swap, so the
/// route is printed and remembered.
#[derive(Debug, Default)]
pub struct TerminalNavigator {
    history: Mutex<Vec<Route>>,
    quiet: bool,
}

impl TerminalNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record routes without printing them
    pub fn quiet() -> Self {
        Self {
            history: Mutex::new(Vec::new()),
            quiet: true,
        }
    }

    pub fn history(&self) -> Vec<Route> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn current(&self) -> Option<Route> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: &Route) {
        if !self.quiet {
            println!("{} {}", style("→").dim(), style(route).cyan());
        }
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_routes_in_order() {
        let navigator = TerminalNavigator::quiet();
        assert_eq!(navigator.current(), None);

        navigator.navigate(&Route::Phone);
        navigator.navigate(&Route::Dashboard);

        assert_eq!(navigator.history(), vec![Route::Phone, Route::Dashboard]);
        assert_eq!(navigator.current(), Some(Route::Dashboard));
    }
}

/*
[INPUT]:  Navigation paths and the token store
[OUTPUT]: Resolved routes and access decisions for protected views
[POS]:    Session layer - route table and route gate
[UPDATE]: When views are added or access rules change
*/

use std::fmt;
use std::sync::Arc;

use url::form_urlencoded;

use crate::auth::TokenStore;

/// Views of the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Phone entry, the login entry point
    Phone,
    /// Code entry for a phone that was just sent a code
    Code { phone: String },
    Dashboard,
    NotFound(String),
}

/// Where an ended session sends the user
pub const LOGIN_ROUTE: Route = Route::Phone;

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Phone => "/auth/phone".to_string(),
            Route::Code { phone } => {
                let phone: String = form_urlencoded::byte_serialize(phone.as_bytes()).collect();
                format!("/auth/code?phone={phone}")
            }
            Route::Dashboard => "/dashboard".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Map a path to a view; `/` and `/profile` land on the dashboard
    pub fn resolve(path: &str) -> Route {
        let (location, query) = match path.split_once('?') {
            Some((location, query)) => (location, query),
            None => (path, ""),
        };

        match location {
            "" | "/" | "/dashboard" | "/profile" => Route::Dashboard,
            "/auth/phone" => Route::Phone,
            "/auth/code" => {
                let phone = form_urlencoded::parse(query.as_bytes())
                    .find(|(key, _)| key == "phone")
                    .map(|(_, value)| value.into_owned())
                    .unwrap_or_default();
                Route::Code { phone }
            }
            _ => Route::NotFound(path.to_string()),
        }
    }

    /// Views that need a stored credential
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Decides whether a protected view may be shown
#[derive(Debug, Clone)]
pub struct RouteGate {
    store: Arc<dyn TokenStore>,
}

impl RouteGate {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// The route to actually show for `requested`
    pub fn admit(&self, requested: Route) -> Route {
        if requested.is_protected() && !self.store.is_present() {
            LOGIN_ROUTE
        } else {
            requested
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryTokenStore;
    use rstest::rstest;

    #[rstest]
    #[case("/", Route::Dashboard)]
    #[case("/profile", Route::Dashboard)]
    #[case("/dashboard", Route::Dashboard)]
    #[case("/auth/phone", Route::Phone)]
    #[case("/auth/code?phone=%2B996700000000", Route::Code { phone: "+996700000000".to_string() })]
    #[case("/auth/code", Route::Code { phone: String::new() })]
    #[case("/settings", Route::NotFound("/settings".to_string()))]
    fn test_resolve(#[case] path: &str, #[case] expected: Route) {
        assert_eq!(Route::resolve(path), expected);
    }

    #[test]
    fn test_code_path_round_trip() {
        let route = Route::Code {
            phone: "+996 700".to_string(),
        };
        assert_eq!(route.path(), "/auth/code?phone=%2B996+700");
        assert_eq!(Route::resolve(&route.path()), route);
    }

    #[test]
    fn test_gate_redirects_without_credential() {
        let store = MemoryTokenStore::new();
        let gate = RouteGate::new(Arc::new(store.clone()));

        assert_eq!(gate.admit(Route::Dashboard), Route::Phone);
        assert_eq!(gate.admit(Route::Phone), Route::Phone);

        store.set("abc").unwrap();
        assert_eq!(gate.admit(Route::Dashboard), Route::Dashboard);
    }
}

/*
[INPUT]:  Token store and call results
[OUTPUT]: Route decisions and login redirects
[POS]:    Session layer - navigation seam between the core and a front end
[UPDATE]: When views or navigation rules change
*/

pub mod route;
pub mod supervisor;

pub use route::{LOGIN_ROUTE, Route, RouteGate};
pub use supervisor::{Navigator, SessionSupervisor};

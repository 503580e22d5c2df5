/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Kettik client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod api;
pub mod auth;
pub mod http;
pub mod session;
pub mod types;

pub use api::KettikApi;

// Re-export commonly used types from auth
pub use auth::{FileTokenStore, MemoryTokenStore, TokenStore};

// Re-export commonly used types from http
pub use http::{
    ApiResponse,
    ClientConfig,
    KettikClient,
    KettikError,
    RequestDescriptor,
    ResponseBody,
    Result,
    SESSION_EXPIRED_MESSAGE,
    SessionGuard,
};

pub use session::{LOGIN_ROUTE, Navigator, Route, RouteGate, SessionSupervisor};

// Re-export all types
pub use types::*;

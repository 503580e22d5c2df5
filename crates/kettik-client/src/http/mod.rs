/*
[INPUT]:  HTTP client configuration, request descriptors and the token store
[OUTPUT]: Normalized responses and typed failures
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new transport behavior or changing client behavior
*/

pub mod client;
pub mod error;
pub mod guard;
pub mod request;
pub mod response;

pub use error::{KettikError, NO_CREDENTIAL_MESSAGE, Result, SESSION_EXPIRED_MESSAGE};
pub use guard::SessionGuard;
pub use request::RequestDescriptor;
pub use response::{ApiResponse, ERROR_MESSAGE_FIELDS, ResponseBody};

pub use client::{BASE_URL_ENV, ClientConfig, DEFAULT_BASE_URL, KettikClient};

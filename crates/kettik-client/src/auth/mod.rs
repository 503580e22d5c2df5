/*
[INPUT]:  Access tokens issued by code verification
[OUTPUT]: Shared credential storage for authenticated calls
[POS]:    Auth layer - credential persistence
[UPDATE]: When adding store implementations
*/

pub mod file_store;
pub mod store;

pub use file_store::{ACCESS_TOKEN_KEY, FileTokenStore, SESSION_FILE_NAME};
pub use store::{MemoryTokenStore, TokenStore};

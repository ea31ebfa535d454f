//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod router;
pub mod schemas;
pub mod specials;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;
pub use router::api_scope;

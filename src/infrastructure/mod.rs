//! Infrastructure layer - External service implementations

pub mod credentials;
pub mod embedding;
pub mod http_client;
pub mod logging;

//! Connectors to external services the marketplace depends on.

pub mod media_service;

pub use media_service::MediaServiceConnector;

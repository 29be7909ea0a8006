/// Trading212 REST client implementing the service interfaces
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces grouped by API area
pub mod interfaces;

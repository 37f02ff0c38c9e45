pub mod configuration;
pub mod controller;
pub mod domain;
pub mod email_client;
mod error_handling;
pub mod page;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod transport;

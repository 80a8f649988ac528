//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the data-access adapters the feature services are built on.

pub mod store;

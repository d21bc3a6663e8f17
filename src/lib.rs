//! Thermostat API - temperature logging service with paginated readings
//!
//! This library exposes the core modules for testing and reuse.

pub mod client;
pub mod common;
pub mod config;
pub mod entity;
pub mod error;
pub mod pagination;
pub mod routes;
pub mod services;
pub mod timestamps;
pub mod validate;

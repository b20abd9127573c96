//! Core library exports for the timeblock scheduling service.
//!
//! This crate exposes the configuration, models, repository, aggregation
//! services and HTTP layer used by the timeblock API server.

pub mod config;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod utils;

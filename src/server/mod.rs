//! Server application core modules.
//!
//! This module contains all server-side functionality for the recommendation service:
//! HTTP routing, configuration, database access to the Pokémon table, the recommendation
//! lookup and the error types mapped onto HTTP responses.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;

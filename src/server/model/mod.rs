//! Server application models and type definitions.
//!
//! This module contains the application state shared by handlers, database model type
//! aliases, and the result type of the recommendation lookup.

pub mod app;
pub mod db;
pub mod recommendation;

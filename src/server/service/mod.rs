//! Business logic services.
//!
//! Services coordinate repositories and translate missing records into domain errors.

pub mod pokemon;

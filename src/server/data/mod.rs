//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations. The service only
//! reads; there is no write path.

pub mod pokemon;

//! Test fixture modules for database record creation.
//!
//! - `pokemon` - Pokémon records, both in-memory factories and database inserts

pub mod pokemon;

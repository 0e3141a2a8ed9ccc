//! Database model type aliases.
//!
//! Provides a single point of reference for SeaORM entity models so the rest of the
//! server does not import from the generated `entity` crate directly.

/// Type alias for the Pokémon database model.
///
/// Represents one Pokémon's stats and classification, identified by its number.
///
/// # Fields (from `entity::pokemon::Model`)
/// - `number` - Primary key, the Pokédex number (not auto-incremented)
/// - `name` - Pokémon name
/// - `primary_type` - Main elemental type, the sole recommendation criterion
/// - `secondary_type` - Second elemental type, empty for single-typed Pokémon
/// - `price` - Shop price in whole dollars
/// - `hp`, `attack`, `defense`, `sp_atk`, `sp_def`, `speed` - Battle stats
/// - `generation` - Generation the Pokémon was introduced in
/// - `legendary` - Whether the Pokémon is legendary
pub type PokemonModel = entity::pokemon::Model;

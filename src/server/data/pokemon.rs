use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

use crate::server::model::db::PokemonModel;

pub struct PokemonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PokemonRepository<'a, C> {
    /// Creates a new instance of [`PokemonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a Pokémon by its number
    pub async fn get_by_number(&self, number: i32) -> Result<Option<PokemonModel>, DbErr> {
        entity::prelude::Pokemon::find_by_id(number)
            .one(self.db)
            .await
    }

    /// Gets up to `limit` Pokémon with the given primary type, excluding `excluded_number`
    ///
    /// No ordering is applied, rows come back in the store's default retrieval order.
    pub async fn get_many_by_primary_type(
        &self,
        primary_type: &str,
        excluded_number: i32,
        limit: u64,
    ) -> Result<Vec<PokemonModel>, DbErr> {
        entity::prelude::Pokemon::find()
            .filter(entity::pokemon::Column::PrimaryType.eq(primary_type))
            .filter(entity::pokemon::Column::Number.ne(excluded_number))
            .limit(limit)
            .all(self.db)
            .await
    }
}

pub mod document;
pub mod page;
pub mod pokemon_card;

pub use document::Document;
pub use page::Page;
pub use pokemon_card::PokemonCard;

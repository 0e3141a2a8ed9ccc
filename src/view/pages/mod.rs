pub mod not_found;
pub mod recommendations;

pub use not_found::{render_not_found, NotFoundPage};
pub use recommendations::{render_recommendations, RecommendationsPage};

//! Data transfer objects shared by the JSON API and the HTML views.

pub mod api;
pub mod pokemon;

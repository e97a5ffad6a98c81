pub mod aggregate;
pub mod app;
pub mod fallback;
pub mod models;
pub mod normalize;
pub mod search;
pub mod tmdb;
pub mod trailer;

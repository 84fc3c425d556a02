//! Map generation for gridsearch: random walls and endpoint placement.

pub mod config;
pub mod error;
pub mod mapgen;

pub use config::MapConfig;
pub use error::MapError;
pub use mapgen::{MAX_PLACEMENT_ATTEMPTS, MapGen};

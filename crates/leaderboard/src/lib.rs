pub mod api;
pub mod models;

pub use api::{LeaderboardApi, LeaderboardBackend};
pub use models::LeaderboardEntry;

use serde::{Deserialize, Serialize};

/// One row of the ranked list. Search hits share the same shape, so this is
/// the only record type crossing the wire in either direction.
///
/// The backend emits lowercase field names; capitalized variants seen from
/// older deployments are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(alias = "Rank")]
    pub rank: u32,
    #[serde(alias = "Username")]
    pub username: String,
    #[serde(alias = "Rating")]
    pub rating: f64,
}

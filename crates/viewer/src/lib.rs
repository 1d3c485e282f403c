pub mod screen;
pub mod state;

pub use screen::LeaderboardScreen;
pub use state::{Effect, ScreenEvent, ScreenState, SearchState};

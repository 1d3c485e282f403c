use std::sync::Arc;
use std::time::Duration;

use leaderboard::LeaderboardBackend;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::state::{Effect, ScreenEvent, ScreenState};

/// Drives the two data flows behind one screen: the one-shot leaderboard
/// load and the debounced username lookup. All display state lives in the
/// shared [`ScreenState`]; this type only interprets the effects the state
/// transitions ask for.
pub struct LeaderboardScreen {
    backend: Arc<dyn LeaderboardBackend>,
    state: Arc<Mutex<ScreenState>>,
    debounce: Duration,
    /// The armed debounce timer. Never more than one; arming a new one
    /// aborts the previous handle first.
    timer: Option<JoinHandle<()>>,
    loaded: bool,
}

impl LeaderboardScreen {
    pub fn new(backend: Arc<dyn LeaderboardBackend>, debounce: Duration) -> Self {
        Self {
            backend,
            state: Arc::new(Mutex::new(ScreenState::default())),
            debounce,
            timer: None,
            loaded: false,
        }
    }

    /// Fetches the ranked list. Runs once per screen lifetime; the list is
    /// never refreshed and repeat calls are ignored. A failed fetch leaves
    /// the list empty and is only logged.
    pub async fn load_leaderboard(&mut self) {
        if self.loaded {
            debug!("Leaderboard already loaded, ignoring repeat load");
            return;
        }
        self.loaded = true;

        match self.backend.leaderboard().await {
            Ok(entries) => {
                debug!("Loaded {} leaderboard entries", entries.len());
                self.state
                    .lock()
                    .await
                    .apply(ScreenEvent::LeaderboardLoaded(entries));
            }
            Err(e) => warn!("Failed to load leaderboard: {}", e),
        }
    }

    /// The renderer's single mutation event: the query text changed.
    pub async fn on_query_change(&mut self, new_query: &str) {
        let effect = self
            .state
            .lock()
            .await
            .apply(ScreenEvent::QueryChanged(new_query.to_string()));

        match effect {
            Effect::None => {}
            Effect::CancelSearch => self.cancel_timer(),
            Effect::ScheduleSearch { generation, query } => {
                self.cancel_timer();
                self.timer = Some(self.arm_search(generation, query));
            }
        }
    }

    /// Sleeps out the debounce window, then performs the lookup and feeds
    /// the outcome back tagged with the generation that armed it. Request
    /// failures and malformed payloads count as zero results.
    fn arm_search(&self, generation: u64, query: String) -> JoinHandle<()> {
        let backend = Arc::clone(&self.backend);
        let state = Arc::clone(&self.state);
        let debounce = self.debounce;

        tokio::spawn(async move {
            tokio::time::sleep(debounce).await;

            let results = match backend.search(&query).await {
                Ok(results) => results,
                Err(e) => {
                    debug!("Search for {:?} failed: {}", query, e);
                    Vec::new()
                }
            };

            state.lock().await.apply(ScreenEvent::SearchResolved {
                generation,
                results,
            });
        })
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    /// A copy of the display state for the renderer.
    pub async fn snapshot(&self) -> ScreenState {
        self.state.lock().await.clone()
    }
}

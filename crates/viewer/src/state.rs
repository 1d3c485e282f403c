use leaderboard::LeaderboardEntry;

/// Where the search surface currently is, from the renderer's point of view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchState {
    /// Query is empty; no card is shown.
    #[default]
    Idle,
    /// Debounce window open or request in flight; loading indicator shown.
    Pending,
    /// The latest lookup returned at least one entry.
    Found(Vec<LeaderboardEntry>),
    /// The latest lookup resolved with nothing to show (zero results or a
    /// failed request; the two are indistinguishable here).
    Empty,
}

/// Everything the renderer consumes, updated only through [`ScreenState::apply`].
#[derive(Debug, Clone, Default)]
pub struct ScreenState {
    pub leaderboard: Vec<LeaderboardEntry>,
    pub query: String,
    pub search: SearchState,
    generation: u64,
}

#[derive(Debug, Clone)]
pub enum ScreenEvent {
    LeaderboardLoaded(Vec<LeaderboardEntry>),
    QueryChanged(String),
    SearchResolved {
        generation: u64,
        results: Vec<LeaderboardEntry>,
    },
}

/// What the async driver must do after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Abort the live debounce timer, if any.
    CancelSearch,
    /// Abort the live debounce timer, then arm a fresh one for `query`,
    /// tagged with `generation`.
    ScheduleSearch { generation: u64, query: String },
}

impl ScreenState {
    /// Applies one transition and reports the side work it implies.
    ///
    /// Every query edit advances the generation, so a `SearchResolved`
    /// carrying an older generation can never overwrite state belonging to
    /// a newer query.
    pub fn apply(&mut self, event: ScreenEvent) -> Effect {
        match event {
            ScreenEvent::LeaderboardLoaded(entries) => {
                self.leaderboard = entries;
                Effect::None
            }
            ScreenEvent::QueryChanged(query) => {
                self.generation += 1;
                self.query = query;
                if self.query.trim().is_empty() {
                    self.search = SearchState::Idle;
                    Effect::CancelSearch
                } else {
                    self.search = SearchState::Pending;
                    Effect::ScheduleSearch {
                        generation: self.generation,
                        query: self.query.clone(),
                    }
                }
            }
            ScreenEvent::SearchResolved {
                generation,
                results,
            } => {
                if generation != self.generation {
                    return Effect::None;
                }
                self.search = if results.is_empty() {
                    SearchState::Empty
                } else {
                    SearchState::Found(results)
                };
                Effect::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(rank: u32, username: &str, rating: f64) -> LeaderboardEntry {
        LeaderboardEntry {
            rank,
            username: username.to_string(),
            rating,
        }
    }

    fn scheduled(effect: Effect) -> (u64, String) {
        match effect {
            Effect::ScheduleSearch { generation, query } => (generation, query),
            other => panic!("expected ScheduleSearch, got {:?}", other),
        }
    }

    #[test]
    fn leaderboard_is_stored_verbatim() {
        let mut state = ScreenState::default();
        let entries = vec![entry(2, "second", 200.0), entry(1, "first", 300.0)];
        let effect = state.apply(ScreenEvent::LeaderboardLoaded(entries.clone()));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.leaderboard, entries);
    }

    #[test]
    fn nonempty_query_goes_pending_and_schedules() {
        let mut state = ScreenState::default();
        let effect = state.apply(ScreenEvent::QueryChanged("alice".to_string()));
        let (generation, query) = scheduled(effect);
        assert_eq!(query, "alice");
        assert!(generation > 0);
        assert_eq!(state.search, SearchState::Pending);
        assert_eq!(state.query, "alice");
    }

    #[test]
    fn scheduled_query_is_raw_not_trimmed() {
        let mut state = ScreenState::default();
        let (_, query) = scheduled(state.apply(ScreenEvent::QueryChanged("  alice ".to_string())));
        assert_eq!(query, "  alice ");
    }

    #[test]
    fn whitespace_query_resets_to_idle_and_cancels() {
        let mut state = ScreenState::default();
        let (generation, _) = scheduled(state.apply(ScreenEvent::QueryChanged("alice".to_string())));
        state.apply(ScreenEvent::SearchResolved {
            generation,
            results: vec![entry(1, "alice", 1000.0)],
        });
        assert!(matches!(state.search, SearchState::Found(_)));

        let effect = state.apply(ScreenEvent::QueryChanged("   ".to_string()));
        assert_eq!(effect, Effect::CancelSearch);
        assert_eq!(state.search, SearchState::Idle);
    }

    #[test]
    fn resolution_with_results_is_found() {
        let mut state = ScreenState::default();
        let (generation, _) = scheduled(state.apply(ScreenEvent::QueryChanged("ali".to_string())));
        state.apply(ScreenEvent::SearchResolved {
            generation,
            results: vec![entry(3, "alice", 950.0)],
        });
        assert_eq!(
            state.search,
            SearchState::Found(vec![entry(3, "alice", 950.0)])
        );
    }

    #[test]
    fn resolution_with_no_results_is_empty() {
        let mut state = ScreenState::default();
        let (generation, _) = scheduled(state.apply(ScreenEvent::QueryChanged("ghost".to_string())));
        state.apply(ScreenEvent::SearchResolved {
            generation,
            results: Vec::new(),
        });
        assert_eq!(state.search, SearchState::Empty);
    }

    #[test]
    fn stale_resolution_cannot_overwrite_newer_outcome() {
        let mut state = ScreenState::default();
        let (old_generation, _) =
            scheduled(state.apply(ScreenEvent::QueryChanged("alice".to_string())));
        let (new_generation, _) =
            scheduled(state.apply(ScreenEvent::QueryChanged("alicia".to_string())));

        state.apply(ScreenEvent::SearchResolved {
            generation: new_generation,
            results: vec![entry(5, "alicia", 870.0)],
        });

        // The older query's response arrives late and must be dropped.
        let effect = state.apply(ScreenEvent::SearchResolved {
            generation: old_generation,
            results: vec![entry(9, "alice", 500.0)],
        });
        assert_eq!(effect, Effect::None);
        assert_eq!(
            state.search,
            SearchState::Found(vec![entry(5, "alicia", 870.0)])
        );
    }

    #[test]
    fn resolution_after_clearing_the_query_is_dropped() {
        let mut state = ScreenState::default();
        let (generation, _) = scheduled(state.apply(ScreenEvent::QueryChanged("alice".to_string())));
        state.apply(ScreenEvent::QueryChanged(String::new()));

        state.apply(ScreenEvent::SearchResolved {
            generation,
            results: vec![entry(1, "alice", 1000.0)],
        });
        assert_eq!(state.search, SearchState::Idle);
    }

    #[test]
    fn every_keystroke_reenters_pending_with_a_new_generation() {
        let mut state = ScreenState::default();
        let (first, _) = scheduled(state.apply(ScreenEvent::QueryChanged("a".to_string())));
        let (second, _) = scheduled(state.apply(ScreenEvent::QueryChanged("al".to_string())));
        let (third, _) = scheduled(state.apply(ScreenEvent::QueryChanged("ali".to_string())));
        assert!(first < second && second < third);
        assert_eq!(state.search, SearchState::Pending);
    }
}

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use common::Config;
use leaderboard::{LeaderboardApi, LeaderboardEntry};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use viewer::{LeaderboardScreen, ScreenState, SearchState};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv::dotenv();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Leaderboard viewer starting up");

    let config = Config::from_env()?;
    let debounce = Duration::from_millis(config.search.debounce_ms);
    let api = Arc::new(LeaderboardApi::new(&config)?);
    let mut screen = LeaderboardScreen::new(api, debounce);

    screen.load_leaderboard().await;
    render_leaderboard(&screen.snapshot().await.leaderboard);

    println!();
    println!("Search username (e.g. user_9187), empty line to clear, Ctrl-D to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        screen.on_query_change(&line).await;
        // Let the debounce window and the lookup settle before rendering.
        tokio::time::sleep(debounce + Duration::from_millis(300)).await;
        render_search(&screen.snapshot().await);
    }

    Ok(())
}

fn render_leaderboard(entries: &[LeaderboardEntry]) {
    println!("Global Leaderboard");
    println!("{:<6} {:<20} {:>8}", "Rank", "Username", "Rating");
    for entry in entries {
        println!("#{:<5} {:<20} {:>8}", entry.rank, entry.username, entry.rating);
    }
    if entries.is_empty() {
        println!("(no entries)");
    }
}

fn render_search(snapshot: &ScreenState) {
    match &snapshot.search {
        SearchState::Idle => {}
        SearchState::Pending => println!("Searching..."),
        SearchState::Found(results) => {
            for hit in results {
                println!(
                    "Global Rank: {} | Username: {} | Rating: {}",
                    hit.rank, hit.username, hit.rating
                );
            }
        }
        SearchState::Empty => println!("Data not exists"),
    }
}

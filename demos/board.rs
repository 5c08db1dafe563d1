use std::env;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use live_score::{Board, Config};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/data/sports.json".to_string());

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };

    let body = match std::fs::read_to_string(&path) {
        Ok(body) => body,
        Err(e) => {
            error!(error = %e, path = %path, "failed to read match data");
            std::process::exit(1);
        }
    };

    let board = match Board::from_json(&body) {
        Ok(board) => board
            .with_zone(config.time_zone)
            .with_category(config.initial_category),
        Err(e) => {
            error!(error = %e, "failed to load board");
            std::process::exit(1);
        }
    };
    info!(zone = %board.zone(), active = %board.active(), "rendering board");

    let tabs = board
        .tabs()
        .iter()
        .map(|tab| {
            if tab.active {
                format!("[{tab}]")
            } else {
                tab.to_string()
            }
        })
        .collect::<Vec<_>>();
    println!("{}\n", tabs.join("  "));

    for card in board.cards() {
        println!("{card}\n");
    }
}

//! Techsignal - composite technical trading signals from precomputed indicators

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod types;

use config::Config;
use services::Screener;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub screener: Arc<Screener>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            screener: Arc::new(Screener::new()),
        }
    }
}

// Re-export commonly used types
pub use services::{aggregate, detect_signals, evaluate, SignalAggregator, SignalDetector};
pub use types::*;

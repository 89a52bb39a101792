//! Acervo Library Inventory Server
//!
//! Tracks users, libraries, book titles and their physical copies in memory,
//! keeping each title's copy count in step with its declared quantity, and
//! serves them over a JSON API.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the state over a ledger
    pub fn new(config: AppConfig, ledger: repository::Ledger) -> Self {
        let repository = repository::Repository::new(ledger);
        Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(repository)),
        }
    }
}

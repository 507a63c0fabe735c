pub mod app;
pub mod booster;
pub mod classifier;
pub mod config;
pub mod donations;
pub mod errors;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use classifier::{LexiconClassifier, SentimentClassifier};
pub use config::Config;
pub use ledger::Ledger;
pub use state::AppState;
pub use storage::{load_ledger, persist_ledger};

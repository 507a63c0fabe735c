use crate::classifier::SentimentClassifier;
use crate::config::Config;
use crate::ledger::Ledger;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub classifier: Arc<dyn SentimentClassifier>,
    pub ledger: Arc<Mutex<Ledger>>,
    /// Serializes read-modify-write cycles on the donation log.
    pub donations: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(config: Config, classifier: Arc<dyn SentimentClassifier>, ledger: Ledger) -> Self {
        Self {
            config: Arc::new(config),
            classifier,
            ledger: Arc::new(Mutex::new(ledger)),
            donations: Arc::new(Mutex::new(())),
        }
    }
}

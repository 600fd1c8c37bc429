use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::AppConfig;
use crate::seed::{SampleData, SeedSource};
use crate::session::Session;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    /// Session seeded with the built-in sample data.
    pub fn init(config: AppConfig) -> Self {
        Self::from_parts(Arc::new(config), Arc::new(SampleData))
    }

    pub fn from_parts(config: Arc<AppConfig>, seed: Arc<dyn SeedSource>) -> Self {
        Self {
            config,
            session: Arc::new(Mutex::new(Session::new(seed))),
        }
    }

    pub fn fake() -> Self {
        Self::init(AppConfig::default())
    }
}

use std::sync::Arc;

use crate::advisory::{GeminiClient, GenerativeModel, ModelDisabled};
use crate::config::AppConfig;
use crate::store::{MemStore, Store};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub model: Arc<dyn GenerativeModel>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let model: Arc<dyn GenerativeModel> = match &config.gemini_api_key {
            Some(key) => Arc::new(GeminiClient::new(key.clone())),
            None => {
                tracing::warn!("GEMINI_API_KEY not set; advisory endpoints will fail");
                Arc::new(ModelDisabled)
            }
        };

        Ok(Self {
            store: Arc::new(MemStore::new()),
            model,
            config,
        })
    }

    pub fn from_parts(
        store: Arc<dyn Store>,
        model: Arc<dyn GenerativeModel>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            store,
            model,
            config,
        }
    }
}

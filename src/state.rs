// PromptForge Application State
// Copyright (c) 2026 Xing_The_Creator | PromptForge
//
// Built once at startup and shared with every handler through axum `State`.

use std::sync::Arc;

use crate::agent::enhancer::PromptEnhancer;
use crate::agent::health::ServiceHealth;
use crate::agent::provider::{self, SharedGenerator};
use crate::config::AppConfig;
use crate::studio::store::ProjectStore;

pub struct AppState {
    pub config: AppConfig,
    pub enhancer: PromptEnhancer,
    pub store: ProjectStore,
    pub health: ServiceHealth,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    /// Wire up the configured provider and open the on-disk project store.
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let generator = provider::from_config(&config)?;
        let store = ProjectStore::open(config.store_path())?;
        Ok(Self::assemble(config, generator, store))
    }

    /// Assemble state from parts; tests inject stub generators and memory stores.
    pub fn assemble(
        config: AppConfig,
        generator: Option<SharedGenerator>,
        store: ProjectStore,
    ) -> Self {
        let enhancer = PromptEnhancer::new(generator, config.fallback);
        let health = ServiceHealth::new(config.ffmpeg_bin.clone());
        Self {
            config,
            enhancer,
            store,
            health,
        }
    }

    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}

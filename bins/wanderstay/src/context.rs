//! Shared state for a single command invocation

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use wanderstay_api_client::{ClientConfig, TravelClient};
use wanderstay_booking::{EngineConfig, InMemoryStore, ReservationEngine, Session, TravelStore};
use wanderstay_cli::output::OutputFormat;
use wanderstay_cli::progress;
use wanderstay_core::config::Config;
use wanderstay_core::retry::RetryConfig;
use wanderstay_search::FuzzyMatcher;

/// Local db.json backing `--offline`
struct OfflineStore {
    store: Arc<InMemoryStore>,
    path: PathBuf,
}

pub struct AppContext {
    pub format: OutputFormat,
    pub engine: ReservationEngine,
    pub matcher: FuzzyMatcher,
    pub retry: RetryConfig,
    store: Arc<dyn TravelStore>,
    offline: Option<OfflineStore>,
    user: Option<String>,
}

impl AppContext {
    pub fn new(
        config: Config,
        offline: Option<&Path>,
        format: OutputFormat,
        user: Option<String>,
    ) -> Result<Self> {
        let schema = &config.schema;

        let store: Arc<dyn TravelStore>;
        let retry;
        let offline = match offline {
            Some(path) => {
                let local = Arc::new(InMemoryStore::load(path)?);
                store = local.clone();
                retry = RetryConfig::no_retry();
                Some(OfflineStore {
                    store: local,
                    path: path.to_path_buf(),
                })
            }
            None => {
                let client_config = ClientConfig::from_settings(&schema.api);
                retry = client_config.retry.clone();
                let client = TravelClient::with_config(client_config)
                    .context("Failed to create API client")?;
                tracing::debug!(base_url = client.base_url(), "Using backend");
                store = Arc::new(client);
                None
            }
        };

        Ok(Self {
            format,
            engine: ReservationEngine::new(store.clone(), EngineConfig::from(&schema.booking)),
            matcher: FuzzyMatcher::new(schema.search.max_edit_distance),
            retry,
            store,
            offline,
            user,
        })
    }

    pub fn store(&self) -> &dyn TravelStore {
        self.store.as_ref()
    }

    /// Log in as the `--user` email
    pub async fn session(&self) -> Result<Session> {
        let email = self.user.as_deref().ok_or_else(|| {
            wanderstay_core::Error::validation("No user given")
                .with_suggestion("Pass --user <email> or set WANDERSTAY_USER")
        })?;
        let session = Session::login_with_email(self.store(), email)
            .await
            .with_context(|| format!("Could not log in as {email}"))?;
        Ok(session)
    }

    /// Spinner shown while a backend call runs; hidden for JSON and offline
    pub fn spinner(&self, message: &str) -> indicatif::ProgressBar {
        progress::spinner(message, self.format.is_text() && self.offline.is_none())
    }

    /// Write offline changes back to db.json
    pub fn persist(&self) -> Result<()> {
        if let Some(offline) = &self.offline {
            offline.store.save(&offline.path)?;
        }
        Ok(())
    }
}

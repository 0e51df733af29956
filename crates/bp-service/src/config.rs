use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ServiceError, ServiceResult};
use crate::memory::MockDataService;
use crate::remote::RemoteDataService;
use crate::traits::DataService;

/// Which backend the application talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// In-memory mock with fixture data.
    Mock,
    /// HTTP adapter against the real blueprints API.
    Remote,
}

/// Data service configuration, decided once at startup.
///
/// The default is the mock backend, mirroring development setups where no
/// API server is running. Call sites receive a `dyn DataService` from
/// [`ServiceConfig::build`] and never branch on the backend again.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Backend selection.
    pub backend: Backend,
    /// Base URL of the remote API (remote backend only).
    pub base_url: String,
    /// Optional bearer token attached to remote requests.
    pub token: Option<String>,
    /// Per-request timeout (remote backend only). Kept last so the TOML
    /// serializer emits it after the plain values.
    pub timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Mock,
            base_url: "http://localhost:8080".into(),
            token: None,
            timeout: Duration::from_secs(8),
        }
    }
}

impl ServiceConfig {
    /// Read configuration from the environment, falling back to defaults.
    ///
    /// - `BLUEPRINTS_USE_MOCK` — `false`/`0`/`no` selects the remote backend;
    ///   unset or anything else keeps the mock (mock is the default).
    /// - `BLUEPRINTS_API_URL` — remote base URL.
    /// - `BLUEPRINTS_API_TOKEN` — bearer token.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var("BLUEPRINTS_USE_MOCK") {
            if matches!(value.to_ascii_lowercase().as_str(), "false" | "0" | "no") {
                config.backend = Backend::Remote;
            }
        }
        if let Ok(url) = std::env::var("BLUEPRINTS_API_URL") {
            if !url.is_empty() {
                config.base_url = url;
            }
        }
        if let Ok(token) = std::env::var("BLUEPRINTS_API_TOKEN") {
            if !token.is_empty() {
                config.token = Some(token);
            }
        }
        config
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> ServiceResult<Self> {
        toml::from_str(text).map_err(|e| ServiceError::Config(e.to_string()))
    }

    /// Build the configured data service.
    pub fn build(&self) -> ServiceResult<Arc<dyn DataService>> {
        match self.backend {
            Backend::Mock => {
                info!("using in-memory mock data service");
                Ok(Arc::new(MockDataService::seeded()))
            }
            Backend::Remote => {
                info!(base_url = %self.base_url, "using remote data service");
                Ok(Arc::new(RemoteDataService::new(
                    &self.base_url,
                    self.timeout,
                    self.token.clone(),
                )?))
            }
        }
    }
}

//! Live status entry point.
//!
//! Chooses once per call between the offline fallback advisor and the
//! remote model, based only on whether a usable credential is configured.

use std::sync::Arc;

use chrono::{Local, Timelike};
use tracing::debug;

use super::client::{RemoteAdvisoryClient, RemoteCallConfig};
use super::error::AdvisoryError;
use super::fallback;
use super::request::AdvisoryRequest;
use super::settings::AdvisorySettings;
use super::transport::Transport;

/// Which strategy serves a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryMode {
    /// No usable credential: canned, time-of-day aware status.
    Fallback,
    /// Credential configured: ask the chat model.
    Remote,
}

/// Produces live status advisories.
///
/// Holds no per-request state; concurrent calls are independent and are
/// neither deduplicated nor serialized.
#[derive(Clone)]
pub struct LiveStatusAdvisor {
    settings: Arc<AdvisorySettings>,
    client: RemoteAdvisoryClient,
}

impl LiveStatusAdvisor {
    pub fn new(settings: AdvisorySettings, transport: Arc<dyn Transport>) -> Self {
        Self {
            settings: Arc::new(settings),
            client: RemoteAdvisoryClient::new(transport),
        }
    }

    /// The strategy calls will use with the current settings.
    pub fn mode(&self) -> AdvisoryMode {
        if self.settings.usable_api_key().is_some() {
            AdvisoryMode::Remote
        } else {
            AdvisoryMode::Fallback
        }
    }

    /// Get a live status for `request`.
    ///
    /// Without a usable credential this never fails and never touches the
    /// network. With one, remote failures are returned as they are; there is
    /// no silent downgrade to the fallback advisor.
    pub async fn get_live_status(
        &self,
        request: &AdvisoryRequest,
    ) -> Result<String, AdvisoryError> {
        let Some(api_key) = self.settings.usable_api_key() else {
            return Ok(fallback_status(request));
        };

        let config = RemoteCallConfig::from_settings(&self.settings, api_key);
        let status = self.client.call(request, &config).await?;
        Ok(status)
    }
}

/// Offline advisory for the current local hour.
fn fallback_status(request: &AdvisoryRequest) -> String {
    let hour = Local::now().hour();
    debug!(hour, coach = %request.coach_class, "no model credential, using fallback advisor");
    fallback::advise(request, hour, &mut rand::thread_rng())
}

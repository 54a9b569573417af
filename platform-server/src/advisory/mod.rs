//! Live status advisories.
//!
//! Given a line, a destination station and a coach class, produce a short
//! commuter-facing status message. When a chat-completion credential is
//! configured the message comes from a remote model call, bounded to 12
//! seconds and with failures classified into [`FailureCategory`]. Otherwise
//! an offline, time-of-day aware advisor answers.

mod advisor;
mod client;
mod error;
mod fallback;
mod request;
mod settings;
mod transport;

pub use advisor::{AdvisoryMode, LiveStatusAdvisor};
pub use client::{EMPTY_COMPLETION_PLACEHOLDER, RemoteAdvisoryClient, RemoteCallConfig};
pub use error::{AdvisoryError, FailureCategory, RemoteAdvisoryError, TransportError};
pub use fallback::{OFF_PEAK_MESSAGES, PEAK_MESSAGES, advise, is_peak_hour, messages_for_hour};
pub use request::{AdvisoryRequest, Prompt, SYSTEM_PROMPT};
pub use settings::{
    AdvisorySettings, DEFAULT_ENDPOINT, DEFAULT_MODEL, PLACEHOLDER_API_KEY, PRODUCT_TITLE,
    REMOTE_TIMEOUT,
};
pub use transport::{ReqwestTransport, Transport, TransportResponse};

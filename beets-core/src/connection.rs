//! Connection badge in the title bar

use tracing::error;

use crate::error::ApiError;
use crate::models::ConnectionMode;

/// What the badge shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Checking,
    Local,
    Remote {
        host: Option<String>,
    },
    Unreachable,
}

/// Badge colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Neutral,
    Success,
    Info,
    Danger,
}

impl ConnectionStatus {
    pub fn from_result(result: Result<ConnectionMode, ApiError>) -> Self {
        match result {
            Ok(ConnectionMode::Local) => ConnectionStatus::Local,
            Ok(ConnectionMode::Remote { host }) => ConnectionStatus::Remote { host },
            Err(e) => {
                error!("Error checking connection status: {}", e);
                ConnectionStatus::Unreachable
            }
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ConnectionStatus::Checking => "Checking...",
            ConnectionStatus::Local => "Local",
            ConnectionStatus::Remote { host: Some(host) } => host,
            ConnectionStatus::Remote { host: None } => "Remote",
            ConnectionStatus::Unreachable => "Error",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            ConnectionStatus::Checking => BadgeTone::Neutral,
            ConnectionStatus::Local => BadgeTone::Success,
            ConnectionStatus::Remote { .. } => BadgeTone::Info,
            ConnectionStatus::Unreachable => BadgeTone::Danger,
        }
    }

    /// Whether the badge links to the settings page (everything but the
    /// pending state does)
    pub fn links_to_settings(&self) -> bool {
        !matches!(self, ConnectionStatus::Checking)
    }
}

//! Deployment mode of the target generative-AI API

use serde::{Deserialize, Serialize};

/// Which deployment of the target API a schema is being translated for.
///
/// The two deployments accept different format modifiers and only the
/// cloud-hosted one accepts `default` values. The mode is resolved once per
/// client (see [`crate::config::ClientConfig`]) and passed by value into
/// every translation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentMode {
    /// Direct public API, authenticated with an API key.
    #[default]
    DirectApi,
    /// Cloud-hosted enterprise API, addressed by project and location.
    CloudHosted,
}

impl DeploymentMode {
    /// Map the boolean "use cloud-hosted API" flag onto a mode.
    pub fn from_cloud_hosted(cloud_hosted: bool) -> Self {
        if cloud_hosted {
            Self::CloudHosted
        } else {
            Self::DirectApi
        }
    }

    pub fn is_cloud_hosted(self) -> bool {
        matches!(self, Self::CloudHosted)
    }

    /// Whether `default` values may appear in an emitted schema.
    pub fn supports_default(self) -> bool {
        self.is_cloud_hosted()
    }
}

impl From<bool> for DeploymentMode {
    fn from(cloud_hosted: bool) -> Self {
        Self::from_cloud_hosted(cloud_hosted)
    }
}

impl std::fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeploymentMode::DirectApi => write!(f, "direct API"),
            DeploymentMode::CloudHosted => write!(f, "cloud-hosted API"),
        }
    }
}

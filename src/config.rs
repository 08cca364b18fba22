use crate::core_types::DeploymentMode;
use crate::error::{SchemaError, SchemaResult};
use crate::logging::{log_debug, log_info};
use serde::{Deserialize, Serialize};

/// Selects the cloud-hosted API when set to `true` or `1`.
pub const ENV_USE_CLOUD_HOSTED: &str = "GOOGLE_GENAI_USE_VERTEXAI";
pub const ENV_API_KEY: &str = "GOOGLE_API_KEY";
pub const ENV_PROJECT: &str = "GOOGLE_CLOUD_PROJECT";
pub const ENV_LOCATION: &str = "GOOGLE_CLOUD_LOCATION";

/// Client options as supplied by the caller.
///
/// Every field is optional; [`resolve`](Self::resolve) fills gaps from the
/// process environment, with explicit options always taking precedence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// `Some(true)` targets the cloud-hosted API, `Some(false)` the direct API.
    pub vertexai: Option<bool>,
    pub api_key: Option<String>,
    pub project: Option<String>,
    pub location: Option<String>,
}

/// Configuration after explicit options and environment have been merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub mode: DeploymentMode,
    pub api_key: Option<String>,
    pub project: Option<String>,
    pub location: Option<String>,
}

impl ClientConfig {
    pub fn cloud_hosted() -> Self {
        Self {
            vertexai: Some(true),
            ..Default::default()
        }
    }

    pub fn direct_api(api_key: impl Into<String>) -> Self {
        Self {
            vertexai: Some(false),
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Resolve configuration purely from the environment.
    ///
    /// # Errors
    ///
    /// See [`resolve`](Self::resolve).
    pub fn from_env() -> SchemaResult<ResolvedConfig> {
        Self::default().resolve()
    }

    /// Merge explicit options with the environment.
    ///
    /// Under the cloud-hosted API an explicit API key wins over everything
    /// and clears project/location; otherwise project/location (explicit,
    /// then environment) win over an API key from the environment. Under the
    /// direct API project/location are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::ConfigurationError`] if both an API key and a
    /// project or location are passed explicitly.
    pub fn resolve(&self) -> SchemaResult<ResolvedConfig> {
        let explicit_project_or_location = self.project.is_some() || self.location.is_some();
        if self.api_key.is_some() && explicit_project_or_location {
            return Err(SchemaError::configuration_error(
                "Project/location and API key are mutually exclusive in the client initializer",
            ));
        }

        let mode = match self.vertexai {
            Some(cloud_hosted) => DeploymentMode::from(cloud_hosted),
            None => Self::mode_from_env(),
        };

        let resolved = match mode {
            DeploymentMode::CloudHosted => self.resolve_cloud_hosted(explicit_project_or_location),
            DeploymentMode::DirectApi => ResolvedConfig {
                mode,
                api_key: self.api_key.clone().or_else(|| env_var(ENV_API_KEY)),
                project: None,
                location: None,
            },
        };

        log_info!(
            mode = %resolved.mode,
            has_api_key = resolved.api_key.is_some(),
            has_project = resolved.project.is_some(),
            has_location = resolved.location.is_some(),
            "Client configuration resolved"
        );

        Ok(resolved)
    }

    fn resolve_cloud_hosted(&self, explicit_project_or_location: bool) -> ResolvedConfig {
        let mode = DeploymentMode::CloudHosted;

        if let Some(api_key) = &self.api_key {
            log_debug!("Explicit API key takes precedence over project/location");
            return ResolvedConfig {
                mode,
                api_key: Some(api_key.clone()),
                project: None,
                location: None,
            };
        }

        let project = self.project.clone().or_else(|| env_var(ENV_PROJECT));
        let location = self.location.clone().or_else(|| env_var(ENV_LOCATION));

        if explicit_project_or_location || project.is_some() || location.is_some() {
            return ResolvedConfig {
                mode,
                api_key: None,
                project,
                location,
            };
        }

        ResolvedConfig {
            mode,
            api_key: env_var(ENV_API_KEY),
            project: None,
            location: None,
        }
    }

    fn mode_from_env() -> DeploymentMode {
        let cloud_hosted = env_var(ENV_USE_CLOUD_HOSTED)
            .map(|value| {
                let value = value.to_ascii_lowercase();
                value == "true" || value == "1"
            })
            .unwrap_or(false);
        DeploymentMode::from(cloud_hosted)
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

//! Configuration types for libdns providers
//!
//! Provider settings are supplied once, when the provider is constructed.

use serde::{Deserialize, Serialize};

/// DNS provider configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProviderConfig {
    /// Linode DNS Manager
    Linode {
        /// Linode personal access token with Domains read/write scope
        api_token: String,
        /// Alternate API base URL (defaults to the public Linode API)
        #[serde(default)]
        api_url: Option<String>,
        /// API version path segment (defaults to "v4")
        #[serde(default)]
        api_version: Option<String>,
    },

    /// Custom provider
    Custom {
        /// Factory name to use
        factory: String,
        /// Custom configuration data
        config: serde_json::Value,
    },
}

// Custom Debug implementation that hides the API token
impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderConfig::Linode {
                api_url,
                api_version,
                ..
            } => f
                .debug_struct("Linode")
                .field("api_token", &"<REDACTED>")
                .field("api_url", api_url)
                .field("api_version", api_version)
                .finish(),
            ProviderConfig::Custom { factory, config } => f
                .debug_struct("Custom")
                .field("factory", factory)
                .field("config", config)
                .finish(),
        }
    }
}

impl ProviderConfig {
    /// Create a Linode configuration using the default API endpoint
    pub fn linode(api_token: impl Into<String>) -> Self {
        ProviderConfig::Linode {
            api_token: api_token.into(),
            api_url: None,
            api_version: None,
        }
    }

    /// Validate the provider configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        match self {
            ProviderConfig::Linode {
                api_token,
                api_url,
                api_version,
            } => {
                if api_token.is_empty() {
                    return Err(crate::Error::config("Linode API token cannot be empty"));
                }
                if api_url.as_ref().is_some_and(|u| u.trim().is_empty()) {
                    return Err(crate::Error::config(
                        "Linode API URL cannot be empty when set",
                    ));
                }
                if api_version
                    .as_ref()
                    .is_some_and(|v| v.trim().is_empty() || v.contains('/'))
                {
                    return Err(crate::Error::config(
                        "Linode API version must be a single path segment (e.g. \"v4\")",
                    ));
                }
                Ok(())
            }
            ProviderConfig::Custom { factory, config } => {
                if factory.is_empty() {
                    return Err(crate::Error::config(
                        "Custom provider factory cannot be empty",
                    ));
                }
                if config.is_null() {
                    return Err(crate::Error::config(
                        "Custom provider config cannot be null",
                    ));
                }
                Ok(())
            }
        }
    }

    /// Get the provider type name
    pub fn type_name(&self) -> &str {
        match self {
            ProviderConfig::Linode { .. } => "linode",
            ProviderConfig::Custom { factory, .. } => factory,
        }
    }
}

//! Process-wide waste API configuration.

use std::env;

static DEFAULT_API_BASE_URL: &str = "https://wasteapi.ximmio.com/api";
/// Tenant identifier of Twente Milieu at the waste API.
static DEFAULT_COMPANY_CODE: &str = "8d97bb56-5afd-4cbc-a651-b4f7314264b4";

static BASE_URL_VAR: &str = "TWC_API_BASE_URL";
static COMPANY_CODE_VAR: &str = "TWC_COMPANY_CODE";

/// Connection settings for the waste API, injected into
/// [`WasteApiClient`](crate::waste_client::WasteApiClient) at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the API, without a trailing slash.
    pub base_url: String,
    /// Tenant identifier sent with every call.
    pub company_code: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_BASE_URL),
            company_code: String::from(DEFAULT_COMPANY_CODE),
        }
    }
}

impl ApiConfig {
    /// Build the configuration from the environment, falling back to the
    /// compiled-in Twente Milieu defaults.
    ///
    /// Recognized variables: `TWC_API_BASE_URL` and `TWC_COMPANY_CODE`.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var(BASE_URL_VAR)
                .unwrap_or_else(|_| String::from(DEFAULT_API_BASE_URL)),
            company_code: env::var(COMPANY_CODE_VAR)
                .unwrap_or_else(|_| String::from(DEFAULT_COMPANY_CODE)),
        }
    }
}

use fleet_api::ApiClient;
use fleet_config::FleetConfig;

/// Shared application resources initialized once at startup.
#[derive(Debug)]
pub struct AppContext {
    pub config: FleetConfig,
    pub api: ApiClient,
}

impl AppContext {
    /// Build the API client from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when `api.base_url` is not configured; the message
    /// points at the config file and env var that can set it.
    pub fn init(config: FleetConfig) -> anyhow::Result<Self> {
        let api_config = config.require_api().map_err(|error| {
            anyhow::anyhow!(
                "{error}\nset `base_url` under [api] in ~/.config/fleetops/config.toml \
                 or export FLEETOPS_API__BASE_URL"
            )
        })?;

        let api = ApiClient::new(api_config.base(), api_config.timeout_secs);

        Ok(Self { config, api })
    }
}

#[cfg(test)]
mod tests {
    use super::AppContext;
    use fleet_config::{ApiConfig, FleetConfig};

    #[test]
    fn init_fails_without_base_url() {
        let err = AppContext::init(FleetConfig::default()).unwrap_err();
        assert!(err.to_string().contains("FLEETOPS_API__BASE_URL"));
    }

    #[test]
    fn init_builds_client_when_configured() {
        let config = FleetConfig {
            api: ApiConfig {
                base_url: "https://api.example.com/".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let ctx = AppContext::init(config).expect("context should initialize");
        assert_eq!(ctx.config.api.base(), "https://api.example.com");
    }
}

//! Integration tests for environment variable configuration.
//!
//! Verifies the `FLEETOPS_` prefix and `__` nesting separator behave the way
//! the CLI documents them.

use figment::{
    Figment, Jail,
    providers::{Env, Serialized},
};
use fleet_config::FleetConfig;

fn env_only() -> Figment {
    Figment::from(Serialized::defaults(FleetConfig::default()))
        .merge(Env::prefixed("FLEETOPS_").split("__"))
}

#[test]
fn env_var_overrides_default() {
    Jail::expect_with(|jail| {
        jail.set_env("FLEETOPS_API__BASE_URL", "https://env.example.com");

        let config: FleetConfig = env_only().extract()?;

        assert_eq!(config.api.base_url, "https://env.example.com");
        assert!(config.api.is_configured());
        Ok(())
    });
}

#[test]
fn nested_general_section_maps_from_env() {
    Jail::expect_with(|jail| {
        jail.set_env("FLEETOPS_GENERAL__PAGE_SIZE", "42");
        jail.set_env("FLEETOPS_GENERAL__ASSUME_YES", "true");

        let config: FleetConfig = env_only().extract()?;

        assert_eq!(config.general.page_size, 42);
        assert!(config.general.assume_yes);
        Ok(())
    });
}

/// Documents the figment gotcha: typo'd env var keys are silently ignored.
/// The value stays at its default because figment doesn't know the field.
#[test]
fn typo_env_var_silently_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("FLEETOPS_API__BASE_URLL", "https://typo.example.com");

        let config: FleetConfig = env_only().extract()?;

        assert!(
            config.api.base_url.is_empty(),
            "typo'd env var should be silently ignored by figment"
        );
        Ok(())
    });
}

#[test]
fn full_env_provider_chain() {
    Jail::expect_with(|jail| {
        jail.set_env("FLEETOPS_API__BASE_URL", "https://jail.example.com/");
        jail.set_env("FLEETOPS_API__TIMEOUT_SECS", "20");
        jail.set_env("FLEETOPS_GENERAL__PAGE_SIZE", "15");

        let config: FleetConfig = env_only().extract()?;

        assert_eq!(config.api.base(), "https://jail.example.com");
        assert_eq!(config.api.timeout_secs, 20);
        assert_eq!(config.general.page_size, 15);
        Ok(())
    });
}

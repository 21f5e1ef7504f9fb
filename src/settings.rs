// netparams_registry/src/settings.rs
// Runtime settings: an optional settings file layered under NETPARAMS_* environment variables.

use crate::chainparams::{Network, NetworkSpec};
use crate::error::RegistryError;
use crate::registry::NetworkRegistry;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::sync::Arc;

pub const DEFAULT_SETTINGS_FILE: &str = "netparams";
const ENV_PREFIX: &str = "NETPARAMS";

fn default_network() -> String {
    "livenet".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_network")]
    pub default_network: String,
    #[serde(default)]
    pub regtest: bool,
    #[serde(default)]
    pub resolve_seeds: bool,
    // Extra networks registered after the built-in set.
    #[serde(default)]
    pub networks: Vec<NetworkSpec>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            default_network: default_network(),
            regtest: false,
            resolve_seeds: false,
            networks: Vec::new(),
        }
    }
}

impl Settings {
    /// Loads `path` (or `netparams.{toml,json,yaml}` in the working directory when
    /// no path is given, in which case the file is optional), then applies the environment.
    pub fn load(path: Option<&str>) -> Result<Self, RegistryError> {
        let file = path.unwrap_or(DEFAULT_SETTINGS_FILE);
        let config = Config::builder()
            .add_source(File::with_name(file).required(path.is_some()))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(config.try_deserialize()?)
    }

    pub fn from_toml_str(toml: &str) -> Result<Self, RegistryError> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    pub fn build_registry(&self) -> Result<NetworkRegistry, RegistryError> {
        let mut registry = NetworkRegistry::with_builtin();
        for spec in &self.networks {
            let added = registry.add(spec.clone())?;
            log::info!("Registered network {} from settings", added.name);
        }
        if self.regtest {
            registry.enable_regtest();
        }
        Ok(registry)
    }

    pub fn default_network_in(&self, registry: &NetworkRegistry) -> Result<Arc<Network>, RegistryError> {
        registry.require(&self.default_network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
default_network = "ltc"
regtest = true

[[networks]]
name = "examplecoin"
alias = "exc"
pubkeyhash = 0x21
privatekey = 0xa1
scripthash = 0x22
xpubkey = 0x0488b21e
xprivkey = 0x0488ade4
network_magic = "deadbeef"
port = 7777
dns_seeds = ["seed.example.org"]
pos = true
"#;

    #[test]
    fn empty_settings_use_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings.default_network, "livenet");
        assert!(!settings.regtest);
        assert!(settings.networks.is_empty());
        let registry = settings.build_registry().unwrap();
        assert_eq!(settings.default_network_in(&registry).unwrap().name, "livenet");
    }

    #[test]
    fn extra_networks_and_regtest_from_file() {
        let settings = Settings::from_toml_str(SAMPLE).unwrap();
        let registry = settings.build_registry().unwrap();
        assert!(registry.is_regtest());

        let exc = registry.get("exc").unwrap();
        assert_eq!(exc.name, "examplecoin");
        assert_eq!(exc.network_magic, Some([0xde, 0xad, 0xbe, 0xef]));
        assert_eq!(exc.port, Some(7777));
        assert!(exc.pos);
        assert!(std::sync::Arc::ptr_eq(&registry.get([0xde, 0xad, 0xbe, 0xef]).unwrap(), &exc));
        assert_eq!(settings.default_network_in(&registry).unwrap().name, "litecoin");
    }

    #[test]
    fn conflicting_extra_network_is_an_error() {
        let settings = Settings::from_toml_str(
            r#"
[[networks]]
name = "btc-copy"
network_magic = "f9beb4d9"
"#,
        )
        .unwrap();
        assert!(matches!(settings.build_registry(), Err(RegistryError::DuplicateMagic { .. })));
    }

    #[test]
    fn unknown_default_network_is_reported() {
        let settings = Settings::from_toml_str("default_network = \"nowhere\"").unwrap();
        let registry = settings.build_registry().unwrap();
        assert!(matches!(
            settings.default_network_in(&registry),
            Err(RegistryError::UnknownNetwork(_))
        ));
    }

    #[test]
    fn environment_overrides_the_settings_file() {
        let path = std::env::temp_dir().join(format!("netparams-settings-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "default_network = \"dogecoin\"\nregtest = false\nresolve_seeds = true\n",
        )
        .unwrap();
        std::env::set_var("NETPARAMS_REGTEST", "true");
        std::env::set_var("NETPARAMS_DEFAULT_NETWORK", "ltc");

        let loaded = Settings::load(path.to_str());

        std::env::remove_var("NETPARAMS_REGTEST");
        std::env::remove_var("NETPARAMS_DEFAULT_NETWORK");
        std::fs::remove_file(&path).unwrap();

        let settings = loaded.unwrap();
        assert_eq!(settings.default_network, "ltc");
        assert!(settings.regtest);
        assert!(settings.resolve_seeds);
        let registry = settings.build_registry().unwrap();
        assert!(registry.is_regtest());
        assert_eq!(settings.default_network_in(&registry).unwrap().name, "litecoin");
    }

    #[test]
    fn missing_explicit_settings_file_is_an_error() {
        let result = Settings::load(Some("/nonexistent/netparams-settings.toml"));
        assert!(matches!(result, Err(RegistryError::Config(_))));
    }
}

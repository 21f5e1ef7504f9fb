// netparams_registry/src/registry.rs
// The network registry: ordered records plus typed lookup indexes.

use crate::builtin::builtin_networks;
use crate::chainparams::{Network, NetworkMode, NetworkSpec};
use crate::error::RegistryError;
use log::{debug, error, info};
use std::collections::HashMap;
use std::ops::Deref;
use std::sync::Arc;

/// Record fields a lookup can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkField {
    Name,
    Alias,
    Pubkeyhash,
    Privatekey,
    Scripthash,
    Xpubkey,
    Xprivkey,
    Port,
    NetworkMagic,
    Coin,
    CoinName,
    ShortName,
    Url,
    Algorithm,
    Prefix,
}

// Order used when a numeric key is looked up without naming a field.
const NUMERIC_FIELDS: [NetworkField; 6] = [
    NetworkField::Pubkeyhash,
    NetworkField::Privatekey,
    NetworkField::Scripthash,
    NetworkField::Xpubkey,
    NetworkField::Xprivkey,
    NetworkField::Port,
];

// Order used when a string key misses the name/alias index.
const STRING_FIELDS: [NetworkField; 6] = [
    NetworkField::Coin,
    NetworkField::ShortName,
    NetworkField::CoinName,
    NetworkField::Url,
    NetworkField::Algorithm,
    NetworkField::Prefix,
];

/// Anything `get` accepts. Numeric variants compare by value, so `0x6fu8` and
/// `0x6fu32` find the same record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkKey {
    Network(Arc<Network>),
    Name(String),
    Byte(u8),
    Version(u32),
    Port(u16),
    Magic([u8; 4]),
    Char(char),
}

impl NetworkKey {
    fn as_number(&self) -> Option<u64> {
        match self {
            NetworkKey::Byte(b) => Some(*b as u64),
            NetworkKey::Version(v) => Some(*v as u64),
            NetworkKey::Port(p) => Some(*p as u64),
            _ => None,
        }
    }
}

impl From<&str> for NetworkKey {
    fn from(s: &str) -> Self {
        NetworkKey::Name(s.to_string())
    }
}
impl From<String> for NetworkKey {
    fn from(s: String) -> Self {
        NetworkKey::Name(s)
    }
}
impl From<char> for NetworkKey {
    fn from(c: char) -> Self {
        NetworkKey::Char(c)
    }
}
impl From<u8> for NetworkKey {
    fn from(b: u8) -> Self {
        NetworkKey::Byte(b)
    }
}
impl From<u16> for NetworkKey {
    fn from(p: u16) -> Self {
        NetworkKey::Port(p)
    }
}
impl From<u32> for NetworkKey {
    fn from(v: u32) -> Self {
        NetworkKey::Version(v)
    }
}
impl From<[u8; 4]> for NetworkKey {
    fn from(m: [u8; 4]) -> Self {
        NetworkKey::Magic(m)
    }
}
impl From<Arc<Network>> for NetworkKey {
    fn from(n: Arc<Network>) -> Self {
        NetworkKey::Network(n)
    }
}
impl From<&Arc<Network>> for NetworkKey {
    fn from(n: &Arc<Network>) -> Self {
        NetworkKey::Network(Arc::clone(n))
    }
}

/// A record as seen under the registry's current mode.
#[derive(Debug, Clone, Copy)]
pub struct NetworkView<'a> {
    network: &'a Arc<Network>,
    mode: NetworkMode,
}

impl<'a> NetworkView<'a> {
    pub fn new(network: &'a Arc<Network>, mode: NetworkMode) -> Self {
        NetworkView { network, mode }
    }

    fn regtest_active(&self) -> Option<&'a crate::chainparams::RegtestParams> {
        match self.mode {
            NetworkMode::Regtest => self.network.regtest.as_ref(),
            NetworkMode::Standard => None,
        }
    }

    pub fn port(&self) -> Option<u16> {
        match self.regtest_active() {
            Some(r) => Some(r.port),
            None => self.network.port,
        }
    }

    pub fn network_magic(&self) -> Option<[u8; 4]> {
        match self.regtest_active() {
            Some(r) => Some(r.network_magic),
            None => self.network.network_magic,
        }
    }

    pub fn dns_seeds(&self) -> &'a [String] {
        match self.regtest_active() {
            Some(r) => &r.dns_seeds,
            None => &self.network.dns_seeds,
        }
    }

    pub fn mode(&self) -> NetworkMode {
        self.mode
    }

    pub fn network(&self) -> &'a Arc<Network> {
        self.network
    }
}

impl Deref for NetworkView<'_> {
    type Target = Network;

    fn deref(&self) -> &Network {
        self.network
    }
}

#[derive(Debug, Default)]
pub struct NetworkRegistry {
    networks: Vec<Arc<Network>>,
    // Names and aliases share one namespace.
    by_name: HashMap<String, Arc<Network>>,
    by_magic: HashMap<[u8; 4], Arc<Network>>,
    by_regtest_magic: HashMap<[u8; 4], Arc<Network>>,
    mode: NetworkMode,
}

impl NetworkRegistry {
    pub fn new() -> Self {
        NetworkRegistry::default()
    }

    /// Registry preloaded with the built-in networks.
    pub fn with_builtin() -> Self {
        let mut registry = NetworkRegistry::new();
        for spec in builtin_networks() {
            let name = spec.name.clone();
            if let Err(e) = registry.add(spec) {
                error!("Built-in network {} rejected: {}", name, e);
                debug_assert!(false, "built-in network {} rejected: {}", name, e);
            }
        }
        debug!("Loaded {} built-in networks", registry.len());
        registry
    }

    pub fn add(&mut self, spec: NetworkSpec) -> Result<Arc<Network>, RegistryError> {
        let network = Network::from_spec(spec)?;

        for key in [&network.name, &network.alias] {
            if self.by_name.contains_key(key) {
                return Err(RegistryError::DuplicateName(key.clone()));
            }
        }
        let magics = network
            .network_magic
            .iter()
            .chain(network.regtest.as_ref().map(|r| &r.network_magic));
        for magic in magics {
            if let Some(existing) = self.by_magic.get(magic).or_else(|| self.by_regtest_magic.get(magic)) {
                return Err(RegistryError::DuplicateMagic {
                    magic: hex::encode(magic),
                    existing: existing.name.clone(),
                });
            }
        }

        let network = Arc::new(network);
        self.by_name.insert(network.name.clone(), Arc::clone(&network));
        self.by_name.insert(network.alias.clone(), Arc::clone(&network));
        if let Some(magic) = network.network_magic {
            self.by_magic.insert(magic, Arc::clone(&network));
        }
        if let Some(regtest) = &network.regtest {
            self.by_regtest_magic.insert(regtest.network_magic, Arc::clone(&network));
        }
        self.networks.push(Arc::clone(&network));

        debug!(
            "Added network {} (alias {}, magic {})",
            network.name,
            network.alias,
            network.magic_hex().unwrap_or_else(|| "none".to_string())
        );
        Ok(network)
    }

    /// Drops `network` from the list and every index. Returns false when it was
    /// not registered. Callers holding the Arc keep a detached record.
    pub fn remove(&mut self, network: &Arc<Network>) -> bool {
        let before = self.networks.len();
        self.networks.retain(|n| !Arc::ptr_eq(n, network));
        if self.networks.len() == before {
            return false;
        }
        self.by_name.retain(|_, n| !Arc::ptr_eq(n, network));
        self.by_magic.retain(|_, n| !Arc::ptr_eq(n, network));
        self.by_regtest_magic.retain(|_, n| !Arc::ptr_eq(n, network));
        info!("Removed network {}", network.name);
        true
    }

    /// Index lookup on any key. A registered record passes through unchanged.
    pub fn get<K: Into<NetworkKey>>(&self, key: K) -> Option<Arc<Network>> {
        match key.into() {
            NetworkKey::Network(n) => self.passthrough(&n),
            NetworkKey::Name(name) => self.by_name(&name).or_else(|| {
                let key = NetworkKey::Name(name);
                STRING_FIELDS
                    .iter()
                    .find_map(|field| self.scan(&key, std::slice::from_ref(field)))
            }),
            NetworkKey::Magic(magic) => self.by_magic(&magic),
            NetworkKey::Char(c) => self.scan(&NetworkKey::Char(c), &[NetworkField::Prefix]),
            numeric => NUMERIC_FIELDS
                .iter()
                .find_map(|field| self.scan(&numeric, std::slice::from_ref(field))),
        }
    }

    /// First record, in insertion order, whose value at any of `fields` equals `key`.
    pub fn get_by_fields<K: Into<NetworkKey>>(&self, key: K, fields: &[NetworkField]) -> Option<Arc<Network>> {
        match key.into() {
            NetworkKey::Network(n) => self.passthrough(&n),
            key => self.scan(&key, fields),
        }
    }

    pub fn get_by<K: Into<NetworkKey>>(&self, key: K, field: NetworkField) -> Option<Arc<Network>> {
        self.get_by_fields(key, &[field])
    }

    pub fn by_name(&self, name: &str) -> Option<Arc<Network>> {
        self.by_name.get(name).cloned()
    }

    /// Magic lookup under the current mode: in regtest mode a record with regtest
    /// parameters answers to its regtest magic only.
    pub fn by_magic(&self, magic: &[u8; 4]) -> Option<Arc<Network>> {
        match self.mode {
            NetworkMode::Standard => self.by_magic.get(magic).cloned(),
            NetworkMode::Regtest => self
                .by_regtest_magic
                .get(magic)
                .or_else(|| self.by_magic.get(magic).filter(|n| !n.has_regtest()))
                .cloned(),
        }
    }

    /// Same as `get` on a name, but a miss is an error.
    pub fn require(&self, name: &str) -> Result<Arc<Network>, RegistryError> {
        self.by_name(name).ok_or_else(|| RegistryError::UnknownNetwork(name.to_string()))
    }

    pub fn contains(&self, network: &Arc<Network>) -> bool {
        self.networks.iter().any(|n| Arc::ptr_eq(n, network))
    }

    pub fn networks(&self) -> &[Arc<Network>] {
        &self.networks
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    pub fn livenet(&self) -> Option<Arc<Network>> {
        self.by_name("livenet")
    }

    pub fn mainnet(&self) -> Option<Arc<Network>> {
        self.by_name("mainnet")
    }

    pub fn testnet(&self) -> Option<Arc<Network>> {
        self.by_name("testnet")
    }

    pub fn enable_regtest(&mut self) {
        if self.mode != NetworkMode::Regtest {
            info!("Regtest mode enabled");
        }
        self.mode = NetworkMode::Regtest;
    }

    pub fn disable_regtest(&mut self) {
        if self.mode != NetworkMode::Standard {
            info!("Regtest mode disabled");
        }
        self.mode = NetworkMode::Standard;
    }

    pub fn mode(&self) -> NetworkMode {
        self.mode
    }

    pub fn is_regtest(&self) -> bool {
        self.mode == NetworkMode::Regtest
    }

    pub fn view<'a>(&self, network: &'a Arc<Network>) -> NetworkView<'a> {
        NetworkView::new(network, self.mode)
    }

    fn passthrough(&self, network: &Arc<Network>) -> Option<Arc<Network>> {
        if self.contains(network) {
            Some(Arc::clone(network))
        } else {
            None
        }
    }

    fn scan(&self, key: &NetworkKey, fields: &[NetworkField]) -> Option<Arc<Network>> {
        self.networks
            .iter()
            .find(|n| fields.iter().any(|f| self.field_matches(n, *f, key)))
            .cloned()
    }

    fn field_matches(&self, network: &Arc<Network>, field: NetworkField, key: &NetworkKey) -> bool {
        let view = self.view(network);
        match (field, key) {
            (NetworkField::Name, NetworkKey::Name(s)) => network.name == *s,
            (NetworkField::Alias, NetworkKey::Name(s)) => network.alias == *s,
            (NetworkField::Coin, NetworkKey::Name(s)) => network.coin.as_deref() == Some(s.as_str()),
            (NetworkField::CoinName, NetworkKey::Name(s)) => network.coin_name.as_deref() == Some(s.as_str()),
            (NetworkField::ShortName, NetworkKey::Name(s)) => network.short_name.as_deref() == Some(s.as_str()),
            (NetworkField::Url, NetworkKey::Name(s)) => network.url.as_deref() == Some(s.as_str()),
            (NetworkField::Algorithm, NetworkKey::Name(s)) => network.algorithm.as_deref() == Some(s.as_str()),
            (NetworkField::Prefix, NetworkKey::Char(c)) => network.prefix == Some(*c),
            (NetworkField::Prefix, NetworkKey::Name(s)) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => network.prefix == Some(c),
                    _ => false,
                }
            }
            (NetworkField::NetworkMagic, NetworkKey::Magic(m)) => view.network_magic() == Some(*m),
            (field, key) => {
                let Some(wanted) = key.as_number() else {
                    return false;
                };
                let value = match field {
                    NetworkField::Pubkeyhash => Some(network.pubkeyhash as u64),
                    NetworkField::Privatekey => Some(network.privatekey as u64),
                    NetworkField::Scripthash => Some(network.scripthash as u64),
                    NetworkField::Xpubkey => Some(network.xpubkey as u64),
                    NetworkField::Xprivkey => Some(network.xprivkey as u64),
                    NetworkField::Port => view.port().map(|p| p as u64),
                    _ => None,
                };
                value == Some(wanted)
            }
        }
    }
}

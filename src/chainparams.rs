// netparams_registry/src/chainparams.rs
// Network parameter records and the input they are built from.

use crate::error::RegistryError;
use hex;
use serde::{Deserialize, Serialize, Serializer};

// Bitcoin test network, standard and regtest parameter sets.
pub const TESTNET_PORT: u16 = 18333;
pub const TESTNET_MAGIC: [u8; 4] = [0x0b, 0x11, 0x09, 0x07];
pub const TESTNET_DNS_SEEDS: [&str; 4] = [
    "testnet-seed.bitcoin.petertodd.org",
    "testnet-seed.bluematt.me",
    "testnet-seed.alexykot.me",
    "testnet-seed.bitcoin.schildbach.de",
];
pub const REGTEST_PORT: u16 = 18444;
pub const REGTEST_MAGIC: [u8; 4] = [0xfa, 0xbf, 0xb5, 0xda];

/// Which parameter set records with regtest overrides report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkMode {
    #[default]
    Standard,
    Regtest,
}

/// Port, magic and seeds a network switches to in regtest mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegtestParams {
    pub port: u16,
    #[serde(serialize_with = "serialize_magic")]
    pub network_magic: [u8; 4],
    pub dns_seeds: Vec<String>,
}

/// A registered network. Built once by the registry and shared as `Arc<Network>`;
/// nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Network {
    pub name: String,
    pub alias: String,
    pub coin: Option<String>,
    pub coin_name: Option<String>,
    pub short_name: Option<String>,
    pub url: Option<String>,
    pub algorithm: Option<String>,
    pub prefix: Option<char>,
    pub pubkeyhash: u8,
    pub privatekey: u8,
    pub scripthash: u8,
    pub xpubkey: u32,
    pub xprivkey: u32,
    #[serde(serialize_with = "serialize_opt_magic")]
    pub network_magic: Option<[u8; 4]>,
    pub port: Option<u16>,
    pub dns_seeds: Vec<String>,
    // Passed through for consumers, never interpreted here.
    pub txtimestamp: bool,
    pub skip_sign_time: bool,
    pub pos: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regtest: Option<RegtestParams>,
}

/// Magic as given by a caller: raw bytes or a hex string such as "f9beb4d9".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MagicSpec {
    Bytes([u8; 4]),
    Hex(String),
}

impl MagicSpec {
    pub fn to_bytes(&self) -> Result<[u8; 4], RegistryError> {
        match self {
            MagicSpec::Bytes(b) => Ok(*b),
            MagicSpec::Hex(s) => parse_magic(s),
        }
    }
}

impl From<[u8; 4]> for MagicSpec {
    fn from(b: [u8; 4]) -> Self {
        MagicSpec::Bytes(b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegtestSpec {
    pub port: u16,
    pub network_magic: MagicSpec,
    #[serde(default)]
    pub dns_seeds: Vec<String>,
}

/// Fields accepted by `NetworkRegistry::add`. Also the shape of extra networks in
/// the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NetworkSpec {
    pub name: String,
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub coin: Option<String>,
    #[serde(default)]
    pub coin_name: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub algorithm: Option<String>,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub pubkeyhash: u8,
    #[serde(default)]
    pub privatekey: u8,
    #[serde(default)]
    pub scripthash: u8,
    #[serde(default)]
    pub xpubkey: u32,
    #[serde(default)]
    pub xprivkey: u32,
    #[serde(default)]
    pub network_magic: Option<MagicSpec>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub dns_seeds: Vec<String>,
    #[serde(default)]
    pub txtimestamp: bool,
    #[serde(default)]
    pub skip_sign_time: bool,
    #[serde(default)]
    pub pos: bool,
    #[serde(default)]
    pub regtest: Option<RegtestSpec>,
}

impl Network {
    pub fn from_spec(spec: NetworkSpec) -> Result<Self, RegistryError> {
        if spec.name.trim().is_empty() {
            return Err(RegistryError::MissingField("name"));
        }
        let prefix = match spec.prefix.as_deref() {
            None => None,
            Some(p) => {
                let mut chars = p.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => return Err(RegistryError::InvalidPrefix(p.to_string())),
                }
            }
        };
        let network_magic = spec.network_magic.as_ref().map(MagicSpec::to_bytes).transpose()?;
        let regtest = match spec.regtest {
            Some(r) => Some(RegtestParams {
                port: r.port,
                network_magic: r.network_magic.to_bytes()?,
                dns_seeds: r.dns_seeds,
            }),
            None => None,
        };
        // An empty alias would collide across every record that omits one.
        let alias = if spec.alias.is_empty() { spec.name.clone() } else { spec.alias };

        Ok(Network {
            name: spec.name,
            alias,
            coin: spec.coin,
            coin_name: spec.coin_name,
            short_name: spec.short_name,
            url: spec.url,
            algorithm: spec.algorithm,
            prefix,
            pubkeyhash: spec.pubkeyhash,
            privatekey: spec.privatekey,
            scripthash: spec.scripthash,
            xpubkey: spec.xpubkey,
            xprivkey: spec.xprivkey,
            network_magic,
            port: spec.port,
            dns_seeds: spec.dns_seeds,
            txtimestamp: spec.txtimestamp,
            skip_sign_time: spec.skip_sign_time,
            pos: spec.pos,
            regtest,
        })
    }

    pub fn magic_hex(&self) -> Option<String> {
        self.network_magic.as_ref().map(hex::encode)
    }

    pub fn has_regtest(&self) -> bool {
        self.regtest.is_some()
    }
}

/// Parses "f9beb4d9" or "0xf9beb4d9" into wire-order bytes.
pub fn parse_magic(s: &str) -> Result<[u8; 4], RegistryError> {
    let trimmed = s.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    let bytes = hex::decode(digits).map_err(|_| RegistryError::InvalidMagic(s.to_string()))?;
    <[u8; 4]>::try_from(bytes.as_slice()).map_err(|_| RegistryError::InvalidMagic(s.to_string()))
}

fn serialize_magic<S: Serializer>(magic: &[u8; 4], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&hex::encode(magic))
}

fn serialize_opt_magic<S: Serializer>(magic: &Option<[u8; 4]>, s: S) -> Result<S::Ok, S::Error> {
    match magic {
        Some(m) => serialize_magic(m, s),
        None => s.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_magic_accepts_plain_and_prefixed_hex() {
        assert_eq!(parse_magic("f9beb4d9").unwrap(), [0xf9, 0xbe, 0xb4, 0xd9]);
        assert_eq!(parse_magic("0x0b110907").unwrap(), TESTNET_MAGIC);
        assert!(matches!(parse_magic("f9be"), Err(RegistryError::InvalidMagic(_))));
        assert!(matches!(parse_magic("zzzzzzzz"), Err(RegistryError::InvalidMagic(_))));
    }

    #[test]
    fn from_spec_requires_a_name() {
        let err = Network::from_spec(NetworkSpec::default()).unwrap_err();
        assert!(matches!(err, RegistryError::MissingField("name")));
    }

    #[test]
    fn from_spec_defaults_alias_and_keeps_prefix_char() {
        let net = Network::from_spec(NetworkSpec {
            name: "examplecoin".into(),
            prefix: Some("E".into()),
            network_magic: Some(MagicSpec::Hex("01020304".into())),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(net.alias, "examplecoin");
        assert_eq!(net.prefix, Some('E'));
        assert_eq!(net.network_magic, Some([1, 2, 3, 4]));
        assert_eq!(net.magic_hex().as_deref(), Some("01020304"));
        assert!(!net.has_regtest());
    }

    #[test]
    fn from_spec_rejects_prefix_that_is_not_one_char() {
        for bad in ["Ex", ""] {
            let err = Network::from_spec(NetworkSpec {
                name: "examplecoin".into(),
                prefix: Some(bad.into()),
                ..Default::default()
            })
            .unwrap_err();
            assert!(matches!(err, RegistryError::InvalidPrefix(ref p) if p == bad));
        }
    }

    #[test]
    fn serializes_magic_as_hex() {
        let net = Network::from_spec(NetworkSpec {
            name: "examplecoin".into(),
            network_magic: Some([0xf9, 0xbe, 0xb4, 0xd9].into()),
            ..Default::default()
        })
        .unwrap();
        let json = serde_json::to_value(&net).unwrap();
        assert_eq!(json["network_magic"], "f9beb4d9");
        assert!(json.get("regtest").is_none());
    }
}

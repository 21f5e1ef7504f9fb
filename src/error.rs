// netparams_registry/src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("network name or alias '{0}' is already registered")]
    DuplicateName(String),
    #[error("network magic {magic} is already registered to '{existing}'")]
    DuplicateMagic { magic: String, existing: String },
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid network magic '{0}': expected 4 bytes of hex")]
    InvalidMagic(String),
    #[error("invalid address prefix '{0}': expected exactly one character")]
    InvalidPrefix(String),
    #[error("unknown network: {0}")]
    UnknownNetwork(String),
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("base58 decode failed: {0}")]
    Base58(String),
    #[error("unexpected payload length {0}")]
    InvalidLength(usize),
    #[error("checksum mismatch")]
    BadChecksum,
    #[error("no registered network uses version {0:#x}")]
    UnknownVersion(u32),
}

impl From<bs58::decode::Error> for AddressError {
    fn from(e: bs58::decode::Error) -> Self {
        AddressError::Base58(e.to_string())
    }
}

// netparams_registry/src/address.rs
// Base58Check strings resolved back to the network whose version bytes they carry.

use crate::chainparams::Network;
use crate::error::AddressError;
use crate::registry::{NetworkField, NetworkRegistry};
use byteorder::{BigEndian, ByteOrder};
use bs58;
use sha2::{Digest, Sha256};
use std::sync::Arc;

const ADDRESS_PAYLOAD_LEN: usize = 21; // version + hash160
const WIF_PAYLOAD_LEN: usize = 33; // version + 32-byte key
const WIF_COMPRESSED_PAYLOAD_LEN: usize = 34; // ... + 0x01 marker
const EXTENDED_KEY_PAYLOAD_LEN: usize = 78;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    PubkeyHash,
    ScriptHash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtendedKeyKind {
    Public,
    Private,
}

fn checksum(data: &[u8]) -> [u8; 4] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut out = [0u8; 4];
    out.copy_from_slice(&second[..4]);
    out
}

pub fn encode_check(payload: &[u8]) -> String {
    let mut data = payload.to_vec();
    data.extend_from_slice(&checksum(payload));
    bs58::encode(data).into_string()
}

/// Decodes and verifies a Base58Check string, returning the payload without the checksum.
pub fn decode_check(s: &str) -> Result<Vec<u8>, AddressError> {
    let mut data = bs58::decode(s).into_vec()?;
    if data.len() < 5 {
        return Err(AddressError::InvalidLength(data.len()));
    }
    let split = data.len() - 4;
    if data[split..] != checksum(&data[..split]) {
        return Err(AddressError::BadChecksum);
    }
    data.truncate(split);
    Ok(data)
}

pub fn encode_address(network: &Network, kind: AddressKind, hash160: &[u8; 20]) -> String {
    let version = match kind {
        AddressKind::PubkeyHash => network.pubkeyhash,
        AddressKind::ScriptHash => network.scripthash,
    };
    let mut payload = Vec::with_capacity(ADDRESS_PAYLOAD_LEN);
    payload.push(version);
    payload.extend_from_slice(hash160);
    encode_check(&payload)
}

impl NetworkRegistry {
    /// Network and address type for a legacy Base58 address. Pubkey-hash versions
    /// are tried before script-hash versions.
    pub fn network_for_address(&self, address: &str) -> Result<(Arc<Network>, AddressKind), AddressError> {
        let payload = decode_check(address)?;
        if payload.len() != ADDRESS_PAYLOAD_LEN {
            return Err(AddressError::InvalidLength(payload.len()));
        }
        let version = payload[0];
        if let Some(net) = self.get_by(version, NetworkField::Pubkeyhash) {
            return Ok((net, AddressKind::PubkeyHash));
        }
        if let Some(net) = self.get_by(version, NetworkField::Scripthash) {
            return Ok((net, AddressKind::ScriptHash));
        }
        log::debug!("No network for address version {:#04x}", version);
        Err(AddressError::UnknownVersion(version as u32))
    }

    pub fn network_for_wif(&self, wif: &str) -> Result<Arc<Network>, AddressError> {
        let payload = decode_check(wif)?;
        let compressed_ok = payload.len() == WIF_COMPRESSED_PAYLOAD_LEN && payload[33] == 0x01;
        if payload.len() != WIF_PAYLOAD_LEN && !compressed_ok {
            return Err(AddressError::InvalidLength(payload.len()));
        }
        self.get_by(payload[0], NetworkField::Privatekey)
            .ok_or(AddressError::UnknownVersion(payload[0] as u32))
    }

    pub fn network_for_extended_key(&self, key: &str) -> Result<(Arc<Network>, ExtendedKeyKind), AddressError> {
        let payload = decode_check(key)?;
        if payload.len() != EXTENDED_KEY_PAYLOAD_LEN {
            return Err(AddressError::InvalidLength(payload.len()));
        }
        let version = BigEndian::read_u32(&payload[..4]);
        if let Some(net) = self.get_by(version, NetworkField::Xpubkey) {
            return Ok((net, ExtendedKeyKind::Public));
        }
        self.get_by(version, NetworkField::Xprivkey)
            .map(|net| (net, ExtendedKeyKind::Private))
            .ok_or(AddressError::UnknownVersion(version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::WriteBytesExt;

    #[test]
    fn zero_hash_livenet_address() {
        let reg = NetworkRegistry::with_builtin();
        let livenet = reg.livenet().unwrap();
        let addr = encode_address(&livenet, AddressKind::PubkeyHash, &[0u8; 20]);
        assert_eq!(addr, "1111111111111111111114oLvT2");
        let (net, kind) = reg.network_for_address(&addr).unwrap();
        assert!(Arc::ptr_eq(&net, &livenet));
        assert_eq!(kind, AddressKind::PubkeyHash);
    }

    #[test]
    fn resolves_genesis_address() {
        let reg = NetworkRegistry::with_builtin();
        let (net, kind) = reg.network_for_address("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa").unwrap();
        assert_eq!(net.name, "livenet");
        assert_eq!(kind, AddressKind::PubkeyHash);
    }

    #[test]
    fn script_hash_and_altcoin_addresses() {
        let reg = NetworkRegistry::with_builtin();
        let doge = reg.get("dogecoin").unwrap();
        let addr = encode_address(&doge, AddressKind::PubkeyHash, &[7u8; 20]);
        assert!(addr.starts_with('D'));
        assert!(Arc::ptr_eq(&reg.network_for_address(&addr).unwrap().0, &doge));

        let testnet = reg.testnet().unwrap();
        let p2sh = encode_address(&testnet, AddressKind::ScriptHash, &[9u8; 20]);
        let (net, kind) = reg.network_for_address(&p2sh).unwrap();
        assert!(Arc::ptr_eq(&net, &testnet));
        assert_eq!(kind, AddressKind::ScriptHash);
    }

    #[test]
    fn rejects_corrupted_and_unknown_addresses() {
        let reg = NetworkRegistry::with_builtin();
        assert_eq!(
            reg.network_for_address("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNb").unwrap_err(),
            AddressError::BadChecksum
        );
        assert!(matches!(reg.network_for_address("0OIl"), Err(AddressError::Base58(_))));

        let mut payload = vec![0xffu8];
        payload.extend_from_slice(&[0u8; 20]);
        let unknown = encode_check(&payload);
        assert_eq!(reg.network_for_address(&unknown).unwrap_err(), AddressError::UnknownVersion(0xff));
    }

    #[test]
    fn wif_resolves_privatekey_version() {
        let reg = NetworkRegistry::with_builtin();
        let net = reg.network_for_wif("5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ").unwrap();
        assert_eq!(net.name, "livenet");

        let mut compressed = vec![0xefu8];
        compressed.extend_from_slice(&[1u8; 32]);
        compressed.push(0x01);
        assert_eq!(reg.network_for_wif(&encode_check(&compressed)).unwrap().name, "testnet");
    }

    #[test]
    fn extended_keys_resolve_by_version() {
        let reg = NetworkRegistry::with_builtin();
        let xpub = "xpub661MyMwAqRbcFtXgS5sYJABqqG9YLmC4Q1Rdap9gSE8NqtwybGhePY2gZ29ESFjqJoCu1Rupje8YtGqsefD265TMg7usUDFdp6W1EGMcet8";
        let (net, kind) = reg.network_for_extended_key(xpub).unwrap();
        assert_eq!(net.name, "livenet");
        assert_eq!(kind, ExtendedKeyKind::Public);

        let mut tprv = Vec::new();
        tprv.write_u32::<BigEndian>(0x04358394).unwrap();
        tprv.extend_from_slice(&[0u8; 74]);
        let (net, kind) = reg.network_for_extended_key(&encode_check(&tprv)).unwrap();
        assert_eq!(net.name, "testnet");
        assert_eq!(kind, ExtendedKeyKind::Private);
    }
}

// src/crypto/address.rs

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::client::models::ClientError;

/// Prefix byte carried by every mainnet account address.
pub const ADDRESS_PREFIX: u8 = 0x41;

/// Raw address length: prefix byte plus the 20-byte account payload.
pub const ADDRESS_LEN: usize = 21;

const CHECKSUM_LEN: usize = 4;

/// Account address in its canonical 21-byte form.
///
/// The two display forms (42-char hex and base58check) are derived from the
/// same raw bytes, so they always agree for a given address.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Parse the hex form: `41` prefix byte plus the 20-byte payload.
    pub fn from_hex(s: &str) -> Result<Self, ClientError> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let mut raw = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(stripped, &mut raw)
            .map_err(|_| ClientError::InvalidAddress(s.to_string()))?;
        if raw[0] != ADDRESS_PREFIX {
            return Err(ClientError::InvalidAddress(s.to_string()));
        }
        Ok(Self(raw))
    }

    /// Parse the base58check display form.
    pub fn from_base58(s: &str) -> Result<Self, ClientError> {
        let decoded = bs58::decode(s)
            .into_vec()
            .map_err(|_| ClientError::InvalidAddress(s.to_string()))?;
        if decoded.len() != ADDRESS_LEN + CHECKSUM_LEN {
            return Err(ClientError::InvalidAddress(s.to_string()));
        }
        let (payload, checksum) = decoded.split_at(ADDRESS_LEN);
        if checksum != &double_sha256(payload)[..CHECKSUM_LEN] || payload[0] != ADDRESS_PREFIX {
            return Err(ClientError::InvalidAddress(s.to_string()));
        }
        let mut raw = [0u8; ADDRESS_LEN];
        raw.copy_from_slice(payload);
        Ok(Self(raw))
    }

    /// Whether `s` is a syntactically valid address in either form.
    pub fn is_valid(s: &str) -> bool {
        s.parse::<Self>().is_ok()
    }

    pub(crate) fn from_raw(raw: [u8; ADDRESS_LEN]) -> Self {
        Self(raw)
    }

    /// Canonical lowercase hex form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Base58check display form.
    pub fn to_base58(&self) -> String {
        let checksum = double_sha256(&self.0);
        let mut payload = [0u8; ADDRESS_LEN + CHECKSUM_LEN];
        payload[..ADDRESS_LEN].copy_from_slice(&self.0);
        payload[ADDRESS_LEN..].copy_from_slice(&checksum[..CHECKSUM_LEN]);
        bs58::encode(payload).into_string()
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl FromStr for Address {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The hex form is fixed-width, so the two display forms cannot
        // collide: base58check addresses are 34 characters.
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        if stripped.len() == ADDRESS_LEN * 2 && stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return Self::from_hex(s);
        }
        Self::from_base58(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_base58())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base58())
    }
}

fn double_sha256(payload: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(payload);
    Sha256::digest(first).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX: &str = "41928c9af0651632157ef27a2cf17ca72c575a4d21";
    const BASE58: &str = "TPL66VK2gCXNCD7EJg9pgJRfqcRazjhUZY";

    #[test]
    fn test_hex_round_trip() {
        let address = Address::from_hex(HEX).unwrap();
        assert_eq!(address.to_hex(), HEX);
        assert_eq!(address.to_base58(), BASE58);
    }

    #[test]
    fn test_base58_round_trip() {
        let address = Address::from_base58(BASE58).unwrap();
        assert_eq!(address.to_hex(), HEX);
        assert_eq!(address.to_base58(), BASE58);
    }

    #[test]
    fn test_parse_detects_either_form() {
        assert_eq!(HEX.parse::<Address>().unwrap().to_base58(), BASE58);
        assert_eq!(BASE58.parse::<Address>().unwrap().to_hex(), HEX);
    }

    #[test]
    fn test_rejects_wrong_prefix() {
        let foreign = "00928c9af0651632157ef27a2cf17ca72c575a4d21";
        assert!(Address::from_hex(foreign).is_err());
    }

    #[test]
    fn test_rejects_corrupted_checksum() {
        let mut corrupted = BASE58.to_string();
        corrupted.pop();
        corrupted.push('x');
        assert!(Address::from_base58(&corrupted).is_err());
    }

    #[test]
    fn test_is_valid() {
        assert!(Address::is_valid(HEX));
        assert!(Address::is_valid(BASE58));
        assert!(!Address::is_valid("test"));
        assert!(!Address::is_valid(""));
    }
}

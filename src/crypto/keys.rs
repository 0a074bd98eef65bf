// src/crypto/keys.rs

use std::fmt;

use k256::ecdsa::SigningKey;
use rand::rngs::OsRng;
use sha3::{Digest, Keccak256};
use zeroize::Zeroizing;

use crate::client::models::ClientError;
use crate::crypto::address::{Address, ADDRESS_LEN, ADDRESS_PREFIX};

/// Expected private key length: 32 bytes as 64 hex characters.
const KEY_HEX_LEN: usize = 64;

/// secp256k1 signing key with deterministic account-address derivation.
#[derive(Clone)]
pub struct PrivateKey {
    inner: SigningKey,
}

impl PrivateKey {
    /// Parse a 64-character hex private key.
    pub fn from_hex(s: &str) -> Result<Self, ClientError> {
        if s.len() != KEY_HEX_LEN {
            return Err(ClientError::InvalidPrivateKey);
        }
        let mut raw = Zeroizing::new([0u8; 32]);
        hex::decode_to_slice(s, raw.as_mut_slice()).map_err(|_| ClientError::InvalidPrivateKey)?;
        let inner =
            SigningKey::from_slice(raw.as_slice()).map_err(|_| ClientError::InvalidPrivateKey)?;
        Ok(Self { inner })
    }

    /// Generate a fresh random key.
    pub fn generate() -> Self {
        Self {
            inner: SigningKey::random(&mut OsRng),
        }
    }

    /// Lowercase hex encoding of the key material.
    pub fn to_hex(&self) -> String {
        hex::encode(self.inner.to_bytes())
    }

    /// Derive the account address for this key: Keccak-256 over the
    /// uncompressed public point (without the SEC1 tag byte), keeping the
    /// last 20 bytes behind the network prefix.
    pub fn address(&self) -> Address {
        let point = self.inner.verifying_key().to_encoded_point(false);
        let digest = Keccak256::digest(&point.as_bytes()[1..]);
        let mut raw = [0u8; ADDRESS_LEN];
        raw[0] = ADDRESS_PREFIX;
        raw[1..].copy_from_slice(&digest[12..]);
        Address::from_raw(raw)
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.inner.to_bytes() == other.inner.to_bytes()
    }
}

impl Eq for PrivateKey {}

// Key material stays out of logs.
impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

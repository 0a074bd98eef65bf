// src/crypto/mod.rs

pub mod address;
pub mod keys;

pub use address::{Address, ADDRESS_LEN, ADDRESS_PREFIX};
pub use keys::PrivateKey;

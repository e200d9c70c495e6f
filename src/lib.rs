//! # crypto-utils: 统一的多算法文本加解密
//!
//! `crypto-utils` presents one operation contract across six algorithm families:
//! RSA-OAEP (asymmetric), passphrase-based AES-256 and TripleDES, cyclic-key XOR,
//! and the classical Caesar and Vigenère ciphers. Every key and ciphertext that
//! crosses the API boundary is text; binary intermediates are Base64-encoded.
//!
//! ## Core Concepts
//!
//! - **`Algorithm`**: a closed enumeration of the supported algorithms.
//! - **`KeyMaterial`**: key material tagged with the algorithm it belongs to.
//! - **`registry`**: routes `encrypt` / `decrypt` to exactly one adapter.
//! - **`keygen`**: random key and keypair generators with an injectable RNG.
//! - **`CipherEngine`**: bundles the operations with a `CryptoConfig` and offers
//!   async forms for the RSA operations.
//!
//! The classical ciphers (Caesar, Vigenère, XOR) are educational and provide no
//! real confidentiality. Nothing here authenticates ciphertexts.
//!
//! ## Quick Start
//!
//! ```rust
//! use crypto_utils::{Algorithm, decrypt, encrypt};
//!
//! let ciphertext = encrypt(Algorithm::Caesar, "abc", "2").unwrap();
//! assert_eq!(ciphertext, "cde");
//! assert_eq!(decrypt(Algorithm::Caesar, &ciphertext, "2").unwrap(), "abc");
//!
//! let token = encrypt(Algorithm::Aes, "Hello, World!", "passphrase").unwrap();
//! assert_eq!(decrypt(Algorithm::Aes, &token, "passphrase").unwrap(), "Hello, World!");
//! ```

pub mod algorithm;
pub mod asymmetric;
pub mod classical;
pub mod common;
pub mod engine;
pub mod keygen;
pub mod registry;
pub mod symmetric;

pub use algorithm::{Algorithm, KeyMaterial, KeyShape};
pub use asymmetric::KeyPair;
pub use common::{CryptoConfig, Error, ErrorKind, Result};
pub use engine::CipherEngine;
pub use keygen::{generate_keypair, generate_symmetric_key};
pub use registry::{decrypt, decrypt_with, encrypt, encrypt_with};

/// The version of the `crypto-utils` crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

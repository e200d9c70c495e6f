//! `RsaOaepSystem` 提供了基于 RSA-OAEP (SHA-256) 的非对称加解密功能。
//!
//! 密钥以 DER 编码后再做 Base64：公钥为 SubjectPublicKeyInfo，私钥为 PKCS#8。
//! 单次加密的明文长度受 OAEP 限制：`k - 2 * 32 - 2` 字节（2048 位密钥为 190 字节）。

use crate::asymmetric::traits::AsymmetricCryptographicSystem;
use crate::common::config::CryptoConfig;
use crate::common::errors::{Error, Result};
use crate::common::utils::{from_base64, to_base64};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// SHA-256 摘要长度
const OAEP_HASH_LEN: usize = 32;

/// RSA公钥包装器，持有已通过结构校验的公钥
#[derive(Debug, Clone, PartialEq)]
pub struct RsaPublicKeyWrapper(pub RsaPublicKey);

impl RsaPublicKeyWrapper {
    /// 该公钥一次能加密的最大明文字节数
    pub fn max_plaintext_len(&self) -> usize {
        self.0.size().saturating_sub(2 * OAEP_HASH_LEN + 2)
    }

    /// 模数位数
    pub fn bits(&self) -> usize {
        self.0.size() * 8
    }
}

/// RSA私钥包装器；内部私钥在丢弃时会被擦除
#[derive(Debug, Clone, PartialEq)]
pub struct RsaPrivateKeyWrapper(pub RsaPrivateKey);

/// 文本形式的密钥对，供调用方显示或传输
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    /// Base64(DER SubjectPublicKeyInfo)
    pub public_key: String,
    /// Base64(DER PKCS#8)
    pub private_key: String,
}

/// RSA-OAEP 加密系统实现
pub struct RsaOaepSystem;

impl AsymmetricCryptographicSystem for RsaOaepSystem {
    type PublicKey = RsaPublicKeyWrapper;
    type PrivateKey = RsaPrivateKeyWrapper;

    fn generate_keypair<R: RngCore + CryptoRng>(
        rng: &mut R,
        config: &CryptoConfig,
    ) -> Result<(Self::PublicKey, Self::PrivateKey)> {
        let private_key = RsaPrivateKey::new(rng, config.rsa_key_bits)
            .map_err(|e| Error::KeyGeneration(format!("RSA key generation failed: {}", e)))?;
        let public_key = RsaPublicKey::from(&private_key);

        Ok((
            RsaPublicKeyWrapper(public_key),
            RsaPrivateKeyWrapper(private_key),
        ))
    }

    fn encrypt<R: RngCore + CryptoRng>(
        rng: &mut R,
        public_key: &Self::PublicKey,
        plaintext: &[u8],
    ) -> Result<Vec<u8>> {
        let limit = public_key.max_plaintext_len();
        if plaintext.len() > limit {
            return Err(Error::Encryption(format!(
                "plaintext is {} bytes, RSA-OAEP with a {}-bit key accepts at most {} bytes",
                plaintext.len(),
                public_key.bits(),
                limit
            )));
        }

        public_key
            .0
            .encrypt(rng, Oaep::new::<Sha256>(), plaintext)
            .map_err(|e| Error::Encryption(format!("RSA encryption failed: {}", e)))
    }

    fn decrypt(private_key: &Self::PrivateKey, ciphertext: &[u8]) -> Result<Vec<u8>> {
        private_key
            .0
            .decrypt(Oaep::new::<Sha256>(), ciphertext)
            .map_err(|_| {
                Error::Decryption(
                    "RSA decryption failed (mismatched private key or corrupted ciphertext)"
                        .to_string(),
                )
            })
    }

    fn export_public_key(public_key: &Self::PublicKey) -> Result<String> {
        let der = public_key
            .0
            .to_public_key_der()
            .map_err(|e| Error::InvalidKey(format!("RSA public key export failed: {}", e)))?;
        Ok(to_base64(der.as_bytes()))
    }

    fn export_private_key(private_key: &Self::PrivateKey) -> Result<String> {
        let der = private_key
            .0
            .to_pkcs8_der()
            .map_err(|e| Error::InvalidKey(format!("RSA private key export failed: {}", e)))?;
        Ok(to_base64(der.as_bytes()))
    }

    fn import_public_key(key_data: &str) -> Result<Self::PublicKey> {
        let der = from_base64(key_data)
            .map_err(|e| Error::InvalidKey(format!("RSA public key is not valid base64: {}", e)))?;
        let public_key = RsaPublicKey::from_public_key_der(&der)
            .map_err(|e| Error::InvalidKey(format!("RSA public key import failed: {}", e)))?;
        Ok(RsaPublicKeyWrapper(public_key))
    }

    fn import_private_key(key_data: &str) -> Result<Self::PrivateKey> {
        let mut der = from_base64(key_data)
            .map_err(|e| Error::InvalidKey(format!("RSA private key is not valid base64: {}", e)))?;
        let parsed = RsaPrivateKey::from_pkcs8_der(&der);
        der.zeroize();

        let private_key =
            parsed.map_err(|e| Error::InvalidKey(format!("RSA private key import failed: {}", e)))?;
        private_key
            .validate()
            .map_err(|e| Error::InvalidKey(format!("RSA private key is inconsistent: {}", e)))?;
        Ok(RsaPrivateKeyWrapper(private_key))
    }
}

impl RsaOaepSystem {
    /// 生成并导出一个文本密钥对
    pub fn generate_keypair_text<R: RngCore + CryptoRng>(
        rng: &mut R,
        config: &CryptoConfig,
    ) -> Result<KeyPair> {
        let (public_key, private_key) = Self::generate_keypair(rng, config)?;
        Ok(KeyPair {
            public_key: Self::export_public_key(&public_key)?,
            private_key: Self::export_private_key(&private_key)?,
        })
    }

    /// 用 Base64 公钥加密 UTF-8 文本，返回 Base64 密文
    pub fn encrypt_text_with_rng<R: RngCore + CryptoRng>(
        rng: &mut R,
        public_key: &str,
        plaintext: &str,
    ) -> Result<String> {
        let public_key = Self::import_public_key(public_key)?;
        let ciphertext = Self::encrypt(rng, &public_key, plaintext.as_bytes())?;
        Ok(to_base64(&ciphertext))
    }

    pub fn encrypt_text(public_key: &str, plaintext: &str) -> Result<String> {
        Self::encrypt_text_with_rng(&mut OsRng, public_key, plaintext)
    }

    /// 用 Base64 私钥解密 Base64 密文
    pub fn decrypt_text(private_key: &str, ciphertext: &str) -> Result<String> {
        let private_key = Self::import_private_key(private_key)?;
        let ciphertext = from_base64(ciphertext)?;
        let plaintext = Self::decrypt(&private_key, &ciphertext)?;
        String::from_utf8(plaintext)
            .map_err(|_| Error::Decryption("RSA decryption produced invalid UTF-8".to_string()))
    }
}

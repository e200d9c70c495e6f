//! 加解密调度：根据算法把操作路由到唯一的适配器
//!
//! 路由是对封闭枚举的穷尽匹配，没有回退，也不会在算法之间做隐式转换。
use crate::algorithm::{Algorithm, KeyMaterial};
use crate::asymmetric::RsaOaepSystem;
use crate::classical::{CaesarSystem, VigenereSystem};
use crate::common::errors::Result;
use crate::common::traits::TextCipher;
use crate::symmetric::{AesCbcSystem, TripleDesSystem, XorSystem};

/// 使用文本形式的密钥加密
///
/// RSA 的 `key` 为 Base64 公钥，Caesar 的 `key` 为 [1, 25] 的十进制位移。
pub fn encrypt(algorithm: Algorithm, plaintext: &str, key: &str) -> Result<String> {
    let key = KeyMaterial::from_text(algorithm, key)?;
    encrypt_with(&key, plaintext)
}

/// 使用文本形式的密钥解密
///
/// RSA 的 `key` 为 Base64 私钥。
pub fn decrypt(algorithm: Algorithm, ciphertext: &str, key: &str) -> Result<String> {
    let key = KeyMaterial::from_text(algorithm, key)?;
    decrypt_with(&key, ciphertext)
}

/// 使用已解析的密钥材料加密
pub fn encrypt_with(key: &KeyMaterial, plaintext: &str) -> Result<String> {
    tracing::debug!(algorithm = %key.algorithm(), "encrypt");
    match key {
        KeyMaterial::Aes(passphrase) => AesCbcSystem::encrypt(passphrase.as_str(), plaintext),
        KeyMaterial::TripleDes(passphrase) => {
            TripleDesSystem::encrypt(passphrase.as_str(), plaintext)
        }
        KeyMaterial::Rsa(public_key) => RsaOaepSystem::encrypt_text(public_key.as_str(), plaintext),
        KeyMaterial::Xor(key) => XorSystem::encrypt(key.as_str(), plaintext),
        KeyMaterial::Caesar(shift) => CaesarSystem::encrypt(shift, plaintext),
        KeyMaterial::Vigenere(keyword) => VigenereSystem::encrypt(keyword.as_str(), plaintext),
    }
}

/// 使用已解析的密钥材料解密
pub fn decrypt_with(key: &KeyMaterial, ciphertext: &str) -> Result<String> {
    tracing::debug!(algorithm = %key.algorithm(), "decrypt");
    match key {
        KeyMaterial::Aes(passphrase) => AesCbcSystem::decrypt(passphrase.as_str(), ciphertext),
        KeyMaterial::TripleDes(passphrase) => {
            TripleDesSystem::decrypt(passphrase.as_str(), ciphertext)
        }
        KeyMaterial::Rsa(private_key) => {
            RsaOaepSystem::decrypt_text(private_key.as_str(), ciphertext)
        }
        KeyMaterial::Xor(key) => XorSystem::decrypt(key.as_str(), ciphertext),
        KeyMaterial::Caesar(shift) => CaesarSystem::decrypt(shift, ciphertext),
        KeyMaterial::Vigenere(keyword) => VigenereSystem::decrypt(keyword.as_str(), ciphertext),
    }
}

//! 密钥与密钥对生成器
//!
//! 随机源以参数形式注入；不带 `_with_rng` 后缀的函数使用操作系统的安全随机源。
use crate::algorithm::Algorithm;
use crate::asymmetric::{KeyPair, RsaOaepSystem};
use crate::classical::{CaesarSystem, VigenereSystem};
use crate::common::config::CryptoConfig;
use crate::common::errors::{Error, Result};
use crate::common::traits::KeyGenerator;
use crate::symmetric::{AesCbcSystem, TripleDesSystem, XorSystem};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// 为对称或古典算法生成密钥文本
///
/// `length` 只对 XOR 与 Vigenère 有意义，缺省时取配置中的默认长度；
/// AES、TripleDES 与 Caesar 的密钥形状固定。
pub fn generate_symmetric_key_with_rng<R: RngCore + CryptoRng>(
    rng: &mut R,
    algorithm: Algorithm,
    length: Option<usize>,
    config: &CryptoConfig,
) -> Result<String> {
    let key = match algorithm {
        Algorithm::Aes => AesCbcSystem::generate_key(rng, AesCbcSystem::DEFAULT_LENGTH)?,
        Algorithm::TripleDes => {
            TripleDesSystem::generate_key(rng, TripleDesSystem::DEFAULT_LENGTH)?
        }
        Algorithm::Xor => XorSystem::generate_key(rng, length.unwrap_or(config.xor_key_length))?,
        Algorithm::Caesar => CaesarSystem::generate_key(rng, CaesarSystem::DEFAULT_LENGTH)?,
        Algorithm::Vigenere => {
            VigenereSystem::generate_key(rng, length.unwrap_or(config.vigenere_key_length))?
        }
        Algorithm::Rsa => {
            return Err(Error::Validation(
                "RSA uses a keypair; call generate_keypair instead".to_string(),
            ));
        }
    };
    tracing::info!(%algorithm, chars = key.len(), "generated key");
    Ok(key)
}

/// 使用默认配置与操作系统随机源生成密钥文本
pub fn generate_symmetric_key(algorithm: Algorithm, length: Option<usize>) -> Result<String> {
    generate_symmetric_key_with_rng(&mut OsRng, algorithm, length, &CryptoConfig::default())
}

/// 生成 RSA-OAEP 密钥对
///
/// 阻塞调用，2048 位时通常耗时数百毫秒到数秒；异步调用方应使用
/// [`CipherEngine::generate_keypair_async`](crate::engine::CipherEngine::generate_keypair_async)。
pub fn generate_keypair_with_rng<R: RngCore + CryptoRng>(
    rng: &mut R,
    config: &CryptoConfig,
) -> Result<KeyPair> {
    config.validate()?;
    let keypair = RsaOaepSystem::generate_keypair_text(rng, config)?;
    tracing::info!(bits = config.rsa_key_bits, "generated RSA keypair");
    Ok(keypair)
}

pub fn generate_keypair() -> Result<KeyPair> {
    generate_keypair_with_rng(&mut OsRng, &CryptoConfig::default())
}

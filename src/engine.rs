//! 统一的加解密引擎
//!
//! `CipherEngine` 把调度层与 `CryptoConfig` 绑定在一起，为调用方（UI 或其他驱动）
//! 提供四个核心操作。启用 `async-engine` 特性后，RSA 的密钥生成与加解密
//! 可以在 tokio 的阻塞线程池上运行，不会阻塞调用方的事件循环。

use crate::algorithm::Algorithm;
use crate::asymmetric::KeyPair;
use crate::common::config::CryptoConfig;
use crate::common::errors::Result;
use crate::{keygen, registry};
use rand::rngs::OsRng;

/// 加解密引擎
#[derive(Debug, Clone, Default)]
pub struct CipherEngine {
    config: CryptoConfig,
}

impl CipherEngine {
    /// 使用指定配置创建引擎，配置无效时返回错误
    pub fn new(config: CryptoConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 从环境变量加载配置并创建引擎
    pub fn from_env() -> Result<Self> {
        Self::new(CryptoConfig::from_env())
    }

    pub fn config(&self) -> &CryptoConfig {
        &self.config
    }

    pub fn encrypt(&self, algorithm: Algorithm, plaintext: &str, key: &str) -> Result<String> {
        registry::encrypt(algorithm, plaintext, key)
    }

    pub fn decrypt(&self, algorithm: Algorithm, ciphertext: &str, key: &str) -> Result<String> {
        registry::decrypt(algorithm, ciphertext, key)
    }

    /// 生成对称或古典算法的密钥，`length` 缺省时使用配置中的默认值
    pub fn generate_key(&self, algorithm: Algorithm, length: Option<usize>) -> Result<String> {
        keygen::generate_symmetric_key_with_rng(&mut OsRng, algorithm, length, &self.config)
    }

    /// 阻塞地生成 RSA 密钥对
    pub fn generate_keypair(&self) -> Result<KeyPair> {
        keygen::generate_keypair_with_rng(&mut OsRng, &self.config)
    }
}

#[cfg(feature = "async-engine")]
impl CipherEngine {
    /// 异步生成 RSA 密钥对，计算在阻塞线程池上进行
    pub async fn generate_keypair_async(&self) -> Result<KeyPair> {
        let config = self.config.clone();
        tokio::task::spawn_blocking(move || keygen::generate_keypair_with_rng(&mut OsRng, &config))
            .await?
    }

    /// 异步加密；只有 RSA 会被移交到阻塞线程池，其余算法直接在当前任务中完成
    pub async fn encrypt_async(
        &self,
        algorithm: Algorithm,
        plaintext: &str,
        key: &str,
    ) -> Result<String> {
        if !algorithm.is_asymmetric() {
            return self.encrypt(algorithm, plaintext, key);
        }
        let (plaintext, key) = (plaintext.to_string(), zeroize::Zeroizing::new(key.to_string()));
        tokio::task::spawn_blocking(move || registry::encrypt(algorithm, &plaintext, &key)).await?
    }

    /// 异步解密，调度规则与 [`encrypt_async`](Self::encrypt_async) 相同
    pub async fn decrypt_async(
        &self,
        algorithm: Algorithm,
        ciphertext: &str,
        key: &str,
    ) -> Result<String> {
        if !algorithm.is_asymmetric() {
            return self.decrypt(algorithm, ciphertext, key);
        }
        let (ciphertext, key) = (ciphertext.to_string(), zeroize::Zeroizing::new(key.to_string()));
        tokio::task::spawn_blocking(move || registry::decrypt(algorithm, &ciphertext, &key)).await?
    }
}

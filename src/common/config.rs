//!
//! # 通用配置模块
//!
//! 包含加解密引擎所使用的核心配置结构：RSA 模数位数以及各生成器的默认密钥长度。
//! 配置可以来自内存默认值、JSON 文件或环境变量。
//!
use crate::common::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 环境变量前缀
const ENV_PREFIX: &str = "CRYPTO_UTILS_";

/// 允许的最小 RSA 模数位数
pub const MIN_RSA_KEY_BITS: usize = 1024;

/// 允许的最大 RSA 模数位数，超过该值的公钥无法被重新导入
pub const MAX_RSA_KEY_BITS: usize = 4096;

/// 加密配置
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CryptoConfig {
    /// RSA密钥位数
    pub rsa_key_bits: usize,
    /// 生成 XOR 密钥时的默认字符数
    pub xor_key_length: usize,
    /// 生成 Vigenère 关键字时的默认字符数
    pub vigenere_key_length: usize,
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            rsa_key_bits: 2048,
            xor_key_length: 16,
            vigenere_key_length: 8,
        }
    }
}

impl CryptoConfig {
    /// 从 JSON 文件加载配置，缺失的字段使用默认值
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        let config: CryptoConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// 从环境变量加载配置
    ///
    /// 识别 `CRYPTO_UTILS_RSA_KEY_BITS`、`CRYPTO_UTILS_XOR_KEY_LENGTH`、
    /// `CRYPTO_UTILS_VIGENERE_KEY_LENGTH`，无法解析的值会被忽略。
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 以任意查找函数代替进程环境加载配置
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let read = |suffix: &str| {
            lookup(&format!("{}{}", ENV_PREFIX, suffix))
                .and_then(|v| v.trim().parse::<usize>().ok())
        };

        if let Some(bits) = read("RSA_KEY_BITS") {
            config.rsa_key_bits = bits;
        }
        if let Some(len) = read("XOR_KEY_LENGTH") {
            config.xor_key_length = len;
        }
        if let Some(len) = read("VIGENERE_KEY_LENGTH") {
            config.vigenere_key_length = len;
        }
        config
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// 校验配置是否可用于生成密钥
    pub fn validate(&self) -> Result<()> {
        if !(MIN_RSA_KEY_BITS..=MAX_RSA_KEY_BITS).contains(&self.rsa_key_bits)
            || self.rsa_key_bits % 8 != 0
        {
            return Err(Error::Configuration(format!(
                "rsa_key_bits must be a multiple of 8 between {} and {}, got {}",
                MIN_RSA_KEY_BITS, MAX_RSA_KEY_BITS, self.rsa_key_bits
            )));
        }
        if self.xor_key_length == 0 {
            return Err(Error::Configuration(
                "xor_key_length must be greater than zero".to_string(),
            ));
        }
        if self.vigenere_key_length == 0 {
            return Err(Error::Configuration(
                "vigenere_key_length must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_crypto_config_default() {
        let config = CryptoConfig::default();

        assert_eq!(config.rsa_key_bits, 2048);
        assert_eq!(config.xor_key_length, 16);
        assert_eq!(config.vigenere_key_length, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_lookup_overrides_and_ignores_garbage() {
        let vars: HashMap<&str, &str> = [
            ("CRYPTO_UTILS_RSA_KEY_BITS", "3072"),
            ("CRYPTO_UTILS_XOR_KEY_LENGTH", "not-a-number"),
            ("CRYPTO_UTILS_VIGENERE_KEY_LENGTH", " 12 "),
        ]
        .into_iter()
        .collect();

        let config = CryptoConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.rsa_key_bits, 3072);
        assert_eq!(config.xor_key_length, 16);
        assert_eq!(config.vigenere_key_length, 12);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("crypto.json");
        let config = CryptoConfig {
            rsa_key_bits: 4096,
            xor_key_length: 32,
            vigenere_key_length: 5,
        };

        config.save_to_file(&path).unwrap();
        let loaded = CryptoConfig::from_file(&path).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partial.json");
        fs::write(&path, r#"{ "xor_key_length": 4 }"#).unwrap();

        let loaded = CryptoConfig::from_file(&path).unwrap();
        assert_eq!(loaded.xor_key_length, 4);
        assert_eq!(loaded.rsa_key_bits, 2048);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let small_rsa = CryptoConfig {
            rsa_key_bits: 512,
            ..Default::default()
        };
        assert!(matches!(small_rsa.validate(), Err(Error::Configuration(_))));

        let unaligned_rsa = CryptoConfig {
            rsa_key_bits: 2050,
            ..Default::default()
        };
        assert!(unaligned_rsa.validate().is_err());

        let zero_xor = CryptoConfig {
            xor_key_length: 0,
            ..Default::default()
        };
        assert!(zero_xor.validate().is_err());

        let zero_vigenere = CryptoConfig {
            vigenere_key_length: 0,
            ..Default::default()
        };
        assert!(zero_vigenere.validate().is_err());
    }

    #[test]
    fn test_validate_rsa_key_bits_upper_bound() {
        let max = CryptoConfig {
            rsa_key_bits: MAX_RSA_KEY_BITS,
            ..Default::default()
        };
        assert!(max.validate().is_ok());

        // 4104 位的公钥无法被 rsa 的 SPKI 解析重新导入
        let too_large = CryptoConfig {
            rsa_key_bits: 4104,
            ..Default::default()
        };
        assert!(matches!(too_large.validate(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_from_file_rejects_oversized_rsa() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("oversized.json");
        fs::write(&path, r#"{ "rsa_key_bits": 8192 }"#).unwrap();

        let err = CryptoConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}

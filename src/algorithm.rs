//! 算法注册表：受支持算法的封闭枚举以及每种算法的密钥形态
use crate::classical::CaesarSystem;
use crate::common::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use zeroize::Zeroizing;

/// 受支持的算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "AES")]
    Aes,
    #[serde(rename = "TripleDES")]
    TripleDes,
    #[serde(rename = "RSA")]
    Rsa,
    #[serde(rename = "XOR")]
    Xor,
    Caesar,
    Vigenere,
}

/// 算法所需的密钥形态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyShape {
    /// UTF-8 口令（AES、TripleDES、XOR）
    Passphrase,
    /// 整数位移（Caesar）
    Shift,
    /// 字母关键字（Vigenère）
    Keyword,
    /// 公钥/私钥对（RSA）
    KeyPair,
}

impl Algorithm {
    /// 所有算法，按固定顺序
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Aes,
        Algorithm::TripleDes,
        Algorithm::Rsa,
        Algorithm::Xor,
        Algorithm::Caesar,
        Algorithm::Vigenere,
    ];

    /// 规范名称
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Aes => "AES",
            Algorithm::TripleDes => "TripleDES",
            Algorithm::Rsa => "RSA",
            Algorithm::Xor => "XOR",
            Algorithm::Caesar => "Caesar",
            Algorithm::Vigenere => "Vigenere",
        }
    }

    pub fn key_shape(&self) -> KeyShape {
        match self {
            Algorithm::Aes | Algorithm::TripleDes | Algorithm::Xor => KeyShape::Passphrase,
            Algorithm::Caesar => KeyShape::Shift,
            Algorithm::Vigenere => KeyShape::Keyword,
            Algorithm::Rsa => KeyShape::KeyPair,
        }
    }

    /// 是否为非对称算法
    pub fn is_asymmetric(&self) -> bool {
        self.key_shape() == KeyShape::KeyPair
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aes" => Ok(Algorithm::Aes),
            "tripledes" | "3des" | "triple-des" => Ok(Algorithm::TripleDes),
            "rsa" => Ok(Algorithm::Rsa),
            "xor" => Ok(Algorithm::Xor),
            "caesar" => Ok(Algorithm::Caesar),
            "vigenere" | "vigenère" => Ok(Algorithm::Vigenere),
            _ => Err(Error::Validation(format!("unknown algorithm: {:?}", s))),
        }
    }
}

/// 与具体算法绑定的密钥材料
///
/// 每个变体携带对应算法的密钥形态，因此密钥不可能被交给错误的适配器。
/// RSA 变体在加密时应为 Base64 公钥，在解密时应为 Base64 私钥。
#[derive(Clone)]
pub enum KeyMaterial {
    Aes(Zeroizing<String>),
    TripleDes(Zeroizing<String>),
    Rsa(Zeroizing<String>),
    Xor(Zeroizing<String>),
    Caesar(i64),
    Vigenere(Zeroizing<String>),
}

impl KeyMaterial {
    /// 把调用方输入的密钥文本解析为指定算法的密钥材料
    ///
    /// 这里只校验形态：Caesar 位移必须是 [1, 25] 的整数，RSA 密钥不能为空。
    /// 空口令、空关键字等由各适配器按自身约定处理。
    pub fn from_text(algorithm: Algorithm, key: &str) -> Result<Self> {
        let owned = || Zeroizing::new(key.to_string());
        Ok(match algorithm {
            Algorithm::Aes => KeyMaterial::Aes(owned()),
            Algorithm::TripleDes => KeyMaterial::TripleDes(owned()),
            Algorithm::Xor => KeyMaterial::Xor(owned()),
            Algorithm::Vigenere => KeyMaterial::Vigenere(owned()),
            Algorithm::Caesar => KeyMaterial::Caesar(CaesarSystem::parse_shift(key)?),
            Algorithm::Rsa => {
                if key.trim().is_empty() {
                    return Err(Error::Validation("RSA key must not be empty".to_string()));
                }
                KeyMaterial::Rsa(owned())
            }
        })
    }

    /// 该密钥材料所属的算法
    pub fn algorithm(&self) -> Algorithm {
        match self {
            KeyMaterial::Aes(_) => Algorithm::Aes,
            KeyMaterial::TripleDes(_) => Algorithm::TripleDes,
            KeyMaterial::Rsa(_) => Algorithm::Rsa,
            KeyMaterial::Xor(_) => Algorithm::Xor,
            KeyMaterial::Caesar(_) => Algorithm::Caesar,
            KeyMaterial::Vigenere(_) => Algorithm::Vigenere,
        }
    }
}

// 不在调试输出中泄露密钥
impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("KeyMaterial")
            .field(&self.algorithm())
            .field(&"<redacted>")
            .finish()
    }
}

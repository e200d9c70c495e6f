//! 定义了对称与古典密码适配器共用的核心 Trait。
use crate::common::errors::Result;
use rand::{CryptoRng, RngCore};

/// `TextCipher` 定义了一个以文本为输入输出的加密系统。
///
/// 密文总是文本：二进制结果在边界处被编码（通常为 Base64）。
pub trait TextCipher {
    /// 该算法所需的密钥形态
    type Key: ?Sized;

    /// 使用密钥加密文本
    fn encrypt(key: &Self::Key, plaintext: &str) -> Result<String>;

    /// 使用密钥解密文本
    fn decrypt(key: &Self::Key, ciphertext: &str) -> Result<String>;
}

/// `KeyGenerator` 为某个算法生成形状正确的随机密钥文本。
///
/// 随机源由调用方显式传入，生产环境使用 `OsRng`，测试可以替换为确定性的种子随机源。
pub trait KeyGenerator {
    /// 未指定长度时使用的默认长度；固定形状的密钥忽略该值
    const DEFAULT_LENGTH: usize;

    /// 生成一个新的密钥
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R, length: usize) -> Result<String>;
}

//! 定义了非对称加密系统的核心 Trait。
use crate::common::config::CryptoConfig;
use crate::common::errors::Result;
use rand::{CryptoRng, RngCore};
use std::fmt::Debug;

/// `AsymmetricCryptographicSystem` 定义了非对称加密算法必须实现的核心功能。
///
/// 公钥只用于加密，私钥只用于解密；两者必须来自同一次生成才能完成往返。
pub trait AsymmetricCryptographicSystem: Sized {
    /// 公钥类型
    type PublicKey: Clone + Debug;

    /// 私钥类型
    type PrivateKey: Clone + Debug;

    /// 生成密钥对
    ///
    /// 这是整个库中唯一计算量显著的操作（2048 位约数百毫秒到数秒）。
    fn generate_keypair<R: RngCore + CryptoRng>(
        rng: &mut R,
        config: &CryptoConfig,
    ) -> Result<(Self::PublicKey, Self::PrivateKey)>;

    /// 使用公钥加密单个数据块
    fn encrypt<R: RngCore + CryptoRng>(
        rng: &mut R,
        public_key: &Self::PublicKey,
        plaintext: &[u8],
    ) -> Result<Vec<u8>>;

    /// 使用私钥解密单个数据块
    fn decrypt(private_key: &Self::PrivateKey, ciphertext: &[u8]) -> Result<Vec<u8>>;

    /// 将公钥导出为可传输的文本
    fn export_public_key(public_key: &Self::PublicKey) -> Result<String>;

    /// 将私钥导出为可传输的文本
    fn export_private_key(private_key: &Self::PrivateKey) -> Result<String>;

    /// 从文本导入公钥，格式错误时在任何加密操作之前失败
    fn import_public_key(key_data: &str) -> Result<Self::PublicKey>;

    /// 从文本导入私钥，格式错误时在任何解密操作之前失败
    fn import_private_key(key_data: &str) -> Result<Self::PrivateKey>;
}

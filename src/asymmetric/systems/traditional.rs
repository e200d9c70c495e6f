//! # 传统加密算法模块
//!
//! 本模块包含 RSA 等传统非对称加密算法的实现，
//! 它们都实现 `AsymmetricCryptographicSystem` 特征。

pub mod rsa;

// 重新导出，调用方无需关心内部文件结构
pub use self::rsa::{KeyPair, RsaOaepSystem};

//! # 对称加密系统模块
//!
//! 本模块是所有对称加密算法的"门面"(façade)：
//! 基于口令的 AES-256-CBC 与 TripleDES（共享 OpenSSL 兼容的令牌格式），以及循环密钥 XOR。
//!
//! 每个系统都实现 [`TextCipher`](crate::common::TextCipher) 与
//! [`KeyGenerator`](crate::common::KeyGenerator)。

pub mod aes_cbc;
pub mod passphrase;
pub mod triple_des;
pub mod xor;

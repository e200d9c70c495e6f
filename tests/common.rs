//!
//! 集成测试的通用辅助函数
//!
#![allow(dead_code)]

use crypto_utils::{CipherEngine, KeyPair};
use std::sync::OnceLock;

/// 安装一个写入测试输出的 tracing subscriber，重复调用是安全的
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// 同一测试二进制内共享的 2048 位密钥对
pub fn shared_keypair() -> &'static KeyPair {
    static KEYS: OnceLock<KeyPair> = OnceLock::new();
    KEYS.get_or_init(|| CipherEngine::default().generate_keypair().unwrap())
}

/// 另一对独立生成的密钥，用于错配测试
pub fn other_keypair() -> &'static KeyPair {
    static KEYS: OnceLock<KeyPair> = OnceLock::new();
    KEYS.get_or_init(|| CipherEngine::default().generate_keypair().unwrap())
}

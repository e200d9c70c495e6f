//! 通用模块，包含错误处理、配置、工具函数和共享的trait

pub mod config;
pub mod errors;
pub mod traits;
pub mod utils;

pub use self::config::CryptoConfig;
pub use self::errors::{Error, ErrorKind, Result};
pub use self::traits::{KeyGenerator, TextCipher};
pub use self::utils::{from_base64, to_base64};

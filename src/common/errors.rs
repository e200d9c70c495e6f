use thiserror::Error;

/// 错误的类别，对应调用方需要区分的几种失败情形
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 在任何密码学原语运行之前就被拒绝的输入（空密钥、越界位移等）
    Validation,
    /// Base64/十六进制格式错误或密文封装损坏
    Decoding,
    /// 密钥文本无法解析为期望的密钥结构
    InvalidKey,
    /// 原语层面的解密失败：错误密钥、损坏的密文、填充校验失败
    Decryption,
    /// 输入超出算法容量、原语层面的加密失败或密钥材料生成失败
    Encryption,
    /// 配置、I/O 与运行时等非密码学错误
    Other,
}

/// 加解密操作可能遇到的错误类型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    /// XOR 与 Vigenère 显式拒绝空密钥
    #[error("Key must not be empty")]
    EmptyKey,

    #[error("Decoding error: {0}")]
    Decoding(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Decryption failed: {0}")]
    Decryption(String),

    #[error("Encryption failed: {0}")]
    Encryption(String),

    /// 密码学原语未能生成密钥材料（与解析密钥文本无关）
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Serialization error (JSON)")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "async-engine")]
    #[error("Async task failed: {0}")]
    AsyncTask(#[from] tokio::task::JoinError),
}

impl Error {
    /// 返回该错误所属的类别
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) | Error::EmptyKey => ErrorKind::Validation,
            Error::Decoding(_) => ErrorKind::Decoding,
            Error::InvalidKey(_) => ErrorKind::InvalidKey,
            Error::Decryption(_) => ErrorKind::Decryption,
            Error::Encryption(_) | Error::KeyGeneration(_) => ErrorKind::Encryption,
            Error::Configuration(_) | Error::Io(_) | Error::Json(_) => ErrorKind::Other,
            #[cfg(feature = "async-engine")]
            Error::AsyncTask(_) => ErrorKind::Other,
        }
    }
}

// 手动实现一些无法使用 #[from] 的转换
impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::Decoding(format!("invalid base64: {}", err))
    }
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::Decoding(format!("invalid hex: {}", err))
    }
}

/// 本 crate 统一使用的 `Result` 别名
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::EmptyKey.kind(), ErrorKind::Validation);
        assert_eq!(Error::Validation("x".into()).kind(), ErrorKind::Validation);
        assert_eq!(Error::InvalidKey("x".into()).kind(), ErrorKind::InvalidKey);
        assert_eq!(Error::Decryption("x".into()).kind(), ErrorKind::Decryption);
        assert_eq!(Error::Encryption("x".into()).kind(), ErrorKind::Encryption);
        assert_eq!(Error::KeyGeneration("x".into()).kind(), ErrorKind::Encryption);
        assert_ne!(Error::KeyGeneration("x".into()).kind(), ErrorKind::InvalidKey);
    }

    #[test]
    fn test_base64_error_maps_to_decoding() {
        let err: Error = base64::engine::general_purpose::STANDARD
            .decode("not base64!!")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), ErrorKind::Decoding);
    }

    #[test]
    fn test_empty_key_message() {
        assert_eq!(Error::EmptyKey.to_string(), "Key must not be empty");
    }
}

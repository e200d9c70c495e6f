use base64::{Engine, engine::general_purpose};

/// 将字节编码为标准 Base64 文本
pub fn to_base64(data: &[u8]) -> String {
    general_purpose::STANDARD.encode(data)
}

/// 解码标准 Base64 文本，首尾空白会被忽略
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(encoded.trim())
}

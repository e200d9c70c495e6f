//! 口令模式分组密码的共用令牌格式
//!
//! 令牌格式与 `openssl enc -md md5` 及 CryptoJS 相同：
//! `base64("Salted__" || salt[8] || CBC-PKCS#7 密文)`。
use crate::common::errors::{Error, Result};
use crate::common::utils::{from_base64, to_base64};
use crate::symmetric::kdf::{SALT_LEN, evp_bytes_to_key};
use rand::{CryptoRng, RngCore};

/// 令牌头部的魔数
pub const SALT_MAGIC: &[u8; 8] = b"Salted__";

/// 由具体分组密码（AES-256、3DES）提供的 CBC 原语
pub trait PassphraseBlockCipher {
    /// 算法名称，仅用于日志与错误信息
    const NAME: &'static str;
    /// 密钥长度（字节）
    const KEY_LEN: usize;
    /// 分组长度，同时也是 IV 长度（字节）
    const BLOCK_LEN: usize;

    /// 使用 PKCS#7 填充进行 CBC 加密
    fn encrypt_padded(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>;

    /// CBC 解密并去除 PKCS#7 填充；填充无效时返回 `Error::Decryption`
    fn decrypt_padded(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>;
}

/// 使用给定随机源生成盐并加密，返回 Base64 令牌
pub fn seal<C, R>(rng: &mut R, passphrase: &str, plaintext: &str) -> Result<String>
where
    C: PassphraseBlockCipher,
    R: RngCore + CryptoRng,
{
    if passphrase.is_empty() {
        tracing::warn!(algorithm = C::NAME, "encrypting with an empty passphrase");
    }

    let mut salt = [0u8; SALT_LEN];
    rng.fill_bytes(&mut salt);

    let (key, iv) = evp_bytes_to_key(passphrase.as_bytes(), &salt, C::KEY_LEN, C::BLOCK_LEN);
    let body = C::encrypt_padded(&key, &iv, plaintext.as_bytes())?;

    let mut token = Vec::with_capacity(SALT_MAGIC.len() + SALT_LEN + body.len());
    token.extend_from_slice(SALT_MAGIC);
    token.extend_from_slice(&salt);
    token.extend_from_slice(&body);

    Ok(to_base64(&token))
}

/// 解析 Base64 令牌并解密
///
/// 空的或无法按 UTF-8 解码的结果视为解密失败，而不是返回空字符串。
pub fn open<C: PassphraseBlockCipher>(passphrase: &str, token: &str) -> Result<String> {
    let raw = from_base64(token)?;

    let header_len = SALT_MAGIC.len() + SALT_LEN;
    if raw.len() < header_len || !raw.starts_with(SALT_MAGIC) {
        return Err(Error::Decoding(format!(
            "{} token is missing the salted header",
            C::NAME
        )));
    }

    let (salt, body) = raw[SALT_MAGIC.len()..].split_at(SALT_LEN);
    if body.is_empty() || body.len() % C::BLOCK_LEN != 0 {
        return Err(Error::Decoding(format!(
            "{} ciphertext is truncated or malformed",
            C::NAME
        )));
    }

    let (key, iv) = evp_bytes_to_key(passphrase.as_bytes(), salt, C::KEY_LEN, C::BLOCK_LEN);
    let plaintext = C::decrypt_padded(&key, &iv, body)?;

    if plaintext.is_empty() {
        return Err(Error::Decryption(format!(
            "{} decryption produced no data (wrong passphrase?)",
            C::NAME
        )));
    }

    String::from_utf8(plaintext).map_err(|_| {
        Error::Decryption(format!(
            "{} decryption produced invalid UTF-8 (wrong passphrase?)",
            C::NAME
        ))
    })
}

//! 循环密钥 XOR 密码
//!
//! 明文的 UTF-8 字节与 `key[i % key.len()]` 逐字节异或，结果以 Base64 传输。
//! 仅用于教学，不提供任何机密性保证。
use crate::common::errors::{Error, Result};
use crate::common::traits::{KeyGenerator, TextCipher};
use crate::common::utils::{from_base64, to_base64};
use rand::distributions::Alphanumeric;
use rand::{CryptoRng, Rng, RngCore};

#[derive(Debug)]
pub struct XorSystem;

impl XorSystem {
    fn xor_data(key: &[u8], data: &mut [u8]) {
        let key_len = key.len();
        for (i, byte) in data.iter_mut().enumerate() {
            *byte ^= key[i % key_len];
        }
    }
}

impl TextCipher for XorSystem {
    type Key = str;

    fn encrypt(key: &str, plaintext: &str) -> Result<String> {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }
        let mut data = plaintext.as_bytes().to_vec();
        Self::xor_data(key.as_bytes(), &mut data);
        Ok(to_base64(&data))
    }

    fn decrypt(key: &str, ciphertext: &str) -> Result<String> {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }
        let mut data = from_base64(ciphertext)?;
        // XOR 是自逆的：解密与加密相同
        Self::xor_data(key.as_bytes(), &mut data);
        String::from_utf8(data).map_err(|_| {
            Error::Decryption("XOR decryption produced invalid UTF-8 (wrong key?)".to_string())
        })
    }
}

impl KeyGenerator for XorSystem {
    const DEFAULT_LENGTH: usize = 16;

    /// 生成指定长度的随机字母数字密钥
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R, length: usize) -> Result<String> {
        if length == 0 {
            return Err(Error::Validation("XOR key length must be greater than zero".to_string()));
        }
        Ok((0..length).map(|_| rng.sample(Alphanumeric) as char).collect())
    }
}

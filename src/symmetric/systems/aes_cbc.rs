//! AES-256-CBC 口令加密实现
use crate::common::errors::{Error, Result};
use crate::common::traits::{KeyGenerator, TextCipher};
use crate::symmetric::systems::passphrase::{self, PassphraseBlockCipher};
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, block_padding::Pkcs7};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

const KEY_SIZE: usize = 32;
const BLOCK_SIZE: usize = 16;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// AES 对称加密系统
///
/// 口令经 `EVP_BytesToKey` 派生出 256 位密钥与 IV，密文为 OpenSSL 兼容的 Base64 令牌。
#[derive(Debug)]
pub struct AesCbcSystem;

impl AesCbcSystem {
    /// 使用指定随机源生成盐并加密
    pub fn encrypt_with_rng<R: RngCore + CryptoRng>(
        rng: &mut R,
        passphrase: &str,
        plaintext: &str,
    ) -> Result<String> {
        passphrase::seal::<Self, R>(rng, passphrase, plaintext)
    }
}

impl PassphraseBlockCipher for AesCbcSystem {
    const NAME: &'static str = "AES";
    const KEY_LEN: usize = KEY_SIZE;
    const BLOCK_LEN: usize = BLOCK_SIZE;

    fn encrypt_padded(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        let cipher = Aes256CbcEnc::new_from_slices(key, iv)
            .map_err(|e| Error::Encryption(format!("AES key setup failed: {}", e)))?;
        Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
    }

    fn decrypt_padded(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        let cipher = Aes256CbcDec::new_from_slices(key, iv)
            .map_err(|e| Error::Decryption(format!("AES key setup failed: {}", e)))?;
        cipher
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| Error::Decryption("wrong passphrase or corrupted ciphertext".to_string()))
    }
}

impl TextCipher for AesCbcSystem {
    type Key = str;

    fn encrypt(passphrase: &str, plaintext: &str) -> Result<String> {
        Self::encrypt_with_rng(&mut OsRng, passphrase, plaintext)
    }

    fn decrypt(passphrase: &str, ciphertext: &str) -> Result<String> {
        passphrase::open::<Self>(passphrase, ciphertext)
    }
}

impl KeyGenerator for AesCbcSystem {
    const DEFAULT_LENGTH: usize = KEY_SIZE;

    /// 生成 256 位随机密钥，十六进制编码；长度参数被忽略
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R, _length: usize) -> Result<String> {
        let mut key_bytes = [0u8; KEY_SIZE];
        rng.fill_bytes(&mut key_bytes);
        Ok(hex::encode(key_bytes))
    }
}

//! TripleDES（DES-EDE3-CBC）口令加密实现
use crate::common::errors::{Error, Result};
use crate::common::traits::{KeyGenerator, TextCipher};
use crate::symmetric::systems::passphrase::{self, PassphraseBlockCipher};
use des::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, block_padding::Pkcs7};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

const KEY_SIZE: usize = 24;
const BLOCK_SIZE: usize = 8;

type TdesCbcEnc = cbc::Encryptor<des::TdesEde3>;
type TdesCbcDec = cbc::Decryptor<des::TdesEde3>;

/// TripleDES 对称加密系统，与 [`AesCbcSystem`](super::aes_cbc::AesCbcSystem) 只在分组密码参数上不同
#[derive(Debug)]
pub struct TripleDesSystem;

impl TripleDesSystem {
    pub fn encrypt_with_rng<R: RngCore + CryptoRng>(
        rng: &mut R,
        passphrase: &str,
        plaintext: &str,
    ) -> Result<String> {
        passphrase::seal::<Self, R>(rng, passphrase, plaintext)
    }
}

impl PassphraseBlockCipher for TripleDesSystem {
    const NAME: &'static str = "TripleDES";
    const KEY_LEN: usize = KEY_SIZE;
    const BLOCK_LEN: usize = BLOCK_SIZE;

    fn encrypt_padded(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        let cipher = TdesCbcEnc::new_from_slices(key, iv)
            .map_err(|e| Error::Encryption(format!("TripleDES key setup failed: {}", e)))?;
        Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
    }

    fn decrypt_padded(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        let cipher = TdesCbcDec::new_from_slices(key, iv)
            .map_err(|e| Error::Decryption(format!("TripleDES key setup failed: {}", e)))?;
        cipher
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| Error::Decryption("wrong passphrase or corrupted ciphertext".to_string()))
    }
}

impl TextCipher for TripleDesSystem {
    type Key = str;

    fn encrypt(passphrase: &str, plaintext: &str) -> Result<String> {
        Self::encrypt_with_rng(&mut OsRng, passphrase, plaintext)
    }

    fn decrypt(passphrase: &str, ciphertext: &str) -> Result<String> {
        passphrase::open::<Self>(passphrase, ciphertext)
    }
}

impl KeyGenerator for TripleDesSystem {
    const DEFAULT_LENGTH: usize = KEY_SIZE;

    /// 生成 192 位随机密钥，十六进制编码；长度参数被忽略
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R, _length: usize) -> Result<String> {
        let mut key_bytes = [0u8; KEY_SIZE];
        rng.fill_bytes(&mut key_bytes);
        Ok(hex::encode(key_bytes))
    }
}

//! Vigenère 密码
//!
//! 关键字只在明文的字母位置上前进，非字母字符原样通过且不消耗关键字字符。
use crate::classical::caesar::CaesarSystem;
use crate::common::errors::{Error, Result};
use crate::common::traits::{KeyGenerator, TextCipher};
use rand::{CryptoRng, Rng, RngCore};

#[derive(Debug)]
pub struct VigenereSystem;

impl VigenereSystem {
    /// 关键字字母对应的位移（A=0..Z=25，不区分大小写），忽略非字母字符
    fn key_shifts(keyword: &str) -> Result<Vec<i64>> {
        let shifts: Vec<i64> = keyword
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| (c.to_ascii_uppercase() as u8 - b'A') as i64)
            .collect();
        if shifts.is_empty() {
            return Err(Error::EmptyKey);
        }
        Ok(shifts)
    }

    fn transform(keyword: &str, text: &str, direction: i64) -> Result<String> {
        let shifts = Self::key_shifts(keyword)?;
        let mut position = 0;
        Ok(text
            .chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    let shift = shifts[position % shifts.len()] * direction;
                    position += 1;
                    CaesarSystem::rotate(c, shift)
                } else {
                    c
                }
            })
            .collect())
    }
}

impl TextCipher for VigenereSystem {
    type Key = str;

    fn encrypt(keyword: &str, plaintext: &str) -> Result<String> {
        Self::transform(keyword, plaintext, 1)
    }

    fn decrypt(keyword: &str, ciphertext: &str) -> Result<String> {
        Self::transform(keyword, ciphertext, -1)
    }
}

impl KeyGenerator for VigenereSystem {
    const DEFAULT_LENGTH: usize = 8;

    /// 生成指定长度的随机大写字母关键字
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R, length: usize) -> Result<String> {
        if length == 0 {
            return Err(Error::Validation(
                "Vigenère keyword length must be greater than zero".to_string(),
            ));
        }
        Ok((0..length).map(|_| rng.gen_range(b'A'..=b'Z') as char).collect())
    }
}

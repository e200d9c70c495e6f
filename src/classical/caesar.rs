//! 凯撒密码
use crate::common::errors::{Error, Result};
use crate::common::traits::{KeyGenerator, TextCipher};
use rand::{CryptoRng, Rng, RngCore};

/// 生成位移的取值范围
pub const MIN_SHIFT: i64 = 1;
pub const MAX_SHIFT: i64 = 25;

#[derive(Debug)]
pub struct CaesarSystem;

impl CaesarSystem {
    /// 将单个 ASCII 字母在其大小写字母表内轮转 `shift` 位，其它字符原样返回
    pub(crate) fn rotate(c: char, shift: i64) -> char {
        let base = match c {
            'a'..='z' => b'a',
            'A'..='Z' => b'A',
            _ => return c,
        };
        let offset = (c as u8 - base) as i64;
        let rotated = (offset + shift.rem_euclid(26)).rem_euclid(26) as u8;
        (base + rotated) as char
    }

    /// 把文本形式的位移解析为整数，只接受 [1, 25]
    pub fn parse_shift(text: &str) -> Result<i64> {
        let shift: i64 = text.trim().parse().map_err(|_| {
            Error::Validation(format!("Caesar shift must be an integer, got {:?}", text))
        })?;
        if !(MIN_SHIFT..=MAX_SHIFT).contains(&shift) {
            return Err(Error::Validation(format!(
                "Caesar shift must be between {} and {}, got {}",
                MIN_SHIFT, MAX_SHIFT, shift
            )));
        }
        Ok(shift)
    }
}

impl TextCipher for CaesarSystem {
    type Key = i64;

    fn encrypt(shift: &i64, plaintext: &str) -> Result<String> {
        Ok(plaintext.chars().map(|c| Self::rotate(c, *shift)).collect())
    }

    /// 解密即以互补位移 `26 - shift` 加密
    fn decrypt(shift: &i64, ciphertext: &str) -> Result<String> {
        Self::encrypt(&(26 - shift.rem_euclid(26)), ciphertext)
    }
}

impl KeyGenerator for CaesarSystem {
    const DEFAULT_LENGTH: usize = 1;

    /// 生成 [1, 25] 内的随机位移；长度参数被忽略
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R, _length: usize) -> Result<String> {
        Ok(rng.gen_range(MIN_SHIFT..=MAX_SHIFT).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_known_vectors() {
        assert_eq!(CaesarSystem::encrypt(&2, "abc").unwrap(), "cde");
        assert_eq!(CaesarSystem::decrypt(&2, "cde").unwrap(), "abc");
        assert_eq!(CaesarSystem::encrypt(&3, "Hello, World!").unwrap(), "Khoor, Zruog!");
        assert_eq!(CaesarSystem::encrypt(&1, "xyz XYZ").unwrap(), "yza YZA");
    }

    #[test]
    fn test_decrypt_is_complementary_encrypt() {
        let text = "The Quick Brown Fox, 123!";
        for shift in 0..=25 {
            assert_eq!(
                CaesarSystem::decrypt(&shift, text).unwrap(),
                CaesarSystem::encrypt(&(26 - shift), text).unwrap()
            );
        }
    }

    #[test]
    fn test_shift_zero_is_noop() {
        assert_eq!(CaesarSystem::encrypt(&0, "Unchanged").unwrap(), "Unchanged");
        assert_eq!(CaesarSystem::decrypt(&0, "Unchanged").unwrap(), "Unchanged");
    }

    #[test]
    fn test_out_of_range_shifts_rotate_correctly() {
        assert_eq!(CaesarSystem::encrypt(&-1, "abc").unwrap(), "zab");
        assert_eq!(CaesarSystem::encrypt(&28, "abc").unwrap(), "cde");
        assert_eq!(CaesarSystem::encrypt(&-27, "ABC").unwrap(), "ZAB");
        // 极端位移不溢出
        let extreme = CaesarSystem::encrypt(&i64::MIN, "abc").unwrap();
        assert_eq!(CaesarSystem::decrypt(&i64::MIN, &extreme).unwrap(), "abc");

        let text = "Round Trip";
        for shift in [-100, -26, -3, 26, 52, 1000] {
            let encrypted = CaesarSystem::encrypt(&shift, text).unwrap();
            assert_eq!(CaesarSystem::decrypt(&shift, &encrypted).unwrap(), text);
        }
    }

    #[test]
    fn test_non_alphabetic_unchanged() {
        let text = "12345 !?@ ñ é 漢字";
        assert_eq!(CaesarSystem::encrypt(&7, text).unwrap(), text);
        assert_eq!(CaesarSystem::decrypt(&7, text).unwrap(), text);
    }

    #[test]
    fn test_parse_shift() {
        assert_eq!(CaesarSystem::parse_shift(" 13 ").unwrap(), 13);
        assert!(CaesarSystem::parse_shift("0").is_err());
        assert!(CaesarSystem::parse_shift("26").is_err());
        assert!(CaesarSystem::parse_shift("three").is_err());
        assert!(CaesarSystem::parse_shift("").is_err());
    }

    #[test]
    fn test_generate_key_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let key = CaesarSystem::generate_key(&mut rng, 0).unwrap();
            let shift = CaesarSystem::parse_shift(&key).unwrap();
            assert!((1..=25).contains(&shift));
        }
    }
}

//! OpenSSL `EVP_BytesToKey` 口令密钥派生（MD5，单次迭代）。
//!
//! 这是 `openssl enc` 与 CryptoJS 在口令模式下使用的派生方式，
//! 派生结果依次切分为密钥与 IV。
use md5::{Digest, Md5};
use zeroize::Zeroizing;

/// 盐的长度（字节）
pub const SALT_LEN: usize = 8;

/// 从口令与盐派生 `key_len + iv_len` 字节的材料，返回 `(key, iv)`
pub fn evp_bytes_to_key(
    passphrase: &[u8],
    salt: &[u8],
    key_len: usize,
    iv_len: usize,
) -> (Zeroizing<Vec<u8>>, Zeroizing<Vec<u8>>) {
    let total = key_len + iv_len;
    let mut derived = Zeroizing::new(Vec::with_capacity(total + 16));
    let mut previous = Zeroizing::new(Vec::new());

    while derived.len() < total {
        let mut hasher = Md5::new();
        hasher.update(previous.as_slice());
        hasher.update(passphrase);
        hasher.update(salt);
        *previous = hasher.finalize().to_vec();
        derived.extend_from_slice(&previous);
    }

    let key = Zeroizing::new(derived[..key_len].to_vec());
    let iv = Zeroizing::new(derived[key_len..total].to_vec());
    (key, iv)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALT: [u8; SALT_LEN] = [1, 2, 3, 4, 5, 6, 7, 8];

    #[test]
    fn test_matches_openssl_aes_256() {
        // openssl enc -aes-256-cbc -md md5 -k 'secret passphrase' -S 0102030405060708 -P
        let (key, iv) = evp_bytes_to_key(b"secret passphrase", &SALT, 32, 16);
        assert_eq!(
            hex::encode_upper(key.as_slice()),
            "31719004DFC58DB4BB0519B5BE672F4BB5473FD6A0B1130620FDE276DFD5BB5D"
        );
        assert_eq!(hex::encode_upper(iv.as_slice()), "DA39F72B7D87F4B14BA81CE0B37AD210");
    }

    #[test]
    fn test_matches_openssl_des_ede3() {
        let (key, iv) = evp_bytes_to_key(b"secret passphrase", &SALT, 24, 8);
        assert_eq!(
            hex::encode_upper(key.as_slice()),
            "31719004DFC58DB4BB0519B5BE672F4BB5473FD6A0B11306"
        );
        assert_eq!(hex::encode_upper(iv.as_slice()), "20FDE276DFD5BB5D");
    }

    #[test]
    fn test_different_salts_different_keys() {
        let (key1, _) = evp_bytes_to_key(b"password", b"aaaaaaaa", 32, 16);
        let (key2, _) = evp_bytes_to_key(b"password", b"bbbbbbbb", 32, 16);
        assert_ne!(*key1, *key2);
    }

    #[test]
    fn test_empty_passphrase_still_derives() {
        let (key, iv) = evp_bytes_to_key(b"", &SALT, 32, 16);
        assert_eq!(key.len(), 32);
        assert_eq!(iv.len(), 16);
    }
}

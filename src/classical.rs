//! 古典替换密码（Caesar、Vigenère）
//!
//! 只作用于 ASCII 字母表，不依赖任何外部密码学原语，不提供真正的机密性。

pub mod caesar;
pub mod vigenere;

pub use self::caesar::CaesarSystem;
pub use self::vigenere::VigenereSystem;

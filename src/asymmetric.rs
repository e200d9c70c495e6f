//! 非对称加密核心模块

pub mod systems;
pub mod traits;

pub use self::systems::traditional::{KeyPair, RsaOaepSystem};
pub use self::traits::AsymmetricCryptographicSystem;

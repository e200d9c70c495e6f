//! 对称加密核心模块

pub mod kdf;
pub mod systems;

pub use self::systems::aes_cbc::AesCbcSystem;
pub use self::systems::triple_des::TripleDesSystem;
pub use self::systems::xor::XorSystem;

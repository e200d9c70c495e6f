//! 算法系统集合
pub mod traditional;

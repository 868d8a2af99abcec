pub mod combination;
pub mod randomness;
pub mod transfers;

pub use combination::*;

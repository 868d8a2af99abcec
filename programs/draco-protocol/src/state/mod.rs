pub mod airdrop;
pub mod lottery;
pub mod protocol_authority;
pub mod randomness_binding;
pub mod reward_curve;
pub mod ticket;
pub mod treasury;

pub use airdrop::*;
pub use lottery::*;
pub use protocol_authority::*;
pub use randomness_binding::*;
pub use reward_curve::*;
pub use ticket::*;
pub use treasury::*;

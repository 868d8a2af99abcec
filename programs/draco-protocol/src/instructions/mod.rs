pub mod airdrop_claim;
pub mod airdrop_create;
pub mod authority_init;
pub mod authority_update;
pub mod lottery_close;
pub mod lottery_start;
pub mod prize_claim;
pub mod randomness_commit;
pub mod randomness_reveal;
pub mod reward_curve_init;
pub mod reward_curve_update;
pub mod ticket_buy;
pub mod treasury_init;
pub mod treasury_release_cliff;

pub use airdrop_claim::*;
pub use airdrop_create::*;
pub use authority_init::*;
pub use authority_update::*;
pub use lottery_close::*;
pub use lottery_start::*;
pub use prize_claim::*;
pub use randomness_commit::*;
pub use randomness_reveal::*;
pub use reward_curve_init::*;
pub use reward_curve_update::*;
pub use ticket_buy::*;
pub use treasury_init::*;
pub use treasury_release_cliff::*;

use anchor_lang::prelude::*;

#[error_code]
pub enum DracoErrorCode {
    // ─────────────────────────────
    // General / Access Control
    // ─────────────────────────────
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Invalid authority target")]
    InvalidAuthorityTarget,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Record already exists")]
    AlreadyExists,

    #[msg("Invalid time window: start must be before end")]
    InvalidTimeWindow,

    // ─────────────────────────────
    // Lottery setup
    // ─────────────────────────────
    #[msg("Invalid lottery type")]
    InvalidLotteryType,

    #[msg("Stake parameter must be positive")]
    InvalidStakeParameter,

    #[msg("Lottery name or description too long")]
    LotteryTextTooLong,

    // ─────────────────────────────
    // Tickets
    // ─────────────────────────────
    #[msg("Lottery is not open")]
    LotteryNotOpen,

    #[msg("Invalid combination length")]
    InvalidCombinationLength,

    #[msg("Invalid combination token")]
    InvalidCombinationToken,

    #[msg("Invalid stake amount")]
    InvalidStakeAmount,

    // ─────────────────────────────
    // Randomness
    // ─────────────────────────────
    #[msg("Randomness already committed")]
    AlreadyCommitted,

    #[msg("Lottery has not ended yet")]
    TooEarly,

    #[msg("Randomness not committed")]
    NotCommitted,

    #[msg("Randomness already revealed")]
    AlreadyRevealed,

    #[msg("Randomness not ready to be revealed")]
    RevealNotReady,

    #[msg("Randomness account was not committed in this slot")]
    StaleRandomness,

    #[msg("Invalid randomness account data")]
    InvalidRandomnessData,

    #[msg("Incorrect randomness account")]
    IncorrectRandomnessAccount,

    // ─────────────────────────────
    // Claims / Close
    // ─────────────────────────────
    #[msg("Winning combination not set yet")]
    WinningCombinationNotSet,

    #[msg("Ticket not found")]
    TicketNotFound,

    #[msg("Already claimed")]
    AlreadyClaimed,

    #[msg("Insufficient funds to pay the prize")]
    InsufficientFunds,

    #[msg("Lottery is closed")]
    LotteryClosed,

    #[msg("Lottery is not resolved")]
    NotResolved,

    #[msg("Lottery resolved too recently to be closed")]
    TooRecentToClose,

    // ─────────────────────────────
    // Reward curve
    // ─────────────────────────────
    #[msg("Reward factors must be non-decreasing in match count")]
    NonMonotonicRewardFactors,

    // ─────────────────────────────
    // Treasury / vesting
    // ─────────────────────────────
    #[msg("Cliff not reached")]
    CliffNotReached,

    #[msg("Cliff funds already released")]
    AlreadyReleased,

    // ─────────────────────────────
    // Airdrop
    // ─────────────────────────────
    #[msg("Airdrop amount per claim must be positive")]
    InvalidAirdropAmount,

    #[msg("Airdrop supply must cover at least one claim")]
    InvalidAirdropSupply,

    AirdropNameTooLong,

    #[msg("Airdrop has not started yet")]
    AirdropNotStarted,

    #[msg("Airdrop has ended")]
    AirdropEnded,

    #[msg("Airdrop supply exhausted")]
    AirdropSupplyExhausted,
}

pub const BPS_DENOM: u64 = 10_000;

// ─────────────────────────────
// Treasury / vesting
// ─────────────────────────────

/// Six months in seconds (182.5 days).
pub const SIX_MONTHS: i64 = 15_768_000;

// ─────────────────────────────
// Lottery
// ─────────────────────────────

/// Four cards, each encoded as one suit byte followed by one rank byte.
pub const COMBINATION_LENGTH: usize = 8;
pub const CARDS_PER_COMBINATION: usize = COMBINATION_LENGTH / 2;

/// Match-count tiers 0..=4.
pub const MATCH_TIERS: usize = CARDS_PER_COMBINATION + 1;

/// A resolved lottery can be closed once this much time has passed since resolution.
pub const LOTTERY_CLOSE_COOLDOWN: i64 = 10 * 24 * 60 * 60; // 10 days

pub const MAX_LOTTERY_NAME_LEN: usize = 32;
pub const MAX_LOTTERY_DESCRIPTION_LEN: usize = 256;
pub const MAX_AIRDROP_NAME_LEN: usize = 32;

// ─────────────────────────────
// Reward curve defaults
// ─────────────────────────────

// 0x, 0.5x, 2x, 10x, 100x of the stake
pub const DEFAULT_REWARD_FACTORS_BPS: [u32; MATCH_TIERS] = [0, 5_000, 20_000, 100_000, 1_000_000];
pub const DEFAULT_PAY_BASE_WEIGHT_BPS: u32 = 10_000;
// LOCK stakes are large and refunded, so rewards are scaled down 50x
pub const DEFAULT_LOCK_BASE_WEIGHT_BPS: u32 = 200;
pub const DEFAULT_ADJUSTMENT_BPS: [u32; 2] = [10_000, 10_000];
pub const DEFAULT_PAYOUT_CAP: u64 = 1_000_000;

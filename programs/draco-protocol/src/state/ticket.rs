use anchor_lang::prelude::*;
use sha2::{Digest, Sha256};

use crate::constants::COMBINATION_LENGTH;
use crate::utils::combination::Combination;

/// ---------------------------------------------------------------------------
/// Ticket
/// ---------------------------------------------------------------------------
/// One participant's entry in one lottery, keyed by
/// (lottery_id, participant, combination). The combination and amount never
/// change after purchase; only the claim fields are written later.
#[account]
#[derive(Default)]
pub struct Ticket {
    pub lottery_id: u64,

    /// Wallet that bought the ticket. Tickets are not transferable.
    pub participant: Pubkey,

    /// Encoded combination, e.g. `W2HTC8CA`.
    pub combination: [u8; COMBINATION_LENGTH],

    /// Whole tokens staked (exact price for PAY, locked amount for LOCK).
    pub amount: u64,

    pub purchased_at: i64,

    /// 1 once the prize has been claimed.
    pub claimed: u8,
    pub claimed_at: i64,

    /// Match count and total paid out at claim time.
    pub match_count: u8,
    pub prize: u64,

    pub bump: u8,

    /// 0 = uninitialized.
    pub version: u8,

    pub _reserved: [u8; 8],
}

impl Ticket {
    pub const SEED_PREFIX: &'static [u8] = b"ticket";
    pub const VERSION: u8 = 1;

    pub const SIZE: usize =
        8  + // lottery_id
            32 + // participant
            COMBINATION_LENGTH + // combination
            8  + // amount
            8  + // purchased_at
            1  + // claimed
            8  + // claimed_at
            1  + // match_count
            8  + // prize
            1  + // bump
            1  + // version
            8;   // reserved

    /// PDA seed for the combination as submitted. Fixed width so that any
    /// input derives an address and reaches `validate`.
    pub fn combination_seed(combination: &str) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(combination.as_bytes());
        hasher.finalize().into()
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.version != 0
    }

    #[inline]
    pub fn is_claimed(&self) -> bool {
        self.claimed != 0
    }

    pub fn init(
        &mut self,
        lottery_id: u64,
        participant: Pubkey,
        combination: &Combination,
        amount: u64,
        now: i64,
        bump: u8,
    ) {
        self.lottery_id = lottery_id;
        self.participant = participant;
        self.combination = combination.to_bytes();
        self.amount = amount;
        self.purchased_at = now;
        self.claimed = 0;
        self.claimed_at = 0;
        self.match_count = 0;
        self.prize = 0;
        self.bump = bump;
        self.version = Self::VERSION;
        self._reserved = [0; 8];
    }

    pub fn combination(&self) -> Result<Combination> {
        Ok(Combination::from_bytes(&self.combination)?)
    }

    pub fn mark_claimed(&mut self, match_count: u8, prize: u64, now: i64) {
        self.claimed = 1;
        self.claimed_at = now;
        self.match_count = match_count;
        self.prize = prize;
    }
}

use anchor_lang::prelude::*;

use crate::constants::SIX_MONTHS;
use crate::errors::DracoErrorCode;

/// ---------------------------------------------------------------------------
/// Treasury
/// ---------------------------------------------------------------------------
///
/// Accounting record for the protocol's two token vaults:
/// - `vault`: general funds. Seeds new lottery pots, backs prize payouts
///   when a pot runs short, pays airdrops, receives leftover pots on close.
/// - `cliff_vault`: a reserved allotment that unlocks once, six months after
///   the treasury was created.
///
/// Amounts are whole tokens; transfers scale by the mint decimals.
#[account]
#[derive(Default)]
pub struct Treasury {
    /// The single mint this deployment operates on.
    pub mint: Pubkey,

    /// PDA token account holding general funds.
    pub vault: Pubkey,

    /// PDA token account holding the cliff allotment.
    pub cliff_vault: Pubkey,

    // ─────────────────────────────
    // Accounting / stats
    // ─────────────────────────────

    /// Tracked balance of `vault`.
    pub balance: u64,

    /// Total ever credited to `vault` (monotonic, for audit).
    pub total_in: u64,

    /// Total ever debited from `vault` (monotonic, for audit).
    pub total_out: u64,

    // ─────────────────────────────
    // Vesting
    // ─────────────────────────────
    pub created_at: i64,

    /// `created_at + SIX_MONTHS`. Nothing leaves `cliff_vault` before this.
    pub cliff_at: i64,

    pub cliff_allotment: u64,

    /// Cumulative amount released from `cliff_vault`. Never exceeds the allotment.
    pub released: u64,

    /// 1 once the single release has happened, even for a zero allotment.
    pub cliff_released: u8,

    pub bump: u8,
    pub vault_bump: u8,
    pub cliff_vault_bump: u8,

    pub version: u8,
    pub _reserved: [u8; 31],
}

impl Treasury {
    pub const SEED: &'static [u8] = b"treasury_state";
    pub const VAULT_SEED: &'static [u8] = b"treasury";
    pub const CLIFF_VAULT_SEED: &'static [u8] = b"cliff_vault";
    pub const VERSION: u8 = 1;

    pub const SIZE: usize =
        32 + // mint
            32 + // vault
            32 + // cliff_vault
            8  + // balance
            8  + // total_in
            8  + // total_out
            8  + // created_at
            8  + // cliff_at
            8  + // cliff_allotment
            8  + // released
            1  + // cliff_released
            1  + // bump
            1  + // vault_bump
            1  + // cliff_vault_bump
            1  + // version
            31;  // reserved

    pub fn init(
        &mut self,
        mint: Pubkey,
        vault: Pubkey,
        cliff_vault: Pubkey,
        initial_amount: u64,
        cliff_allotment: u64,
        now: i64,
        bumps: (u8, u8, u8),
    ) -> Result<()> {
        require!(self.version == 0, DracoErrorCode::AlreadyExists);

        self.mint = mint;
        self.vault = vault;
        self.cliff_vault = cliff_vault;
        self.balance = initial_amount;
        self.total_in = initial_amount;
        self.total_out = 0;
        self.created_at = now;
        self.cliff_at = now
            .checked_add(SIX_MONTHS)
            .ok_or(DracoErrorCode::MathOverflow)?;
        self.cliff_allotment = cliff_allotment;
        self.released = 0;
        self.cliff_released = 0;
        (self.bump, self.vault_bump, self.cliff_vault_bump) = bumps;
        self.version = Self::VERSION;
        self._reserved = [0; 31];
        Ok(())
    }

    #[inline]
    pub fn can_cover(&self, amount: u64) -> bool {
        self.balance >= amount
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(DracoErrorCode::MathOverflow)?;
        let total_in = self
            .total_in
            .checked_add(amount)
            .ok_or(DracoErrorCode::MathOverflow)?;

        self.balance = balance;
        self.total_in = total_in;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> Result<()> {
        require!(self.can_cover(amount), DracoErrorCode::InsufficientFunds);
        let total_out = self
            .total_out
            .checked_add(amount)
            .ok_or(DracoErrorCode::MathOverflow)?;

        self.balance -= amount;
        self.total_out = total_out;
        Ok(())
    }

    #[inline]
    pub fn is_cliff_released(&self) -> bool {
        self.cliff_released != 0
    }

    /// Releases the whole cliff allotment once `cliff_at` has been reached.
    /// Returns the amount released, which is 0 for an empty allotment. Fails
    /// without writing anything before the cliff or on any later call.
    pub fn release_cliff(&mut self, now: i64) -> Result<u64> {
        require!(now >= self.cliff_at, DracoErrorCode::CliffNotReached);
        require!(!self.is_cliff_released(), DracoErrorCode::AlreadyReleased);

        let amount = self.cliff_allotment;
        self.released = amount;
        self.cliff_released = 1;
        Ok(amount)
    }
}

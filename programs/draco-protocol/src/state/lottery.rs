use anchor_lang::prelude::*;

use crate::constants::{
    COMBINATION_LENGTH, LOTTERY_CLOSE_COOLDOWN, MAX_LOTTERY_DESCRIPTION_LEN, MAX_LOTTERY_NAME_LEN,
};
use crate::errors::DracoErrorCode;
use crate::state::randomness_binding::RandomnessBinding;
use crate::state::reward_curve::RewardCurve;
use crate::state::ticket::Ticket;
use crate::state::treasury::Treasury;
use crate::utils::combination::{validate, Combination};

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LotteryType {
    /// Fixed price: stake must equal the lottery's price exactly.
    Pay = 0,
    /// Variable stake: must exceed the lottery's minimum; refunded on claim.
    Lock = 1,
}

impl LotteryType {
    pub fn from_u8(v: u8) -> Result<Self> {
        match v {
            0 => Ok(LotteryType::Pay),
            1 => Ok(LotteryType::Lock),
            _ => err!(DracoErrorCode::InvalidLotteryType),
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Stored lifecycle tag. "Ended" is never stored: it is `now >= close_at`,
/// re-checked by every operation.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LotteryStatus {
    Uninitialized = 0,
    Open = 1,
    RandomnessCommitted = 2,
    RandomnessRevealed = 3,
    Closed = 4,
}

impl LotteryStatus {
    pub fn from_u8(v: u8) -> Self {
        match v {
            1 => LotteryStatus::Open,
            2 => LotteryStatus::RandomnessCommitted,
            3 => LotteryStatus::RandomnessRevealed,
            4 => LotteryStatus::Closed,
            _ => LotteryStatus::Uninitialized,
        }
    }
}

/// Where a prize is paid from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrizeSource {
    LotteryPot,
    Treasury,
}

/// Result of a successful claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prize {
    pub match_count: u8,
    /// Curve payout, never above the curve's cap.
    pub reward: u64,
    /// LOCK principal handed back with the reward (0 for PAY).
    pub principal_refund: u64,
    pub source: PrizeSource,
}

impl Prize {
    pub fn total(&self) -> u64 {
        self.reward.saturating_add(self.principal_refund)
    }
}

/// Parameters supplied by the operator to `start_lottery`.
#[derive(Clone, Debug)]
pub struct LotteryParams {
    pub lottery_id: u64,
    pub name: String,
    pub description: String,
    pub lottery_type: u8,
    pub open_at: i64,
    pub close_at: i64,
    /// Exact price (PAY) or exclusive minimum (LOCK).
    pub stake: u64,
    /// Seed moved from the treasury into the pot.
    pub initial_pot: u64,
}

/// ---------------------------------------------------------------------------
/// Lottery
/// ---------------------------------------------------------------------------
/// Per-lottery record and state machine:
///
///   Open ──(now >= close_at)──▶ [Ended] ──commit──▶ RandomnessCommitted
///        ──reveal──▶ RandomnessRevealed ──claims…──▶ close ──▶ Closed
///
/// Tokens live in the lottery's vault PDA; `pot` mirrors its balance in
/// whole tokens.
#[account]
#[derive(Default)]
pub struct Lottery {
    pub lottery_id: u64,
    pub name: String,
    pub description: String,

    /// LotteryType as u8.
    pub lottery_type: u8,

    /// LotteryStatus as u8.
    pub status: u8,

    /// Ticket window is [open_at, close_at).
    pub open_at: i64,
    pub close_at: i64,

    /// PAY: exact ticket price. LOCK: stakes must be strictly above this.
    pub stake: u64,

    pub initial_pot: u64,

    /// Tracked balance of the lottery vault (whole tokens).
    pub pot: u64,

    /// Sum of all ticket stakes.
    pub total_staked: u64,

    pub participants_count: u64,
    pub claimed_count: u64,

    /// Encoded winning combination, set on reveal.
    pub winning_combination: Option<[u8; COMBINATION_LENGTH]>,

    /// Timestamp of the reveal (0 until then).
    pub resolved_at: i64,
    pub closed_at: i64,

    pub bump: u8,
    pub vault_bump: u8,
    pub version: u8,
    pub _reserved: [u8; 16],
}

impl Lottery {
    pub const SEED_PREFIX: &'static [u8] = b"lottery";
    pub const VAULT_SEED_PREFIX: &'static [u8] = b"lottery_vault";
    pub const VERSION: u8 = 1;

    /// Space excluding the 8-byte discriminator, at maximum string lengths.
    pub const SIZE: usize =
        8  + // lottery_id
            4 + MAX_LOTTERY_NAME_LEN + // name
            4 + MAX_LOTTERY_DESCRIPTION_LEN + // description
            1  + // lottery_type
            1  + // status
            8  + // open_at
            8  + // close_at
            8  + // stake
            8  + // initial_pot
            8  + // pot
            8  + // total_staked
            8  + // participants_count
            8  + // claimed_count
            1 + COMBINATION_LENGTH + // winning_combination (Option)
            8  + // resolved_at
            8  + // closed_at
            1  + // bump
            1  + // vault_bump
            1  + // version
            16;  // reserved

    #[inline]
    pub fn status(&self) -> LotteryStatus {
        LotteryStatus::from_u8(self.status)
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.status() != LotteryStatus::Uninitialized
    }

    #[inline]
    pub fn is_ended(&self, now: i64) -> bool {
        now >= self.close_at
    }

    pub fn kind(&self) -> Result<LotteryType> {
        LotteryType::from_u8(self.lottery_type)
    }

    // ─────────────────────────────
    // start
    // ─────────────────────────────

    /// Opens the lottery and seeds its pot from the treasury.
    pub fn start(
        &mut self,
        params: LotteryParams,
        treasury: &mut Treasury,
        bump: u8,
        vault_bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), DracoErrorCode::AlreadyExists);
        LotteryType::from_u8(params.lottery_type)?;
        require!(params.open_at < params.close_at, DracoErrorCode::InvalidTimeWindow);
        require!(params.stake > 0, DracoErrorCode::InvalidStakeParameter);
        require!(
            params.name.len() <= MAX_LOTTERY_NAME_LEN
                && params.description.len() <= MAX_LOTTERY_DESCRIPTION_LEN,
            DracoErrorCode::LotteryTextTooLong
        );

        treasury.debit(params.initial_pot)?;

        self.lottery_id = params.lottery_id;
        self.name = params.name;
        self.description = params.description;
        self.lottery_type = params.lottery_type;
        self.status = LotteryStatus::Open as u8;
        self.open_at = params.open_at;
        self.close_at = params.close_at;
        self.stake = params.stake;
        self.initial_pot = params.initial_pot;
        self.pot = params.initial_pot;
        self.total_staked = 0;
        self.participants_count = 0;
        self.claimed_count = 0;
        self.winning_combination = None;
        self.resolved_at = 0;
        self.closed_at = 0;
        self.bump = bump;
        self.vault_bump = vault_bump;
        self.version = Self::VERSION;
        self._reserved = [0; 16];
        Ok(())
    }

    // ─────────────────────────────
    // buy ticket
    // ─────────────────────────────

    /// Open-only actions require the Open tag AND `now` inside [open_at, close_at).
    pub fn ensure_open(&self, now: i64) -> Result<()> {
        require!(
            self.status() == LotteryStatus::Open && now >= self.open_at && now < self.close_at,
            DracoErrorCode::LotteryNotOpen
        );
        Ok(())
    }

    pub fn validate_stake(&self, amount: u64) -> Result<()> {
        let ok = match self.kind()? {
            LotteryType::Pay => amount == self.stake,
            LotteryType::Lock => amount > self.stake,
        };
        require!(ok, DracoErrorCode::InvalidStakeAmount);
        Ok(())
    }

    /// Validates a purchase and, if everything holds, records it on both the
    /// lottery and the (fresh) ticket. The caller moves the tokens.
    pub fn buy_ticket(
        &mut self,
        ticket: &mut Ticket,
        participant: Pubkey,
        combination: &str,
        amount: u64,
        now: i64,
        ticket_bump: u8,
    ) -> Result<Combination> {
        self.ensure_open(now)?;
        let parsed = validate(combination)?;
        self.validate_stake(amount)?;
        require!(!ticket.is_initialized(), DracoErrorCode::AlreadyExists);

        let pot = self
            .pot
            .checked_add(amount)
            .ok_or(DracoErrorCode::MathOverflow)?;
        let total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(DracoErrorCode::MathOverflow)?;
        let participants_count = self
            .participants_count
            .checked_add(1)
            .ok_or(DracoErrorCode::MathOverflow)?;

        self.pot = pot;
        self.total_staked = total_staked;
        self.participants_count = participants_count;
        ticket.init(self.lottery_id, participant, &parsed, amount, now, ticket_bump);

        Ok(parsed)
    }

    // ─────────────────────────────
    // randomness
    // ─────────────────────────────

    /// Lottery-side commit preconditions, checked before the oracle account
    /// is even looked at.
    pub fn ensure_commit_allowed(&self, now: i64) -> Result<()> {
        require!(self.status() != LotteryStatus::Closed, DracoErrorCode::LotteryClosed);
        require!(self.is_ended(now), DracoErrorCode::TooEarly);
        require!(
            self.status() == LotteryStatus::Open,
            DracoErrorCode::AlreadyCommitted
        );
        Ok(())
    }

    pub fn commit_randomness(
        &mut self,
        binding: &mut RandomnessBinding,
        randomness_account: Pubkey,
        now: i64,
        slot: u64,
        binding_bump: u8,
    ) -> Result<()> {
        self.ensure_commit_allowed(now)?;

        binding.bind_commitment(self.lottery_id, randomness_account, now, slot, binding_bump)?;
        self.status = LotteryStatus::RandomnessCommitted as u8;
        Ok(())
    }

    pub fn reveal_randomness(
        &mut self,
        binding: &mut RandomnessBinding,
        randomness_account: Pubkey,
        raw: Option<[u8; 32]>,
        now: i64,
    ) -> Result<Combination> {
        require!(self.status() != LotteryStatus::Closed, DracoErrorCode::LotteryClosed);
        require!(
            matches!(
                self.status(),
                LotteryStatus::RandomnessCommitted | LotteryStatus::RandomnessRevealed
            ),
            DracoErrorCode::NotCommitted
        );

        // account mismatch and double reveal are reported by the binding
        let winning = binding.complete_reveal(self.lottery_id, randomness_account, raw, now)?;

        self.winning_combination = Some(winning.to_bytes());
        self.resolved_at = now;
        self.status = LotteryStatus::RandomnessRevealed as u8;
        Ok(winning)
    }

    pub fn winning(&self) -> Result<Combination> {
        let bytes = self
            .winning_combination
            .ok_or(DracoErrorCode::WinningCombinationNotSet)?;
        Ok(Combination::from_bytes(&bytes)?)
    }

    // ─────────────────────────────
    // claim
    // ─────────────────────────────

    /// Scores the ticket against the winning combination with the curve as it
    /// is right now, picks a funding source and marks the ticket claimed.
    /// All checks run before any write.
    pub fn claim_prize(
        &mut self,
        ticket: &mut Ticket,
        participant: Pubkey,
        curve: &RewardCurve,
        treasury: &mut Treasury,
        now: i64,
    ) -> Result<Prize> {
        require!(self.status() != LotteryStatus::Closed, DracoErrorCode::LotteryClosed);
        require!(
            self.status() == LotteryStatus::RandomnessRevealed,
            DracoErrorCode::WinningCombinationNotSet
        );
        require!(
            ticket.is_initialized()
                && ticket.lottery_id == self.lottery_id
                && ticket.participant == participant,
            DracoErrorCode::TicketNotFound
        );
        require!(!ticket.is_claimed(), DracoErrorCode::AlreadyClaimed);

        let lottery_type = self.kind()?;
        let winning = self.winning()?;
        let match_count = ticket.combination()?.match_count(&winning);

        let reward = curve.payout(lottery_type, match_count, ticket.amount);
        let principal_refund = match lottery_type {
            LotteryType::Pay => 0,
            LotteryType::Lock => ticket.amount,
        };
        let total = reward
            .checked_add(principal_refund)
            .ok_or(DracoErrorCode::MathOverflow)?;

        let source = if self.pot >= total {
            PrizeSource::LotteryPot
        } else if treasury.can_cover(total) {
            PrizeSource::Treasury
        } else {
            return err!(DracoErrorCode::InsufficientFunds);
        };

        let claimed_count = self
            .claimed_count
            .checked_add(1)
            .ok_or(DracoErrorCode::MathOverflow)?;

        match source {
            PrizeSource::LotteryPot => self.pot -= total,
            PrizeSource::Treasury => treasury.debit(total)?,
        }
        self.claimed_count = claimed_count;
        ticket.mark_claimed(match_count, total, now);

        Ok(Prize {
            match_count,
            reward,
            principal_refund,
            source,
        })
    }

    // ─────────────────────────────
    // close
    // ─────────────────────────────

    /// The moment the close cooldown counts from: the reveal, or the end of
    /// the window for a lottery that never sold a ticket.
    pub fn resolution_timestamp(&self, now: i64) -> Result<i64> {
        match self.status() {
            LotteryStatus::RandomnessRevealed => Ok(self.resolved_at),
            LotteryStatus::Open | LotteryStatus::RandomnessCommitted
                if self.participants_count == 0 && self.is_ended(now) =>
            {
                Ok(self.close_at)
            }
            LotteryStatus::Closed => err!(DracoErrorCode::LotteryClosed),
            _ => err!(DracoErrorCode::NotResolved),
        }
    }

    /// Closes the lottery and hands what is left of the pot back to the
    /// treasury. Unclaimed tickets are forfeited. Returns the amount returned.
    pub fn finalize_close(&mut self, treasury: &mut Treasury, now: i64) -> Result<u64> {
        let resolution = self.resolution_timestamp(now)?;
        let closable_at = resolution
            .checked_add(LOTTERY_CLOSE_COOLDOWN)
            .ok_or(DracoErrorCode::MathOverflow)?;
        require!(now >= closable_at, DracoErrorCode::TooRecentToClose);

        let remaining = self.pot;
        treasury.credit(remaining)?;

        self.pot = 0;
        self.status = LotteryStatus::Closed as u8;
        self.closed_at = now;
        Ok(remaining)
    }
}

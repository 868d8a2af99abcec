use anchor_lang::prelude::*;

use crate::constants::MAX_AIRDROP_NAME_LEN;
use crate::errors::DracoErrorCode;
use crate::state::treasury::Treasury;

/// Fixed-amount token giveaway paid from the treasury vault during
/// `[start_at, end_at]`, one claim per wallet, until `supply` is used up.
#[account]
#[derive(Default)]
pub struct Airdrop {
    pub airdrop_id: u64,
    pub name: String,

    /// Total whole tokens that may be handed out.
    pub supply: u64,

    /// Whole tokens handed out so far. Never exceeds `supply`.
    pub supplied: u64,

    pub amount_per_claim: u64,

    /// Both bounds inclusive.
    pub start_at: i64,
    pub end_at: i64,

    pub claims_count: u64,
    pub bump: u8,
    pub version: u8,
}

impl Airdrop {
    pub const SEED_PREFIX: &'static [u8] = b"airdrop";
    pub const VERSION: u8 = 1;

    pub const SIZE: usize =
        8  + // airdrop_id
            4 + MAX_AIRDROP_NAME_LEN + // name
            8  + // supply
            8  + // supplied
            8  + // amount_per_claim
            8  + // start_at
            8  + // end_at
            8  + // claims_count
            1  + // bump
            1;   // version

    #[allow(clippy::too_many_arguments)]
    pub fn create(
        &mut self,
        airdrop_id: u64,
        name: String,
        supply: u64,
        amount_per_claim: u64,
        start_at: i64,
        end_at: i64,
        bump: u8,
    ) -> Result<()> {
        require!(self.version == 0, DracoErrorCode::AlreadyExists);
        require!(start_at < end_at, DracoErrorCode::InvalidTimeWindow);
        require!(amount_per_claim > 0, DracoErrorCode::InvalidAirdropAmount);
        require!(supply >= amount_per_claim, DracoErrorCode::InvalidAirdropSupply);
        require!(name.len() <= MAX_AIRDROP_NAME_LEN, DracoErrorCode::AirdropNameTooLong);

        self.airdrop_id = airdrop_id;
        self.name = name;
        self.supply = supply;
        self.supplied = 0;
        self.amount_per_claim = amount_per_claim;
        self.start_at = start_at;
        self.end_at = end_at;
        self.claims_count = 0;
        self.bump = bump;
        self.version = Self::VERSION;
        Ok(())
    }

    /// Records one claim and debits the treasury. Returns the amount to
    /// transfer (whole tokens).
    pub fn claim(
        &mut self,
        record: &mut AirdropClaim,
        claimer: Pubkey,
        treasury: &mut Treasury,
        now: i64,
        record_bump: u8,
    ) -> Result<u64> {
        require!(now >= self.start_at, DracoErrorCode::AirdropNotStarted);
        require!(now <= self.end_at, DracoErrorCode::AirdropEnded);
        require!(!record.is_initialized(), DracoErrorCode::AlreadyClaimed);

        let amount = self.amount_per_claim;
        let supplied = self
            .supplied
            .checked_add(amount)
            .filter(|s| *s <= self.supply)
            .ok_or(DracoErrorCode::AirdropSupplyExhausted)?;
        let claims_count = self
            .claims_count
            .checked_add(1)
            .ok_or(DracoErrorCode::MathOverflow)?;

        treasury.debit(amount)?;

        self.supplied = supplied;
        self.claims_count = claims_count;

        record.airdrop_id = self.airdrop_id;
        record.claimer = claimer;
        record.amount = amount;
        record.claimed_at = now;
        record.bump = record_bump;
        record.version = AirdropClaim::VERSION;
        Ok(amount)
    }
}

/// Marker that `claimer` has taken their share of one airdrop.
#[account]
#[derive(Default)]
pub struct AirdropClaim {
    pub airdrop_id: u64,
    pub claimer: Pubkey,
    pub amount: u64,
    pub claimed_at: i64,
    pub bump: u8,
    pub version: u8,
}

impl AirdropClaim {
    pub const SEED_PREFIX: &'static [u8] = b"airdrop_claim";
    pub const VERSION: u8 = 1;

    pub const SIZE: usize = 8 + 32 + 8 + 8 + 1 + 1;

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.version != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 1_700_000_000;

    fn treasury(balance: u64) -> Treasury {
        let mut t = Treasury::default();
        t.init(
            Pubkey::new_from_array([1; 32]),
            Pubkey::new_from_array([2; 32]),
            Pubkey::new_from_array([3; 32]),
            balance,
            0,
            T0,
            (255, 254, 253),
        )
        .unwrap();
        t
    }

    fn airdrop(supply: u64, per_claim: u64) -> Airdrop {
        let mut a = Airdrop::default();
        a.create(1, "Launch".to_string(), supply, per_claim, T0, T0 + 3_600, 250)
            .unwrap();
        a
    }

    fn wallet(n: u8) -> Pubkey {
        Pubkey::new_from_array([n; 32])
    }

    #[test]
    fn airdrop_sizes_match_serialization() {
        let mut a = airdrop(1_000, 10);
        a.name = "x".repeat(MAX_AIRDROP_NAME_LEN);
        let mut bytes = Vec::new();
        a.serialize(&mut bytes).unwrap();
        assert_eq!(bytes.len(), Airdrop::SIZE);

        let mut bytes = Vec::new();
        AirdropClaim::default().serialize(&mut bytes).unwrap();
        assert_eq!(bytes.len(), AirdropClaim::SIZE);
    }

    #[test]
    fn create_validates_parameters() {
        let mut a = Airdrop::default();
        let name = || "Launch".to_string();

        let res = a.create(1, name(), 100, 10, T0, T0, 0);
        assert_eq!(res.unwrap_err(), error!(DracoErrorCode::InvalidTimeWindow));

        let res = a.create(1, name(), 100, 0, T0, T0 + 1, 0);
        assert_eq!(res.unwrap_err(), error!(DracoErrorCode::InvalidAirdropAmount));

        let res = a.create(1, name(), 0, 10, T0, T0 + 1, 0);
        assert_eq!(res.unwrap_err(), error!(DracoErrorCode::InvalidAirdropSupply));
        let res = a.create(1, name(), 9, 10, T0, T0 + 1, 0);
        assert_eq!(res.unwrap_err(), error!(DracoErrorCode::InvalidAirdropSupply));

        let res = a.create(1, "n".repeat(MAX_AIRDROP_NAME_LEN + 1), 100, 10, T0, T0 + 1, 0);
        assert_eq!(res.unwrap_err(), error!(DracoErrorCode::AirdropNameTooLong));

        assert_eq!(a.version, 0);
    }

    #[test]
    fn claim_respects_window_bounds() {
        let mut a = airdrop(1_000, 10);
        let mut t = treasury(1_000);

        let mut early = AirdropClaim::default();
        let res = a.claim(&mut early, wallet(1), &mut t, T0 - 1, 0);
        assert_eq!(res.unwrap_err(), error!(DracoErrorCode::AirdropNotStarted));

        let mut late = AirdropClaim::default();
        let res = a.claim(&mut late, wallet(1), &mut t, T0 + 3_601, 0);
        assert_eq!(res.unwrap_err(), error!(DracoErrorCode::AirdropEnded));

        let mut first = AirdropClaim::default();
        assert_eq!(a.claim(&mut first, wallet(1), &mut t, T0, 9).unwrap(), 10);
        let mut last = AirdropClaim::default();
        assert_eq!(a.claim(&mut last, wallet(2), &mut t, T0 + 3_600, 9).unwrap(), 10);

        assert_eq!(a.supplied, 20);
        assert_eq!(t.balance, 980);
        assert_eq!(first.claimer, wallet(1));
    }

    #[test]
    fn one_claim_per_wallet() {
        let mut a = airdrop(1_000, 10);
        let mut t = treasury(1_000);
        let mut record = AirdropClaim::default();

        a.claim(&mut record, wallet(1), &mut t, T0 + 1, 9).unwrap();
        let res = a.claim(&mut record, wallet(1), &mut t, T0 + 2, 9);
        assert_eq!(res.unwrap_err(), error!(DracoErrorCode::AlreadyClaimed));
        assert_eq!(a.supplied, 10);
        assert_eq!(record.claimed_at, T0 + 1);
    }

    #[test]
    fn supply_is_never_exceeded() {
        let mut a = airdrop(25, 10);
        let mut t = treasury(1_000);

        for n in 1..=2 {
            let mut record = AirdropClaim::default();
            a.claim(&mut record, wallet(n), &mut t, T0 + 1, 9).unwrap();
        }

        let mut record = AirdropClaim::default();
        let res = a.claim(&mut record, wallet(3), &mut t, T0 + 1, 9);
        assert_eq!(res.unwrap_err(), error!(DracoErrorCode::AirdropSupplyExhausted));
        assert!(!record.is_initialized());
        assert_eq!(a.supplied, 20);
        assert_eq!(a.claims_count, 2);
        assert_eq!(t.balance, 980);
    }

    #[test]
    fn claim_fails_when_treasury_is_empty() {
        let mut a = airdrop(1_000, 10);
        let mut t = treasury(5);
        let mut record = AirdropClaim::default();

        let res = a.claim(&mut record, wallet(1), &mut t, T0 + 1, 9);
        assert_eq!(res.unwrap_err(), error!(DracoErrorCode::InsufficientFunds));
        assert_eq!(a.supplied, 0);
        assert!(!record.is_initialized());
    }
}

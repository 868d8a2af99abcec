use anchor_lang::prelude::*;

use crate::constants::{
    BPS_DENOM, DEFAULT_ADJUSTMENT_BPS, DEFAULT_LOCK_BASE_WEIGHT_BPS, DEFAULT_PAYOUT_CAP,
    DEFAULT_PAY_BASE_WEIGHT_BPS, DEFAULT_REWARD_FACTORS_BPS, MATCH_TIERS,
};
use crate::errors::DracoErrorCode;
use crate::state::lottery::LotteryType;

/// Payout factors and scaling weights for one lottery type.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypeCurve {
    /// Payout factor per match count (index 0..=4), in bps of the stake.
    pub factors_bps: [u32; MATCH_TIERS],

    /// Base scaling weight in bps.
    pub base_weight_bps: u32,

    /// Two optional adjustment weights in bps (10_000 = neutral).
    pub adjustment_bps: [u32; 2],
}

impl TypeCurve {
    pub const SIZE: usize =
        4 * MATCH_TIERS + // factors_bps
            4 +           // base_weight_bps
            4 * 2;        // adjustment_bps

    pub fn default_pay() -> Self {
        Self {
            factors_bps: DEFAULT_REWARD_FACTORS_BPS,
            base_weight_bps: DEFAULT_PAY_BASE_WEIGHT_BPS,
            adjustment_bps: DEFAULT_ADJUSTMENT_BPS,
        }
    }

    pub fn default_lock() -> Self {
        Self {
            factors_bps: DEFAULT_REWARD_FACTORS_BPS,
            base_weight_bps: DEFAULT_LOCK_BASE_WEIGHT_BPS,
            adjustment_bps: DEFAULT_ADJUSTMENT_BPS,
        }
    }

    pub fn is_monotonic(&self) -> bool {
        self.factors_bps.windows(2).all(|w| w[0] <= w[1])
    }

    /// `stake * factor * base * adj0 * adj1 / BPS^4`, capped.
    ///
    /// Any intermediate overflow means the uncapped value is far above every
    /// u64, so it saturates to `cap`.
    pub fn payout(&self, match_count: u8, stake: u64, cap: u64) -> u64 {
        let tier = (match_count as usize).min(MATCH_TIERS - 1);
        let denom = (BPS_DENOM as u128).pow(4);

        let numerator = [
            self.factors_bps[tier],
            self.base_weight_bps,
            self.adjustment_bps[0],
            self.adjustment_bps[1],
        ]
        .iter()
        .try_fold(stake as u128, |acc, &w| acc.checked_mul(w as u128));

        match numerator {
            Some(n) => u64::try_from(n / denom).unwrap_or(u64::MAX).min(cap),
            None => cap,
        }
    }
}

/// ---------------------------------------------------------------------------
/// RewardCurve
/// ---------------------------------------------------------------------------
///
/// Global payout configuration shared by every lottery. Replaced as a whole
/// by `update_reward_factors`; claims read whatever is current at claim time.
#[account]
#[derive(Default)]
pub struct RewardCurve {
    pub pay: TypeCurve,
    pub lock: TypeCurve,

    /// Upper bound for the reward part of any single claim (whole tokens).
    pub payout_cap: u64,

    pub updated_at: i64,
    pub bump: u8,
    pub _reserved: [u8; 16],
}

impl RewardCurve {
    pub const SEED: &'static [u8] = b"reward_curve";
    pub const SIZE: usize =
        TypeCurve::SIZE + // pay
            TypeCurve::SIZE + // lock
            8  + // payout_cap
            8  + // updated_at
            1  + // bump
            16;  // reserved

    pub fn set_defaults(&mut self, now: i64, bump: u8) {
        self.pay = TypeCurve::default_pay();
        self.lock = TypeCurve::default_lock();
        self.payout_cap = DEFAULT_PAYOUT_CAP;
        self.updated_at = now;
        self.bump = bump;
        self._reserved = [0; 16];
    }

    /// Replaces both tables and the cap at once. Nothing is written unless
    /// both tables are non-decreasing.
    pub fn replace(&mut self, pay: TypeCurve, lock: TypeCurve, payout_cap: u64, now: i64) -> Result<()> {
        require!(
            pay.is_monotonic() && lock.is_monotonic(),
            DracoErrorCode::NonMonotonicRewardFactors
        );

        self.pay = pay;
        self.lock = lock;
        self.payout_cap = payout_cap;
        self.updated_at = now;
        Ok(())
    }

    pub fn curve_for(&self, lottery_type: LotteryType) -> &TypeCurve {
        match lottery_type {
            LotteryType::Pay => &self.pay,
            LotteryType::Lock => &self.lock,
        }
    }

    pub fn payout(&self, lottery_type: LotteryType, match_count: u8, stake: u64) -> u64 {
        self.curve_for(lottery_type)
            .payout(match_count, stake, self.payout_cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve() -> RewardCurve {
        let mut c = RewardCurve::default();
        c.set_defaults(1_000, 254);
        c
    }

    #[test]
    fn reward_curve_size_matches_serialization() {
        let mut bytes = Vec::new();
        curve().serialize(&mut bytes).unwrap();
        assert_eq!(bytes.len(), RewardCurve::SIZE);
    }

    #[test]
    fn pay_payout_follows_default_table() {
        let c = curve();
        assert_eq!(c.payout(LotteryType::Pay, 0, 50), 0);
        assert_eq!(c.payout(LotteryType::Pay, 1, 50), 25);
        assert_eq!(c.payout(LotteryType::Pay, 2, 50), 100);
        assert_eq!(c.payout(LotteryType::Pay, 3, 50), 500);
        assert_eq!(c.payout(LotteryType::Pay, 4, 50), 5_000);
    }

    #[test]
    fn lock_payout_is_scaled_by_base_weight() {
        let c = curve();
        // 501 * 10x * (200 / 10_000) = 100.2 -> 100
        assert_eq!(c.payout(LotteryType::Lock, 3, 501), 100);
        assert_eq!(c.payout(LotteryType::Lock, 4, 5_000), 10_000);
    }

    #[test]
    fn adjustment_weights_compose_with_base() {
        let mut c = curve();
        let mut pay = TypeCurve::default_pay();
        pay.base_weight_bps = 20_000; // 2x
        pay.adjustment_bps = [5_000, 15_000]; // 0.5x, 1.5x
        c.replace(pay, TypeCurve::default_lock(), 1_000_000, 2_000).unwrap();

        // 100 * 2x(factor) * 2 * 0.5 * 1.5 = 300
        assert_eq!(c.payout(LotteryType::Pay, 2, 100), 300);
    }

    #[test]
    fn payout_is_monotonic_and_capped() {
        let c = curve();
        for lottery_type in [LotteryType::Pay, LotteryType::Lock] {
            for stake in [0u64, 1, 50, 501, 123_456, u64::MAX] {
                let mut previous = 0;
                for m in 0..=4u8 {
                    let p = c.payout(lottery_type, m, stake);
                    assert!(p >= previous, "type={:?} stake={} m={}", lottery_type, stake, m);
                    assert!(p <= c.payout_cap);
                    previous = p;
                }
            }
        }
    }

    #[test]
    fn overflow_saturates_to_cap() {
        let mut c = curve();
        let huge = TypeCurve {
            factors_bps: [u32::MAX; MATCH_TIERS],
            base_weight_bps: u32::MAX,
            adjustment_bps: [u32::MAX, u32::MAX],
        };
        c.replace(huge, huge, 777, 0).unwrap();
        assert_eq!(c.payout(LotteryType::Pay, 4, u64::MAX), 777);
        assert_eq!(c.payout(LotteryType::Pay, 0, 0), 0);
    }

    #[test]
    fn match_count_above_four_uses_top_tier() {
        let c = curve();
        assert_eq!(
            c.payout(LotteryType::Pay, 9, 50),
            c.payout(LotteryType::Pay, 4, 50)
        );
    }

    #[test]
    fn non_monotonic_update_is_rejected_without_mutation() {
        let mut c = curve();
        let before = (c.pay, c.lock, c.payout_cap, c.updated_at);

        let mut bad = TypeCurve::default_pay();
        bad.factors_bps = [0, 20_000, 10_000, 100_000, 1_000_000];

        let res = c.replace(TypeCurve::default_pay(), bad, 5, 9_999);
        assert_eq!(res.unwrap_err(), error!(DracoErrorCode::NonMonotonicRewardFactors));
        assert_eq!((c.pay, c.lock, c.payout_cap, c.updated_at), before);
    }

    #[test]
    fn update_applies_to_subsequent_payouts_only() {
        let mut c = curve();
        let settled = c.payout(LotteryType::Pay, 2, 50);

        let mut pay = TypeCurve::default_pay();
        pay.factors_bps = [0, 10_000, 40_000, 200_000, 2_000_000];
        c.replace(pay, TypeCurve::default_lock(), DEFAULT_PAYOUT_CAP, 5_000).unwrap();

        assert_eq!(settled, 100);
        assert_eq!(c.payout(LotteryType::Pay, 2, 50), 200);
    }
}

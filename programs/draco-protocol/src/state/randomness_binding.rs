use anchor_lang::prelude::*;
use sha2::{Digest, Sha256};

use crate::errors::DracoErrorCode;
use crate::utils::combination::Combination;

/// ---------------------------------------------------------------------------
/// RandomnessBinding
/// ---------------------------------------------------------------------------
/// Binds one lottery to one oracle randomness account.
///
/// Commit and reveal are separate, independently validated transitions:
/// - commit records which oracle account will decide the lottery, after the
///   ticket window has closed and before its value is known;
/// - reveal accepts the settled value from that same account only.
#[account]
#[derive(Default)]
pub struct RandomnessBinding {
    pub lottery_id: u64,

    /// Oracle randomness account (default key until committed).
    pub randomness_account: Pubkey,

    pub committed_at: i64,
    pub commit_slot: u64,

    pub revealed_at: i64,

    /// Raw settled oracle value, set on reveal.
    pub revealed_value: Option<[u8; 32]>,

    /// SHA-256 over (domain, lottery_id, raw value) for off-chain audit.
    pub reveal_digest: [u8; 32],

    pub bump: u8,
    pub _reserved: [u8; 8],
}

impl RandomnessBinding {
    pub const SEED_PREFIX: &'static [u8] = b"randomness";
    pub const DIGEST_DOMAIN: &'static [u8] = b"DRACO_REVEAL_V1";

    pub const SIZE: usize =
        8  + // lottery_id
            32 + // randomness_account
            8  + // committed_at
            8  + // commit_slot
            8  + // revealed_at
            1 + 32 + // revealed_value (Option)
            32 + // reveal_digest
            1  + // bump
            8;   // reserved

    #[inline]
    pub fn is_bound(&self) -> bool {
        self.randomness_account != Pubkey::default()
    }

    #[inline]
    pub fn is_revealed(&self) -> bool {
        self.revealed_value.is_some()
    }

    pub fn bind_commitment(
        &mut self,
        lottery_id: u64,
        randomness_account: Pubkey,
        now: i64,
        slot: u64,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_bound(), DracoErrorCode::AlreadyCommitted);
        require!(
            randomness_account != Pubkey::default(),
            DracoErrorCode::InvalidRandomnessData
        );

        self.lottery_id = lottery_id;
        self.randomness_account = randomness_account;
        self.committed_at = now;
        self.commit_slot = slot;
        self.revealed_at = 0;
        self.revealed_value = None;
        self.reveal_digest = [0; 32];
        self.bump = bump;
        self._reserved = [0; 8];
        Ok(())
    }

    /// Accepts the oracle value for `lottery_id` and derives the winning
    /// combination from it. `raw` is `None` while the oracle has not settled.
    pub fn complete_reveal(
        &mut self,
        lottery_id: u64,
        randomness_account: Pubkey,
        raw: Option<[u8; 32]>,
        now: i64,
    ) -> Result<Combination> {
        require!(
            self.is_bound() && self.lottery_id == lottery_id,
            DracoErrorCode::NotCommitted
        );
        require_keys_eq!(
            self.randomness_account,
            randomness_account,
            DracoErrorCode::IncorrectRandomnessAccount
        );
        require!(!self.is_revealed(), DracoErrorCode::AlreadyRevealed);

        let raw = raw.ok_or(DracoErrorCode::RevealNotReady)?;

        self.revealed_value = Some(raw);
        self.revealed_at = now;
        self.reveal_digest = reveal_digest(lottery_id, &raw);

        Ok(Combination::from_randomness(&raw))
    }
}

pub fn reveal_digest(lottery_id: u64, raw: &[u8; 32]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(RandomnessBinding::DIGEST_DOMAIN);
    hasher.update(lottery_id.to_le_bytes());
    hasher.update(raw);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oracle() -> Pubkey {
        Pubkey::new_from_array([9; 32])
    }

    #[test]
    fn binding_size_matches_serialization() {
        let mut b = RandomnessBinding::default();
        b.bind_commitment(1, oracle(), 100, 42, 250).unwrap();
        b.complete_reveal(1, oracle(), Some([7; 32]), 200).unwrap();

        let mut bytes = Vec::new();
        b.serialize(&mut bytes).unwrap();
        assert_eq!(bytes.len(), RandomnessBinding::SIZE);
    }

    #[test]
    fn commit_is_one_shot() {
        let mut b = RandomnessBinding::default();
        b.bind_commitment(1, oracle(), 100, 42, 250).unwrap();

        let res = b.bind_commitment(1, Pubkey::new_from_array([8; 32]), 101, 43, 250);
        assert_eq!(res.unwrap_err(), error!(DracoErrorCode::AlreadyCommitted));
        assert_eq!(b.randomness_account, oracle());
        assert_eq!(b.commit_slot, 42);
    }

    #[test]
    fn reveal_requires_commit() {
        let mut b = RandomnessBinding::default();
        let res = b.complete_reveal(1, oracle(), Some([7; 32]), 200);
        assert_eq!(res.unwrap_err(), error!(DracoErrorCode::NotCommitted));
    }

    #[test]
    fn reveal_rejects_other_lottery_or_account() {
        let mut b = RandomnessBinding::default();
        b.bind_commitment(1, oracle(), 100, 42, 250).unwrap();

        let res = b.complete_reveal(2, oracle(), Some([7; 32]), 200);
        assert_eq!(res.unwrap_err(), error!(DracoErrorCode::NotCommitted));

        let res = b.complete_reveal(1, Pubkey::new_from_array([8; 32]), Some([7; 32]), 200);
        assert_eq!(res.unwrap_err(), error!(DracoErrorCode::IncorrectRandomnessAccount));
        assert!(!b.is_revealed());
    }

    #[test]
    fn unsettled_oracle_is_retryable() {
        let mut b = RandomnessBinding::default();
        b.bind_commitment(1, oracle(), 100, 42, 250).unwrap();

        for _ in 0..3 {
            let res = b.complete_reveal(1, oracle(), None, 150);
            assert_eq!(res.unwrap_err(), error!(DracoErrorCode::RevealNotReady));
            assert!(!b.is_revealed());
        }

        let combo = b.complete_reveal(1, oracle(), Some([0; 32]), 160).unwrap();
        assert_eq!(combo.to_string(), "S2S3S4S5");
        assert_eq!(b.revealed_at, 160);
        assert_eq!(b.reveal_digest, reveal_digest(1, &[0; 32]));

        let res = b.complete_reveal(1, oracle(), Some([1; 32]), 170);
        assert_eq!(res.unwrap_err(), error!(DracoErrorCode::AlreadyRevealed));
        assert_eq!(b.revealed_value, Some([0; 32]));
    }

    #[test]
    fn same_value_reveals_same_combination() {
        let raw = [0xA5; 32];

        let mut first = RandomnessBinding::default();
        first.bind_commitment(1, oracle(), 100, 42, 250).unwrap();
        let mut second = RandomnessBinding::default();
        second.bind_commitment(1, oracle(), 300, 77, 250).unwrap();

        assert_eq!(
            first.complete_reveal(1, oracle(), Some(raw), 200).unwrap(),
            second.complete_reveal(1, oracle(), Some(raw), 400).unwrap()
        );
        assert_eq!(first.reveal_digest, second.reveal_digest);
        assert_ne!(reveal_digest(1, &raw), reveal_digest(2, &raw));
    }
}

use anchor_lang::prelude::*;
use switchboard_on_demand::RandomnessAccountData;

use crate::errors::DracoErrorCode;

/// Parses a Switchboard On-Demand randomness account and returns its seed slot.
pub fn read_seed_slot(randomness_account: &AccountInfo) -> Result<u64> {
    let data = RandomnessAccountData::parse(randomness_account.data.borrow())
        .map_err(|_| DracoErrorCode::InvalidRandomnessData)?;
    Ok(data.seed_slot)
}

/// A commitment is only accepted when the oracle seeded it in the slot
/// right before the current one, i.e. its value cannot be known yet.
pub fn ensure_fresh_seed(seed_slot: u64, current_slot: u64) -> Result<()> {
    let expected = current_slot
        .checked_sub(1)
        .ok_or(DracoErrorCode::StaleRandomness)?;
    require!(seed_slot == expected, DracoErrorCode::StaleRandomness);
    Ok(())
}

/// Returns the settled 32-byte value, or `None` while the oracle has not
/// revealed it for this slot. Malformed accounts are an error.
pub fn read_settled_value(
    randomness_account: &AccountInfo,
    current_slot: u64,
) -> Result<Option<[u8; 32]>> {
    let data = RandomnessAccountData::parse(randomness_account.data.borrow())
        .map_err(|_| DracoErrorCode::InvalidRandomnessData)?;
    Ok(data.get_value(current_slot).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_must_be_from_previous_slot() {
        ensure_fresh_seed(99, 100).unwrap();

        for (seed, current) in [(100, 100), (98, 100), (101, 100), (0, 0)] {
            let res = ensure_fresh_seed(seed, current);
            assert_eq!(res.unwrap_err(), error!(DracoErrorCode::StaleRandomness));
        }
    }
}

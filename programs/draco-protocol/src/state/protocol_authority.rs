use anchor_lang::prelude::*;

use crate::errors::DracoErrorCode;

/// Global authority PDA.
///
/// Holds the single administrator key and points at the treasury and
/// reward-curve records. `config_version` increases on every reward-curve
/// change so off-chain readers can detect updates.
#[account]
#[derive(Default)]
pub struct ProtocolAuthority {
    /// Program admin authority.
    pub authority: Pubkey,

    /// Incremented whenever the reward curve is replaced.
    pub config_version: u32,

    /// Treasury record, default until `initialize_treasury`.
    pub treasury: Pubkey,

    /// Reward-curve record, default until `initialize_reward_curve`.
    pub reward_curve: Pubkey,

    pub bump: u8,
    pub version: u8,

    /// Reserved space for future upgrades.
    pub _reserved: [u8; 16],
}

impl ProtocolAuthority {
    pub const SEED: &'static [u8] = b"protocol_authority";
    pub const VERSION: u8 = 1;

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        32 + // authority
            4  + // config_version
            32 + // treasury
            32 + // reward_curve
            1  + // bump
            1  + // version
            16;  // reserved

    pub fn init(&mut self, authority: Pubkey, bump: u8) -> Result<()> {
        require!(self.version == 0, DracoErrorCode::AlreadyExists);

        self.authority = authority;
        self.config_version = 0;
        self.treasury = Pubkey::default();
        self.reward_curve = Pubkey::default();
        self.bump = bump;
        self.version = Self::VERSION;
        self._reserved = [0; 16];
        Ok(())
    }

    pub fn bump_config_version(&mut self) -> Result<u32> {
        self.config_version = self
            .config_version
            .checked_add(1)
            .ok_or(DracoErrorCode::MathOverflow)?;
        Ok(self.config_version)
    }

    /// Hands control to `new_authority`. `self_key` is this record's own
    /// address and `program_id` the running program; neither can hold it.
    pub fn set_authority(
        &mut self,
        new_authority: Pubkey,
        self_key: Pubkey,
        program_id: Pubkey,
    ) -> Result<()> {
        require!(
            new_authority != Pubkey::default()
                && new_authority != anchor_lang::system_program::ID
                && new_authority != program_id
                && new_authority != self_key,
            DracoErrorCode::InvalidAuthorityTarget
        );

        self.authority = new_authority;
        Ok(())
    }
}

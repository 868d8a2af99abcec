use anchor_lang::prelude::*;

use crate::errors::DracoErrorCode;
use crate::state::protocol_authority::ProtocolAuthority;
use crate::state::reward_curve::{RewardCurve, TypeCurve};

#[derive(Accounts)]
pub struct UpdateRewardFactors<'info> {
    #[account(
        mut,
        seeds = [ProtocolAuthority::SEED],
        bump = protocol_authority.bump,
        has_one = authority @ DracoErrorCode::Unauthorized,
        has_one = reward_curve
    )]
    pub protocol_authority: Account<'info, ProtocolAuthority>,

    #[account(
        mut,
        seeds = [RewardCurve::SEED],
        bump = reward_curve.bump
    )]
    pub reward_curve: Account<'info, RewardCurve>,

    pub authority: Signer<'info>,
}

/// Replaces both tables and the payout cap at once. Already settled claims
/// keep what they were paid; later claims use the new tables.
pub fn update_reward_factors_handler(
    ctx: Context<UpdateRewardFactors>,
    pay: TypeCurve,
    lock: TypeCurve,
    payout_cap: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    ctx.accounts.reward_curve.replace(pay, lock, payout_cap, now)?;
    let version = ctx.accounts.protocol_authority.bump_config_version()?;

    msg!(
        "reward_factors_updated config_version={} payout_cap={}",
        version,
        payout_cap
    );
    Ok(())
}

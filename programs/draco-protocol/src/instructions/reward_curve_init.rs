use anchor_lang::prelude::*;

use crate::errors::DracoErrorCode;
use crate::state::protocol_authority::ProtocolAuthority;
use crate::state::reward_curve::RewardCurve;

#[derive(Accounts)]
pub struct InitializeRewardCurve<'info> {
    #[account(
        mut,
        seeds = [ProtocolAuthority::SEED],
        bump = protocol_authority.bump,
        has_one = authority @ DracoErrorCode::Unauthorized
    )]
    pub protocol_authority: Account<'info, ProtocolAuthority>,

    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + RewardCurve::SIZE,
        seeds = [RewardCurve::SEED],
        bump
    )]
    pub reward_curve: Account<'info, RewardCurve>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates the reward curve with the default PAY/LOCK tables.
pub fn initialize_reward_curve_handler(ctx: Context<InitializeRewardCurve>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let curve_key = ctx.accounts.reward_curve.key();
    let pa = &mut ctx.accounts.protocol_authority;

    require!(
        pa.reward_curve == Pubkey::default(),
        DracoErrorCode::AlreadyExists
    );

    ctx.accounts
        .reward_curve
        .set_defaults(now, ctx.bumps.reward_curve);
    pa.reward_curve = curve_key;

    msg!("reward_curve_initialized payout_cap={}", ctx.accounts.reward_curve.payout_cap);
    Ok(())
}

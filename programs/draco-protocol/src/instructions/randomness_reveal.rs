use anchor_lang::prelude::*;

use crate::errors::DracoErrorCode;
use crate::state::lottery::Lottery;
use crate::state::protocol_authority::ProtocolAuthority;
use crate::state::randomness_binding::RandomnessBinding;
use crate::utils::randomness::read_settled_value;

#[derive(Accounts)]
#[instruction(lottery_id: u64)]
pub struct RevealRandomness<'info> {
    #[account(
        seeds = [ProtocolAuthority::SEED],
        bump = protocol_authority.bump,
        has_one = authority @ DracoErrorCode::Unauthorized
    )]
    pub protocol_authority: Account<'info, ProtocolAuthority>,

    #[account(
        mut,
        seeds = [Lottery::SEED_PREFIX, lottery_id.to_le_bytes().as_ref()],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// Created empty (and rolled back with the failed transaction) when no
    /// commit happened, so the caller gets `NotCommitted`.
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + RandomnessBinding::SIZE,
        seeds = [RandomnessBinding::SEED_PREFIX, lottery_id.to_le_bytes().as_ref()],
        bump
    )]
    pub randomness_binding: Account<'info, RandomnessBinding>,

    /// CHECK: Must be the account bound at commit; checked against the binding.
    pub randomness_account: UncheckedAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Reads the settled oracle value and fixes the winning combination.
/// Fails with `RevealNotReady` while the oracle has not settled; the caller
/// retries.
pub fn reveal_randomness_handler(ctx: Context<RevealRandomness>, lottery_id: u64) -> Result<()> {
    let clock = Clock::get()?;
    let randomness_key = ctx.accounts.randomness_account.key();
    let binding = &mut ctx.accounts.randomness_binding;

    // Only parse the oracle account once it is known to be the bound one.
    let raw = if binding.is_bound() && binding.randomness_account == randomness_key {
        read_settled_value(&ctx.accounts.randomness_account, clock.slot)?
    } else {
        None
    };

    let winning = ctx.accounts.lottery.reveal_randomness(
        binding,
        randomness_key,
        raw,
        clock.unix_timestamp,
    )?;

    msg!(
        "randomness_revealed lottery={} winning={} slot={}",
        lottery_id,
        winning,
        clock.slot
    );
    Ok(())
}

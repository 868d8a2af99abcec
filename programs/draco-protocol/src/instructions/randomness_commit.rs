use anchor_lang::prelude::*;

use crate::errors::DracoErrorCode;
use crate::state::lottery::Lottery;
use crate::state::protocol_authority::ProtocolAuthority;
use crate::state::randomness_binding::RandomnessBinding;
use crate::utils::randomness::{ensure_fresh_seed, read_seed_slot};

#[derive(Accounts)]
#[instruction(lottery_id: u64)]
pub struct CommitRandomness<'info> {
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

    /// One binding per lottery. A second commit fails with `AlreadyCommitted`.
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + RandomnessBinding::SIZE,
        seeds = [RandomnessBinding::SEED_PREFIX, lottery_id.to_le_bytes().as_ref()],
        bump
    )]
    pub randomness_binding: Account<'info, RandomnessBinding>,

    /// CHECK: Switchboard On-Demand randomness account, parsed in the handler.
    pub randomness_account: UncheckedAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Binds the lottery to an oracle randomness account whose value is not
/// known yet. Only allowed once the ticket window has closed.
pub fn commit_randomness_handler(ctx: Context<CommitRandomness>, lottery_id: u64) -> Result<()> {
    let clock = Clock::get()?;
    let lottery = &mut ctx.accounts.lottery;
    let randomness_key = ctx.accounts.randomness_account.key();

    lottery.ensure_commit_allowed(clock.unix_timestamp)?;

    let seed_slot = read_seed_slot(&ctx.accounts.randomness_account)?;
    ensure_fresh_seed(seed_slot, clock.slot)?;

    lottery.commit_randomness(
        &mut ctx.accounts.randomness_binding,
        randomness_key,
        clock.unix_timestamp,
        clock.slot,
        ctx.bumps.randomness_binding,
    )?;

    msg!(
        "randomness_committed lottery={} account={} seed_slot={} slot={}",
        lottery_id,
        randomness_key,
        seed_slot,
        clock.slot
    );
    Ok(())
}

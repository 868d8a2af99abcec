use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::errors::DracoErrorCode;
use crate::state::lottery::Lottery;
use crate::state::protocol_authority::ProtocolAuthority;
use crate::state::treasury::Treasury;
use crate::utils::transfers::withdraw;

#[derive(Accounts)]
#[instruction(lottery_id: u64)]
pub struct CloseLottery<'info> {
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

    #[account(
        mut,
        seeds = [Lottery::VAULT_SEED_PREFIX, lottery_id.to_le_bytes().as_ref()],
        bump = lottery.vault_bump
    )]
    pub lottery_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [Treasury::SEED],
        bump = treasury.bump,
        has_one = mint
    )]
    pub treasury: Account<'info, Treasury>,

    /// Receives what is left of the pot.
    #[account(
        mut,
        seeds = [Treasury::VAULT_SEED],
        bump = treasury.vault_bump
    )]
    pub treasury_vault: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    pub authority: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Closes a lottery once the cooldown since resolution has passed.
/// Unclaimed tickets are forfeited and the pot returns to the treasury.
pub fn close_lottery_handler(ctx: Context<CloseLottery>, lottery_id: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let lottery = &mut ctx.accounts.lottery;

    let returned = lottery.finalize_close(&mut ctx.accounts.treasury, now)?;

    let id_bytes = lottery_id.to_le_bytes();
    withdraw(
        returned,
        &[Lottery::VAULT_SEED_PREFIX, id_bytes.as_ref()],
        lottery.vault_bump,
        &ctx.accounts.lottery_vault,
        &ctx.accounts.treasury_vault,
        &ctx.accounts.mint,
        &ctx.accounts.token_program,
    )?;

    msg!(
        "lottery_closed id={} returned={} claimed={} participants={}",
        lottery_id,
        returned,
        lottery.claimed_count,
        lottery.participants_count
    );
    Ok(())
}

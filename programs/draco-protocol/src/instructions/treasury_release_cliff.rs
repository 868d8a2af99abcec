use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::errors::DracoErrorCode;
use crate::state::protocol_authority::ProtocolAuthority;
use crate::state::treasury::Treasury;
use crate::utils::transfers::withdraw;

#[derive(Accounts)]
pub struct ReleaseCliffFunds<'info> {
    #[account(
        seeds = [ProtocolAuthority::SEED],
        bump = protocol_authority.bump,
        has_one = authority @ DracoErrorCode::Unauthorized
    )]
    pub protocol_authority: Account<'info, ProtocolAuthority>,

    #[account(
        mut,
        seeds = [Treasury::SEED],
        bump = treasury.bump,
        has_one = mint,
        has_one = cliff_vault
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(
        mut,
        seeds = [Treasury::CLIFF_VAULT_SEED],
        bump = treasury.cliff_vault_bump
    )]
    pub cliff_vault: InterfaceAccount<'info, TokenAccount>,

    /// Receives the released allotment.
    #[account(
        mut,
        token::mint = mint,
        token::authority = authority,
        token::token_program = token_program
    )]
    pub authority_token_account: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    pub authority: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn release_cliff_funds_handler(ctx: Context<ReleaseCliffFunds>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let treasury = &mut ctx.accounts.treasury;

    let amount = treasury.release_cliff(now)?;

    withdraw(
        amount,
        &[Treasury::CLIFF_VAULT_SEED],
        treasury.cliff_vault_bump,
        &ctx.accounts.cliff_vault,
        &ctx.accounts.authority_token_account,
        &ctx.accounts.mint,
        &ctx.accounts.token_program,
    )?;

    msg!("cliff_released amount={} at={}", amount, now);
    Ok(())
}

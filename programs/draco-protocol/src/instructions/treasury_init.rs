use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::errors::DracoErrorCode;
use crate::state::protocol_authority::ProtocolAuthority;
use crate::state::treasury::Treasury;
use crate::utils::transfers::deposit;

#[derive(Accounts)]
pub struct InitializeTreasury<'info> {
    #[account(
        mut,
        seeds = [ProtocolAuthority::SEED],
        bump = protocol_authority.bump,
        has_one = authority @ DracoErrorCode::Unauthorized
    )]
    pub protocol_authority: Account<'info, ProtocolAuthority>,

    /// Treasury accounting record.
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + Treasury::SIZE,
        seeds = [Treasury::SEED],
        bump
    )]
    pub treasury: Account<'info, Treasury>,

    /// General funds vault, its own PDA authority.
    #[account(
        init_if_needed,
        payer = authority,
        seeds = [Treasury::VAULT_SEED],
        bump,
        token::mint = mint,
        token::authority = treasury_vault,
        token::token_program = token_program
    )]
    pub treasury_vault: InterfaceAccount<'info, TokenAccount>,

    /// Vault holding the six-month cliff allotment.
    #[account(
        init_if_needed,
        payer = authority,
        seeds = [Treasury::CLIFF_VAULT_SEED],
        bump,
        token::mint = mint,
        token::authority = cliff_vault,
        token::token_program = token_program
    )]
    pub cliff_vault: InterfaceAccount<'info, TokenAccount>,

    /// Source of both initial amounts.
    #[account(
        mut,
        token::mint = mint,
        token::authority = authority,
        token::token_program = token_program
    )]
    pub authority_token_account: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

/// Funds the treasury vault with `initial_amount` and the cliff vault with
/// `cliff_allotment` (whole tokens). The cliff unlocks six months from now.
pub fn initialize_treasury_handler(
    ctx: Context<InitializeTreasury>,
    initial_amount: u64,
    cliff_allotment: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let treasury_key = ctx.accounts.treasury.key();

    ctx.accounts.treasury.init(
        ctx.accounts.mint.key(),
        ctx.accounts.treasury_vault.key(),
        ctx.accounts.cliff_vault.key(),
        initial_amount,
        cliff_allotment,
        now,
        (
            ctx.bumps.treasury,
            ctx.bumps.treasury_vault,
            ctx.bumps.cliff_vault,
        ),
    )?;
    ctx.accounts.protocol_authority.treasury = treasury_key;

    deposit(
        initial_amount,
        &ctx.accounts.authority_token_account,
        &ctx.accounts.treasury_vault,
        &ctx.accounts.authority,
        &ctx.accounts.mint,
        &ctx.accounts.token_program,
    )?;
    deposit(
        cliff_allotment,
        &ctx.accounts.authority_token_account,
        &ctx.accounts.cliff_vault,
        &ctx.accounts.authority,
        &ctx.accounts.mint,
        &ctx.accounts.token_program,
    )?;

    msg!(
        "treasury_initialized mint={} initial_amount={} cliff_allotment={} cliff_at={}",
        ctx.accounts.mint.key(),
        initial_amount,
        cliff_allotment,
        ctx.accounts.treasury.cliff_at
    );
    Ok(())
}

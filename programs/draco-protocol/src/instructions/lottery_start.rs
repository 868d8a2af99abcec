use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::errors::DracoErrorCode;
use crate::state::lottery::{Lottery, LotteryParams};
use crate::state::protocol_authority::ProtocolAuthority;
use crate::state::treasury::Treasury;
use crate::utils::transfers::withdraw;

#[derive(Accounts)]
#[instruction(lottery_id: u64)]
pub struct StartLottery<'info> {
    #[account(
        seeds = [ProtocolAuthority::SEED],
        bump = protocol_authority.bump,
        has_one = authority @ DracoErrorCode::Unauthorized
    )]
    pub protocol_authority: Account<'info, ProtocolAuthority>,

    /// Lottery record. Reusing an id fails with `AlreadyExists`.
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + Lottery::SIZE,
        seeds = [Lottery::SEED_PREFIX, lottery_id.to_le_bytes().as_ref()],
        bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// Pot vault, its own PDA authority.
    #[account(
        init_if_needed,
        payer = authority,
        seeds = [Lottery::VAULT_SEED_PREFIX, lottery_id.to_le_bytes().as_ref()],
        bump,
        token::mint = mint,
        token::authority = lottery_vault,
        token::token_program = token_program
    )]
    pub lottery_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [Treasury::SEED],
        bump = treasury.bump,
        has_one = mint
    )]
    pub treasury: Account<'info, Treasury>,

    /// Seeds the pot.
    #[account(
        mut,
        seeds = [Treasury::VAULT_SEED],
        bump = treasury.vault_bump
    )]
    pub treasury_vault: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

/// Opens a lottery whose ticket window is `[open_at, close_at)`.
///
/// - `stake` is the exact ticket price for PAY lotteries and the exclusive
///   minimum for LOCK lotteries (whole tokens).
/// - `initial_pot` moves from the treasury vault into the lottery vault.
#[allow(clippy::too_many_arguments)]
pub fn start_lottery_handler(
    ctx: Context<StartLottery>,
    lottery_id: u64,
    name: String,
    description: String,
    lottery_type: u8,
    open_at: i64,
    close_at: i64,
    stake: u64,
    initial_pot: u64,
) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    let treasury = &mut ctx.accounts.treasury;

    lottery.start(
        LotteryParams {
            lottery_id,
            name,
            description,
            lottery_type,
            open_at,
            close_at,
            stake,
            initial_pot,
        },
        treasury,
        ctx.bumps.lottery,
        ctx.bumps.lottery_vault,
    )?;

    withdraw(
        initial_pot,
        &[Treasury::VAULT_SEED],
        treasury.vault_bump,
        &ctx.accounts.treasury_vault,
        &ctx.accounts.lottery_vault,
        &ctx.accounts.mint,
        &ctx.accounts.token_program,
    )?;

    msg!(
        "lottery_started id={} type={} open_at={} close_at={} stake={} initial_pot={}",
        lottery_id,
        lottery_type,
        open_at,
        close_at,
        stake,
        initial_pot
    );
    Ok(())
}

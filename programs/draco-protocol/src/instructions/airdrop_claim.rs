use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::state::airdrop::{Airdrop, AirdropClaim};
use crate::state::treasury::Treasury;
use crate::utils::transfers::withdraw;

#[derive(Accounts)]
#[instruction(airdrop_id: u64)]
pub struct ClaimAirdrop<'info> {
    #[account(
        mut,
        seeds = [Airdrop::SEED_PREFIX, airdrop_id.to_le_bytes().as_ref()],
        bump = airdrop.bump
    )]
    pub airdrop: Account<'info, Airdrop>,

    /// Per-wallet marker. A second claim fails with `AlreadyClaimed`.
    #[account(
        init_if_needed,
        payer = claimer,
        space = 8 + AirdropClaim::SIZE,
        seeds = [
            AirdropClaim::SEED_PREFIX,
            airdrop_id.to_le_bytes().as_ref(),
            claimer.key().as_ref()
        ],
        bump
    )]
    pub airdrop_claim: Account<'info, AirdropClaim>,

    #[account(
        mut,
        seeds = [Treasury::SEED],
        bump = treasury.bump,
        has_one = mint
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(
        mut,
        seeds = [Treasury::VAULT_SEED],
        bump = treasury.vault_bump
    )]
    pub treasury_vault: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = claimer,
        token::token_program = token_program
    )]
    pub claimer_token_account: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub claimer: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn claim_airdrop_handler(ctx: Context<ClaimAirdrop>, airdrop_id: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let claimer = ctx.accounts.claimer.key();

    let amount = ctx.accounts.airdrop.claim(
        &mut ctx.accounts.airdrop_claim,
        claimer,
        &mut ctx.accounts.treasury,
        now,
        ctx.bumps.airdrop_claim,
    )?;

    withdraw(
        amount,
        &[Treasury::VAULT_SEED],
        ctx.accounts.treasury.vault_bump,
        &ctx.accounts.treasury_vault,
        &ctx.accounts.claimer_token_account,
        &ctx.accounts.mint,
        &ctx.accounts.token_program,
    )?;

    msg!(
        "airdrop_claimed id={} claimer={} amount={} supplied={}",
        airdrop_id,
        claimer,
        amount,
        ctx.accounts.airdrop.supplied
    );
    Ok(())
}

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::state::lottery::Lottery;
use crate::state::ticket::Ticket;
use crate::state::treasury::Treasury;
use crate::utils::transfers::deposit;

#[derive(Accounts)]
#[instruction(lottery_id: u64, combination: String)]
pub struct BuyTicket<'info> {
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

    /// One ticket per (lottery, participant, combination). A second purchase
    /// of the same combination fails with `AlreadyExists`.
    #[account(
        init_if_needed,
        payer = participant,
        space = 8 + Ticket::SIZE,
        seeds = [
            Ticket::SEED_PREFIX,
            lottery_id.to_le_bytes().as_ref(),
            participant.key().as_ref(),
            Ticket::combination_seed(&combination).as_ref()
        ],
        bump
    )]
    pub ticket: Account<'info, Ticket>,

    /// Pins the mint.
    #[account(
        seeds = [Treasury::SEED],
        bump = treasury.bump,
        has_one = mint
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = participant,
        token::token_program = token_program
    )]
    pub participant_token_account: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub participant: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

/// Buys a ticket for `combination` staking `amount` whole tokens.
pub fn buy_ticket_handler(
    ctx: Context<BuyTicket>,
    lottery_id: u64,
    combination: String,
    amount: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let participant = ctx.accounts.participant.key();

    let parsed = ctx.accounts.lottery.buy_ticket(
        &mut ctx.accounts.ticket,
        participant,
        &combination,
        amount,
        now,
        ctx.bumps.ticket,
    )?;

    deposit(
        amount,
        &ctx.accounts.participant_token_account,
        &ctx.accounts.lottery_vault,
        &ctx.accounts.participant,
        &ctx.accounts.mint,
        &ctx.accounts.token_program,
    )?;

    msg!(
        "ticket_bought lottery={} participant={} combination={} amount={}",
        lottery_id,
        participant,
        parsed,
        amount
    );
    Ok(())
}

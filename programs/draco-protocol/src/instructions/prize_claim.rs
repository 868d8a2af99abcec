use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::state::lottery::{Lottery, PrizeSource};
use crate::state::reward_curve::RewardCurve;
use crate::state::ticket::Ticket;
use crate::state::treasury::Treasury;
use crate::utils::transfers::withdraw;

#[derive(Accounts)]
#[instruction(lottery_id: u64, combination: String)]
pub struct ClaimPrize<'info> {
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

    /// The claimer's own ticket for `combination`. A combination never bought
    /// arrives as an empty record, is rejected with `TicketNotFound` and the
    /// failed transaction drops it again.
    #[account(
        init_if_needed,
        payer = claimer,
        space = 8 + Ticket::SIZE,
        seeds = [
            Ticket::SEED_PREFIX,
            lottery_id.to_le_bytes().as_ref(),
            claimer.key().as_ref(),
            Ticket::combination_seed(&combination).as_ref()
        ],
        bump
    )]
    pub ticket: Account<'info, Ticket>,

    /// Read at claim time: curve updates apply to every later claim.
    #[account(
        seeds = [RewardCurve::SEED],
        bump = reward_curve.bump
    )]
    pub reward_curve: Account<'info, RewardCurve>,

    #[account(
        mut,
        seeds = [Treasury::SEED],
        bump = treasury.bump,
        has_one = mint
    )]
    pub treasury: Account<'info, Treasury>,

    /// Fallback source when the pot cannot cover the prize.
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

pub fn claim_prize_handler(
    ctx: Context<ClaimPrize>,
    lottery_id: u64,
    _combination: String,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let claimer = ctx.accounts.claimer.key();
    let lottery = &mut ctx.accounts.lottery;

    let prize = lottery.claim_prize(
        &mut ctx.accounts.ticket,
        claimer,
        &ctx.accounts.reward_curve,
        &mut ctx.accounts.treasury,
        now,
    )?;

    let id_bytes = lottery_id.to_le_bytes();
    match prize.source {
        PrizeSource::LotteryPot => withdraw(
            prize.total(),
            &[Lottery::VAULT_SEED_PREFIX, id_bytes.as_ref()],
            lottery.vault_bump,
            &ctx.accounts.lottery_vault,
            &ctx.accounts.claimer_token_account,
            &ctx.accounts.mint,
            &ctx.accounts.token_program,
        )?,
        PrizeSource::Treasury => withdraw(
            prize.total(),
            &[Treasury::VAULT_SEED],
            ctx.accounts.treasury.vault_bump,
            &ctx.accounts.treasury_vault,
            &ctx.accounts.claimer_token_account,
            &ctx.accounts.mint,
            &ctx.accounts.token_program,
        )?,
    }

    msg!(
        "prize_claimed lottery={} claimer={} matches={} reward={} refund={} source={:?}",
        lottery_id,
        claimer,
        prize.match_count,
        prize.reward,
        prize.principal_refund,
        prize.source
    );
    Ok(())
}

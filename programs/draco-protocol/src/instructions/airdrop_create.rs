use anchor_lang::prelude::*;

use crate::errors::DracoErrorCode;
use crate::state::airdrop::Airdrop;
use crate::state::protocol_authority::ProtocolAuthority;

#[derive(Accounts)]
#[instruction(airdrop_id: u64)]
pub struct CreateAirdrop<'info> {
    #[account(
        seeds = [ProtocolAuthority::SEED],
        bump = protocol_authority.bump,
        has_one = authority @ DracoErrorCode::Unauthorized
    )]
    pub protocol_authority: Account<'info, ProtocolAuthority>,

    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + Airdrop::SIZE,
        seeds = [Airdrop::SEED_PREFIX, airdrop_id.to_le_bytes().as_ref()],
        bump
    )]
    pub airdrop: Account<'info, Airdrop>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[allow(clippy::too_many_arguments)]
pub fn create_airdrop_handler(
    ctx: Context<CreateAirdrop>,
    airdrop_id: u64,
    name: String,
    supply: u64,
    amount_per_claim: u64,
    start_at: i64,
    end_at: i64,
) -> Result<()> {
    ctx.accounts.airdrop.create(
        airdrop_id,
        name,
        supply,
        amount_per_claim,
        start_at,
        end_at,
        ctx.bumps.airdrop,
    )?;

    msg!(
        "airdrop_created id={} supply={} per_claim={} start_at={} end_at={}",
        airdrop_id,
        supply,
        amount_per_claim,
        start_at,
        end_at
    );
    Ok(())
}

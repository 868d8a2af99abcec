use anchor_lang::prelude::*;

use crate::errors::DracoErrorCode;
use crate::state::protocol_authority::ProtocolAuthority;

#[derive(Accounts)]
pub struct UpdateAuthority<'info> {
    /// Only the current `authority` may hand it over.
    #[account(
        mut,
        seeds = [ProtocolAuthority::SEED],
        bump = protocol_authority.bump,
        has_one = authority @ DracoErrorCode::Unauthorized
    )]
    pub protocol_authority: Account<'info, ProtocolAuthority>,

    pub authority: Signer<'info>,
}

pub fn update_authority_handler(ctx: Context<UpdateAuthority>, new_authority: Pubkey) -> Result<()> {
    let record = ctx.accounts.protocol_authority.key();
    let pa = &mut ctx.accounts.protocol_authority;
    let previous = pa.authority;

    pa.set_authority(new_authority, record, crate::ID)?;

    msg!("authority_updated from={} to={}", previous, new_authority);
    Ok(())
}

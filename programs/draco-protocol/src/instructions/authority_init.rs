use anchor_lang::prelude::*;

use crate::state::protocol_authority::ProtocolAuthority;

#[derive(Accounts)]
pub struct InitializeAuthority<'info> {
    /// Global authority PDA. Created on first call; a second call fails
    /// with `AlreadyExists`.
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + ProtocolAuthority::SIZE,
        seeds = [ProtocolAuthority::SEED],
        bump
    )]
    pub protocol_authority: Account<'info, ProtocolAuthority>,

    /// Becomes the protocol authority.
    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_authority_handler(ctx: Context<InitializeAuthority>) -> Result<()> {
    let authority = ctx.accounts.authority.key();

    ctx.accounts
        .protocol_authority
        .init(authority, ctx.bumps.protocol_authority)?;

    msg!("authority_initialized authority={}", authority);
    Ok(())
}

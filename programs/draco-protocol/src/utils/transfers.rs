use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::errors::DracoErrorCode;

/// Whole tokens to base units for `decimals`.
pub fn to_base_units(amount: u64, decimals: u8) -> Result<u64> {
    let scale = 10u64
        .checked_pow(decimals as u32)
        .ok_or(DracoErrorCode::MathOverflow)?;
    Ok(amount
        .checked_mul(scale)
        .ok_or(DracoErrorCode::MathOverflow)?)
}

/// Moves `amount` whole tokens from a wallet-owned token account into a
/// program vault. `owner` signs the transaction.
pub fn deposit<'info>(
    amount: u64,
    from: &InterfaceAccount<'info, TokenAccount>,
    vault: &InterfaceAccount<'info, TokenAccount>,
    owner: &Signer<'info>,
    mint: &InterfaceAccount<'info, Mint>,
    token_program: &Interface<'info, TokenInterface>,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    transfer_checked(
        CpiContext::new(
            token_program.to_account_info(),
            TransferChecked {
                from: from.to_account_info(),
                mint: mint.to_account_info(),
                to: vault.to_account_info(),
                authority: owner.to_account_info(),
            },
        ),
        to_base_units(amount, mint.decimals)?,
        mint.decimals,
    )
}

/// Moves `amount` whole tokens out of a vault that is its own PDA authority.
/// `seeds` are the vault's seeds without the bump.
pub fn withdraw<'info>(
    amount: u64,
    seeds: &[&[u8]],
    bump: u8,
    vault: &InterfaceAccount<'info, TokenAccount>,
    to: &InterfaceAccount<'info, TokenAccount>,
    mint: &InterfaceAccount<'info, Mint>,
    token_program: &Interface<'info, TokenInterface>,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let bump = [bump];
    let mut signer: Vec<&[u8]> = seeds.to_vec();
    signer.push(&bump);
    let signer_seeds: &[&[&[u8]]] = &[&signer];

    transfer_checked(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            TransferChecked {
                from: vault.to_account_info(),
                mint: mint.to_account_info(),
                to: to.to_account_info(),
                authority: vault.to_account_info(),
            },
            signer_seeds,
        ),
        to_base_units(amount, mint.decimals)?,
        mint.decimals,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_by_decimals() {
        assert_eq!(to_base_units(50, 0).unwrap(), 50);
        assert_eq!(to_base_units(50, 6).unwrap(), 50_000_000);
        assert_eq!(to_base_units(300_000_000, 9).unwrap(), 300_000_000_000_000_000);
    }

    #[test]
    fn overflow_is_reported() {
        let res = to_base_units(u64::MAX, 1);
        assert_eq!(res.unwrap_err(), error!(DracoErrorCode::MathOverflow));

        let res = to_base_units(1, 20);
        assert_eq!(res.unwrap_err(), error!(DracoErrorCode::MathOverflow));
    }
}

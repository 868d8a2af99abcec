use anchor_lang::prelude::*;
use solana_security_txt::security_txt;

// -----------------------------------------------------------------------------
// Program ID
// -----------------------------------------------------------------------------
declare_id!("Gudf3TTqxeBuUX8USrSzon9zVQ8s1UTcpZFHGVqEhZH1");

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "Draco Protocol",
    project_url: "https://example.com/draco-protocol",
    contacts: "email:security@example.com",
    policy: "https://example.com/draco-protocol/SECURITY.md",
    preferred_languages: "en"
}


// -----------------------------------------------------------------------------
// Modules
// -----------------------------------------------------------------------------
pub mod state;
pub mod instructions;
pub mod utils;
pub mod errors;
pub mod constants;

use instructions::*;
use state::TypeCurve;

// -----------------------------------------------------------------------------
// Program Entrypoints
// -----------------------------------------------------------------------------
#[program]
pub mod draco_protocol {
    use super::*;

    // -------------------------------------------------------------------------
    // authority
    // -------------------------------------------------------------------------
    pub fn initialize_authority(ctx: Context<InitializeAuthority>) -> Result<()> {
        initialize_authority_handler(ctx)
    }

    pub fn update_authority(ctx: Context<UpdateAuthority>, new_authority: Pubkey) -> Result<()> {
        update_authority_handler(ctx, new_authority)
    }

    // -------------------------------------------------------------------------
    // treasury
    // -------------------------------------------------------------------------
    pub fn initialize_treasury(
        ctx: Context<InitializeTreasury>,
        initial_amount: u64,
        cliff_allotment: u64,
    ) -> Result<()> {
        initialize_treasury_handler(ctx, initial_amount, cliff_allotment)
    }

    pub fn release_cliff_funds(ctx: Context<ReleaseCliffFunds>) -> Result<()> {
        release_cliff_funds_handler(ctx)
    }

    // -------------------------------------------------------------------------
    // reward curve
    // -------------------------------------------------------------------------
    pub fn initialize_reward_curve(ctx: Context<InitializeRewardCurve>) -> Result<()> {
        initialize_reward_curve_handler(ctx)
    }

    pub fn update_reward_factors(
        ctx: Context<UpdateRewardFactors>,
        pay: TypeCurve,
        lock: TypeCurve,
        payout_cap: u64,
    ) -> Result<()> {
        update_reward_factors_handler(ctx, pay, lock, payout_cap)
    }

    // =====================================================================
    // LOTTERY
    // =====================================================================

    #[allow(clippy::too_many_arguments)]
    pub fn start_lottery(
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
        start_lottery_handler(
            ctx,
            lottery_id,
            name,
            description,
            lottery_type,
            open_at,
            close_at,
            stake,
            initial_pot,
        )
    }

    pub fn buy_ticket(
        ctx: Context<BuyTicket>,
        lottery_id: u64,
        combination: String,
        amount: u64,
    ) -> Result<()> {
        buy_ticket_handler(ctx, lottery_id, combination, amount)
    }

    pub fn commit_randomness(ctx: Context<CommitRandomness>, lottery_id: u64) -> Result<()> {
        commit_randomness_handler(ctx, lottery_id)
    }

    pub fn reveal_randomness(ctx: Context<RevealRandomness>, lottery_id: u64) -> Result<()> {
        reveal_randomness_handler(ctx, lottery_id)
    }

    pub fn claim_prize(
        ctx: Context<ClaimPrize>,
        lottery_id: u64,
        combination: String,
    ) -> Result<()> {
        claim_prize_handler(ctx, lottery_id, combination)
    }

    pub fn close_lottery(ctx: Context<CloseLottery>, lottery_id: u64) -> Result<()> {
        close_lottery_handler(ctx, lottery_id)
    }

    // =====================================================================
    // AIRDROP
    // =====================================================================

    #[allow(clippy::too_many_arguments)]
    pub fn create_airdrop(
        ctx: Context<CreateAirdrop>,
        airdrop_id: u64,
        name: String,
        supply: u64,
        amount_per_claim: u64,
        start_at: i64,
        end_at: i64,
    ) -> Result<()> {
        create_airdrop_handler(ctx, airdrop_id, name, supply, amount_per_claim, start_at, end_at)
    }

    pub fn claim_airdrop(ctx: Context<ClaimAirdrop>, airdrop_id: u64) -> Result<()> {
        claim_airdrop_handler(ctx, airdrop_id)
    }
}

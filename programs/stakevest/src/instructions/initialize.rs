// instructions/initialize.rs
use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::*;

/// Initialize the platform with its config and state accounts
pub fn handler(ctx: Context<Initialize>, treasury_wallet: Pubkey) -> Result<()> {
    let clock = Clock::get()?;

    let platform_state = &mut ctx.accounts.platform_state;
    **platform_state = PlatformState::new(
        ctx.accounts.authority.key(),
        treasury_wallet,
        clock.unix_timestamp,
        ctx.bumps.platform_state,
    );

    let platform_config = &mut ctx.accounts.platform_config;
    **platform_config = PlatformConfig::new(ctx.accounts.authority.key(), ctx.bumps.platform_config);

    msg!("Stakevest initialized");
    msg!("Authority: {}", ctx.accounts.authority.key());
    msg!("Treasury: {}", treasury_wallet);
    msg!("Plan tiers: {}", PLAN_COUNT);

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Authority (admin) who approves requests and manages config
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Global platform state account
    #[account(
        init,
        payer = authority,
        space = PlatformState::SIZE,
        seeds = [PLATFORM_STATE_SEED],
        bump
    )]
    pub platform_state: Account<'info, PlatformState>,

    /// Global policy configuration account
    #[account(
        init,
        payer = authority,
        space = PlatformConfig::SIZE,
        seeds = [PLATFORM_CONFIG_SEED],
        bump
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    pub system_program: Program<'info, System>,
}

// instructions/activate_investment.rs
use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::state::*;

/// Admin approval of a Pending investment. Sets the maturity schedule and
/// opens the first accrual period.
pub fn activate(ctx: Context<ActivateInvestment>) -> Result<()> {
    let clock = Clock::get()?;
    let investment = &mut ctx.accounts.investment;

    investment.activate(clock.unix_timestamp)?;

    msg!("Investment activated: {}", investment.key());
    msg!("Start: {}", investment.start_date);
    msg!("End: {}", investment.end_date);

    Ok(())
}

/// Cancel a Pending investment, by its owner or the admin.
pub fn cancel(ctx: Context<CancelInvestment>) -> Result<()> {
    let clock = Clock::get()?;
    let investment = &mut ctx.accounts.investment;

    let caller = ctx.accounts.caller.key();
    if caller != investment.owner && caller != ctx.accounts.platform_config.authority {
        return Err(StakevestError::UnauthorizedAdmin.into());
    }

    investment.cancel(clock.unix_timestamp)?;

    msg!("Investment cancelled: {}", investment.key());

    Ok(())
}

#[derive(Accounts)]
pub struct ActivateInvestment<'info> {
    /// Admin authority
    pub authority: Signer<'info>,

    #[account(
        seeds = [PLATFORM_CONFIG_SEED],
        bump = platform_config.bump,
        constraint = platform_config.authority == authority.key() @ StakevestError::UnauthorizedAdmin
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(mut)]
    pub investment: Account<'info, Investment>,
}

#[derive(Accounts)]
pub struct CancelInvestment<'info> {
    pub caller: Signer<'info>,

    #[account(
        seeds = [PLATFORM_CONFIG_SEED],
        bump = platform_config.bump
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(mut)]
    pub investment: Account<'info, Investment>,
}

// instructions/process_upgrade.rs
use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::state::*;

/// Admin approval of an upgrade request. Locks in the interest accrued so
/// far, applies the new principal/rate in one shot, and freezes the request
/// row with what was actually applied. A request can only be approved once;
/// `ensure_pending` rejects replays.
pub fn approve(ctx: Context<ProcessUpgrade>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let investment = &mut ctx.accounts.investment;
    let upgrade = &mut ctx.accounts.upgrade_request;

    upgrade.status.ensure_pending()?;

    match upgrade.kind {
        UpgradeKind::AmountIncrease => {
            let new_base_rate = ctx.accounts.platform_config.plan_rate(upgrade.new_plan);
            investment.apply_amount_upgrade(
                upgrade.additional_amount,
                upgrade.new_plan,
                new_base_rate,
                now,
            )?;
            ctx.accounts
                .platform_state
                .add_principal(upgrade.additional_amount);
        }
        UpgradeKind::DurationExtend => {
            let new_bonus = ctx
                .accounts
                .platform_config
                .duration_rate_bonus(upgrade.new_duration_months)?;
            investment.apply_duration_upgrade(upgrade.new_duration_months, new_bonus, now)?;
        }
    }

    // record what the approval actually applied
    upgrade.new_principal = investment.principal;
    upgrade.new_rate = investment.effective_rate;
    upgrade.accumulated_interest = investment.accumulated_interest;
    upgrade.status = RequestStatus::Approved;
    upgrade.processed_at = now;
    investment.pending_upgrade = false;

    msg!("Upgrade approved: {:?}", upgrade.kind);
    msg!(
        "Principal {} -> {}, rate {} -> {}",
        upgrade.old_principal,
        upgrade.new_principal,
        upgrade.old_rate,
        upgrade.new_rate
    );
    msg!("Interest locked in: {}", upgrade.accumulated_interest);

    Ok(())
}

/// Admin rejection. The investment is untouched apart from unblocking the
/// next request.
pub fn reject(ctx: Context<ProcessUpgrade>) -> Result<()> {
    let clock = Clock::get()?;
    let investment = &mut ctx.accounts.investment;
    let upgrade = &mut ctx.accounts.upgrade_request;

    upgrade.status.ensure_pending()?;

    upgrade.status = RequestStatus::Rejected;
    upgrade.processed_at = clock.unix_timestamp;
    investment.pending_upgrade = false;

    msg!("Upgrade rejected: {}", upgrade.key());

    Ok(())
}

#[derive(Accounts)]
pub struct ProcessUpgrade<'info> {
    /// Admin authority
    pub authority: Signer<'info>,

    #[account(
        seeds = [PLATFORM_CONFIG_SEED],
        bump = platform_config.bump,
        constraint = platform_config.authority == authority.key() @ StakevestError::UnauthorizedAdmin
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(
        mut,
        seeds = [PLATFORM_STATE_SEED],
        bump = platform_state.bump
    )]
    pub platform_state: Account<'info, PlatformState>,

    #[account(
        mut,
        constraint = upgrade_request.investment == investment.key()
    )]
    pub investment: Account<'info, Investment>,

    #[account(mut)]
    pub upgrade_request: Account<'info, UpgradeRequest>,
}

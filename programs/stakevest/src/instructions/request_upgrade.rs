// instructions/request_upgrade.rs
use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::state::*;
use crate::utils::*;

/// Create a Pending upgrade request. For an amount upgrade the resulting
/// principal must fit the target plan's bounds; for a duration upgrade the
/// new duration must be strictly longer. Only one upgrade may be in flight
/// per investment, and a request on the same day as the last baseline
/// reset is refused up front (approval enforces the same rule again).
pub fn handler(
    ctx: Context<RequestUpgrade>,
    kind: u8,
    new_plan: u8,
    additional_amount: u64,
    new_duration_months: u8,
) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let config = &ctx.accounts.platform_config;
    let investment = &mut ctx.accounts.investment;

    if investment.status != InvestmentStatus::Active {
        return Err(StakevestError::InvestmentNotActive.into());
    }
    if investment.pending_upgrade {
        return Err(StakevestError::PendingUpgradeExists.into());
    }
    if same_day(investment.accrual_baseline, now) {
        return Err(StakevestError::SameDayUpgrade.into());
    }

    let kind = match kind {
        0 => UpgradeKind::AmountIncrease,
        1 => UpgradeKind::DurationExtend,
        _ => return Err(StakevestError::InvalidUpgradeKind.into()),
    };

    let (target_plan, new_rate, new_principal) = match kind {
        UpgradeKind::AmountIncrease => {
            let plan = PlanTier::from_index(new_plan).ok_or(StakevestError::UnknownPlan)?;
            let new_principal = investment
                .principal
                .checked_add(additional_amount)
                .ok_or(StakevestError::MathOverflow)?;
            let (min, max) = config.plan_bounds(plan);
            validate_plan_amount(new_principal, min, max)?;
            let rate = config.plan_rate(plan) + investment.duration_bonus_rate;
            (plan, rate, new_principal)
        }
        UpgradeKind::DurationExtend => {
            validate_duration(new_duration_months)?;
            if new_duration_months <= investment.duration_months {
                return Err(StakevestError::DurationNotExtended.into());
            }
            let bonus = config.duration_rate_bonus(new_duration_months)?;
            let rate = investment.base_rate + bonus;
            (investment.plan, rate, investment.principal)
        }
    };

    investment.pending_upgrade = true;
    investment.upgrade_count = investment
        .upgrade_count
        .checked_add(1)
        .ok_or(StakevestError::MathOverflow)?;

    let upgrade = &mut ctx.accounts.upgrade_request;
    **upgrade = UpgradeRequest {
        investment: investment.key(),
        owner: ctx.accounts.owner.key(),
        kind,
        new_plan: target_plan,
        additional_amount,
        new_duration_months,
        old_principal: investment.principal,
        new_principal,
        old_rate: investment.effective_rate,
        new_rate,
        accumulated_interest: 0,
        status: RequestStatus::Pending,
        requested_at: now,
        processed_at: 0,
        bump: ctx.bumps.upgrade_request,
    };

    msg!("Upgrade requested: {:?}", kind);
    msg!("Principal: {} -> {}", upgrade.old_principal, new_principal);
    msg!("Rate: {} -> {}", upgrade.old_rate, new_rate);

    Ok(())
}

#[derive(Accounts)]
pub struct RequestUpgrade<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        constraint = investment.owner == owner.key()
    )]
    pub investment: Account<'info, Investment>,

    #[account(
        init,
        payer = owner,
        space = UpgradeRequest::SIZE,
        seeds = [
            UPGRADE_SEED,
            investment.key().as_ref(),
            investment.upgrade_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub upgrade_request: Account<'info, UpgradeRequest>,

    #[account(
        seeds = [PLATFORM_CONFIG_SEED],
        bump = platform_config.bump
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    pub system_program: Program<'info, System>,
}

// instructions/create_investment.rs
use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::state::*;
use crate::utils::*;

/// Create a Pending investment. Rates and the one-time duration cash bonus
/// are fixed here from the policy tables; accrual starts only once an
/// admin activates the investment after the deposit settles externally.
pub fn handler(ctx: Context<CreateInvestment>, plan: u8, duration_months: u8, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let config = &ctx.accounts.platform_config;
    let platform_state = &mut ctx.accounts.platform_state;

    if platform_state.is_paused {
        return Err(StakevestError::PlatformPaused.into());
    }

    let plan = PlanTier::from_index(plan).ok_or(StakevestError::UnknownPlan)?;
    validate_duration(duration_months)?;

    let (min, max) = config.plan_bounds(plan);
    validate_plan_amount(amount, min, max)?;

    let base_rate = config.plan_rate(plan);
    let duration_bonus_rate = config.duration_rate_bonus(duration_months)?;
    let cash_bonus = duration_cash_bonus(duration_months, amount);

    let investor = &mut ctx.accounts.investor;
    let index = investor.investment_count;
    investor.investment_count = index
        .checked_add(1)
        .ok_or(StakevestError::MathOverflow)?;

    let investment = &mut ctx.accounts.investment;
    **investment = Investment::new(
        ctx.accounts.owner.key(),
        index,
        plan,
        amount,
        base_rate,
        duration_bonus_rate,
        duration_months,
        cash_bonus,
        clock.unix_timestamp,
        ctx.bumps.investment,
    );

    platform_state.add_investment(amount);

    msg!("Investment created: {}", investment.key());
    msg!("Plan: {:?}, duration: {} months", plan, duration_months);
    msg!("Principal: {} cents", amount);
    msg!(
        "Effective rate: {} (base {} + duration bonus {})",
        investment.effective_rate,
        base_rate,
        duration_bonus_rate
    );
    msg!("Duration cash bonus: {} cents", cash_bonus);

    Ok(())
}

#[derive(Accounts)]
pub struct CreateInvestment<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [INVESTOR_SEED, owner.key().as_ref()],
        bump = investor.bump,
        constraint = investor.owner == owner.key()
    )]
    pub investor: Account<'info, Investor>,

    #[account(
        init,
        payer = owner,
        space = Investment::SIZE,
        seeds = [
            INVESTMENT_SEED,
            owner.key().as_ref(),
            investor.investment_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub investment: Account<'info, Investment>,

    #[account(
        seeds = [PLATFORM_CONFIG_SEED],
        bump = platform_config.bump
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(
        mut,
        seeds = [PLATFORM_STATE_SEED],
        bump = platform_state.bump
    )]
    pub platform_state: Account<'info, PlatformState>,

    pub system_program: Program<'info, System>,
}

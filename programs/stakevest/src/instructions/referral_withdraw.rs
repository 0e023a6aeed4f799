// instructions/referral_withdraw.rs
use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::state::*;

/// Pay out unlocked referral earnings in bulk. The earning rows to settle
/// are passed as remaining accounts in (earning, referred investment)
/// pairs. Every row must belong to the signer; rows still inside the
/// 31-day lock, already settled, or tied to an investment that is no
/// longer active are skipped, and the rest are marked withdrawn in the
/// same transaction that credits the total.
pub fn withdraw(ctx: Context<WithdrawReferralEarnings>, destination: Pubkey) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let investor = &mut ctx.accounts.investor;

    let total = settle_earning_rows(
        ctx.remaining_accounts,
        ctx.program_id,
        investor.owner,
        destination,
        false,
        now,
    )?;

    if total == 0 {
        return Err(StakevestError::NothingToWithdraw.into());
    }

    investor.settle_referral_earnings(total)?;
    ctx.accounts.platform_state.add_referral_payment(total);

    msg!(
        "Referral earnings withdrawn: {} cents to {}",
        total,
        destination
    );

    Ok(())
}

/// Convert unlocked referral earnings into additional principal on one of
/// the signer's active investments. Earning rows are passed as the same
/// (earning, referred investment) pairs as a withdrawal and filtered the
/// same way. Rides the amount-upgrade path, so the accrual baseline resets
/// and the plan tier is re-derived from the new total.
pub fn reinvest(ctx: Context<ReinvestReferralEarnings>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let investor = &mut ctx.accounts.investor;
    let investment = &mut ctx.accounts.investment;

    let total = settle_earning_rows(
        ctx.remaining_accounts,
        ctx.program_id,
        investor.owner,
        investment.key(),
        true,
        now,
    )?;

    if total == 0 {
        return Err(StakevestError::NothingToWithdraw.into());
    }

    let new_principal = investment
        .principal
        .checked_add(total)
        .ok_or(StakevestError::MathOverflow)?;
    let config = &ctx.accounts.platform_config;
    let new_plan = config
        .plan_for_amount(new_principal)
        .unwrap_or(investment.plan);
    let new_base_rate = config.plan_rate(new_plan);

    investment.apply_reinvestment(total, new_plan, new_base_rate, now)?;

    investor.settle_referral_earnings(total)?;
    ctx.accounts.platform_state.add_principal(total);

    msg!(
        "Referral earnings reinvested: {} cents into {}",
        total,
        investment.key()
    );
    msg!(
        "New principal {} at {:?} ({} + {} bonus)",
        investment.principal,
        investment.plan,
        investment.base_rate,
        investment.duration_bonus_rate
    );

    Ok(())
}

/// Deserialize, validate and mark the passed earning rows, writing each
/// mutation back in place. Rows arrive as (earning, referred investment)
/// pairs; a row that is not payable right now is skipped rather than
/// failing the batch. Returns the settled total.
fn settle_earning_rows(
    rows: &[AccountInfo],
    program_id: &Pubkey,
    referrer: Pubkey,
    destination: Pubkey,
    reinvested: bool,
    now: i64,
) -> Result<u64> {
    if rows.len() % 2 != 0 {
        return Err(anchor_lang::error::ErrorCode::AccountNotEnoughKeys.into());
    }

    let mut total: u64 = 0;

    for pair in rows.chunks(2) {
        let (row, investment_info) = (&pair[0], &pair[1]);
        if row.owner != program_id || investment_info.owner != program_id {
            return Err(anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram.into());
        }

        let mut data = row.try_borrow_mut_data()?;
        let mut earning = ReferralEarning::try_deserialize(&mut &data[..])?;

        if earning.referrer != referrer {
            return Err(StakevestError::InvalidReferrer.into());
        }
        if earning.investment != *investment_info.key {
            return Err(StakevestError::EarningInvestmentMismatch.into());
        }

        let investment_data = investment_info.try_borrow_data()?;
        let investment = Investment::try_deserialize(&mut &investment_data[..])?;

        if !earning.is_payable(investment.status, now) {
            continue;
        }

        if reinvested {
            earning.mark_reinvested(destination, now)?;
        } else {
            earning.mark_withdrawn(destination, now)?;
        }

        total = total
            .checked_add(earning.amount)
            .ok_or(StakevestError::MathOverflow)?;

        earning.try_serialize(&mut &mut data[..])?;
    }

    Ok(total)
}

#[derive(Accounts)]
pub struct WithdrawReferralEarnings<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [INVESTOR_SEED, owner.key().as_ref()],
        bump = investor.bump,
        constraint = investor.owner == owner.key()
    )]
    pub investor: Account<'info, Investor>,

    #[account(
        mut,
        seeds = [PLATFORM_STATE_SEED],
        bump = platform_state.bump
    )]
    pub platform_state: Account<'info, PlatformState>,
}

#[derive(Accounts)]
pub struct ReinvestReferralEarnings<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [INVESTOR_SEED, owner.key().as_ref()],
        bump = investor.bump,
        constraint = investor.owner == owner.key()
    )]
    pub investor: Account<'info, Investor>,

    /// The investment absorbing the earnings as principal
    #[account(
        mut,
        constraint = investment.owner == owner.key()
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
}

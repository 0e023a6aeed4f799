// instructions/request_withdrawal.rs
use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::state::*;
use crate::utils::*;

/// Ask to withdraw accrued profit, or to claim the duration cash bonus.
/// A bonus claim ignores `amount` and resolves it to the fixed bonus; the
/// amounts checked here are advisory, approval re-validates against live
/// state. One withdrawal request per investment may be in flight.
pub fn request_partial(
    ctx: Context<RequestPartialWithdrawal>,
    amount: u64,
    kind: u8,
    destination: Pubkey,
) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let investment = &mut ctx.accounts.investment;

    if ctx.accounts.platform_state.is_paused {
        return Err(StakevestError::PlatformPaused.into());
    }
    if investment.status != InvestmentStatus::Active {
        return Err(StakevestError::InvestmentNotActive.into());
    }
    if investment.withdrawal_requested {
        return Err(StakevestError::WithdrawalAlreadyRequested.into());
    }

    let (requested_kind, resolved_amount) = match kind {
        1 => {
            if investment.duration_cash_bonus == 0 {
                return Err(StakevestError::NoBonusAvailable.into());
            }
            if investment.bonus_withdrawn {
                return Err(StakevestError::BonusAlreadyWithdrawn.into());
            }
            if days_passed(investment.start_date, now) < bonus_unlock_days(investment.duration_months) {
                return Err(StakevestError::BonusLocked.into());
            }
            (WithdrawKind::Bonus, investment.duration_cash_bonus)
        }
        _ => {
            if amount == 0 {
                return Err(StakevestError::InvalidWithdrawalAmount.into());
            }
            if amount > investment.available_profit(now)? {
                return Err(StakevestError::InsufficientProfit.into());
            }
            (WithdrawKind::Profit, amount)
        }
    };

    investment.withdrawal_requested = true;
    investment.withdrawal_count = investment
        .withdrawal_count
        .checked_add(1)
        .ok_or(StakevestError::MathOverflow)?;

    let withdrawal = &mut ctx.accounts.partial_withdrawal;
    **withdrawal = PartialWithdrawal {
        investment: investment.key(),
        owner: ctx.accounts.owner.key(),
        amount: resolved_amount,
        requested_kind,
        resolved_kind: requested_kind,
        destination,
        status: RequestStatus::Pending,
        requested_at: now,
        processed_at: 0,
        bump: ctx.bumps.partial_withdrawal,
    };

    msg!(
        "Partial withdrawal requested: {:?} for {} cents",
        requested_kind,
        resolved_amount
    );

    Ok(())
}

/// Ask to exit early. Only possible within the first 30 days; all interest
/// is forfeited and the preview figures are recorded for admin review.
pub fn request_early(ctx: Context<RequestEarlyWithdrawal>, destination: Pubkey) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let investment = &mut ctx.accounts.investment;

    if ctx.accounts.platform_state.is_paused {
        return Err(StakevestError::PlatformPaused.into());
    }
    if investment.status != InvestmentStatus::Active {
        return Err(StakevestError::InvestmentNotActive.into());
    }
    if investment.withdrawal_requested {
        return Err(StakevestError::WithdrawalAlreadyRequested.into());
    }

    let days_invested = days_passed(investment.start_date, now);
    if days_invested > EARLY_WITHDRAWAL_WINDOW_DAYS {
        return Err(StakevestError::EarlyWithdrawalWindowClosed.into());
    }

    let forfeited_interest = investment.current_return(now)?;
    let payout_amount = investment.early_withdrawal_payout();

    investment.withdrawal_requested = true;
    investment.withdrawal_count = investment
        .withdrawal_count
        .checked_add(1)
        .ok_or(StakevestError::MathOverflow)?;

    let withdrawal = &mut ctx.accounts.early_withdrawal;
    **withdrawal = EarlyWithdrawal {
        investment: investment.key(),
        owner: ctx.accounts.owner.key(),
        days_invested,
        forfeited_interest,
        payout_amount,
        destination,
        status: RequestStatus::Pending,
        requested_at: now,
        processed_at: 0,
        bump: ctx.bumps.early_withdrawal,
    };

    msg!(
        "Early withdrawal requested on day {}: payout {}, forfeiting {}",
        days_invested,
        payout_amount,
        forfeited_interest
    );

    Ok(())
}

/// Ask for the maturity payout: principal, unpaid profit and any unclaimed
/// cash bonus.
pub fn request_full(ctx: Context<RequestFullWithdrawal>, destination: Pubkey) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let investment = &mut ctx.accounts.investment;

    if ctx.accounts.platform_state.is_paused {
        return Err(StakevestError::PlatformPaused.into());
    }
    if !investment.is_matured(now) {
        return Err(StakevestError::InvestmentNotMatured.into());
    }
    if investment.withdrawal_requested {
        return Err(StakevestError::WithdrawalAlreadyRequested.into());
    }

    let payout_amount = investment.full_withdrawal_payout(now)?;

    investment.withdrawal_requested = true;
    investment.withdrawal_count = investment
        .withdrawal_count
        .checked_add(1)
        .ok_or(StakevestError::MathOverflow)?;

    let withdrawal = &mut ctx.accounts.full_withdrawal;
    **withdrawal = FullWithdrawal {
        investment: investment.key(),
        owner: ctx.accounts.owner.key(),
        payout_amount,
        destination,
        status: RequestStatus::Pending,
        requested_at: now,
        processed_at: 0,
        bump: ctx.bumps.full_withdrawal,
    };

    msg!("Full withdrawal requested: payout {}", payout_amount);

    Ok(())
}

#[derive(Accounts)]
pub struct RequestPartialWithdrawal<'info> {
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
        space = PartialWithdrawal::SIZE,
        seeds = [
            PARTIAL_WITHDRAWAL_SEED,
            investment.key().as_ref(),
            investment.withdrawal_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub partial_withdrawal: Account<'info, PartialWithdrawal>,

    #[account(
        seeds = [PLATFORM_STATE_SEED],
        bump = platform_state.bump
    )]
    pub platform_state: Account<'info, PlatformState>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct RequestEarlyWithdrawal<'info> {
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
        space = EarlyWithdrawal::SIZE,
        seeds = [
            EARLY_WITHDRAWAL_SEED,
            investment.key().as_ref(),
            investment.withdrawal_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub early_withdrawal: Account<'info, EarlyWithdrawal>,

    #[account(
        seeds = [PLATFORM_STATE_SEED],
        bump = platform_state.bump
    )]
    pub platform_state: Account<'info, PlatformState>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct RequestFullWithdrawal<'info> {
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
        space = FullWithdrawal::SIZE,
        seeds = [
            FULL_WITHDRAWAL_SEED,
            investment.key().as_ref(),
            investment.withdrawal_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub full_withdrawal: Account<'info, FullWithdrawal>,

    #[account(
        seeds = [PLATFORM_STATE_SEED],
        bump = platform_state.bump
    )]
    pub platform_state: Account<'info, PlatformState>,

    pub system_program: Program<'info, System>,
}

// instructions/process_withdrawal.rs
//
// Admin processing of the three withdrawal-request kinds. Approval applies
// the state transition and re-validates everything against live state; the
// figures recorded at request time are previews only. Rejection just
// unblocks the investment for the next request.
use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::state::*;
use crate::utils::days_passed;

pub fn approve_partial(ctx: Context<ProcessPartialWithdrawal>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let investment = &mut ctx.accounts.investment;
    let withdrawal = &mut ctx.accounts.partial_withdrawal;

    withdrawal.status.ensure_pending()?;

    // authoritative classification happens here, not at request time
    let resolved = investment.apply_partial_withdrawal(withdrawal.amount, now)?;

    withdrawal.resolved_kind = resolved;
    withdrawal.status = RequestStatus::Approved;
    withdrawal.processed_at = now;
    investment.withdrawal_requested = false;

    ctx.accounts.platform_state.add_withdrawal(withdrawal.amount);

    msg!(
        "Partial withdrawal approved as {:?}: {} cents to {}",
        resolved,
        withdrawal.amount,
        withdrawal.destination
    );

    Ok(())
}

pub fn reject_partial(ctx: Context<ProcessPartialWithdrawal>) -> Result<()> {
    let clock = Clock::get()?;
    let investment = &mut ctx.accounts.investment;
    let withdrawal = &mut ctx.accounts.partial_withdrawal;

    withdrawal.status.ensure_pending()?;

    withdrawal.status = RequestStatus::Rejected;
    withdrawal.processed_at = clock.unix_timestamp;
    investment.withdrawal_requested = false;

    msg!("Partial withdrawal rejected: {}", withdrawal.key());

    Ok(())
}

pub fn approve_early(ctx: Context<ProcessEarlyWithdrawal>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let investment = &mut ctx.accounts.investment;
    let withdrawal = &mut ctx.accounts.early_withdrawal;

    withdrawal.status.ensure_pending()?;

    // the window is re-checked and the payout recomputed against live state
    let forfeited = investment.current_return(now)?;
    let payout = investment.apply_early_withdrawal(now)?;

    withdrawal.days_invested = days_passed(investment.start_date, now);
    withdrawal.forfeited_interest = forfeited;
    withdrawal.payout_amount = payout;
    withdrawal.status = RequestStatus::Approved;
    withdrawal.processed_at = now;
    investment.withdrawal_requested = false;

    ctx.accounts.platform_state.add_withdrawal(payout);

    msg!(
        "Early withdrawal approved: {} cents to {}, {} interest forfeited",
        payout,
        withdrawal.destination,
        forfeited
    );

    Ok(())
}

pub fn reject_early(ctx: Context<ProcessEarlyWithdrawal>) -> Result<()> {
    let clock = Clock::get()?;
    let investment = &mut ctx.accounts.investment;
    let withdrawal = &mut ctx.accounts.early_withdrawal;

    withdrawal.status.ensure_pending()?;

    withdrawal.status = RequestStatus::Rejected;
    withdrawal.processed_at = clock.unix_timestamp;
    investment.withdrawal_requested = false;

    msg!("Early withdrawal rejected: {}", withdrawal.key());

    Ok(())
}

pub fn approve_full(ctx: Context<ProcessFullWithdrawal>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let investment = &mut ctx.accounts.investment;
    let withdrawal = &mut ctx.accounts.full_withdrawal;

    withdrawal.status.ensure_pending()?;

    let payout = investment.apply_full_withdrawal(now)?;

    withdrawal.payout_amount = payout;
    withdrawal.status = RequestStatus::Approved;
    withdrawal.processed_at = now;
    investment.withdrawal_requested = false;

    ctx.accounts.platform_state.add_withdrawal(payout);

    msg!(
        "Full withdrawal approved: {} cents to {}",
        payout,
        withdrawal.destination
    );

    Ok(())
}

pub fn reject_full(ctx: Context<ProcessFullWithdrawal>) -> Result<()> {
    let clock = Clock::get()?;
    let investment = &mut ctx.accounts.investment;
    let withdrawal = &mut ctx.accounts.full_withdrawal;

    withdrawal.status.ensure_pending()?;

    withdrawal.status = RequestStatus::Rejected;
    withdrawal.processed_at = clock.unix_timestamp;
    investment.withdrawal_requested = false;

    msg!("Full withdrawal rejected: {}", withdrawal.key());

    Ok(())
}

#[derive(Accounts)]
pub struct ProcessPartialWithdrawal<'info> {
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
        constraint = partial_withdrawal.investment == investment.key()
    )]
    pub investment: Account<'info, Investment>,

    #[account(mut)]
    pub partial_withdrawal: Account<'info, PartialWithdrawal>,
}

#[derive(Accounts)]
pub struct ProcessEarlyWithdrawal<'info> {
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
        constraint = early_withdrawal.investment == investment.key()
    )]
    pub investment: Account<'info, Investment>,

    #[account(mut)]
    pub early_withdrawal: Account<'info, EarlyWithdrawal>,
}

#[derive(Accounts)]
pub struct ProcessFullWithdrawal<'info> {
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
        constraint = full_withdrawal.investment == investment.key()
    )]
    pub investment: Account<'info, Investment>,

    #[account(mut)]
    pub full_withdrawal: Account<'info, FullWithdrawal>,
}

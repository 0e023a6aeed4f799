// instructions/snapshot.rs
//
// Read-only views. Nothing is mutated; the derived figures are logged so
// off-chain callers can simulate these instructions for a point-in-time
// answer without running the accrual math themselves.
use anchor_lang::prelude::*;

use crate::state::*;

pub fn get_investment_snapshot(ctx: Context<GetInvestmentSnapshot>) -> Result<()> {
    let clock = Clock::get()?;
    let investment = &ctx.accounts.investment;

    let snapshot = investment.snapshot(clock.unix_timestamp)?;

    msg!("Investment: {}", investment.key());
    msg!("Principal: {} cents", snapshot.principal);
    msg!("Available profit: {} cents", snapshot.available_profit);
    msg!("Days passed: {}", snapshot.days_passed);
    msg!("Days remaining: {}", snapshot.days_remaining);
    msg!("Completed: {}", snapshot.is_completed);

    Ok(())
}

pub fn get_referral_stats(ctx: Context<GetReferralStats>) -> Result<()> {
    let investor = &ctx.accounts.investor;

    let stats = investor.referral_stats();

    msg!("Investor: {}", investor.owner);
    msg!("Direct referrals: {}", stats.level1_count);
    msg!("Next referral rate: {} bps", stats.current_tier_bps);
    msg!("Total earned: {} cents", stats.total_earnings);
    msg!("Withdrawn: {} cents", stats.withdrawn_earnings);
    msg!("Pending: {} cents", stats.pending_earnings);

    Ok(())
}

#[derive(Accounts)]
pub struct GetInvestmentSnapshot<'info> {
    pub investment: Account<'info, Investment>,
}

#[derive(Accounts)]
pub struct GetReferralStats<'info> {
    pub investor: Account<'info, Investor>,
}

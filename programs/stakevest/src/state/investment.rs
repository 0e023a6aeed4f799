// state/investment.rs
use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakevestError;
use crate::state::platform_config::PlanTier;
use crate::utils::calculations::{
    bonus_unlock_days, current_return, days_passed, days_remaining, same_day,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvestmentStatus {
    Pending = 0,
    Active = 1,
    Completed = 2,
    Withdrawn = 3,
    EarlyWithdrawn = 4,
    Cancelled = 5,
}

/// How a partial withdrawal was classified at processing time.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum WithdrawKind {
    Profit = 0,
    Bonus = 1,
}

/// Point-in-time read model for an investment, derived at `now` without
/// side effects. `is_completed` is computed lazily from the end date, so a
/// matured investment reads as completed even before any status sweep runs.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InvestmentSnapshot {
    pub principal: u64,
    pub available_profit: u64,
    pub days_passed: u64,
    pub days_remaining: u64,
    pub is_completed: bool,
}

/// The unit of staked capital. All monetary fields are cents; all rates are
/// hundredths of a monthly percent.
#[account]
pub struct Investment {
    pub owner: Pubkey,
    pub index: u64,
    pub plan: PlanTier,

    /// Capital currently earning interest. Grows on upgrades and
    /// reinvestments; withdrawals close the investment instead of
    /// shrinking it.
    pub principal: u64,

    pub base_rate: u16,
    pub duration_bonus_rate: u16,
    /// Always base_rate + duration_bonus_rate, recomputed on every change
    pub effective_rate: u16,

    pub duration_months: u8,

    /// Interest locked in by the last accrual-baseline reset
    pub accumulated_interest: u64,

    /// Date new accrual is measured from: the last upgrade, or activation.
    /// Zero until the investment is activated, meaning no accrual yet.
    pub accrual_baseline: i64,

    /// Profit already paid out through partial withdrawals in the current
    /// accrual period
    pub withdrawn_profit: u64,

    /// One-time cash bonus fixed at creation from (duration, principal)
    pub duration_cash_bonus: u64,
    pub bonus_withdrawn: bool,

    pub status: InvestmentStatus,
    pub start_date: i64,
    pub end_date: i64,
    pub created_at: i64,
    pub completed_at: i64,

    /// Number of upgrade requests ever created; doubles as the next
    /// request PDA index
    pub upgrade_count: u16,
    pub pending_upgrade: bool,

    /// Number of withdrawal requests ever created; doubles as the next
    /// request PDA index
    pub withdrawal_count: u16,
    pub withdrawal_requested: bool,

    /// Total ever paid out on this investment (profit, bonus, payouts)
    pub total_paid_out: u64,

    pub bump: u8,
}

impl Investment {
    pub const SIZE: usize = 8 + // discriminator
        32 + // owner
        8 + // index
        1 + // plan
        8 + // principal
        2 + // base_rate
        2 + // duration_bonus_rate
        2 + // effective_rate
        1 + // duration_months
        8 + // accumulated_interest
        8 + // accrual_baseline
        8 + // withdrawn_profit
        8 + // duration_cash_bonus
        1 + // bonus_withdrawn
        1 + // status
        8 + // start_date
        8 + // end_date
        8 + // created_at
        8 + // completed_at
        2 + // upgrade_count
        1 + // pending_upgrade
        2 + // withdrawal_count
        1 + // withdrawal_requested
        8 + // total_paid_out
        1; // bump

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        owner: Pubkey,
        index: u64,
        plan: PlanTier,
        principal: u64,
        base_rate: u16,
        duration_bonus_rate: u16,
        duration_months: u8,
        duration_cash_bonus: u64,
        created_at: i64,
        bump: u8,
    ) -> Self {
        Self {
            owner,
            index,
            plan,
            principal,
            base_rate,
            duration_bonus_rate,
            effective_rate: base_rate + duration_bonus_rate,
            duration_months,
            accumulated_interest: 0,
            accrual_baseline: 0,
            withdrawn_profit: 0,
            duration_cash_bonus,
            bonus_withdrawn: false,
            status: InvestmentStatus::Pending,
            start_date: 0,
            end_date: 0,
            created_at,
            completed_at: 0,
            upgrade_count: 0,
            pending_upgrade: false,
            withdrawal_count: 0,
            withdrawal_requested: false,
            total_paid_out: 0,
            bump,
        }
    }

    // ------------------------------------------------------------------
    // Accrual reads (pure)
    // ------------------------------------------------------------------

    /// Whole days since the accrual baseline; zero before activation.
    pub fn days_since_baseline(&self, now: i64) -> u64 {
        if self.accrual_baseline == 0 {
            return 0;
        }
        days_passed(self.accrual_baseline, now)
    }

    /// Total profit accrued as of `now`: locked-in interest plus the
    /// current period. Zero accrual before activation.
    pub fn current_return(&self, now: i64) -> Result<u64> {
        current_return(
            self.principal,
            self.effective_rate,
            self.days_since_baseline(now),
            self.accumulated_interest,
        )
    }

    /// Accrued profit not yet paid out
    pub fn available_profit(&self, now: i64) -> Result<u64> {
        Ok(self
            .current_return(now)?
            .saturating_sub(self.withdrawn_profit))
    }

    /// Maturity is computed lazily: an Active investment past its end date
    /// counts as completed even if no sweep has flipped the status yet.
    pub fn is_matured(&self, now: i64) -> bool {
        match self.status {
            InvestmentStatus::Completed => true,
            InvestmentStatus::Active => self.end_date != 0 && now >= self.end_date,
            _ => false,
        }
    }

    pub fn snapshot(&self, now: i64) -> Result<InvestmentSnapshot> {
        Ok(InvestmentSnapshot {
            principal: self.principal,
            available_profit: self.available_profit(now)?,
            days_passed: self.days_since_baseline(now),
            days_remaining: if self.end_date == 0 {
                0
            } else {
                days_remaining(self.end_date, now)
            },
            is_completed: self.is_matured(now),
        })
    }

    // ------------------------------------------------------------------
    // Lifecycle transitions (pure, applied inside the store transaction)
    // ------------------------------------------------------------------

    fn ensure_active(&self) -> Result<()> {
        if self.status != InvestmentStatus::Active {
            return Err(StakevestError::InvestmentNotActive.into());
        }
        Ok(())
    }

    /// Pending -> Active. Starts the maturity schedule and the first
    /// accrual period.
    pub fn activate(&mut self, now: i64) -> Result<()> {
        if self.status != InvestmentStatus::Pending {
            return Err(StakevestError::InvestmentNotPending.into());
        }
        self.status = InvestmentStatus::Active;
        self.start_date = now;
        self.end_date = now + self.duration_months as i64 * DAYS_PER_MONTH as i64 * SECONDS_PER_DAY;
        self.accrual_baseline = now;
        Ok(())
    }

    /// Pending -> Cancelled
    pub fn cancel(&mut self, now: i64) -> Result<()> {
        if self.status != InvestmentStatus::Pending {
            return Err(StakevestError::InvestmentNotPending.into());
        }
        self.status = InvestmentStatus::Cancelled;
        self.completed_at = now;
        Ok(())
    }

    /// Fold the current period's accrual into `accumulated_interest` and
    /// open a fresh period at `now`. Shared by every upgrade-shaped
    /// operation. Rejects a second reset within the same UTC day.
    fn reset_accrual_baseline(&mut self, now: i64) -> Result<()> {
        if same_day(self.accrual_baseline, now) {
            return Err(StakevestError::SameDayUpgrade.into());
        }
        self.accumulated_interest = self.current_return(now)?;
        self.accrual_baseline = now;
        self.withdrawn_profit = 0;
        Ok(())
    }

    /// Amount upgrade: more principal, possibly a better plan rate. The
    /// maturity schedule (start/end dates) is deliberately untouched.
    pub fn apply_amount_upgrade(
        &mut self,
        additional_amount: u64,
        new_plan: PlanTier,
        new_base_rate: u16,
        now: i64,
    ) -> Result<()> {
        self.ensure_active()?;
        self.reset_accrual_baseline(now)?;
        self.principal = self
            .principal
            .checked_add(additional_amount)
            .ok_or(StakevestError::MathOverflow)?;
        self.plan = new_plan;
        self.base_rate = new_base_rate;
        self.effective_rate = self.base_rate + self.duration_bonus_rate;
        Ok(())
    }

    /// Duration upgrade: longer commitment, better duration rate bonus.
    /// Duration may only increase; the maturity schedule stays as created.
    pub fn apply_duration_upgrade(
        &mut self,
        new_duration_months: u8,
        new_duration_bonus_rate: u16,
        now: i64,
    ) -> Result<()> {
        self.ensure_active()?;
        if new_duration_months <= self.duration_months {
            return Err(StakevestError::DurationNotExtended.into());
        }
        self.reset_accrual_baseline(now)?;
        self.duration_months = new_duration_months;
        self.duration_bonus_rate = new_duration_bonus_rate;
        self.effective_rate = self.base_rate + self.duration_bonus_rate;
        Ok(())
    }

    /// Reinvested referral earnings ride the same baseline reset as an
    /// amount upgrade; the plan tier is bumped when the new total crosses
    /// a tier boundary.
    pub fn apply_reinvestment(
        &mut self,
        amount: u64,
        new_plan: PlanTier,
        new_base_rate: u16,
        now: i64,
    ) -> Result<()> {
        self.apply_amount_upgrade(amount, new_plan, new_base_rate, now)
    }

    /// Classify a partial-withdrawal amount at processing time. A bonus
    /// claim requires the amount to match the duration cash bonus within
    /// tolerance, the bonus to be unclaimed, and the half-duration unlock
    /// to have elapsed; anything else is a profit claim.
    pub fn classify_partial(&self, amount: u64, now: i64) -> WithdrawKind {
        if self.duration_cash_bonus > 0
            && !self.bonus_withdrawn
            && amount.abs_diff(self.duration_cash_bonus) < BONUS_AMOUNT_TOLERANCE
            && days_passed(self.start_date, now) >= bonus_unlock_days(self.duration_months)
        {
            WithdrawKind::Bonus
        } else {
            WithdrawKind::Profit
        }
    }

    /// Apply an approved partial withdrawal. Exactly one of the two
    /// effects happens: the bonus flag flips, or the profit counter grows.
    pub fn apply_partial_withdrawal(&mut self, amount: u64, now: i64) -> Result<WithdrawKind> {
        self.ensure_active()?;
        match self.classify_partial(amount, now) {
            WithdrawKind::Bonus => {
                self.bonus_withdrawn = true;
                self.total_paid_out = self
                    .total_paid_out
                    .checked_add(amount)
                    .ok_or(StakevestError::MathOverflow)?;
                Ok(WithdrawKind::Bonus)
            }
            WithdrawKind::Profit => {
                if amount == 0 {
                    return Err(StakevestError::InvalidWithdrawalAmount.into());
                }
                if amount > self.available_profit(now)? {
                    return Err(StakevestError::InsufficientProfit.into());
                }
                self.withdrawn_profit = self
                    .withdrawn_profit
                    .checked_add(amount)
                    .ok_or(StakevestError::MathOverflow)?;
                self.total_paid_out = self
                    .total_paid_out
                    .checked_add(amount)
                    .ok_or(StakevestError::MathOverflow)?;
                Ok(WithdrawKind::Profit)
            }
        }
    }

    /// Payout if the investment were exited early: the principal netted of
    /// profit already paid out. All interest, locked-in or accrued, is
    /// forfeited as the penalty.
    pub fn early_withdrawal_payout(&self) -> u64 {
        self.principal.saturating_sub(self.withdrawn_profit)
    }

    /// Active -> EarlyWithdrawn, only within the 30-day window from
    /// activation. Returns the payout.
    pub fn apply_early_withdrawal(&mut self, now: i64) -> Result<u64> {
        self.ensure_active()?;
        if days_passed(self.start_date, now) > EARLY_WITHDRAWAL_WINDOW_DAYS {
            return Err(StakevestError::EarlyWithdrawalWindowClosed.into());
        }
        let payout = self.early_withdrawal_payout();
        self.status = InvestmentStatus::EarlyWithdrawn;
        self.completed_at = now;
        self.total_paid_out = self
            .total_paid_out
            .checked_add(payout)
            .ok_or(StakevestError::MathOverflow)?;
        Ok(payout)
    }

    /// Payout at maturity: principal plus unpaid profit plus the cash
    /// bonus if it was never claimed.
    pub fn full_withdrawal_payout(&self, now: i64) -> Result<u64> {
        let mut payout = self
            .principal
            .checked_add(self.available_profit(now)?)
            .ok_or(StakevestError::MathOverflow)?;
        if !self.bonus_withdrawn {
            payout = payout
                .checked_add(self.duration_cash_bonus)
                .ok_or(StakevestError::MathOverflow)?;
        }
        Ok(payout)
    }

    /// (Active past end date | Completed) -> Withdrawn. Returns the payout.
    pub fn apply_full_withdrawal(&mut self, now: i64) -> Result<u64> {
        if !self.is_matured(now) {
            return Err(StakevestError::InvestmentNotMatured.into());
        }
        let payout = self.full_withdrawal_payout(now)?;
        if !self.bonus_withdrawn && self.duration_cash_bonus > 0 {
            self.bonus_withdrawn = true;
        }
        self.status = InvestmentStatus::Withdrawn;
        self.completed_at = now;
        self.total_paid_out = self
            .total_paid_out
            .checked_add(payout)
            .ok_or(StakevestError::MathOverflow)?;
        Ok(payout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = SECONDS_PER_DAY;
    const T0: i64 = 1_700_000_000;

    /// 6-month Advanced plan, $1200 principal, activated at T0.
    fn active_investment() -> Investment {
        let mut inv = Investment::new(
            Pubkey::new_unique(),
            0,
            PlanTier::Advanced,
            120_000,
            1700,
            150,
            6,
            50_000,
            T0 - DAY,
            255,
        );
        inv.activate(T0).unwrap();
        inv
    }

    #[test]
    fn test_activation_sets_schedule_and_baseline() {
        let inv = active_investment();
        assert_eq!(inv.status, InvestmentStatus::Active);
        assert_eq!(inv.start_date, T0);
        assert_eq!(inv.end_date, T0 + 180 * DAY);
        assert_eq!(inv.accrual_baseline, T0);
        assert_eq!(inv.effective_rate, 1850);
    }

    #[test]
    fn test_activate_requires_pending() {
        let mut inv = active_investment();
        assert!(inv.activate(T0 + DAY).is_err());
        inv.status = InvestmentStatus::Cancelled;
        assert!(inv.activate(T0 + DAY).is_err());
    }

    #[test]
    fn test_no_accrual_before_activation() {
        let inv = Investment::new(
            Pubkey::new_unique(),
            0,
            PlanTier::Starter,
            50_000,
            1400,
            0,
            3,
            0,
            T0,
            255,
        );
        assert_eq!(inv.current_return(T0 + 90 * DAY).unwrap(), 0);
        assert_eq!(inv.days_since_baseline(T0 + 90 * DAY), 0);
    }

    #[test]
    fn test_accrual_is_monotonic_over_lifetime() {
        let inv = active_investment();
        let mut prev = 0;
        for day in 0..200 {
            let ret = inv.current_return(T0 + day * DAY).unwrap();
            assert!(ret >= prev);
            prev = ret;
        }
    }

    #[test]
    fn test_amount_upgrade_locks_interest_and_preserves_maturity() {
        let mut inv = active_investment();
        let now = T0 + 10 * DAY;
        // 120_000 * 1850 * 10 / 300_000 = 7_400
        let expected_locked = inv.current_return(now).unwrap();
        assert_eq!(expected_locked, 7_400);

        let (start, end) = (inv.start_date, inv.end_date);
        inv.withdrawn_profit = 2_000;
        inv.apply_amount_upgrade(200_000, PlanTier::Pro, 2000, now)
            .unwrap();

        assert_eq!(inv.principal, 320_000);
        assert_eq!(inv.accumulated_interest, expected_locked);
        assert_eq!(inv.accrual_baseline, now);
        assert_eq!(inv.withdrawn_profit, 0);
        assert_eq!(inv.effective_rate, 2150);
        assert_eq!(inv.plan, PlanTier::Pro);
        // an upgrade never moves the maturity schedule
        assert_eq!(inv.start_date, start);
        assert_eq!(inv.end_date, end);
        // new period starts clean
        assert_eq!(inv.current_return(now).unwrap(), expected_locked);
    }

    #[test]
    fn test_same_day_upgrade_rejected() {
        let mut inv = active_investment();
        let now = T0 + 10 * DAY;
        inv.apply_amount_upgrade(10_000, PlanTier::Advanced, 1700, now)
            .unwrap();
        let later_same_day = now + 3_600;
        let err = inv
            .apply_amount_upgrade(10_000, PlanTier::Advanced, 1700, later_same_day)
            .unwrap_err();
        assert_eq!(err, StakevestError::SameDayUpgrade.into());
        // activation day itself also counts as a baseline day
        let mut fresh = active_investment();
        assert!(fresh
            .apply_amount_upgrade(10_000, PlanTier::Advanced, 1700, T0 + 100)
            .is_err());
    }

    #[test]
    fn test_duration_upgrade_only_extends() {
        let mut inv = active_investment();
        let now = T0 + 20 * DAY;
        assert!(inv.apply_duration_upgrade(6, 150, now).is_err());
        assert!(inv.apply_duration_upgrade(3, 0, now).is_err());

        let (start, end) = (inv.start_date, inv.end_date);
        inv.apply_duration_upgrade(12, 300, now).unwrap();
        assert_eq!(inv.duration_months, 12);
        assert_eq!(inv.effective_rate, 2000);
        assert_eq!(inv.start_date, start);
        assert_eq!(inv.end_date, end);
        assert_eq!(inv.accrual_baseline, now);
    }

    #[test]
    fn test_bonus_claim_scenario() {
        // $1200 / 6 months => $500 bonus, unlocked from day 90
        let mut inv = active_investment();
        let day95 = T0 + 95 * DAY;

        assert_eq!(inv.classify_partial(50_000, day95), WithdrawKind::Bonus);
        let kind = inv.apply_partial_withdrawal(50_000, day95).unwrap();
        assert_eq!(kind, WithdrawKind::Bonus);
        assert!(inv.bonus_withdrawn);
        assert_eq!(inv.withdrawn_profit, 0);
    }

    #[test]
    fn test_bonus_claim_locked_before_half_duration() {
        let inv = active_investment();
        let day50 = T0 + 50 * DAY;
        // matching amount but the unlock has not elapsed: profit claim
        assert_eq!(inv.classify_partial(50_000, day50), WithdrawKind::Profit);
    }

    #[test]
    fn test_bonus_claim_only_once() {
        let mut inv = active_investment();
        let day95 = T0 + 95 * DAY;
        inv.apply_partial_withdrawal(50_000, day95).unwrap();
        // a second matching request is a profit claim and must fit accrual
        assert_eq!(
            inv.classify_partial(50_000, day95),
            WithdrawKind::Profit
        );
    }

    #[test]
    fn test_three_month_plan_never_bonus() {
        let mut inv = Investment::new(
            Pubkey::new_unique(),
            0,
            PlanTier::Advanced,
            120_000,
            1700,
            0,
            3,
            0,
            T0 - DAY,
            255,
        );
        inv.activate(T0).unwrap();
        assert_eq!(inv.duration_cash_bonus, 0);
        assert_eq!(
            inv.classify_partial(50_000, T0 + 80 * DAY),
            WithdrawKind::Profit
        );
    }

    #[test]
    fn test_profit_claim_bounded_by_available() {
        let mut inv = active_investment();
        let day10 = T0 + 10 * DAY;
        let available = inv.available_profit(day10).unwrap();
        assert_eq!(available, 7_400);

        assert!(inv.apply_partial_withdrawal(available + 1, day10).is_err());
        assert!(inv.apply_partial_withdrawal(0, day10).is_err());

        inv.apply_partial_withdrawal(5_000, day10).unwrap();
        assert_eq!(inv.withdrawn_profit, 5_000);
        assert_eq!(inv.available_profit(day10).unwrap(), 2_400);
    }

    #[test]
    fn test_early_withdrawal_forfeits_interest() {
        let mut inv = active_investment();
        inv.principal = 100_000;
        inv.accumulated_interest = 5_000;
        inv.withdrawn_profit = 1_000;

        assert_eq!(inv.early_withdrawal_payout(), 99_000);
        let payout = inv.apply_early_withdrawal(T0 + 20 * DAY).unwrap();
        assert_eq!(payout, 99_000);
        assert_eq!(inv.status, InvestmentStatus::EarlyWithdrawn);
        assert_eq!(inv.completed_at, T0 + 20 * DAY);
    }

    #[test]
    fn test_early_withdrawal_window_closes_after_30_days() {
        let mut inv = active_investment();
        assert!(inv.apply_early_withdrawal(T0 + 31 * DAY).is_err());
        // day 30 itself is still inside the window
        assert!(inv.apply_early_withdrawal(T0 + 30 * DAY).is_ok());
    }

    #[test]
    fn test_early_withdrawal_terminal_states_absorb() {
        let mut inv = active_investment();
        inv.apply_early_withdrawal(T0 + 5 * DAY).unwrap();
        let paid = inv.total_paid_out;
        let err = inv.apply_early_withdrawal(T0 + 6 * DAY).unwrap_err();
        assert_eq!(err, StakevestError::InvestmentNotActive.into());
        assert_eq!(inv.total_paid_out, paid);
    }

    #[test]
    fn test_full_withdrawal_requires_maturity() {
        let mut inv = active_investment();
        assert!(inv.apply_full_withdrawal(T0 + 100 * DAY).is_err());

        // lazily matured: still Active but past the end date
        let at_maturity = inv.end_date + DAY;
        let expected = inv.full_withdrawal_payout(at_maturity).unwrap();
        let payout = inv.apply_full_withdrawal(at_maturity).unwrap();
        assert_eq!(payout, expected);
        // principal + 181 days of accrual + unclaimed $500 bonus
        let accrued = inv.accumulated_interest; // folded state untouched here
        assert_eq!(accrued, 0);
        assert_eq!(
            payout,
            120_000 + 120_000 * 1850 * 181 / 300_000 + 50_000
        );
        assert_eq!(inv.status, InvestmentStatus::Withdrawn);
        assert!(inv.bonus_withdrawn);
    }

    #[test]
    fn test_full_withdrawal_excludes_claimed_bonus_and_paid_profit() {
        let mut inv = active_investment();
        let day95 = T0 + 95 * DAY;
        inv.apply_partial_withdrawal(50_000, day95).unwrap(); // bonus claim
        inv.apply_partial_withdrawal(10_000, day95).unwrap(); // profit claim

        let at_maturity = inv.end_date;
        let payout = inv.apply_full_withdrawal(at_maturity).unwrap();
        let accrued = 120_000 * 1850 * 180 / 300_000;
        assert_eq!(payout, 120_000 + accrued - 10_000);
    }

    #[test]
    fn test_snapshot_reads_lazily() {
        let inv = active_investment();
        let day10 = T0 + 10 * DAY;
        let snap = inv.snapshot(day10).unwrap();
        assert_eq!(snap.principal, 120_000);
        assert_eq!(snap.available_profit, 7_400);
        assert_eq!(snap.days_passed, 10);
        assert_eq!(snap.days_remaining, 170);
        assert!(!snap.is_completed);

        let past_end = inv.end_date + 1;
        let snap = inv.snapshot(past_end).unwrap();
        assert_eq!(snap.days_remaining, 0);
        assert!(snap.is_completed);
    }

    #[test]
    fn test_cancel_only_from_pending() {
        let mut inv = Investment::new(
            Pubkey::new_unique(),
            0,
            PlanTier::Starter,
            20_000,
            1400,
            0,
            3,
            0,
            T0,
            255,
        );
        inv.cancel(T0 + DAY).unwrap();
        assert_eq!(inv.status, InvestmentStatus::Cancelled);
        assert!(inv.cancel(T0 + 2 * DAY).is_err());

        let mut active = active_investment();
        assert!(active.cancel(T0 + DAY).is_err());
    }

    #[test]
    fn test_withdrawn_profit_never_exceeds_accrued() {
        let mut inv = active_investment();
        let mut now = T0;
        // walk the investment forward, withdrawing the maximum every week
        for _ in 0..10 {
            now += 7 * DAY;
            let available = inv.available_profit(now).unwrap();
            if available > 0 {
                inv.apply_partial_withdrawal(available, now).unwrap();
            }
            assert!(inv.withdrawn_profit <= inv.current_return(now).unwrap());
        }
    }
}

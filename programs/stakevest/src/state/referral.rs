// state/referral.rs
use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakevestError;
use crate::state::investment::InvestmentStatus;
use crate::utils::calculations::days_passed;

/// One commission row per (referrer, referred investment). The rate is
/// locked in when the row is created and never recomputed, so a referrer's
/// past commissions are immune to later changes in their referral list.
#[account]
pub struct ReferralEarning {
    pub referrer: Pubkey,
    pub referred_user: Pubkey,
    pub investment: Pubkey,

    /// 1 = direct referral, 2 = referral-of-referral
    pub level: u8,

    /// Commission rate applied, basis points
    pub rate_bps: u16,

    /// Commission amount in cents
    pub amount: u64,

    /// Creation date of the referred investment; anchors the 31-day lock
    pub investment_created_at: i64,

    pub withdrawn: bool,
    pub withdrawn_at: i64,

    /// Payout destination recorded at withdrawal, or the target investment
    /// key when the earning was reinvested
    pub payout_address: Pubkey,

    /// True when the earning was consumed by a reinvestment instead of a
    /// payout request
    pub reinvested: bool,

    pub bump: u8,
}

impl ReferralEarning {
    pub const SIZE: usize = 8 + // discriminator
        32 + // referrer
        32 + // referred_user
        32 + // investment
        1 + // level
        2 + // rate_bps
        8 + // amount
        8 + // investment_created_at
        1 + // withdrawn
        8 + // withdrawn_at
        32 + // payout_address
        1 + // reinvested
        1; // bump

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        referrer: Pubkey,
        referred_user: Pubkey,
        investment: Pubkey,
        level: u8,
        rate_bps: u16,
        amount: u64,
        investment_created_at: i64,
        bump: u8,
    ) -> Self {
        Self {
            referrer,
            referred_user,
            investment,
            level,
            rate_bps,
            amount,
            investment_created_at,
            withdrawn: false,
            withdrawn_at: 0,
            payout_address: Pubkey::default(),
            reinvested: false,
            bump,
        }
    }

    /// Withdrawable once 31 days have passed since the referred
    /// investment was created.
    pub fn is_unlocked(&self, now: i64) -> bool {
        days_passed(self.investment_created_at, now) >= REFERRAL_LOCK_DAYS
    }

    /// Whether the earning can be settled right now: past the lock, not
    /// yet settled, and the referred investment still active. A commission
    /// on an early-withdrawn (refunded) investment is never paid out.
    pub fn is_payable(&self, investment_status: InvestmentStatus, now: i64) -> bool {
        !self.withdrawn
            && self.is_unlocked(now)
            && investment_status == InvestmentStatus::Active
    }

    pub fn ensure_withdrawable(&self, now: i64) -> Result<()> {
        if self.withdrawn {
            return Err(StakevestError::ReferralEarningAlreadyWithdrawn.into());
        }
        if !self.is_unlocked(now) {
            return Err(StakevestError::ReferralEarningLocked.into());
        }
        Ok(())
    }

    /// Mark the earning paid out to `destination`.
    pub fn mark_withdrawn(&mut self, destination: Pubkey, now: i64) -> Result<()> {
        self.ensure_withdrawable(now)?;
        self.withdrawn = true;
        self.withdrawn_at = now;
        self.payout_address = destination;
        Ok(())
    }

    /// Mark the earning consumed as principal on `target_investment`.
    pub fn mark_reinvested(&mut self, target_investment: Pubkey, now: i64) -> Result<()> {
        self.ensure_withdrawable(now)?;
        self.withdrawn = true;
        self.reinvested = true;
        self.withdrawn_at = now;
        self.payout_address = target_investment;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::calculations::{referral_commission, referral_tier_bps};

    const DAY: i64 = SECONDS_PER_DAY;
    const T0: i64 = 1_700_000_000;

    fn earning(amount: u64, created_at: i64) -> ReferralEarning {
        ReferralEarning::new(
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            1,
            300,
            amount,
            created_at,
            255,
        )
    }

    #[test]
    fn test_unlocks_after_31_days() {
        let e = earning(1_000, T0);
        assert!(!e.is_unlocked(T0 + 30 * DAY));
        assert!(!e.is_unlocked(T0 + 31 * DAY - 1));
        assert!(e.is_unlocked(T0 + 31 * DAY));
    }

    #[test]
    fn test_mark_withdrawn_once() {
        let mut e = earning(1_000, T0);
        let dest = Pubkey::new_unique();

        let err = e.mark_withdrawn(dest, T0 + 20 * DAY).unwrap_err();
        assert_eq!(err, StakevestError::ReferralEarningLocked.into());

        e.mark_withdrawn(dest, T0 + 40 * DAY).unwrap();
        assert!(e.withdrawn);
        assert_eq!(e.payout_address, dest);

        let err = e.mark_withdrawn(dest, T0 + 41 * DAY).unwrap_err();
        assert_eq!(err, StakevestError::ReferralEarningAlreadyWithdrawn.into());
    }

    #[test]
    fn test_mark_reinvested_sets_target() {
        let mut e = earning(2_000, T0);
        let target = Pubkey::new_unique();
        e.mark_reinvested(target, T0 + 35 * DAY).unwrap();
        assert!(e.withdrawn);
        assert!(e.reinvested);
        assert_eq!(e.payout_address, target);
        assert!(e.mark_reinvested(target, T0 + 36 * DAY).is_err());
    }

    #[test]
    fn test_payable_requires_active_investment() {
        let e = earning(1_000, T0);
        let unlocked = T0 + 40 * DAY;
        assert!(e.is_payable(InvestmentStatus::Active, unlocked));
        assert!(!e.is_payable(InvestmentStatus::EarlyWithdrawn, unlocked));
        assert!(!e.is_payable(InvestmentStatus::Withdrawn, unlocked));
        assert!(!e.is_payable(InvestmentStatus::Active, T0 + 10 * DAY));

        let mut settled = earning(1_000, T0);
        settled.mark_withdrawn(Pubkey::new_unique(), unlocked).unwrap();
        assert!(!settled.is_payable(InvestmentStatus::Active, unlocked));
    }

    #[test]
    fn test_batch_settles_only_payable_rows() {
        // three unlocked rows and one still inside the lock: the batch
        // pays exactly the three and leaves the locked row untouched
        let now = T0 + 40 * DAY;
        let mut rows = vec![
            earning(3_000, T0),
            earning(4_000, T0 + 2 * DAY),
            earning(5_000, T0 + 5 * DAY),
            earning(6_000, T0 + 20 * DAY), // unlocks at day 51
        ];
        let dest = Pubkey::new_unique();

        let mut total = 0u64;
        for row in rows.iter_mut() {
            if !row.is_payable(InvestmentStatus::Active, now) {
                continue;
            }
            row.mark_withdrawn(dest, now).unwrap();
            total += row.amount;
        }

        assert_eq!(total, 12_000);
        assert!(rows[..3].iter().all(|r| r.withdrawn));
        assert!(!rows[3].withdrawn);
        assert_eq!(rows[3].withdrawn_at, 0);
    }

    #[test]
    fn test_rank_locked_rates_are_order_independent() {
        // Referrals R1..R10 registered in that order earn the rate of
        // their registration rank on a $1000 investment, no matter when
        // the investments themselves are created.
        let principal = 100_000u64;
        let expected = [
            (1, 3_000),
            (3, 4_000),
            (6, 6_000),
            (10, 7_000),
        ];
        for (rank, commission) in expected {
            let rate = referral_tier_bps(rank);
            assert_eq!(referral_commission(principal, rate).unwrap(), commission);
        }
    }
}

// utils/calculations.rs
use crate::constants::*;
use crate::error::StakevestError;
use anchor_lang::prelude::*;

/// Whole days elapsed between `base` and `now`, clamped to zero when the
/// clock reads earlier than the baseline.
pub fn days_passed(base: i64, now: i64) -> u64 {
    if now <= base {
        return 0;
    }
    ((now - base) / SECONDS_PER_DAY) as u64
}

/// Whole days remaining until `end`, rounded up; zero once `end` is reached.
pub fn days_remaining(end: i64, now: i64) -> u64 {
    if now >= end {
        return 0;
    }
    let diff = end - now;
    ((diff + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY) as u64
}

/// Whether two timestamps fall into the same UTC day bucket. Used to reject
/// a second accrual-baseline reset within one day.
pub fn same_day(a: i64, b: i64) -> bool {
    a.div_euclid(SECONDS_PER_DAY) == b.div_euclid(SECONDS_PER_DAY)
}

/// Total profit accrued as of `days_passed` days after the accrual baseline:
/// the interest locked in by earlier baseline resets plus the current
/// period's `principal * (rate / 30) * days / 100`.
///
/// Monotonically non-decreasing in `days_passed` for fixed other inputs.
pub fn current_return(
    principal: u64,
    effective_rate: u16,
    days_passed: u64,
    accumulated_interest: u64,
) -> Result<u64> {
    let period_profit = (principal as u128)
        .checked_mul(effective_rate as u128)
        .and_then(|v| v.checked_mul(days_passed as u128))
        .ok_or(StakevestError::MathOverflow)?
        / (DAYS_PER_MONTH as u128 * RATE_SCALE as u128);

    let period_profit = u64::try_from(period_profit).map_err(|_| StakevestError::MathOverflow)?;

    accumulated_interest
        .checked_add(period_profit)
        .ok_or(StakevestError::MathOverflow.into())
}

/// Level-1 referral commission rate (basis points) for a referral's ordinal
/// rank among the referrer's direct referrals. Rank is 1-based; a rank of
/// zero (no referrals yet) reads as the first tier, which is also the rate
/// shown as "what a new referral would earn" for a referrer with zero
/// referrals.
pub fn referral_tier_bps(rank: u32) -> u16 {
    match rank {
        0 | 1 => REFERRAL_TIER_BPS[0],
        2..=3 => REFERRAL_TIER_BPS[1],
        4..=5 => REFERRAL_TIER_BPS[2],
        6..=9 => REFERRAL_TIER_BPS[3],
        _ => REFERRAL_TIER_BPS[4],
    }
}

/// Commission on a referred investment's principal at `rate_bps`.
pub fn referral_commission(principal: u64, rate_bps: u16) -> Result<u64> {
    let commission = (principal as u128)
        .checked_mul(rate_bps as u128)
        .ok_or(StakevestError::MathOverflow)?
        / BASIS_POINTS as u128;
    u64::try_from(commission).map_err(|_| StakevestError::MathOverflow.into())
}

/// One-time duration cash bonus for a (duration, principal-at-creation)
/// pair. Fixed at creation; a 3-month plan never carries one.
pub fn duration_cash_bonus(duration_months: u8, principal_at_creation: u64) -> u64 {
    if duration_months < 6 {
        return 0;
    }
    if principal_at_creation >= CASH_BONUS_LARGE_THRESHOLD {
        CASH_BONUS_LARGE
    } else if principal_at_creation >= CASH_BONUS_SMALL_THRESHOLD {
        CASH_BONUS_SMALL
    } else {
        0
    }
}

/// Days after the accrual baseline at which the cash bonus unlocks:
/// half the plan duration (15 days per plan month).
pub fn bonus_unlock_days(duration_months: u8) -> u64 {
    duration_months as u64 * DAYS_PER_MONTH / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_passed_floor_and_clamp() {
        let base = 1_700_000_000;
        assert_eq!(days_passed(base, base), 0);
        assert_eq!(days_passed(base, base - 500), 0);
        assert_eq!(days_passed(base, base + SECONDS_PER_DAY - 1), 0);
        assert_eq!(days_passed(base, base + SECONDS_PER_DAY), 1);
        assert_eq!(days_passed(base, base + 10 * SECONDS_PER_DAY + 3600), 10);
    }

    #[test]
    fn test_days_remaining_rounds_up() {
        let end = 1_700_000_000;
        assert_eq!(days_remaining(end, end), 0);
        assert_eq!(days_remaining(end, end + 50), 0);
        assert_eq!(days_remaining(end, end - 1), 1);
        assert_eq!(days_remaining(end, end - SECONDS_PER_DAY), 1);
        assert_eq!(days_remaining(end, end - SECONDS_PER_DAY - 1), 2);
    }

    #[test]
    fn test_current_return_scenario() {
        // $1000 at 17%/month, 10 days into the period, nothing carried over:
        // 100_000 * 1700 * 10 / 300_000 = 5666 cents ($56.66 floored)
        assert_eq!(current_return(100_000, 1700, 10, 0).unwrap(), 5_666);
    }

    #[test]
    fn test_current_return_carries_accumulated_interest() {
        assert_eq!(current_return(100_000, 1700, 0, 4_200).unwrap(), 4_200);
        assert_eq!(current_return(100_000, 1700, 10, 4_200).unwrap(), 9_866);
    }

    #[test]
    fn test_current_return_monotonic_in_time() {
        let mut prev = 0;
        for days in 0..400 {
            let ret = current_return(123_456, 2350, days, 777).unwrap();
            assert!(ret >= prev, "accrual decreased at day {}", days);
            prev = ret;
        }
    }

    #[test]
    fn test_referral_tier_table() {
        assert_eq!(referral_tier_bps(0), 300);
        assert_eq!(referral_tier_bps(1), 300);
        assert_eq!(referral_tier_bps(2), 400);
        assert_eq!(referral_tier_bps(3), 400);
        assert_eq!(referral_tier_bps(4), 500);
        assert_eq!(referral_tier_bps(5), 500);
        assert_eq!(referral_tier_bps(6), 600);
        assert_eq!(referral_tier_bps(9), 600);
        assert_eq!(referral_tier_bps(10), 700);
        assert_eq!(referral_tier_bps(250), 700);
    }

    #[test]
    fn test_referral_commission() {
        // 3% of $1000
        assert_eq!(referral_commission(100_000, 300).unwrap(), 3_000);
        // 7% of $2500
        assert_eq!(referral_commission(250_000, 700).unwrap(), 17_500);
    }

    #[test]
    fn test_duration_cash_bonus_tiers() {
        // 3-month plans never carry a bonus
        assert_eq!(duration_cash_bonus(3, 1_000_000), 0);
        // below the $500 threshold
        assert_eq!(duration_cash_bonus(6, 40_000), 0);
        // $500..$1000 tier
        assert_eq!(duration_cash_bonus(6, 60_000), 20_000);
        assert_eq!(duration_cash_bonus(12, 99_999), 20_000);
        // $1000+ tier
        assert_eq!(duration_cash_bonus(6, 120_000), 50_000);
        assert_eq!(duration_cash_bonus(12, 100_000), 50_000);
    }

    #[test]
    fn test_bonus_unlock_days() {
        assert_eq!(bonus_unlock_days(6), 90);
        assert_eq!(bonus_unlock_days(12), 180);
    }

    #[test]
    fn test_same_day_buckets() {
        let t = 1_700_000_000;
        let day_start = t - t % SECONDS_PER_DAY;
        assert!(same_day(day_start, day_start + SECONDS_PER_DAY - 1));
        assert!(!same_day(day_start, day_start + SECONDS_PER_DAY));
        assert!(!same_day(day_start - 1, day_start));
    }
}

// utils/validation.rs
use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakevestError;

/// Validate a plan duration in months
pub fn validate_duration(duration_months: u8) -> Result<()> {
    if !ALLOWED_DURATIONS.contains(&duration_months) {
        return Err(StakevestError::InvalidDuration.into());
    }
    Ok(())
}

/// Validate a principal amount against a plan's bounds
pub fn validate_plan_amount(amount: u64, min: u64, max: u64) -> Result<()> {
    if amount < min || amount > max {
        return Err(StakevestError::AmountOutOfPlanRange.into());
    }
    Ok(())
}

/// Validate a referrer key against the investor being registered
pub fn validate_referrer(owner: Pubkey, referrer: Option<Pubkey>) -> Result<()> {
    if let Some(referrer_key) = referrer {
        if referrer_key == owner {
            return Err(StakevestError::CannotReferYourself.into());
        }
        if referrer_key == Pubkey::default() {
            return Err(StakevestError::InvalidReferrer.into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_duration() {
        assert!(validate_duration(3).is_ok());
        assert!(validate_duration(6).is_ok());
        assert!(validate_duration(12).is_ok());
        assert!(validate_duration(0).is_err());
        assert!(validate_duration(9).is_err());
    }

    #[test]
    fn test_validate_plan_amount_bounds() {
        assert!(validate_plan_amount(10_000, 10_000, 99_999).is_ok());
        assert!(validate_plan_amount(99_999, 10_000, 99_999).is_ok());
        assert!(validate_plan_amount(9_999, 10_000, 99_999).is_err());
        assert!(validate_plan_amount(100_000, 10_000, 99_999).is_err());
    }

    #[test]
    fn test_validate_referrer_rejects_self() {
        let me = Pubkey::new_unique();
        assert!(validate_referrer(me, Some(me)).is_err());
        assert!(validate_referrer(me, Some(Pubkey::default())).is_err());
        assert!(validate_referrer(me, Some(Pubkey::new_unique())).is_ok());
        assert!(validate_referrer(me, None).is_ok());
    }
}

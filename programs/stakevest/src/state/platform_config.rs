// state/platform_config.rs
use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakevestError;

/// Plan tiers, ordered by principal range
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanTier {
    Starter = 0,
    Advanced = 1,
    Pro = 2,
    Elite = 3,
}

impl PlanTier {
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(PlanTier::Starter),
            1 => Some(PlanTier::Advanced),
            2 => Some(PlanTier::Pro),
            3 => Some(PlanTier::Elite),
            _ => None,
        }
    }
}

/// Immutable-by-default policy tables, seeded from constants.rs at
/// initialization. Calculators take their numbers from here rather than
/// from ambient globals so they stay independently testable.
#[account]
pub struct PlatformConfig {
    /// Admin authority who approves requests and may update config
    pub authority: Pubkey,

    /// Monthly base rate per plan (hundredths of a percent)
    pub plan_rates: [u16; PLAN_COUNT],

    /// Principal bounds per plan (cents)
    pub plan_min_amounts: [u64; PLAN_COUNT],
    pub plan_max_amounts: [u64; PLAN_COUNT],

    /// Monthly-rate bonus per allowed duration (3/6/12 months)
    pub duration_rate_bonuses: [u16; 3],

    /// Level-1 referral commission tiers (basis points)
    pub referral_tier_bps: [u16; 5],

    /// Level-2 referral commission (basis points)
    pub level2_commission_bps: u16,

    /// Bump seed for PDA
    pub bump: u8,
}

impl PlatformConfig {
    pub const SIZE: usize = 8 + // discriminator
        32 + // authority
        2 * PLAN_COUNT + // plan_rates
        8 * PLAN_COUNT + // plan_min_amounts
        8 * PLAN_COUNT + // plan_max_amounts
        2 * 3 + // duration_rate_bonuses
        2 * 5 + // referral_tier_bps
        2 + // level2_commission_bps
        1; // bump

    /// Create new config with the default policy tables
    pub fn new(authority: Pubkey, bump: u8) -> Self {
        Self {
            authority,
            plan_rates: PLAN_RATES,
            plan_min_amounts: PLAN_MIN_AMOUNTS,
            plan_max_amounts: PLAN_MAX_AMOUNTS,
            duration_rate_bonuses: DURATION_RATE_BONUSES,
            referral_tier_bps: REFERRAL_TIER_BPS,
            level2_commission_bps: LEVEL2_COMMISSION_BPS,
            bump,
        }
    }

    /// Monthly base rate for a plan
    pub fn plan_rate(&self, plan: PlanTier) -> u16 {
        self.plan_rates[plan.to_index()]
    }

    /// Principal bounds for a plan
    pub fn plan_bounds(&self, plan: PlanTier) -> (u64, u64) {
        let idx = plan.to_index();
        (self.plan_min_amounts[idx], self.plan_max_amounts[idx])
    }

    /// The plan whose principal range contains `amount`, preferring the
    /// highest tier. Elite is open-ended upward for reinvested principal.
    pub fn plan_for_amount(&self, amount: u64) -> Option<PlanTier> {
        for index in (0..PLAN_COUNT as u8).rev() {
            let plan = PlanTier::from_index(index)?;
            if amount >= self.plan_min_amounts[plan.to_index()] {
                return Some(plan);
            }
        }
        None
    }

    /// Duration rate bonus for an allowed duration
    pub fn duration_rate_bonus(&self, duration_months: u8) -> Result<u16> {
        let idx = ALLOWED_DURATIONS
            .iter()
            .position(|d| *d == duration_months)
            .ok_or(StakevestError::InvalidDuration)?;
        Ok(self.duration_rate_bonuses[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PlatformConfig {
        PlatformConfig::new(Pubkey::new_unique(), 255)
    }

    #[test]
    fn test_plan_tier_round_trip() {
        for index in 0..PLAN_COUNT as u8 {
            let plan = PlanTier::from_index(index).unwrap();
            assert_eq!(plan.to_index(), index as usize);
        }
        assert!(PlanTier::from_index(4).is_none());
    }

    #[test]
    fn test_plan_rates_and_bounds() {
        let config = config();
        assert_eq!(config.plan_rate(PlanTier::Starter), 1400);
        assert_eq!(config.plan_rate(PlanTier::Elite), 2200);
        assert_eq!(config.plan_bounds(PlanTier::Advanced), (100_000, 299_999));
    }

    #[test]
    fn test_plan_for_amount_prefers_highest_tier() {
        let config = config();
        assert_eq!(config.plan_for_amount(5_000), None);
        assert_eq!(config.plan_for_amount(10_000), Some(PlanTier::Starter));
        assert_eq!(config.plan_for_amount(150_000), Some(PlanTier::Advanced));
        assert_eq!(config.plan_for_amount(300_000), Some(PlanTier::Pro));
        // past the Elite minimum everything reads Elite
        assert_eq!(config.plan_for_amount(20_000_000), Some(PlanTier::Elite));
    }

    #[test]
    fn test_duration_rate_bonus() {
        let config = config();
        assert_eq!(config.duration_rate_bonus(3).unwrap(), 0);
        assert_eq!(config.duration_rate_bonus(6).unwrap(), 150);
        assert_eq!(config.duration_rate_bonus(12).unwrap(), 300);
        assert!(config.duration_rate_bonus(9).is_err());
    }
}

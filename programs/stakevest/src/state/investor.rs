// state/investor.rs
use anchor_lang::prelude::*;

use crate::error::StakevestError;
use crate::utils::calculations::referral_tier_bps;

/// A registered wallet. Carries the referral linkage and the running
/// referral aggregates used by the stats read model.
#[account]
pub struct Investor {
    pub owner: Pubkey,

    /// Direct (level-1) referrer, fixed at registration
    pub referrer: Option<Pubkey>,

    /// This investor's ordinal position among the referrer's direct
    /// referrals, assigned once at registration. The commission rate a
    /// referral earns is locked to this rank and never recomputed.
    pub referral_rank: u32,

    /// How many direct referrals this investor has registered
    pub direct_referrals: u32,

    /// Lifetime referral commission credited (cents)
    pub total_referral_earned: u64,

    /// Referral commission already withdrawn or reinvested (cents)
    pub referral_withdrawn: u64,

    /// Number of investments ever created, used as the next PDA index
    pub investment_count: u64,

    pub created_at: i64,
    pub bump: u8,
}

/// Read model for the referral dashboard. `current_tier_bps` is the rate a
/// NEW referral would currently earn; each past earning keeps the rate that
/// was locked in at its own rank.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferralStats {
    pub level1_count: u32,
    pub current_tier_bps: u16,
    pub total_earnings: u64,
    pub withdrawn_earnings: u64,
    pub pending_earnings: u64,
}

impl Investor {
    pub const SIZE: usize = 8 + // discriminator
        32 + // owner
        1 + 32 + // referrer Option
        4 + // referral_rank
        4 + // direct_referrals
        8 + // total_referral_earned
        8 + // referral_withdrawn
        8 + // investment_count
        8 + // created_at
        1; // bump

    pub fn new(owner: Pubkey, referrer: Option<Pubkey>, created_at: i64, bump: u8) -> Self {
        Self {
            owner,
            referrer,
            referral_rank: 0,
            direct_referrals: 0,
            total_referral_earned: 0,
            referral_withdrawn: 0,
            investment_count: 0,
            created_at,
            bump,
        }
    }

    /// Register a new direct referral and return the ordinal rank the
    /// newcomer is locked to (1 for the first-ever referral).
    pub fn register_referral(&mut self) -> Result<u32> {
        self.direct_referrals = self
            .direct_referrals
            .checked_add(1)
            .ok_or(StakevestError::MathOverflow)?;
        Ok(self.direct_referrals)
    }

    pub fn credit_referral_earning(&mut self, amount: u64) -> Result<()> {
        self.total_referral_earned = self
            .total_referral_earned
            .checked_add(amount)
            .ok_or(StakevestError::MathOverflow)?;
        Ok(())
    }

    pub fn settle_referral_earnings(&mut self, amount: u64) -> Result<()> {
        self.referral_withdrawn = self
            .referral_withdrawn
            .checked_add(amount)
            .ok_or(StakevestError::MathOverflow)?;
        Ok(())
    }

    pub fn referral_stats(&self) -> ReferralStats {
        ReferralStats {
            level1_count: self.direct_referrals,
            current_tier_bps: referral_tier_bps(self.direct_referrals),
            total_earnings: self.total_referral_earned,
            withdrawn_earnings: self.referral_withdrawn,
            pending_earnings: self
                .total_referral_earned
                .saturating_sub(self.referral_withdrawn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn investor() -> Investor {
        Investor::new(Pubkey::new_unique(), None, 1_700_000_000, 255)
    }

    #[test]
    fn test_register_referral_assigns_ordinal_ranks() {
        let mut referrer = investor();
        assert_eq!(referrer.register_referral().unwrap(), 1);
        assert_eq!(referrer.register_referral().unwrap(), 2);
        assert_eq!(referrer.register_referral().unwrap(), 3);
        assert_eq!(referrer.direct_referrals, 3);
    }

    #[test]
    fn test_referral_stats_pending_and_tier() {
        let mut referrer = investor();
        for _ in 0..4 {
            referrer.register_referral().unwrap();
        }
        referrer.credit_referral_earning(9_000).unwrap();
        referrer.settle_referral_earnings(2_500).unwrap();

        let stats = referrer.referral_stats();
        assert_eq!(stats.level1_count, 4);
        // rate shown for a prospective referral, tierPercent(level1Count)
        assert_eq!(stats.current_tier_bps, 500);
        assert_eq!(stats.total_earnings, 9_000);
        assert_eq!(stats.withdrawn_earnings, 2_500);
        assert_eq!(stats.pending_earnings, 6_500);
    }

    #[test]
    fn test_referral_stats_zero_referrals() {
        let stats = investor().referral_stats();
        assert_eq!(stats.level1_count, 0);
        assert_eq!(stats.current_tier_bps, 300);
        assert_eq!(stats.pending_earnings, 0);
    }
}

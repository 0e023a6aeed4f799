// state/platform_state.rs
use anchor_lang::prelude::*;

/// Aggregate platform statistics and the pause switch.
#[account]
pub struct PlatformState {
    pub authority: Pubkey,
    pub treasury_wallet: Pubkey,
    pub total_investors: u64,
    pub total_invested: u64,
    pub total_withdrawn: u64,
    pub total_referral_paid: u64,
    pub total_investments: u64,
    pub is_paused: bool,
    pub created_at: i64,
    pub bump: u8,
}

impl PlatformState {
    pub const SIZE: usize = 8 + // discriminator
        32 + // authority
        32 + // treasury_wallet
        8 + // total_investors
        8 + // total_invested
        8 + // total_withdrawn
        8 + // total_referral_paid
        8 + // total_investments
        1 + // is_paused
        8 + // created_at
        1; // bump

    pub fn new(authority: Pubkey, treasury_wallet: Pubkey, created_at: i64, bump: u8) -> Self {
        Self {
            authority,
            treasury_wallet,
            total_investors: 0,
            total_invested: 0,
            total_withdrawn: 0,
            total_referral_paid: 0,
            total_investments: 0,
            is_paused: false,
            created_at,
            bump,
        }
    }

    pub fn add_investor(&mut self) {
        self.total_investors += 1;
    }

    pub fn add_investment(&mut self, amount: u64) {
        self.total_investments += 1;
        self.total_invested = self.total_invested.saturating_add(amount);
    }

    pub fn add_principal(&mut self, amount: u64) {
        self.total_invested = self.total_invested.saturating_add(amount);
    }

    pub fn add_withdrawal(&mut self, amount: u64) {
        self.total_withdrawn = self.total_withdrawn.saturating_add(amount);
    }

    pub fn add_referral_payment(&mut self, amount: u64) {
        self.total_referral_paid = self.total_referral_paid.saturating_add(amount);
    }

    pub fn toggle_pause(&mut self) {
        self.is_paused = !self.is_paused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> PlatformState {
        PlatformState::new(Pubkey::new_unique(), Pubkey::new_unique(), 1_700_000_000, 255)
    }

    #[test]
    fn test_stat_counters_accumulate() {
        let mut state = state();
        state.add_investor();
        state.add_investment(120_000);
        state.add_principal(30_000);
        state.add_withdrawal(7_400);
        state.add_referral_payment(3_000);

        assert_eq!(state.total_investors, 1);
        assert_eq!(state.total_investments, 1);
        // an upgrade's additional principal lands in the same total
        assert_eq!(state.total_invested, 150_000);
        assert_eq!(state.total_withdrawn, 7_400);
        assert_eq!(state.total_referral_paid, 3_000);
    }

    #[test]
    fn test_toggle_pause_flips() {
        let mut state = state();
        assert!(!state.is_paused);
        state.toggle_pause();
        assert!(state.is_paused);
        state.toggle_pause();
        assert!(!state.is_paused);
    }
}

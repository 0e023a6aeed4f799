use anchor_lang::prelude::*;

// Import modules
pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

// Re-export for convenience
pub use constants::*;
pub use error::*;
pub use state::*;

// Only the account contexts; the handler functions stay behind their
// modules so they cannot shadow the generated entrypoints.
pub use instructions::{
    activate_investment::{ActivateInvestment, CancelInvestment},
    admin::AdminAction,
    create_investment::CreateInvestment,
    create_investor::CreateInvestor,
    initialize::Initialize,
    process_upgrade::ProcessUpgrade,
    process_withdrawal::{ProcessEarlyWithdrawal, ProcessFullWithdrawal, ProcessPartialWithdrawal},
    record_referral::{RecordLevel1Commission, RecordLevel2Commission},
    referral_withdraw::{ReinvestReferralEarnings, WithdrawReferralEarnings},
    request_upgrade::RequestUpgrade,
    request_withdrawal::{RequestEarlyWithdrawal, RequestFullWithdrawal, RequestPartialWithdrawal},
    snapshot::{GetInvestmentSnapshot, GetReferralStats},
};

// The #[program] macro references the generated `__client_accounts_*`
// modules at the crate root, so they must be re-exported alongside the
// account contexts above.
#[doc(hidden)]
pub(crate) use instructions::{
    activate_investment::{__client_accounts_activate_investment, __client_accounts_cancel_investment},
    admin::__client_accounts_admin_action,
    create_investment::__client_accounts_create_investment,
    create_investor::__client_accounts_create_investor,
    initialize::__client_accounts_initialize,
    process_upgrade::__client_accounts_process_upgrade,
    process_withdrawal::{
        __client_accounts_process_early_withdrawal, __client_accounts_process_full_withdrawal,
        __client_accounts_process_partial_withdrawal,
    },
    record_referral::{
        __client_accounts_record_level1_commission, __client_accounts_record_level2_commission,
    },
    referral_withdraw::{
        __client_accounts_reinvest_referral_earnings, __client_accounts_withdraw_referral_earnings,
    },
    request_upgrade::__client_accounts_request_upgrade,
    request_withdrawal::{
        __client_accounts_request_early_withdrawal, __client_accounts_request_full_withdrawal,
        __client_accounts_request_partial_withdrawal,
    },
    snapshot::{__client_accounts_get_investment_snapshot, __client_accounts_get_referral_stats},
};

declare_id!("AZJz63Y6g5MRiAPo7vMpjMYRZF4eBK5Pn88YPXDBf7H4");

#[program]
pub mod stakevest {
    use super::*;

    /// Initialize the platform with its config and state accounts
    pub fn initialize(ctx: Context<Initialize>, treasury_wallet: Pubkey) -> Result<()> {
        instructions::initialize::handler(ctx, treasury_wallet)
    }

    /// Register a wallet, optionally under a referrer
    pub fn create_investor(
        ctx: Context<CreateInvestor>,
        referrer_key: Option<Pubkey>,
    ) -> Result<()> {
        instructions::create_investor::handler(ctx, referrer_key)
    }

    /// Create a Pending investment in a plan for a duration
    pub fn create_investment(
        ctx: Context<CreateInvestment>,
        plan: u8,
        duration_months: u8,
        amount: u64,
    ) -> Result<()> {
        instructions::create_investment::handler(ctx, plan, duration_months, amount)
    }

    /// Admin: activate a Pending investment once the deposit settled
    pub fn activate_investment(ctx: Context<ActivateInvestment>) -> Result<()> {
        instructions::activate_investment::activate(ctx)
    }

    /// Cancel a Pending investment (owner or admin)
    pub fn cancel_investment(ctx: Context<CancelInvestment>) -> Result<()> {
        instructions::activate_investment::cancel(ctx)
    }

    /// Admin: credit the level-1 referral commission for an activation
    pub fn record_level1_commission(ctx: Context<RecordLevel1Commission>) -> Result<()> {
        instructions::record_referral::record_level1(ctx)
    }

    /// Admin: credit the level-2 referral commission for an activation
    pub fn record_level2_commission(ctx: Context<RecordLevel2Commission>) -> Result<()> {
        instructions::record_referral::record_level2(ctx)
    }

    /// Request an amount or duration upgrade on an active investment
    pub fn request_upgrade(
        ctx: Context<RequestUpgrade>,
        kind: u8,
        new_plan: u8,
        additional_amount: u64,
        new_duration_months: u8,
    ) -> Result<()> {
        instructions::request_upgrade::handler(ctx, kind, new_plan, additional_amount, new_duration_months)
    }

    /// Admin: approve a pending upgrade request
    pub fn approve_upgrade(ctx: Context<ProcessUpgrade>) -> Result<()> {
        instructions::process_upgrade::approve(ctx)
    }

    /// Admin: reject a pending upgrade request
    pub fn reject_upgrade(ctx: Context<ProcessUpgrade>) -> Result<()> {
        instructions::process_upgrade::reject(ctx)
    }

    /// Request a profit withdrawal or a duration cash bonus claim
    pub fn request_partial_withdrawal(
        ctx: Context<RequestPartialWithdrawal>,
        amount: u64,
        kind: u8,
        destination: Pubkey,
    ) -> Result<()> {
        instructions::request_withdrawal::request_partial(ctx, amount, kind, destination)
    }

    /// Request an early exit within the 30-day window
    pub fn request_early_withdrawal(
        ctx: Context<RequestEarlyWithdrawal>,
        destination: Pubkey,
    ) -> Result<()> {
        instructions::request_withdrawal::request_early(ctx, destination)
    }

    /// Request the maturity payout
    pub fn request_full_withdrawal(
        ctx: Context<RequestFullWithdrawal>,
        destination: Pubkey,
    ) -> Result<()> {
        instructions::request_withdrawal::request_full(ctx, destination)
    }

    /// Admin: approve a pending partial withdrawal
    pub fn approve_partial_withdrawal(ctx: Context<ProcessPartialWithdrawal>) -> Result<()> {
        instructions::process_withdrawal::approve_partial(ctx)
    }

    /// Admin: reject a pending partial withdrawal
    pub fn reject_partial_withdrawal(ctx: Context<ProcessPartialWithdrawal>) -> Result<()> {
        instructions::process_withdrawal::reject_partial(ctx)
    }

    /// Admin: approve a pending early withdrawal
    pub fn approve_early_withdrawal(ctx: Context<ProcessEarlyWithdrawal>) -> Result<()> {
        instructions::process_withdrawal::approve_early(ctx)
    }

    /// Admin: reject a pending early withdrawal
    pub fn reject_early_withdrawal(ctx: Context<ProcessEarlyWithdrawal>) -> Result<()> {
        instructions::process_withdrawal::reject_early(ctx)
    }

    /// Admin: approve a pending full withdrawal
    pub fn approve_full_withdrawal(ctx: Context<ProcessFullWithdrawal>) -> Result<()> {
        instructions::process_withdrawal::approve_full(ctx)
    }

    /// Admin: reject a pending full withdrawal
    pub fn reject_full_withdrawal(ctx: Context<ProcessFullWithdrawal>) -> Result<()> {
        instructions::process_withdrawal::reject_full(ctx)
    }

    /// Pay out unlocked referral earnings passed as remaining accounts
    pub fn withdraw_referral_earnings(
        ctx: Context<WithdrawReferralEarnings>,
        destination: Pubkey,
    ) -> Result<()> {
        instructions::referral_withdraw::withdraw(ctx, destination)
    }

    /// Reinvest unlocked referral earnings into one of your investments
    pub fn reinvest_referral_earnings(ctx: Context<ReinvestReferralEarnings>) -> Result<()> {
        instructions::referral_withdraw::reinvest(ctx)
    }

    /// Log a point-in-time view of an investment
    pub fn get_investment_snapshot(ctx: Context<GetInvestmentSnapshot>) -> Result<()> {
        instructions::snapshot::get_investment_snapshot(ctx)
    }

    /// Log the referral dashboard figures for an investor
    pub fn get_referral_stats(ctx: Context<GetReferralStats>) -> Result<()> {
        instructions::snapshot::get_referral_stats(ctx)
    }

    /// Admin: flip the platform pause switch
    pub fn toggle_pause(ctx: Context<AdminAction>) -> Result<()> {
        instructions::admin::toggle_pause(ctx)
    }

    /// Admin: point payouts at a new treasury wallet
    pub fn update_treasury_wallet(ctx: Context<AdminAction>, new_treasury: Pubkey) -> Result<()> {
        instructions::admin::update_treasury_wallet(ctx, new_treasury)
    }
}

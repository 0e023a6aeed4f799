// error.rs
use anchor_lang::prelude::*;

#[error_code]
pub enum StakevestError {
    // 🏦 PLAN / CREATION
    #[msg("Unknown plan tier")]
    UnknownPlan,

    #[msg("Amount is outside the plan's principal range")]
    AmountOutOfPlanRange,

    #[msg("Duration must be 3, 6 or 12 months")]
    InvalidDuration,

    #[msg("New duration must be longer than the current one")]
    DurationNotExtended,

    // 🔁 LIFECYCLE / STATE MACHINE
    #[msg("Investment is not pending")]
    InvestmentNotPending,

    #[msg("Investment is not active")]
    InvestmentNotActive,

    #[msg("Investment has not reached its end date")]
    InvestmentNotMatured,

    #[msg("Request has already been processed")]
    RequestNotPending,

    // 💸 WITHDRAWALS
    #[msg("Requested amount exceeds available profit")]
    InsufficientProfit,

    #[msg("Withdrawal amount must be greater than zero")]
    InvalidWithdrawalAmount,

    #[msg("Early withdrawal is only available within the first 30 days")]
    EarlyWithdrawalWindowClosed,

    #[msg("A withdrawal request is already pending for this investment")]
    WithdrawalAlreadyRequested,

    // ⚙️ UPGRADES
    #[msg("An upgrade request is already pending for this investment")]
    PendingUpgradeExists,

    #[msg("Cannot upgrade twice within the same day")]
    SameDayUpgrade,

    #[msg("Invalid upgrade kind")]
    InvalidUpgradeKind,

    // 🎁 DURATION CASH BONUS
    #[msg("No cash bonus is defined for this investment")]
    NoBonusAvailable,

    #[msg("Cash bonus has already been withdrawn")]
    BonusAlreadyWithdrawn,

    #[msg("Cash bonus unlocks after half the plan duration")]
    BonusLocked,

    // 🤝 REFERRALS
    #[msg("Cannot refer yourself")]
    CannotReferYourself,

    #[msg("Referrer account does not match the recorded referrer")]
    InvalidReferrer,

    #[msg("Referral earning is still inside the 31-day lock")]
    ReferralEarningLocked,

    #[msg("Referral earning has already been withdrawn")]
    ReferralEarningAlreadyWithdrawn,

    #[msg("Earning row does not match the investment account passed with it")]
    EarningInvestmentMismatch,

    #[msg("No unlocked referral earnings to withdraw")]
    NothingToWithdraw,

    // 🚫 ADMIN & PLATFORM
    #[msg("Unauthorized admin action")]
    UnauthorizedAdmin,

    #[msg("Platform is paused")]
    PlatformPaused,

    // 🧮 MISC
    #[msg("Math overflow")]
    MathOverflow,
}

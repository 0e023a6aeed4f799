// Instruction module exports
pub mod activate_investment;
pub mod admin;
pub mod create_investment;
pub mod create_investor;
pub mod initialize;
pub mod process_upgrade;
pub mod process_withdrawal;
pub mod record_referral;
pub mod referral_withdraw;
pub mod request_upgrade;
pub mod request_withdrawal;
pub mod snapshot;

// state/requests.rs
//
// Pending-request rows targeting one investment each. A request's status
// changes exactly once, from Pending to a terminal state; processing a
// non-Pending request is rejected, which is what makes approval
// at-most-once even under concurrent attempts.
use anchor_lang::prelude::*;

use crate::error::StakevestError;
use crate::state::investment::WithdrawKind;
use crate::state::platform_config::PlanTier;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestStatus {
    Pending = 0,
    Approved = 1,
    Rejected = 2,
}

impl RequestStatus {
    pub fn ensure_pending(&self) -> Result<()> {
        if *self != RequestStatus::Pending {
            return Err(StakevestError::RequestNotPending.into());
        }
        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpgradeKind {
    AmountIncrease = 0,
    DurationExtend = 1,
}

/// A requested upgrade. Mutates its parent investment only on approval and
/// is immutable afterward; the old/new pairs record what the approval
/// actually applied.
#[account]
pub struct UpgradeRequest {
    pub investment: Pubkey,
    pub owner: Pubkey,
    pub kind: UpgradeKind,
    pub new_plan: PlanTier,
    pub additional_amount: u64,
    pub new_duration_months: u8,
    pub old_principal: u64,
    pub new_principal: u64,
    pub old_rate: u16,
    pub new_rate: u16,
    pub accumulated_interest: u64,
    pub status: RequestStatus,
    pub requested_at: i64,
    pub processed_at: i64,
    pub bump: u8,
}

impl UpgradeRequest {
    pub const SIZE: usize = 8 + // discriminator
        32 + // investment
        32 + // owner
        1 + // kind
        1 + // new_plan
        8 + // additional_amount
        1 + // new_duration_months
        8 + // old_principal
        8 + // new_principal
        2 + // old_rate
        2 + // new_rate
        8 + // accumulated_interest
        1 + // status
        8 + // requested_at
        8 + // processed_at
        1; // bump
}

/// A partial withdrawal intent. `requested_kind` is the explicit flag set
/// at creation; approval re-derives the authoritative classification from
/// the amount and records it in `resolved_kind`.
#[account]
pub struct PartialWithdrawal {
    pub investment: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub requested_kind: WithdrawKind,
    pub resolved_kind: WithdrawKind,
    pub destination: Pubkey,
    pub status: RequestStatus,
    pub requested_at: i64,
    pub processed_at: i64,
    pub bump: u8,
}

impl PartialWithdrawal {
    pub const SIZE: usize = 8 + // discriminator
        32 + // investment
        32 + // owner
        8 + // amount
        1 + // requested_kind
        1 + // resolved_kind
        32 + // destination
        1 + // status
        8 + // requested_at
        8 + // processed_at
        1; // bump
}

/// An early-exit intent. The payout and forfeited interest are computed at
/// request time for review; approval recomputes against live state.
#[account]
pub struct EarlyWithdrawal {
    pub investment: Pubkey,
    pub owner: Pubkey,
    pub days_invested: u64,
    pub forfeited_interest: u64,
    pub payout_amount: u64,
    pub destination: Pubkey,
    pub status: RequestStatus,
    pub requested_at: i64,
    pub processed_at: i64,
    pub bump: u8,
}

impl EarlyWithdrawal {
    pub const SIZE: usize = 8 + // discriminator
        32 + // investment
        32 + // owner
        8 + // days_invested
        8 + // forfeited_interest
        8 + // payout_amount
        32 + // destination
        1 + // status
        8 + // requested_at
        8 + // processed_at
        1; // bump
}

/// A maturity payout intent.
#[account]
pub struct FullWithdrawal {
    pub investment: Pubkey,
    pub owner: Pubkey,
    pub payout_amount: u64,
    pub destination: Pubkey,
    pub status: RequestStatus,
    pub requested_at: i64,
    pub processed_at: i64,
    pub bump: u8,
}

impl FullWithdrawal {
    pub const SIZE: usize = 8 + // discriminator
        32 + // investment
        32 + // owner
        8 + // payout_amount
        32 + // destination
        1 + // status
        8 + // requested_at
        8 + // processed_at
        1; // bump
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_pending_is_single_shot() {
        let mut status = RequestStatus::Pending;
        assert!(status.ensure_pending().is_ok());
        status = RequestStatus::Approved;
        let err = status.ensure_pending().unwrap_err();
        assert_eq!(err, StakevestError::RequestNotPending.into());
        status = RequestStatus::Rejected;
        assert!(status.ensure_pending().is_err());
    }
}

// instructions/create_investor.rs
use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::state::*;
use crate::utils::*;

/// Register a wallet. When a referrer is given, the newcomer's ordinal
/// rank among the referrer's direct referrals is assigned here and locked
/// for good; the commission rate tied to that rank never changes later.
pub fn handler(ctx: Context<CreateInvestor>, referrer_key: Option<Pubkey>) -> Result<()> {
    let clock = Clock::get()?;
    let platform_state = &mut ctx.accounts.platform_state;

    if platform_state.is_paused {
        return Err(StakevestError::PlatformPaused.into());
    }

    validate_referrer(ctx.accounts.owner.key(), referrer_key)?;

    let mut rank = 0u32;
    if let Some(referrer_key) = referrer_key {
        let referrer = ctx
            .accounts
            .referrer
            .as_mut()
            .ok_or(StakevestError::InvalidReferrer)?;
        if referrer.owner != referrer_key {
            return Err(StakevestError::InvalidReferrer.into());
        }
        rank = referrer.register_referral()?;
    }

    let investor = &mut ctx.accounts.investor;
    **investor = Investor::new(
        ctx.accounts.owner.key(),
        referrer_key,
        clock.unix_timestamp,
        ctx.bumps.investor,
    );
    investor.referral_rank = rank;

    platform_state.add_investor();

    msg!("Investor registered: {}", investor.owner);
    if let Some(referrer_key) = referrer_key {
        msg!("Referrer: {} (referral #{})", referrer_key, rank);
        msg!(
            "Locked level-1 rate: {} bps",
            referral_tier_bps(rank)
        );
    }

    Ok(())
}

#[derive(Accounts)]
pub struct CreateInvestor<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = Investor::SIZE,
        seeds = [INVESTOR_SEED, owner.key().as_ref()],
        bump
    )]
    pub investor: Account<'info, Investor>,

    /// Referrer's investor account; required when referrer_key is set
    #[account(mut)]
    pub referrer: Option<Account<'info, Investor>>,

    #[account(
        mut,
        seeds = [PLATFORM_STATE_SEED],
        bump = platform_state.bump
    )]
    pub platform_state: Account<'info, PlatformState>,

    pub system_program: Program<'info, System>,
}
